use dnsverify_domain::{DnsQuestion, DnsResponsePacket, RecordType, ResourceRecord, ResponseCode};

pub fn rr(name: &str, record_type: RecordType, data: &str) -> ResourceRecord {
    ResourceRecord::new(name, record_type, Some(300), data)
}

pub struct PacketBuilder {
    packet: DnsResponsePacket,
}

impl PacketBuilder {
    pub fn new(name: &str, record_type: RecordType) -> Self {
        Self {
            packet: DnsResponsePacket::new(
                0,
                ResponseCode::NoError,
                vec![DnsQuestion::new(name, record_type)],
            ),
        }
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.packet.rcode = rcode;
        self
    }

    pub fn answer(mut self, record: ResourceRecord) -> Self {
        self.packet.answers.push(record);
        self
    }

    pub fn authority(mut self, record: ResourceRecord) -> Self {
        self.packet.authorities.push(record);
        self
    }

    pub fn additional(mut self, record: ResourceRecord) -> Self {
        self.packet.additionals.push(record);
        self
    }

    pub fn build(self) -> DnsResponsePacket {
        self.packet
    }
}

/// A `NOERROR` reply with nothing in it.
pub fn empty(name: &str, record_type: RecordType) -> DnsResponsePacket {
    PacketBuilder::new(name, record_type).build()
}

pub fn with_rcode(name: &str, record_type: RecordType, rcode: ResponseCode) -> DnsResponsePacket {
    PacketBuilder::new(name, record_type).rcode(rcode).build()
}

/// A referral: NS records in the authority section, glue in additionals.
pub fn referral(zone: &str, nameservers: &[(&str, Option<&str>)]) -> DnsResponsePacket {
    let mut builder = PacketBuilder::new(zone, RecordType::NS);
    for (host, _) in nameservers {
        builder = builder.authority(rr(zone, RecordType::NS, host));
    }
    for (host, glue) in nameservers {
        if let Some(ip) = glue {
            builder = builder.additional(rr(host, RecordType::A, ip));
        }
    }
    builder.build()
}
