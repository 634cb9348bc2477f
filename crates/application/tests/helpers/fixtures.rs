use super::mock_ports::{MockDnsExchange, MockSystemResolver};
use super::packets::{empty, referral, rr, with_rcode, PacketBuilder};
use dnsverify_application::DelegationResolver;
use dnsverify_domain::{LookupConfig, RecordType, ResponseCode};
use std::sync::Arc;

pub const ROOT_A: &str = "198.41.0.4";
pub const ORG_NS: &str = "199.19.56.1";
pub const IANA_A: &str = "199.43.135.53";
pub const IANA_B: &str = "199.43.133.53";
pub const LOCAL_RESOLVER: &str = "8.8.8.8";

/// Names under example.org that the fixture knows about.
const EXAMPLE_ORG_HOSTS: &[&str] = &[
    "www.example.org",
    "alias.example.org",
    "alias2.example.org",
    "chained.example.org",
    "stray.example.org",
    "mismatch.example.org",
    "wrong-target.example.org",
    "loop-a.example.org",
    "loop-b.example.org",
    "flaky.example.org",
    "refused.example.org",
    "deep1.example.org",
    "deep2.example.org",
    "deep3.example.org",
    "deep4.example.org",
    "deep5.example.org",
    "deep6.example.org",
];

/// root -> org -> example.org, with a handful of aliases inside example.org.
pub fn example_org_exchange() -> MockDnsExchange {
    let exchange = MockDnsExchange::new();

    exchange.respond(
        ROOT_A,
        "org",
        RecordType::NS,
        referral("org", &[("a0.org.afilias-nst.info", Some(ORG_NS))]),
    );
    exchange.respond(
        ORG_NS,
        "example.org",
        RecordType::NS,
        referral(
            "example.org",
            &[
                ("a.iana-servers.net", Some(IANA_A)),
                ("b.iana-servers.net", Some(IANA_B)),
            ],
        ),
    );
    exchange.respond(
        IANA_A,
        "example.org",
        RecordType::NS,
        PacketBuilder::new("example.org", RecordType::NS)
            .answer(rr("example.org", RecordType::NS, "a.iana-servers.net"))
            .answer(rr("example.org", RecordType::NS, "b.iana-servers.net"))
            .build(),
    );

    for host in EXAMPLE_ORG_HOSTS {
        exchange.respond(IANA_A, host, RecordType::NS, empty(host, RecordType::NS));
    }
    exchange.respond(
        IANA_A,
        "missing.example.org",
        RecordType::NS,
        with_rcode("missing.example.org", RecordType::NS, ResponseCode::NXDomain),
    );

    exchange.respond(
        IANA_A,
        "example.org",
        RecordType::A,
        PacketBuilder::new("example.org", RecordType::A)
            .answer(rr("example.org", RecordType::A, "23.215.0.132"))
            .answer(rr("example.org", RecordType::A, "23.215.0.133"))
            .build(),
    );
    exchange.respond(
        IANA_A,
        "example.org",
        RecordType::AAAA,
        PacketBuilder::new("example.org", RecordType::AAAA)
            .answer(rr("example.org", RecordType::AAAA, "2600:1406:bc00:53::b81e:94c8"))
            .build(),
    );

    exchange.respond(
        IANA_A,
        "www.example.org",
        RecordType::CNAME,
        PacketBuilder::new("www.example.org", RecordType::CNAME)
            .answer(rr("www.example.org", RecordType::CNAME, "www.example.org-v2.edgesuite.net"))
            .build(),
    );

    for record_type in [RecordType::A, RecordType::AAAA, RecordType::CNAME] {
        exchange.respond(
            IANA_A,
            "alias.example.org",
            record_type,
            PacketBuilder::new("alias.example.org", record_type)
                .answer(rr("alias.example.org", RecordType::CNAME, "example.org"))
                .build(),
        );
    }

    // BIND-style reply: the alias plus the zone's NS set and glue.
    exchange.respond(
        IANA_A,
        "alias2.example.org",
        RecordType::A,
        PacketBuilder::new("alias2.example.org", RecordType::A)
            .answer(rr("alias2.example.org", RecordType::CNAME, "example.org"))
            .authority(rr("example.org", RecordType::NS, "a.iana-servers.net"))
            .additional(rr("a.iana-servers.net", RecordType::A, IANA_A))
            .build(),
    );
    exchange.respond(
        IANA_A,
        "chained.example.org",
        RecordType::A,
        PacketBuilder::new("chained.example.org", RecordType::A)
            .answer(rr("unrelated.example.net", RecordType::A, "192.0.2.99"))
            .answer(rr("chained.example.org", RecordType::CNAME, "example.org"))
            .answer(rr("example.org", RecordType::A, "23.215.0.132"))
            .build(),
    );
    exchange.respond(
        IANA_A,
        "stray.example.org",
        RecordType::A,
        PacketBuilder::new("stray.example.org", RecordType::A)
            .answer(rr("other.example.net", RecordType::CNAME, "example.org"))
            .answer(rr("other.example.net", RecordType::A, "192.0.2.99"))
            .additional(rr("a.iana-servers.net", RecordType::A, IANA_A))
            .build(),
    );

    exchange.respond(
        IANA_A,
        "mismatch.example.org",
        RecordType::CNAME,
        PacketBuilder::new("mismatch.example.org", RecordType::CNAME)
            .answer(rr("mismatch.example.org", RecordType::CNAME, "wrong-target.example.org"))
            .build(),
    );
    exchange.respond(
        IANA_A,
        "wrong-target.example.org",
        RecordType::CNAME,
        empty("wrong-target.example.org", RecordType::CNAME),
    );

    exchange.respond(
        IANA_A,
        "loop-a.example.org",
        RecordType::A,
        PacketBuilder::new("loop-a.example.org", RecordType::A)
            .answer(rr("loop-a.example.org", RecordType::CNAME, "loop-b.example.org"))
            .build(),
    );
    exchange.respond(
        IANA_A,
        "loop-b.example.org",
        RecordType::A,
        PacketBuilder::new("loop-b.example.org", RecordType::A)
            .answer(rr("loop-b.example.org", RecordType::CNAME, "loop-a.example.org"))
            .build(),
    );

    for i in 1..=5 {
        let name = format!("deep{}.example.org", i);
        let next = format!("deep{}.example.org", i + 1);
        exchange.respond(
            IANA_A,
            &name,
            RecordType::A,
            PacketBuilder::new(&name, RecordType::A)
                .answer(rr(&name, RecordType::CNAME, &next))
                .build(),
        );
    }

    exchange.respond(
        IANA_A,
        "flaky.example.org",
        RecordType::A,
        with_rcode("flaky.example.org", RecordType::A, ResponseCode::FormErr),
    );
    exchange.respond(
        IANA_B,
        "flaky.example.org",
        RecordType::A,
        PacketBuilder::new("flaky.example.org", RecordType::A)
            .answer(rr("flaky.example.org", RecordType::A, "192.0.2.7"))
            .build(),
    );

    exchange.respond(
        IANA_A,
        "refused.example.org",
        RecordType::A,
        with_rcode("refused.example.org", RecordType::A, ResponseCode::Refused),
    );

    exchange.respond(
        IANA_A,
        "missing.example.org",
        RecordType::A,
        with_rcode("missing.example.org", RecordType::A, ResponseCode::NXDomain),
    );

    exchange
}

/// `glueless.test` is served by `ns.helper.test`, whose address only a
/// second walk can find.
pub fn glueless_exchange() -> MockDnsExchange {
    let exchange = MockDnsExchange::new();

    exchange.respond(
        ROOT_A,
        "test",
        RecordType::NS,
        referral("test", &[("ns1.nic.test", Some("10.0.0.1"))]),
    );
    exchange.respond(
        "10.0.0.1",
        "glueless.test",
        RecordType::NS,
        referral("glueless.test", &[("ns.helper.test", None)]),
    );
    exchange.respond(
        "10.0.0.1",
        "helper.test",
        RecordType::NS,
        referral("helper.test", &[("ns1.helper.test", Some("10.0.0.2"))]),
    );
    exchange.respond(
        "10.0.0.2",
        "ns.helper.test",
        RecordType::NS,
        empty("ns.helper.test", RecordType::NS),
    );
    exchange.respond(
        "10.0.0.2",
        "ns.helper.test",
        RecordType::A,
        PacketBuilder::new("ns.helper.test", RecordType::A)
            .answer(rr("ns.helper.test", RecordType::A, "10.0.0.3"))
            .build(),
    );
    exchange.respond(
        "10.0.0.3",
        "glueless.test",
        RecordType::A,
        PacketBuilder::new("glueless.test", RecordType::A)
            .answer(rr("glueless.test", RecordType::A, "10.0.0.4"))
            .build(),
    );

    exchange
}

pub fn resolver_with(exchange: &MockDnsExchange, system: MockSystemResolver) -> DelegationResolver {
    DelegationResolver::new(Arc::new(exchange.clone()), Arc::new(system))
}

pub fn resolver(exchange: &MockDnsExchange) -> DelegationResolver {
    resolver_with(exchange, MockSystemResolver::new().with_nameservers(&[LOCAL_RESOLVER]))
}

pub fn resolver_with_config(
    exchange: &MockDnsExchange,
    system: MockSystemResolver,
    lookup: LookupConfig,
) -> DelegationResolver {
    resolver_with(exchange, system).with_lookup_config(lookup)
}
