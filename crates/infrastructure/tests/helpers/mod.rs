#![allow(dead_code)]

mod dns_server_mock;

pub use builders::*;
pub use dns_server_mock::MockDnsServer;
