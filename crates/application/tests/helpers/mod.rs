#![allow(dead_code)]

mod fixtures;
mod mock_ports;
mod packets;

pub use fixtures::*;
pub use mock_ports::*;
pub use packets::*;
