pub mod resolv_conf;
pub mod stub_resolver;

pub use resolv_conf::ResolvConf;
pub use stub_resolver::SystemStubResolver;
