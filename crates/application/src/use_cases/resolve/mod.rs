mod authority;
mod cname_chain;
mod glueless;
mod resolver;

pub use resolver::DelegationResolver;
