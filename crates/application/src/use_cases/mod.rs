mod resolve;

pub use resolve::DelegationResolver;
