mod errors;
mod logging;
mod lookup;
mod output;
mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use lookup::{AuthoritySource, LookupConfig};
pub use output::{OutputConfig, OutputFormat};
pub use root::{CliOverrides, Config};
