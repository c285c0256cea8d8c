//! Configuration module for Ferrous Resolver
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Iterative resolution settings
//! - `bootstrap`: Upstream servers used once to fetch root hints
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod bootstrap;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use bootstrap::BootstrapConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
