//! Ferrous Resolver Domain Layer
pub mod command;
pub mod config;
pub mod dns_message;
pub mod dns_name;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use command::Command;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsMessage, ResponseCode};
pub use dns_name::DomainName;
pub use dns_query::DnsQuery;
pub use dns_record::{RecordData, RecordSet, RecordType};
pub use errors::DomainError;
