mod dns_server_mock;
mod wire;

pub use dns_server_mock::MockDnsServer;
pub use wire::{question_name, ReplyBuilder};
