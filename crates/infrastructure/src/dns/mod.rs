pub mod bootstrap;
pub mod client;
pub mod forwarding;
pub mod transport;

pub use bootstrap::UpstreamBootstrapResolver;
pub use client::UdpNameserverClient;
