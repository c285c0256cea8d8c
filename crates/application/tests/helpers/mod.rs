#![allow(dead_code)]

mod messages;
mod mock_resolvers;

pub use messages::*;
pub use mock_resolvers::{MockBootstrapResolver, MockNameserverClient};
