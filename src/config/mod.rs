mod schema;
pub mod loader;

pub use schema::{Config, GlobalConfig, ProbeConfig, FetchConfig};
