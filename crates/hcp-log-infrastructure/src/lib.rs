pub mod config_storage;
pub mod http_api;
pub mod paths;

pub use crate::config_storage::ConfigStorage;
pub use crate::http_api::HttpRemoteApi;
