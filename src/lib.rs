pub mod browser;
pub mod builders;
pub mod config;
pub mod domain;
pub mod fixtures;
pub mod helpers;
pub mod infrastructure;
pub mod presentation;
pub mod store;
pub mod ui;

pub use config::HarnessConfig;
pub use store::Store;
