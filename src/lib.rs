pub mod api;
pub mod browse;
pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod logging;
pub mod lookup;
pub mod render;
pub mod retry;
pub mod sort;
pub mod state;
pub mod types;
