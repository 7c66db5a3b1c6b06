//! Configuration types, one module per section

mod app;
mod cache;
mod logging;
mod search;
mod server;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use logging::LoggingConfig;
pub use search::SearchConfig;
pub use server::ServerConfig;
