//! Domain Port Interfaces
//!
//! Boundary contracts implemented by the outer layers. High-level code (the
//! gateway and entity services) depends on these traits only; concrete
//! backends live in `movies-providers`.
//!
//! - **providers/** - search backend and cache store ports

/// External service provider ports
pub mod providers;

pub use providers::{CacheEntryConfig, CacheProvider, SearchProvider};
