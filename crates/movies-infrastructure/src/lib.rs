//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for the Movies catalog.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML file, `MOVIES__` env) |
//! | [`logging`] | tracing-subscriber setup with optional JSON and rolling files |
//! | [`health`] | Backend health aggregation |
//! | [`di`] | Composition root wiring providers into services |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Infrastructure defaults |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod health;
pub mod logging;

pub use config::AppConfig;
pub use di::{AppContext, init_app};
