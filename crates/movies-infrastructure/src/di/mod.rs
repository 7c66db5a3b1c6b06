//! Composition root
//!
//! Wiring only: providers are resolved from the linkme registries in
//! `movies-application` by the names found in [`AppConfig`](crate::AppConfig),
//! then handed to the entity services.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app};
