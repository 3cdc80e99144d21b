//! Country outline API — HTTP surface over the outline extractor.

pub mod config;
pub mod server;

pub use config::resolve_listen_addr;
pub use server::{router, serve, AppState};
