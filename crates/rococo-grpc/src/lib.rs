//! Rococo gRPC front end.
//!
//! Five tonic services over the shared translation layer in `rococo-core`:
//! artist, museum, painting, geo and userdata. Each service holds its store
//! as a trait object, so production wires in the Postgres adapters while
//! tests substitute in-memory stores.

pub mod config;
pub mod proto;
pub mod server;
pub mod status;

pub use config::ServerConfig;
