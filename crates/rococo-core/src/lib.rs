//! Rococo core domain layer.
//!
//! Everything the gRPC front end and the Postgres adapter share lives here:
//! the record types, the identifier codec, the page descriptor, the error
//! taxonomy, the storage port traits, and the generic service operations
//! (lookup, paginated search, batch-by-ids, create, update) that every
//! Rococo service is built from.
//!
//! This crate is pure: no sqlx, no tonic. Storage is reached only through
//! the traits in [`ports`], implemented by `rococo-postgres`.

pub mod error;
pub mod id;
pub mod page;
pub mod ports;
pub mod service;
pub mod types;

pub use error::RococoError;
pub use page::{Page, PageRequest};
pub use types::{Artist, Country, Museum, Painting, Record, User};
