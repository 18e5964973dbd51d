//! PostgreSQL adapters for the Rococo port traits.
//!
//! Each adapter is a newtype wrapping `PgPool`. All SQL is runtime-checked
//! (`sqlx::query_as`, not the compile-time macros) so building the crate
//! needs no live database. Identifier columns are 16-byte `BYTEA` in the
//! time-first layout; conversion in and out of that layout lives entirely
//! in `rococo_core::id`, reached through the row types in [`rows`].

mod rows;
mod store;

pub use store::{PgArtistStore, PgCountryStore, PgMuseumStore, PgPaintingStore, PgUserStore};
