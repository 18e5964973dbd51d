//! Storage port traits. Implemented by rococo-postgres; the gRPC layer and
//! the generic service operations depend only on these.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RococoError;
use crate::page::{Page, PageRequest};
use crate::types::{Artist, Country, Museum, Painting, Record, User};

pub type Result<T> = std::result::Result<T, RococoError>;

/// Read side of a record store.
#[async_trait]
pub trait RecordReader<R: Record>: Send + Sync {
    /// Single-key read. `Ok(None)` means no row matched.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<R>>;

    /// All records whose id is in `ids`. Missing ids are omitted, never an
    /// error. `ids` is already deduplicated by the caller.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<R>>;

    /// One window of records under a stable ordering, plus the total match
    /// count. The filter applies to the record's display field.
    async fn search(&self, page: &PageRequest) -> Result<Page<R>>;
}

/// Write side of a record store.
#[async_trait]
pub trait RecordWriter<R: Record>: Send + Sync {
    /// Persist a new record exactly as given. The id is already assigned.
    async fn insert(&self, record: &R) -> Result<()>;

    /// Overwrite the mutable fields of the row `record.id()` names.
    async fn update(&self, record: &R) -> Result<()>;
}

#[async_trait]
pub trait ArtistStore: RecordReader<Artist> + RecordWriter<Artist> {
    /// Exact-name matches. An empty result is a valid answer.
    async fn find_all_by_name(&self, name: &str) -> Result<Vec<Artist>>;
}

pub trait MuseumStore: RecordReader<Museum> + RecordWriter<Museum> {}

#[async_trait]
pub trait PaintingStore: RecordReader<Painting> + RecordWriter<Painting> {
    /// One window of the paintings referencing `artist_id`.
    async fn search_by_artist(&self, artist_id: Uuid, page: &PageRequest)
        -> Result<Page<Painting>>;
}

/// Country catalog. Read-only: rows are seeded by migration and never
/// written through the service layer.
#[async_trait]
pub trait CountryStore: RecordReader<Country> {
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>>;
}

/// User profiles, addressed by username rather than id.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Provision a user row. Not exposed over gRPC; used by fixtures and
    /// out-of-band registration.
    async fn insert(&self, user: &User) -> Result<()>;

    /// Overwrite the mutable profile fields of the row `user.id()` names.
    async fn update(&self, user: &User) -> Result<()>;
}
