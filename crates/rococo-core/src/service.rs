//! Generic request/response operations shared by every Rococo service.
//!
//! Each operation decodes wire identifiers up front, performs exactly one
//! storage call, and maps the outcome onto the error taxonomy: a missing
//! row is `NotFound` with the offending key in the message, malformed input
//! is `InvalidArgument` before any storage work happens, and storage
//! failures pass through as `Internal`. Calls are stateless; nothing is
//! shared across them except the store itself.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::RococoError;
use crate::id;
use crate::page::{Page, PageRequest};
use crate::ports::{RecordReader, RecordWriter, Result};
use crate::types::Record;

fn not_found_by_id<R: Record>(id: Uuid) -> RococoError {
    RococoError::NotFound(format!("{} not found by id: {id}", R::KIND))
}

/// Decode `wire` and fetch the record it names.
pub async fn get_by_id<R, S>(store: &S, wire: &[u8]) -> Result<R>
where
    R: Record,
    S: RecordReader<R> + ?Sized,
{
    let id = id::decode(wire)?;
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found_by_id::<R>(id))
}

/// Existence check for natural-key lookups (country by name, user by
/// username): `None` becomes `NotFound` naming the key.
pub fn require<R: Record>(found: Option<R>, key_name: &str, key: &str) -> Result<R> {
    found.ok_or_else(|| {
        RococoError::NotFound(format!("{} not found by {key_name}: {key}", R::KIND))
    })
}

/// Decode a repeated wire identifier field into a deduplicated id list,
/// preserving first-seen order. One malformed element fails the whole call.
pub fn decode_id_set<B: AsRef<[u8]>>(wire_ids: &[B]) -> Result<Vec<Uuid>> {
    let mut seen = HashSet::with_capacity(wire_ids.len());
    let mut ids = Vec::with_capacity(wire_ids.len());
    for raw in wire_ids {
        let id = id::decode(raw.as_ref())?;
        if seen.insert(id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Batch lookup. Duplicates collapse, unknown ids are silently omitted,
/// and the empty set answers with the empty result.
pub async fn get_by_ids<R, S, B>(store: &S, wire_ids: &[B]) -> Result<Vec<R>>
where
    R: Record,
    S: RecordReader<R> + ?Sized,
    B: AsRef<[u8]>,
{
    let ids = decode_id_set(wire_ids)?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    store.find_by_ids(&ids).await
}

/// Paginated search. Pagination input is validated before the store is
/// touched; a page past the end yields an empty window with the true total.
pub async fn search<R, S>(
    store: &S,
    filter: Option<String>,
    page: i32,
    size: i32,
) -> Result<Page<R>>
where
    R: Record,
    S: RecordReader<R> + ?Sized,
{
    let page = PageRequest::new(page, size, filter)?;
    store.search(&page).await
}

/// Persist a new record, assigning a fresh identifier when the caller did
/// not supply one. Fields are stored verbatim; no defaulting here.
pub async fn create<R, S>(store: &S, mut record: R) -> Result<R>
where
    R: Record,
    S: RecordWriter<R> + ?Sized,
{
    if record.id().is_nil() {
        record.set_id(Uuid::new_v4());
    }
    store.insert(&record).await?;
    Ok(record)
}

/// Overwrite the mutable fields of the record `wire` names. The identifier
/// never changes, and a missing record is `NotFound`, never an implicit
/// create.
pub async fn update<R, S, F>(store: &S, wire: &[u8], apply: F) -> Result<R>
where
    R: Record,
    S: RecordReader<R> + RecordWriter<R> + ?Sized,
    F: FnOnce(R) -> R,
{
    let id = id::decode(wire)?;
    let existing = store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found_by_id::<R>(id))?;
    let mut updated = apply(existing);
    updated.set_id(id);
    store.update(&updated).await?;
    Ok(updated)
}
