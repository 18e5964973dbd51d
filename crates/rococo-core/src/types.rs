//! Rococo domain records. Pure value types, one per service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted domain entity addressed by a 128-bit identifier.
///
/// `KIND` is the display name used in not-found messages ("Artist not
/// found by id: ..."). The identifier is immutable once a record exists;
/// `set_id` is only called while constructing the record to persist.
pub trait Record: Clone + Send + Sync + 'static {
    const KIND: &'static str;

    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> Uuid {
                self.id
            }

            fn set_id(&mut self, id: Uuid) {
                self.id = id;
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: Uuid,
    pub name: String,
    pub biography: String,
    pub photo: Vec<u8>,
}

impl_record!(Artist, "Artist");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Museum {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub photo: Vec<u8>,
    /// Geo block: city name plus a reference into the country catalog.
    pub city: String,
    pub country_id: Uuid,
}

impl_record!(Museum, "Museum");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Painting {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Raw image bytes.
    pub content: Vec<u8>,
    pub artist_id: Uuid,
    pub museum_id: Uuid,
}

impl_record!(Painting, "Painting");

/// Read-only reference data; rows come from the seed migration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: Uuid,
    pub name: String,
}

impl_record!(Country, "Country");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub avatar: Vec<u8>,
}

impl_record!(User, "User");
