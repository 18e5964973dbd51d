//! sqlx row types and their conversions into domain records.
//!
//! Every stored identifier funnels through `rococo_core::id::from_storage`
//! here, so the time-first byte layout never leaks past this module. A row
//! with a malformed stored id converts to `Internal` (corrupt data, not a
//! caller mistake).

use rococo_core::error::RococoError;
use rococo_core::id;
use rococo_core::types::{Artist, Country, Museum, Painting, User};

#[derive(sqlx::FromRow)]
pub(crate) struct ArtistRow {
    pub id: Vec<u8>,
    pub name: String,
    pub biography: String,
    pub photo: Vec<u8>,
}

impl TryFrom<ArtistRow> for Artist {
    type Error = RococoError;

    fn try_from(row: ArtistRow) -> Result<Self, RococoError> {
        Ok(Artist {
            id: id::from_storage(&row.id)?,
            name: row.name,
            biography: row.biography,
            photo: row.photo,
        })
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct MuseumRow {
    pub id: Vec<u8>,
    pub title: String,
    pub description: String,
    pub photo: Vec<u8>,
    pub city: String,
    pub country_id: Vec<u8>,
}

impl TryFrom<MuseumRow> for Museum {
    type Error = RococoError;

    fn try_from(row: MuseumRow) -> Result<Self, RococoError> {
        Ok(Museum {
            id: id::from_storage(&row.id)?,
            title: row.title,
            description: row.description,
            photo: row.photo,
            city: row.city,
            country_id: id::from_storage(&row.country_id)?,
        })
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct PaintingRow {
    pub id: Vec<u8>,
    pub title: String,
    pub description: String,
    pub content: Vec<u8>,
    pub artist_id: Vec<u8>,
    pub museum_id: Vec<u8>,
}

impl TryFrom<PaintingRow> for Painting {
    type Error = RococoError;

    fn try_from(row: PaintingRow) -> Result<Self, RococoError> {
        Ok(Painting {
            id: id::from_storage(&row.id)?,
            title: row.title,
            description: row.description,
            content: row.content,
            artist_id: id::from_storage(&row.artist_id)?,
            museum_id: id::from_storage(&row.museum_id)?,
        })
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct CountryRow {
    pub id: Vec<u8>,
    pub name: String,
}

impl TryFrom<CountryRow> for Country {
    type Error = RococoError;

    fn try_from(row: CountryRow) -> Result<Self, RococoError> {
        Ok(Country {
            id: id::from_storage(&row.id)?,
            name: row.name,
        })
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: Vec<u8>,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub avatar: Vec<u8>,
}

impl TryFrom<UserRow> for User {
    type Error = RococoError;

    fn try_from(row: UserRow) -> Result<Self, RococoError> {
        Ok(User {
            id: id::from_storage(&row.id)?,
            username: row.username,
            firstname: row.firstname,
            lastname: row.lastname,
            avatar: row.avatar,
        })
    }
}
