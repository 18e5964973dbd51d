//! Postgres implementations of the Rococo port traits.
//!
//! One adapter per domain, each a newtype wrapping `PgPool`. Searches run
//! two queries per call (a count and a window fetch) under read-committed
//! semantics; no cross-call transaction is opened at this layer. Result
//! ordering is primary-key order, which is stable across repeated calls.

use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use rococo_core::id;
use rococo_core::page::{Page, PageRequest};
use rococo_core::ports::{
    ArtistStore, CountryStore, MuseumStore, PaintingStore, RecordReader, RecordWriter, Result,
    UserStore,
};
use rococo_core::types::{Artist, Country, Museum, Painting, User};

use crate::rows::{ArtistRow, CountryRow, MuseumRow, PaintingRow, UserRow};

fn key(id: Uuid) -> Vec<u8> {
    id::to_storage(id).to_vec()
}

fn keys(ids: &[Uuid]) -> Vec<Vec<u8>> {
    ids.iter().copied().map(key).collect()
}

/// ILIKE pattern for a substring filter. `%`, `_` and `\` in the filter are
/// escaped so they match literally; no filter matches everything.
fn like_pattern(filter: Option<&str>) -> String {
    let Some(filter) = filter else {
        return "%".into();
    };
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in filter.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ── PgArtistStore ─────────────────────────────────────────────

pub struct PgArtistStore {
    pool: PgPool,
}

impl PgArtistStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordReader<Artist> for PgArtistStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Artist>> {
        let row = sqlx::query_as::<_, ArtistRow>(
            "SELECT id, name, biography, photo FROM artist WHERE id = $1",
        )
        .bind(key(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        row.map(Artist::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Artist>> {
        let rows = sqlx::query_as::<_, ArtistRow>(
            "SELECT id, name, biography, photo FROM artist WHERE id = ANY($1) ORDER BY id",
        )
        .bind(keys(ids))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        rows.into_iter().map(Artist::try_from).collect()
    }

    async fn search(&self, page: &PageRequest) -> Result<Page<Artist>> {
        let pattern = like_pattern(page.filter());
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artist WHERE name ILIKE $1")
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        let rows = sqlx::query_as::<_, ArtistRow>(
            "SELECT id, name, biography, photo FROM artist \
             WHERE name ILIKE $1 ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(Page {
            records: rows.into_iter().map(Artist::try_from).collect::<Result<_>>()?,
            total_count: total as u64,
        })
    }
}

#[async_trait]
impl RecordWriter<Artist> for PgArtistStore {
    async fn insert(&self, record: &Artist) -> Result<()> {
        sqlx::query("INSERT INTO artist (id, name, biography, photo) VALUES ($1, $2, $3, $4)")
            .bind(key(record.id))
            .bind(&record.name)
            .bind(&record.biography)
            .bind(&record.photo)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        Ok(())
    }

    async fn update(&self, record: &Artist) -> Result<()> {
        sqlx::query("UPDATE artist SET name = $2, biography = $3, photo = $4 WHERE id = $1")
            .bind(key(record.id))
            .bind(&record.name)
            .bind(&record.biography)
            .bind(&record.photo)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        Ok(())
    }
}

#[async_trait]
impl ArtistStore for PgArtistStore {
    async fn find_all_by_name(&self, name: &str) -> Result<Vec<Artist>> {
        let rows = sqlx::query_as::<_, ArtistRow>(
            "SELECT id, name, biography, photo FROM artist WHERE name = $1 ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        rows.into_iter().map(Artist::try_from).collect()
    }
}

// ── PgMuseumStore ─────────────────────────────────────────────

pub struct PgMuseumStore {
    pool: PgPool,
}

impl PgMuseumStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordReader<Museum> for PgMuseumStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Museum>> {
        let row = sqlx::query_as::<_, MuseumRow>(
            "SELECT id, title, description, photo, city, country_id FROM museum WHERE id = $1",
        )
        .bind(key(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        row.map(Museum::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Museum>> {
        let rows = sqlx::query_as::<_, MuseumRow>(
            "SELECT id, title, description, photo, city, country_id FROM museum \
             WHERE id = ANY($1) ORDER BY id",
        )
        .bind(keys(ids))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        rows.into_iter().map(Museum::try_from).collect()
    }

    async fn search(&self, page: &PageRequest) -> Result<Page<Museum>> {
        let pattern = like_pattern(page.filter());
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM museum WHERE title ILIKE $1")
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        let rows = sqlx::query_as::<_, MuseumRow>(
            "SELECT id, title, description, photo, city, country_id FROM museum \
             WHERE title ILIKE $1 ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(Page {
            records: rows.into_iter().map(Museum::try_from).collect::<Result<_>>()?,
            total_count: total as u64,
        })
    }
}

#[async_trait]
impl RecordWriter<Museum> for PgMuseumStore {
    async fn insert(&self, record: &Museum) -> Result<()> {
        sqlx::query(
            "INSERT INTO museum (id, title, description, photo, city, country_id) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(key(record.id))
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.photo)
        .bind(&record.city)
        .bind(key(record.country_id))
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(())
    }

    async fn update(&self, record: &Museum) -> Result<()> {
        sqlx::query(
            "UPDATE museum SET title = $2, description = $3, photo = $4, city = $5, \
             country_id = $6 WHERE id = $1",
        )
        .bind(key(record.id))
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.photo)
        .bind(&record.city)
        .bind(key(record.country_id))
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(())
    }
}

impl MuseumStore for PgMuseumStore {}

// ── PgPaintingStore ───────────────────────────────────────────

pub struct PgPaintingStore {
    pool: PgPool,
}

impl PgPaintingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordReader<Painting> for PgPaintingStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Painting>> {
        let row = sqlx::query_as::<_, PaintingRow>(
            "SELECT id, title, description, content, artist_id, museum_id FROM painting \
             WHERE id = $1",
        )
        .bind(key(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        row.map(Painting::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Painting>> {
        let rows = sqlx::query_as::<_, PaintingRow>(
            "SELECT id, title, description, content, artist_id, museum_id FROM painting \
             WHERE id = ANY($1) ORDER BY id",
        )
        .bind(keys(ids))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        rows.into_iter().map(Painting::try_from).collect()
    }

    async fn search(&self, page: &PageRequest) -> Result<Page<Painting>> {
        let pattern = like_pattern(page.filter());
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM painting WHERE title ILIKE $1")
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        let rows = sqlx::query_as::<_, PaintingRow>(
            "SELECT id, title, description, content, artist_id, museum_id FROM painting \
             WHERE title ILIKE $1 ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(Page {
            records: rows
                .into_iter()
                .map(Painting::try_from)
                .collect::<Result<_>>()?,
            total_count: total as u64,
        })
    }
}

#[async_trait]
impl RecordWriter<Painting> for PgPaintingStore {
    async fn insert(&self, record: &Painting) -> Result<()> {
        sqlx::query(
            "INSERT INTO painting (id, title, description, content, artist_id, museum_id) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(key(record.id))
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.content)
        .bind(key(record.artist_id))
        .bind(key(record.museum_id))
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(())
    }

    async fn update(&self, record: &Painting) -> Result<()> {
        sqlx::query(
            "UPDATE painting SET title = $2, description = $3, content = $4, artist_id = $5, \
             museum_id = $6 WHERE id = $1",
        )
        .bind(key(record.id))
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.content)
        .bind(key(record.artist_id))
        .bind(key(record.museum_id))
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(())
    }
}

#[async_trait]
impl PaintingStore for PgPaintingStore {
    async fn search_by_artist(
        &self,
        artist_id: Uuid,
        page: &PageRequest,
    ) -> Result<Page<Painting>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM painting WHERE artist_id = $1")
            .bind(key(artist_id))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        let rows = sqlx::query_as::<_, PaintingRow>(
            "SELECT id, title, description, content, artist_id, museum_id FROM painting \
             WHERE artist_id = $1 ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(key(artist_id))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(Page {
            records: rows
                .into_iter()
                .map(Painting::try_from)
                .collect::<Result<_>>()?,
            total_count: total as u64,
        })
    }
}

// ── PgCountryStore ────────────────────────────────────────────

pub struct PgCountryStore {
    pool: PgPool,
}

impl PgCountryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordReader<Country> for PgCountryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Country>> {
        let row = sqlx::query_as::<_, CountryRow>("SELECT id, name FROM country WHERE id = $1")
            .bind(key(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        row.map(Country::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Country>> {
        let rows = sqlx::query_as::<_, CountryRow>(
            "SELECT id, name FROM country WHERE id = ANY($1) ORDER BY id",
        )
        .bind(keys(ids))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        rows.into_iter().map(Country::try_from).collect()
    }

    async fn search(&self, page: &PageRequest) -> Result<Page<Country>> {
        let pattern = like_pattern(page.filter());
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM country WHERE name ILIKE $1")
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        let rows = sqlx::query_as::<_, CountryRow>(
            "SELECT id, name FROM country WHERE name ILIKE $1 ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(Page {
            records: rows
                .into_iter()
                .map(Country::try_from)
                .collect::<Result<_>>()?,
            total_count: total as u64,
        })
    }
}

#[async_trait]
impl CountryStore for PgCountryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>> {
        let row = sqlx::query_as::<_, CountryRow>("SELECT id, name FROM country WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!(e))?;
        row.map(Country::try_from).transpose()
    }
}

// ── PgUserStore ───────────────────────────────────────────────

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, firstname, lastname, avatar FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        row.map(User::try_from).transpose()
    }

    async fn insert(&self, user: &User) -> Result<()> {
        sqlx::query(
            "INSERT INTO users (id, username, firstname, lastname, avatar) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(key(user.id))
        .bind(&user.username)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.avatar)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<()> {
        sqlx::query(
            "UPDATE users SET username = $2, firstname = $3, lastname = $4, avatar = $5 \
             WHERE id = $1",
        )
        .bind(key(user.id))
        .bind(&user.username)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.avatar)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!(e))?;
        Ok(())
    }
}
