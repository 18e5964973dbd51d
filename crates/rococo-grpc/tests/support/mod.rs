//! In-memory stores and fixture builders for driving the gRPC services
//! without a database.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use rococo_core::page::{Page, PageRequest};
use rococo_core::ports::{
    ArtistStore, CountryStore, PaintingStore, RecordReader, RecordWriter, Result, UserStore,
};
use rococo_core::types::{Artist, Country, Painting, Record, User};

fn window<R: Clone>(matching: Vec<R>, page: &PageRequest) -> Page<R> {
    let total_count = matching.len() as u64;
    let records = matching
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();
    Page {
        records,
        total_count,
    }
}

macro_rules! mem_store {
    ($name:ident, $record:ty, $display:ident) => {
        pub struct $name {
            pub rows: Mutex<Vec<$record>>,
        }

        impl $name {
            pub fn with_rows(rows: Vec<$record>) -> Self {
                Self {
                    rows: Mutex::new(rows),
                }
            }
        }

        #[async_trait]
        impl RecordReader<$record> for $name {
            async fn find_by_id(&self, id: Uuid) -> Result<Option<$record>> {
                Ok(self
                    .rows
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|r| r.id() == id)
                    .cloned())
            }

            async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<$record>> {
                Ok(self
                    .rows
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|r| ids.contains(&r.id()))
                    .cloned()
                    .collect())
            }

            async fn search(&self, page: &PageRequest) -> Result<Page<$record>> {
                let rows = self.rows.lock().unwrap();
                let needle = page.filter().map(str::to_lowercase);
                let matching: Vec<$record> = rows
                    .iter()
                    .filter(|r| match &needle {
                        Some(n) => r.$display.to_lowercase().contains(n),
                        None => true,
                    })
                    .cloned()
                    .collect();
                Ok(window(matching, page))
            }
        }

        #[async_trait]
        impl RecordWriter<$record> for $name {
            async fn insert(&self, record: &$record) -> Result<()> {
                self.rows.lock().unwrap().push(record.clone());
                Ok(())
            }

            async fn update(&self, record: &$record) -> Result<()> {
                let mut rows = self.rows.lock().unwrap();
                if let Some(row) = rows.iter_mut().find(|r| r.id() == record.id()) {
                    *row = record.clone();
                }
                Ok(())
            }
        }
    };
}

mem_store!(MemArtistStore, Artist, name);
mem_store!(MemPaintingStore, Painting, title);

#[async_trait]
impl ArtistStore for MemArtistStore {
    async fn find_all_by_name(&self, name: &str) -> Result<Vec<Artist>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.name == name)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PaintingStore for MemPaintingStore {
    async fn search_by_artist(
        &self,
        artist_id: Uuid,
        page: &PageRequest,
    ) -> Result<Page<Painting>> {
        let matching: Vec<Painting> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.artist_id == artist_id)
            .cloned()
            .collect();
        Ok(window(matching, page))
    }
}

pub struct MemCountryStore {
    pub rows: Vec<Country>,
}

#[async_trait]
impl RecordReader<Country> for MemCountryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Country>> {
        Ok(self.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Country>> {
        Ok(self
            .rows
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn search(&self, page: &PageRequest) -> Result<Page<Country>> {
        Ok(window(self.rows.clone(), page))
    }
}

#[async_trait]
impl CountryStore for MemCountryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>> {
        Ok(self.rows.iter().find(|c| c.name == name).cloned())
    }
}

pub struct MemUserStore {
    pub rows: Mutex<Vec<User>>,
}

impl MemUserStore {
    pub fn with_rows(rows: Vec<User>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<()> {
        self.rows.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|u| u.id == user.id) {
            *row = user.clone();
        }
        Ok(())
    }
}

// ── Fixture builders ──────────────────────────────────────────

pub fn artist(name: &str) -> Artist {
    Artist {
        id: Uuid::new_v4(),
        name: name.into(),
        biography: format!("{name} bio"),
        photo: vec![1, 2, 3],
    }
}

pub fn painting(title: &str, artist_id: Uuid) -> Painting {
    Painting {
        id: Uuid::new_v4(),
        title: title.into(),
        description: format!("{title} description"),
        content: vec![0xca, 0xfe],
        artist_id,
        museum_id: Uuid::new_v4(),
    }
}

pub fn country(name: &str) -> Country {
    Country {
        id: Uuid::new_v4(),
        name: name.into(),
    }
}

pub fn user(username: &str) -> User {
    User {
        id: Uuid::new_v4(),
        username: username.into(),
        firstname: "First".into(),
        lastname: "Last".into(),
        avatar: vec![7],
    }
}
