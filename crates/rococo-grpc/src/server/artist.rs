//! Artist service: wire messages in, core operations out.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use uuid::Uuid;

use rococo_core::page::Page;
use rococo_core::ports::ArtistStore;
use rococo_core::types::Artist;
use rococo_core::{id, service};

use crate::proto::rococo::artist::rococo_artist_service_server::RococoArtistService;
use crate::proto::rococo::artist::{
    AddArtistRequest, AllArtistRequest, AllArtistResponse, ArtistIdsRequest, ArtistRequest,
    ArtistResponse, GetArtistRequest, UpdateArtistRequest,
};
use crate::status::to_status;

pub struct ArtistGrpcService {
    store: Arc<dyn ArtistStore>,
}

impl ArtistGrpcService {
    pub fn new(store: Arc<dyn ArtistStore>) -> Self {
        Self { store }
    }
}

fn to_message(artist: Artist) -> ArtistResponse {
    ArtistResponse {
        id: id::encode(artist.id),
        name: artist.name,
        biography: artist.biography,
        photo: artist.photo,
    }
}

fn from_data(data: AddArtistRequest) -> Artist {
    Artist {
        id: Uuid::nil(),
        name: data.name,
        biography: data.biography,
        photo: data.photo,
    }
}

fn apply_data(mut artist: Artist, data: AddArtistRequest) -> Artist {
    artist.name = data.name;
    artist.biography = data.biography;
    artist.photo = data.photo;
    artist
}

fn page_response(page: Page<Artist>) -> AllArtistResponse {
    AllArtistResponse {
        total_count: page.total_count as i32,
        artists: page.records.into_iter().map(to_message).collect(),
    }
}

fn list_response(artists: Vec<Artist>) -> AllArtistResponse {
    AllArtistResponse {
        total_count: artists.len() as i32,
        artists: artists.into_iter().map(to_message).collect(),
    }
}

#[tonic::async_trait]
impl RococoArtistService for ArtistGrpcService {
    async fn get_artist(
        &self,
        request: Request<ArtistRequest>,
    ) -> Result<Response<ArtistResponse>, Status> {
        let req = request.into_inner();
        let artist = service::get_by_id(self.store.as_ref(), &req.id)
            .await
            .map_err(to_status)?;
        Ok(Response::new(to_message(artist)))
    }

    async fn get_artist_by_name(
        &self,
        request: Request<GetArtistRequest>,
    ) -> Result<Response<AllArtistResponse>, Status> {
        let req = request.into_inner();
        let artists = self
            .store
            .find_all_by_name(&req.name)
            .await
            .map_err(to_status)?;
        Ok(Response::new(list_response(artists)))
    }

    async fn get_all_artist(
        &self,
        request: Request<AllArtistRequest>,
    ) -> Result<Response<AllArtistResponse>, Status> {
        let req = request.into_inner();
        let page = service::search(self.store.as_ref(), Some(req.name), req.page, req.size)
            .await
            .map_err(to_status)?;
        Ok(Response::new(page_response(page)))
    }

    async fn get_artists_by_ids(
        &self,
        request: Request<ArtistIdsRequest>,
    ) -> Result<Response<AllArtistResponse>, Status> {
        let req = request.into_inner();
        let artists = service::get_by_ids(self.store.as_ref(), &req.id)
            .await
            .map_err(to_status)?;
        Ok(Response::new(list_response(artists)))
    }

    async fn add_artist(
        &self,
        request: Request<AddArtistRequest>,
    ) -> Result<Response<ArtistResponse>, Status> {
        let artist = service::create(self.store.as_ref(), from_data(request.into_inner()))
            .await
            .map_err(to_status)?;
        Ok(Response::new(to_message(artist)))
    }

    async fn update_artist(
        &self,
        request: Request<UpdateArtistRequest>,
    ) -> Result<Response<ArtistResponse>, Status> {
        let req = request.into_inner();
        let data = req
            .artist_data
            .ok_or_else(|| Status::invalid_argument("artist_data is required"))?;
        let artist = service::update(self.store.as_ref(), &req.id, |a| apply_data(a, data))
            .await
            .map_err(to_status)?;
        Ok(Response::new(to_message(artist)))
    }
}
