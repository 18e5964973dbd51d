//! Painting service. Paintings reference an artist and a museum by id;
//! both references are mandatory on the wire.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use uuid::Uuid;

use rococo_core::error::RococoError;
use rococo_core::page::{Page, PageRequest};
use rococo_core::ports::PaintingStore;
use rococo_core::types::Painting;
use rococo_core::{id, service};

use crate::proto::rococo::painting::rococo_painting_service_server::RococoPaintingService;
use crate::proto::rococo::painting::{
    AddPaintingRequest, AllPaintingByArtistIdRequest, AllPaintingRequest, AllPaintingResponse,
    ArtistId, MuseumId, PaintingIdsRequest, PaintingRequest, PaintingResponse,
    UpdatePaintingRequest,
};
use crate::status::to_status;

pub struct PaintingGrpcService {
    store: Arc<dyn PaintingStore>,
}

impl PaintingGrpcService {
    pub fn new(store: Arc<dyn PaintingStore>) -> Self {
        Self { store }
    }
}

fn to_message(painting: Painting) -> PaintingResponse {
    PaintingResponse {
        id: id::encode(painting.id),
        title: painting.title,
        description: painting.description,
        content: painting.content,
        museum_id: Some(MuseumId {
            id: id::encode(painting.museum_id),
        }),
        artist_id: Some(ArtistId {
            id: id::encode(painting.artist_id),
        }),
    }
}

fn from_data(data: AddPaintingRequest) -> Result<Painting, RococoError> {
    let museum = data
        .museum_id
        .ok_or_else(|| RococoError::InvalidArgument("museum_id is required".into()))?;
    let artist = data
        .artist_id
        .ok_or_else(|| RococoError::InvalidArgument("artist_id is required".into()))?;
    Ok(Painting {
        id: Uuid::nil(),
        title: data.title,
        description: data.description,
        content: data.content,
        artist_id: id::decode(&artist.id)?,
        museum_id: id::decode(&museum.id)?,
    })
}

fn apply_fields(mut painting: Painting, fields: Painting) -> Painting {
    painting.title = fields.title;
    painting.description = fields.description;
    painting.content = fields.content;
    painting.artist_id = fields.artist_id;
    painting.museum_id = fields.museum_id;
    painting
}

fn page_response(page: Page<Painting>) -> AllPaintingResponse {
    AllPaintingResponse {
        total_count: page.total_count as i32,
        painting: page.records.into_iter().map(to_message).collect(),
    }
}

#[tonic::async_trait]
impl RococoPaintingService for PaintingGrpcService {
    async fn get_painting(
        &self,
        request: Request<PaintingRequest>,
    ) -> Result<Response<PaintingResponse>, Status> {
        let req = request.into_inner();
        let painting = service::get_by_id(self.store.as_ref(), &req.id)
            .await
            .map_err(to_status)?;
        Ok(Response::new(to_message(painting)))
    }

    async fn get_all_painting(
        &self,
        request: Request<AllPaintingRequest>,
    ) -> Result<Response<AllPaintingResponse>, Status> {
        let req = request.into_inner();
        let page = service::search(self.store.as_ref(), Some(req.title), req.page, req.size)
            .await
            .map_err(to_status)?;
        Ok(Response::new(page_response(page)))
    }

    async fn get_all_painting_by_artist_id(
        &self,
        request: Request<AllPaintingByArtistIdRequest>,
    ) -> Result<Response<AllPaintingResponse>, Status> {
        let req = request.into_inner();
        let artist_id = id::decode(&req.artist_id).map_err(to_status)?;
        let page = PageRequest::new(req.page, req.size, None).map_err(to_status)?;
        let page = self
            .store
            .search_by_artist(artist_id, &page)
            .await
            .map_err(to_status)?;
        Ok(Response::new(page_response(page)))
    }

    async fn get_paintings_by_ids(
        &self,
        request: Request<PaintingIdsRequest>,
    ) -> Result<Response<AllPaintingResponse>, Status> {
        let req = request.into_inner();
        let paintings = service::get_by_ids(self.store.as_ref(), &req.id)
            .await
            .map_err(to_status)?;
        Ok(Response::new(AllPaintingResponse {
            total_count: paintings.len() as i32,
            painting: paintings.into_iter().map(to_message).collect(),
        }))
    }

    async fn add_painting(
        &self,
        request: Request<AddPaintingRequest>,
    ) -> Result<Response<PaintingResponse>, Status> {
        let record = from_data(request.into_inner()).map_err(to_status)?;
        let painting = service::create(self.store.as_ref(), record)
            .await
            .map_err(to_status)?;
        Ok(Response::new(to_message(painting)))
    }

    async fn update_painting(
        &self,
        request: Request<UpdatePaintingRequest>,
    ) -> Result<Response<PaintingResponse>, Status> {
        let req = request.into_inner();
        let data = req
            .painting_data
            .ok_or_else(|| Status::invalid_argument("painting_data is required"))?;
        let fields = from_data(data).map_err(to_status)?;
        let painting = service::update(self.store.as_ref(), &req.id, |p| apply_fields(p, fields))
            .await
            .map_err(to_status)?;
        Ok(Response::new(to_message(painting)))
    }
}
