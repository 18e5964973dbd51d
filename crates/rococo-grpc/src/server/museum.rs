//! Museum service. The wire Geo block flattens onto the record's city and
//! country reference.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use uuid::Uuid;

use rococo_core::error::RococoError;
use rococo_core::page::Page;
use rococo_core::ports::MuseumStore;
use rococo_core::types::Museum;
use rococo_core::{id, service};

use crate::proto::rococo::museum::rococo_museum_service_server::RococoMuseumService;
use crate::proto::rococo::museum::{
    AddMuseumRequest, AllMuseumRequest, AllMuseumResponse, CountryId, Geo, MuseumIdsRequest,
    MuseumRequest, MuseumResponse, UpdateMuseumRequest,
};
use crate::status::to_status;

pub struct MuseumGrpcService {
    store: Arc<dyn MuseumStore>,
}

impl MuseumGrpcService {
    pub fn new(store: Arc<dyn MuseumStore>) -> Self {
        Self { store }
    }
}

fn to_message(museum: Museum) -> MuseumResponse {
    MuseumResponse {
        id: id::encode(museum.id),
        title: museum.title,
        description: museum.description,
        photo: museum.photo,
        geo: Some(Geo {
            city: museum.city,
            country: Some(CountryId {
                id: id::encode(museum.country_id),
            }),
        }),
    }
}

/// Build the record a create/update request describes. The geo block and
/// its country reference are mandatory on the wire.
fn from_data(data: AddMuseumRequest) -> Result<Museum, RococoError> {
    let geo = data
        .geo
        .ok_or_else(|| RococoError::InvalidArgument("geo is required".into()))?;
    let country = geo
        .country
        .ok_or_else(|| RococoError::InvalidArgument("geo.country is required".into()))?;
    Ok(Museum {
        id: Uuid::nil(),
        title: data.title,
        description: data.description,
        photo: data.photo,
        city: geo.city,
        country_id: id::decode(&country.id)?,
    })
}

fn apply_fields(mut museum: Museum, fields: Museum) -> Museum {
    museum.title = fields.title;
    museum.description = fields.description;
    museum.photo = fields.photo;
    museum.city = fields.city;
    museum.country_id = fields.country_id;
    museum
}

fn page_response(page: Page<Museum>) -> AllMuseumResponse {
    AllMuseumResponse {
        total_count: page.total_count as i32,
        museum: page.records.into_iter().map(to_message).collect(),
    }
}

#[tonic::async_trait]
impl RococoMuseumService for MuseumGrpcService {
    async fn get_museum(
        &self,
        request: Request<MuseumRequest>,
    ) -> Result<Response<MuseumResponse>, Status> {
        let req = request.into_inner();
        let museum = service::get_by_id(self.store.as_ref(), &req.id)
            .await
            .map_err(to_status)?;
        Ok(Response::new(to_message(museum)))
    }

    async fn get_all_museum(
        &self,
        request: Request<AllMuseumRequest>,
    ) -> Result<Response<AllMuseumResponse>, Status> {
        let req = request.into_inner();
        let page = service::search(self.store.as_ref(), Some(req.title), req.page, req.size)
            .await
            .map_err(to_status)?;
        Ok(Response::new(page_response(page)))
    }

    async fn get_museums_by_ids(
        &self,
        request: Request<MuseumIdsRequest>,
    ) -> Result<Response<AllMuseumResponse>, Status> {
        let req = request.into_inner();
        let museums = service::get_by_ids(self.store.as_ref(), &req.id)
            .await
            .map_err(to_status)?;
        Ok(Response::new(AllMuseumResponse {
            total_count: museums.len() as i32,
            museum: museums.into_iter().map(to_message).collect(),
        }))
    }

    async fn add_museum(
        &self,
        request: Request<AddMuseumRequest>,
    ) -> Result<Response<MuseumResponse>, Status> {
        let record = from_data(request.into_inner()).map_err(to_status)?;
        let museum = service::create(self.store.as_ref(), record)
            .await
            .map_err(to_status)?;
        Ok(Response::new(to_message(museum)))
    }

    async fn update_museum(
        &self,
        request: Request<UpdateMuseumRequest>,
    ) -> Result<Response<MuseumResponse>, Status> {
        let req = request.into_inner();
        let data = req
            .museum_data
            .ok_or_else(|| Status::invalid_argument("museum_data is required"))?;
        let fields = from_data(data).map_err(to_status)?;
        let museum = service::update(self.store.as_ref(), &req.id, |m| apply_fields(m, fields))
            .await
            .map_err(to_status)?;
        Ok(Response::new(to_message(museum)))
    }
}
