//! Geo service: the read-only country catalog.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use rococo_core::page::Page;
use rococo_core::ports::CountryStore;
use rococo_core::types::Country;
use rococo_core::{id, service};

use crate::proto::rococo::geo::rococo_geo_service_server::RococoGeoService;
use crate::proto::rococo::geo::{
    AllCountryByIdsResponse, AllCountryRequest, AllCountryResponse, CountryId, CountryIdsRequest,
    CountryName, CountryResponse,
};
use crate::status::to_status;

pub struct GeoGrpcService {
    store: Arc<dyn CountryStore>,
}

impl GeoGrpcService {
    pub fn new(store: Arc<dyn CountryStore>) -> Self {
        Self { store }
    }
}

fn to_message(country: Country) -> CountryResponse {
    CountryResponse {
        id: id::encode(country.id),
        name: country.name,
    }
}

fn page_response(page: Page<Country>) -> AllCountryResponse {
    AllCountryResponse {
        total_count: page.total_count as i32,
        country: page.records.into_iter().map(to_message).collect(),
    }
}

#[tonic::async_trait]
impl RococoGeoService for GeoGrpcService {
    async fn get_country(
        &self,
        request: Request<CountryId>,
    ) -> Result<Response<CountryResponse>, Status> {
        let req = request.into_inner();
        let country = service::get_by_id(self.store.as_ref(), &req.id)
            .await
            .map_err(to_status)?;
        Ok(Response::new(to_message(country)))
    }

    async fn get_country_by_name(
        &self,
        request: Request<CountryName>,
    ) -> Result<Response<CountryResponse>, Status> {
        let req = request.into_inner();
        let found = self
            .store
            .find_by_name(&req.name)
            .await
            .map_err(to_status)?;
        let country = service::require(found, "name", &req.name).map_err(to_status)?;
        Ok(Response::new(to_message(country)))
    }

    async fn get_all_country(
        &self,
        request: Request<AllCountryRequest>,
    ) -> Result<Response<AllCountryResponse>, Status> {
        let req = request.into_inner();
        let page = service::search(self.store.as_ref(), None, req.page, req.size)
            .await
            .map_err(to_status)?;
        Ok(Response::new(page_response(page)))
    }

    async fn get_countries_by_ids(
        &self,
        request: Request<CountryIdsRequest>,
    ) -> Result<Response<AllCountryByIdsResponse>, Status> {
        let req = request.into_inner();
        let countries = service::get_by_ids(self.store.as_ref(), &req.id)
            .await
            .map_err(to_status)?;
        Ok(Response::new(AllCountryByIdsResponse {
            country: countries.into_iter().map(to_message).collect(),
        }))
    }
}
