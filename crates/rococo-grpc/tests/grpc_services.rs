//! Service-level tests: drive the tonic service implementations directly
//! with in-memory stores and assert on responses and status codes.

mod support;

use std::sync::Arc;

use tonic::{Code, Request};
use uuid::Uuid;

use rococo_core::id;
use rococo_grpc::proto::rococo::artist::rococo_artist_service_server::RococoArtistService;
use rococo_grpc::proto::rococo::artist::{
    AddArtistRequest, AllArtistRequest, ArtistIdsRequest, ArtistRequest, GetArtistRequest,
    UpdateArtistRequest,
};
use rococo_grpc::proto::rococo::geo::rococo_geo_service_server::RococoGeoService;
use rococo_grpc::proto::rococo::geo::{
    AllCountryRequest, CountryId, CountryIdsRequest, CountryName,
};
use rococo_grpc::proto::rococo::painting::rococo_painting_service_server::RococoPaintingService;
use rococo_grpc::proto::rococo::painting::AllPaintingByArtistIdRequest;
use rococo_grpc::proto::rococo::userdata::rococo_userdata_service_server::RococoUserdataService;
use rococo_grpc::proto::rococo::userdata::{UpdateUserRequest, UserRequest};
use rococo_grpc::server::{
    ArtistGrpcService, GeoGrpcService, PaintingGrpcService, UserdataGrpcService,
};

use support::{
    artist, country, painting, user, MemArtistStore, MemCountryStore, MemPaintingStore,
    MemUserStore,
};

fn artist_service(rows: Vec<rococo_core::types::Artist>) -> ArtistGrpcService {
    ArtistGrpcService::new(Arc::new(MemArtistStore::with_rows(rows)))
}

// ── Artist ────────────────────────────────────────────────────

#[tokio::test]
async fn get_artist_returns_the_record() {
    let vincent = artist("Vincent van Gogh");
    let svc = artist_service(vec![vincent.clone()]);

    let resp = svc
        .get_artist(Request::new(ArtistRequest {
            id: id::encode(vincent.id),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.id, id::encode(vincent.id));
    assert_eq!(resp.name, "Vincent van Gogh");
    assert_eq!(resp.photo, vec![1, 2, 3]);
}

#[tokio::test]
async fn get_artist_unknown_id_is_not_found() {
    let svc = artist_service(vec![]);
    let unused = Uuid::new_v4();

    let status = svc
        .get_artist(Request::new(ArtistRequest {
            id: id::encode(unused),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains(&unused.to_string()));
}

#[tokio::test]
async fn get_artist_malformed_id_is_invalid_argument() {
    let svc = artist_service(vec![]);

    let status = svc
        .get_artist(Request::new(ArtistRequest {
            id: b"invalid-uuid".to_vec(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn get_artist_by_name_returns_exact_matches() {
    let svc = artist_service(vec![artist("Vermeer"), artist("Vermeer"), artist("Monet")]);

    let resp = svc
        .get_artist_by_name(Request::new(GetArtistRequest {
            name: "Vermeer".into(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.artists.len(), 2);
    assert_eq!(resp.total_count, 2);
}

#[tokio::test]
async fn get_artist_by_name_with_no_match_is_an_empty_list() {
    let svc = artist_service(vec![artist("Monet")]);

    let resp = svc
        .get_artist_by_name(Request::new(GetArtistRequest {
            name: "Banksy".into(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(resp.artists.is_empty());
}

#[tokio::test]
async fn get_all_artist_reports_window_and_total() {
    let svc = artist_service(vec![artist("A"), artist("B"), artist("C")]);

    let resp = svc
        .get_all_artist(Request::new(AllArtistRequest {
            name: String::new(),
            page: 0,
            size: 2,
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.artists.len(), 2);
    assert_eq!(resp.total_count, 3);
}

#[tokio::test]
async fn get_all_artist_past_last_page_keeps_total() {
    let svc = artist_service(vec![artist("A"), artist("B")]);

    let resp = svc
        .get_all_artist(Request::new(AllArtistRequest {
            name: String::new(),
            page: 7,
            size: 10,
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(resp.artists.is_empty());
    assert_eq!(resp.total_count, 2);
}

#[tokio::test]
async fn get_all_artist_filters_case_insensitively() {
    let svc = artist_service(vec![artist("Vincent van Gogh"), artist("Claude Monet")]);

    let resp = svc
        .get_all_artist(Request::new(AllArtistRequest {
            name: "GOGH".into(),
            page: 0,
            size: 10,
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.artists.len(), 1);
    assert_eq!(resp.artists[0].name, "Vincent van Gogh");
}

#[tokio::test]
async fn add_artist_then_get_round_trips_the_fields() {
    let svc = artist_service(vec![]);

    let created = svc
        .add_artist(Request::new(AddArtistRequest {
            name: "Vincent van Gogh".into(),
            biography: "Dutch post-impressionist painter".into(),
            photo: vec![0x01, 0x02, 0x03],
        }))
        .await
        .unwrap()
        .into_inner();

    let assigned = id::decode(&created.id).unwrap();
    assert!(!assigned.is_nil());

    let fetched = svc
        .get_artist(Request::new(ArtistRequest {
            id: created.id.clone(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(fetched.name, "Vincent van Gogh");
    assert_eq!(fetched.biography, "Dutch post-impressionist painter");
    assert_eq!(fetched.photo, vec![0x01, 0x02, 0x03]);
}

#[tokio::test]
async fn update_artist_overwrites_fields_and_keeps_the_id() {
    let existing = artist("Old Name");
    let svc = artist_service(vec![existing.clone()]);

    let updated = svc
        .update_artist(Request::new(UpdateArtistRequest {
            id: id::encode(existing.id),
            artist_data: Some(AddArtistRequest {
                name: "Updated Name".into(),
                biography: "Updated Bio".into(),
                photo: vec![9],
            }),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(updated.id, id::encode(existing.id));
    assert_eq!(updated.name, "Updated Name");

    let fetched = svc
        .get_artist(Request::new(ArtistRequest {
            id: id::encode(existing.id),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(fetched.name, "Updated Name");
    assert_eq!(fetched.biography, "Updated Bio");
}

#[tokio::test]
async fn update_artist_unknown_id_is_not_found() {
    let svc = artist_service(vec![]);
    let unused = Uuid::new_v4();

    let status = svc
        .update_artist(Request::new(UpdateArtistRequest {
            id: id::encode(unused),
            artist_data: Some(AddArtistRequest {
                name: "Ghost".into(),
                biography: String::new(),
                photo: vec![],
            }),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains(&unused.to_string()));
}

#[tokio::test]
async fn get_artists_by_ids_omits_unknown_ids() {
    let known = artist("Known");
    let svc = artist_service(vec![known.clone()]);

    let resp = svc
        .get_artists_by_ids(Request::new(ArtistIdsRequest {
            id: vec![id::encode(known.id), id::encode(Uuid::new_v4())],
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.artists.len(), 1);
    assert_eq!(resp.artists[0].id, id::encode(known.id));
}

#[tokio::test]
async fn get_artists_by_ids_empty_input_is_empty_output() {
    let svc = artist_service(vec![artist("A")]);

    let resp = svc
        .get_artists_by_ids(Request::new(ArtistIdsRequest { id: vec![] }))
        .await
        .unwrap()
        .into_inner();

    assert!(resp.artists.is_empty());
}

// ── Painting ──────────────────────────────────────────────────

#[tokio::test]
async fn paintings_by_artist_are_scoped_and_paged() {
    let vermeer = Uuid::new_v4();
    let other = Uuid::new_v4();
    let svc = PaintingGrpcService::new(Arc::new(MemPaintingStore::with_rows(vec![
        painting("Girl with a Pearl Earring", vermeer),
        painting("The Milkmaid", vermeer),
        painting("Unrelated", other),
    ])));

    let resp = svc
        .get_all_painting_by_artist_id(Request::new(AllPaintingByArtistIdRequest {
            artist_id: id::encode(vermeer),
            page: 0,
            size: 10,
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.painting.len(), 2);
    assert_eq!(resp.total_count, 2);
}

#[tokio::test]
async fn paintings_by_artist_malformed_id_is_invalid_argument() {
    let svc = PaintingGrpcService::new(Arc::new(MemPaintingStore::with_rows(vec![])));

    let status = svc
        .get_all_painting_by_artist_id(Request::new(AllPaintingByArtistIdRequest {
            artist_id: b"invalid-uuid".to_vec(),
            page: 0,
            size: 10,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
}

// ── Geo ───────────────────────────────────────────────────────

fn geo_service(rows: Vec<rococo_core::types::Country>) -> GeoGrpcService {
    GeoGrpcService::new(Arc::new(MemCountryStore { rows }))
}

#[tokio::test]
async fn get_country_by_name_hit() {
    let france = country("France");
    let svc = geo_service(vec![france.clone()]);

    let resp = svc
        .get_country_by_name(Request::new(CountryName {
            name: "France".into(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.id, id::encode(france.id));
}

#[tokio::test]
async fn get_country_by_name_miss_names_the_key() {
    let svc = geo_service(vec![country("France")]);

    let status = svc
        .get_country_by_name(Request::new(CountryName {
            name: "Atlantis".into(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains("Atlantis"));
}

#[tokio::test]
async fn get_all_country_pages_the_catalog() {
    let svc = geo_service(vec![country("Italy"), country("Spain"), country("Japan")]);

    let resp = svc
        .get_all_country(Request::new(AllCountryRequest { page: 0, size: 2 }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.country.len(), 2);
    assert_eq!(resp.total_count, 3);
}

#[tokio::test]
async fn get_countries_by_ids_returns_only_matches() {
    let japan = country("Japan");
    let brazil = country("Brazil");
    let svc = geo_service(vec![japan.clone(), brazil.clone()]);

    let resp = svc
        .get_countries_by_ids(Request::new(CountryIdsRequest {
            id: vec![
                id::encode(japan.id),
                id::encode(brazil.id),
                id::encode(Uuid::new_v4()),
            ],
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.country.len(), 2);
}

#[tokio::test]
async fn get_country_unknown_id_is_not_found() {
    let svc = geo_service(vec![]);
    let unused = Uuid::new_v4();

    let status = svc
        .get_country(Request::new(CountryId {
            id: id::encode(unused),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains(&unused.to_string()));
}

// ── Userdata ──────────────────────────────────────────────────

#[tokio::test]
async fn get_user_miss_is_not_found() {
    let svc = UserdataGrpcService::new(Arc::new(MemUserStore::with_rows(vec![])));

    let status = svc
        .get_user(Request::new(UserRequest {
            username: "nobody".into(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains("nobody"));
}

#[tokio::test]
async fn update_user_applies_profile_fields() {
    let existing = user("frida");
    let svc = UserdataGrpcService::new(Arc::new(MemUserStore::with_rows(vec![existing.clone()])));

    let resp = svc
        .update_user(Request::new(UpdateUserRequest {
            username: "frida".into(),
            firstname: "Frida".into(),
            lastname: "Kahlo".into(),
            avatar: vec![42],
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(resp.id, id::encode(existing.id));
    assert_eq!(resp.firstname, "Frida");
    assert_eq!(resp.lastname, "Kahlo");
    assert_eq!(resp.avatar, vec![42]);
}

#[tokio::test]
async fn update_user_unknown_username_never_creates() {
    let store = Arc::new(MemUserStore::with_rows(vec![]));
    let svc = UserdataGrpcService::new(store.clone());

    let status = svc
        .update_user(Request::new(UpdateUserRequest {
            username: "ghost".into(),
            firstname: String::new(),
            lastname: String::new(),
            avatar: vec![],
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert!(store.rows.lock().unwrap().is_empty());
}
