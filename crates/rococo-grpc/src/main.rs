//! Rococo gRPC server entry point.
//!
//! Builds the connection pool once from [`ServerConfig`], wires each
//! Postgres store into its gRPC service and registers all five services on
//! a single tonic server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tonic::transport::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rococo_grpc::config::ServerConfig;
use rococo_grpc::proto::rococo::artist::rococo_artist_service_server::RococoArtistServiceServer;
use rococo_grpc::proto::rococo::geo::rococo_geo_service_server::RococoGeoServiceServer;
use rococo_grpc::proto::rococo::museum::rococo_museum_service_server::RococoMuseumServiceServer;
use rococo_grpc::proto::rococo::painting::rococo_painting_service_server::RococoPaintingServiceServer;
use rococo_grpc::proto::rococo::userdata::rococo_userdata_service_server::RococoUserdataServiceServer;
use rococo_grpc::server::{
    ArtistGrpcService, GeoGrpcService, MuseumGrpcService, PaintingGrpcService,
    UserdataGrpcService,
};
use rococo_postgres::{
    PgArtistStore, PgCountryStore, PgMuseumStore, PgPaintingStore, PgUserStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rococo_grpc=info,rococo_postgres=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        addr = %config.addr,
        pool_size = config.max_connections,
        "Starting Rococo gRPC server"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Database pool ready");

    let artist = ArtistGrpcService::new(Arc::new(PgArtistStore::new(pool.clone())));
    let museum = MuseumGrpcService::new(Arc::new(PgMuseumStore::new(pool.clone())));
    let painting = PaintingGrpcService::new(Arc::new(PgPaintingStore::new(pool.clone())));
    let geo = GeoGrpcService::new(Arc::new(PgCountryStore::new(pool.clone())));
    let userdata = UserdataGrpcService::new(Arc::new(PgUserStore::new(pool)));

    Server::builder()
        .add_service(RococoArtistServiceServer::new(artist))
        .add_service(RococoMuseumServiceServer::new(museum))
        .add_service(RococoPaintingServiceServer::new(painting))
        .add_service(RococoGeoServiceServer::new(geo))
        .add_service(RococoUserdataServiceServer::new(userdata))
        .serve(config.addr)
        .await?;

    Ok(())
}
