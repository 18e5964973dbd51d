//! gRPC service implementations, one module per domain.

pub mod artist;
pub mod geo;
pub mod museum;
pub mod painting;
pub mod userdata;

pub use artist::ArtistGrpcService;
pub use geo::GeoGrpcService;
pub use museum::MuseumGrpcService;
pub use painting::PaintingGrpcService;
pub use userdata::UserdataGrpcService;
