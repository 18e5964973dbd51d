//! Generated proto contracts for the five Rococo services.

pub mod rococo {
    pub mod artist {
        tonic::include_proto!("rococo.artist");
    }

    pub mod museum {
        tonic::include_proto!("rococo.museum");
    }

    pub mod painting {
        tonic::include_proto!("rococo.painting");
    }

    pub mod geo {
        tonic::include_proto!("rococo.geo");
    }

    pub mod userdata {
        tonic::include_proto!("rococo.userdata");
    }
}
