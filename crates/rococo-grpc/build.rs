fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &[
                "proto/rococo/artist.proto",
                "proto/rococo/museum.proto",
                "proto/rococo/painting.proto",
                "proto/rococo/geo.proto",
                "proto/rococo/userdata.proto",
            ],
            &["proto"],
        )?;
    Ok(())
}
