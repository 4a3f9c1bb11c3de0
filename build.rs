fn main() -> Result<(), Box<dyn std::error::Error>> {
    let protoc =
        protoc_bin_vendored::protoc_bin_path().expect("no vendored protoc for this platform");
    std::env::set_var("PROTOC", protoc);

    println!("cargo:rerun-if-changed=proto/gobgp.proto");
    tonic_build::compile_protos("proto/gobgp.proto")?;
    Ok(())
}
