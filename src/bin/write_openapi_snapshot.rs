// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use kareru::presentation::http::openapi::{snapshot_path_from_env, write_openapi_snapshot};
use std::path::Path;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = snapshot_path_from_env();
    write_openapi_snapshot(Path::new(&output_path))?;
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
