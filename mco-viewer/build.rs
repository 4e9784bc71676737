use std::env;
use std::fs;
use std::path::Path;

/// Same default as `mco_api::client::DEFAULT_BASE_URL`.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Bake the API base URL into the WASM binary. The page can still override
    // it at runtime with `?api=<url>`.
    let base_url = env::var("MCO_API_BASE_URL")
        .ok()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    fs::write(Path::new(&out_dir).join("api_base_url.txt"), base_url).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MCO_API_BASE_URL");
}
