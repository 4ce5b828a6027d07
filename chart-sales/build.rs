use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Build-time override for the dataset location.
const DATASET_ENV: &str = "SALES_DATA_CSV";
const DEFAULT_DATASET: &str = "../fixtures/sales_data.csv";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the sales CSV to OUT_DIR for include_str. There is no fallback:
    // the dashboard has nothing to show without it.
    let src = env::var(DATASET_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET));
    if !src.exists() {
        panic!(
            "sales dataset not found at {} (set {} to override)",
            src.display(),
            DATASET_ENV
        );
    }
    fs::copy(&src, Path::new(&out_dir).join("sales_data.csv")).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", src.display());
    println!("cargo:rerun-if-env-changed={}", DATASET_ENV);
}
