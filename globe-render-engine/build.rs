// build.rs
use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Default scene manifest, regenerated into assets/ so a fresh checkout
    // runs without hand-writing configuration.
    let manifest = serde_json::json!({
        "dataset": "datasets/world_population.csv",
        "textures": {
            "surface": "textures/earth-blue-marble.jpg",
            "backdrop": "textures/night-sky.png",
            "glow": "textures/glow.png"
        },
        "camera": {
            "policy": "showcase",
            "auto_rotate_speed_deg": null
        }
    });

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let assets_dir = manifest_dir.join("assets");
    fs::create_dir_all(&assets_dir).ok();

    let json_content = serde_json::to_string_pretty(&manifest).unwrap();

    let manifest_path = assets_dir.join("globe.manifest.json");
    if !manifest_path.exists() {
        fs::write(&manifest_path, &json_content).expect("Failed to write globe.manifest.json");
        println!("cargo:warning=Generated default assets/globe.manifest.json");
    }
}
