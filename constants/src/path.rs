/// Scene manifest consumed at startup; everything else is keyed off it.
pub const RELATIVE_MANIFEST_PATH: &str = "globe.manifest.json";

/// Fallbacks used when the manifest omits an entry.
pub const DEFAULT_DATASET_PATH: &str = "datasets/world_population.csv";
pub const DEFAULT_SURFACE_TEXTURE_PATH: &str = "textures/earth-blue-marble.jpg";
pub const DEFAULT_BACKDROP_TEXTURE_PATH: &str = "textures/night-sky.png";
pub const DEFAULT_GLOW_TEXTURE_PATH: &str = "textures/glow.png";
