use bevy::prelude::*;
use constants::camera_policy::CameraPolicy;
use constants::path;
use serde::{Deserialize, Serialize};

/// Texture file references for the globe scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneTextureFiles {
    #[serde(default = "default_surface_texture")]
    pub surface: String,
    #[serde(default = "default_backdrop_texture")]
    pub backdrop: String,
    #[serde(default = "default_glow_texture")]
    pub glow: String,
}

impl Default for SceneTextureFiles {
    fn default() -> Self {
        Self {
            surface: default_surface_texture(),
            backdrop: default_backdrop_texture(),
            glow: default_glow_texture(),
        }
    }
}

/// Camera configuration: a named policy preset plus an optional speed
/// override. Both are configuration, not logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default)]
    pub policy: Option<String>,
    #[serde(default)]
    pub auto_rotate_speed_deg: Option<f32>,
}

/// Complete scene manifest as a Bevy asset. Mirrors the JSON structure and
/// is inserted as a resource once parsed.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct GlobeManifest {
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default)]
    pub textures: SceneTextureFiles,
    #[serde(default)]
    pub camera: CameraConfig,
}

impl Default for GlobeManifest {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            textures: SceneTextureFiles::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl GlobeManifest {
    /// Resolve the configured camera policy, applying the speed override.
    pub fn camera_policy(&self) -> CameraPolicy {
        let name = self.camera.policy.as_deref().unwrap_or("showcase");
        let mut policy = CameraPolicy::from_name(name);
        if let Some(speed) = self.camera.auto_rotate_speed_deg {
            policy.auto_rotate_speed_deg = speed;
        }
        policy
    }
}

fn default_dataset() -> String {
    path::DEFAULT_DATASET_PATH.to_string()
}

fn default_surface_texture() -> String {
    path::DEFAULT_SURFACE_TEXTURE_PATH.to_string()
}

fn default_backdrop_texture() -> String {
    path::DEFAULT_BACKDROP_TEXTURE_PATH.to_string()
}

fn default_glow_texture() -> String {
    path::DEFAULT_GLOW_TEXTURE_PATH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::camera_policy::{INSPECT_POLICY, SHOWCASE_POLICY};

    #[test]
    fn partial_manifest_fills_defaults() {
        let manifest: GlobeManifest =
            serde_json::from_str(r#"{ "dataset": "datasets/custom.csv" }"#).unwrap();
        assert_eq!(manifest.dataset, "datasets/custom.csv");
        assert_eq!(manifest.textures.glow, path::DEFAULT_GLOW_TEXTURE_PATH);
        assert_eq!(manifest.camera_policy(), SHOWCASE_POLICY);
    }

    #[test]
    fn camera_policy_resolves_name_and_override() {
        let manifest: GlobeManifest = serde_json::from_str(
            r#"{ "camera": { "policy": "inspect", "auto_rotate_speed_deg": 1.25 } }"#,
        )
        .unwrap();
        let policy = manifest.camera_policy();
        assert_eq!(policy.pan_enabled, INSPECT_POLICY.pan_enabled);
        assert_eq!(policy.auto_rotate_speed_deg, 1.25);
    }

    #[test]
    fn unknown_policy_name_falls_back_to_showcase() {
        let manifest: GlobeManifest =
            serde_json::from_str(r#"{ "camera": { "policy": "cinematic" } }"#).unwrap();
        assert_eq!(manifest.camera_policy(), SHOWCASE_POLICY);
    }
}
