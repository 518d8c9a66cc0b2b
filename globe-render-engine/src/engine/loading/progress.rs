use bevy::prelude::*;

/// Loading stages the session has passed, plus the visible dataset error
/// slot for the retry flow.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_applied: bool,
    pub dataset_loaded: bool,
    /// Set when the dataset fetch fails; cleared by a successful retry.
    pub dataset_error: Option<String>,
    pub surface_textured: bool,
    pub backdrop_textured: bool,
    pub scene_composed: bool,
    pub skipped_rows: usize,
}

impl LoadingProgress {
    pub fn to_frontend_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "stages": [
                ["Scene manifest", i32::from(self.manifest_applied)],
                ["Population dataset", i32::from(self.dataset_loaded)],
                ["Surface texture", i32::from(self.surface_textured)],
                ["Backdrop texture", i32::from(self.backdrop_textured)],
                ["Scene composition", i32::from(self.scene_composed)],
            ],
            "dataset_error": self.dataset_error,
            "skipped_rows": self.skipped_rows,
        })
    }
}
