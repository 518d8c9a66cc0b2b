use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use thiserror::Error;

use crate::engine::assets::population::{PopulationDataset, PopulationPoint};

/// Registers the delimited population dataset as a loadable asset type.
pub struct PopulationDatasetPlugin {
    extensions: Vec<&'static str>,
}

impl PopulationDatasetPlugin {
    pub fn new(extensions: &[&'static str]) -> Self {
        Self {
            extensions: extensions.to_owned(),
        }
    }
}

impl Plugin for PopulationDatasetPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<PopulationDataset>()
            .register_asset_loader(PopulationDatasetLoader {
                extensions: self.extensions.clone(),
            });
    }
}

#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("could not read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("dataset could not be read as delimited text: {0}")]
    Csv(#[from] csv::Error),
}

struct PopulationDatasetLoader {
    extensions: Vec<&'static str>,
}

impl AssetLoader for PopulationDatasetLoader {
    type Asset = PopulationDataset;
    type Settings = ();
    type Error = DatasetLoadError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        parse_dataset(&bytes)
    }

    fn extensions(&self) -> &[&str] {
        &self.extensions
    }
}

/// Parse comma-separated text with a header row naming `lat`, `lng`, `pop`.
///
/// Column order is insignificant; the names are not. A missing header column
/// fails the whole load, while malformed rows are skipped and counted so one
/// bad record never aborts the ingest.
pub fn parse_dataset(bytes: &[u8]) -> Result<PopulationDataset, DatasetLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or(DatasetLoadError::MissingColumn(name))
    };
    let lat_idx = column("lat")?;
    let lng_idx = column("lng")?;
    let pop_idx = column("pop")?;

    let mut points = Vec::new();
    let mut skipped_rows = 0usize;
    for record in reader.records() {
        let Ok(record) = record else {
            skipped_rows += 1;
            continue;
        };
        match parse_row(&record, lat_idx, lng_idx, pop_idx) {
            Some(point) => points.push(point),
            None => skipped_rows += 1,
        }
    }

    Ok(PopulationDataset {
        points,
        skipped_rows,
    })
}

fn parse_row(
    record: &csv::StringRecord,
    lat_idx: usize,
    lng_idx: usize,
    pop_idx: usize,
) -> Option<PopulationPoint> {
    let latitude: f64 = record.get(lat_idx)?.parse().ok()?;
    let longitude: f64 = record.get(lng_idx)?.parse().ok()?;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }

    // An unparsable population keeps its row; the encoder maps it into the
    // flat catch-all bucket instead of propagating NaN into geometry.
    let population = record.get(pop_idx)?.parse().unwrap_or(f64::NAN);
    Some(PopulationPoint::new(latitude, longitude, population))
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::tier::PopulationTier;

    #[test]
    fn parses_rows_in_order() {
        let data = b"lat,lng,pop\n51.5,-0.12,9000000\n-33.9,151.2,5300000\n";
        let dataset = parse_dataset(data).unwrap();
        assert_eq!(dataset.points.len(), 2);
        assert_eq!(dataset.skipped_rows, 0);
        assert_eq!(dataset.points[0].latitude, 51.5);
        assert_eq!(dataset.points[1].longitude, 151.2);
    }

    #[test]
    fn header_order_is_insignificant() {
        let data = b"pop,lat,lng\n250000,35.7,139.7\n";
        let dataset = parse_dataset(data).unwrap();
        assert_eq!(dataset.points.len(), 1);
        assert_eq!(dataset.points[0].population, 250_000.0);
        assert_eq!(dataset.points[0].tier, PopulationTier::Medium);
    }

    #[test]
    fn missing_header_column_fails_the_load() {
        let data = b"lat,lng\n10.0,20.0\n";
        match parse_dataset(data) {
            Err(DatasetLoadError::MissingColumn("pop")) => {}
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let data = b"lat,lng,pop\nnot-a-number,1.0,100\n10.0,20.0,100\n999.0,0.0,100\n";
        let dataset = parse_dataset(data).unwrap();
        // Bad latitude text and the out-of-range latitude both drop.
        assert_eq!(dataset.points.len(), 1);
        assert_eq!(dataset.skipped_rows, 2);
    }

    #[test]
    fn short_rows_are_skipped() {
        let data = b"lat,lng,pop\n10.0\n10.0,20.0,500\n";
        let dataset = parse_dataset(data).unwrap();
        assert_eq!(dataset.points.len(), 1);
        assert_eq!(dataset.skipped_rows, 1);
    }

    #[test]
    fn empty_population_keeps_the_row_flat() {
        let data = b"lat,lng,pop\n10.0,20.0,\n30.0,40.0,abc\n";
        let dataset = parse_dataset(data).unwrap();
        assert_eq!(dataset.points.len(), 2);
        assert_eq!(dataset.skipped_rows, 0);
        for point in &dataset.points {
            assert_eq!(point.tier, PopulationTier::Small);
            assert_eq!(point.render_altitude, 0.0);
            assert_eq!(point.population, 0.0);
        }
    }
}
