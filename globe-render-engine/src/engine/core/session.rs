use bevy::prelude::*;

use crate::engine::assets::population::PopulationPoint;

/// Single-owner session state behind the rendered markers.
///
/// The point collection is replaced wholesale on each ingest and the ready
/// flag latches once per session lifetime. All mutation goes through the
/// methods below; no other component holds a writable reference.
#[derive(Resource, Default)]
pub struct GlobeSession {
    points: Vec<PopulationPoint>,
    ready: bool,
    skipped_rows: usize,
}

impl GlobeSession {
    pub fn points(&self) -> &[PopulationPoint] {
        &self.points
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Replace the collection atomically. Last writer wins; there is no
    /// incremental merge, so a partially ingested state is never observable.
    pub fn replace_points(&mut self, points: Vec<PopulationPoint>, skipped_rows: usize) {
        self.points = points;
        self.skipped_rows = skipped_rows;
    }

    /// Latch the ready flag. Returns true only on the first call; the flag
    /// never reverts for the rest of the session.
    pub fn mark_ready(&mut self) -> bool {
        if self.ready {
            return false;
        }
        self.ready = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(pop: f64) -> PopulationPoint {
        PopulationPoint::new(10.0, 20.0, pop)
    }

    #[test]
    fn replacement_is_wholesale() {
        let mut session = GlobeSession::default();
        session.replace_points(vec![point(100.0), point(200.0)], 1);
        assert_eq!(session.points().len(), 2);
        assert_eq!(session.skipped_rows(), 1);

        session.replace_points(vec![point(300.0)], 0);
        assert_eq!(session.points().len(), 1);
        assert_eq!(session.points()[0].population, 300.0);
        assert_eq!(session.skipped_rows(), 0);
    }

    #[test]
    fn ready_latches_exactly_once() {
        let mut session = GlobeSession::default();
        assert!(!session.is_ready());
        assert!(session.mark_ready());
        assert!(session.is_ready());
        // Repeated attempts report no transition and never reset the flag.
        assert!(!session.mark_ready());
        assert!(!session.mark_ready());
        assert!(session.is_ready());
    }
}
