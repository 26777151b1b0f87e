use std::collections::HashMap;

use super::series::{ChartError, ChartKind, ChartSpec, Series};

/// Something that can draw a chart into a DOM element and tear it down again.
pub trait ChartBackend {
    fn mount(&mut self, canvas_id: &str, spec: &ChartSpec) -> Result<(), ChartError>;
    fn destroy(&mut self, canvas_id: &str);
}

/// Bookkeeping for one live chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    pub canvas_id: String,
    pub kind: ChartKind,
    /// Increases with every chart the registry creates.
    pub generation: u64,
    pub points: usize,
}

/// Owns every live chart, keyed by canvas id. A canvas never holds more than
/// one chart: the old one is destroyed before its replacement is mounted.
pub struct ChartRegistry<B> {
    backend: B,
    live: HashMap<String, ChartHandle>,
    generation: u64,
}

impl<B: ChartBackend> ChartRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: HashMap::new(),
            generation: 0,
        }
    }

    pub fn render(&mut self, canvas_id: &str, spec: &ChartSpec) -> Result<&ChartHandle, ChartError> {
        if self.destroy(canvas_id) {
            log::trace!("Replacing chart on {}", canvas_id);
        }

        self.backend.mount(canvas_id, spec)?;
        self.generation += 1;
        log::trace!(
            "Created {:?} chart #{} on {} ({} points)",
            spec.kind,
            self.generation,
            canvas_id,
            spec.labels.len()
        );

        let handle = ChartHandle {
            canvas_id: canvas_id.to_string(),
            kind: spec.kind,
            generation: self.generation,
            points: spec.labels.len(),
        };
        Ok(self.live.entry(canvas_id.to_string()).or_insert(handle))
    }

    /// Misaligned series fail before anything on the canvas is touched.
    pub fn render_line_chart(&mut self, canvas_id: &str, series: Vec<Series>) -> Result<&ChartHandle, ChartError> {
        let spec = ChartSpec::from_series(ChartKind::Line, series)?;
        self.render(canvas_id, &spec)
    }

    pub fn render_bar_chart(&mut self, canvas_id: &str, series: Vec<Series>) -> Result<&ChartHandle, ChartError> {
        let spec = ChartSpec::from_series(ChartKind::Bar, series)?;
        self.render(canvas_id, &spec)
    }

    pub fn destroy(&mut self, canvas_id: &str) -> bool {
        match self.live.remove(canvas_id) {
            Some(handle) => {
                self.backend.destroy(canvas_id);
                log::trace!("Destroyed chart #{} on {}", handle.generation, canvas_id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Counts widgets the way a real canvas would see them.
    #[derive(Default)]
    struct FakeBackend {
        on_screen: HashSet<String>,
        overlays: usize,
        created: usize,
        destroyed: usize,
        fail_mount: bool,
    }

    impl ChartBackend for FakeBackend {
        fn mount(&mut self, canvas_id: &str, _spec: &ChartSpec) -> Result<(), ChartError> {
            if self.fail_mount {
                return Err(ChartError::Mount {
                    canvas_id: canvas_id.to_string(),
                    message: "no such element".to_string(),
                });
            }
            if !self.on_screen.insert(canvas_id.to_string()) {
                self.overlays += 1;
            }
            self.created += 1;
            Ok(())
        }

        fn destroy(&mut self, canvas_id: &str) {
            self.on_screen.remove(canvas_id);
            self.destroyed += 1;
        }
    }

    fn series(points: &[(&str, f64)]) -> Vec<Series> {
        vec![Series::new(
            "Average Price",
            "red",
            points.iter().map(|(l, v)| (l.to_string(), *v)).collect(),
        )]
    }

    #[test]
    fn test_rerender_leaves_one_instance() {
        let mut registry = ChartRegistry::new(FakeBackend::default());

        registry.render_line_chart("priceChart", series(&[("a", 1.0)])).unwrap();
        let second = registry
            .render_line_chart("priceChart", series(&[("a", 1.0), ("b", 2.0)]))
            .unwrap()
            .clone();

        assert_eq!(registry.live.len(), 1);
        assert_eq!(second.generation, 2);
        assert_eq!(second.points, 2);
        let backend = &registry.backend;
        assert_eq!(backend.on_screen.len(), 1);
        assert_eq!(backend.overlays, 0);
        assert_eq!((backend.created, backend.destroyed), (2, 1));
    }

    #[test]
    fn test_canvases_are_independent() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        registry.render_line_chart("priceChart", series(&[("a", 1.0)])).unwrap();
        registry.render_bar_chart("airlineChart", series(&[("IndiGo", 1.0)])).unwrap();

        assert_eq!(registry.live.len(), 2);
        assert_eq!(registry.live.get("airlineChart").map(|h| h.kind), Some(ChartKind::Bar));

        assert!(registry.destroy("priceChart"));
        assert!(!registry.destroy("priceChart"));
        assert_eq!(registry.live.len(), 1);
        assert_eq!(registry.backend.destroyed, 1);
    }

    #[test]
    fn test_failed_mount_leaves_nothing_live() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        registry.render_line_chart("priceChart", series(&[("a", 1.0)])).unwrap();

        registry.backend.fail_mount = true;
        let err = registry.render_line_chart("priceChart", series(&[("b", 2.0)]));
        assert!(matches!(err, Err(ChartError::Mount { .. })));
        assert_eq!(registry.live.len(), 0);
        assert!(registry.backend.on_screen.is_empty());
    }

    #[test]
    fn test_misaligned_series_keep_previous_chart() {
        let mut registry = ChartRegistry::new(FakeBackend::default());
        registry.render_line_chart("priceChart", series(&[("a", 1.0)])).unwrap();

        let mut bad = series(&[("a", 1.0), ("b", 2.0)]);
        bad.push(Series::new("Maximum Price", "blue", vec![("a".to_string(), 3.0)]));
        assert!(registry.render_line_chart("priceChart", bad).is_err());

        assert_eq!(registry.live.get("priceChart").map(|h| h.generation), Some(1));
        assert_eq!(registry.backend.destroyed, 0);
    }
}
