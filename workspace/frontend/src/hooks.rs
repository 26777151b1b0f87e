use crate::api_client::ApiError;

/// Where one page region is in its fetch-to-display cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<T> {
    Idle,
    Loading,
    Rendered(T),
    Failed(ApiError),
}

impl<T> Default for RenderState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RenderState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

impl<T> From<Result<T, ApiError>> for RenderState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Rendered(data),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Monotonic tag handed to each fetch of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleId(u64);

/// Tracks the newest cycle issued for one region. Completions of older
/// cycles are ignored, so whichever fetch was started last is the one that
/// stays on screen no matter the order responses arrive in.
#[derive(Debug, Default)]
pub struct RenderCycle {
    latest: u64,
}

impl RenderCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new cycle, superseding all earlier ones.
    pub fn begin(&mut self) -> CycleId {
        self.latest += 1;
        CycleId(self.latest)
    }

    pub fn is_current(&self, id: CycleId) -> bool {
        id.0 == self.latest
    }

    /// The state to show for a finished fetch, or `None` when a newer cycle
    /// has started since.
    pub fn settle<T>(&self, id: CycleId, result: Result<T, ApiError>) -> Option<RenderState<T>> {
        if self.is_current(id) {
            Some(result.into())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: RenderState<u32> = RenderState::default();
        assert_eq!(state, RenderState::Idle);
        assert!(!state.is_loading() && !state.is_rendered());
    }

    #[test]
    fn test_result_conversion() {
        let ok: RenderState<u32> = Ok(3).into();
        assert!(ok.is_rendered());
        assert_eq!(ok, RenderState::Rendered(3));

        let failed: RenderState<u32> = Err(ApiError::Network("offline".to_string())).into();
        match failed {
            RenderState::Failed(err) => assert_eq!(err.to_string(), "Request failed: offline"),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_single_cycle_applies() {
        let mut cycle = RenderCycle::new();
        let id = cycle.begin();
        assert_eq!(cycle.settle(id, Ok("fresh")), Some(RenderState::Rendered("fresh")));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut cycle = RenderCycle::new();
        let manual = cycle.begin();
        let timer = cycle.begin();

        // the later cycle resolves first, the earlier one afterwards
        let shown = cycle.settle(timer, Ok(vec![2]));
        let late = cycle.settle(manual, Ok(vec![1]));

        assert_eq!(shown, Some(RenderState::Rendered(vec![2])));
        assert_eq!(late, None);
    }

    #[test]
    fn test_stale_failure_is_discarded_too() {
        let mut cycle = RenderCycle::new();
        let first = cycle.begin();
        let second = cycle.begin();

        assert_eq!(cycle.settle::<u32>(first, Err(ApiError::Parse("eof".to_string()))), None);
        assert!(cycle.is_current(second));
        assert!(!cycle.is_current(first));
        assert!(first < second);
    }
}
