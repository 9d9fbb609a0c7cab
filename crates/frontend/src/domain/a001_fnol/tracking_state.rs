use crate::shared::api_utils::ApiError;
use contracts::domain::a001_fnol::StatusSnapshot;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupPhase {
    #[default]
    Idle,
    /// Lookup in flight for this id
    Searching(String),
    Found(StatusSnapshot),
    NotFound,
}

/// Status lookup: one fetch per explicit search, nothing cached
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackingState {
    pub query: String,
    pub phase: LookupPhase,
    pub banner: Option<String>,
}

impl TrackingState {
    /// Store the typed reference in upper case
    pub fn set_query(&mut self, value: &str) {
        self.query = value.to_uppercase();
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.phase, LookupPhase::Searching(_))
    }

    fn in_flight(&self) -> Option<&str> {
        match &self.phase {
            LookupPhase::Searching(id) => Some(id),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        match &self.phase {
            LookupPhase::Found(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Start a search; returns the id to fetch, or `None` when there is nothing to do
    pub fn begin_search(&mut self) -> Option<String> {
        if self.is_searching() {
            return None;
        }
        self.start(self.query.trim().to_string())
    }

    /// Search for an id taken from the URL.
    ///
    /// A different id replaces a lookup that is still in flight; the older
    /// result is then ignored by [`Self::resolve`].
    pub fn search_for(&mut self, id: &str) -> Option<String> {
        self.set_query(id);
        let id = self.query.trim().to_string();
        if self.in_flight() == Some(id.as_str()) {
            return None;
        }
        self.start(id)
    }

    fn start(&mut self, id: String) -> Option<String> {
        if id.is_empty() {
            return None;
        }
        self.phase = LookupPhase::Searching(id.clone());
        self.banner = None;
        Some(id)
    }

    /// Apply the result of the lookup for `id`; the banner uses the server message or `fallback`.
    ///
    /// Returns `false` when `id` is no longer the lookup in flight and the result was dropped.
    pub fn resolve(&mut self, id: &str, result: Result<StatusSnapshot, ApiError>, fallback: &str) -> bool {
        if self.in_flight() != Some(id) {
            log::debug!("tracking: dropping stale result for {}", id);
            return false;
        }
        match result {
            Ok(snapshot) => {
                self.phase = LookupPhase::Found(snapshot);
                self.banner = None;
            }
            Err(e) => {
                self.phase = LookupPhase::NotFound;
                self.banner = Some(e.user_message(fallback));
            }
        }
        true
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }
}

pub fn create_state() -> RwSignal<TrackingState> {
    RwSignal::new(TrackingState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(id: &str, status: &str) -> StatusSnapshot {
        StatusSnapshot {
            fnol_id: id.to_string(),
            status: status.to_string(),
            severity_level: "MEDIUM".into(),
            route: "standard".into(),
            created_at: "2025-04-02T10:30:00".into(),
            updated_at: None,
        }
    }

    #[test]
    fn test_query_is_upper_cased() {
        let mut state = TrackingState::default();
        state.set_query("fnol-uae-2025-000123");
        assert_eq!(state.query, "FNOL-UAE-2025-000123");
    }

    #[test]
    fn test_blank_query_does_not_search() {
        let mut state = TrackingState::default();
        state.set_query("   ");
        assert_eq!(state.begin_search(), None);
        assert_eq!(state.phase, LookupPhase::Idle);
    }

    #[test]
    fn test_search_trims_and_blocks_while_in_flight() {
        let mut state = TrackingState::default();
        state.set_query(" fnol-sau-2025-000007 ");

        assert_eq!(state.begin_search().as_deref(), Some("FNOL-SAU-2025-000007"));
        assert!(state.is_searching());
        assert_eq!(state.begin_search(), None);
    }

    #[test]
    fn test_found_snapshot_is_shown() {
        let mut state = TrackingState::default();
        state.search_for("FNOL-UAE-2025-000123");
        assert!(state.resolve("FNOL-UAE-2025-000123", Ok(snapshot("FNOL-UAE-2025-000123", "IN_PROGRESS")), "FNOL not found"));

        assert_eq!(state.snapshot().map(|s| s.status.as_str()), Some("IN_PROGRESS"));
        assert_eq!(state.banner, None);
    }

    #[test]
    fn test_failure_discards_previous_snapshot() {
        let mut state = TrackingState::default();
        state.search_for("FNOL-UAE-2025-000123");
        state.resolve("FNOL-UAE-2025-000123", Ok(snapshot("FNOL-UAE-2025-000123", "SUBMITTED")), "FNOL not found");

        state.set_query("FNOL-UAE-2025-999999");
        state.begin_search();
        assert_eq!(state.snapshot(), None);
        state.resolve("FNOL-UAE-2025-999999", Err(ApiError::NotFound { message: None }), "FNOL not found");

        assert_eq!(state.phase, LookupPhase::NotFound);
        assert_eq!(state.banner.as_deref(), Some("FNOL not found"));
    }

    #[test]
    fn test_server_message_wins_over_fallback() {
        let mut state = TrackingState::default();
        state.search_for("FNOL-X");
        state.resolve(
            "FNOL-X",
            Err(ApiError::NotFound {
                message: Some("FNOL not found: FNOL-X".into()),
            }),
            "FNOL not found",
        );
        assert_eq!(state.banner.as_deref(), Some("FNOL not found: FNOL-X"));

        state.dismiss_banner();
        assert_eq!(state.banner, None);
        assert_eq!(state.phase, LookupPhase::NotFound);
    }

    #[test]
    fn test_route_change_replaces_lookup_in_flight() {
        let mut state = TrackingState::default();
        assert_eq!(state.search_for("FNOL-A").as_deref(), Some("FNOL-A"));
        assert_eq!(state.search_for("FNOL-A"), None);
        assert_eq!(state.search_for("FNOL-B").as_deref(), Some("FNOL-B"));
        assert_eq!(state.phase, LookupPhase::Searching("FNOL-B".into()));

        assert!(!state.resolve("FNOL-A", Ok(snapshot("FNOL-A", "SUBMITTED")), "FNOL not found"));
        assert!(state.is_searching());
        assert_eq!(state.snapshot(), None);

        assert!(state.resolve("FNOL-B", Ok(snapshot("FNOL-B", "IN_PROGRESS")), "FNOL not found"));
        assert_eq!(state.query, "FNOL-B");
        assert_eq!(state.snapshot().map(|s| s.fnol_id.as_str()), Some("FNOL-B"));
    }
}
