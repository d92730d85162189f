//! The paged slice of admission-list state.

use roster_states::State;
use std::any::Any;

use crate::Applicant;

/// Previous/Next links move the page offset by this many rows.
pub const PAGE_STEP: i64 = 5;

/// The shared slice the table view renders from.
///
/// Owned by `StateCtx`; the view only reads it and dispatches page requests.
/// `offset` is the most recently *requested* page, `None` before the first
/// request so that the initial page 0 still triggers a fetch.
#[derive(Debug, Default)]
pub struct RosterState {
    applicants: Vec<Applicant>,
    is_loading: bool,
    offset: Option<i64>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The displayed page offset; 0 until a page has been requested.
    pub fn current_offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    /// Whether `offset` differs from the most recently requested page.
    pub fn needs_page(&self, offset: i64) -> bool {
        self.offset != Some(offset)
    }

    /// Record a page request. A repeat request for the already-current
    /// offset is a no-op, which is what makes the caller idempotent.
    pub fn begin_request(&mut self, offset: i64) {
        if !self.needs_page(offset) {
            return;
        }
        self.offset = Some(offset);
        self.is_loading = true;
    }

    /// Apply a fetched page. Responses for anything but the most recent
    /// request are stale and dropped.
    pub fn receive_page(&mut self, offset: i64, applicants: Vec<Applicant>) {
        if self.offset != Some(offset) {
            log::debug!(
                "dropping stale page {offset}, current request is {:?}",
                self.offset
            );
            return;
        }
        self.applicants = applicants;
        self.is_loading = false;
    }

    /// Clear the loading flag after a failed fetch of the current request.
    /// The failure itself never reaches the view.
    pub fn fail_page(&mut self, offset: i64) {
        if self.offset == Some(offset) {
            self.is_loading = false;
        }
    }
}

impl State for RosterState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: &[i32]) -> Vec<Applicant> {
        ids.iter()
            .map(|id| Applicant {
                id: *id,
                ..Applicant::default()
            })
            .collect()
    }

    #[test]
    fn fresh_state_needs_page_zero() {
        let state = RosterState::new();
        assert!(state.needs_page(0));
        assert_eq!(state.current_offset(), 0);
        assert!(!state.is_loading());
    }

    #[test]
    fn begin_request_sets_loading_once_per_offset() {
        let mut state = RosterState::new();

        state.begin_request(0);
        assert!(state.is_loading());
        assert_eq!(state.current_offset(), 0);
        assert!(!state.needs_page(0));

        // Re-rendering with the same offset must not re-request.
        state.receive_page(0, page(&[1]));
        state.begin_request(0);
        assert!(!state.is_loading());
    }

    #[test]
    fn receive_page_applies_matching_offset() {
        let mut state = RosterState::new();
        state.begin_request(5);
        state.receive_page(5, page(&[6, 7]));

        assert!(!state.is_loading());
        assert_eq!(state.applicants().len(), 2);
        assert_eq!(state.applicants()[0].id, 6);
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = RosterState::new();
        state.begin_request(0);
        state.begin_request(5);

        // The page-0 response arrives after page 5 was requested.
        state.receive_page(0, page(&[1, 2]));
        assert!(state.is_loading());
        assert!(state.applicants().is_empty());

        state.receive_page(5, page(&[6]));
        assert!(!state.is_loading());
        assert_eq!(state.applicants()[0].id, 6);
    }

    #[test]
    fn fail_page_clears_loading_only_for_current_request() {
        let mut state = RosterState::new();
        state.begin_request(0);
        state.begin_request(5);

        state.fail_page(0);
        assert!(state.is_loading());

        state.fail_page(5);
        assert!(!state.is_loading());
    }
}
