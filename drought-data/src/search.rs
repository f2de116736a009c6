//! Location search state machine.
//!
//! ```text
//!            input / submit (>= 3 chars)
//!   Idle ─────────────────────────────────▶ Pending
//!    ▲  ◀── input / submit (< 3 chars) ──── │  │
//!    │                                      │  │ failure: stays Pending
//!    │ select / outside click               ▼  │
//!    └─────────────────────────────── ShowingResults
//! ```
//!
//! The controller performs no I/O. Each method returns what the caller should
//! do next (start a request, clear the list, fly somewhere). Debounce timers
//! are represented by tickets and requests by ids, both drawn from
//! monotonically increasing counters. Only the latest ticket and the latest
//! request id are honored, so a slow response to an earlier query is never
//! shown over a newer one.

use crate::geocode::{GeocodeRequest, SearchResult, RESULT_LIMIT};
use crate::map::{FlyTo, FLY_DURATION};
use crate::nearest::nearest_station;
use crate::station::Station;
use std::time::Duration;

/// Quiet period after the last keystroke before a query is sent.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Extra wait after the fly-to animation before opening a popup.
pub const POPUP_BUFFER: Duration = Duration::from_millis(100);

/// Delay between selecting a result and opening the nearest station's popup.
pub fn popup_delay() -> Duration {
    FLY_DURATION + POPUP_BUFFER
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    /// Debounce timer running or request in flight
    Pending,
    /// Result list visible; empty means "No results found"
    ShowingResults(Vec<SearchResult>),
}

/// Handle for one debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Sequence number of an issued geocoding request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

/// What the caller must do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    Nothing,
    /// Results were cleared and the state is idle; nothing to fetch
    ClearResults,
    /// Send this request and report back with its id
    Fetch { id: RequestId, request: GeocodeRequest },
}

/// Effects of choosing a result row.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub result: SearchResult,
    pub fly_to: FlyTo,
    /// Index of the nearest station, if any station is loaded
    pub station_index: Option<usize>,
    pub popup_delay: Duration,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchController {
    state: SearchState,
    next_seq: u64,
    live_ticket: Option<Ticket>,
    live_request: Option<RequestId>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Results to render; empty unless showing results.
    pub fn results(&self) -> &[SearchResult] {
        match &self.state {
            SearchState::ShowingResults(results) => results.as_slice(),
            _ => &[],
        }
    }

    pub fn is_showing_results(&self) -> bool {
        matches!(self.state, SearchState::ShowingResults(_))
    }

    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Text changed. Supersedes any running debounce timer.
    pub fn on_input(&mut self) -> Ticket {
        let ticket = Ticket(self.next_seq());
        self.live_ticket = Some(ticket);
        self.state = SearchState::Pending;
        ticket
    }

    /// A debounce timer expired. Stale tickets do nothing.
    pub fn on_debounce_elapsed(&mut self, ticket: Ticket, query: &str) -> SearchAction {
        if self.live_ticket != Some(ticket) {
            return SearchAction::Nothing;
        }
        self.live_ticket = None;
        self.issue(query)
    }

    /// Button or Enter: search immediately, cancelling the debounce.
    pub fn submit(&mut self, query: &str) -> SearchAction {
        self.live_ticket = None;
        self.issue(query)
    }

    fn issue(&mut self, query: &str) -> SearchAction {
        match GeocodeRequest::new(query) {
            Ok(request) => {
                let id = RequestId(self.next_seq());
                self.live_request = Some(id);
                self.state = SearchState::Pending;
                SearchAction::Fetch { id, request }
            }
            Err(_) => {
                self.live_request = None;
                self.state = SearchState::Idle;
                SearchAction::ClearResults
            }
        }
    }

    /// A request completed. Returns false when the response was stale and
    /// has been discarded.
    pub fn on_response(&mut self, id: RequestId, mut results: Vec<SearchResult>) -> bool {
        if self.live_request != Some(id) {
            log::debug!("Discarding stale geocoder response {:?}", id);
            return false;
        }
        self.live_request = None;
        results.truncate(RESULT_LIMIT);
        self.state = SearchState::ShowingResults(results);
        true
    }

    /// A request failed. The state stays pending. Returns false when the
    /// failure belongs to a superseded request.
    pub fn on_failure(&mut self, id: RequestId) -> bool {
        if self.live_request != Some(id) {
            return false;
        }
        self.live_request = None;
        true
    }

    /// A result row was chosen. Resets to idle and reports where to fly and
    /// which station popup to open.
    pub fn select(&mut self, index: usize, stations: &[Station]) -> Option<Selection> {
        let result = self.results().get(index)?.clone();
        let station_index = nearest_station(stations, result.lat, result.lon).map(|(i, _)| i);

        self.state = SearchState::Idle;
        self.live_ticket = None;
        self.live_request = None;

        Some(Selection {
            fly_to: FlyTo::to(result.lat, result.lon),
            result,
            station_index,
            popup_delay: popup_delay(),
        })
    }

    /// Click outside the search widgets. Hides the list, keeps the input.
    pub fn dismiss(&mut self) {
        if self.is_showing_results() {
            self.state = SearchState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::tests::station;

    fn result(name: &str, lat: f64, lon: f64) -> SearchResult {
        SearchResult {
            display_name: name.to_string(),
            lat,
            lon,
        }
    }

    fn fetch_id(action: SearchAction) -> RequestId {
        match action {
            SearchAction::Fetch { id, .. } => id,
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_short_queries_never_fetch() {
        let mut search = SearchController::new();
        for query in ["", "a", "ab"] {
            let ticket = search.on_input();
            assert_eq!(search.on_debounce_elapsed(ticket, query), SearchAction::ClearResults);
            assert_eq!(search.state(), &SearchState::Idle);
            assert_eq!(search.submit(query), SearchAction::ClearResults);
        }
    }

    #[test]
    fn test_debounce_only_latest_ticket_fires() {
        let mut search = SearchController::new();
        let first = search.on_input();
        let second = search.on_input();
        assert_eq!(search.state(), &SearchState::Pending);

        assert_eq!(search.on_debounce_elapsed(first, "Par"), SearchAction::Nothing);
        match search.on_debounce_elapsed(second, "Paris") {
            SearchAction::Fetch { request, .. } => {
                assert_eq!(request.query, "Paris");
                assert_eq!(request.limit, 5);
            }
            other => panic!("expected fetch, got {:?}", other),
        }
        // a ticket fires at most once
        assert_eq!(search.on_debounce_elapsed(second, "Paris"), SearchAction::Nothing);
    }

    #[test]
    fn test_submit_bypasses_and_cancels_debounce() {
        let mut search = SearchController::new();
        let ticket = search.on_input();
        let id = fetch_id(search.submit("Lima"));
        assert_eq!(search.on_debounce_elapsed(ticket, "Lima"), SearchAction::Nothing);
        assert!(search.on_response(id, vec![result("Lima, Peru", -12.0, -77.0)]));
        assert_eq!(search.results().len(), 1);
    }

    #[test]
    fn test_results_and_empty_results() {
        let mut search = SearchController::new();
        let id = fetch_id(search.submit("Nowhereville"));
        assert!(search.on_response(id, vec![]));
        assert_eq!(search.state(), &SearchState::ShowingResults(vec![]));
        assert!(search.is_showing_results());

        let id = fetch_id(search.submit("Springfield"));
        let many = (0..9).map(|i| result("Springfield", i as f64, 0.0)).collect();
        assert!(search.on_response(id, many));
        assert_eq!(search.results().len(), 5);
    }

    #[test]
    fn test_out_of_order_responses_keep_latest() {
        let mut search = SearchController::new();
        let older = fetch_id(search.submit("Berl"));
        let newer = fetch_id(search.submit("Berlin"));
        assert!(newer > older);

        assert!(search.on_response(newer, vec![result("Berlin, Germany", 52.5, 13.4)]));
        assert!(!search.on_response(older, vec![result("Berlingen", 47.6, 9.0)]));
        assert_eq!(search.results()[0].display_name, "Berlin, Germany");
    }

    #[test]
    fn test_clearing_query_discards_in_flight_request() {
        let mut search = SearchController::new();
        let id = fetch_id(search.submit("Oslo"));
        assert_eq!(search.submit("Os"), SearchAction::ClearResults);
        assert!(!search.on_response(id, vec![result("Oslo", 59.9, 10.7)]));
        assert_eq!(search.state(), &SearchState::Idle);
    }

    #[test]
    fn test_clear_results_hides_visible_list() {
        let mut search = SearchController::new();
        let id = fetch_id(search.submit("Lagos"));
        search.on_response(id, vec![result("Lagos, Nigeria", 6.5, 3.4)]);
        assert!(search.is_showing_results());

        let ticket = search.on_input();
        assert_eq!(search.on_debounce_elapsed(ticket, "La"), SearchAction::ClearResults);
        assert!(!search.is_showing_results());
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_failure_stays_pending() {
        let mut search = SearchController::new();
        let older = fetch_id(search.submit("Cairo"));
        let newer = fetch_id(search.submit("Cairo, Egypt"));
        assert!(!search.on_failure(older));
        assert!(search.on_failure(newer));
        assert_eq!(search.state(), &SearchState::Pending);
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_select_flies_and_picks_nearest_station() {
        let stations = vec![
            station(0.0, 0.0, 0.0),
            station(10.0, 10.0, 0.0),
            station(5.0, 5.0, 0.0),
        ];
        let mut search = SearchController::new();
        let id = fetch_id(search.submit("Somewhere"));
        search.on_response(id, vec![result("Elsewhere", 50.0, 50.0), result("Somewhere", 4.0, 4.0)]);

        let selection = search.select(1, &stations).unwrap();
        assert_eq!(selection.station_index, Some(2));
        assert_eq!(selection.fly_to, FlyTo::to(4.0, 4.0));
        assert_eq!(selection.popup_delay, Duration::from_millis(1600));
        assert_eq!(selection.result.primary_name(), "Somewhere");
        assert_eq!(search.state(), &SearchState::Idle);
    }

    #[test]
    fn test_select_without_stations_or_results() {
        let mut search = SearchController::new();
        assert!(search.select(0, &[]).is_none());

        let id = fetch_id(search.submit("Quito"));
        search.on_response(id, vec![result("Quito", -0.2, -78.5)]);
        assert!(search.select(3, &[]).is_none());
        let selection = search.select(0, &[]).unwrap();
        assert_eq!(selection.station_index, None);
    }

    #[test]
    fn test_dismiss_only_hides_results() {
        let mut search = SearchController::new();
        search.on_input();
        search.dismiss();
        assert_eq!(search.state(), &SearchState::Pending);

        let id = fetch_id(search.submit("Accra"));
        search.on_response(id, vec![result("Accra", 5.6, -0.2)]);
        search.dismiss();
        assert_eq!(search.state(), &SearchState::Idle);
    }
}
