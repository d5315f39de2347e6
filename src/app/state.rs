//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::employee::Employee;
use crate::core::fetch::FETCH_FAILED;
use crate::core::paginator::Paginator;

use super::fetch_runtime::FetchResult;

/// Longest page number the digit prompt accepts.
const MAX_PAGE_INPUT: usize = 6;

/// Top-level application state.
pub struct AppState {
    /// The full employee list, empty until the fetch succeeds.
    pub employees: Vec<Employee>,
    /// Page cursor over `employees`.
    pub paginator: Paginator,
    /// `true` until the fetch resolves either way.
    pub loading: bool,
    /// Error text from a failed fetch, shown above the table.
    pub error: Option<String>,
    /// Blocking alert message.  While set, only dismiss/quit keys act.
    pub alert: Option<String>,
    /// Page requested before the list arrived (`--page`), applied on load.
    pub pending_page: Option<usize>,
    /// Digits typed so far for a direct page jump.
    pub page_input: String,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// User-configurable keybindings.
    pub config: AppConfig,
    /// Monotonic tick counter (drives the loading spinner).
    pub tick: u64,
    /// Where the pager bar was last drawn, for mouse hit-testing.
    pub pager_area: Rect,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            employees: Vec::new(),
            paginator: Paginator::default(),
            loading: true,
            error: None,
            alert: None,
            pending_page: None,
            page_input: String::new(),
            should_quit: false,
            config,
            tick: 0,
            pager_area: Rect::default(),
        }
    }

    /// Rows on the current page.
    pub fn visible_employees(&self) -> &[Employee] {
        self.paginator.page_slice(&self.employees)
    }

    /// Apply the outcome of the one-shot fetch.
    pub fn apply_fetch(&mut self, result: FetchResult) {
        match result {
            Ok(list) => {
                self.paginator.set_len(list.len());
                self.employees = list;
                if let Some(page) = self.pending_page.take() {
                    self.paginator.go_to(page);
                }
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.alert = Some(FETCH_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Jump to `page` (clamped).  Before the list arrives the request is
    /// remembered and applied once it does.
    pub fn go_to_page(&mut self, page: usize) {
        if self.loading {
            self.pending_page = Some(page);
            return;
        }
        if self.paginator.go_to(page) {
            tracing::debug!("page -> {}", self.paginator.current_page());
        }
    }

    pub fn push_page_digit(&mut self, digit: char) {
        if self.page_input.len() < MAX_PAGE_INPUT && digit.is_ascii_digit() {
            self.page_input.push(digit);
        }
    }

    /// Jump to the typed page number, if any, and clear the prompt.
    pub fn commit_page_input(&mut self) {
        let input = std::mem::take(&mut self.page_input);
        if let Ok(page) = input.parse::<usize>() {
            self.go_to_page(page);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::fetch::FetchError;

    pub(crate) fn sample(n: usize) -> Vec<Employee> {
        (1..=n)
            .map(|i| {
                Employee::new(
                    i.to_string(),
                    format!("Person {i}"),
                    format!("person{i}@example.com"),
                    if i % 5 == 0 { "admin" } else { "member" },
                )
            })
            .collect()
    }

    #[test]
    fn starts_loading_on_page_one() {
        let state = AppState::new(AppConfig::default());
        assert!(state.loading);
        assert_eq!(state.paginator.current_page(), 1);
        assert!(state.visible_employees().is_empty());
    }

    #[test]
    fn successful_fetch_fills_first_page() {
        let mut state = AppState::new(AppConfig::default());
        state.apply_fetch(Ok(sample(46)));

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.paginator.total_pages(), 5);
        let ids: Vec<&str> = state.visible_employees().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
    }

    #[test]
    fn failed_fetch_sets_error_and_alert() {
        let mut state = AppState::new(AppConfig::default());
        state.apply_fetch(Err(FetchError::Status(reqwest::StatusCode::NOT_FOUND)));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(FETCH_FAILED));
        assert_eq!(state.alert.as_deref(), Some(FETCH_FAILED));
        assert!(state.employees.is_empty());
    }

    #[test]
    fn page_requested_while_loading_applies_on_arrival() {
        let mut state = AppState::new(AppConfig::default());
        state.go_to_page(3);
        assert_eq!(state.paginator.current_page(), 1);

        state.apply_fetch(Ok(sample(46)));
        assert_eq!(state.paginator.current_page(), 3);
        assert_eq!(state.visible_employees()[0].id, "21");
    }

    #[test]
    fn pending_page_is_clamped() {
        let mut state = AppState::new(AppConfig::default());
        state.go_to_page(40);
        state.apply_fetch(Ok(sample(12)));
        assert_eq!(state.paginator.current_page(), 2);
    }

    #[test]
    fn typed_page_number_jumps_and_clears() {
        let mut state = AppState::new(AppConfig::default());
        state.apply_fetch(Ok(sample(46)));

        state.push_page_digit('4');
        state.push_page_digit('x');
        assert_eq!(state.page_input, "4");
        state.commit_page_input();

        assert_eq!(state.paginator.current_page(), 4);
        assert!(state.page_input.is_empty());
    }

    #[test]
    fn empty_page_input_commit_is_noop() {
        let mut state = AppState::new(AppConfig::default());
        state.apply_fetch(Ok(sample(46)));
        state.go_to_page(2);
        state.commit_page_input();
        assert_eq!(state.paginator.current_page(), 2);
    }
}
