//! Debounce and dropdown state for one search input.
//!
//! The controller never touches the DOM. Each event returns the [`Action`]s
//! the caller has to carry out, so the whole flow runs in plain unit tests.

use std::time::Duration;

use tracing::{debug, warn};

use crate::api;
use crate::config::SuggestConfig;
use crate::error::WebstoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestState {
    Idle,
    Debouncing,
    AwaitingResponse,
    ShowingList,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    StartTimer { timer: TimerId, delay: Duration },
    CancelTimer(TimerId),
    Fetch { request: RequestId, url: String },
    Render(Vec<String>),
    Hide,
    SetInput(String),
    SubmitForm,
}

#[derive(Debug)]
struct PendingQuery {
    timer: TimerId,
    query: String,
}

#[derive(Debug)]
pub struct SuggestionController {
    config: SuggestConfig,
    state: SuggestState,
    pending: Option<PendingQuery>,
    next_timer: u64,
    next_request: u64,
    // Responses to requests numbered below this were dismissed.
    accept_from: u64,
}

impl SuggestionController {
    pub fn new(config: SuggestConfig) -> Self {
        Self {
            config,
            state: SuggestState::Idle,
            pending: None,
            next_timer: 0,
            next_request: 0,
            accept_from: 0,
        }
    }

    pub fn state(&self) -> SuggestState {
        self.state
    }

    fn long_enough(&self, value: &str) -> bool {
        value.chars().count() >= self.config.min_query_chars
    }

    /// The input's value changed.
    pub fn input_changed(&mut self, value: &str) -> Vec<Action> {
        let mut actions = self.cancel_pending();

        if !self.long_enough(value) {
            self.dismiss(&mut actions);
            return actions;
        }

        self.next_timer += 1;
        let timer = TimerId(self.next_timer);
        self.pending = Some(PendingQuery {
            timer,
            query: value.to_string(),
        });
        self.state = SuggestState::Debouncing;
        actions.push(Action::StartTimer {
            timer,
            delay: self.config.debounce(),
        });
        actions
    }

    /// A timer started by [`Action::StartTimer`] fired.
    pub fn debounce_elapsed(&mut self, timer: TimerId) -> Vec<Action> {
        match self.pending.take() {
            Some(pending) if pending.timer == timer => vec![self.fetch(&pending.query)],
            other => {
                // Cancelled timer that fired anyway.
                self.pending = other;
                Vec::new()
            }
        }
    }

    /// A request issued via [`Action::Fetch`] completed.
    pub fn response(
        &mut self,
        request: RequestId,
        result: Result<Vec<String>, WebstoreError>,
    ) -> Vec<Action> {
        if request.0 < self.accept_from {
            debug!("Dropping response {} after dismissal", request.0);
            return Vec::new();
        }

        match result {
            Ok(items) if !items.is_empty() => {
                self.state = SuggestState::ShowingList;
                vec![Action::Render(items)]
            }
            Ok(_) => {
                self.state = self.settled_state();
                vec![Action::Hide]
            }
            Err(e) => {
                warn!("Suggestion request failed: {}", e);
                self.state = self.settled_state();
                vec![Action::Hide]
            }
        }
    }

    /// The input gained focus. Fetches afresh when the value is long enough.
    pub fn focused(&mut self, value: &str) -> Vec<Action> {
        if !self.long_enough(value) {
            return Vec::new();
        }
        let mut actions = self.cancel_pending();
        actions.push(self.fetch(value));
        actions
    }

    /// Pointer down somewhere outside both the input and the list.
    pub fn outside_interaction(&mut self) -> Vec<Action> {
        let mut actions = self.cancel_pending();
        self.dismiss(&mut actions);
        actions
    }

    /// The user picked a rendered suggestion.
    pub fn select(&mut self, suggestion: &str) -> Vec<Action> {
        let mut actions = self.cancel_pending();
        actions.push(Action::SetInput(suggestion.to_string()));
        self.dismiss(&mut actions);
        actions.push(Action::SubmitForm);
        actions
    }

    fn fetch(&mut self, query: &str) -> Action {
        self.next_request += 1;
        self.state = SuggestState::AwaitingResponse;
        Action::Fetch {
            request: RequestId(self.next_request),
            url: api::suggestion_url(&self.config.endpoint, query),
        }
    }

    fn cancel_pending(&mut self) -> Vec<Action> {
        self.pending
            .take()
            .map(|p| vec![Action::CancelTimer(p.timer)])
            .unwrap_or_default()
    }

    fn dismiss(&mut self, actions: &mut Vec<Action>) {
        self.accept_from = self.next_request + 1;
        self.state = SuggestState::Idle;
        actions.push(Action::Hide);
    }

    fn settled_state(&self) -> SuggestState {
        if self.pending.is_some() {
            SuggestState::Debouncing
        } else {
            SuggestState::Idle
        }
    }
}
