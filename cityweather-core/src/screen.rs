//! Presentation model for the single weather screen.
//!
//! [`WeatherScreen`] owns the observable slots (query text, suggestions,
//! current record, loading flag) and publishes every change through a
//! `tokio::sync::watch` channel. Views subscribe and re-render; they never
//! write the slots directly.
//!
//! Each fetch is tagged with a sequence number. A result is applied only if
//! no newer fetch has been issued since, so a slow response can never
//! overwrite a fresher one. Superseded requests are not aborted, their
//! results are just dropped.

use chrono::{DateTime, Utc};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tokio::{sync::watch, task::JoinHandle};
use tracing::debug;

use crate::{CityMatches, WeatherRecord, WeatherSource};

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub query: String,
    pub suggestions: CityMatches,
    /// Whether the suggestion list should be visible.
    pub focused: bool,
    pub record: Option<WeatherRecord>,
    pub loading: bool,
    /// When the latest fetch finished, successfully or not.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            query: String::new(),
            suggestions: CityMatches::for_query(""),
            focused: false,
            record: None,
            loading: false,
            updated_at: None,
        }
    }
}

#[derive(Debug)]
pub struct WeatherScreen {
    source: Arc<dyn WeatherSource>,
    state: Arc<watch::Sender<ScreenState>>,
    latest: Arc<AtomicU64>,
}

impl WeatherScreen {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        let (state, _) = watch::channel(ScreenState::default());
        Self {
            source,
            state: Arc::new(state),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ScreenState {
        self.state.borrow().clone()
    }

    /// User edited the search box.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        let suggestions = CityMatches::for_query(&text);
        self.state.send_modify(|s| {
            s.query = text;
            s.suggestions = suggestions;
            s.focused = true;
        });
    }

    /// User picked a suggestion.
    pub fn select_city(&self, city: &str) {
        let suggestions = CityMatches::for_query(city);
        self.state.send_modify(|s| {
            s.query = city.to_string();
            s.suggestions = suggestions;
            s.focused = false;
        });
    }

    pub fn can_fetch(&self) -> bool {
        !self.state.borrow().query.is_empty()
    }

    /// Start fetching weather for the current query.
    ///
    /// Returns `None` without doing anything when the query is empty.
    /// Must be called from within a tokio runtime.
    pub fn request_weather(&self) -> Option<JoinHandle<()>> {
        let mut issued = None;
        self.state.send_if_modified(|s| {
            if s.query.is_empty() {
                return false;
            }
            let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            s.record = None;
            s.loading = true;
            issued = Some((seq, s.query.clone()));
            true
        });
        let (seq, city) = issued?;

        debug!(seq, city = %city, "weather request issued");

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.latest);

        Some(tokio::spawn(async move {
            let record = crate::fetch_weather(source.as_ref(), &city).await;

            let applied = state.send_if_modified(|s| {
                if latest.load(Ordering::SeqCst) != seq {
                    return false;
                }
                s.record = record;
                s.loading = false;
                s.updated_at = Some(Utc::now());
                true
            });

            if !applied {
                debug!(seq, city = %city, "discarding stale weather result");
            }
        }))
    }
}
