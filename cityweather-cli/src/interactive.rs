//! Type-ahead prompt driving a [`WeatherScreen`].

use std::sync::Arc;

use anyhow::Context;
use cityweather_core::{WeatherScreen, WeatherSource, filter_cities};
use inquire::{
    CustomUserError, InquireError, Text,
    autocompletion::{Autocomplete, Replacement},
};
use tracing::debug;

use crate::render;

/// Feeds the city filter into inquire's suggestion list.
#[derive(Debug, Clone, Default)]
pub struct CityCompleter;

impl Autocomplete for CityCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(filter_cities(input).into_iter().map(str::to_string).collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

pub async fn run(source: Arc<dyn WeatherSource>) -> anyhow::Result<()> {
    let screen = WeatherScreen::new(source);
    let mut updates = screen.subscribe();

    loop {
        let Some(input) = prompt_location().await? else {
            debug!("prompt closed, leaving interactive mode");
            return Ok(());
        };

        screen.set_query(input.as_str());
        let state = screen.state();
        if state.suggestions.as_slice().contains(&input.as_str()) {
            screen.select_city(&input);
        } else if state.suggestions.is_not_found() {
            eprint!("{}", render::format_matches(&state.suggestions));
        }

        let Some(handle) = screen.request_weather() else {
            continue;
        };

        if updates.borrow_and_update().loading {
            eprintln!("Loading weather for {input}...");
        }
        handle.await.context("weather task failed")?;

        let state = updates.borrow_and_update().clone();
        if let Some(record) = &state.record {
            print!("{}", render::format_record(record, state.updated_at));
        }
    }
}

/// `None` when the user cancels the prompt (Esc / Ctrl-C).
async fn prompt_location() -> anyhow::Result<Option<String>> {
    let answer = tokio::task::spawn_blocking(|| {
        Text::new("Enter location")
            .with_autocomplete(CityCompleter)
            .with_help_message("↑↓ to pick a city, Enter to get weather, Esc to quit")
            .prompt()
    })
    .await
    .context("prompt task failed")?;

    match answer {
        Ok(text) => Ok(Some(text)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("location prompt failed"),
    }
}
