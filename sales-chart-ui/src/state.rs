//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The region selector writes `selection`; the chart effect reads it and
//! re-renders on every change.

use dioxus::prelude::*;
use sales_data::{Region, SalesDataError, Table};

/// Selection shown before any user interaction.
pub const INITIAL_SELECTION: Region = Region::All;

/// Shared application state for the sales dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded sales table (None until loaded)
    pub table: Signal<Option<Table>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
    /// Currently selected region
    pub selection: Signal<Region>,
}

fn load_error_message(err: &SalesDataError) -> String {
    format!("Failed to load sales data: {}", err)
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selection: Signal::new(INITIAL_SELECTION),
        }
    }

    /// Record the outcome of loading the table and leave the loading state.
    pub fn finish_load(&mut self, result: sales_data::Result<Table>) {
        match result {
            Ok(table) => self.table.set(Some(table)),
            Err(e) => {
                log::error!("{}", load_error_message(&e));
                self.error_msg.set(Some(load_error_message(&e)));
            }
        }
        self.loading.set(false);
    }

    /// State as it looks right after `finish_load`, built without writing
    /// signals during render.
    #[cfg(test)]
    pub(crate) fn loaded(result: sales_data::Result<Table>) -> Self {
        let (table, error_msg) = match result {
            Ok(table) => (Some(table), None),
            Err(e) => (None, Some(load_error_message(&e))),
        };
        Self {
            table: Signal::new(table),
            loading: Signal::new(false),
            error_msg: Signal::new(error_msg),
            selection: Signal::new(INITIAL_SELECTION),
        }
    }
}
