//! Testing utilities including a mock page surface.
//!
//! Useful for exercising the readers, the orchestrator, and the session
//! gate without launching a browser.

use crate::error::{ExtractionError, Result};
use crate::page::{ElementKind, PageSurface, RawGridRow};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// A scripted element on the mock page
#[derive(Debug, Clone)]
enum MockElement {
    /// Text input/textarea with a current value
    Text(String),
    /// Select with option display texts and an optional selected index
    Select {
        options: Vec<String>,
        selected: Option<usize>,
    },
    /// Any other element with rendered text
    Label(String),
}

/// A mock [`PageSurface`] with configurable elements and grids.
///
/// Elements are registered up front with the builder methods; everything
/// not registered behaves as absent. `failing()` makes every probe return
/// an error, for exercising the readers' containment.
#[derive(Default)]
pub struct MockPage {
    elements: RwLock<HashMap<String, MockElement>>,
    grids: RwLock<HashMap<String, Vec<RawGridRow>>>,
    /// Marker that appears only after N presence polls
    deferred_marker: Option<(String, usize)>,
    polls: AtomicUsize,
    fail_all: bool,
    visited: RwLock<Vec<String>>,
}

impl MockPage {
    /// Create an empty mock page
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a text input with a current value
    pub fn with_text_field(self, locator: &str, value: &str) -> Self {
        self.elements
            .write()
            .unwrap()
            .insert(locator.to_string(), MockElement::Text(value.to_string()));
        self
    }

    /// Register a select with option texts and the selected index
    pub fn with_select(self, locator: &str, options: &[&str], selected: Option<usize>) -> Self {
        self.elements.write().unwrap().insert(
            locator.to_string(),
            MockElement::Select {
                options: options.iter().map(|o| o.to_string()).collect(),
                selected,
            },
        );
        self
    }

    /// Register a non-input element with rendered text
    pub fn with_label(self, locator: &str, text: &str) -> Self {
        self.elements
            .write()
            .unwrap()
            .insert(locator.to_string(), MockElement::Label(text.to_string()));
        self
    }

    /// Register a grid with raw rows
    pub fn with_grid(self, grid_id: &str, rows: Vec<RawGridRow>) -> Self {
        self.grids
            .write()
            .unwrap()
            .insert(grid_id.to_string(), rows);
        self
    }

    /// Make `marker` report present only from the (polls+1)-th check on
    pub fn with_marker_after_polls(mut self, marker: &str, polls: usize) -> Self {
        self.deferred_marker = Some((marker.to_string(), polls));
        self
    }

    /// Make every probe fail
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// URLs passed to `goto`, in call order
    pub fn visited(&self) -> Vec<String> {
        self.visited.read().unwrap().clone()
    }

    fn check_failure(&self, locator: &str) -> Result<()> {
        if self.fail_all {
            Err(ExtractionError::JsExecutionFailed(format!("mock failure for {locator}")).into())
        } else {
            Ok(())
        }
    }
}

impl PageSurface for MockPage {
    async fn goto(&self, url: &str) -> Result<()> {
        self.visited.write().unwrap().push(url.to_string());
        Ok(())
    }

    async fn is_present(&self, locator: &str) -> Result<bool> {
        self.check_failure(locator)?;

        if let Some((marker, after)) = &self.deferred_marker {
            if marker == locator {
                let seen = self.polls.fetch_add(1, Ordering::SeqCst);
                return Ok(seen >= *after);
            }
        }

        Ok(self.elements.read().unwrap().contains_key(locator))
    }

    async fn element_kind(&self, locator: &str) -> Result<Option<ElementKind>> {
        self.check_failure(locator)?;
        Ok(self
            .elements
            .read()
            .unwrap()
            .get(locator)
            .map(|el| match el {
                MockElement::Text(_) => ElementKind::Text,
                MockElement::Select { .. } => ElementKind::Select,
                MockElement::Label(_) => ElementKind::Other,
            }))
    }

    async fn input_value(&self, locator: &str) -> Result<Option<String>> {
        self.check_failure(locator)?;
        Ok(match self.elements.read().unwrap().get(locator) {
            Some(MockElement::Text(value)) => Some(value.clone()),
            _ => None,
        })
    }

    async fn selected_label(&self, locator: &str) -> Result<Option<String>> {
        self.check_failure(locator)?;
        Ok(match self.elements.read().unwrap().get(locator) {
            Some(MockElement::Select { options, selected }) => Some(
                selected
                    .and_then(|i| options.get(i).cloned())
                    .unwrap_or_default(),
            ),
            _ => None,
        })
    }

    async fn text_content(&self, locator: &str) -> Result<Option<String>> {
        self.check_failure(locator)?;
        Ok(match self.elements.read().unwrap().get(locator) {
            Some(MockElement::Label(text)) => Some(text.clone()),
            _ => None,
        })
    }

    async fn grid_rows(&self, grid_id: &str) -> Result<Vec<RawGridRow>> {
        self.check_failure(grid_id)?;
        match self.grids.read().unwrap().get(grid_id) {
            Some(rows) => Ok(rows.clone()),
            None => Err(ExtractionError::ElementNotFound(grid_id.to_string()).into()),
        }
    }
}
