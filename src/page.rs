//! Page surface abstraction
//!
//! The extraction core only needs a handful of primitives from the
//! browser: resolve a locator, classify the element, read its value or
//! text, and enumerate a grid's rows. This module expresses that surface
//! as the [`PageSurface`] trait so the readers and the session gate can be
//! exercised against a scripted page in tests, and implements it for a
//! live CDP page ([`CdpPage`]).
//!
//! Locators are CSS selectors resolved with `document.querySelector`;
//! grid identifiers are element ids.

use crate::browser::{PageHandle, PageNavigator};
use crate::error::{ExtractionError, Result};
use serde::Deserialize;
use tracing::debug;

/// Classification of a resolved element, driving how its value is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Text-like input or textarea; read the editable value
    Text,
    /// Selection control; read the selected option's display text
    Select,
    /// Anything else; read the rendered text content
    Other,
}

/// One table row as the page reports it, before qualification
///
/// `id` is the row element's id attribute (used for the header/placeholder
/// convention); `cells` are the raw, untrimmed cell texts in column order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawGridRow {
    /// Row element id, if any
    pub id: Option<String>,
    /// Cell texts in document order
    pub cells: Vec<String>,
}

/// The browser control surface the extraction core depends on
///
/// A production page is backed by CDP; tests substitute a mock. Every
/// method is read-only with respect to the page, except `goto`.
#[allow(async_fn_in_trait)]
pub trait PageSurface {
    /// Navigate the page to a URL
    async fn goto(&self, url: &str) -> Result<()>;

    /// Whether the locator currently resolves to an element
    async fn is_present(&self, locator: &str) -> Result<bool>;

    /// Classify the element behind the locator; `None` if it does not resolve
    async fn element_kind(&self, locator: &str) -> Result<Option<ElementKind>>;

    /// Current editable value of an input/textarea; `None` if unresolved
    async fn input_value(&self, locator: &str) -> Result<Option<String>>;

    /// Display text of the selected option; `Some("")` when nothing is
    /// selected; `None` if the locator does not resolve to a select
    async fn selected_label(&self, locator: &str) -> Result<Option<String>>;

    /// Rendered text content of the element; `None` if unresolved
    async fn text_content(&self, locator: &str) -> Result<Option<String>>;

    /// All rows of the table with the given element id, in document order
    async fn grid_rows(&self, grid_id: &str) -> Result<Vec<RawGridRow>>;
}

/// [`PageSurface`] implementation over a live CDP page
pub struct CdpPage {
    handle: PageHandle,
}

impl CdpPage {
    /// Wrap a page handle
    pub fn new(handle: PageHandle) -> Self {
        Self { handle }
    }

    /// The underlying page handle
    pub fn handle(&self) -> &PageHandle {
        &self.handle
    }

    fn escape(locator: &str) -> String {
        locator.replace('\\', "\\\\").replace('\'', "\\'")
    }

    async fn eval<T: serde::de::DeserializeOwned>(&self, script: &str) -> Result<T> {
        self.handle
            .inner()
            .evaluate(script)
            .await
            .map_err(|e| ExtractionError::JsExecutionFailed(e.to_string()))?
            .into_value::<T>()
            .map_err(|e| ExtractionError::UnexpectedResult(e.to_string()).into())
    }
}

impl PageSurface for CdpPage {
    async fn goto(&self, url: &str) -> Result<()> {
        PageNavigator::goto(&self.handle, url, None).await?;
        Ok(())
    }

    async fn is_present(&self, locator: &str) -> Result<bool> {
        let script = format!(
            "!!document.querySelector('{}')",
            Self::escape(locator)
        );
        self.eval::<bool>(&script).await
    }

    async fn element_kind(&self, locator: &str) -> Result<Option<ElementKind>> {
        let script = format!(
            r#"
            (() => {{
                const el = document.querySelector('{}');
                if (!el) return null;
                const tag = el.tagName.toLowerCase();
                if (tag === 'textarea') return 'text';
                if (tag === 'select') return 'select';
                if (tag === 'input') {{
                    const type = (el.type || 'text').toLowerCase();
                    const nonText = ['checkbox', 'radio', 'button', 'submit', 'reset', 'image', 'file'];
                    return nonText.includes(type) ? 'other' : 'text';
                }}
                return 'other';
            }})()
            "#,
            Self::escape(locator)
        );

        let kind: Option<String> = self.eval(&script).await?;
        match kind.as_deref() {
            None => Ok(None),
            Some("text") => Ok(Some(ElementKind::Text)),
            Some("select") => Ok(Some(ElementKind::Select)),
            Some(_) => Ok(Some(ElementKind::Other)),
        }
    }

    async fn input_value(&self, locator: &str) -> Result<Option<String>> {
        let script = format!(
            r#"
            (() => {{
                const el = document.querySelector('{}');
                if (!el) return null;
                return String(el.value ?? '');
            }})()
            "#,
            Self::escape(locator)
        );
        self.eval(&script).await
    }

    async fn selected_label(&self, locator: &str) -> Result<Option<String>> {
        let script = format!(
            r#"
            (() => {{
                const el = document.querySelector('{}');
                if (!el || el.tagName.toLowerCase() !== 'select') return null;
                if (el.selectedIndex < 0) return '';
                const opt = el.options[el.selectedIndex];
                return opt ? opt.text : '';
            }})()
            "#,
            Self::escape(locator)
        );
        self.eval(&script).await
    }

    async fn text_content(&self, locator: &str) -> Result<Option<String>> {
        let script = format!(
            r#"
            (() => {{
                const el = document.querySelector('{}');
                if (!el) return null;
                return el.innerText ?? el.textContent ?? '';
            }})()
            "#,
            Self::escape(locator)
        );
        self.eval(&script).await
    }

    async fn grid_rows(&self, grid_id: &str) -> Result<Vec<RawGridRow>> {
        let script = format!(
            r#"
            (() => {{
                const scope = document.getElementById('{}');
                if (!scope) return null;
                return Array.from(scope.querySelectorAll('tr')).map(tr => ({{
                    id: tr.id || null,
                    cells: Array.from(tr.cells || []).map(td => String(td.innerText ?? ''))
                }}));
            }})()
            "#,
            Self::escape(grid_id)
        );

        let rows: Option<Vec<RawGridRow>> = self.eval(&script).await?;
        match rows {
            Some(rows) => Ok(rows),
            None => {
                debug!("Grid {} not present on page", grid_id);
                Err(ExtractionError::ElementNotFound(grid_id.to_string()).into())
            }
        }
    }
}
