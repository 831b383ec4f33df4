//! Field reading
//!
//! A field read never fails: whatever goes wrong (locator resolves to
//! nothing, element removed mid-read, evaluate error), the result is the
//! empty string. One unreadable field must not abort a run that can still
//! scrape the other ninety.

use crate::error::Result;
use crate::page::{ElementKind, PageSurface};
use tracing::debug;

/// Reads a single field's current textual value
pub struct FieldReader;

impl FieldReader {
    /// Read the field behind `locator`
    ///
    /// Dispatch by element kind: text-like inputs and textareas yield
    /// their editable value, selects yield the display text of the
    /// selected option, anything else yields its rendered text. Unresolved
    /// locators and read errors yield `""`.
    pub async fn read_field<P: PageSurface>(page: &P, locator: &str) -> String {
        match Self::try_read(page, locator).await {
            Ok(value) => value,
            Err(e) => {
                debug!("Field read failed for {}: {}", locator, e);
                String::new()
            }
        }
    }

    async fn try_read<P: PageSurface>(page: &P, locator: &str) -> Result<String> {
        let value = match page.element_kind(locator).await? {
            None => None,
            Some(ElementKind::Text) => page.input_value(locator).await?,
            Some(ElementKind::Select) => page.selected_label(locator).await?,
            Some(ElementKind::Other) => page.text_content(locator).await?,
        };
        Ok(value.unwrap_or_default())
    }
}
