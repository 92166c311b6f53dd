//! Per-page widget activation.

use std::collections::BTreeMap;

use crate::error::{DeskError, Result};
use crate::pages::{Page, WidgetId};

/// Active widgets for every page.
///
/// Every page starts with its full registered widget set active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutBook {
    active: BTreeMap<Page, Vec<WidgetId>>,
}

impl LayoutBook {
    /// Full widget set active on every page
    pub fn new() -> Self {
        Self {
            active: Page::ALL
                .iter()
                .map(|p| (*p, p.widgets().to_vec()))
                .collect(),
        }
    }

    /// Active widgets for a page, in selection order
    pub fn active(&self, page: Page) -> &[WidgetId] {
        self.active.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the active set for a page.
    ///
    /// Fails with `InvalidArgument`, leaving the layout unchanged, if any
    /// widget is not registered for `page`. Repeated widgets keep their first
    /// position.
    pub fn set_active(&mut self, page: Page, widgets: &[WidgetId]) -> Result<()> {
        if let Some(w) = widgets.iter().find(|w| !page.has_widget(**w)) {
            return Err(DeskError::invalid_argument(format!(
                "widget '{}' is not registered on page '{}'",
                w, page
            )));
        }
        let mut selected: Vec<WidgetId> = Vec::with_capacity(widgets.len());
        for w in widgets {
            if !selected.contains(w) {
                selected.push(*w);
            }
        }
        self.active.insert(page, selected);
        Ok(())
    }

    /// Replace the active set for a page from widget keys or labels.
    pub fn set_active_by_name<S: AsRef<str>>(&mut self, page: Page, names: &[S]) -> Result<()> {
        let mut widgets = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let widget = page
                .widgets()
                .iter()
                .copied()
                .find(|w| w.key() == name || w.label() == name)
                .ok_or_else(|| {
                    DeskError::invalid_argument(format!(
                        "widget '{}' is not registered on page '{}'",
                        name, page
                    ))
                })?;
            widgets.push(widget);
        }
        self.set_active(page, &widgets)
    }

    /// Restore the full widget set for a page
    pub fn reset(&mut self, page: Page) {
        self.active.insert(page, page.widgets().to_vec());
    }
}

impl Default for LayoutBook {
    fn default() -> Self {
        Self::new()
    }
}
