//! Desk session state.
//!
//! A [`DeskSession`] is the explicit, per-user state object: the client
//! groups, the selected group and the per-page widget layout. It is created
//! at session start and passed by reference into every operation. Hosts
//! serving several users keep one session per user.
//!
//! Failed operations leave the session unchanged.

mod groups;
mod layout;

pub use groups::{Group, GroupBook, CLIENT_NAME_COLUMNS, RESERVED_GROUP};
pub use layout::LayoutBook;

use advisor_core::types::Dataset;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::DeskConfig;
use crate::error::{DeskError, Result};
use crate::pages::{Page, WidgetId};

/// Per-user desk state
#[derive(Debug, Clone)]
pub struct DeskSession {
    groups: GroupBook,
    selected: String,
    layouts: LayoutBook,
    started_at: DateTime<Utc>,
}

impl DeskSession {
    /// A session holding only the reserved group, with every widget active
    pub fn new() -> Self {
        Self::with_groups(GroupBook::new())
    }

    /// A session seeded with the standard desk groups
    pub fn with_default_groups() -> Self {
        Self::with_groups(GroupBook::with_default_groups())
    }

    /// A session over an existing group book; the reserved group is selected
    pub fn with_groups(groups: GroupBook) -> Self {
        Self {
            groups,
            selected: RESERVED_GROUP.to_string(),
            layouts: LayoutBook::new(),
            started_at: Utc::now(),
        }
    }

    /// Start a session from configuration.
    ///
    /// Seeds the standard groups when `seed_default_groups` is set, then
    /// creates each configured group with its members.
    pub fn from_config(config: &DeskConfig) -> Result<Self> {
        let mut session = if config.seed_default_groups {
            Self::with_default_groups()
        } else {
            Self::new()
        };

        for group in &config.groups {
            session.create_group(&group.name)?;
            for member in &group.members {
                session.add_member(&group.name, member)?;
            }
        }

        debug!(groups = session.groups.list().len(), "desk session started");
        Ok(session)
    }

    /// Session start time
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// All groups, reserved group first
    pub fn list_groups(&self) -> &[Group] {
        self.groups.list()
    }

    /// The group book
    pub fn groups(&self) -> &GroupBook {
        &self.groups
    }

    /// Name of the selected group
    pub fn selected_group(&self) -> &str {
        &self.selected
    }

    /// Create an empty group
    pub fn create_group(&mut self, name: &str) -> Result<()> {
        self.groups.create(name)?;
        debug!(group = name, "group created");
        Ok(())
    }

    /// Delete a group. Selection falls back to the reserved group if the
    /// deleted group was selected.
    pub fn delete_group(&mut self, name: &str) -> Result<()> {
        self.groups.delete(name)?;
        if self.selected == name {
            self.selected = RESERVED_GROUP.to_string();
            debug!(group = name, "selected group deleted, selection reset");
        } else {
            debug!(group = name, "group deleted");
        }
        Ok(())
    }

    /// Select the group used to filter client datasets
    pub fn select_group(&mut self, name: &str) -> Result<()> {
        if !self.groups.contains(name) {
            return Err(DeskError::not_found(format!("group '{}'", name)));
        }
        self.selected = name.to_string();
        debug!(group = name, "group selected");
        Ok(())
    }

    /// Add a client name to a group
    pub fn add_member(&mut self, group: &str, client_name: &str) -> Result<bool> {
        let added = self.groups.add_member(group, client_name)?;
        debug!(group, client = client_name, added, "group member added");
        Ok(added)
    }

    /// Remove a client name from a group
    pub fn remove_member(&mut self, group: &str, client_name: &str) -> Result<bool> {
        let removed = self.groups.remove_member(group, client_name)?;
        debug!(group, client = client_name, removed, "group member removed");
        Ok(removed)
    }

    /// Active widgets for a page, in selection order
    pub fn active_widgets(&self, page: Page) -> &[WidgetId] {
        self.layouts.active(page)
    }

    /// Replace the active widgets of a page from keys or labels
    pub fn set_active_widgets<S: AsRef<str>>(&mut self, page: Page, names: &[S]) -> Result<()> {
        self.layouts.set_active_by_name(page, names)?;
        debug!(page = page.key(), active = names.len(), "layout updated");
        Ok(())
    }

    /// Replace the active widgets of a page
    pub fn set_active_widget_ids(&mut self, page: Page, widgets: &[WidgetId]) -> Result<()> {
        self.layouts.set_active(page, widgets)?;
        debug!(page = page.key(), active = widgets.len(), "layout updated");
        Ok(())
    }

    /// Restore every registered widget on a page
    pub fn reset_layout(&mut self, page: Page) {
        self.layouts.reset(page);
        debug!(page = page.key(), "layout reset");
    }

    /// Restrict a dataset to the members of `group`
    pub fn filter_by_group(&self, dataset: &Dataset, group: &str) -> Result<Dataset> {
        self.groups.filter(dataset, group)
    }

    /// Restrict a dataset to the members of the selected group
    pub fn filter_by_selected(&self, dataset: &Dataset) -> Result<Dataset> {
        self.groups.filter(dataset, &self.selected)
    }

    /// Restrict a dataset to the selected group using an explicit column
    pub fn filter_by_selected_on(&self, dataset: &Dataset, column: &str) -> Result<Dataset> {
        self.groups.filter_on(dataset, &self.selected, column)
    }
}

impl Default for DeskSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroupConfig;

    #[test]
    fn test_initial_state() {
        let session = DeskSession::new();
        assert_eq!(session.selected_group(), RESERVED_GROUP);
        assert_eq!(session.list_groups().len(), 1);
        assert_eq!(
            session.active_widgets(Page::InvestmentInfo),
            Page::InvestmentInfo.widgets()
        );
    }

    #[test]
    fn test_started_at_is_session_start() {
        let before = Utc::now();
        let session = DeskSession::new();
        assert!(session.started_at() >= before);
        assert!(session.started_at() <= Utc::now());
    }

    #[test]
    fn test_set_active_widget_ids_rejects_foreign_widget() {
        let mut session = DeskSession::new();
        session
            .set_active_widget_ids(Page::ClientManagement, &[WidgetId::Events, WidgetId::Priority])
            .unwrap();
        assert_eq!(
            session.active_widgets(Page::ClientManagement),
            [WidgetId::Events, WidgetId::Priority]
        );

        let err = session
            .set_active_widget_ids(
                Page::ClientManagement,
                &[WidgetId::Cashflow, WidgetId::StockBriefing],
            )
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            session.active_widgets(Page::ClientManagement),
            [WidgetId::Events, WidgetId::Priority]
        );
    }

    #[test]
    fn test_reset_layout_restores_registry() {
        let mut session = DeskSession::new();
        session
            .set_active_widgets(Page::InvestmentInfo, &["trade_review"])
            .unwrap();
        session.set_active_widget_ids(Page::ClientManagement, &[]).unwrap();

        session.reset_layout(Page::InvestmentInfo);
        assert_eq!(
            session.active_widgets(Page::InvestmentInfo),
            Page::InvestmentInfo.widgets()
        );
        assert!(session.active_widgets(Page::ClientManagement).is_empty());
    }

    #[test]
    fn test_delete_selected_resets_selection() {
        let mut session = DeskSession::with_default_groups();
        session.select_group("ELS Buyers").unwrap();
        session.delete_group("ELS Buyers").unwrap();
        assert_eq!(session.selected_group(), RESERVED_GROUP);
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let mut session = DeskSession::with_default_groups();
        session.select_group("ELS Buyers").unwrap();
        session.delete_group("Risk Focused").unwrap();
        assert_eq!(session.selected_group(), "ELS Buyers");
    }

    #[test]
    fn test_select_missing_group() {
        let mut session = DeskSession::new();
        assert!(session.select_group("Ghosts").unwrap_err().is_not_found());
        assert_eq!(session.selected_group(), RESERVED_GROUP);
    }

    #[test]
    fn test_from_config_seeds_groups() {
        let mut config = DeskConfig::default();
        config.seed_default_groups = false;
        config.groups = vec![GroupConfig {
            name: "Family Office".to_string(),
            members: vec!["Arthur Pendragon".to_string()],
        }];
        let session = DeskSession::from_config(&config).unwrap();
        let names: Vec<_> = session.groups().names().collect();
        assert_eq!(names, vec![RESERVED_GROUP, "Family Office"]);
        assert_eq!(
            session.groups().get("Family Office").unwrap().members(),
            ["Arthur Pendragon"]
        );
    }

    #[test]
    fn test_from_config_duplicate_group_rejected() {
        let mut config = DeskConfig::default();
        config.groups = vec![GroupConfig {
            name: "High Net Worth".to_string(),
            members: Vec::new(),
        }];
        assert!(DeskSession::from_config(&config).unwrap_err().is_invalid_argument());
    }
}
