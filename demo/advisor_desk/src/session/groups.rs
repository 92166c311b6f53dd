//! Client groups.
//!
//! A [`GroupBook`] always holds the reserved [`RESERVED_GROUP`], whose empty
//! member list means "no restriction". User groups restrict datasets to rows
//! whose client-name column matches a member. Member names are not checked
//! against the client roster; a name with no matching rows simply
//! contributes nothing.

use advisor_core::types::Dataset;
use advisor_inputs::client_book::{CASHFLOW_CLIENT_COLUMN, PRIORITY_CLIENT_COLUMN};
use serde::Serialize;
use std::collections::HashSet;

use crate::error::{DeskError, Result};

/// The always-present, undeletable group meaning "no filter"
pub const RESERVED_GROUP: &str = "All Clients";

/// Columns recognised as carrying a client name, in lookup order
pub const CLIENT_NAME_COLUMNS: [&str; 2] = [PRIORITY_CLIENT_COLUMN, CASHFLOW_CLIENT_COLUMN];

/// A named subset of clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    name: String,
    members: Vec<String>,
}

impl Group {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Group name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member client names, in insertion order
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Whether this is the reserved "no filter" group
    pub fn is_reserved(&self) -> bool {
        self.name == RESERVED_GROUP
    }

    /// Whether `client_name` is a member
    pub fn contains(&self, client_name: &str) -> bool {
        self.members.iter().any(|m| m == client_name)
    }
}

/// The set of groups for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupBook {
    groups: Vec<Group>,
}

impl GroupBook {
    /// A book holding only the reserved group
    pub fn new() -> Self {
        Self {
            groups: vec![Group::new(RESERVED_GROUP)],
        }
    }

    /// A book with the standard desk groups
    pub fn with_default_groups() -> Self {
        let mut book = Self::new();
        book.groups.extend([
            Group {
                name: "High Net Worth".to_string(),
                members: vec!["Arthur Pendragon".to_string(), "Lancelot du Lac".to_string()],
            },
            Group {
                name: "ELS Buyers".to_string(),
                members: vec![
                    "Guinevere Leodegrance".to_string(),
                    "Morgan le Fay".to_string(),
                ],
            },
            Group {
                name: "Risk Focused".to_string(),
                members: vec!["Merlin Ambrosius".to_string()],
            },
        ]);
        book
    }

    /// All groups, reserved group first, then in creation order
    pub fn list(&self) -> &[Group] {
        &self.groups
    }

    /// Group names, in list order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(Group::name)
    }

    /// Look up a group
    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Whether a group exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Add an empty group.
    ///
    /// Fails with `InvalidArgument` for an empty name or an existing one.
    pub fn create(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(DeskError::invalid_argument("group name is empty"));
        }
        if self.contains(name) {
            return Err(DeskError::invalid_argument(format!(
                "group '{}' already exists",
                name
            )));
        }
        self.groups.push(Group::new(name));
        Ok(())
    }

    /// Remove a group, returning it.
    ///
    /// Fails with `InvalidArgument` for the reserved group or a missing one.
    pub fn delete(&mut self, name: &str) -> Result<Group> {
        if name == RESERVED_GROUP {
            return Err(DeskError::invalid_argument(format!(
                "group '{}' cannot be deleted",
                RESERVED_GROUP
            )));
        }
        let idx = self
            .groups
            .iter()
            .position(|g| g.name == name)
            .ok_or_else(|| {
                DeskError::invalid_argument(format!("group '{}' does not exist", name))
            })?;
        Ok(self.groups.remove(idx))
    }

    /// Add a client name to a group. Returns `false` if already a member.
    pub fn add_member(&mut self, group: &str, client_name: &str) -> Result<bool> {
        let g = self.user_group_mut(group)?;
        if client_name.trim().is_empty() {
            return Err(DeskError::invalid_argument("client name is empty"));
        }
        if g.contains(client_name) {
            return Ok(false);
        }
        g.members.push(client_name.to_string());
        Ok(true)
    }

    /// Remove a client name from a group. Returns `false` if not a member.
    pub fn remove_member(&mut self, group: &str, client_name: &str) -> Result<bool> {
        let g = self.user_group_mut(group)?;
        if client_name.trim().is_empty() {
            return Err(DeskError::invalid_argument("client name is empty"));
        }
        let before = g.members.len();
        g.members.retain(|m| m != client_name);
        Ok(g.members.len() != before)
    }

    /// Restrict `dataset` to the members of `group`.
    ///
    /// The reserved group returns the dataset unchanged. Otherwise the client
    /// name is read from the first of [`CLIENT_NAME_COLUMNS`] present.
    pub fn filter(&self, dataset: &Dataset, group: &str) -> Result<Dataset> {
        let g = self
            .get(group)
            .ok_or_else(|| DeskError::not_found(format!("group '{}'", group)))?;
        if g.is_reserved() {
            return Ok(dataset.clone());
        }
        let column = CLIENT_NAME_COLUMNS
            .iter()
            .copied()
            .find(|c| dataset.has_column(c))
            .ok_or_else(|| DeskError::invalid_argument("dataset has no client name column"))?;
        Ok(restrict(dataset, g, column))
    }

    /// Restrict `dataset` to the members of `group` using an explicit column.
    pub fn filter_on(&self, dataset: &Dataset, group: &str, column: &str) -> Result<Dataset> {
        let g = self
            .get(group)
            .ok_or_else(|| DeskError::not_found(format!("group '{}'", group)))?;
        if g.is_reserved() {
            return Ok(dataset.clone());
        }
        if !dataset.has_column(column) {
            return Err(DeskError::invalid_argument(format!(
                "dataset has no column '{}'",
                column
            )));
        }
        Ok(restrict(dataset, g, column))
    }

    fn user_group_mut(&mut self, name: &str) -> Result<&mut Group> {
        if name == RESERVED_GROUP {
            return Err(DeskError::invalid_argument(format!(
                "group '{}' has no members to edit",
                RESERVED_GROUP
            )));
        }
        self.groups
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| DeskError::not_found(format!("group '{}'", name)))
    }
}

impl Default for GroupBook {
    fn default() -> Self {
        Self::new()
    }
}

fn restrict(dataset: &Dataset, group: &Group, column: &str) -> Dataset {
    let members: HashSet<&str> = group.members.iter().map(String::as_str).collect();
    dataset.filter_rows(|r| r.text(column).is_some_and(|name| members.contains(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::types::Value;

    fn names_dataset(names: &[&str]) -> Dataset {
        Dataset::from_rows(
            ["Client", "Net Flow"],
            names.iter().map(|n| [Value::from(*n), Value::Int(1)]),
        )
    }

    #[test]
    fn test_new_book_has_only_reserved() {
        let book = GroupBook::new();
        assert_eq!(book.names().collect::<Vec<_>>(), vec![RESERVED_GROUP]);
        assert!(book.list()[0].is_reserved());
        assert!(book.list()[0].members().is_empty());
    }

    #[test]
    fn test_create_rejects_empty_and_duplicate() {
        let mut book = GroupBook::new();
        assert!(book.create("").unwrap_err().is_invalid_argument());
        assert!(book.create("   ").unwrap_err().is_invalid_argument());
        book.create("Family Office").unwrap();
        assert!(book.create("Family Office").unwrap_err().is_invalid_argument());
        assert!(book.create(RESERVED_GROUP).unwrap_err().is_invalid_argument());
        assert_eq!(book.list().len(), 2);
    }

    #[test]
    fn test_create_then_delete_restores_book() {
        let mut book = GroupBook::with_default_groups();
        let before = book.clone();
        book.create("Temp").unwrap();
        book.delete("Temp").unwrap();
        assert_eq!(book, before);
    }

    #[test]
    fn test_delete_reserved_or_missing_rejected() {
        let mut book = GroupBook::with_default_groups();
        assert!(book.delete(RESERVED_GROUP).unwrap_err().is_invalid_argument());
        assert!(book.delete("Ghosts").unwrap_err().is_invalid_argument());
        assert_eq!(book.list().len(), 4);
    }

    #[test]
    fn test_membership_edits() {
        let mut book = GroupBook::new();
        book.create("Watch").unwrap();
        assert!(book.add_member("Watch", "Merlin Ambrosius").unwrap());
        assert!(!book.add_member("Watch", "Merlin Ambrosius").unwrap());
        assert_eq!(book.get("Watch").unwrap().members(), ["Merlin Ambrosius"]);
        assert!(book.remove_member("Watch", "Merlin Ambrosius").unwrap());
        assert!(!book.remove_member("Watch", "Merlin Ambrosius").unwrap());

        assert!(book.add_member(RESERVED_GROUP, "x").unwrap_err().is_invalid_argument());
        assert!(book.add_member("Nope", "x").unwrap_err().is_not_found());
        assert!(book.add_member("Watch", "").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_filter_reserved_is_identity() {
        let book = GroupBook::with_default_groups();
        let ds = names_dataset(&["A", "B"]);
        assert_eq!(book.filter(&ds, RESERVED_GROUP).unwrap(), ds);
    }

    #[test]
    fn test_filter_keeps_member_rows_in_order() {
        let book = GroupBook::with_default_groups();
        let ds = names_dataset(&["Lancelot du Lac", "Merlin Ambrosius", "Arthur Pendragon"]);
        let out = book.filter(&ds, "High Net Worth").unwrap();
        let names: Vec<_> = out.column("Client").unwrap().filter_map(Value::as_str).collect();
        assert_eq!(names, vec!["Lancelot du Lac", "Arthur Pendragon"]);
    }

    #[test]
    fn test_filter_unmatched_member_yields_no_rows() {
        let mut book = GroupBook::new();
        book.create("Strangers").unwrap();
        book.add_member("Strangers", "Gareth").unwrap();
        let ds = names_dataset(&["A", "B"]);
        let out = book.filter(&ds, "Strangers").unwrap();
        assert!(out.is_empty());
        assert_eq!(out.columns(), ds.columns());
    }

    #[test]
    fn test_filter_errors() {
        let book = GroupBook::with_default_groups();
        let ds = names_dataset(&["A"]);
        assert!(book.filter(&ds, "Nope").unwrap_err().is_not_found());

        let no_client = Dataset::from_rows(["Ticker"], [[Value::from("NVDA")]]);
        assert!(book
            .filter(&no_client, "High Net Worth")
            .unwrap_err()
            .is_invalid_argument());
        assert!(book
            .filter_on(&ds, "High Net Worth", "client_name")
            .unwrap_err()
            .is_invalid_argument());
    }
}
