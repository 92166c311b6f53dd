//! Page composition.
//!
//! Turns a session's active widgets into renderable panels: each active
//! widget's catalog dataset, restricted to the selected group where the page
//! offers the group filter, with a placement on the page grid.

use advisor_core::types::{Client, ClientId, Dataset};
use advisor_inputs::catalog::produce;
use advisor_inputs::client_book::find_client;
use advisor_inputs::portfolio::{client_insights, PortfolioGenerator};
use serde::Serialize;
use tracing::debug;

use crate::config::DeskConfig;
use crate::error::{DeskError, Result};
use crate::pages::{Page, WidgetId};
use crate::session::DeskSession;

/// Where a panel sits on the page grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Spans the full page width
    FullWidth,
    /// One of two side-by-side columns (0 = left, 1 = right)
    Column(u8),
}

/// One rendered widget
#[derive(Debug, Clone, Serialize)]
pub struct WidgetPanel {
    /// Widget key
    pub widget: WidgetId,
    /// Panel heading
    pub title: &'static str,
    /// Whether the dataset was restricted to the selected group
    pub group_filtered: bool,
    /// Grid placement
    pub placement: Placement,
    /// Widget content
    pub dataset: Dataset,
}

/// A composed page
#[derive(Debug, Clone, Serialize)]
pub struct PagePlan {
    /// Page key
    pub page: Page,
    /// Page heading
    pub title: &'static str,
    /// Group the page was filtered by, for pages that show the filter
    pub group: Option<String>,
    /// Panels in render order
    pub panels: Vec<WidgetPanel>,
}

impl PagePlan {
    /// Panel for a widget, if active
    pub fn panel(&self, widget: WidgetId) -> Option<&WidgetPanel> {
        self.panels.iter().find(|p| p.widget == widget)
    }
}

/// Compose the active widgets of `page` for `session`.
pub fn compose_page(session: &DeskSession, page: Page) -> Result<PagePlan> {
    let filtered_page = page.shows_group_filter();
    let mut panels = Vec::with_capacity(session.active_widgets(page).len());
    let mut next_column = 0u8;

    for &widget in session.active_widgets(page) {
        let mut dataset = produce(widget.producer())?;

        let client_column = widget.client_column().filter(|_| filtered_page);
        if let Some(column) = client_column {
            dataset = session.filter_by_selected_on(&dataset, column)?;
        }

        let placement = if page == Page::ClientManagement && widget == WidgetId::Priority {
            Placement::FullWidth
        } else {
            let column = Placement::Column(next_column);
            next_column = 1 - next_column;
            column
        };

        panels.push(WidgetPanel {
            widget,
            title: widget.label(),
            group_filtered: client_column.is_some(),
            placement,
            dataset,
        });
    }

    // full-width panels render above the two-column grid
    panels.sort_by_key(|p| p.placement != Placement::FullWidth);

    debug!(
        page = page.key(),
        panels = panels.len(),
        group = session.selected_group(),
        "page composed"
    );

    Ok(PagePlan {
        page,
        title: page.label(),
        group: filtered_page.then(|| session.selected_group().to_string()),
        panels,
    })
}

/// Single-client 360 view
#[derive(Debug, Clone, Serialize)]
pub struct ClientDetail {
    /// The client
    pub client: Client,
    /// Portfolio composition at the configured notional
    pub portfolio: Dataset,
    /// Risk factor exposure
    pub risk_exposure: Dataset,
    /// Advisor talking points
    pub insights: Dataset,
}

/// Build the client detail page. Unknown identifiers fail with `NotFound`.
pub fn client_detail(client_id: &ClientId, config: &DeskConfig) -> Result<ClientDetail> {
    let client = find_client(client_id)?;
    let generator = PortfolioGenerator::new().with_notional(config.portfolio_notional_usd);

    Ok(ClientDetail {
        client,
        portfolio: generator.composition(client_id)?,
        risk_exposure: generator.risk_exposure(client_id)?,
        insights: client_insights(client_id)?,
    })
}

/// Parse a page argument and reject pages without widgets.
pub fn widget_page(name: &str) -> Result<Page> {
    let page: Page = name.parse()?;
    if page.widgets().is_empty() {
        return Err(DeskError::invalid_argument(format!(
            "page '{}' has no widgets to compose",
            page
        )));
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::types::Value;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_client_management_layout() {
        let session = DeskSession::new();
        let plan = compose_page(&session, Page::ClientManagement).unwrap();

        let placements: Vec<_> = plan.panels.iter().map(|p| (p.widget, p.placement)).collect();
        assert_eq!(
            placements,
            vec![
                (WidgetId::Priority, Placement::FullWidth),
                (WidgetId::Cashflow, Placement::Column(0)),
                (WidgetId::HighCash, Placement::Column(1)),
                (WidgetId::ChurnRisk, Placement::Column(0)),
                (WidgetId::Events, Placement::Column(1)),
            ]
        );
        assert_eq!(plan.group.as_deref(), Some("All Clients"));
    }

    #[test]
    fn test_priority_full_width_even_when_selected_last() {
        let mut session = DeskSession::new();
        session
            .set_active_widgets(Page::ClientManagement, &["Events", "Priority"])
            .unwrap();
        let plan = compose_page(&session, Page::ClientManagement).unwrap();
        assert_eq!(plan.panels[0].widget, WidgetId::Priority);
        assert_eq!(plan.panels[1].placement, Placement::Column(0));
    }

    #[test]
    fn test_investment_info_alternates_and_ignores_group() {
        let mut session = DeskSession::with_default_groups();
        session.select_group("Risk Focused").unwrap();
        let plan = compose_page(&session, Page::InvestmentInfo).unwrap();

        assert_eq!(plan.panels.len(), 7);
        assert!(plan.group.is_none());
        assert!(plan.panels.iter().all(|p| !p.group_filtered));
        for (i, panel) in plan.panels.iter().enumerate() {
            assert_eq!(panel.placement, Placement::Column((i % 2) as u8));
        }
    }

    #[test]
    fn test_selected_group_filters_client_widgets() {
        let mut session = DeskSession::with_default_groups();
        session.select_group("High Net Worth").unwrap();
        let plan = compose_page(&session, Page::ClientManagement).unwrap();

        let priority = plan.panel(WidgetId::Priority).unwrap();
        assert!(priority.group_filtered);
        assert_eq!(priority.dataset.len(), 2);

        let cashflow = plan.panel(WidgetId::Cashflow).unwrap();
        assert!(cashflow.group_filtered);
        assert!(cashflow.dataset.len() <= 2);

        let high_cash = plan.panel(WidgetId::HighCash).unwrap();
        assert!(!high_cash.group_filtered);
    }

    #[test]
    fn test_watch_lists_ignore_selected_group() {
        let mut session = DeskSession::with_default_groups();
        session.select_group("ELS Buyers").unwrap();
        let plan = compose_page(&session, Page::ClientManagement).unwrap();

        for widget in [WidgetId::HighCash, WidgetId::ChurnRisk, WidgetId::Events] {
            let panel = plan.panel(widget).unwrap();
            assert!(!panel.group_filtered);
            assert_eq!(panel.dataset, produce(widget.producer()).unwrap());
        }
        let churn = plan.panel(WidgetId::ChurnRisk).unwrap();
        assert_eq!(churn.dataset.value(0, "Client"), Some(&Value::from("Mordred")));

        let cashflow = plan.panel(WidgetId::Cashflow).unwrap();
        assert!(cashflow
            .dataset
            .records()
            .all(|r| r.text("Client") == Some("Guinevere Leodegrance")));
    }

    #[test]
    fn test_client_detail_uses_configured_notional() {
        let mut config = DeskConfig::default();
        config.portfolio_notional_usd = 1_000.0;
        let detail = client_detail(&ClientId::new("c101"), &config).unwrap();

        assert_eq!(detail.client.name, "Arthur Pendragon");
        let total: f64 = detail
            .portfolio
            .column("Value USD")
            .unwrap()
            .filter_map(|v| v.as_f64())
            .sum();
        assert_abs_diff_eq!(total, 1_000.0, epsilon = 1e-6);
        assert_eq!(detail.risk_exposure.len(), 6);
        assert_eq!(detail.insights.len(), 3);
    }

    #[test]
    fn test_client_detail_unknown_client() {
        let err = client_detail(&ClientId::new("c999"), &DeskConfig::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_widget_page() {
        assert_eq!(widget_page("investment_info").unwrap(), Page::InvestmentInfo);
        assert!(widget_page("Client Detail").unwrap_err().is_invalid_argument());
        assert!(widget_page("Nowhere").unwrap_err().is_not_found());
    }
}
