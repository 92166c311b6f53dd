//! Dashboard pages and their registered widgets.
//!
//! Pages and widgets are identified by stable keys; display labels are only
//! used for presentation and are accepted as an alternative when parsing.

use advisor_inputs::catalog::ProducerId;
use advisor_inputs::client_book::{CASHFLOW_CLIENT_COLUMN, PRIORITY_CLIENT_COLUMN};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::DeskError;

/// Dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Market briefings and sales targets
    InvestmentInfo,
    /// Client command centre
    ClientManagement,
    /// Single-client 360 view
    ClientDetail,
    /// Proposal drafting
    ProposalMessaging,
}

impl Page {
    /// Every page, in navigation order
    pub const ALL: [Page; 4] = [
        Self::InvestmentInfo,
        Self::ClientManagement,
        Self::ClientDetail,
        Self::ProposalMessaging,
    ];

    /// Stable key
    pub fn key(&self) -> &'static str {
        match self {
            Self::InvestmentInfo => "investment_info",
            Self::ClientManagement => "client_management",
            Self::ClientDetail => "client_detail",
            Self::ProposalMessaging => "proposal_messaging",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvestmentInfo => "Investment Info",
            Self::ClientManagement => "Client Management",
            Self::ClientDetail => "Client Detail",
            Self::ProposalMessaging => "Proposal & Messaging",
        }
    }

    /// Widgets registered for this page, in registry order
    pub fn widgets(&self) -> &'static [WidgetId] {
        match self {
            Self::InvestmentInfo => &[
                WidgetId::StockBriefing,
                WidgetId::MarketOneLiners,
                WidgetId::MarketBriefing,
                WidgetId::AssetAllocation,
                WidgetId::ProductRecs,
                WidgetId::SeekingAlpha,
                WidgetId::TradeReview,
            ],
            Self::ClientManagement => &[
                WidgetId::Priority,
                WidgetId::Cashflow,
                WidgetId::HighCash,
                WidgetId::ChurnRisk,
                WidgetId::Events,
            ],
            Self::ClientDetail | Self::ProposalMessaging => &[],
        }
    }

    /// Whether the page offers the client group filter
    pub fn shows_group_filter(&self) -> bool {
        matches!(self, Self::ClientManagement | Self::ProposalMessaging)
    }

    /// Whether `widget` is registered on this page
    pub fn has_widget(&self, widget: WidgetId) -> bool {
        self.widgets().contains(&widget)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.key() == s || p.label() == s)
            .ok_or_else(|| DeskError::not_found(format!("page '{}'", s)))
    }
}

/// Dashboard widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetId {
    /// Overseas stock briefing
    StockBriefing,
    /// Market one-liners
    MarketOneLiners,
    /// Market briefing tabs
    MarketBriefing,
    /// House asset allocation
    AssetAllocation,
    /// Product recommendations
    ProductRecs,
    /// Internal ideas
    SeekingAlpha,
    /// Buy/sell review
    TradeReview,
    /// Client priority list
    Priority,
    /// Net cashflows
    Cashflow,
    /// High cash clients
    HighCash,
    /// Churn risk
    ChurnRisk,
    /// Client events
    Events,
}

impl WidgetId {
    /// Every widget
    pub const ALL: [WidgetId; 12] = [
        Self::StockBriefing,
        Self::MarketOneLiners,
        Self::MarketBriefing,
        Self::AssetAllocation,
        Self::ProductRecs,
        Self::SeekingAlpha,
        Self::TradeReview,
        Self::Priority,
        Self::Cashflow,
        Self::HighCash,
        Self::ChurnRisk,
        Self::Events,
    ];

    /// Stable key
    pub fn key(&self) -> &'static str {
        match self {
            Self::StockBriefing => "stock_briefing",
            Self::MarketOneLiners => "market_one_liners",
            Self::MarketBriefing => "market_briefing",
            Self::AssetAllocation => "asset_allocation",
            Self::ProductRecs => "product_recs",
            Self::SeekingAlpha => "seeking_alpha",
            Self::TradeReview => "trade_review",
            Self::Priority => "priority",
            Self::Cashflow => "cashflow",
            Self::HighCash => "high_cash",
            Self::ChurnRisk => "churn_risk",
            Self::Events => "events",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::StockBriefing => "Stock Briefing",
            Self::MarketOneLiners => "Market One-Liners",
            Self::MarketBriefing => "Market Briefing",
            Self::AssetAllocation => "Asset Allocation",
            Self::ProductRecs => "Product Recs",
            Self::SeekingAlpha => "Seeking Alpha",
            Self::TradeReview => "Trade Review",
            Self::Priority => "Priority",
            Self::Cashflow => "Cashflow",
            Self::HighCash => "High Cash",
            Self::ChurnRisk => "Churn Risk",
            Self::Events => "Events",
        }
    }

    /// The catalog producer backing this widget
    pub fn producer(&self) -> ProducerId {
        match self {
            Self::StockBriefing => ProducerId::OverseasStockBriefing,
            Self::MarketOneLiners => ProducerId::MarketOneLiners,
            Self::MarketBriefing => ProducerId::MarketBriefing,
            Self::AssetAllocation => ProducerId::HouseAssetAllocation,
            Self::ProductRecs => ProducerId::ProductRecommendations,
            Self::SeekingAlpha => ProducerId::SeekingAlpha,
            Self::TradeReview => ProducerId::TradeReview,
            Self::Priority => ProducerId::PriorityList,
            Self::Cashflow => ProducerId::Cashflow,
            Self::HighCash => ProducerId::HighCashClients,
            Self::ChurnRisk => ProducerId::ChurnRisk,
            Self::Events => ProducerId::ClientEvents,
        }
    }

    /// Column carrying the client name, for widgets that follow the group filter.
    ///
    /// Only Priority and Cashflow follow it. High Cash, Churn Risk and Events
    /// are book-wide watch lists of prospects and lapsed clients, shown
    /// unfiltered whatever group is selected.
    pub fn client_column(&self) -> Option<&'static str> {
        match self {
            Self::Priority => Some(PRIORITY_CLIENT_COLUMN),
            Self::Cashflow => Some(CASHFLOW_CLIENT_COLUMN),
            _ => None,
        }
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WidgetId {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|w| w.key() == s || w.label() == s)
            .ok_or_else(|| DeskError::invalid_argument(format!("unknown widget '{}'", s)))
    }
}
