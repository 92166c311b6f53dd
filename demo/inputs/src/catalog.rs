//! Typed producer registry.
//!
//! Producers are looked up by a stable [`ProducerId`], never by display
//! title, so relabelling a screen does not break lookups.
//!
//! # Examples
//!
//! ```
//! use advisor_inputs::catalog::{produce, produce_for_client, ProducerId};
//! use advisor_core::types::ClientId;
//!
//! let priority = produce(ProducerId::PriorityList).unwrap();
//! assert_eq!(priority.len(), 5);
//!
//! let client = ClientId::from("c101");
//! let portfolio = produce_for_client(ProducerId::PortfolioComposition, &client).unwrap();
//! assert_eq!(portfolio.columns()[0], "Asset Class");
//! ```

use advisor_core::types::{ClientId, Dataset};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::{client_book, investment_info, market, portfolio};

/// Stable identifier of a catalog producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProducerId {
    /// Client priority list
    PriorityList,
    /// Portfolio composition for one client
    PortfolioComposition,
    /// Risk factor exposure for one client
    RiskExposure,
    /// Advisor insights for one client
    ClientInsights,
    /// Sector performance heatmap
    MarketHeatmap,
    /// Book-level AUM by asset class
    AggregatedAum,
    /// Client count by risk category
    RiskDistribution,
    /// Net client cashflows
    Cashflow,
    /// Clients with large cash balances
    HighCashClients,
    /// Clients at risk of leaving
    ChurnRisk,
    /// Upcoming client events
    ClientEvents,
    /// Market movers with explanations
    MarketMovers,
    /// Overseas stock excess-return briefing
    OverseasStockBriefing,
    /// One-line market notes with related clients
    MarketOneLiners,
    /// Macro / overseas / insight briefing tabs
    MarketBriefing,
    /// House view allocation history
    HouseAssetAllocation,
    /// Product and client matching
    ProductRecommendations,
    /// Internal investment ideas
    SeekingAlpha,
    /// Buy/sell review and outlook
    TradeReview,
}

impl ProducerId {
    /// Every producer, in registry order
    pub const ALL: [ProducerId; 19] = [
        Self::PriorityList,
        Self::PortfolioComposition,
        Self::RiskExposure,
        Self::ClientInsights,
        Self::MarketHeatmap,
        Self::AggregatedAum,
        Self::RiskDistribution,
        Self::Cashflow,
        Self::HighCashClients,
        Self::ChurnRisk,
        Self::ClientEvents,
        Self::MarketMovers,
        Self::OverseasStockBriefing,
        Self::MarketOneLiners,
        Self::MarketBriefing,
        Self::HouseAssetAllocation,
        Self::ProductRecommendations,
        Self::SeekingAlpha,
        Self::TradeReview,
    ];

    /// Stable key
    pub fn key(&self) -> &'static str {
        self.entry().key
    }

    /// Registry entry for this producer
    pub fn entry(&self) -> CatalogEntry {
        use Producer::{Book, PerClient};

        let (key, title, producer) = match self {
            Self::PriorityList => (
                "priority_list",
                "Priority List",
                Book(client_book::priority_list),
            ),
            Self::PortfolioComposition => (
                "portfolio_composition",
                "Portfolio Composition",
                PerClient(portfolio::portfolio_composition),
            ),
            Self::RiskExposure => (
                "risk_exposure",
                "Risk Exposure",
                PerClient(portfolio::risk_exposure),
            ),
            Self::ClientInsights => (
                "client_insights",
                "Details & Insights",
                PerClient(portfolio::client_insights),
            ),
            Self::MarketHeatmap => (
                "market_heatmap",
                "Market Heatmap",
                Book(market::market_heatmap),
            ),
            Self::AggregatedAum => (
                "aggregated_aum",
                "Aggregated AUM",
                Book(market::aggregated_aum),
            ),
            Self::RiskDistribution => (
                "risk_distribution",
                "Risk Distribution",
                Book(market::risk_distribution),
            ),
            Self::Cashflow => ("cashflow", "Cashflow", Book(client_book::cashflow)),
            Self::HighCashClients => (
                "high_cash_clients",
                "High Cash",
                Book(client_book::high_cash_clients),
            ),
            Self::ChurnRisk => ("churn_risk", "Churn Risk", Book(client_book::churn_risk)),
            Self::ClientEvents => ("client_events", "Events", Book(client_book::client_events)),
            Self::MarketMovers => ("market_movers", "Market Movers", Book(market::market_movers)),
            Self::OverseasStockBriefing => (
                "overseas_stock_briefing",
                "Overseas Stock Briefing (Excess Return)",
                Book(investment_info::overseas_stock_briefing),
            ),
            Self::MarketOneLiners => (
                "market_one_liners",
                "Market One-Liners",
                Book(investment_info::market_one_liners),
            ),
            Self::MarketBriefing => (
                "market_briefing",
                "Market Briefing",
                Book(investment_info::market_briefing),
            ),
            Self::HouseAssetAllocation => (
                "house_asset_allocation",
                "House Asset Allocation",
                Book(investment_info::house_asset_allocation),
            ),
            Self::ProductRecommendations => (
                "product_recommendations",
                "Product & Client Matching",
                Book(investment_info::product_recommendations),
            ),
            Self::SeekingAlpha => (
                "seeking_alpha",
                "Seeking Alpha (Internal Sources)",
                Book(investment_info::seeking_alpha),
            ),
            Self::TradeReview => (
                "trade_review",
                "Buy/Sell Review",
                Book(investment_info::trade_review),
            ),
        };

        CatalogEntry {
            id: *self,
            key,
            title,
            producer,
        }
    }

    /// Whether the producer needs a client identifier
    pub fn requires_client(&self) -> bool {
        matches!(self.entry().producer, Producer::PerClient(_))
    }
}

impl fmt::Display for ProducerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProducerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.key() == s)
            .ok_or_else(|| format!("Unknown producer '{}'", s))
    }
}

/// A producer function.
#[derive(Clone, Copy)]
pub enum Producer {
    /// Book-wide producer taking no arguments
    Book(fn() -> Dataset),
    /// Producer keyed by client identifier
    PerClient(fn(&ClientId) -> Result<Dataset, CatalogError>),
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book(_) => f.write_str("Producer::Book"),
            Self::PerClient(_) => f.write_str("Producer::PerClient"),
        }
    }
}

/// One registry entry.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Stable identifier
    pub id: ProducerId,
    /// Stable key, also accepted by `ProducerId::from_str`
    pub key: &'static str,
    /// Display title
    pub title: &'static str,
    /// Producer function
    pub producer: Producer,
}

/// Every registry entry, in registry order.
pub fn entries() -> Vec<CatalogEntry> {
    ProducerId::ALL.iter().map(ProducerId::entry).collect()
}

/// Run a book-wide producer.
///
/// Client-keyed producers fail with [`CatalogError::ClientRequired`].
pub fn produce(id: ProducerId) -> Result<Dataset, CatalogError> {
    let entry = id.entry();
    match entry.producer {
        Producer::Book(f) => Ok(f()),
        Producer::PerClient(_) => Err(CatalogError::ClientRequired(entry.key)),
    }
}

/// Run any producer for a client. Book-wide producers ignore the client.
pub fn produce_for_client(id: ProducerId, client: &ClientId) -> Result<Dataset, CatalogError> {
    match id.entry().producer {
        Producer::Book(f) => Ok(f()),
        Producer::PerClient(f) => f(client),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_unique_and_parse_back() {
        let keys: HashSet<_> = ProducerId::ALL.iter().map(ProducerId::key).collect();
        assert_eq!(keys.len(), ProducerId::ALL.len());
        for id in ProducerId::ALL {
            assert_eq!(id.key().parse::<ProducerId>(), Ok(id));
        }
        assert!("Priority List".parse::<ProducerId>().is_err());
    }

    #[test]
    fn test_requires_client() {
        let per_client: Vec<_> = ProducerId::ALL
            .iter()
            .filter(|id| id.requires_client())
            .copied()
            .collect();
        assert_eq!(
            per_client,
            vec![
                ProducerId::PortfolioComposition,
                ProducerId::RiskExposure,
                ProducerId::ClientInsights
            ]
        );
    }

    #[test]
    fn test_produce_without_client_rejected() {
        assert_eq!(
            produce(ProducerId::RiskExposure),
            Err(CatalogError::ClientRequired("risk_exposure"))
        );
    }

    #[test]
    fn test_every_book_producer_non_empty() {
        for entry in entries() {
            if let Producer::Book(f) = entry.producer {
                assert!(!f().is_empty(), "{} produced no rows", entry.key);
            }
        }
    }
}
