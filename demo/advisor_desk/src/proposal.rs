//! Proposal drafting.

use advisor_core::types::Value;
use advisor_inputs::client_book::{find_client_by_name, priority_list, PRIORITY_CLIENT_COLUMN};
use serde::Serialize;

use crate::error::Result;
use crate::session::DeskSession;

/// Rebalancing strategy suggested for a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendedStrategy {
    /// One-line strategy
    pub headline: &'static str,
    /// Why it is recommended
    pub rationale: &'static str,
    /// Product to sell
    pub sell: &'static str,
    /// Product to buy
    pub buy: &'static str,
}

const TECH_TO_BONDS: RecommendedStrategy = RecommendedStrategy {
    headline: "Reduce Tech Overweight & Add Bonds",
    rationale: "Portfolio drift > 5% in tech sector.",
    sell: "Global Tech ETF",
    buy: "US Treasury 5Y",
};

/// A proposal ready for the advisor to edit and send
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalDraft {
    /// Addressee
    pub client_name: String,
    /// Recommended strategy
    pub strategy: RecommendedStrategy,
    /// Editable message body
    pub message: String,
}

/// Draft a proposal for a roster client, signed by `advisor_name`.
///
/// Fails with `NotFound` if `client_name` is not on the roster.
pub fn draft_proposal(client_name: &str, advisor_name: &str) -> Result<ProposalDraft> {
    let client = find_client_by_name(client_name)?;

    Ok(ProposalDraft {
        message: message_template(&client.name, advisor_name),
        client_name: client.name,
        strategy: TECH_TO_BONDS,
    })
}

/// Client names offered as proposal targets: the priority list restricted to
/// the selected group, in priority order.
pub fn proposal_targets(session: &DeskSession) -> Result<Vec<String>> {
    let targets = session.filter_by_selected_on(&priority_list(), PRIORITY_CLIENT_COLUMN)?;
    let names = targets
        .column(PRIORITY_CLIENT_COLUMN)?
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    Ok(names)
}

fn message_template(client_name: &str, advisor_name: &str) -> String {
    format!(
        "Dear {client_name},\n\n\
         I noticed your portfolio has significant exposure to the tech sector, which has rallied \
         recently. To lock in gains and reduce volatility, I recommend rebalancing into \
         high-grade bonds.\n\n\
         Let's discuss this at your convenience.\n\n\
         Best,\n{advisor_name}"
    )
}
