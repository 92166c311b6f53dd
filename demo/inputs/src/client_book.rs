//! Client book producers.
//!
//! Holds the fixed client roster and the relationship-management lists built
//! from it: the priority list, net cashflows, high-cash clients, churn risk
//! and upcoming client events.

use advisor_core::types::{Client, ClientId, Dataset, Value};
use chrono::NaiveDate;
use rand::distributions::Uniform;
use rand::Rng;

use crate::error::CatalogError;

/// Column holding the client name in the priority list
pub const PRIORITY_CLIENT_COLUMN: &str = "client_name";

/// Column holding the client name in the cashflow list
pub const CASHFLOW_CLIENT_COLUMN: &str = "Client";

/// (id, name, priority score, AUM in USD)
const ROSTER: [(&str, &str, u8, f64); 5] = [
    ("c101", "Arthur Pendragon", 95, 15_000_000.0),
    ("c102", "Guinevere Leodegrance", 88, 8_500_000.0),
    ("c103", "Lancelot du Lac", 75, 22_000_000.0),
    ("c104", "Merlin Ambrosius", 40, 5_000_000.0),
    ("c105", "Morgan le Fay", 30, 12_000_000.0),
];

/// The fixed client roster, in booking order.
pub fn roster() -> Vec<Client> {
    ROSTER
        .iter()
        .map(|(id, name, score, aum)| Client::new(*id, *name, *score, *aum))
        .collect()
}

/// Look up a client by identifier.
pub fn find_client(id: &ClientId) -> Result<Client, CatalogError> {
    roster()
        .into_iter()
        .find(|c| &c.id == id)
        .ok_or_else(|| CatalogError::client_not_found(id.as_str()))
}

/// Look up a client by display name.
pub fn find_client_by_name(name: &str) -> Result<Client, CatalogError> {
    roster()
        .into_iter()
        .find(|c| c.name == name)
        .ok_or_else(|| CatalogError::client_not_found(name))
}

/// Severity of a priority reason
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Needs action today
    High,
    /// Needs action this week
    Medium,
    /// Informational
    Low,
}

/// Why a client is on the priority list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonTag {
    /// Allocation has drifted from target
    RiskDrift,
    /// Cash drag on performance
    Liquidity,
    /// Upcoming bond maturity
    Maturity,
    /// Sector news affecting holdings
    News,
}

impl ReasonTag {
    /// Stable reason code
    pub fn code(&self) -> &'static str {
        match self {
            Self::RiskDrift => "RISK_DRIFT",
            Self::Liquidity => "LIQUIDITY",
            Self::Maturity => "MATURITY",
            Self::News => "NEWS",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::RiskDrift => "Risk Drift > 5%",
            Self::Liquidity => "Cash Drag (15%)",
            Self::Maturity => "Bond Maturity (30d)",
            Self::News => "Tech Sector Volatility",
        }
    }

    /// Severity
    pub fn severity(&self) -> Severity {
        match self {
            Self::RiskDrift => Severity::High,
            Self::Liquidity | Self::Maturity => Severity::Medium,
            Self::News => Severity::Low,
        }
    }

    /// Reasons attached to a client with the given priority score
    pub fn for_score(score: u8) -> Vec<ReasonTag> {
        if score > 80 {
            vec![Self::RiskDrift]
        } else if score > 60 {
            vec![Self::Liquidity, Self::Maturity]
        } else {
            Vec::new()
        }
    }
}

/// Recommended next contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Phone the client
    Call,
    /// Email the client
    Email,
}

impl NextAction {
    /// Action for a priority score
    pub fn for_score(score: u8) -> Self {
        if score > 80 {
            Self::Call
        } else {
            Self::Email
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Email => "Email",
        }
    }
}

/// Priority list, highest score first. Equal scores keep roster order.
///
/// `last_contact_days` is drawn fresh on every call.
pub fn priority_list() -> Dataset {
    let mut rng = rand::thread_rng();
    let days = Uniform::new_inclusive(2_i64, 30);

    let mut clients = roster();
    clients.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));

    let rows = clients.into_iter().map(|c| {
        let reasons: Vec<&str> = ReasonTag::for_score(c.priority_score)
            .iter()
            .map(ReasonTag::label)
            .collect();
        [
            Value::from(c.id.as_str()),
            Value::from(c.name),
            Value::from(c.priority_score),
            Value::from(c.aum_usd),
            Value::from(reasons),
            Value::Int(rng.sample(days)),
            Value::from(NextAction::for_score(c.priority_score).label()),
        ]
    });

    Dataset::from_rows(
        [
            "client_id",
            PRIORITY_CLIENT_COLUMN,
            "priority_score",
            "aum_usd",
            "reason_tags",
            "last_contact_days",
            "next_action",
        ],
        rows,
    )
}

/// Net deposits and withdrawals. Direction follows the sign of the flow.
pub fn cashflow() -> Dataset {
    const FLOWS: [(&str, &str, i64); 5] = [
        ("Arthur Pendragon", "Pension", 500_000),
        ("Lancelot du Lac", "ISA", -20_000),
        ("Guinevere Leodegrance", "General", 150_000),
        ("Merlin Ambrosius", "Pension", -500_000),
        ("Gawain Orkney", "General", 25_000),
    ];

    Dataset::from_rows(
        [CASHFLOW_CLIENT_COLUMN, "Type", "Net Flow", "Direction"],
        FLOWS.iter().map(|(client, kind, flow)| {
            let direction = if *flow >= 0 { "Inflow" } else { "Outflow" };
            [
                Value::from(*client),
                Value::from(*kind),
                Value::Int(*flow),
                Value::from(direction),
            ]
        }),
    )
}

/// Clients holding large cash balances.
pub fn high_cash_clients() -> Dataset {
    Dataset::from_rows(
        ["Client", "Cash ($)", "Cash %", "Reason"],
        [
            [
                "Galahad Pure".into(),
                Value::Int(2_500_000),
                Value::Int(35),
                "Recent Business Sale".into(),
            ],
            [
                "Percival Grail".into(),
                Value::Int(800_000),
                Value::Int(22),
                "Waiting for Dip".into(),
            ],
            ["Bors de Ganis".into(), Value::Int(450_000), Value::Int(18), "Risk Averse".into()],
        ],
    )
}

/// Clients at risk of leaving.
pub fn churn_risk() -> Dataset {
    Dataset::from_rows(
        ["Client", "Risk Score", "Prob", "Reason"],
        [
            ["Mordred".into(), "High".into(), Value::Int(85), "Performance & Low Contact".into()],
            ["Morgan le Fay".into(), "Medium".into(), Value::Int(60), "Competitor Offer".into()],
            ["Kay Steward".into(), "Medium".into(), Value::Int(45), "Fee Sensitivity".into()],
        ],
    )
}

/// Upcoming client life and portfolio events.
pub fn client_events() -> Dataset {
    const EVENTS: [(&str, &str, (i32, u32, u32), &str); 3] = [
        ("Arthur Pendragon", "Birthday (60th)", (2026, 1, 10), "Send Gift"),
        ("Guinevere Leodegrance", "Bond Maturity ($1M)", (2026, 1, 12), "Reinvest Proposal"),
        ("Lancelot du Lac", "Retirement Age", (2026, 2, 1), "Financial Plan Review"),
    ];

    Dataset::from_rows(
        ["Client", "Event", "Date", "Action"],
        EVENTS.iter().map(|(client, event, (y, m, d), action)| {
            let date = NaiveDate::from_ymd_opt(*y, *m, *d)
                .map(Value::Date)
                .unwrap_or_else(|| Value::from(format!("{:04}-{:02}-{:02}", y, m, d)));
            [
                Value::from(*client),
                Value::from(*event),
                date,
                Value::from(*action),
            ]
        }),
    )
}
