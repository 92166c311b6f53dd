//! Market and book-level producers.

use advisor_core::types::{Dataset, Value};
use rand::distributions::Uniform;
use rand::Rng;

/// Sectors shown on the heatmap
pub const HEATMAP_SECTORS: [&str; 8] = [
    "Technology",
    "Financials",
    "Healthcare",
    "Consumer Disc",
    "Energy",
    "Materials",
    "Industrials",
    "Utilities",
];

/// Sector, Return (%), Market Weight, Color Score.
///
/// Returns are uniform in [-3, 3) rounded to two decimals; weights are
/// uniform in [5, 25). Drawn fresh on every call.
pub fn market_heatmap() -> Dataset {
    let mut rng = rand::thread_rng();
    let returns = Uniform::new(-3.0_f64, 3.0);
    let weights = Uniform::new(5.0_f64, 25.0);

    Dataset::from_rows(
        ["Sector", "Return (%)", "Market Weight", "Color Score"],
        HEATMAP_SECTORS.iter().map(|sector| {
            let ret = round_to(rng.sample(returns), 2);
            [
                Value::from(*sector),
                Value::Float(ret),
                Value::Float(rng.sample(weights)),
                Value::Float(ret),
            ]
        }),
    )
}

/// Asset class, AUM (M) across the whole book.
pub fn aggregated_aum() -> Dataset {
    const AUM: [(&str, i64); 5] = [
        ("Equities", 450),
        ("Fixed Income", 350),
        ("Alts", 150),
        ("Cash", 50),
        ("Real Estate", 200),
    ];

    Dataset::from_rows(
        ["Asset Class", "AUM (M)"],
        AUM.iter()
            .map(|(class, aum)| [Value::from(*class), Value::Int(*aum)]),
    )
}

/// Client count by risk category.
pub fn risk_distribution() -> Dataset {
    const COUNTS: [(&str, i64); 5] = [
        ("Low", 5),
        ("Medium-Low", 12),
        ("Medium", 45),
        ("Medium-High", 28),
        ("High", 10),
    ];

    Dataset::from_rows(
        ["Risk Category", "Client Count"],
        COUNTS
            .iter()
            .map(|(category, count)| [Value::from(*category), Value::Int(*count)]),
    )
}

/// "Why is it moving" explanations.
pub fn market_movers() -> Dataset {
    Dataset::from_rows(
        ["Ticker", "Move", "Reason"],
        [
            [
                "NVDA".into(),
                "+4.2%".into(),
                "AI Chip demand forecast raised by analyst consensus.".into(),
            ],
            [
                "TSLA".into(),
                "-3.1%".into(),
                "production figures missed quarterly estimates slightly.".into(),
            ],
            [
                "US 10Y".into(),
                "+5bps".into(),
                "Stronger than expected CPI print dampening rate cut hopes.".into(),
            ],
        ],
    )
}

fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}
