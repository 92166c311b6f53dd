//! Investment Info page producers.
//!
//! Static advisory content: the overseas stock briefing, market one-liners
//! with related clients, the market briefing tabs, the house allocation
//! history, product matching, internal ideas and the trade review.

use advisor_core::types::{Dataset, Value};

/// Ticker, Name, Buy(Pre/Wk), Sell(Pre/Wk), NetBuy, Chg%, Reason; largest net buy first.
pub fn overseas_stock_briefing() -> Dataset {
    const ROWS: [(&str, &str, &str, &str, i64, &str, &str); 5] = [
        ("NVDA", "NVIDIA", "120M / 500M", "80M / 400M", 40, "+3.2%", "Earnings Surprise"),
        ("TSLA", "Tesla", "90M / 350M", "110M / 450M", -20, "-1.5%", "Production Miss"),
        ("AAPL", "Apple", "200M / 800M", "50M / 200M", 150, "+0.5%", "Safe Haven Flow"),
        ("AMZN", "Amazon", "150M / 600M", "140M / 550M", 10, "+1.1%", "Cloud Growth"),
        ("MSFT", "Microsoft", "180M / 700M", "100M / 400M", 80, "+0.8%", "AI Integration"),
    ];

    let mut rows: Vec<_> = ROWS.to_vec();
    rows.sort_by(|a, b| b.4.cmp(&a.4));

    Dataset::from_rows(
        ["Ticker", "Name", "Buy(Pre/Wk)", "Sell(Pre/Wk)", "NetBuy", "Chg%", "Reason"],
        rows.into_iter().map(|(ticker, name, buy, sell, net, chg, reason)| {
            [
                Value::from(ticker),
                Value::from(name),
                Value::from(buy),
                Value::from(sell),
                Value::Int(net),
                Value::from(chg),
                Value::from(reason),
            ]
        }),
    )
}

/// Symbol, Reason, Clients (related client names, possibly empty).
pub fn market_one_liners() -> Dataset {
    Dataset::from_rows(
        ["Symbol", "Reason", "Clients"],
        [
            [
                "TSLA".into(),
                "Price cut announced in China region".into(),
                vec!["Arthur Pendragon", "Merlin Ambrosius"].into(),
            ],
            [
                "XOM".into(),
                "Oil prices surge due to geopolitical tension".into(),
                vec!["Guinevere Leodegrance"].into(),
            ],
            [
                "AAPL".into(),
                "Vision Pro sales exceeding expectations".into(),
                Value::List(Vec::new()),
            ],
        ],
    )
}

/// Tab, Tone, Body. Tone is `info` or `warning`.
pub fn market_briefing() -> Dataset {
    Dataset::from_rows(
        ["Tab", "Tone", "Body"],
        [
            [
                "Macro".into(),
                "info".into(),
                "**Fed Policy**: Powell hints at maintaining rates. CPI expected to be sticky.\n**China**: Stimulus package rumors driving Hang Seng index.".into(),
            ],
            [
                "Overseas".into(),
                "info".into(),
                "Tech sector showing fatigue. Rotation into Healthcare and Industrials observed in last 3 trading sessions.".into(),
            ],
            [
                "Insight".into(),
                "warning".into(),
                "**Risk Alert**: Yen carry trade unwinding could cause short-term volatility. Reduce leverage recommended.".into(),
            ],
        ],
    )
}

/// Asset Class, 1 Mo Ago, 1 Wk Ago, Current, Change (house view, percent).
pub fn house_asset_allocation() -> Dataset {
    const ROWS: [(&str, i64, i64, i64, &str); 4] = [
        ("Equities", 50, 45, 40, "-5% (Bearish)"),
        ("Bonds", 30, 35, 40, "+5% (Bullish)"),
        ("Cash", 10, 10, 10, "-"),
        ("Alts", 10, 10, 10, "-"),
    ];

    Dataset::from_rows(
        ["Asset Class", "1 Mo Ago", "1 Wk Ago", "Current", "Change"],
        ROWS.iter().map(|(class, month, week, current, change)| {
            [
                Value::from(*class),
                Value::Int(*month),
                Value::Int(*week),
                Value::Int(*current),
                Value::from(*change),
            ]
        }),
    )
}

/// Product, Type, Rec Clients, Reason.
pub fn product_recommendations() -> Dataset {
    Dataset::from_rows(
        ["Product", "Type", "Rec Clients", "Reason"],
        [
            ["Global Tech ETF".into(), "ETF".into(), Value::Int(12), "Growth Potential".into()],
            ["US Treasury 5Y".into(), "Bond".into(), Value::Int(8), "Yield Stability".into()],
            ["Green Energy Fund".into(), "Fund".into(), Value::Int(5), "ESG Mandate".into()],
        ],
    )
}

/// Type, Asset, Idea, Valid Until.
pub fn seeking_alpha() -> Dataset {
    Dataset::from_rows(
        ["Type", "Asset", "Idea", "Valid Until"],
        [
            (
                "Quant",
                "Small Cap Value",
                "Low P/E screening shows deep value in Russell 2000",
                "2026-02-01",
            ),
            ("Event", "BioTech", "FDA approval cycle heating up in Q1", "2026-03-01"),
            ("Supply/Demand", "Copper", "Supply shortage due to strike in Chile", "2026-01-20"),
        ]
        .map(|(kind, asset, idea, until)| [kind.into(), asset.into(), idea.into(), until.into()]),
    )
}

/// Ticker, Action, Post-Move, Outlook.
pub fn trade_review() -> Dataset {
    Dataset::from_rows(
        ["Ticker", "Action", "Post-Move", "Outlook"],
        [
            ["NVDA".into(), "Buy".into(), "+2.1%".into(), "Positive (Momentum)".into()],
            ["TSLA".into(), "Sell".into(), "-1.5%".into(), "Neutral (Wait)".into()],
            ["LQD".into(), "Buy".into(), "+0.3%".into(), "Positive (Income)".into()],
        ],
    )
}
