//! Per-client portfolio producers.
//!
//! Every function here is keyed by client identifier and deterministic for
//! that identifier: the generator is seeded from the id before any draw.
//! Unknown identifiers fail with [`CatalogError::ClientNotFound`].
//!
//! ## Portfolio composition
//!
//! Allocations start from a fixed house weighting, receive independent
//! N(0, 0.05) noise per asset class, are clamped at zero and then
//! renormalised to a unit sum.

use advisor_core::allocation::clamp_and_normalise;
use advisor_core::rng::ClientRng;
use advisor_core::types::{ClientId, Dataset, Value};
use rand_distr::Normal;

use crate::client_book::find_client;
use crate::error::CatalogError;

/// Assumed portfolio size when valuing allocations
pub const DEFAULT_PORTFOLIO_NOTIONAL_USD: f64 = 10_000_000.0;

/// Asset classes and their base weights
pub const BASE_ALLOCATION: [(&str, f64); 4] = [
    ("Equities", 0.40),
    ("Fixed Income", 0.40),
    ("Alternatives", 0.15),
    ("Cash", 0.05),
];

/// Standard deviation of the per-class allocation noise
pub const ALLOCATION_NOISE_STD: f64 = 0.05;

/// Risk factors with their target exposures
pub const RISK_FACTOR_TARGETS: [(&str, f64); 6] = [
    ("Growth", 0.5),
    ("Value", 0.5),
    ("Momentum", 0.5),
    ("Volatility", 0.0),
    ("Liquidity", 0.8),
    ("Size", 0.2),
];

const PORTFOLIO_STREAM: &str = "portfolio_composition";
const RISK_STREAM: &str = "risk_exposure";

/// Builds per-client portfolio datasets.
#[derive(Debug, Clone)]
pub struct PortfolioGenerator {
    /// Portfolio value used for the `Value USD` column
    notional_usd: f64,
}

impl PortfolioGenerator {
    /// Create a generator with the default notional
    pub fn new() -> Self {
        Self {
            notional_usd: DEFAULT_PORTFOLIO_NOTIONAL_USD,
        }
    }

    /// Set the portfolio notional
    pub fn with_notional(mut self, notional_usd: f64) -> Self {
        self.notional_usd = notional_usd;
        self
    }

    /// Portfolio notional in USD
    pub fn notional_usd(&self) -> f64 {
        self.notional_usd
    }

    /// Noisy allocation weights for a client, in [`BASE_ALLOCATION`] order.
    pub fn allocation_weights(&self, id: &ClientId) -> Result<Vec<f64>, CatalogError> {
        find_client(id)?;

        let mut rng = ClientRng::for_client(id, PORTFOLIO_STREAM);
        let base: Vec<f64> = BASE_ALLOCATION.iter().map(|(_, w)| *w).collect();
        let noise = match Normal::new(0.0, ALLOCATION_NOISE_STD) {
            Ok(dist) => rng.sample_n(&dist, base.len()),
            Err(_) => vec![0.0; base.len()],
        };

        Ok(clamp_and_normalise(&base, &noise))
    }

    /// Asset class, Allocation, Value USD
    pub fn composition(&self, id: &ClientId) -> Result<Dataset, CatalogError> {
        let weights = self.allocation_weights(id)?;

        Ok(Dataset::from_rows(
            ["Asset Class", "Allocation", "Value USD"],
            BASE_ALLOCATION.iter().zip(weights).map(|((class, _), w)| {
                [
                    Value::from(*class),
                    Value::Float(w),
                    Value::Float(w * self.notional_usd),
                ]
            }),
        ))
    }

    /// Factor, Current Exposure, Target Exposure, Drift
    pub fn risk_exposure(&self, id: &ClientId) -> Result<Dataset, CatalogError> {
        find_client(id)?;

        let mut rng = ClientRng::for_client(id, RISK_STREAM);
        let current = match Normal::new(0.5, 0.3) {
            Ok(dist) => rng.sample_n(&dist, RISK_FACTOR_TARGETS.len()),
            Err(_) => vec![0.5; RISK_FACTOR_TARGETS.len()],
        };

        Ok(Dataset::from_rows(
            ["Factor", "Current Exposure", "Target Exposure", "Drift"],
            RISK_FACTOR_TARGETS
                .iter()
                .zip(current)
                .map(|((factor, target), cur)| {
                    [
                        Value::from(*factor),
                        Value::Float(cur),
                        Value::Float(*target),
                        Value::Float(cur - target),
                    ]
                }),
        ))
    }
}

impl Default for PortfolioGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Portfolio composition at the default notional.
pub fn portfolio_composition(id: &ClientId) -> Result<Dataset, CatalogError> {
    PortfolioGenerator::new().composition(id)
}

/// Risk factor exposure against house targets.
pub fn risk_exposure(id: &ClientId) -> Result<Dataset, CatalogError> {
    PortfolioGenerator::new().risk_exposure(id)
}

/// Advisor talking points for a client.
pub fn client_insights(id: &ClientId) -> Result<Dataset, CatalogError> {
    find_client(id)?;

    Ok(Dataset::from_rows(
        ["Insight"],
        [
            [concat!(
                "**Portfolio Drift**: Equity allocation is **5% Overweight** vs Target ",
                "due to recent Tech rally."
            )
            .into()],
            [concat!(
                "**Tax Opportunity**: Client has **$45k** in realized losses in Fixed Income ",
                "that can offset gains."
            )
            .into()],
            ["**Macro**: Fed rate pause expected; suggest checking duration exposure.".into()],
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arthur() -> ClientId {
        ClientId::from("c101")
    }

    #[test]
    fn test_composition_deterministic_per_client() {
        let a = portfolio_composition(&arthur()).unwrap();
        let b = portfolio_composition(&arthur()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_composition_differs_between_clients() {
        let a = portfolio_composition(&arthur()).unwrap();
        let b = portfolio_composition(&ClientId::from("c104")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_allocation_sums_to_one() {
        for client in crate::client_book::roster() {
            let ds = portfolio_composition(&client.id).unwrap();
            let weights: Vec<f64> = ds
                .column("Allocation")
                .unwrap()
                .filter_map(Value::as_f64)
                .collect();
            assert_eq!(weights.len(), 4);
            assert!(weights.iter().all(|w| *w >= 0.0));
            assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_value_scales_with_notional() {
        let generator = PortfolioGenerator::new().with_notional(2_000_000.0);
        let ds = generator.composition(&arthur()).unwrap();
        for record in ds.records() {
            let w = record.get("Allocation").and_then(Value::as_f64).unwrap();
            let v = record.get("Value USD").and_then(Value::as_f64).unwrap();
            assert_relative_eq!(v, w * 2_000_000.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_risk_drift_is_current_minus_target() {
        let ds = risk_exposure(&arthur()).unwrap();
        assert_eq!(ds.len(), 6);
        for record in ds.records() {
            let cur = record.get("Current Exposure").and_then(Value::as_f64).unwrap();
            let tgt = record.get("Target Exposure").and_then(Value::as_f64).unwrap();
            let drift = record.get("Drift").and_then(Value::as_f64).unwrap();
            assert_relative_eq!(drift, cur - tgt);
        }
        assert_eq!(ds, risk_exposure(&arthur()).unwrap());
    }

    #[test]
    fn test_unknown_client_not_found() {
        let unknown = ClientId::from("c999");
        assert_eq!(
            portfolio_composition(&unknown),
            Err(CatalogError::ClientNotFound("c999".to_string()))
        );
        assert!(risk_exposure(&unknown).is_err());
        assert!(client_insights(&unknown).is_err());
    }
}
