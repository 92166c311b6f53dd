//! Allocation weight perturbation.
//!
//! Noisy allocations are built in a fixed order: add noise to the base
//! weights, clamp negatives to zero, then renormalise to a unit sum. Clamping
//! first guarantees no negative allocation survives normalisation.

/// Applies `noise` to `base`, clamps at zero and renormalises.
///
/// Returns `base` renormalised when every perturbed weight clamps to zero.
/// Slices of different length are zipped to the shorter one.
///
/// # Examples
///
/// ```rust
/// use advisor_core::allocation::clamp_and_normalise;
///
/// let w = clamp_and_normalise(&[0.4, 0.4, 0.15, 0.05], &[0.0, 0.0, 0.0, -0.1]);
/// assert_eq!(w[3], 0.0);
/// assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
pub fn clamp_and_normalise(base: &[f64], noise: &[f64]) -> Vec<f64> {
    let clamped: Vec<f64> = base
        .iter()
        .zip(noise)
        .map(|(w, n)| (w + n).max(0.0))
        .collect();

    normalise(&clamped).unwrap_or_else(|| normalise(base).unwrap_or_default())
}

/// Scales non-negative weights to sum to one, or `None` if they sum to zero.
fn normalise(weights: &[f64]) -> Option<Vec<f64>> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return None;
    }
    Some(weights.iter().map(|w| w / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const BASE: [f64; 4] = [0.4, 0.4, 0.15, 0.05];

    #[test]
    fn test_zero_noise_keeps_base() {
        let w = clamp_and_normalise(&BASE, &[0.0; 4]);
        for (got, want) in w.iter().zip(BASE.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_clamp_happens_before_normalise() {
        // Cash goes to -0.05; clamped to 0, remainder renormalised over 0.95
        let w = clamp_and_normalise(&BASE, &[0.0, 0.0, 0.0, -0.10]);
        assert_eq!(w[3], 0.0);
        assert_abs_diff_eq!(w[0], 0.4 / 0.95, epsilon = 1e-12);
    }

    #[test]
    fn test_all_clamped_falls_back_to_base() {
        let w = clamp_and_normalise(&BASE, &[-1.0; 4]);
        for (got, want) in w.iter().zip(BASE.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    mod proptests {
        use super::BASE;
        use crate::allocation::clamp_and_normalise;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_weights_non_negative_and_unit_sum(
                noise in proptest::collection::vec(-0.5f64..0.5, 4)
            ) {
                let w = clamp_and_normalise(&BASE, &noise);
                prop_assert_eq!(w.len(), 4);
                prop_assert!(w.iter().all(|x| *x >= 0.0));
                prop_assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-9);
            }
        }
    }
}
