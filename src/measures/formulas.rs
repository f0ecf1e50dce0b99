//! Association measure formulas over a single 2x2 contingency table
//!
//! All functions take the total corpus size `n` and return plain `f64`.
//! Zero marginals are not guarded except where noted: the IEEE result
//! (inf or NaN) is the score.

use crate::models::ContingencyRecord;

/// Student's t under the binomial approximation.
pub fn t_score(r: &ContingencyRecord, n: f64) -> f64 {
    let x_mean = r.o11 as f64 / n;
    let mu = r.c1() as f64 * r.c2() as f64 / (n * n);
    (x_mean - mu) / ((x_mean * (1.0 - x_mean)) / n).sqrt()
}

/// Pearson's statistic with the marginal factors `c1 * (o11 + o21) *
/// (o12 + o22) * (o21 + o22)`. The second factor is `c2`, not `n - c1`.
///
/// Products are exact in `i128` for corpus-sized counts; anything larger
/// falls back to `f64` arithmetic instead of overflowing.
pub fn chi_square(r: &ContingencyRecord, n: f64) -> f64 {
    match exact_chi_square_terms(r) {
        Some((numerator, denominator)) => n * numerator as f64 / denominator as f64,
        None => {
            let (o11, o12, o21, o22) = (r.o11 as f64, r.o12 as f64, r.o21 as f64, r.o22 as f64);
            let diff = o11 * o22 - o12 * o21;
            n * (diff * diff) / ((o11 + o12) * (o11 + o21) * (o12 + o22) * (o21 + o22))
        }
    }
}

fn exact_chi_square_terms(r: &ContingencyRecord) -> Option<(i128, i128)> {
    let (o11, o12, o21, o22) = (r.o11 as i128, r.o12 as i128, r.o21 as i128, r.o22 as i128);
    let diff = o11.checked_mul(o22)?.checked_sub(o12.checked_mul(o21)?)?;
    let numerator = diff.checked_mul(diff)?;
    let denominator = (o11 + o12)
        .checked_mul(o11 + o21)?
        .checked_mul(o12 + o22)?
        .checked_mul(o21 + o22)?;
    Some((numerator, denominator))
}

/// Binomial log-likelihood `a ln p + (b - a) ln(1 - p)`. A term whose
/// coefficient is zero contributes 0 even when its logarithm is infinite.
fn log_l(a: f64, b: f64, p: f64) -> f64 {
    x_ln_y(a, p) + x_ln_y(b - a, 1.0 - p)
}

fn x_ln_y(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x * y.ln()
    }
}

/// Dunning's log-likelihood ratio (-2 ln lambda).
pub fn log_likelihood_ratio(r: &ContingencyRecord, n: f64) -> f64 {
    let c12 = r.o11 as f64;
    let c1 = r.c1() as f64;
    let c2 = r.c2() as f64;
    let p = c2 / n;
    let p1 = c12 / c1;
    let p2 = (c2 - c12) / (n - c1);

    -2.0 * (log_l(c12, c1, p) + log_l(c2 - c12, n - c1, p)
        - log_l(c12, c1, p1)
        - log_l(c2 - c12, n - c1, p2))
}

/// Pointwise mutual information in bits.
pub fn pmi(r: &ContingencyRecord, n: f64) -> f64 {
    (n * r.o11 as f64 / (r.c1() as f64 * r.c2() as f64)).log2()
}

/// Mutual information in bits over all four cells.
pub fn mutual_information(r: &ContingencyRecord, n: f64) -> f64 {
    let c1 = r.c1() as f64;
    let c2 = r.c2() as f64;
    let (o11, o12, o21, o22) = (r.o11 as f64, r.o12 as f64, r.o21 as f64, r.o22 as f64);

    mi_term(o11, n, c1 * c2)
        + mi_term(o12, n, c1 * (o12 + o22))
        + mi_term(o21, n, (n - c1) * c2)
        + mi_term(o22, n, (n - c1) * (n - c2))
}

/// `(o / n) * log2(n * o / expected)`, or exactly 0 for an empty cell.
fn mi_term(observed: f64, n: f64, marginal_product: f64) -> f64 {
    if observed == 0.0 {
        return 0.0;
    }
    (observed / n) * (n * observed / marginal_product).log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::record;

    fn scenario() -> ContingencyRecord {
        record("w1", "J", "w2", "N", [4, 1, 1, 4])
    }

    #[test]
    fn test_pmi_scenario() {
        let value = pmi(&scenario(), 10.0);
        assert!((value - 1.6f64.log2()).abs() < 1e-12);
        assert!((value - 0.678).abs() < 1e-3);
    }

    #[test]
    fn test_chi_square_scenario() {
        assert!((chi_square(&scenario(), 10.0) - 3.6).abs() < 1e-12);
    }

    #[test]
    fn test_t_score_scenario() {
        // x = 0.4, mu = 0.25, sqrt(0.4 * 0.6 / 10) = 0.154919...
        let expected = 0.15 / (0.024f64).sqrt();
        assert!((t_score(&scenario(), 10.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_log_likelihood_scenario() {
        // p = 0.5, p1 = 0.8, p2 = 0.2
        let expected = -2.0
            * ((4.0 * 0.5f64.ln() + 0.5f64.ln()) + (0.5f64.ln() + 4.0 * 0.5f64.ln())
                - (4.0 * 0.8f64.ln() + 0.2f64.ln())
                - (0.2f64.ln() + 4.0 * 0.8f64.ln()));
        let value = log_likelihood_ratio(&scenario(), 10.0);
        assert!((value - expected).abs() < 1e-9);
        assert!(value > 0.0);
    }

    #[test]
    fn test_log_likelihood_with_exclusive_pair_is_finite() {
        // word1 never occurs without word2: p1 = 1
        let r = record("a", "N", "b", "N", [5, 0, 20, 975]);
        assert!(log_likelihood_ratio(&r, 1000.0).is_finite());
    }

    #[test]
    fn test_mutual_information_scenario() {
        let n = 10.0;
        let expected = 0.4 * 1.6f64.log2()
            + 0.1 * (10.0 * 1.0 / (5.0f64 * 5.0)).log2()
            + 0.1 * (10.0 * 1.0 / (5.0f64 * 5.0)).log2()
            + 0.4 * (10.0 * 4.0 / (5.0f64 * 5.0)).log2();
        assert!((mutual_information(&scenario(), n) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_mutual_information_zero_cells_contribute_nothing() {
        let r = record("a", "N", "b", "N", [3, 0, 0, 7]);
        let value = mutual_information(&r, 10.0);
        assert!(!value.is_nan());
        let expected = 0.3 * (10.0 * 3.0 / 9.0f64).log2() + 0.7 * (10.0 * 7.0 / 49.0f64).log2();
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_marginals_do_not_panic() {
        let r = record("a", "N", "b", "N", [0, 0, 0, 10]);
        assert!(pmi(&r, 10.0).is_nan());
        assert!(chi_square(&r, 10.0).is_nan());
        assert!(t_score(&r, 10.0).is_nan());
        assert_eq!(mutual_information(&r, 10.0), 0.0);
        assert_eq!(log_likelihood_ratio(&r, 10.0), 0.0);
    }

    #[test]
    fn test_pmi_zero_cooccurrence_is_negative_infinity() {
        let r = record("a", "N", "b", "N", [0, 3, 2, 5]);
        assert_eq!(pmi(&r, 10.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_chi_square_large_counts_do_not_overflow() {
        let r = record("a", "N", "b", "N", [400_000, 100_000, 100_000, 309_768]);
        assert!(chi_square(&r, 909_768.0).is_finite());
    }

    #[test]
    fn test_out_of_range_counts_do_not_overflow() {
        let huge = record("a", "N", "b", "N", [10_000_000_000; 4]);
        assert_eq!(chi_square(&huge, 909_768.0), 0.0);

        let saturated = record("a", "N", "b", "N", [u64::MAX, 1, 0, 0]);
        assert!(!pmi(&saturated, 909_768.0).is_nan());
        assert!(chi_square(&saturated, 909_768.0).is_nan());
        let _ = t_score(&saturated, 909_768.0);
        let _ = log_likelihood_ratio(&saturated, 909_768.0);
        let _ = mutual_information(&saturated, 909_768.0);
    }
}
