use crate::aggregate::RunTestRow;
use crate::config::RegressionWeights;
use crate::error::{LgResult, LinkographError};
use crate::protocol::RunTestResponse;
use statrs::distribution::{ContinuousCDF, Normal};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowProbability {
    /// `None` when the row carries too little data for a z statistic.
    pub z: Option<f64>,
    pub p_value: f64,
}

/// Wald-Wolfowitz runs test, two-tailed, normal approximation.
pub fn run_test_probability(n1: usize, n2: usize, run_count: usize) -> LgResult<RowProbability> {
    let n = n1.checked_add(n2).ok_or_else(|| {
        LinkographError::Validation(format!("Row counts {} + {} overflow", n1, n2))
    })?;
    if n <= 1 || n1 == 0 || n2 == 0 {
        return Ok(RowProbability {
            z: None,
            p_value: 1.0,
        });
    }

    let (n1, n2, n, r) = (n1 as f64, n2 as f64, n as f64, run_count as f64);
    let two_n1n2 = 2.0 * n1 * n2;
    let mu = two_n1n2 / n + 1.0;
    let variance = two_n1n2 * (two_n1n2 - n) / (n * n * (n - 1.0));
    let sigma = variance.sqrt();

    // Degenerate spread (n1 = n2 = 1): the run count is fully determined.
    if sigma == 0.0 {
        let p_value = if (r - mu).abs() < f64::EPSILON { 1.0 } else { 0.0 };
        return Ok(RowProbability { z: None, p_value });
    }

    let z = (r - mu) / sigma;
    Ok(RowProbability {
        z: Some(z),
        p_value: 2.0 * (1.0 - Normal::standard().cdf(z.abs())),
    })
}

pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Aggregates per-row probabilities and feeds them through the logistic model.
pub fn evaluate(
    rows: &[RunTestRow],
    move_count: Option<usize>,
    weights: &RegressionWeights,
) -> LgResult<RunTestResponse> {
    if rows.is_empty() {
        return Err(LinkographError::Validation(
            "No horizontal data provided.".to_string(),
        ));
    }
    let move_count = move_count.ok_or_else(|| {
        LinkographError::Validation("The number of moves has not been set yet.".to_string())
    })?;

    let total_run_sum = rows
        .iter()
        .try_fold(0usize, |acc, r| acc.checked_add(r.run_count))
        .ok_or_else(|| {
            LinkographError::Validation("Total run count overflows".to_string())
        })?;
    let mut total_probability_sum = 0.0;
    for r in rows {
        total_probability_sum += run_test_probability(r.n1, r.n2, r.run_count)?.p_value;
    }

    let z = weights.intercept
        + weights.coef_move_count * move_count as f64
        + weights.coef_run_sum * total_run_sum as f64
        + weights.coef_probability_sum * total_probability_sum;

    Ok(RunTestResponse {
        p_value: logistic(z),
        total_run_sum,
        total_probability_sum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_sided_rows_are_certain() {
        assert_eq!(run_test_probability(0, 5, 1).unwrap().p_value, 1.0);
        assert_eq!(run_test_probability(5, 0, 1).unwrap().p_value, 1.0);
        assert_eq!(run_test_probability(1, 0, 1).unwrap().p_value, 1.0);
    }

    #[test]
    fn test_degenerate_spread() {
        let p = run_test_probability(1, 1, 2).unwrap();
        assert_eq!(p.p_value, 1.0);
        assert!(p.z.is_none());
    }

    #[test]
    fn test_expected_runs_give_high_p() {
        // n1 = n2 = 10 -> mu = 11; two runs sits far below it
        let low = run_test_probability(10, 10, 2).unwrap();
        assert!(low.z.unwrap() < -3.0);
        assert!(low.p_value < 0.01);
    }

    #[test]
    fn test_logistic_midpoint() {
        assert!((logistic(0.0) - 0.5).abs() < 1e-12);
    }
}
