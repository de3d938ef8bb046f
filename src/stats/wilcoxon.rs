use std::cmp::Ordering;

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

/// Largest number of non-zero differences for which the exact null
/// distribution is enumerated (2^50 still fits a `u64` count).
pub const EXACT_MAX_N: usize = 50;

/// How the p-value was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WilcoxonMethod {
    /// Every difference was zero; p is 1 by definition
    AllZero,
    /// Exact permutation distribution of W+
    Exact,
    /// Normal approximation with tie-corrected variance
    NormalApproximation,
}

/// Result of a two-sided Wilcoxon signed-rank test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WilcoxonResult {
    /// `min(W+, W-)`
    pub statistic: f64,
    /// Two-sided p-value in [0, 1]
    pub p_value: f64,
    /// Number of non-zero differences ranked
    pub n: usize,
    /// Exact or approximate
    pub method: WilcoxonMethod,
}

/// Two-sided Wilcoxon signed-rank test on paired differences.
///
/// Zero differences are discarded before ranking. Returns `None` for an empty
/// input; when every difference is zero the p-value is 1.
pub fn signed_rank(differences: &[f64]) -> Option<WilcoxonResult> {
    if differences.is_empty() {
        return None;
    }

    let nonzero: Vec<f64> = differences.iter().copied().filter(|d| *d != 0.0).collect();
    let n = nonzero.len();
    if n == 0 {
        return Some(WilcoxonResult {
            statistic: 0.0,
            p_value: 1.0,
            n: 0,
            method: WilcoxonMethod::AllZero,
        });
    }

    let (ranks, tie_groups) = average_ranks(&nonzero);

    let w_plus: f64 = nonzero
        .iter()
        .zip(&ranks)
        .filter(|(d, _)| **d > 0.0)
        .map(|(_, r)| *r)
        .sum();
    let total = (n * (n + 1)) as f64 / 2.0;
    let w_minus = total - w_plus;
    let statistic = w_plus.min(w_minus);

    let (p_value, method) = if n <= EXACT_MAX_N && tie_groups.is_empty() {
        (exact_p_value(n, w_plus), WilcoxonMethod::Exact)
    } else {
        (normal_p_value(n, w_plus, &tie_groups), WilcoxonMethod::NormalApproximation)
    };

    Some(WilcoxonResult {
        statistic,
        p_value,
        n,
        method,
    })
}

/// Ranks of `|values|` with ties averaged, plus the size of every tie group
fn average_ranks(values: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let abs: Vec<f64> = values.iter().map(|v| v.abs()).collect();
    let mut order: Vec<usize> = (0..abs.len()).collect();
    order.sort_by(|&a, &b| abs[a].partial_cmp(&abs[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; abs.len()];
    let mut ties = Vec::new();
    let mut i = 0;
    while i < order.len() {
        let mut j = i + 1;
        while j < order.len() && abs[order[j]] == abs[order[i]] {
            j += 1;
        }
        // 1-based ranks i+1 ..= j share their mean
        let avg = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = avg;
        }
        if j - i > 1 {
            ties.push(j - i);
        }
        i = j;
    }
    (ranks, ties)
}

/// Exact two-sided p-value: `2 * P(W+ <= min(w, max - w))` under H0
fn exact_p_value(n: usize, w_plus: f64) -> f64 {
    let max = n * (n + 1) / 2;
    // Without ties every rank is an integer, so W+ is too
    let w = w_plus.round() as usize;
    let k = w.min(max - w);

    // counts[s] = number of subsets of {1..n} summing to s
    let mut counts = vec![0u64; max + 1];
    counts[0] = 1;
    for rank in 1..=n {
        for s in (rank..=max).rev() {
            counts[s] += counts[s - rank];
        }
    }

    let tail: u64 = counts[..=k].iter().sum();
    let total = 2f64.powi(n as i32);
    (2.0 * tail as f64 / total).min(1.0)
}

fn normal_p_value(n: usize, w_plus: f64, tie_groups: &[usize]) -> f64 {
    let n = n as f64;
    let mean = n * (n + 1.0) / 4.0;
    let tie_correction: f64 = tie_groups
        .iter()
        .map(|&t| {
            let t = t as f64;
            t * t * t - t
        })
        .sum::<f64>()
        / 48.0;
    let variance = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0 - tie_correction;
    if variance <= 0.0 {
        return 1.0;
    }

    let z = (w_plus - mean) / variance.sqrt();
    match Normal::new(0.0, 1.0) {
        Ok(normal) => (2.0 * normal.cdf(-z.abs())).min(1.0),
        Err(_) => f64::NAN,
    }
}
