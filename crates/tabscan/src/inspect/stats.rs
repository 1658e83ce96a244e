//! Exact summary statistics for numeric columns.

use super::report::NumericSummary;

/// Summarize a column's non-missing numeric values. Returns `None` when
/// there is nothing to summarize.
pub fn summarize(values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    // Sample standard deviation, undefined below two values.
    let std = if count < 2 {
        None
    } else {
        let m2: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        Some((m2 / (count - 1) as f64).sqrt())
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(NumericSummary {
        count,
        mean,
        std,
        min: sorted[0],
        q1: percentile(&sorted, 25.0),
        median: percentile(&sorted, 50.0),
        q3: percentile(&sorted, 75.0),
        max: sorted[count - 1],
    })
}

/// Percentile with linear interpolation over a sorted slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_basic() {
        let summary = summarize(&[100.0, 200.0, 100.0]).unwrap();
        assert_eq!(summary.count, 3);
        assert!((summary.mean - 400.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.min, 100.0);
        assert_eq!(summary.max, 200.0);
        assert_eq!(summary.median, 100.0);
    }

    #[test]
    fn test_sample_std() {
        // Variance of [1, 2, 3] with n-1 denominator is 1.
        let summary = summarize(&[1.0, 2.0, 3.0]).unwrap();
        assert!((summary.std.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_std_undefined_for_single_value() {
        let summary = summarize(&[5.0]).unwrap();
        assert_eq!(summary.std, None);
        assert_eq!(summary.q1, 5.0);
        assert_eq!(summary.median, 5.0);
    }

    #[test]
    fn test_quartiles_interpolate() {
        let summary = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((summary.q1 - 1.75).abs() < 1e-9);
        assert!((summary.median - 2.5).abs() < 1e-9);
        assert!((summary.q3 - 3.25).abs() < 1e-9);
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(summarize(&[]), None);
    }
}
