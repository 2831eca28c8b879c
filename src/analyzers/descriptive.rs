//! Column-wise descriptive statistics: summaries, shape and quantiles.

use crate::error::{ProcessingError, Result};
use crate::models::{Measured, WeatherVariable};
use serde::Serialize;
use statrs::statistics::Statistics;

/// count/mean/std/min/quartiles/max of one variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableSummary {
    pub variable: WeatherVariable,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Sample skewness and excess kurtosis of one variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeStats {
    pub variable: WeatherVariable,
    pub skewness: f64,
    pub kurtosis: f64,
}

/// Non-missing values of a variable, in table order.
pub fn column_values<T: Measured>(table: &[T], variable: WeatherVariable) -> Vec<f64> {
    table.iter().filter_map(|row| row.value(variable)).collect()
}

pub fn sorted_column_values<T: Measured>(table: &[T], variable: WeatherVariable) -> Vec<f64> {
    let mut values = column_values(table, variable);
    values.sort_by(f64::total_cmp);
    values
}

/// Quantile of sorted values using linear interpolation between order statistics.
///
/// `q` is a fraction in [0, 1]; the rank is `q * (n - 1)`.
pub fn quantile_sorted(sorted_values: &[f64], q: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = q * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * frac
    }
}

/// Quantile threshold of a variable over a whole table.
pub fn quantile<T: Measured>(table: &[T], variable: WeatherVariable, q: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(ProcessingError::InvalidParameter(format!(
            "quantile must be within [0, 1], got {}",
            q
        )));
    }

    let sorted = sorted_column_values(table, variable);
    if sorted.is_empty() {
        return Err(ProcessingError::MissingData(format!(
            "no {} values to take a quantile of",
            variable
        )));
    }

    Ok(quantile_sorted(&sorted, q))
}

pub fn summarize(variable: WeatherVariable, values: &[f64]) -> VariableSummary {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    VariableSummary {
        variable,
        count: values.len(),
        mean: values.mean(),
        std: values.std_dev(),
        min: sorted.first().copied().unwrap_or(f64::NAN),
        q25: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted.last().copied().unwrap_or(f64::NAN),
    }
}

pub fn describe<T: Measured>(table: &[T], variables: &[WeatherVariable]) -> Vec<VariableSummary> {
    variables
        .iter()
        .map(|var| summarize(*var, &column_values(table, *var)))
        .collect()
}

/// Bias-corrected skewness (G1) and excess kurtosis (G2).
///
/// Skewness needs 3 values and kurtosis 4, otherwise NaN. A constant column has
/// zero skewness and kurtosis.
pub fn shape_of(variable: WeatherVariable, values: &[f64]) -> ShapeStats {
    let n = values.len() as f64;
    let mean = values.mean();

    let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
    for v in values {
        let d = v - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }

    let skewness = if values.len() < 3 {
        f64::NAN
    } else if m2 == 0.0 {
        0.0
    } else {
        (n * (n - 1.0).sqrt() / (n - 2.0)) * (m3 / m2.powf(1.5))
    };

    let kurtosis = if values.len() < 4 {
        f64::NAN
    } else if m2 == 0.0 {
        0.0
    } else {
        let numerator = n * (n + 1.0) * (n - 1.0) * m4;
        let denominator = (n - 2.0) * (n - 3.0) * m2 * m2;
        let adjustment = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));
        numerator / denominator - adjustment
    };

    ShapeStats {
        variable,
        skewness,
        kurtosis,
    }
}

pub fn shape_stats<T: Measured>(table: &[T], variables: &[WeatherVariable]) -> Vec<ShapeStats> {
    variables
        .iter()
        .map(|var| shape_of(*var, &column_values(table, *var)))
        .collect()
}
