use crate::models::{Measured, WeatherVariable};
use serde::Serialize;

/// Pearson correlation matrix over a fixed variable list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub variables: Vec<WeatherVariable>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: WeatherVariable, b: WeatherVariable) -> Option<f64> {
        let i = self.variables.iter().position(|v| *v == a)?;
        let j = self.variables.iter().position(|v| *v == b)?;
        Some(self.values[i][j])
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Exact symmetry, treating NaN as equal to NaN.
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| {
            (0..n).all(|j| {
                let (a, b) = (self.values[i][j], self.values[j][i]);
                a == b || (a.is_nan() && b.is_nan())
            })
        })
    }

    /// Strongest off-diagonal relationships, by absolute coefficient.
    pub fn strongest_pairs(&self, n: usize) -> Vec<(WeatherVariable, WeatherVariable, f64)> {
        let mut pairs = Vec::new();
        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                let r = self.values[i][j];
                if !r.is_nan() {
                    pairs.push((self.variables[i], self.variables[j], r));
                }
            }
        }
        pairs.sort_by(|a, b| b.2.abs().total_cmp(&a.2.abs()));
        pairs.truncate(n);
        pairs
    }
}

/// Pearson coefficient over pairwise-complete observations.
///
/// NaN when fewer than two pairs exist or either side has zero variance.
pub fn pearson(pairs: &[(f64, f64)]) -> f64 {
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

/// Correlation matrix with a unit diagonal; the lower triangle mirrors the upper.
pub fn correlate<T: Measured>(table: &[T], variables: &[WeatherVariable]) -> CorrelationMatrix {
    let n = variables.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let pairs: Vec<(f64, f64)> = table
                .iter()
                .filter_map(|row| Some((row.value(variables[i])?, row.value(variables[j])?)))
                .collect();
            let r = pearson(&pairs);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        variables: variables.to_vec(),
        values,
    }
}
