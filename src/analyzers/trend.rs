use crate::models::{Measured, MonthlyAggregate, WeatherVariable};
use serde::Serialize;

/// Least-squares temperature slope (°C per month) for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryTrend {
    pub country: String,
    /// NaN when every point shares one month number.
    pub slope: f64,
    pub points: usize,
}

/// Slope of the degree-1 least-squares fit `y = a·x + b`.
///
/// NaN for fewer than two points or when all `x` are identical.
pub fn least_squares_slope(points: &[(f64, f64)]) -> f64 {
    if points.len() < 2 {
        return f64::NAN;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxx, mut sxy) = (0.0, 0.0);
    for (x, y) in points {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    if sxx == 0.0 {
        return f64::NAN;
    }
    sxy / sxx
}

/// Distinct countries in first-encounter order.
pub fn countries_in_order(monthly: &[MonthlyAggregate]) -> Vec<&str> {
    let mut seen = Vec::new();
    for row in monthly {
        if !seen.contains(&row.country.as_str()) {
            seen.push(row.country.as_str());
        }
    }
    seen
}

/// Temperature trend per country, for the first `max_countries` countries in
/// table order. Countries with fewer than two temperature readings are left out.
pub fn country_trend(monthly: &[MonthlyAggregate], max_countries: usize) -> Vec<CountryTrend> {
    countries_in_order(monthly)
        .into_iter()
        .take(max_countries)
        .filter_map(|country| {
            let mut rows: Vec<&MonthlyAggregate> = monthly
                .iter()
                .filter(|row| row.country == country)
                .collect();
            rows.sort_by_key(|row| row.month_num);

            let points: Vec<(f64, f64)> = rows
                .iter()
                .filter_map(|row| {
                    row.value(WeatherVariable::Temperature)
                        .map(|t| (row.month_num as f64, t))
                })
                .collect();

            if points.len() < 2 {
                return None;
            }

            Some(CountryTrend {
                country: country.to_string(),
                slope: least_squares_slope(&points),
                points: points.len(),
            })
        })
        .collect()
}
