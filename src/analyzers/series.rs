//! Chart-ready series: histograms, scatter points and per-country monthly lines.

use crate::analyzers::descriptive::column_values;
use crate::error::{ProcessingError, Result};
use crate::models::{Measured, MonthlyAggregate, WeatherRecord, WeatherVariable};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub variable: WeatherVariable,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub country: String,
    pub temperature_celsius: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySeries {
    pub country: String,
    /// (month_num, temperature) ascending by month
    pub points: Vec<(u32, f64)>,
}

/// Equal-width bins over [min, max]; the last bin is closed on the right.
/// A constant column spans [v - 0.5, v + 0.5].
pub fn histogram<T: Measured>(
    table: &[T],
    variable: WeatherVariable,
    bins: usize,
) -> Result<Histogram> {
    if bins == 0 {
        return Err(ProcessingError::InvalidParameter(
            "histogram needs at least one bin".to_string(),
        ));
    }

    let values = column_values(table, variable);
    if values.is_empty() {
        return Err(ProcessingError::MissingData(format!(
            "no {} values to bin",
            variable
        )));
    }

    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for v in &values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram {
        variable,
        bins: counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: lo + width * i as f64,
                upper: lo + width * (i + 1) as f64,
                count,
            })
            .collect(),
    })
}

/// Temperature against humidity for rows that have both, first `cap` rows.
pub fn scatter_points(records: &[WeatherRecord], cap: usize) -> Vec<ScatterPoint> {
    records
        .iter()
        .filter_map(|r| {
            Some(ScatterPoint {
                country: r.country.clone(),
                temperature_celsius: r.value(WeatherVariable::Temperature)?,
                humidity: r.value(WeatherVariable::Humidity)?,
            })
        })
        .take(cap)
        .collect()
}

/// Monthly temperature lines, one per country, sorted by country then month.
pub fn temperature_series(monthly: &[MonthlyAggregate]) -> Vec<CountrySeries> {
    let mut rows: Vec<&MonthlyAggregate> = monthly.iter().collect();
    rows.sort_by(|a, b| a.country.cmp(&b.country).then(a.month_num.cmp(&b.month_num)));

    let mut series: Vec<CountrySeries> = Vec::new();
    for row in rows {
        let Some(temp) = row.value(WeatherVariable::Temperature) else {
            continue;
        };
        match series.last_mut() {
            Some(last) if last.country == row.country => last.points.push((row.month_num, temp)),
            _ => series.push(CountrySeries {
                country: row.country.clone(),
                points: vec![(row.month_num, temp)],
            }),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temps(values: &[f64]) -> Vec<WeatherRecord> {
        values
            .iter()
            .map(|t| {
                WeatherRecord::builder()
                    .country("A")
                    .location_name("X")
                    .temperature(*t)
                    .build()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_histogram_counts_every_value() -> Result<()> {
        let table = temps(&[0.0, 1.0, 2.0, 3.0, 4.0, 10.0]);
        let hist = histogram(&table, WeatherVariable::Temperature, 5)?;

        assert_eq!(hist.bins.len(), 5);
        assert_eq!(hist.total(), 6);
        assert_eq!(hist.bins[0].lower, 0.0);
        assert_eq!(hist.bins[4].upper, 10.0);
        assert_eq!(hist.bins[0].count, 2);
        assert_eq!(hist.bins[1].count, 2);
        assert_eq!(hist.bins[2].count, 1);
        assert_eq!(hist.bins[4].count, 1);
        Ok(())
    }

    #[test]
    fn test_histogram_constant_and_empty() -> Result<()> {
        let hist = histogram(&temps(&[7.0, 7.0]), WeatherVariable::Temperature, 4)?;
        assert_eq!(hist.bins[0].lower, 6.5);
        assert_eq!(hist.total(), 2);

        assert!(histogram(&temps(&[]), WeatherVariable::Temperature, 4).is_err());
        assert!(histogram(&temps(&[1.0]), WeatherVariable::Temperature, 0).is_err());
        Ok(())
    }

    #[test]
    fn test_scatter_skips_incomplete_rows() {
        let mut table = temps(&[10.0, 20.0, 30.0]);
        table[0].humidity = Some(40.0);
        table[2].humidity = Some(60.0);

        let points = scatter_points(&table, 10);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].temperature_celsius, 30.0);
        assert_eq!(scatter_points(&table, 1).len(), 1);
    }

    #[test]
    fn test_temperature_series_grouped_and_sorted() {
        let monthly = vec![
            MonthlyAggregate::with_temperature("Peru", 2, 21.0),
            MonthlyAggregate::with_temperature("Chad", 5, 33.0),
            MonthlyAggregate::with_temperature("Peru", 1, 22.0),
        ];

        let series = temperature_series(&monthly);
        assert_eq!(
            series,
            vec![
                CountrySeries {
                    country: "Chad".into(),
                    points: vec![(5, 33.0)],
                },
                CountrySeries {
                    country: "Peru".into(),
                    points: vec![(1, 22.0), (2, 21.0)],
                },
            ]
        );
    }
}
