use crate::models::{CountryKeyed, Measured, MonthlyAggregate, WeatherVariable};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-variable means of the rows sharing one key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean<K> {
    pub key: K,
    pub rows: usize,
    pub means: BTreeMap<WeatherVariable, f64>,
}

impl<K> GroupMean<K> {
    pub fn mean(&self, variable: WeatherVariable) -> f64 {
        self.means.get(&variable).copied().unwrap_or(f64::NAN)
    }
}

#[derive(Default)]
struct Accumulator {
    rows: usize,
    sums: BTreeMap<WeatherVariable, (f64, usize)>,
}

/// Group-by-mean keyed by `key_of`, output ascending by key. Missing values are
/// skipped per variable; a variable with no values in a group has a NaN mean.
pub fn group_means<T, K, F>(
    table: &[T],
    variables: &[WeatherVariable],
    key_of: F,
) -> Vec<GroupMean<K>>
where
    T: Measured,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut groups: BTreeMap<K, Accumulator> = BTreeMap::new();

    for row in table {
        let acc = groups.entry(key_of(row)).or_default();
        acc.rows += 1;
        for var in variables {
            let slot = acc.sums.entry(*var).or_insert((0.0, 0));
            if let Some(v) = row.value(*var) {
                slot.0 += v;
                slot.1 += 1;
            }
        }
    }

    groups
        .into_iter()
        .map(|(key, acc)| GroupMean {
            key,
            rows: acc.rows,
            means: acc
                .sums
                .into_iter()
                .map(|(var, (sum, count))| {
                    let mean = if count == 0 { f64::NAN } else { sum / count as f64 };
                    (var, mean)
                })
                .collect(),
        })
        .collect()
}

/// Means per month number, one group per month present.
pub fn seasonal_means(
    monthly: &[MonthlyAggregate],
    variables: &[WeatherVariable],
) -> Vec<GroupMean<u32>> {
    group_means(monthly, variables, |row| row.month_num)
}

/// Means per country, sorted by country name.
pub fn regional_means<T>(table: &[T], variables: &[WeatherVariable]) -> Vec<GroupMean<String>>
where
    T: Measured + CountryKeyed,
{
    group_means(table, variables, |row| row.country().to_string())
}

/// The `n` countries with the highest mean temperature; NaN means sort last.
pub fn hottest_countries(regional: &[GroupMean<String>], n: usize) -> Vec<GroupMean<String>> {
    let mut ranked = regional.to_vec();
    ranked.sort_by(|a, b| {
        let (ta, tb) = (
            a.mean(WeatherVariable::Temperature),
            b.mean(WeatherVariable::Temperature),
        );
        match (ta.is_nan(), tb.is_nan()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater,
            (false, true) => std::cmp::Ordering::Less,
            (false, false) => tb.total_cmp(&ta),
        }
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherRecord;
    use pretty_assertions::assert_eq;

    fn monthly(
        country: &str,
        month_num: u32,
        temp: f64,
        humidity: Option<f64>,
    ) -> MonthlyAggregate {
        let mut row = MonthlyAggregate::with_temperature(country, month_num, temp);
        row.humidity = humidity;
        row
    }

    #[test]
    fn test_seasonal_means_one_row_per_month() {
        let table = vec![
            monthly("A", 3, 10.0, Some(50.0)),
            monthly("B", 1, 2.0, Some(80.0)),
            monthly("C", 3, 20.0, None),
            monthly("A", 1, 4.0, Some(60.0)),
        ];

        let seasonal = seasonal_means(&table, &WeatherVariable::ALL);

        let keys: Vec<u32> = seasonal.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![1, 3]);
        assert_eq!(seasonal[0].rows, 2);
        assert_eq!(seasonal[0].mean(WeatherVariable::Temperature), 3.0);
        assert_eq!(seasonal[0].mean(WeatherVariable::Humidity), 70.0);
        assert_eq!(seasonal[1].mean(WeatherVariable::Temperature), 15.0);
        assert_eq!(seasonal[1].mean(WeatherVariable::Humidity), 50.0);
        assert!(seasonal[1].mean(WeatherVariable::Pressure).is_nan());
    }

    #[test]
    fn test_regional_means_and_hottest() {
        let rec = |country: &str, temp: f64| {
            WeatherRecord::builder()
                .country(country)
                .location_name("X")
                .temperature(temp)
                .build()
                .unwrap()
        };
        let table = vec![
            rec("Norway", 2.0),
            rec("Egypt", 30.0),
            rec("Norway", 4.0),
            rec("India", 28.0),
            rec("Egypt", 34.0),
        ];

        let regional = regional_means(&table, &[WeatherVariable::Temperature]);
        let names: Vec<&str> = regional.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(names, vec!["Egypt", "India", "Norway"]);
        assert_eq!(regional[2].mean(WeatherVariable::Temperature), 3.0);

        let hottest = hottest_countries(&regional, 2);
        let names: Vec<&str> = hottest.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(names, vec!["Egypt", "India"]);
    }
}
