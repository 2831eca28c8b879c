use crate::analyzers::{country_trend, Dashboard, ExtremeEvents, FilterParams};
use crate::cli::args::{Cli, Commands};
use crate::cli::logging::init_logging;
use crate::cli::report;
use crate::config::Settings;
use crate::error::{ProcessingError, Result};
use crate::models::WeatherVariable;
use crate::readers::DataLoader;
use crate::store::DatasetHandle;
use crate::utils::constants::WEATHER_TABLE;
use crate::utils::progress::ProgressReporter;
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(path) = cli.weather {
        settings = settings.with_weather_path(path);
    }
    if let Some(path) = cli.monthly {
        settings = settings.with_monthly_path(path);
    }

    let handle = DatasetHandle::new();
    let loader = DataLoader::from_settings(&settings.data);
    let dataset = handle.get_or_load(|| {
        let progress = ProgressReporter::new_spinner("Loading weather data...", cli.quiet);
        loader.load_with_progress(Some(&progress))
    })?;

    match cli.command {
        Commands::Summary => {
            let dashboard = Dashboard::new(dataset, settings.analysis);
            println!("{}", report::summary(&dashboard));
        }

        Commands::View {
            countries,
            months,
            variable,
            pretty,
        } => {
            let dashboard = Dashboard::new(dataset, settings.analysis);
            let params = view_params(&dashboard, countries, months, variable)?;
            info!(
                countries = params.countries.len(),
                months = ?params.month_range,
                variable = %params.variable,
                "Computing views"
            );

            let view = dashboard.compute_view(&params);
            let json = if pretty {
                serde_json::to_string_pretty(&view)?
            } else {
                serde_json::to_string(&view)?
            };
            println!("{}", json);
        }

        Commands::Extremes {
            variable,
            quantile,
            limit,
        } => {
            let variable = WeatherVariable::from_column(WEATHER_TABLE, &variable)?;
            let q = quantile.unwrap_or(settings.analysis.extreme_quantile);
            let events = ExtremeEvents::detect(dataset.weather(), variable, q)?;

            println!("{}", events.label());
            println!("Top {} countries:", limit);
            for (rank, entry) in events.counts_by_country(limit).iter().enumerate() {
                println!("  {:>2}. {:<30} {}", rank + 1, entry.country, entry.count);
            }
        }

        Commands::Trends { max_countries } => {
            let limit = max_countries.unwrap_or(settings.analysis.max_trend_countries);
            let trends = country_trend(dataset.monthly(), limit);
            if trends.is_empty() {
                println!("No country has two or more monthly temperature readings");
            }
            for t in trends {
                if t.slope.is_nan() {
                    println!("{:<30} undefined ({} readings, one month)", t.country, t.points);
                } else {
                    println!(
                        "{:<30} {:+.4} °C/month over {} months",
                        t.country, t.slope, t.points
                    );
                }
            }
        }
    }

    Ok(())
}

fn view_params(
    dashboard: &Dashboard,
    countries: Vec<String>,
    months: Option<Vec<u32>>,
    variable: String,
) -> Result<FilterParams> {
    let mut params = dashboard.default_params();
    if !countries.is_empty() {
        params.countries = countries;
    }
    if let Some(range) = months {
        match range.as_slice() {
            [lo, hi] => params.month_range = (*lo, *hi),
            _ => {
                return Err(ProcessingError::InvalidParameter(
                    "--months takes exactly two values".to_string(),
                ))
            }
        }
    }
    params.variable = variable;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisSettings;
    use crate::models::{Dataset, WeatherRecord};
    use std::sync::Arc;

    fn dashboard() -> Dashboard {
        let weather = ["Chile", "Peru", "Fiji", "Oman", "Laos", "Mali"]
            .iter()
            .map(|c| {
                WeatherRecord::builder()
                    .country(c)
                    .location_name("Capital")
                    .temperature(20.0)
                    .build()
                    .unwrap()
            })
            .collect();
        Dashboard::new(
            Arc::new(Dataset::new(weather, Vec::new())),
            AnalysisSettings::default(),
        )
    }

    #[test]
    fn test_view_params_defaults() {
        let params =
            view_params(&dashboard(), Vec::new(), None, "humidity".to_string()).unwrap();
        assert_eq!(params.countries, vec!["Chile", "Fiji", "Laos", "Mali", "Oman"]);
        assert_eq!(params.month_range, (1, 12));
        assert_eq!(params.variable, "humidity");
    }

    #[test]
    fn test_view_params_overrides() {
        let params = view_params(
            &dashboard(),
            vec!["Peru".to_string()],
            Some(vec![6, 8]),
            "temperature_celsius".to_string(),
        )
        .unwrap();
        assert_eq!(params.countries, vec!["Peru"]);
        assert_eq!(params.month_range, (6, 8));
    }

    #[test]
    fn test_view_params_rejects_odd_range() {
        let result = view_params(&dashboard(), Vec::new(), Some(vec![3]), "x".to_string());
        assert!(matches!(result, Err(ProcessingError::InvalidParameter(_))));
    }
}
