//! Bundles the derived views a rendering cycle consumes.
//!
//! Filter-independent views are computed once into [`GlobalViews`] and shared
//! read-only. [`FilteredViews`] are recomputed from a viewer's [`FilterParams`]
//! each time [`compute_view`] is called; nothing recomputes implicitly.

use crate::analyzers::correlation::{correlate, CorrelationMatrix};
use crate::analyzers::descriptive::{
    column_values, describe, shape_stats, summarize, ShapeStats, VariableSummary,
};
use crate::analyzers::extremes::{CountryCount, EventLocation, ExtremeEvents};
use crate::analyzers::filters::{filter_by_country, filter_by_month_range};
use crate::analyzers::grouping::{hottest_countries, regional_means, seasonal_means, GroupMean};
use crate::analyzers::series::{
    histogram, scatter_points, temperature_series, CountrySeries, Histogram, ScatterPoint,
};
use crate::analyzers::trend::{country_trend, CountryTrend};
use crate::config::AnalysisSettings;
use crate::error::{ProcessingError, Result};
use crate::models::{Dataset, MonthlyAggregate, WeatherRecord, WeatherVariable};
use crate::utils::constants::{FIRST_MONTH, LAST_MONTH, MONTHLY_TABLE, WEATHER_TABLE};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A derived view, or the reason it could not be produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum View<T> {
    Ready { data: T },
    Unavailable { reason: String },
}

impl<T> View<T> {
    pub fn capture(name: &str, result: Result<T>) -> Self {
        match result {
            Ok(data) => View::Ready { data },
            Err(e) => {
                warn!(view = name, error = %e, "View unavailable");
                View::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, View::Ready { .. })
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            View::Ready { data } => Some(data),
            View::Unavailable { .. } => None,
        }
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            View::Ready { .. } => None,
            View::Unavailable { reason } => Some(reason),
        }
    }
}

/// Headline numbers for the overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics {
    pub avg_temperature: f64,
    pub avg_humidity: f64,
    pub avg_precipitation: f64,
    pub total_records: usize,
}

pub fn key_metrics(records: &[WeatherRecord]) -> KeyMetrics {
    KeyMetrics {
        avg_temperature: column_values(records, WeatherVariable::Temperature).mean(),
        avg_humidity: column_values(records, WeatherVariable::Humidity).mean(),
        avg_precipitation: column_values(records, WeatherVariable::Precipitation).mean(),
        total_records: records.len(),
    }
}

/// A viewer's selection. Each viewer owns its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    pub countries: Vec<String>,
    pub month_range: (u32, u32),
    pub variable: String,
}

impl FilterParams {
    /// First `default_country_count` countries alphabetically, all months, temperature.
    pub fn default_for(dataset: &Dataset, settings: &AnalysisSettings) -> Self {
        Self {
            countries: dataset
                .countries()
                .into_iter()
                .take(settings.default_country_count)
                .collect(),
            month_range: (FIRST_MONTH, LAST_MONTH),
            variable: WeatherVariable::Temperature.column_name().to_string(),
        }
    }
}

fn require_rows<T>(table: &[T], name: &str) -> Result<()> {
    if table.is_empty() {
        Err(ProcessingError::MissingData(format!("{name} table is empty")))
    } else {
        Ok(())
    }
}

/// Views that never depend on filter parameters.
#[derive(Debug, Clone, Serialize)]
pub struct GlobalViews {
    pub countries: Vec<String>,
    pub key_metrics: View<KeyMetrics>,
    pub basic_stats: View<Vec<VariableSummary>>,
    pub distributions: View<Vec<ShapeStats>>,
    pub corr_matrix: View<CorrelationMatrix>,
    pub seasonal_avg: View<Vec<GroupMean<u32>>>,
    pub trends: View<Vec<CountryTrend>>,
    pub regional_avg: View<Vec<GroupMean<String>>>,
    pub hottest_countries: View<Vec<GroupMean<String>>>,
    pub hot_events: View<ExtremeEvents>,
    pub precip_events: View<ExtremeEvents>,
    pub wind_events: View<ExtremeEvents>,
    pub heat_by_country: View<Vec<CountryCount>>,
    pub heat_locations: View<Vec<EventLocation>>,
    pub data_sample: Vec<WeatherRecord>,
}

impl GlobalViews {
    pub fn compute(dataset: &Dataset, settings: &AnalysisSettings) -> Self {
        let weather = dataset.weather();
        let monthly = dataset.monthly();
        let vars = &WeatherVariable::ALL;
        let q = settings.extreme_quantile;

        let regional_avg = View::capture(
            "regional_avg",
            require_rows(weather, WEATHER_TABLE).map(|_| regional_means(weather, vars)),
        );
        let hottest = View::capture(
            "hottest_countries",
            regional_avg
                .ready()
                .map(|r| hottest_countries(r, settings.top_n))
                .ok_or_else(|| {
                    ProcessingError::MissingData("regional averages unavailable".to_string())
                }),
        );

        let hot_events = View::capture(
            "hot_events",
            ExtremeEvents::detect(weather, WeatherVariable::Temperature, q),
        );
        let heat_by_country = View::capture(
            "heat_by_country",
            hot_events
                .ready()
                .map(|e| e.counts_by_country(settings.top_n))
                .ok_or_else(|| ProcessingError::MissingData("heat events unavailable".to_string())),
        );
        let heat_locations = View::capture(
            "heat_locations",
            hot_events
                .ready()
                .map(|e| e.locations(settings.extreme_sample))
                .ok_or_else(|| ProcessingError::MissingData("heat events unavailable".to_string())),
        );

        let views = Self {
            countries: dataset.countries(),
            key_metrics: View::capture(
                "key_metrics",
                require_rows(weather, WEATHER_TABLE).map(|_| key_metrics(weather)),
            ),
            basic_stats: View::capture(
                "basic_stats",
                require_rows(weather, WEATHER_TABLE).map(|_| describe(weather, vars)),
            ),
            distributions: View::capture(
                "distributions",
                require_rows(weather, WEATHER_TABLE).map(|_| shape_stats(weather, vars)),
            ),
            corr_matrix: View::capture(
                "corr_matrix",
                require_rows(weather, WEATHER_TABLE).map(|_| correlate(weather, vars)),
            ),
            seasonal_avg: View::capture(
                "seasonal_avg",
                require_rows(monthly, MONTHLY_TABLE).map(|_| seasonal_means(monthly, vars)),
            ),
            trends: View::capture(
                "trends",
                require_rows(monthly, MONTHLY_TABLE)
                    .map(|_| country_trend(monthly, settings.max_trend_countries)),
            ),
            regional_avg,
            hottest_countries: hottest,
            hot_events,
            precip_events: View::capture(
                "precip_events",
                ExtremeEvents::detect(weather, WeatherVariable::Precipitation, q),
            ),
            wind_events: View::capture(
                "wind_events",
                ExtremeEvents::detect(weather, WeatherVariable::WindSpeed, q),
            ),
            heat_by_country,
            heat_locations,
            data_sample: weather.iter().take(settings.data_sample).cloned().collect(),
        };

        info!(
            countries = views.countries.len(),
            unavailable = views.unavailable_count(),
            "Computed global views"
        );
        views
    }

    pub fn unavailable_count(&self) -> usize {
        [
            self.key_metrics.is_ready(),
            self.basic_stats.is_ready(),
            self.distributions.is_ready(),
            self.corr_matrix.is_ready(),
            self.seasonal_avg.is_ready(),
            self.trends.is_ready(),
            self.regional_avg.is_ready(),
            self.hottest_countries.is_ready(),
            self.hot_events.is_ready(),
            self.precip_events.is_ready(),
            self.wind_events.is_ready(),
            self.heat_by_country.is_ready(),
            self.heat_locations.is_ready(),
        ]
        .iter()
        .filter(|ready| !**ready)
        .count()
    }
}

/// Views derived from a viewer's filter parameters.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredViews {
    pub params: FilterParams,
    pub weather_rows: usize,
    pub monthly_rows: View<usize>,
    pub temperature_series: View<Vec<CountrySeries>>,
    pub scatter: View<Vec<ScatterPoint>>,
    pub histogram: View<Histogram>,
    pub selected_summary: View<VariableSummary>,
    #[serde(skip)]
    pub weather: Vec<WeatherRecord>,
    #[serde(skip)]
    pub monthly: Vec<MonthlyAggregate>,
}

impl FilteredViews {
    pub fn compute(dataset: &Dataset, params: &FilterParams, settings: &AnalysisSettings) -> Self {
        let weather = filter_by_country(dataset.weather(), params.countries.as_slice());
        let (lo, hi) = params.month_range;
        let monthly_result = filter_by_month_range(
            &filter_by_country(dataset.monthly(), params.countries.as_slice()),
            lo,
            hi,
        );
        let selected = || WeatherVariable::from_column(WEATHER_TABLE, &params.variable);

        debug!(
            countries = params.countries.len(),
            weather_rows = weather.len(),
            "Applied viewer filter"
        );

        let (monthly, monthly_rows, series_view) = match monthly_result {
            Ok(rows) => {
                let series = temperature_series(&rows);
                let count = rows.len();
                (rows, View::Ready { data: count }, View::Ready { data: series })
            }
            Err(e) => {
                warn!(error = %e, "Monthly filter rejected");
                let reason = e.to_string();
                (
                    Vec::new(),
                    View::Unavailable {
                        reason: reason.clone(),
                    },
                    View::Unavailable { reason },
                )
            }
        };

        let histogram_view = View::capture(
            "histogram",
            selected().and_then(|var| histogram(dataset.weather(), var, settings.histogram_bins)),
        );
        let selected_summary = View::capture(
            "selected_summary",
            selected().map(|var| summarize(var, &column_values(&weather, var))),
        );

        Self {
            params: params.clone(),
            weather_rows: weather.len(),
            monthly_rows,
            temperature_series: series_view,
            scatter: View::Ready {
                data: scatter_points(&weather, settings.scatter_sample),
            },
            histogram: histogram_view,
            selected_summary,
            weather,
            monthly,
        }
    }
}

/// Everything one rendering cycle needs.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResult<'a> {
    pub global: &'a GlobalViews,
    pub filtered: FilteredViews,
}

/// Pure recomputation entry point: shared global views plus this viewer's filtered views.
pub fn compute_view<'a>(
    dataset: &Dataset,
    global: &'a GlobalViews,
    params: &FilterParams,
    settings: &AnalysisSettings,
) -> ViewResult<'a> {
    ViewResult {
        global,
        filtered: FilteredViews::compute(dataset, params, settings),
    }
}

/// Loaded tables plus their global views, shareable across viewers.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    global: Arc<GlobalViews>,
    settings: AnalysisSettings,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, settings: AnalysisSettings) -> Self {
        let global = Arc::new(GlobalViews::compute(&dataset, &settings));
        Self {
            dataset,
            global,
            settings,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn global(&self) -> &GlobalViews {
        &self.global
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn default_params(&self) -> FilterParams {
        FilterParams::default_for(&self.dataset, &self.settings)
    }

    pub fn compute_view(&self, params: &FilterParams) -> ViewResult<'_> {
        compute_view(&self.dataset, &self.global, params, &self.settings)
    }
}
