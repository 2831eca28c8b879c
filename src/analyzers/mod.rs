pub mod correlation;
pub mod dashboard;
pub mod descriptive;
pub mod extremes;
pub mod filters;
pub mod grouping;
pub mod series;
pub mod trend;

pub use correlation::{correlate, CorrelationMatrix};
pub use dashboard::{
    compute_view, key_metrics, Dashboard, FilterParams, FilteredViews, GlobalViews, KeyMetrics,
    View, ViewResult,
};
pub use descriptive::{describe, quantile, shape_stats, ShapeStats, VariableSummary};
pub use extremes::{counts_by_country, extreme_events, CountryCount, EventLocation, ExtremeEvents};
pub use filters::{filter_by_country, filter_by_month_range};
pub use grouping::{hottest_countries, regional_means, seasonal_means, GroupMean};
pub use series::{
    histogram, scatter_points, temperature_series, CountrySeries, Histogram, ScatterPoint,
};
pub use trend::{country_trend, least_squares_slope, CountryTrend};
