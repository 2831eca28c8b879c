use crate::analyzers::{Dashboard, ExtremeEvents, GlobalViews, View};
use crate::models::WeatherVariable;
use std::fmt::Write;

const NO_DATA: &str = "No data";

fn fmt_value(v: f64, precision: usize) -> String {
    if v.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.*}", precision, v)
    }
}

fn unavailable<T>(view: &View<T>) -> String {
    format!(
        "{} ({})",
        NO_DATA,
        view.unavailable_reason().unwrap_or("unknown reason")
    )
}

/// Multi-section text report over the global views.
pub fn summary(dashboard: &Dashboard) -> String {
    let global = dashboard.global();
    let mut out = String::new();

    overview(&mut out, global);
    basic_stats(&mut out, global);
    distributions(&mut out, global);
    correlations(&mut out, global);
    seasonal(&mut out, global);
    trends(&mut out, global);
    hottest(&mut out, global);
    extremes(&mut out, global);

    out
}

fn overview(out: &mut String, global: &GlobalViews) {
    let _ = writeln!(out, "Global Weather Overview");
    match global.key_metrics.ready() {
        Some(m) => {
            let _ = writeln!(
                out,
                "Countries: {}\n\
                Records: {} total\n\
                Avg Temperature: {}°C\n\
                Avg Humidity: {}%\n\
                Avg Precipitation: {}mm",
                global.countries.len(),
                m.total_records,
                fmt_value(m.avg_temperature, 1),
                fmt_value(m.avg_humidity, 1),
                fmt_value(m.avg_precipitation, 2)
            );
        }
        None => {
            let _ = writeln!(out, "{}", unavailable(&global.key_metrics));
        }
    }
}

fn basic_stats(out: &mut String, global: &GlobalViews) {
    let _ = writeln!(out, "\nBasic Statistics:");
    let Some(stats) = global.basic_stats.ready() else {
        let _ = writeln!(out, "{}", unavailable(&global.basic_stats));
        return;
    };

    let _ = writeln!(
        out,
        "{:<20} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "variable", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for s in stats {
        let _ = writeln!(
            out,
            "{:<20} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            s.variable.column_name(),
            s.count,
            fmt_value(s.mean, 2),
            fmt_value(s.std, 2),
            fmt_value(s.min, 2),
            fmt_value(s.q25, 2),
            fmt_value(s.median, 2),
            fmt_value(s.q75, 2),
            fmt_value(s.max, 2)
        );
    }
}

fn distributions(out: &mut String, global: &GlobalViews) {
    let _ = writeln!(out, "\nDistribution Characteristics:");
    match global.distributions.ready() {
        Some(shapes) => {
            for s in shapes {
                let _ = writeln!(
                    out,
                    "- {}: skewness {}, kurtosis {}",
                    s.variable.column_name(),
                    fmt_value(s.skewness, 2),
                    fmt_value(s.kurtosis, 2)
                );
            }
        }
        None => {
            let _ = writeln!(out, "{}", unavailable(&global.distributions));
        }
    }
}

fn correlations(out: &mut String, global: &GlobalViews) {
    let _ = writeln!(out, "\nStrongest Correlations:");
    match global.corr_matrix.ready() {
        Some(corr) => {
            for (a, b, r) in corr.strongest_pairs(5) {
                let _ = writeln!(out, "- {} vs {}: {:+.2}", a, b, r);
            }
        }
        None => {
            let _ = writeln!(out, "{}", unavailable(&global.corr_matrix));
        }
    }
}

fn seasonal(out: &mut String, global: &GlobalViews) {
    let _ = writeln!(out, "\nSeasonal Averages (temperature by month):");
    match global.seasonal_avg.ready() {
        Some(groups) => {
            for g in groups {
                let _ = writeln!(
                    out,
                    "- Month {:>2}: {}°C",
                    g.key,
                    fmt_value(g.mean(WeatherVariable::Temperature), 1)
                );
            }
        }
        None => {
            let _ = writeln!(out, "{}", unavailable(&global.seasonal_avg));
        }
    }
}

fn trends(out: &mut String, global: &GlobalViews) {
    let _ = writeln!(out, "\nTemperature Trends (°C/month):");
    match global.trends.ready() {
        Some(trends) if trends.is_empty() => {
            let _ = writeln!(out, "No country has two or more monthly readings");
        }
        Some(trends) => {
            for t in trends {
                let slope = if t.slope.is_nan() {
                    "undefined (single month)".to_string()
                } else {
                    format!("{:+.4}", t.slope)
                };
                let _ = writeln!(out, "- {}: {} over {} months", t.country, slope, t.points);
            }
        }
        None => {
            let _ = writeln!(out, "{}", unavailable(&global.trends));
        }
    }
}

fn hottest(out: &mut String, global: &GlobalViews) {
    let _ = writeln!(out, "\nHottest Countries:");
    match global.hottest_countries.ready() {
        Some(groups) => {
            for g in groups {
                let _ = writeln!(
                    out,
                    "- {}: {}°C, humidity {}%",
                    g.key,
                    fmt_value(g.mean(WeatherVariable::Temperature), 1),
                    fmt_value(g.mean(WeatherVariable::Humidity), 1)
                );
            }
        }
        None => {
            let _ = writeln!(out, "{}", unavailable(&global.hottest_countries));
        }
    }
}

fn extreme_line(view: &View<ExtremeEvents>, name: &str) -> String {
    match view.ready() {
        Some(events) => events.label(),
        None => format!("Extreme {}: {}", name, unavailable(view)),
    }
}

fn extremes(out: &mut String, global: &GlobalViews) {
    let _ = writeln!(out, "\nExtreme Weather Events:");
    let _ = writeln!(out, "- {}", extreme_line(&global.hot_events, "Temperature"));
    let _ = writeln!(out, "- {}", extreme_line(&global.precip_events, "Precipitation"));
    let _ = writeln!(out, "- {}", extreme_line(&global.wind_events, "Wind Speed"));

    if let Some(counts) = global.heat_by_country.ready() {
        let _ = writeln!(out, "Top countries by extreme heat events:");
        for c in counts {
            let _ = writeln!(out, "  {}: {}", c.country, c.count);
        }
    }
}
