pub mod dataset;
pub mod monthly;
pub mod variable;
pub mod weather;

pub use dataset::Dataset;
pub use monthly::{MonthlyAggregate, RawMonthlyRow, MONTHLY_REQUIRED_COLUMNS};
pub use variable::{CountryKeyed, Measured, WeatherVariable};
pub use weather::{WeatherRecord, WeatherRecordBuilder, WEATHER_REQUIRED_COLUMNS};
