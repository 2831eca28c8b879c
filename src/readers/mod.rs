pub mod csv_table;
pub mod loader;
pub mod monthly_reader;
pub mod weather_reader;

pub use loader::DataLoader;
pub use monthly_reader::MonthlyReader;
pub use weather_reader::WeatherReader;
