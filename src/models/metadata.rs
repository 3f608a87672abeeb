use indexmap::IndexMap;
use serde::Serialize;

pub const SOURCE_URL: &str = "https://www.windguru.cz/";

pub const DATETIME_FORMAT_NOTE: &str = "The keys in the 'forecast' section represent the \
    forecast time. The format is: 'DayAbbreviation-DayOfMonth-HourOfDayIn24hFormat' \
    (e.g., 'Sa-5-08' for Saturday, the 5th of the month, at 08:00).";

/// Description and unit of one output column
#[derive(Serialize, Clone)]
pub struct ColumnMetadata {
    pub description: &'static str,
    pub unit: &'static str,
}

/// Metadata for the known output columns, used by the machine-readable dump
pub fn column_metadata() -> IndexMap<&'static str, ColumnMetadata> {
    let columns = [
        ("wind_const_speed", "Average wind speed", "knots (kn)"),
        ("gust_speed", "Maximum instantaneous wind speed (gust)", "knots (kn)"),
        ("wind_dir", "Wind direction (meteorological convention)", "degrees (°)"),
        ("swell_height", "Significant wave height of the primary swell", "meters (m)"),
        ("swell_period", "Period of the primary swell", "seconds (s)"),
        ("swell_direction", "Direction from which the primary swell is coming (oceanographic convention)", "degrees (°)"),
        ("temperature", "Air temperature", "degrees Celsius (°C)"),
        ("low_cloud_cover", "Percentage of low-level cloud cover", "percentage (%)"),
        ("medium_cloud_cover", "Percentage of mid-level cloud cover", "percentage (%)"),
        ("high_cloud_cover", "Percentage of high-level cloud cover", "percentage (%)"),
        ("precipitation", "Precipitation amount", "millimeters (mm)"),
    ];

    columns
        .into_iter()
        .map(|(name, description, unit)| (name, ColumnMetadata { description, unit }))
        .collect()
}
