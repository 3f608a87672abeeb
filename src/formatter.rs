use indexmap::IndexMap;
use log::warn;
use crate::config::{Composite, FieldConfig};
use crate::extract::Extracted;

/// Name of the pivot field whose series defines the number of observations
pub const DATE_FIELD: &str = "date_info";

/// Per-field time series, one entry per observed table column
pub type RawForecast = IndexMap<String, Vec<Extracted>>;

/// Named values of one forecast time step
pub type ForecastRecord = IndexMap<String, Extracted>;

/// Normalized timestamp key ("Sa-5-08") to forecast record
pub type Forecast = IndexMap<String, ForecastRecord>;

/// Reassembles the per-field series of a raw scrape into a forecast keyed by
/// normalized timestamp. Stateless; safe to rerun on the same input.
pub struct ForecastFormatter;

impl ForecastFormatter {
    pub fn new() -> ForecastFormatter {
        ForecastFormatter
    }

    /// Zips all field series by row index into timestamp-keyed records.
    ///
    /// Rows whose date cell does not parse are dropped entirely. Fields whose
    /// series is shorter than the date series are skipped for the missing
    /// rows; partial scrapes are expected.
    ///
    /// # Arguments
    ///
    /// * 'raw' - the per-field series of one scrape cycle
    /// * 'fields' - the field configurations, keyed by field name
    pub fn format_forecast(
        &self,
        raw: &RawForecast,
        fields: &IndexMap<String, FieldConfig>,
    ) -> Forecast {
        let mut formatted = Forecast::new();

        let Some(dates) = raw.get(DATE_FIELD) else {
            warn!("no '{}' series found in the raw forecast", DATE_FIELD);
            return formatted;
        };

        for (i, date) in dates.iter().enumerate() {
            let Extracted::Text(date_str) = date else {
                warn!("date entry {} is not text, dropping row", i);
                continue;
            };
            let Some(key) = parse_date_hour(date_str) else {
                warn!("could not parse date string: {:?}", date_str);
                continue;
            };

            let mut record = ForecastRecord::new();
            for (field, field_config) in fields {
                if field == DATE_FIELD {
                    continue;
                }
                let Some(value) = raw.get(field).and_then(|series| series.get(i)) else {
                    continue;
                };
                match field_config.composite {
                    Some(Composite::CloudCover) => {
                        for (layer, cover) in parse_cloud_cover(value) {
                            record.insert(layer.to_string(), cover);
                        }
                    }
                    None => {
                        let column = field_config.column_name.as_ref().unwrap_or(field);
                        record.insert(column.clone(), value.clone());
                    }
                }
            }
            formatted.insert(key, record);
        }

        formatted
    }
}

/// Derives the timestamp key from a raw three-line date cell,
/// "Sa\n5.\n08h" becoming "Sa-5-08". Anything that does not split into
/// exactly three lines yields None.
///
/// # Arguments
///
/// * 'date_str' - the raw text of one date cell
pub fn parse_date_hour(date_str: &str) -> Option<String> {
    let parts: Vec<&str> = date_str.split('\n').collect();
    if parts.len() != 3 {
        return None;
    }
    let day_abbr = parts[0].trim();
    let day_num = parts[1].replace('.', "");
    let hour = parts[2].replace('h', "");

    Some(format!("{}-{}-{}", day_abbr, day_num.trim(), hour.trim()))
}

/// Decomposes a raw cloud cover value into the three layer keys. The source
/// lists layers top down (high, medium, low); "None" and unparseable parts
/// stay null, as do the trailing layers of a short value.
///
/// # Arguments
///
/// * 'value' - the raw cloud cover value of one row
fn parse_cloud_cover(value: &Extracted) -> [(&'static str, Extracted); 3] {
    let mut layers = [Extracted::Null, Extracted::Null, Extracted::Null];

    if let Extracted::Text(text) = value {
        for (i, part) in text.split('\n').take(3).enumerate() {
            let part = part.trim();
            layers[i] = if part.eq_ignore_ascii_case("none") {
                Extracted::Null
            } else if let Ok(cover) = part.parse::<u32>() {
                Extracted::Number(cover as f64)
            } else {
                warn!("could not parse cloud cover part: '{}'", part);
                Extracted::Null
            };
        }
    }

    let [high, medium, low] = layers;
    [
        ("low_cloud_cover", low),
        ("medium_cloud_cover", medium),
        ("high_cloud_cover", high),
    ]
}
