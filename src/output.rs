use chrono::Local;
use indexmap::IndexMap;
use log::warn;
use serde::Serialize;
use crate::extract::Extracted;
use crate::formatter::Forecast;
use crate::models::metadata;
use crate::models::metadata::ColumnMetadata;

/// Payload of the machine-readable dump
#[derive(Serialize)]
struct MachineOutput<'a> {
    description: String,
    column_metadata: IndexMap<&'static str, ColumnMetadata>,
    datetime_format: &'static str,
    retrieved_at: String,
    forecast: &'a Forecast,
}

/// Prints the formatted forecast to stdout
///
/// # Arguments
///
/// * 'forecast' - the formatted forecast
/// * 'station_number' - the station the forecast was scraped for
/// * 'output_format' - "human" for a fixed-width table, "llm" for JSON
pub fn print_forecast(forecast: &Forecast, station_number: u32, output_format: &str) {
    match output_format.to_lowercase().as_str() {
        "human" => print_human(forecast, station_number),
        "llm" => print_machine(forecast),
        other => {
            warn!("unknown output format '{}', using human format", other);
            print_human(forecast, station_number);
        }
    }
}

fn print_human(forecast: &Forecast, station_number: u32) {
    println!("{:-<20} Weather Forecast {:-<20}", "", "");
    println!("Station Number: {}", station_number);

    if forecast.is_empty() {
        println!("No forecast data to print.");
        return;
    }

    // Column order follows first appearance across the records
    let mut columns: Vec<&String> = Vec::new();
    for record in forecast.values() {
        for name in record.keys() {
            if !columns.contains(&name) {
                columns.push(name);
            }
        }
    }

    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    let mut key_width = 0;
    let mut rows: Vec<(&String, Vec<String>)> = Vec::new();
    for (key, record) in forecast {
        key_width = key_width.max(key.len());
        let row: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let rendered = record.get(*column).map(render_value).unwrap_or_default();
                widths[i] = widths[i].max(rendered.len());
                rendered
            })
            .collect();
        rows.push((key, row));
    }

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, w)| format!("{:>w$}", column, w = *w))
        .collect::<Vec<String>>()
        .join("  ");
    println!("{:kw$}  {}", "", header, kw = key_width);

    for (key, row) in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(value, w)| format!("{:>w$}", value, w = *w))
            .collect::<Vec<String>>()
            .join("  ");
        println!("{:<kw$}  {}", key, line, kw = key_width);
    }
}

fn print_machine(forecast: &Forecast) {
    let output = MachineOutput {
        description: format!(
            "Windguru weather forecast data from {} with detailed column metadata below.",
            metadata::SOURCE_URL
        ),
        column_metadata: metadata::column_metadata(),
        datetime_format: metadata::DATETIME_FORMAT_NOTE,
        retrieved_at: format!("{}", Local::now().format("%Y-%m-%d %H:%M:%S")),
        forecast,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => warn!("could not serialize forecast: {}", e),
    }
}

fn render_value(value: &Extracted) -> String {
    match value {
        Extracted::Null => String::new(),
        Extracted::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
        Extracted::Number(n) => format!("{}", n),
        Extracted::Text(t) => t.replace('\n', " "),
        nested => serde_json::to_string(nested).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_render_for_the_table() {
        assert_eq!(render_value(&Extracted::Null), "");
        assert_eq!(render_value(&Extracted::Number(12.0)), "12");
        assert_eq!(render_value(&Extracted::Number(1.25)), "1.25");
        assert_eq!(render_value(&Extracted::text("NNW")), "NNW");

        let list = Extracted::List(vec![Extracted::text("high"), Extracted::Null]);
        assert_eq!(render_value(&list), r#"["high",null]"#);
    }

    #[test]
    fn machine_output_serializes_null_as_json_null() {
        let mut record = IndexMap::new();
        record.insert("temperature".to_string(), Extracted::Number(18.0));
        record.insert("medium_cloud_cover".to_string(), Extracted::Null);
        let mut forecast = Forecast::new();
        forecast.insert("Sa-5-08".to_string(), record);

        let json = serde_json::to_value(&forecast).unwrap();
        assert_eq!(json["Sa-5-08"]["temperature"], serde_json::json!(18.0));
        assert!(json["Sa-5-08"]["medium_cloud_cover"].is_null());
    }
}
