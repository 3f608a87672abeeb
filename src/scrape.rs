use log::{debug, warn};
use crate::config::{Config, FieldConfig};
use crate::extract::{raw_text, CellHandle, CellSource, Extracted, Strategy};
use crate::formatter::{Forecast, ForecastFormatter, RawForecast};

/// Struct for scraping and formatting forecasts from a located page.
///
/// Holds the field configuration and caches the latest formatted forecast
/// until the next scrape cycle.
pub struct Scraper {
    config: Config,
    formatter: ForecastFormatter,
    cached: Option<Forecast>,
}

impl Scraper {
    pub fn new(config: Config) -> Scraper {
        Scraper {
            config,
            formatter: ForecastFormatter::new(),
            cached: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The forecast formatted by the most recent scrape, if any
    pub fn cached_forecast(&self) -> Option<&Forecast> {
        self.cached.as_ref()
    }

    /// Scrapes, formats and caches the forecast
    ///
    /// # Arguments
    ///
    /// * 'source' - the collaborator resolving cell handles
    /// * 'num_prev' - optional cap on the number of observations per field
    pub fn formatted_forecast<S: CellSource>(
        &mut self,
        source: &S,
        num_prev: Option<usize>,
    ) -> Forecast {
        let raw = self.scrape_raw(source, num_prev);
        let forecast = self.formatter.format_forecast(&raw, &self.config.fields);
        self.cached = Some(forecast.clone());

        forecast
    }

    /// Scrapes the raw per-field series without formatting them.
    ///
    /// A field that cannot be located or extracted degrades to an empty
    /// series; it never aborts the remaining fields.
    ///
    /// # Arguments
    ///
    /// * 'source' - the collaborator resolving cell handles
    /// * 'num_prev' - optional cap on the number of observations per field
    pub fn scrape_raw<S: CellSource>(&self, source: &S, num_prev: Option<usize>) -> RawForecast {
        let mut raw = RawForecast::new();

        for (name, field_config) in &self.config.fields {
            let Some(element_id) = field_config.element_id.as_deref() else {
                warn!("skipping '{}': missing 'element_id'", name);
                continue;
            };
            let cell_selector = if field_config.target_tcell.unwrap_or(true) {
                "td.tcell"
            } else {
                "td"
            };

            let cells = source.locate_cells(element_id, cell_selector);
            let values = extract_field(name, field_config, &cells);
            raw.insert(name.clone(), limit_observations(values, num_prev));
            debug!("raw data scraped for '{}'", name);
        }

        raw
    }
}

/// Resolves the configured strategy and runs it, degrading to raw trimmed
/// text when the method name is unknown
fn extract_field(
    name: &str,
    field_config: &FieldConfig,
    cells: &[Box<dyn CellHandle + '_>],
) -> Vec<Extracted> {
    let method = field_config.extraction_method.as_deref().unwrap_or("");
    match Strategy::resolve(method, field_config) {
        Some(strategy) => strategy.extract(cells),
        None => {
            warn!("no extraction strategy found for method '{}' on '{}', using raw text", method, name);
            raw_text(cells)
        }
    }
}

fn limit_observations(values: Vec<Extracted>, num_prev: Option<usize>) -> Vec<Extracted> {
    match num_prev {
        Some(n) if values.len() > n => values.into_iter().take(n).collect(),
        _ => values,
    }
}
