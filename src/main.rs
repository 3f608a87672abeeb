use std::env;
use anyhow::Result;
use log::info;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::{load_config, General};
use crate::manager_page::Page;
use crate::scrape::Scraper;

mod config;
mod errors;
mod extract;
mod formatter;
mod manager_page;
mod models;
mod output;
mod scrape;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(String::as_str).unwrap_or("scrape_config.toml");
    let output_format = args.get(2).map(String::as_str).unwrap_or("human");

    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => { println!("Error loading configuration: {}", e); return; }
    };
    if let Err(e) = init_logging(&config.general) {
        println!("Error initializing logging: {}", e);
        return;
    }

    println!("wgscrape version: {}", env!("CARGO_PKG_VERSION"));

    let station_number = config.scrape.station_number;
    let num_prev = config.scrape.num_observations;

    let page = match Page::fetch(&config.scrape.base_url, station_number) {
        Ok(p) => p,
        Err(e) => { println!("Error: {}", e); return; }
    };

    let mut scraper = Scraper::new(config);
    let forecast = scraper.formatted_forecast(&page, num_prev);
    info!("forecast assembled with {} observations", forecast.len());

    output::print_forecast(&forecast, station_number, output_format);
}

/// Sets up log4rs appenders according to the general configuration block
///
/// # Arguments
///
/// * 'general' - the general configuration block
fn init_logging(general: &General) -> Result<()> {
    let pattern = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";
    let mut builder = log4rs::Config::builder();
    let mut root = Root::builder();

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(pattern)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }
    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(pattern)))
            .build(log_path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let log_config = builder.build(root.build(general.log_level))?;
    log4rs::init_config(log_config)?;

    Ok(())
}
