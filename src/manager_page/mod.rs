use std::time::Duration;
use log::warn;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use ureq::Agent;
use crate::extract::{CellHandle, CellSource};

#[derive(Error, Debug)]
#[error("error retrieving the forecast page: {0}")]
pub struct PageError(pub String);

impl From<ureq::Error> for PageError {
    fn from(e: ureq::Error) -> PageError {
        PageError(format!("http request error: {}", e.to_string()))
    }
}

/// A parsed forecast page, handing out cell handles by element id and cell
/// selector. How the document got here (fetch, file, fixture) is of no
/// concern to the extraction core.
pub struct Page {
    html: Html,
}

impl Page {
    pub fn from_html(document: &str) -> Page {
        Page { html: Html::parse_document(document) }
    }

    /// Retrieves the forecast page for a station and parses it.
    ///
    /// A single GET with a global timeout; waiting for scripted rendering or
    /// retrying is not this crate's business.
    ///
    /// # Arguments
    ///
    /// * 'base_url' - the site base URL
    /// * 'station_number' - the station appended to the base URL
    pub fn fetch(base_url: &str, station_number: u32) -> Result<Page, PageError> {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();
        let agent: Agent = config.into();

        let url = format!("{}{}", base_url, station_number);
        let body = agent
            .get(&url)
            .call()?
            .body_mut()
            .read_to_string()?;

        Ok(Page::from_html(&body))
    }
}

impl CellSource for Page {
    fn locate_cells(&self, element_id: &str, cell_selector: &str) -> Vec<Box<dyn CellHandle + '_>> {
        let selector = format!("#{} {}", element_id, cell_selector);
        let Ok(row_cells) = Selector::parse(&selector) else {
            warn!("invalid cell selector: '{}'", selector);
            return Vec::new();
        };

        let cells: Vec<Box<dyn CellHandle + '_>> = self
            .html
            .select(&row_cells)
            .map(|el| Box::new(DomCell { el }) as Box<dyn CellHandle + '_>)
            .collect();
        if cells.is_empty() {
            warn!("no cells found for '{}'", selector);
        }

        cells
    }
}

/// Cell handle over one element of the parsed page
struct DomCell<'a> {
    el: ElementRef<'a>,
}

impl CellHandle for DomCell<'_> {
    fn text(&self) -> String {
        let chunks: Vec<&str> = self
            .el
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        chunks.join("\n")
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.el.value().attr(name).map(str::to_string)
    }

    fn find_all(&self, selector: &str) -> Vec<Box<dyn CellHandle + '_>> {
        let Ok(sel) = Selector::parse(selector) else {
            warn!("invalid selector: '{}'", selector);
            return Vec::new();
        };
        self.el
            .select(&sel)
            .map(|el| Box::new(DomCell { el }) as Box<dyn CellHandle + '_>)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"
        <table><tr id="tabid_0_0_dates">
            <td class="tcell"><div>Sa</div><div>5.</div><div>08h</div></td>
            <td class="tcell"><div>Sa</div><div>5.</div><div>11h</div></td>
            <td>legend</td>
        </tr></table>
    "#;

    #[test]
    fn locates_only_matching_cells_in_document_order() {
        let page = Page::from_html(ROW);
        let cells = page.locate_cells("tabid_0_0_dates", "td.tcell");

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text(), "Sa\n5.\n08h");
        assert_eq!(cells[1].text(), "Sa\n5.\n11h");

        let all = page.locate_cells("tabid_0_0_dates", "td");
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn unknown_element_id_yields_no_cells() {
        let page = Page::from_html(ROW);
        assert!(page.locate_cells("tabid_9_9_dates", "td.tcell").is_empty());
    }

    #[test]
    fn cell_exposes_attributes_and_descendants() {
        let doc = r#"
            <table><tr id="tabid_0_0_SMER">
                <td class="tcell" data-x='{"param": "SMER"}'>
                    <span title="NNW (337°)">&#8595;</span>
                </td>
            </tr></table>
        "#;
        let page = Page::from_html(doc);
        let cells = page.locate_cells("tabid_0_0_SMER", "td.tcell");

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].attribute("data-x").as_deref(), Some(r#"{"param": "SMER"}"#));

        let spans = cells[0].find_all("span[title]");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].attribute("title").as_deref(), Some("NNW (337°)"));
    }

    #[test]
    fn nbsp_only_elements_read_as_empty_text() {
        let doc = r#"<table><tr id="r"><td class="tcell"><div>10</div><div>&nbsp;</div></td></tr></table>"#;
        let page = Page::from_html(doc);
        let cells = page.locate_cells("r", "td.tcell");

        let divs = cells[0].find_all("div");
        assert_eq!(divs.len(), 2);
        assert_eq!(divs[0].text(), "10");
        assert_eq!(divs[1].text(), "");
    }
}
