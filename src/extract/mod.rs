use std::sync::LazyLock;
use indexmap::IndexMap;
use log::warn;
use regex::Regex;
use serde::Serialize;
use crate::config::FieldConfig;

/// Tag name of the vector-graphic text sub-elements inside rendered cells
const GRAPHIC_TEXT_TAG: &str = "text";

/// Value rendered by the site for an empty cloud layer
const NBSP: &str = "\u{a0}";

/// Degrees embedded in a title attribute, e.g. "NNW (337°)". The degree sign
/// arrives with mangled encodings on some variants of the page, so only the
/// opening parenthesis and the digits are relied upon.
static DEGREES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((\d{1,3})").expect("invalid regex: degrees")
});

static TIDE_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2}:\d{2})").expect("invalid regex: tide time")
});

/// Opaque reference to one table cell or graphic element, as handed over by
/// the DOM collaborator.
pub trait CellHandle {
    /// Rendered text with element boundaries as newlines, chunks trimmed
    fn text(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    fn find_all(&self, selector: &str) -> Vec<Box<dyn CellHandle + '_>>;
}

/// Resolves the ordered cell handles of one field row. How the elements are
/// found (live page, parsed document, fixture) is the implementor's business.
pub trait CellSource {
    fn locate_cells(&self, element_id: &str, cell_selector: &str) -> Vec<Box<dyn CellHandle + '_>>;
}

/// One extracted value. The shape is determined entirely by the strategy that
/// produced it; apart from the cloud-cover composite, downstream code treats
/// it as opaque.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Extracted {
    Null,
    Number(f64),
    Text(String),
    List(Vec<Extracted>),
    Record(IndexMap<String, Extracted>),
}

impl Extracted {
    pub fn text(s: &str) -> Extracted {
        Extracted::Text(s.to_string())
    }
}

/// The closed set of extraction methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrategyKind {
    NumericContent,
    TextContent,
    AngleTitleAttribute,
    MultiDivText,
    RegexContent,
    MultiTextRegex,
    SvgYPosition,
    CombinedTide,
}

impl StrategyKind {
    fn from_name(name: &str) -> Option<StrategyKind> {
        match name {
            "numeric_content" => Some(StrategyKind::NumericContent),
            "text_content" => Some(StrategyKind::TextContent),
            "angle_title_attribute" => Some(StrategyKind::AngleTitleAttribute),
            "multi_div_text" => Some(StrategyKind::MultiDivText),
            "regex_content" => Some(StrategyKind::RegexContent),
            "multi_text_regex" => Some(StrategyKind::MultiTextRegex),
            "svg_y_position" => Some(StrategyKind::SvgYPosition),
            "combined_tide" => Some(StrategyKind::CombinedTide),
            _ => None,
        }
    }
}

/// An extraction strategy bound to the configuration of one field.
///
/// A bound strategy is used for exactly one extraction call; it converts the
/// field's row of cell handles into one value per cell (the angle strategy
/// may return an empty row on a configuration error). Failures are contained
/// per cell and logged, never raised past the strategy boundary.
pub struct Strategy<'c> {
    kind: StrategyKind,
    config: &'c FieldConfig,
}

impl<'c> Strategy<'c> {
    /// Resolves an extraction method name against the registry table and
    /// binds it to the field configuration. Unknown names yield None; the
    /// caller is expected to fall back to [`raw_text`].
    ///
    /// # Arguments
    ///
    /// * 'method' - the configured extraction method name
    /// * 'config' - the field configuration the strategy is bound to
    pub fn resolve(method: &str, config: &'c FieldConfig) -> Option<Strategy<'c>> {
        StrategyKind::from_name(method).map(|kind| Strategy { kind, config })
    }

    /// Runs the strategy over the row of cells
    ///
    /// # Arguments
    ///
    /// * 'cells' - the ordered cell handles of the field row
    pub fn extract(&self, cells: &[Box<dyn CellHandle + '_>]) -> Vec<Extracted> {
        match self.kind {
            StrategyKind::NumericContent => numeric_content(cells),
            StrategyKind::TextContent => raw_text(cells),
            StrategyKind::AngleTitleAttribute => self.angle_title_attribute(cells),
            StrategyKind::MultiDivText => self.multi_div_text(cells),
            StrategyKind::RegexContent => self.regex_content(cells),
            StrategyKind::MultiTextRegex => self.multi_text_regex(cells),
            StrategyKind::SvgYPosition => self.svg_y_position(cells),
            StrategyKind::CombinedTide => self.combined_tide(cells),
        }
    }

    /// Compiles the configured 'pattern', treating a missing or uncompilable
    /// pattern alike as a recoverable configuration error
    fn compiled_pattern(&self) -> Option<Regex> {
        let Some(pattern) = self.config.pattern.as_deref() else {
            warn!("missing 'pattern' in config for regex extraction");
            return None;
        };
        match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("invalid 'pattern' in config: {}", e);
                None
            }
        }
    }

    fn angle_title_attribute(&self, cells: &[Box<dyn CellHandle + '_>]) -> Vec<Extracted> {
        let Some(target) = self.config.param.as_deref() else {
            warn!("missing 'param' in config for angle extraction");
            return Vec::new();
        };
        let span_selector = self.config.span_selector.as_deref().unwrap_or("span[title]");

        cells
            .iter()
            .map(|cell| angle_from_cell(cell.as_ref(), target, span_selector))
            .collect()
    }

    fn multi_div_text(&self, cells: &[Box<dyn CellHandle + '_>]) -> Vec<Extracted> {
        let Some(div_selector) = self.config.div_selector.as_deref() else {
            warn!("missing 'div_selector' in config, falling back to cell text");
            return raw_text(cells);
        };

        cells
            .iter()
            .map(|cell| {
                let values: Vec<String> = cell
                    .find_all(div_selector)
                    .iter()
                    .map(|div| {
                        let text = div.text().trim().to_string();
                        if text.is_empty() || text == NBSP {
                            "None".to_string()
                        } else {
                            text
                        }
                    })
                    .collect();
                Extracted::Text(values.join("\n"))
            })
            .collect()
    }

    fn regex_content(&self, cells: &[Box<dyn CellHandle + '_>]) -> Vec<Extracted> {
        let Some(re) = self.compiled_pattern() else {
            return vec![Extracted::Null; cells.len()];
        };

        cells
            .iter()
            .map(|cell| {
                let text = cell.text().trim().to_string();
                let Some(caps) = re.captures(&text) else {
                    return Extracted::Null;
                };

                if let Some(names) = &self.config.group_names {
                    // Names zip positionally with capture groups; a group
                    // that did not participate in the match stays null.
                    let mut record = IndexMap::new();
                    for (i, name) in names.iter().enumerate() {
                        let value = caps
                            .get(i + 1)
                            .map(|m| Extracted::text(m.as_str()))
                            .unwrap_or(Extracted::Null);
                        record.insert(name.clone(), value);
                    }
                    Extracted::Record(record)
                } else if re.captures_len() > 1 {
                    let mut groups: Vec<Extracted> = (1..re.captures_len())
                        .map(|i| {
                            caps.get(i)
                                .map(|m| Extracted::text(m.as_str()))
                                .unwrap_or(Extracted::Null)
                        })
                        .collect();
                    if groups.len() == 1 {
                        groups.remove(0)
                    } else {
                        Extracted::List(groups)
                    }
                } else {
                    Extracted::text(caps.get(0).map_or("", |m| m.as_str()))
                }
            })
            .collect()
    }

    fn multi_text_regex(&self, cells: &[Box<dyn CellHandle + '_>]) -> Vec<Extracted> {
        let Some(re) = self.compiled_pattern() else {
            return cells.iter().map(|_| Extracted::List(Vec::new())).collect();
        };

        cells
            .iter()
            .map(|cell| {
                let mut matches = Vec::new();
                for node in cell.find_all(GRAPHIC_TEXT_TAG) {
                    let text = node.text();
                    for m in re.find_iter(&text) {
                        matches.push(Extracted::text(m.as_str()));
                    }
                }
                Extracted::List(matches)
            })
            .collect()
    }

    fn svg_y_position(&self, cells: &[Box<dyn CellHandle + '_>]) -> Vec<Extracted> {
        let attr = self.config.position_attr.as_deref().unwrap_or("y");

        cells
            .iter()
            .map(|cell| {
                let positions: Vec<Option<i64>> = cell
                    .find_all(GRAPHIC_TEXT_TAG)
                    .iter()
                    .map(|node| {
                        let position = node
                            .attribute(attr)
                            .and_then(|v| v.trim().parse::<i64>().ok());
                        if position.is_none() {
                            warn!("graphic text without readable '{}' attribute", attr);
                        }
                        position
                    })
                    .collect();

                let known: Vec<i64> = positions.iter().flatten().copied().collect();
                let (Some(&min), Some(&max)) = (known.iter().min(), known.iter().max()) else {
                    return Extracted::List(vec![Extracted::Null; positions.len()]);
                };

                // Smaller on-screen y means drawn higher, i.e. the high event.
                // When every position is the same value both readings hold,
                // which is surfaced as its own label.
                let labels = positions
                    .iter()
                    .map(|p| match p {
                        Some(_) if min == max => Extracted::text("ambiguous"),
                        Some(v) if *v == min => Extracted::text("high"),
                        Some(v) if *v == max => Extracted::text("low"),
                        _ => Extracted::Null,
                    })
                    .collect();
                Extracted::List(labels)
            })
            .collect()
    }

    fn combined_tide(&self, cells: &[Box<dyn CellHandle + '_>]) -> Vec<Extracted> {
        let x_attr = self.config.x_attr.as_deref().unwrap_or("x");
        let y_attr = self.config.y_attr.as_deref().unwrap_or("y");
        let threshold = self.config.threshold.unwrap_or(5.0);
        let time_re = match self.config.time_pattern.as_deref() {
            Some(p) => match Regex::new(p) {
                Ok(re) => re,
                Err(e) => {
                    warn!("invalid 'time_pattern' in config: {}", e);
                    return cells.iter().map(|_| Extracted::List(Vec::new())).collect();
                }
            },
            None => TIDE_TIME_RE.clone(),
        };

        cells
            .iter()
            .map(|cell| {
                // Chronological order is left to right on screen, so the
                // sub-elements are sorted by their numeric x coordinate.
                let mut nodes: Vec<(f64, Box<dyn CellHandle + '_>)> = cell
                    .find_all(GRAPHIC_TEXT_TAG)
                    .into_iter()
                    .filter_map(|node| {
                        match node.attribute(x_attr).and_then(|v| v.trim().parse::<f64>().ok()) {
                            Some(x) => Some((x, node)),
                            None => {
                                warn!("tide node without readable '{}' attribute, dropping it", x_attr);
                                None
                            }
                        }
                    })
                    .collect();
                nodes.sort_by(|a, b| a.0.total_cmp(&b.0));

                let mut events = Vec::new();
                for (_, node) in &nodes {
                    let text = node.text();
                    let Some(time) = time_re
                        .captures(&text)
                        .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
                        .map(|m| m.as_str().to_string())
                    else {
                        continue;
                    };
                    let Some(y) = node
                        .attribute(y_attr)
                        .and_then(|v| v.trim().parse::<f64>().ok())
                    else {
                        warn!("tide time '{}' without readable '{}' attribute", time, y_attr);
                        continue;
                    };
                    let tide_type = if y > threshold { "low" } else { "high" };

                    let mut record = IndexMap::new();
                    record.insert("time".to_string(), Extracted::Text(time));
                    record.insert("type".to_string(), Extracted::text(tide_type));
                    events.push(Extracted::Record(record));
                }
                Extracted::List(events)
            })
            .collect()
    }
}

/// Trimmed text per cell. Doubles as the fallback when no strategy matches
/// the configured method name.
pub fn raw_text(cells: &[Box<dyn CellHandle + '_>]) -> Vec<Extracted> {
    cells
        .iter()
        .map(|cell| Extracted::Text(cell.text().trim().to_string()))
        .collect()
}

fn numeric_content(cells: &[Box<dyn CellHandle + '_>]) -> Vec<Extracted> {
    cells
        .iter()
        .map(|cell| {
            let text = cell.text().trim().to_string();
            if text.is_empty() {
                return Extracted::Null;
            }
            match text.parse::<f64>() {
                Ok(value) => Extracted::Number(value),
                Err(_) => {
                    warn!("numeric cell did not parse: '{}'", text);
                    Extracted::Null
                }
            }
        })
        .collect()
}

fn angle_from_cell(cell: &dyn CellHandle, target: &str, span_selector: &str) -> Extracted {
    let Some(data_x) = cell.attribute("data-x") else {
        warn!("cell without data-x attribute, skipping angle");
        return Extracted::Null;
    };
    let data_x_json: serde_json::Value = match serde_json::from_str(&data_x) {
        Ok(v) => v,
        Err(_) => {
            warn!("error decoding data-x attribute: {}", data_x);
            return Extracted::Null;
        }
    };
    if data_x_json.get("param").and_then(|p| p.as_str()) != Some(target) {
        return Extracted::Null;
    }

    let spans = cell.find_all(span_selector);
    let Some(title) = spans.first().and_then(|span| span.attribute("title")) else {
        warn!("no element matching '{}' with a title attribute", span_selector);
        return Extracted::Null;
    };
    let degrees = DEGREES_RE
        .captures(&title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok());
    match degrees {
        Some(d) => Extracted::Number(d as f64),
        None => {
            warn!("error extracting angle from title: '{}'", title);
            Extracted::Null
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeCell;
    use super::*;

    fn config_with_pattern(pattern: &str) -> FieldConfig {
        FieldConfig { pattern: Some(pattern.to_string()), ..FieldConfig::default() }
    }

    fn extract(method: &str, config: &FieldConfig, cells: Vec<FakeCell>) -> Vec<Extracted> {
        let strategy = Strategy::resolve(method, config).expect("strategy should resolve");
        strategy.extract(&FakeCell::boxed(cells))
    }

    #[test]
    fn registry_rejects_unknown_method() {
        let config = FieldConfig::default();
        assert!(Strategy::resolve("bogus_method", &config).is_none());
        assert!(Strategy::resolve("numeric_content", &config).is_some());
    }

    #[test]
    fn numeric_content_parses_and_null_fills() {
        let values = extract(
            "numeric_content",
            &FieldConfig::default(),
            vec![FakeCell::new("3.5"), FakeCell::new("  "), FakeCell::new("n/a")],
        );
        assert_eq!(values, [Extracted::Number(3.5), Extracted::Null, Extracted::Null]);
    }

    #[test]
    fn text_content_preserves_empty_strings() {
        let values = extract(
            "text_content",
            &FieldConfig::default(),
            vec![FakeCell::new(" 12 "), FakeCell::new("")],
        );
        assert_eq!(values, [Extracted::text("12"), Extracted::text("")]);
    }

    #[test]
    fn angle_extracts_degrees_for_matching_param() {
        let config = FieldConfig { param: Some("SMER".to_string()), ..FieldConfig::default() };
        let cell = FakeCell::new("")
            .with_attr("data-x", r#"{"param": "SMER"}"#)
            .with_child("span[title]", FakeCell::new("").with_attr("title", "NNW (337\u{00b0})"));
        let other = FakeCell::new("")
            .with_attr("data-x", r#"{"param": "GUST"}"#);

        let values = extract("angle_title_attribute", &config, vec![cell, other]);
        assert_eq!(values, [Extracted::Number(337.0), Extracted::Null]);
    }

    #[test]
    fn angle_tolerates_mangled_degree_encoding() {
        let config = FieldConfig { param: Some("DIRPW".to_string()), ..FieldConfig::default() };
        // Degree sign as seen through a broken latin-1 decode
        let cell = FakeCell::new("")
            .with_attr("data-x", r#"{"param": "DIRPW"}"#)
            .with_child("span[title]", FakeCell::new("").with_attr("title", "SSE (162Â°)"));

        let values = extract("angle_title_attribute", &config, vec![cell]);
        assert_eq!(values, [Extracted::Number(162.0)]);
    }

    #[test]
    fn angle_without_param_config_yields_empty_row() {
        let cell = FakeCell::new("").with_attr("data-x", r#"{"param": "SMER"}"#);
        let values = extract("angle_title_attribute", &FieldConfig::default(), vec![cell]);
        assert!(values.is_empty());
    }

    #[test]
    fn angle_contains_failures_per_cell() {
        let config = FieldConfig { param: Some("SMER".to_string()), ..FieldConfig::default() };
        let broken_json = FakeCell::new("").with_attr("data-x", "{not json");
        let no_span = FakeCell::new("").with_attr("data-x", r#"{"param": "SMER"}"#);
        let good = FakeCell::new("")
            .with_attr("data-x", r#"{"param": "SMER"}"#)
            .with_child("span[title]", FakeCell::new("").with_attr("title", "E (90°)"));

        let values = extract("angle_title_attribute", &config, vec![broken_json, no_span, good]);
        assert_eq!(values, [Extracted::Null, Extracted::Null, Extracted::Number(90.0)]);
    }

    #[test]
    fn multi_div_renders_nbsp_layers_as_none() {
        let config = FieldConfig { div_selector: Some("div".to_string()), ..FieldConfig::default() };
        let cell = FakeCell::new("")
            .with_child("div", FakeCell::new("10"))
            .with_child("div", FakeCell::new("\u{a0}"))
            .with_child("div", FakeCell::new("30"));

        let values = extract("multi_div_text", &config, vec![cell]);
        assert_eq!(values, [Extracted::text("10\nNone\n30")]);
    }

    #[test]
    fn multi_div_without_selector_falls_back_to_cell_text() {
        let cell = FakeCell::new(" 55 ").with_child("div", FakeCell::new("10"));
        let values = extract("multi_div_text", &FieldConfig::default(), vec![cell]);
        assert_eq!(values, [Extracted::text("55")]);
    }

    #[test]
    fn regex_returns_first_group_bare() {
        let config = config_with_pattern(r"(\d+)%");
        let values = extract(
            "regex_content",
            &config,
            vec![FakeCell::new("42%"), FakeCell::new("overcast")],
        );
        assert_eq!(values, [Extracted::text("42"), Extracted::Null]);
    }

    #[test]
    fn regex_with_group_names_builds_record() {
        let config = FieldConfig {
            pattern: Some(r"(\d+)%".to_string()),
            group_names: Some(vec!["pct".to_string()]),
            ..FieldConfig::default()
        };
        let values = extract("regex_content", &config, vec![FakeCell::new("42%")]);

        let mut expected = IndexMap::new();
        expected.insert("pct".to_string(), Extracted::text("42"));
        assert_eq!(values, [Extracted::Record(expected)]);
    }

    #[test]
    fn regex_multiple_groups_build_ordered_list() {
        let config = config_with_pattern(r"(\d+)\.(\d) m");
        let values = extract("regex_content", &config, vec![FakeCell::new("wave 1.2 m")]);
        assert_eq!(
            values,
            [Extracted::List(vec![Extracted::text("1"), Extracted::text("2")])]
        );
    }

    #[test]
    fn regex_without_groups_returns_whole_match() {
        let config = config_with_pattern(r"\d+ kn");
        let values = extract("regex_content", &config, vec![FakeCell::new("wind 17 kn gusting")]);
        assert_eq!(values, [Extracted::text("17 kn")]);
    }

    #[test]
    fn regex_missing_pattern_nulls_every_row() {
        let values = extract(
            "regex_content",
            &FieldConfig::default(),
            vec![FakeCell::new("42%"), FakeCell::new("7%")],
        );
        assert_eq!(values, [Extracted::Null, Extracted::Null]);
    }

    #[test]
    fn multi_text_regex_concatenates_across_sub_elements() {
        let config = config_with_pattern(r"\d{2}:\d{2}");
        let cell = FakeCell::new("")
            .with_child("text", FakeCell::new("06:12 0.4m"))
            .with_child("text", FakeCell::new("12:40 3.1m and 18:55"));
        let empty = FakeCell::new("");

        let values = extract("multi_text_regex", &config, vec![cell, empty]);
        assert_eq!(
            values,
            [
                Extracted::List(vec![
                    Extracted::text("06:12"),
                    Extracted::text("12:40"),
                    Extracted::text("18:55"),
                ]),
                Extracted::List(Vec::new()),
            ]
        );
    }

    #[test]
    fn multi_text_regex_missing_pattern_gives_empty_lists() {
        let values = extract(
            "multi_text_regex",
            &FieldConfig::default(),
            vec![FakeCell::new(""), FakeCell::new("")],
        );
        assert_eq!(values, [Extracted::List(Vec::new()), Extracted::List(Vec::new())]);
    }

    #[test]
    fn svg_y_classifies_min_high_and_max_low() {
        let cell = FakeCell::new("")
            .with_child("text", FakeCell::new("a").with_attr("y", "12"))
            .with_child("text", FakeCell::new("b").with_attr("y", "3"))
            .with_child("text", FakeCell::new("c").with_attr("y", "7"));

        let values = extract("svg_y_position", &FieldConfig::default(), vec![cell]);
        assert_eq!(
            values,
            [Extracted::List(vec![
                Extracted::text("low"),
                Extracted::text("high"),
                Extracted::Null,
            ])]
        );
    }

    #[test]
    fn svg_y_all_equal_is_ambiguous() {
        let cell = FakeCell::new("")
            .with_child("text", FakeCell::new("a").with_attr("y", "5"))
            .with_child("text", FakeCell::new("b").with_attr("y", "5"));

        let values = extract("svg_y_position", &FieldConfig::default(), vec![cell]);
        assert_eq!(
            values,
            [Extracted::List(vec![
                Extracted::text("ambiguous"),
                Extracted::text("ambiguous"),
            ])]
        );
    }

    #[test]
    fn svg_y_unreadable_attribute_stays_null() {
        let cell = FakeCell::new("")
            .with_child("text", FakeCell::new("a").with_attr("y", "oops"))
            .with_child("text", FakeCell::new("b").with_attr("y", "2"))
            .with_child("text", FakeCell::new("c").with_attr("y", "9"));

        let values = extract("svg_y_position", &FieldConfig::default(), vec![cell]);
        assert_eq!(
            values,
            [Extracted::List(vec![
                Extracted::Null,
                Extracted::text("high"),
                Extracted::text("low"),
            ])]
        );
    }

    #[test]
    fn combined_tide_sorts_by_x_before_classifying() {
        fn tide_text(x: &str, y: &str, text: &str) -> FakeCell {
            FakeCell::new(text).with_attr("x", x).with_attr("y", y)
        }

        let cell = FakeCell::new("")
            .with_child("text", tide_text("30", "8", "08:00"))
            .with_child("text", tide_text("10", "2", "06:00"))
            .with_child("text", tide_text("20", "4", "07:00"));

        let values = extract("combined_tide", &FieldConfig::default(), vec![cell]);

        let event = |time: &str, tide_type: &str| {
            let mut record = IndexMap::new();
            record.insert("time".to_string(), Extracted::text(time));
            record.insert("type".to_string(), Extracted::text(tide_type));
            Extracted::Record(record)
        };
        assert_eq!(
            values,
            [Extracted::List(vec![
                event("06:00", "high"),
                event("07:00", "high"),
                event("08:00", "low"),
            ])]
        );
    }

    #[test]
    fn combined_tide_drops_nodes_without_readable_x() {
        let cell = FakeCell::new("")
            .with_child("text", FakeCell::new("05:00").with_attr("y", "9"))
            .with_child("text", FakeCell::new("06:00").with_attr("x", "n/a").with_attr("y", "9"))
            .with_child("text", FakeCell::new("07:00").with_attr("x", "12").with_attr("y", "2"));

        let values = extract("combined_tide", &FieldConfig::default(), vec![cell]);
        let Extracted::List(events) = &values[0] else {
            panic!("expected a list of tide events");
        };

        let mut record = IndexMap::new();
        record.insert("time".to_string(), Extracted::text("07:00"));
        record.insert("type".to_string(), Extracted::text("high"));
        assert_eq!(events, &[Extracted::Record(record)]);
    }

    #[test]
    fn combined_tide_skips_non_time_labels() {
        let cell = FakeCell::new("")
            .with_child("text", FakeCell::new("0.6m").with_attr("x", "5").with_attr("y", "9"))
            .with_child("text", FakeCell::new("04:15").with_attr("x", "8").with_attr("y", "9"));

        let values = extract("combined_tide", &FieldConfig::default(), vec![cell]);
        let Extracted::List(events) = &values[0] else {
            panic!("expected a list of tide events");
        };
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn fallback_raw_text_trims() {
        let cells = FakeCell::boxed(vec![FakeCell::new("  NNW  ")]);
        assert_eq!(raw_text(&cells), [Extracted::text("NNW")]);
    }
}
