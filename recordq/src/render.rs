//! Template rendering for CLI output using outstanding

use console::Style;
use outstanding::{render_auto, render_with_output, Theme};
use recordqlib::{Dataset, QueryOutput, QueryTable};
use serde::Serialize;

/// Include template at compile time
const QUERY_TABLE_TEMPLATE: &str = include_str!("../templates/query_table.jinja");

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// One table, pre-formatted for the template
#[derive(Debug, Serialize)]
struct TemplateTable {
    /// Title line
    title: String,
    /// Padded header line
    header: String,
    /// Dashes under the header
    separator: String,
    /// Padded data lines
    rows: Vec<String>,
}

/// Data context for the query table template
#[derive(Debug, Serialize)]
struct QueryTableContext {
    tables: Vec<TemplateTable>,
}

/// Structured (JSON) form of a query answer
#[derive(Debug, Serialize)]
struct QueryReport<'a> {
    query: &'a str,
    output: &'a QueryOutput,
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new()
        .add("title", Style::new().bold())
        .add("header", Style::new().bold())
        .add("empty", Style::new().dim())
}

/// Map the `--output` argument to an outstanding output mode
pub fn output_mode_from_arg(value: &str) -> OutputMode {
    match value {
        "json" => OutputMode::Json,
        "text" => OutputMode::Text,
        "term" => OutputMode::Term,
        "term-debug" => OutputMode::TermDebug,
        _ => OutputMode::Auto,
    }
}

/// Width of each column: the longest header or cell, in characters
fn column_widths(table: &QueryTable) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .chain(std::iter::once(header))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Pad cells to their column widths; numeric columns are right-aligned
fn format_cells(cells: &[String], widths: &[usize], numeric: &[bool]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(numeric)
        .map(|((cell, &width), &right)| {
            if right {
                format!("{:>width$}", cell, width = width)
            } else {
                format!("{:<width$}", cell, width = width)
            }
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Convert a QueryTable to a TemplateTable, pre-formatting every line
fn to_template_table(table: &QueryTable) -> TemplateTable {
    let widths = column_widths(table);
    let gaps = widths.len().saturating_sub(1) * 2;

    TemplateTable {
        title: table.title.clone(),
        header: format_cells(&table.headers, &widths, &table.numeric),
        separator: "-".repeat(widths.iter().sum::<usize>() + gaps),
        rows: table
            .rows
            .iter()
            .map(|row| format_cells(row, &widths, &table.numeric))
            .collect(),
    }
}

/// Render tables through the query table template
fn render_tables(
    tables: &[QueryTable],
    output_mode: OutputMode,
) -> Result<String, Box<dyn std::error::Error>> {
    let theme = create_theme();
    let context = QueryTableContext {
        tables: tables.iter().map(to_template_table).collect(),
    };
    let rendered = render_with_output(QUERY_TABLE_TEMPLATE, &context, &theme, output_mode)?;
    Ok(rendered)
}

/// Render the answer to one query
pub fn render_output(
    query: &str,
    output: &QueryOutput,
    output_mode: OutputMode,
) -> Result<String, Box<dyn std::error::Error>> {
    // For JSON mode, serialize the raw answer rather than the table
    if matches!(output_mode, OutputMode::Json) {
        let theme = create_theme();
        let report = QueryReport { query, output };
        return Ok(render_auto(
            QUERY_TABLE_TEMPLATE,
            &report,
            &theme,
            output_mode,
        )?);
    }

    render_tables(&[QueryTable::from_output(query, output)], output_mode)
}

/// Render the loaded records
pub fn render_dataset(
    dataset: &Dataset,
    output_mode: OutputMode,
) -> Result<String, Box<dyn std::error::Error>> {
    if matches!(output_mode, OutputMode::Json) {
        let theme = create_theme();
        return Ok(render_auto(
            QUERY_TABLE_TEMPLATE,
            dataset,
            &theme,
            output_mode,
        )?);
    }

    render_tables(
        &[
            QueryTable::from_items(&dataset.items),
            QueryTable::from_requests(&dataset.requests),
        ],
        output_mode,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], numeric: &[bool], rows: &[&[&str]]) -> QueryTable {
        QueryTable {
            title: "t".to_string(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            numeric: numeric.to_vec(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_output_mode_from_arg() {
        assert!(matches!(output_mode_from_arg("json"), OutputMode::Json));
        assert!(matches!(output_mode_from_arg("text"), OutputMode::Text));
        assert!(matches!(output_mode_from_arg("auto"), OutputMode::Auto));
    }

    #[test]
    fn test_template_table_padding() {
        let t = to_template_table(&table(
            &["#", "Name"],
            &[true, false],
            &[&["1", "Leather Boots"], &["2", "Bow"]],
        ));
        assert_eq!(t.header, "#  Name");
        assert_eq!(t.separator, "-".repeat(16));
        assert_eq!(t.rows, vec!["1  Leather Boots", "2  Bow"]);
    }

    #[test]
    fn test_alignment_follows_column_not_content() {
        let t = to_template_table(&table(
            &["Route", "Severity"],
            &[false, true],
            &[&["inf", "5"], &["/status", "12"]],
        ));
        assert_eq!(t.rows, vec!["inf             5", "/status        12"]);
    }

    #[test]
    fn test_render_json_report() {
        let text = render_output("damaged", &QueryOutput::Count(3), OutputMode::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["query"], "damaged");
        assert_eq!(parsed["output"]["kind"], "count");
        assert_eq!(parsed["output"]["value"], 3);
    }

    #[test]
    fn test_render_text_table() {
        let output = QueryOutput::Label("Armor".to_string());
        let text = render_output("lowest-type", &output, OutputMode::Text).unwrap();
        assert!(text.contains("lowest-type"));
        assert!(text.contains("Result"));
        assert!(text.contains("Armor"));
    }

    #[test]
    fn test_render_text_empty_table() {
        let text = render_output("oldest-low", &QueryOutput::Ids(vec![]), OutputMode::Text).unwrap();
        assert!(text.contains("(empty)"));
    }

    #[test]
    fn test_render_dataset_tables() {
        let text = render_dataset(&Dataset::sample(), OutputMode::Text).unwrap();
        assert!(text.contains("Items (5)"));
        assert!(text.contains("Leather Boots"));
        assert!(text.contains("Requests (6)"));
        assert!(text.contains("/home"));
    }
}
