//! Formatted output helpers for CLI commands.
//!
//! Provides column-aligned tables and text/JSON rendering of resolved
//! dashboards.

use std::fmt::Write as _;

use ecoroute_common::config::OutputFormat;
use ecoroute_routing::resolver::Dashboard;

/// Renders a resolved dashboard in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_dashboard(dashboard: &Dashboard, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(dashboard)?),
        OutputFormat::Text => Ok(format!(
            "path:        {}\ntitle:       {}\ndescription: {}",
            dashboard.path, dashboard.title, dashboard.description
        )),
    }
}

/// Formats rows into left-aligned columns separated by two spaces.
///
/// Column widths are measured in characters. Every line, including the
/// last, ends with a newline.
#[must_use]
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    write_row(&mut out, headers.iter().copied(), &widths);
    for row in rows {
        write_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let _ = write!(line, "{cell:<width$}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use ecoroute_routing::resolver::resolve_dashboard;

    use super::*;

    #[test]
    fn format_table_aligns_columns() {
        let rows = vec![
            vec!["Other".to_string(), "retail".to_string()],
            vec!["ESG Officer".to_string(), "energy".to_string()],
        ];
        let table = format_table(&["ROLE", "INDUSTRY"], &rows);
        assert_eq!(
            table,
            "ROLE         INDUSTRY\nOther        retail\nESG Officer  energy\n"
        );
    }

    #[test]
    fn format_table_with_no_rows_prints_header() {
        assert_eq!(format_table(&["A", "B"], &[]), "A  B\n");
    }

    #[test]
    fn render_text_lists_all_fields() {
        let dashboard = resolve_dashboard(Some("ESG Officer"), Some("Retail"));
        let text = render_dashboard(&dashboard, OutputFormat::Text).expect("render");
        assert!(text.contains("path:        /workspace/esg-integration"));
        assert!(text.contains("title:       Retail | ESG Officer Dashboard"));
    }

    #[test]
    fn render_json_is_parseable() {
        let dashboard = resolve_dashboard(None, None);
        let json = render_dashboard(&dashboard, OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["path"], "/workspace/dashboard");
    }
}
