///! Output formatting for CLI
///!
///! Unified output formatting across all commands so tables, JSON and
///! YAML look the same whichever view produced them.

use colored::Colorize;
use deckhand_common::tables::{Cell, Table};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    /// Unknown names fall back to table output
    pub fn from_name(s: &str) -> Self {
        Self::parse(s).unwrap_or(OutputFormat::Table)
    }
}

/// Print a serializable value in the requested format
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => print_json(data)?,
        OutputFormat::Yaml => print_yaml(data)?,
    }
    Ok(())
}

/// Render a table view-model with the tabled crate
pub fn render_table(table: &Table) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.headers.iter().map(|h| h.to_string()));
    for row in &table.rows {
        builder.push_record(row.iter().map(|cell| cell.plain().to_string()));
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}

pub fn print_table(table: &Table) {
    println!("{}", render_table(table));
    if table.is_empty() {
        println!("{}", "No results found".yellow());
    }
}

/// Print data as pretty-printed JSON
pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

/// Print data as YAML
pub fn print_yaml<T: Serialize>(data: &T) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    println!("{}", yaml);
    Ok(())
}

pub fn print_heading(heading: &str) {
    println!("{}", heading.bold());
}

/// Print a success message with green checkmark
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Print an error message with red X
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Print a warning message with yellow triangle
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Single-column table of image references
pub fn image_table(images: &[String]) -> Table {
    Table {
        headers: vec!["Image"],
        rows: images.iter().map(|image| vec![Cell::text(image)]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_common::Pod;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("yml"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("xml"), None);
        assert_eq!(OutputFormat::from_name("xml"), OutputFormat::Table);
    }

    #[test]
    fn test_render_pod_table_shows_link_target() {
        let pods = vec![
            Pod { name: "api-7d9f".to_string(), status: "Running".to_string() },
            Pod { name: "client-5c2a".to_string(), status: "Pending".to_string() },
        ];
        let rendered = render_table(&Table::pods("ns1", &pods));

        assert!(rendered.contains("Pod Name"));
        assert!(rendered.contains("api-7d9f"));
        assert!(rendered.contains("Pending"));
        assert_eq!(rendered.matches("http://client.example.com/ns1").count(), 2);
    }

    #[test]
    fn test_image_table_rows() {
        let images = vec!["a:latest".to_string(), "b:latest".to_string()];
        let table = image_table(&images);
        assert_eq!(table.rows.len(), 2);
        assert!(render_table(&table).contains("b:latest"));
    }
}
