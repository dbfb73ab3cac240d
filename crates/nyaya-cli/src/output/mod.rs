use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub use table::{Table, TableOptions};

/// Table options for the current terminal.
#[must_use]
pub fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print `value` as JSON, or the command's own text layout for `table`.
pub fn output_with<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => println!("{}", text(value)),
        OutputFormat::Json | OutputFormat::Raw => output(value, format)?,
    }
    Ok(())
}

fn render_table<T: Serialize>(value: &T, options: TableOptions) -> anyhow::Result<String> {
    let rendered = match serde_json::to_value(value)? {
        Value::Array(items) => array_table(&items).map(|table| table.render(options)),
        Value::Object(map) => {
            let mut table = Table::new(["key", "value"]);
            for (key, value) in map {
                table.push_row(vec![key, cell(&value)]);
            }
            Some(table.render(options))
        }
        scalar => {
            let mut table = Table::new(["value"]);
            table.push_row(vec![cell(&scalar)]);
            Some(table.render(options))
        }
    };
    Ok(rendered.unwrap_or_else(|| String::from("(no rows)")))
}

/// Columns follow the key order of the first object.
fn array_table(items: &[Value]) -> Option<Table> {
    let first = items.first()?;
    let Some(columns) = first.as_object().map(|map| map.keys().cloned().collect::<Vec<_>>())
    else {
        let mut table = Table::new(["value"]);
        for item in items {
            table.push_row(vec![cell(item)]);
        }
        return Some(table);
    };

    let mut table = Table::new(columns.iter().map(String::as_str));
    for item in items {
        let row = columns
            .iter()
            .map(|column| item.get(column).map_or_else(|| String::from("-"), cell))
            .collect();
        table.push_row(row);
    }
    Some(table)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Section {
        section: &'static str,
        title: &'static str,
    }

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn json_render_is_valid_json() {
        let value = Section {
            section: "378",
            title: "Theft",
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["title"], "Theft");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Section {
            section: "378",
            title: "Theft",
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_renders_as_key_value_table() {
        let value = Section {
            section: "378",
            title: "Theft",
        };
        let out = render_table(&value, PLAIN).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("Theft"));
    }

    #[test]
    fn array_of_objects_uses_field_columns() {
        let rows = vec![
            Section {
                section: "378",
                title: "Theft",
            },
            Section {
                section: "420",
                title: "Cheating",
            },
        ];
        let out = render_table(&rows, PLAIN).expect("table render should work");
        let header = out.lines().next().expect("header");
        assert!(header.contains("section") && header.contains("title"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn empty_array_says_so() {
        let rows: Vec<Section> = Vec::new();
        assert_eq!(render_table(&rows, PLAIN).expect("renders"), "(no rows)");
    }
}
