//! Implementation of the `placard catalog` command.

use owo_colors::OwoColorize;

use placard_core::application::PlaceholderInfo;

use crate::{
    cli::{CatalogArgs, GlobalArgs, ListFormat},
    commands::load_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: CatalogArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let service = load_service(global, config)?;
    let placeholders = service.describe_all();

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Available Placeholders ({}):", placeholders.len()))?;
            let width = token_width(&placeholders);
            for info in &placeholders {
                let token = format!("{:<width$}", info.key.to_token());
                let token = if output.supports_color() {
                    token.cyan().to_string()
                } else {
                    token
                };
                output.print(&format!(
                    "  {token}  {}  {}",
                    info.display_name,
                    dim(&info.description, output)
                ))?;
            }
        }

        // JSON output must be parseable even in non-TTY pipes and in quiet mode.
        ListFormat::Json => output.json(&placeholders)?,

        ListFormat::List => {
            for info in &placeholders {
                output.data(info.key.as_str())?;
            }
        }

        ListFormat::Csv => {
            output.data("key,display_name,description")?;
            for info in &placeholders {
                output.data(&csv_row(info))?;
            }
        }
    }

    Ok(())
}

/// Widest `{key}` token, in characters since that is what `{:<width$}` pads by.
fn token_width(placeholders: &[PlaceholderInfo]) -> usize {
    placeholders
        .iter()
        .map(|p| p.key.as_str().chars().count() + 2)
        .max()
        .unwrap_or(0)
}

fn dim(text: &str, output: &OutputManager) -> String {
    if output.supports_color() {
        text.dimmed().to_string()
    } else {
        format!("- {text}")
    }
}

fn csv_row(info: &PlaceholderInfo) -> String {
    [
        info.key.as_str(),
        info.display_name.as_str(),
        info.description.as_str(),
    ]
    .iter()
    .map(|field| csv_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// Quote a CSV field when it contains a separator, quote or line break.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
