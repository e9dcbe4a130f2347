//! Implementation of the `placard extract` command.

use crate::{
    cli::{ExtractArgs, ReportFormat},
    commands::read_template,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use placard_core::domain::{extract, scan};

/// Extraction needs no catalog, so none is loaded.
pub fn execute(args: ExtractArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let content = read_template(&args.template)?;
    let format = args.format.unwrap_or(config.output.format);

    match (format, args.spans) {
        (ReportFormat::Json, true) => {
            let occurrences: Vec<_> = scan(&content).collect();
            output.json(&occurrences)?;
        }
        (ReportFormat::Json, false) => output.json(&extract(&content))?,
        (ReportFormat::Human, true) => {
            for occurrence in scan(&content) {
                output.data(&format!(
                    "{}:{}\t{}",
                    occurrence.line,
                    occurrence.column,
                    occurrence.key.to_token()
                ))?;
            }
        }
        (ReportFormat::Human, false) => {
            for key in extract(&content) {
                output.data(key.as_str())?;
            }
        }
    }

    Ok(())
}
