//! Implementation of the `placard describe` command.

use crate::{
    cli::{DescribeArgs, GlobalArgs, ReportFormat},
    commands::load_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Unknown keys are described with fallbacks rather than rejected.
pub fn execute(
    args: DescribeArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let service = load_service(global, config)?;
    let info = service.describe(&args.key);

    let format = args.format.unwrap_or(config.output.format);
    if format == ReportFormat::Json {
        output.json(&info)?;
        return Ok(());
    }

    output.header(&info.display_name)?;
    output.print(&format!("  Token:       {}", output.token(info.key.as_str())))?;
    output.print(&format!("  Description: {}", info.description))?;

    if !info.known {
        output.warning(&format!("'{}' is not in the catalog", info.key))?;
        if let Some(close) = service.catalog().suggest(info.key.as_str()) {
            output.info(&format!("Did you mean {}?", output.token(close.as_str())))?;
        }
    }

    Ok(())
}
