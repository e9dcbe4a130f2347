//! Implementation of the `placard check` command.

use tracing::{info, instrument};

use placard_core::application::TemplateAnalysis;

use crate::{
    cli::{CheckArgs, GlobalArgs, ReportFormat},
    commands::{load_service, required_variables, template_label, template_reader},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(template = %args.template.display()))]
pub fn execute(
    args: CheckArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let service = load_service(global, config)?;

    let keys = if args.require.is_empty() {
        &config.validation.required
    } else {
        &args.require
    };
    let required = required_variables(&service, keys)?;

    let reader = template_reader(&args.template)?;
    let analysis = service.analyze_file(reader.as_ref(), &args.template, &required)?;
    info!(
        valid = analysis.is_valid,
        missing = analysis.missing_placeholders.len(),
        invalid = analysis.invalid_placeholders.len(),
        "template checked"
    );

    let format = args.format.unwrap_or(config.output.format);
    match format {
        ReportFormat::Json => output.json(&analysis)?,
        ReportFormat::Human => print_report(&analysis, &template_label(&args.template), output)?,
    }

    if analysis.is_valid {
        Ok(())
    } else {
        Err(CliError::TemplateInvalid {
            missing: to_strings(&analysis.missing_placeholders),
            invalid: to_strings(&analysis.invalid_placeholders),
        })
    }
}

fn print_report(
    analysis: &TemplateAnalysis,
    label: &str,
    output: &OutputManager,
) -> std::io::Result<()> {
    output.header(&format!("Template: {label}"))?;

    if analysis.extracted_placeholders.is_empty() {
        output.print("  Placeholders used: (none)")?;
    } else {
        let used: Vec<String> = analysis
            .extracted_placeholders
            .iter()
            .map(|key| output.token(key.as_str()))
            .collect();
        output.print(&format!("  Placeholders used: {}", used.join(", ")))?;
    }

    for key in &analysis.missing_placeholders {
        output.error(&format!(
            "Missing required placeholder {}",
            output.token(key.as_str())
        ))?;
    }

    for key in &analysis.invalid_placeholders {
        let hint = analysis
            .suggestions
            .iter()
            .find(|s| &s.unknown == key)
            .map(|s| format!(" (did you mean {}?)", output.token(s.did_you_mean.as_str())))
            .unwrap_or_default();
        output.error(&format!(
            "Unknown placeholder {}{hint}",
            output.token(key.as_str())
        ))?;
    }

    if analysis.is_valid {
        output.success("All required placeholders present and all placeholders known")?;
    }

    Ok(())
}

fn to_strings(keys: &[placard_core::domain::PlaceholderKey]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}
