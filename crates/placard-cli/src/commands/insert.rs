//! Implementation of the `placard insert` command.

use tracing::{debug, instrument};

use placard_core::application::TemplateDraft;
use placard_core::domain::{DomainValidator, PlaceholderKey};
use placard_core::error::PlacardError;

use crate::{
    cli::{GlobalArgs, InsertArgs},
    commands::{load_service, read_template},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Print the template with `{KEY}` appended. The file itself is not modified.
#[instrument(skip_all, fields(key = %args.key))]
pub fn execute(
    args: InsertArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    DomainValidator::validate_key(&args.key).map_err(PlacardError::from)?;

    let service = load_service(global, config)?;
    if !args.allow_unknown && !service.catalog().contains(&args.key) {
        return Err(CliError::UnknownPlaceholder {
            suggestion: service.catalog().suggest(&args.key).map(|k| k.to_string()),
            key: args.key,
        });
    }

    let content = read_template(&args.template)?;
    let mut draft = TemplateDraft::new(content);
    draft.insert_placeholder(&PlaceholderKey::new(args.key));
    debug!(len = draft.content().len(), "placeholder inserted");

    output.data(draft.content())?;
    Ok(())
}
