//! Command handlers, one module per subcommand.

use std::io::Read;
use std::path::Path;

use tracing::{debug, instrument};

use placard_adapters::{BuiltinCatalog, LocalFilesystem, MemoryFilesystem, TomlCatalogSource};
use placard_core::application::{PlaceholderService, ports::TemplateReader};
use placard_core::domain::{DomainValidator, RequiredVariables};
use placard_core::error::PlacardError;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub mod catalog;
pub mod check;
pub mod completions;
pub mod config;
pub mod describe;
pub mod extract;
pub mod init;
pub mod insert;

/// Path argument that means "read the template from stdin".
const STDIN_PATH: &str = "-";

/// Build the service over `--catalog`, then `catalog.path`, then the built-in catalog.
#[instrument(skip_all)]
pub(crate) fn load_service(global: &GlobalArgs, config: &AppConfig) -> CliResult<PlaceholderService> {
    let service = match global.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => PlaceholderService::from_source(&TomlCatalogSource::new(path)),
        None => PlaceholderService::from_source(&BuiltinCatalog::new()),
    }
    .with_cli_context(|| "loading catalog")?;

    debug!(placeholders = service.catalog().len(), "catalog ready");
    Ok(service)
}

/// Reader able to serve the template at `path`. Stdin is drained up front
/// into a [`MemoryFilesystem`] keyed by `-`.
pub(crate) fn template_reader(path: &Path) -> CliResult<Box<dyn TemplateReader>> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(buffer_input(path, std::io::stdin().lock())?));
    }
    Ok(Box::new(LocalFilesystem::new()))
}

fn buffer_input(path: &Path, mut input: impl Read) -> CliResult<MemoryFilesystem> {
    let mut content = String::new();
    input
        .read_to_string(&mut content)
        .with_cli_context(|| "reading template from stdin")?;

    let memory = MemoryFilesystem::new();
    memory.insert(path, content)?;
    Ok(memory)
}

/// Read a template from a file, or from stdin when the path is `-`.
pub(crate) fn read_template(path: &Path) -> CliResult<String> {
    let reader = template_reader(path)?;
    Ok(reader.read_to_string(path)?)
}

/// Build the required set, rejecting keys no template could ever reference.
pub(crate) fn required_variables(
    service: &PlaceholderService,
    keys: &[String],
) -> CliResult<RequiredVariables> {
    let mut required = RequiredVariables::new();
    for key in keys {
        DomainValidator::validate_key(key).map_err(PlacardError::from)?;
        service.add_required_variable(&mut required, key.as_str());
    }
    Ok(required)
}

/// Human-readable label for where a template came from.
pub(crate) fn template_label(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        "<stdin>".into()
    } else {
        path.display().to_string()
    }
}
