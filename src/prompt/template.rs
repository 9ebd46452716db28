//! Command template loading.

use crate::context::ProjectContext;
use crate::error::{AdwError, Result};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Path where the template `name` is expected.
pub fn template_path(ctx: &ProjectContext, name: &str) -> PathBuf {
    ctx.template_path(name)
}

/// Read a template's full text from `<commands_dir>/<name>.md`.
///
/// Templates are re-read on every call.
pub fn load_template(ctx: &ProjectContext, name: &str) -> Result<String> {
    let path = template_path(ctx, name);

    std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AdwError::TemplateNotFound {
            name: name.to_string(),
            path: path.clone(),
        },
        _ => AdwError::io(format!("failed to read template '{}'", path.display()), e),
    })
}
