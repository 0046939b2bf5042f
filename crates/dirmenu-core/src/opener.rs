//! Default actions applied to a chosen file or directory.

use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Opens `path` with the system's default application.
///
/// # Errors
///
/// [`CoreError::Action`] if no opener could be launched.
pub fn open_path(path: &Path) -> CoreResult<()> {
    tracing::debug!("opening {}", path.display());
    open::that_detached(path).map_err(|e| CoreError::Action(format!("{}: {e}", path.display())))
}
