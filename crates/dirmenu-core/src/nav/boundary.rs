//! Navigation root enforcement.

use std::path::{Component, Path, PathBuf};

/// Resolves `path` to an absolute, normalised form.
///
/// Existing paths are canonicalised (symlinks followed). Paths that cannot
/// be canonicalised are made absolute against the current directory and
/// have `.` and `..` segments folded lexically.
pub fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalised = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalised.pop();
            }
            other => normalised.push(other.as_os_str()),
        }
    }
    normalised
}

/// Returns `true` when `candidate` is `root` itself or lies below it.
///
/// The comparison is component-wise on resolved paths, so `/home/foobar`
/// is not inside `/home/foo`.
pub fn is_navigable(candidate: &Path, root: &Path) -> bool {
    resolve(candidate).starts_with(resolve(root))
}
