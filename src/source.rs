//! Template source resolution: a template argument is either a path to a
//! template file or the template text itself.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Resolve a template argument to template text.
///
/// If `source` names an existing file, its full contents are returned; a
/// file that exists but cannot be read propagates the I/O error. Anything
/// else, the empty string included, is taken to be inline template text and
/// returned unchanged. No caching: resolving the same path twice reads the
/// file twice.
pub fn resolve(source: &str) -> Result<String> {
    let path = Path::new(source);
    if path.is_file() {
        Ok(fs::read_to_string(path)?)
    } else {
        Ok(source.to_owned())
    }
}
