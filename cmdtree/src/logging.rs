//! Structured log formatting for command trees

use serde::Serialize;
use std::fmt::{self, Debug};

/// Wrapper for pretty-printing values in logs as YAML
///
/// ```ignore
/// tracing::trace!("validated tree: {}", Pretty(&root));
/// ```
///
/// Falls back to `{:#?}` when YAML serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> Debug for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
