//! Free-form command arguments completed at runtime
//!
//! A [`DynamicParam`] describes the single argument slot a command may take
//! whose valid values are not known until the user starts typing. The
//! completion function is handed to the argument layer as-is; nothing in
//! this crate calls it during validation or help rendering.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::sync::Arc;

use crate::{CommandError, Result};

/// Computes candidate completions from a partial input
///
/// Implemented for any `Fn(&str) -> Vec<String>`, so closures and plain
/// functions can be passed directly.
pub trait Complete: Send + Sync {
    fn complete(&self, input: &str) -> Vec<String>;
}

impl<F> Complete for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn complete(&self, input: &str) -> Vec<String> {
        self(input)
    }
}

/// A command's dynamically completed argument slot
#[derive(Clone)]
pub struct DynamicParam {
    completion: Option<Arc<dyn Complete>>,
    flag: String,
    description: String,
}

impl DynamicParam {
    /// Create a parameter with no completion function attached yet
    pub fn new(flag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            completion: None,
            flag: flag.into(),
            description: description.into(),
        }
    }

    /// Attach the completion function
    pub fn with_completion(mut self, completion: impl Complete + 'static) -> Self {
        self.completion = Some(Arc::new(completion));
        self
    }

    /// Display label shown in help, e.g. `(branch)`
    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_completion(&self) -> bool {
        self.completion.is_some()
    }

    /// Candidate values for a partial input
    ///
    /// Returns an empty list when no completion function is attached.
    pub fn complete(&self, input: &str) -> Vec<String> {
        self.completion
            .as_ref()
            .map(|completion| completion.complete(input))
            .unwrap_or_default()
    }

    /// Validate the parameter
    ///
    /// Fields are checked in a fixed order (flag, description, completion)
    /// and only the first missing one is reported.
    pub fn check(&self) -> Result<()> {
        if self.flag.is_empty() {
            return Err(CommandError::MissingParamFlag);
        }
        if self.description.is_empty() {
            return Err(CommandError::MissingParamDescription {
                flag: self.flag.clone(),
            });
        }
        if self.completion.is_none() {
            return Err(CommandError::MissingCompletion {
                flag: self.flag.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for DynamicParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicParam")
            .field("flag", &self.flag)
            .field("description", &self.description)
            .field("has_completion", &self.has_completion())
            .finish()
    }
}

impl Serialize for DynamicParam {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DynamicParam", 3)?;
        state.serialize_field("flag", &self.flag)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("has_completion", &self.has_completion())?;
        state.end()
    }
}
