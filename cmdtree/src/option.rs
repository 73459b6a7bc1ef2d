//! Static named flags attached to a command

use serde::{Deserialize, Serialize};

use crate::{CommandError, Result};

/// A static flag with a human-readable description
///
/// Options are leaf data: they carry no behavior beyond [`CommandOption::check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    name: String,
    description: String,
}

impl CommandOption {
    /// Create a new option
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Validate that both name and description are present
    pub fn check(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CommandError::MissingOptionName);
        }
        if self.description.is_empty() {
            return Err(CommandError::MissingOptionDescription {
                option: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("", "Show all entries")]
    fn test_check_rejects_empty_name(#[case] name: &str, #[case] description: &str) {
        let option = CommandOption::new(name, description);
        assert_eq!(option.check(), Err(CommandError::MissingOptionName));
    }

    #[test]
    fn test_check_rejects_empty_description() {
        let option = CommandOption::new("--all", "");
        assert_eq!(
            option.check(),
            Err(CommandError::MissingOptionDescription {
                option: "--all".to_string()
            })
        );
    }

    #[test]
    fn test_check_accepts_complete_option() {
        let option = CommandOption::new("--all", "Show all entries");
        assert!(option.check().is_ok());
        assert_eq!(option.name(), "--all");
        assert_eq!(option.description(), "Show all entries");
    }

    #[test]
    fn test_option_deserializes_from_yaml() {
        let option: CommandOption =
            serde_yaml_ng::from_str("name: --verbose\ndescription: Print more\n").unwrap();
        assert_eq!(option, CommandOption::new("--verbose", "Print more"));
    }
}
