use thiserror::Error;

/// Errors raised while loading or validating a [`ViewConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("element id `{field}` must not be empty")]
    EmptyElementId { field: &'static str },

    #[cfg(feature = "toml")]
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for a front end that shows the stage walkthrough.
///
/// All fields are optional in a config file; missing ones fall back to the
/// defaults of the classic single-page visualizer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    /// Input rendered before the user types anything
    pub initial_input: String,
    /// Id of the text input element
    pub input_id: String,
    /// Id of the container receiving the stage blocks
    pub steps_id: String,
    /// Id of the element whose background shows the color
    pub swatch_id: String,
    /// Id of the element showing the color code as text
    pub code_id: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_input: "chucknorris".to_string(),
            input_id: "colorInput".to_string(),
            steps_id: "steps".to_string(),
            swatch_id: "colorBox".to_string(),
            code_id: "colorCode".to_string(),
        }
    }
}

impl ViewConfig {
    /// Parse and validate a TOML config string.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty element ids.
    ///
    /// The initial input may be anything, including empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ids = [
            ("input_id", &self.input_id),
            ("steps_id", &self.steps_id),
            ("swatch_id", &self.swatch_id),
            ("code_id", &self.code_id),
        ];
        for (field, id) in ids {
            if id.trim().is_empty() {
                return Err(ConfigError::EmptyElementId { field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.initial_input, "chucknorris");
        assert_eq!(config.input_id, "colorInput");
        assert_eq!(config.steps_id, "steps");
        assert_eq!(config.swatch_id, "colorBox");
        assert_eq!(config.code_id, "colorCode");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_initial_input_is_fine() {
        let config = ViewConfig {
            initial_input: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_element_id_rejected() {
        let config = ViewConfig {
            swatch_id: "  ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyElementId { field: "swatch_id" }));
        assert_eq!(err.to_string(), "element id `swatch_id` must not be empty");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn partial_toml() {
        let config = ViewConfig::from_toml_str("initial_input = \"sick\"\n").unwrap();
        assert_eq!(config.initial_input, "sick");
        assert_eq!(config.steps_id, "steps");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_with_empty_id() {
        let err = ViewConfig::from_toml_str("code_id = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyElementId { field: "code_id" }));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn malformed_toml() {
        let err = ViewConfig::from_toml_str("initial_input = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
