//! Configuration validation
//!
//! Checks that need only the configuration itself. Column existence is
//! checked by the pipeline once the dataset is loaded.

use std::collections::HashSet;

use super::error::{ConfigError, ConfigResult};
use super::pipeline_config::{AttributeTableConfig, PipelineConfig};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            Some(config) => config.validate(),
            None => Ok(()),
        }
    }
}

fn require_non_empty(field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField { field });
    }
    Ok(())
}

impl Validatable for AttributeTableConfig {
    fn validate(&self) -> ConfigResult<()> {
        require_non_empty("attribute_table.key_column", &self.key_column)
    }

    fn config_name(&self) -> &'static str {
        "AttributeTableConfig"
    }
}

impl Validatable for PipelineConfig {
    fn validate(&self) -> ConfigResult<()> {
        require_non_empty("source_column", &self.source_column)?;
        require_non_empty("target_column", &self.target_column)?;

        let mut seen = HashSet::new();
        for column in &self.attribute_columns {
            require_non_empty("attribute_columns", column)?;
            if !seen.insert(column.as_str()) {
                return Err(ConfigError::DuplicateAttributeColumn(column.clone()));
            }
            if *column == self.source_column {
                return Err(ConfigError::AttributeShadowsEndpoint {
                    column: column.clone(),
                    role: "source",
                });
            }
            if *column == self.target_column {
                return Err(ConfigError::AttributeShadowsEndpoint {
                    column: column.clone(),
                    role: "target",
                });
            }
        }

        self.attribute_table.validate()
    }

    fn config_name(&self) -> &'static str {
        "PipelineConfig"
    }
}
