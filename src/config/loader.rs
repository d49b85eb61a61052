//! Statutory table loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a statutory
//! table set from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    ContributionTable, FixedRates, IncomeTaxTable, LaborTables, TableMetadata, UnemploymentTable,
};

/// Loads and provides access to a statutory table set.
///
/// The `ConfigLoader` reads YAML files from a table-set directory and
/// validates the resulting tables before handing them out.
///
/// # Directory Structure
///
/// ```text
/// config/clt2023/
/// ├── metadata.yaml      # Table set metadata
/// ├── contribution.yaml  # Social-security contribution brackets
/// ├── income_tax.yaml    # Income-tax brackets and dependent deduction
/// ├── unemployment.yaml  # Unemployment-insurance bands
/// └── rates.yaml         # Fixed percentages and divisors
/// ```
///
/// # Example
///
/// ```no_run
/// use clt_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/clt2023").unwrap();
/// println!("Tax year: {}", loader.metadata().year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: LaborTables,
}

impl ConfigLoader {
    /// Loads a table set from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the table-set directory (e.g., "./config/clt2023")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The loaded tables violate a structural invariant
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clt_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/clt2023")?;
    /// # Ok::<(), clt_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TableMetadata>(&path.join("metadata.yaml"))?;
        let contribution = Self::load_yaml::<ContributionTable>(&path.join("contribution.yaml"))?;
        let income_tax = Self::load_yaml::<IncomeTaxTable>(&path.join("income_tax.yaml"))?;
        let unemployment = Self::load_yaml::<UnemploymentTable>(&path.join("unemployment.yaml"))?;
        let rates = Self::load_yaml::<FixedRates>(&path.join("rates.yaml"))?;

        let tables = LaborTables::new(metadata, contribution, income_tax, unemployment, rates)?;

        Ok(Self { tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded table set.
    pub fn tables(&self) -> &LaborTables {
        &self.tables
    }

    /// Returns the table set metadata.
    pub fn metadata(&self) -> &TableMetadata {
        self.tables.metadata()
    }
}
