//! Statutory table configuration for the labor calculation engine.
//!
//! This module provides the strongly-typed statutory tables (contribution
//! brackets, income-tax brackets, unemployment-insurance bands and fixed
//! rates) and the functionality to load them from YAML files, so the
//! tables can be swapped when the law changes without touching the
//! calculation code.
//!
//! # Example
//!
//! ```no_run
//! use clt_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/clt2023").unwrap();
//! println!("Loaded tables: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionBracket, ContributionTable, FixedRates, IncomeTaxTable, LaborTables, ParcelBand,
    TableMetadata, TaxBracket, UnemploymentTable,
};
