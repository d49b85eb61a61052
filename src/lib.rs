//! Calculation engine for Brazilian labor-law entitlements (CLT)
//!
//! This crate computes the amounts prescribed by the Consolidação das Leis do
//! Trabalho from a small set of numeric and date inputs: FGTS deposits,
//! thirteenth salary, vacation pay, overtime, social-security contribution
//! (INSS), income-tax withholding (IRRF), net salary, severance packages,
//! unemployment-insurance benefits and work-shift rosters.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
