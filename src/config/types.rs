//! Statutory table types.
//!
//! This module contains the strongly-typed table structures that are
//! deserialized from YAML configuration files. The tables are treated as
//! versioned configuration data: one [`LaborTables`] value captures every
//! statutory constant for a single tax year.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about a statutory table set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableMetadata {
    /// The tax year the tables apply to.
    pub year: i32,
    /// The human-readable name of the table set.
    pub name: String,
    /// URL to the official publication of the tables.
    pub source_url: String,
}

/// A single bracket of the social-security contribution table.
///
/// Contribution is marginal: each bracket taxes only the salary slice
/// between the previous bracket's limit and its own.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContributionBracket {
    /// The upper salary limit of this bracket.
    pub upper_limit: Decimal,
    /// The contribution rate applied within this bracket, in percent.
    pub rate_percent: Decimal,
}

/// The social-security (INSS) contribution table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContributionTable {
    /// The brackets, ordered by ascending upper limit.
    pub brackets: Vec<ContributionBracket>,
    /// The fixed contribution owed by salaries at or above the final
    /// bracket's limit.
    pub ceiling: Decimal,
}

/// A single bracket of the income-tax withholding table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxBracket {
    /// The upper limit of the taxable base for this bracket.
    /// `None` marks the final, unbounded bracket.
    #[serde(default)]
    pub upper_limit: Option<Decimal>,
    /// The withholding rate applied to the whole base, in percent.
    pub rate_percent: Decimal,
    /// The fixed amount deducted from the raw tax for this bracket.
    pub deduction: Decimal,
}

/// The income-tax (IRRF) withholding table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncomeTaxTable {
    /// The monthly deduction from the taxable base per dependent.
    pub dependent_deduction: Decimal,
    /// The brackets, ordered by ascending upper limit, the last unbounded.
    pub brackets: Vec<TaxBracket>,
}

impl IncomeTaxTable {
    /// Returns the bracket applicable to a taxable base.
    ///
    /// The applicable bracket is the first one whose upper limit is at or
    /// above the base; a base exactly on a boundary therefore belongs to
    /// the lower bracket. The final bracket is unbounded, so every base
    /// matches.
    pub fn bracket_for(&self, base: Decimal) -> &TaxBracket {
        self.brackets
            .iter()
            .find(|b| b.upper_limit.is_none_or(|limit| base <= limit))
            .expect("validated table has an unbounded final bracket")
    }
}

/// A parcel-count band of the unemployment-insurance benefit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParcelBand {
    /// The minimum number of months worked for this band to apply.
    pub min_months: u32,
    /// The number of benefit parcels granted in this band.
    pub parcels: u32,
}

/// The unemployment-insurance (seguro-desemprego) benefit table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnemploymentTable {
    /// The minimum months worked required for eligibility.
    pub minimum_months: u32,
    /// Mean salaries at or below this threshold use the lower rate.
    pub lower_threshold: Decimal,
    /// Mean salaries above this threshold receive the flat ceiling.
    pub upper_threshold: Decimal,
    /// The benefit rate for means at or below the lower threshold, in percent.
    pub lower_rate_percent: Decimal,
    /// The fixed parcel base for means between the two thresholds.
    pub middle_band_base: Decimal,
    /// The marginal rate applied above the lower threshold in the middle
    /// band, in percent.
    pub middle_band_rate_percent: Decimal,
    /// The flat parcel value for means above the upper threshold.
    pub ceiling: Decimal,
    /// Parcel-count bands, ordered by ascending `min_months`.
    pub parcel_bands: Vec<ParcelBand>,
}

impl UnemploymentTable {
    /// Returns the number of parcels for a months-worked count, or zero
    /// when no band matches.
    pub fn parcels_for(&self, months_worked: u32) -> u32 {
        self.parcel_bands
            .iter()
            .rev()
            .find(|band| months_worked >= band.min_months)
            .map(|band| band.parcels)
            .unwrap_or(0)
    }
}

/// Fixed statutory percentages and divisors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FixedRates {
    /// The monthly FGTS deposit as a percentage of gross salary.
    pub fgts_deposit_percent: Decimal,
    /// The FGTS penalty on dismissal without cause, as a percentage of the
    /// accumulated deposit balance.
    pub fgts_penalty_percent: Decimal,
    /// The cap on the transit-voucher deduction as a percentage of gross
    /// salary.
    pub transit_voucher_cap_percent: Decimal,
    /// The divisor producing the constitutional vacation bonus
    /// (one third of the vacation base).
    pub vacation_bonus_divisor: Decimal,
}

/// The complete statutory table set for one tax year.
///
/// This struct aggregates every constant the calculation functions need.
/// Values are either loaded from YAML files through
/// [`ConfigLoader`](crate::config::ConfigLoader) or taken from the built-in
/// [`LaborTables::brazil_2023`] set.
#[derive(Debug, Clone, PartialEq)]
pub struct LaborTables {
    /// Table set metadata.
    metadata: TableMetadata,
    /// Social-security contribution table.
    contribution: ContributionTable,
    /// Income-tax withholding table.
    income_tax: IncomeTaxTable,
    /// Unemployment-insurance benefit table.
    unemployment: UnemploymentTable,
    /// Fixed percentages and divisors.
    rates: FixedRates,
}

impl LaborTables {
    /// Creates a new table set from its component parts, validating the
    /// structural invariants of the bracket tables.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTable`] if:
    /// - either bracket table is empty
    /// - bracket limits are not strictly increasing
    /// - the final income-tax bracket is bounded, or a non-final one is not
    pub fn new(
        metadata: TableMetadata,
        contribution: ContributionTable,
        income_tax: IncomeTaxTable,
        unemployment: UnemploymentTable,
        rates: FixedRates,
    ) -> EngineResult<Self> {
        validate_contribution(&contribution)?;
        validate_income_tax(&income_tax)?;
        Ok(Self {
            metadata,
            contribution,
            income_tax,
            unemployment,
            rates,
        })
    }

    /// Returns the built-in table set for the 2023 tax year.
    pub fn brazil_2023() -> Self {
        Self {
            metadata: TableMetadata {
                year: 2023,
                name: "Tabelas CLT 2023".to_string(),
                source_url: "https://www.gov.br/trabalho-e-emprego".to_string(),
            },
            contribution: ContributionTable {
                brackets: vec![
                    ContributionBracket {
                        upper_limit: Decimal::new(132_000, 2),
                        rate_percent: Decimal::new(75, 1),
                    },
                    ContributionBracket {
                        upper_limit: Decimal::new(257_129, 2),
                        rate_percent: Decimal::new(9, 0),
                    },
                    ContributionBracket {
                        upper_limit: Decimal::new(385_694, 2),
                        rate_percent: Decimal::new(12, 0),
                    },
                    ContributionBracket {
                        upper_limit: Decimal::new(750_749, 2),
                        rate_percent: Decimal::new(14, 0),
                    },
                ],
                ceiling: Decimal::new(87_697, 2),
            },
            income_tax: IncomeTaxTable {
                dependent_deduction: Decimal::new(18_959, 2),
                brackets: vec![
                    TaxBracket {
                        upper_limit: Some(Decimal::new(211_200, 2)),
                        rate_percent: Decimal::ZERO,
                        deduction: Decimal::ZERO,
                    },
                    TaxBracket {
                        upper_limit: Some(Decimal::new(282_665, 2)),
                        rate_percent: Decimal::new(75, 1),
                        deduction: Decimal::new(15_840, 2),
                    },
                    TaxBracket {
                        upper_limit: Some(Decimal::new(375_105, 2)),
                        rate_percent: Decimal::new(15, 0),
                        deduction: Decimal::new(37_040, 2),
                    },
                    TaxBracket {
                        upper_limit: Some(Decimal::new(466_468, 2)),
                        rate_percent: Decimal::new(225, 1),
                        deduction: Decimal::new(65_173, 2),
                    },
                    TaxBracket {
                        upper_limit: None,
                        rate_percent: Decimal::new(275, 1),
                        deduction: Decimal::new(88_496, 2),
                    },
                ],
            },
            unemployment: UnemploymentTable {
                minimum_months: 12,
                lower_threshold: Decimal::new(196_836, 2),
                upper_threshold: Decimal::new(328_093, 2),
                lower_rate_percent: Decimal::new(80, 0),
                middle_band_base: Decimal::new(157_469, 2),
                middle_band_rate_percent: Decimal::new(50, 0),
                ceiling: Decimal::new(223_097, 2),
                parcel_bands: vec![
                    ParcelBand {
                        min_months: 12,
                        parcels: 4,
                    },
                    ParcelBand {
                        min_months: 24,
                        parcels: 5,
                    },
                    ParcelBand {
                        min_months: 36,
                        parcels: 6,
                    },
                ],
            },
            rates: FixedRates {
                fgts_deposit_percent: Decimal::new(8, 0),
                fgts_penalty_percent: Decimal::new(40, 0),
                transit_voucher_cap_percent: Decimal::new(6, 0),
                vacation_bonus_divisor: Decimal::new(3, 0),
            },
        }
    }

    /// Returns the table set metadata.
    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    /// Returns the social-security contribution table.
    pub fn contribution(&self) -> &ContributionTable {
        &self.contribution
    }

    /// Returns the income-tax withholding table.
    pub fn income_tax(&self) -> &IncomeTaxTable {
        &self.income_tax
    }

    /// Returns the unemployment-insurance benefit table.
    pub fn unemployment(&self) -> &UnemploymentTable {
        &self.unemployment
    }

    /// Returns the fixed percentages and divisors.
    pub fn rates(&self) -> &FixedRates {
        &self.rates
    }
}

fn validate_contribution(table: &ContributionTable) -> EngineResult<()> {
    if table.brackets.is_empty() {
        return Err(EngineError::InvalidTable {
            message: "contribution table has no brackets".to_string(),
        });
    }
    for pair in table.brackets.windows(2) {
        if pair[1].upper_limit <= pair[0].upper_limit {
            return Err(EngineError::InvalidTable {
                message: format!(
                    "contribution bracket limits must be strictly increasing: {} follows {}",
                    pair[1].upper_limit, pair[0].upper_limit
                ),
            });
        }
    }
    Ok(())
}

fn validate_income_tax(table: &IncomeTaxTable) -> EngineResult<()> {
    let Some((last, bounded)) = table.brackets.split_last() else {
        return Err(EngineError::InvalidTable {
            message: "income-tax table has no brackets".to_string(),
        });
    };
    if last.upper_limit.is_some() {
        return Err(EngineError::InvalidTable {
            message: "final income-tax bracket must be unbounded".to_string(),
        });
    }
    let mut previous: Option<Decimal> = None;
    for bracket in bounded {
        let Some(limit) = bracket.upper_limit else {
            return Err(EngineError::InvalidTable {
                message: "only the final income-tax bracket may be unbounded".to_string(),
            });
        };
        if previous.is_some_and(|p| limit <= p) {
            return Err(EngineError::InvalidTable {
                message: format!(
                    "income-tax bracket limits must be strictly increasing near {}",
                    limit
                ),
            });
        }
        previous = Some(limit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_brazil_2023_is_structurally_valid() {
        let tables = LaborTables::brazil_2023();
        let rebuilt = LaborTables::new(
            tables.metadata.clone(),
            tables.contribution.clone(),
            tables.income_tax.clone(),
            tables.unemployment.clone(),
            tables.rates.clone(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_brazil_2023_constants() {
        let tables = LaborTables::brazil_2023();
        assert_eq!(tables.metadata().year, 2023);
        assert_eq!(tables.contribution().ceiling, dec("876.97"));
        assert_eq!(tables.income_tax().dependent_deduction, dec("189.59"));
        assert_eq!(tables.unemployment().ceiling, dec("2230.97"));
        assert_eq!(tables.rates().fgts_deposit_percent, dec("8"));
        assert_eq!(tables.rates().fgts_penalty_percent, dec("40"));
    }

    #[test]
    fn test_bracket_for_boundary_belongs_to_lower_bracket() {
        let tables = LaborTables::brazil_2023();
        let bracket = tables.income_tax().bracket_for(dec("2112.00"));
        assert_eq!(bracket.rate_percent, Decimal::ZERO);

        let bracket = tables.income_tax().bracket_for(dec("2112.01"));
        assert_eq!(bracket.rate_percent, dec("7.5"));
    }

    #[test]
    fn test_bracket_for_large_base_uses_unbounded_bracket() {
        let tables = LaborTables::brazil_2023();
        let bracket = tables.income_tax().bracket_for(dec("1000000"));
        assert_eq!(bracket.rate_percent, dec("27.5"));
        assert_eq!(bracket.deduction, dec("884.96"));
    }

    #[test]
    fn test_parcels_for_bands() {
        let tables = LaborTables::brazil_2023();
        let unemployment = tables.unemployment();
        assert_eq!(unemployment.parcels_for(12), 4);
        assert_eq!(unemployment.parcels_for(23), 4);
        assert_eq!(unemployment.parcels_for(24), 5);
        assert_eq!(unemployment.parcels_for(35), 5);
        assert_eq!(unemployment.parcels_for(36), 6);
        assert_eq!(unemployment.parcels_for(120), 6);
        assert_eq!(unemployment.parcels_for(11), 0);
    }

    #[test]
    fn test_new_rejects_unsorted_contribution_brackets() {
        let mut tables = LaborTables::brazil_2023();
        tables.contribution.brackets.swap(0, 1);
        let result = LaborTables::new(
            tables.metadata,
            tables.contribution,
            tables.income_tax,
            tables.unemployment,
            tables.rates,
        );
        match result {
            Err(EngineError::InvalidTable { message }) => {
                assert!(message.contains("strictly increasing"));
            }
            other => panic!("Expected InvalidTable, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_bounded_final_tax_bracket() {
        let mut tables = LaborTables::brazil_2023();
        tables.income_tax.brackets.last_mut().unwrap().upper_limit = Some(dec("10000"));
        let result = LaborTables::new(
            tables.metadata,
            tables.contribution,
            tables.income_tax,
            tables.unemployment,
            tables.rates,
        );
        match result {
            Err(EngineError::InvalidTable { message }) => {
                assert!(message.contains("unbounded"));
            }
            other => panic!("Expected InvalidTable, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_unbounded_middle_tax_bracket() {
        let mut tables = LaborTables::brazil_2023();
        tables.income_tax.brackets[1].upper_limit = None;
        let result = LaborTables::new(
            tables.metadata,
            tables.contribution,
            tables.income_tax,
            tables.unemployment,
            tables.rates,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_empty_tables() {
        let mut tables = LaborTables::brazil_2023();
        tables.contribution.brackets.clear();
        let result = LaborTables::new(
            tables.metadata,
            tables.contribution,
            tables.income_tax,
            tables.unemployment,
            tables.rates,
        );
        assert!(result.is_err());
    }
}
