//! Response types for the labor calculation engine API.
//!
//! Composite calculators serialize their calculation results directly;
//! this module defines the response wrappers for the scalar calculators
//! together with the error response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{RosterEntry, ShiftPattern};

/// Response body for the `/calculate/fgts` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FgtsResponse {
    /// The gross salary the deposit was computed from.
    pub gross_salary: Decimal,
    /// The monthly FGTS deposit.
    pub deposit: Decimal,
}

/// Response body for the `/calculate/thirteenth-salary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThirteenthSalaryResponse {
    /// The gross salary.
    pub gross_salary: Decimal,
    /// The full thirteenth salary.
    pub amount: Decimal,
}

/// Response body for the `/calculate/thirteenth-proportional` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThirteenthProportionalResponse {
    /// The gross salary.
    pub gross_salary: Decimal,
    /// The months worked the proration used.
    pub months_worked: u32,
    /// The prorated thirteenth salary.
    pub amount: Decimal,
}

/// Response body for the `/calculate/social-security` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialSecurityResponse {
    /// The gross salary the contribution was computed from.
    pub gross_salary: Decimal,
    /// The monthly contribution.
    pub contribution: Decimal,
}

/// Response body for the `/calculate/income-tax` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxResponse {
    /// The gross salary the withholding was computed from.
    pub gross_salary: Decimal,
    /// The number of dependents applied.
    pub dependents: u32,
    /// The monthly withholding.
    pub withholding: Decimal,
}

/// Response body for the `/calculate/shift-roster` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    /// The projected pattern.
    pub pattern: ShiftPattern,
    /// The first day of the roster.
    pub start_date: NaiveDate,
    /// The generated roster entries.
    pub entries: Vec<RosterEntry>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTable { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid statutory table",
                    message,
                ),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(format!("{}: {}", field, message)),
            },
        }
    }
}
