//! HTTP request handlers for the labor calculation engine API.
//!
//! This module contains the handler functions for all API endpoints, one
//! POST route per calculator. Handlers validate the shape of the incoming
//! data, delegate to the calculation core and return the raw structured
//! result; currency and date formatting is left to clients.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_domestic_net_salary, calculate_fgts_deposit, calculate_income_tax,
    calculate_net_salary, calculate_overtime_pay, calculate_severance,
    calculate_social_security, calculate_thirteenth_full, calculate_thirteenth_proportional,
    calculate_unemployment_insurance, calculate_vacation_pay, generate_roster,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DomesticWorkerInput, NetSalaryInput, OvertimeInput, RosterRequest, SeveranceInput,
    UnemploymentInput, VacationInput,
};

use super::request::{
    FgtsRequest, IncomeTaxRequest, SocialSecurityRequest, ThirteenthProportionalRequest,
    ThirteenthSalaryRequest, UnemploymentRequest, parse_salary_list,
};
use super::response::{
    ApiError, ApiErrorResponse, FgtsResponse, IncomeTaxResponse, RosterResponse,
    SocialSecurityResponse, ThirteenthProportionalResponse, ThirteenthSalaryResponse,
};
use super::state::AppState;

/// The largest roster the API will project in one request.
const MAX_ROSTER_DAYS: u32 = 3660;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate/fgts", post(fgts_handler))
        .route("/calculate/thirteenth-salary", post(thirteenth_salary_handler))
        .route(
            "/calculate/thirteenth-proportional",
            post(thirteenth_proportional_handler),
        )
        .route("/calculate/vacation", post(vacation_handler))
        .route("/calculate/overtime", post(overtime_handler))
        .route("/calculate/social-security", post(social_security_handler))
        .route("/calculate/income-tax", post(income_tax_handler))
        .route("/calculate/net-salary", post(net_salary_handler))
        .route("/calculate/domestic-worker", post(domestic_worker_handler))
        .route("/calculate/severance", post(severance_handler))
        .route(
            "/calculate/unemployment-insurance",
            post(unemployment_handler),
        )
        .route("/calculate/shift-roster", post(shift_roster_handler))
        .with_state(state)
}

fn ok_json<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps a JSON extraction rejection to a structured API error.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn validation_failure(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request validation failed"
    );
    ApiErrorResponse::from(error).into_response()
}

fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "must not be negative".to_string(),
        });
    }
    Ok(())
}

fn require_at_most(field: &str, value: u32, max: u32) -> EngineResult<()> {
    if value > max {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must be at most {}", max),
        });
    }
    Ok(())
}

/// Handler for POST /calculate/fgts.
async fn fgts_handler(
    State(state): State<AppState>,
    payload: Result<Json<FgtsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Err(error) = require_non_negative("gross_salary", request.gross_salary) {
        return validation_failure(correlation_id, error);
    }

    let deposit = calculate_fgts_deposit(request.gross_salary, state.tables());
    info!(
        correlation_id = %correlation_id,
        gross_salary = %request.gross_salary,
        deposit = %deposit,
        "FGTS deposit calculated"
    );

    ok_json(FgtsResponse {
        gross_salary: request.gross_salary,
        deposit,
    })
}

/// Handler for POST /calculate/thirteenth-salary.
async fn thirteenth_salary_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ThirteenthSalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Err(error) = require_non_negative("gross_salary", request.gross_salary) {
        return validation_failure(correlation_id, error);
    }

    let amount = calculate_thirteenth_full(request.gross_salary);
    info!(
        correlation_id = %correlation_id,
        gross_salary = %request.gross_salary,
        "Thirteenth salary calculated"
    );

    ok_json(ThirteenthSalaryResponse {
        gross_salary: request.gross_salary,
        amount,
    })
}

/// Handler for POST /calculate/thirteenth-proportional.
async fn thirteenth_proportional_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ThirteenthProportionalRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Err(error) = require_non_negative("gross_salary", request.gross_salary)
        .and_then(|()| require_at_most("months_worked", request.months_worked, 12))
    {
        return validation_failure(correlation_id, error);
    }

    let amount = calculate_thirteenth_proportional(request.gross_salary, request.months_worked);
    info!(
        correlation_id = %correlation_id,
        gross_salary = %request.gross_salary,
        months_worked = request.months_worked,
        "Proportional thirteenth salary calculated"
    );

    ok_json(ThirteenthProportionalResponse {
        gross_salary: request.gross_salary,
        months_worked: request.months_worked,
        amount,
    })
}

/// Handler for POST /calculate/vacation.
async fn vacation_handler(
    State(state): State<AppState>,
    payload: Result<Json<VacationInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Err(error) = require_non_negative("gross_salary", input.gross_salary)
        .and_then(|()| require_at_most("days_sold", input.days_sold, 10))
    {
        return validation_failure(correlation_id, error);
    }

    let result = calculate_vacation_pay(&input, state.tables());
    info!(
        correlation_id = %correlation_id,
        gross_salary = %input.gross_salary,
        total = %result.total,
        "Vacation pay calculated"
    );

    ok_json(result)
}

/// Handler for POST /calculate/overtime.
async fn overtime_handler(
    State(_state): State<AppState>,
    payload: Result<Json<OvertimeInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Err(error) = require_non_negative("gross_salary", input.gross_salary)
        .and_then(|()| require_non_negative("overtime_hours", input.overtime_hours))
        .and_then(|()| require_non_negative("additional_percent", input.additional_percent))
    {
        return validation_failure(correlation_id, error);
    }

    let result = calculate_overtime_pay(&input);
    info!(
        correlation_id = %correlation_id,
        gross_salary = %input.gross_salary,
        overtime_hours = %input.overtime_hours,
        total = %result.total,
        "Overtime pay calculated"
    );

    ok_json(result)
}

/// Handler for POST /calculate/social-security.
async fn social_security_handler(
    State(state): State<AppState>,
    payload: Result<Json<SocialSecurityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Err(error) = require_non_negative("gross_salary", request.gross_salary) {
        return validation_failure(correlation_id, error);
    }

    let contribution =
        calculate_social_security(request.gross_salary, state.tables().contribution());
    info!(
        correlation_id = %correlation_id,
        gross_salary = %request.gross_salary,
        contribution = %contribution,
        "Social-security contribution calculated"
    );

    ok_json(SocialSecurityResponse {
        gross_salary: request.gross_salary,
        contribution,
    })
}

/// Handler for POST /calculate/income-tax.
async fn income_tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<IncomeTaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Err(error) = require_non_negative("gross_salary", request.gross_salary) {
        return validation_failure(correlation_id, error);
    }

    let withholding =
        calculate_income_tax(request.gross_salary, request.dependents, state.tables());
    info!(
        correlation_id = %correlation_id,
        gross_salary = %request.gross_salary,
        dependents = request.dependents,
        withholding = %withholding,
        "Income-tax withholding calculated"
    );

    ok_json(IncomeTaxResponse {
        gross_salary: request.gross_salary,
        dependents: request.dependents,
        withholding,
    })
}

/// Handler for POST /calculate/net-salary.
async fn net_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<NetSalaryInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Err(error) = require_non_negative("gross_salary", input.gross_salary)
        .and_then(|()| require_non_negative("other_deductions", input.other_deductions))
    {
        return validation_failure(correlation_id, error);
    }

    let result = calculate_net_salary(&input, state.tables());
    info!(
        correlation_id = %correlation_id,
        gross_salary = %input.gross_salary,
        net_salary = %result.net_salary,
        "Net salary calculated"
    );

    ok_json(result)
}

/// Handler for POST /calculate/domestic-worker.
async fn domestic_worker_handler(
    State(state): State<AppState>,
    payload: Result<Json<DomesticWorkerInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Err(error) = require_non_negative("gross_salary", input.gross_salary)
        .and_then(|()| require_non_negative("transit_voucher", input.transit_voucher))
        .and_then(|()| require_non_negative("other_deductions", input.other_deductions))
    {
        return validation_failure(correlation_id, error);
    }

    let result = calculate_domestic_net_salary(&input, state.tables());
    info!(
        correlation_id = %correlation_id,
        gross_salary = %input.gross_salary,
        net_salary = %result.net_salary,
        "Domestic-worker net salary calculated"
    );

    ok_json(result)
}

/// Handler for POST /calculate/severance.
async fn severance_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeveranceInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if let Err(error) = require_non_negative("gross_salary", input.gross_salary) {
        return validation_failure(correlation_id, error);
    }

    let result = calculate_severance(&input, state.tables());
    info!(
        correlation_id = %correlation_id,
        gross_salary = %input.gross_salary,
        dismissal_type = %input.dismissal_type,
        total = %result.total,
        "Severance calculated"
    );

    ok_json(result)
}

/// Handler for POST /calculate/unemployment-insurance.
///
/// The salary list arrives as comma-separated text; entries that are not
/// positive decimals are discarded before the calculation runs.
async fn unemployment_handler(
    State(state): State<AppState>,
    payload: Result<Json<UnemploymentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let input = UnemploymentInput {
        salaries: parse_salary_list(&request.salaries),
        months_worked: request.months_worked,
    };

    let result = calculate_unemployment_insurance(&input, state.tables());
    info!(
        correlation_id = %correlation_id,
        months_worked = request.months_worked,
        salaries_used = input.salaries.len(),
        eligible = result.eligible,
        "Unemployment insurance calculated"
    );

    ok_json(result)
}

/// Handler for POST /calculate/shift-roster.
async fn shift_roster_handler(
    State(_state): State<AppState>,
    payload: Result<Json<RosterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    if request.total_days == 0 {
        return validation_failure(
            correlation_id,
            EngineError::InvalidInput {
                field: "total_days".to_string(),
                message: "must be at least 1".to_string(),
            },
        );
    }
    if let Err(error) = require_at_most("total_days", request.total_days, MAX_ROSTER_DAYS) {
        return validation_failure(correlation_id, error);
    }

    let entries = generate_roster(&request);
    info!(
        correlation_id = %correlation_id,
        pattern = %request.pattern,
        total_days = request.total_days,
        "Shift roster generated"
    );

    ok_json(RosterResponse {
        pattern: request.pattern,
        start_date: request.start_date,
        entries,
    })
}
