//! HTTP API module for the labor calculation engine.
//!
//! This module provides the REST endpoints that expose each calculator,
//! one POST route per statutory topic.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    FgtsRequest, IncomeTaxRequest, SocialSecurityRequest, ThirteenthProportionalRequest,
    ThirteenthSalaryRequest, UnemploymentRequest, parse_salary_list,
};
pub use response::{
    ApiError, FgtsResponse, IncomeTaxResponse, RosterResponse, SocialSecurityResponse,
    ThirteenthProportionalResponse, ThirteenthSalaryResponse,
};
pub use state::AppState;
