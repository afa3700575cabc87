use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any client
/// (anonymous or logged-in). These routes primarily handle read-only data access
/// that has been explicitly marked as visible, and core gateway functions like
/// registration and login.
///
/// Security Mandate:
/// All posting retrieval handlers in this module (i.e., `/jobs/*`) must enforce
/// `status = 'active'` at the Repository level. This prevents anonymous or
/// unauthorized viewing of draft and closed postings.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load balancer checks.
        // Returns "ok" immediately to verify the service is running and responsive.
        .route("/health", get(|| async { "ok" }))
        // POST /auth/register
        // New account creation: role chosen once, password hashed, first token signed.
        .route("/auth/register", post(handlers::register))
        // POST /auth/login
        // Credential verification and token issuance. Failures come back as a
        // structured { message } body with no session side effects.
        .route("/auth/login", post(handlers::login))
        // GET /jobs?search=...&location=...&job_type=...&experience_level=...&skill=...
        // Lists active postings, narrowed in memory by the filter engine.
        // Critical enforcement of `status = 'active'` occurs in the Repository query.
        .route("/jobs", get(handlers::get_jobs))
        // GET /jobs/{id}
        // Retrieves the detailed view of a single posting, only while active.
        .route("/jobs/{id}", get(handlers::get_job_details))
        // GET /portfolios
        // The public developer portfolio gallery.
        .route("/portfolios", get(handlers::get_portfolios))
        // GET /portfolios/{user_id}
        // One developer's portfolio.
        .route("/portfolios/{user_id}", get(handlers::get_portfolio_by_user))
        // GET /companies
        // The hiring company directory.
        .route("/companies", get(handlers::get_companies))
        // GET /companies/{id}
        // One company profile.
        .route("/companies/{id}", get(handlers::get_company_details))
        // GET /companies/{id}/jobs
        // A company's active postings for the detail page.
        .route("/companies/{id}/jobs", get(handlers::get_company_jobs))
}
