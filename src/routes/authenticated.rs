use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Authenticated Router Module
///
/// Defines the routes accessible to any user who has successfully passed the
/// authentication layer. Role-specific rules (developer-only application
/// endpoints, company-only posting endpoints) are enforced inside the handlers
/// against the role resolved by the extractor.
///
/// Access Control Strategy:
/// Every handler in this module relies on the `AuthUser` extractor middleware being present
/// on the router layer above this module. This guarantees that all handlers receive a
/// validated `AuthUser` struct containing the user's ID and role, which is then used
/// for all Owner-Only authorization checks (e.g., in `update_job` and
/// `withdraw_application`).
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /auth/me
        // Retrieves the currently authenticated user's profile record.
        .route("/auth/me", get(handlers::get_me))
        // PUT /users/{id}
        // Self-only partial profile update. Role and email are not updatable.
        .route("/users/{id}", put(handlers::update_user))
        // POST /upload/avatar
        // Initiates the profile picture pipeline. Generates a short-lived
        // presigned S3 URL so the client uploads directly to storage,
        // bypassing the application server.
        .route("/upload/avatar", post(handlers::get_avatar_upload_url))
        // --- Job Postings (company role) ---
        // GET /jobs/mine
        // The company variant of the listing: filtered visible postings
        // partitioned into own and others.
        .route("/jobs/mine", get(handlers::get_company_jobs_view))
        // POST /jobs
        // Submits a new posting. The company role check here is what keeps
        // posting ownership tied to company principals.
        .route("/jobs", post(handlers::create_job))
        // PUT/DELETE /jobs/{id}
        // Allows the company to modify or remove its own posting, including
        // caller-driven status transitions (activate/close).
        // Strict ownership check is enforced in the repository WHERE clause.
        .route(
            "/jobs/{id}",
            put(handlers::update_job).delete(handlers::delete_job),
        )
        // --- Applications (developer + company roles) ---
        // POST /applications
        // A developer applies to an open posting. The handler enforces the
        // cover letter minimum and maps a duplicate to 409 Conflict.
        .route("/applications", post(handlers::apply_to_job))
        // GET /applications/mine
        // The developer's own applications, enriched for display.
        .route("/applications/mine", get(handlers::get_my_applications))
        // GET /applications/job/{job_id}
        // All applications received by one posting; owning company only.
        .route(
            "/applications/job/{job_id}",
            get(handlers::get_job_applications),
        )
        // PUT /applications/{id}/status
        // The owning company advances an application's status.
        .route(
            "/applications/{id}/status",
            put(handlers::update_application_status),
        )
        // DELETE /applications/{id}
        // Withdrawal = deletion; developer owner-only.
        .route("/applications/{id}", delete(handlers::withdraw_application))
        // --- Portfolios (developer role) ---
        // GET /portfolio/mine
        // The developer's own portfolio, including the empty state.
        .route("/portfolio/mine", get(handlers::get_my_portfolio))
        // POST /portfolio/projects
        // Adds a showcased project.
        .route("/portfolio/projects", post(handlers::add_portfolio_project))
        // PUT/DELETE /portfolio/projects/{id}
        // Edits or removes one of the developer's own projects.
        .route(
            "/portfolio/projects/{id}",
            put(handlers::update_portfolio_project).delete(handlers::delete_portfolio_project),
        )
}
