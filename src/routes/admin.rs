use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get},
};

/// Admin Router Module
///
/// Defines the routes exclusively accessible to users with the 'admin' role.
/// These endpoints provide moderation, oversight, and statistical access for
/// marketplace management.
///
/// Access Control:
/// This entire router must be wrapped in a middleware layer that first authenticates
/// the user (using the `AuthUser` extractor); each handler then explicitly checks
/// for the admin role before allowing the request to proceed. This prevents any
/// unauthorized access to critical moderation functions.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin/stats
        // Retrieves core dashboard metrics (users, postings, applications, open positions).
        // Essential for system health monitoring and oversight.
        .route("/stats", get(handlers::get_admin_stats))
        // GET /admin/jobs
        // Lists ALL postings in the system, including drafts and closed ones.
        // Used for administrative review and moderation.
        .route("/jobs", get(handlers::get_admin_jobs))
        // GET /admin/users
        // Lists every account regardless of role.
        .route("/users", get(handlers::get_admin_users))
        // DELETE /admin/jobs/{id}
        // Force-deletes any posting, ignoring ownership. The moderation
        // counterpart of the owner-only delete on the authenticated router.
        .route("/jobs/{id}", delete(handlers::delete_job_admin))
}
