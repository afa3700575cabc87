use crate::{
    AppState,
    auth::{AuthUser, issue_token},
    filter::{self, JobFilterParams},
    models::{
        AdminDashboardStats, Application, ApplicationResponse, AuthFailure, AuthResponse,
        CompanyJobsResponse, CreateApplicationRequest, CreateJobRequest, JobPosting, JobStatus,
        LoginRequest, MIN_COVER_LETTER_LEN, Portfolio, PortfolioProject, PresignedUrlRequest,
        PresignedUrlResponse, RegisterRequest, Role, UpdateApplicationStatusRequest,
        UpdateJobRequest, UpdateUserRequest, UpsertPortfolioProjectRequest, User,
    },
    password,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

/// Structured failure reply for the identity endpoints: status plus a
/// `{ message }` body the client surfaces verbatim.
type AuthError = (StatusCode, Json<AuthFailure>);

fn auth_failure(status: StatusCode, message: &str) -> AuthError {
    (
        status,
        Json(AuthFailure {
            message: message.to_string(),
        }),
    )
}

// --- Identity Handlers ---

/// register
///
/// [Public Route] Creates a new account and signs the first token. The role
/// is chosen here, once; it is not self-changeable afterwards.
///
/// *Failures*: validation problems and duplicate emails come back as a
/// structured `{ message }` body. Nothing is retried and no session state
/// exists until the caller stores the returned pair.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered", body = AuthResponse),
        (status = 400, description = "Invalid input or duplicate email", body = AuthFailure)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
        return Err(auth_failure(
            StatusCode::BAD_REQUEST,
            "Name and email are required",
        ));
    }
    if payload.password.len() < 6 {
        return Err(auth_failure(
            StatusCode::BAD_REQUEST,
            "Password must be at least 6 characters",
        ));
    }

    let password_hash = password::hash_password(&payload.password).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        auth_failure(StatusCode::INTERNAL_SERVER_ERROR, "Registration failed")
    })?;

    let user = state
        .repo
        .create_user(payload, password_hash)
        .await
        .ok_or_else(|| auth_failure(StatusCode::BAD_REQUEST, "Email already registered"))?;

    let token = issue_token(user.id, &state.config)
        .map_err(|_| auth_failure(StatusCode::INTERNAL_SERVER_ERROR, "Registration failed"))?;

    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

/// login
///
/// [Public Route] Verifies credentials and signs a fresh token.
///
/// *Security*: a missing account and a wrong password produce the identical
/// failure message, so the endpoint cannot be used to probe which emails
/// are registered.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Bad credentials", body = AuthFailure)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let bad_credentials =
        || auth_failure(StatusCode::UNAUTHORIZED, "Invalid email or password");

    let credentials = state
        .repo
        .get_credentials(&payload.email)
        .await
        .ok_or_else(bad_credentials)?;

    if !password::verify_password(&payload.password, &credentials.password_hash) {
        return Err(bad_credentials());
    }

    let user = state
        .repo
        .get_user(credentials.id)
        .await
        .ok_or_else(bad_credentials)?;

    let token = issue_token(user.id, &state.config)
        .map_err(|_| auth_failure(StatusCode::INTERNAL_SERVER_ERROR, "Login failed"))?;

    Ok(Json(AuthResponse { token, user }))
}

/// get_me
///
/// [Authenticated Route] The authenticated user's own profile record.
#[utoipa::path(
    get,
    path = "/auth/me",
    responses((status = 200, description = "Profile", body = User))
)]
pub async fn get_me(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<User>, StatusCode> {
    match state.repo.get_user(id).await {
        Some(user) => Ok(Json(user)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// update_user
///
/// [Authenticated Route] Partial profile update.
///
/// *Authorization*: **Self-Only** — the path id must match the authenticated
/// id. Role and email are not updatable fields at all.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated", body = User),
        (status = 403, description = "Not your profile")
    )
)]
pub async fn update_user(
    AuthUser { id: auth_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, StatusCode> {
    if id != auth_id {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.update_user(id, payload).await {
        Some(user) => Ok(Json(user)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

// --- Job Handlers ---

/// get_jobs
///
/// [Public Route] Lists visible postings narrowed by the filter engine.
///
/// *Mechanism*: the repository enforces the `status = 'active'` visibility
/// rule **unconditionally**; the supplied predicates (all optional, ANDed,
/// malformed values dropped) are then applied in memory, preserving the
/// listing order.
#[utoipa::path(
    get,
    path = "/jobs",
    params(JobFilterParams),
    responses((status = 200, description = "Filtered postings", body = [JobPosting]))
)]
pub async fn get_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobFilterParams>,
) -> Json<Vec<JobPosting>> {
    let visible = state.repo.get_visible_jobs().await;
    let filter_spec = params.into_filter();
    Json(filter::filter_jobs(&visible, &filter_spec))
}

/// get_company_jobs_view
///
/// [Authenticated Route] The company variant of the jobs listing: the same
/// visible, filtered set split into the requester's own postings and
/// everyone else's, order preserved within each half.
#[utoipa::path(
    get,
    path = "/jobs/mine",
    params(JobFilterParams),
    responses(
        (status = 200, description = "Partitioned postings", body = CompanyJobsResponse),
        (status = 403, description = "Not a company")
    )
)]
pub async fn get_company_jobs_view(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<JobFilterParams>,
) -> Result<Json<CompanyJobsResponse>, StatusCode> {
    if role != Role::Company {
        return Err(StatusCode::FORBIDDEN);
    }
    let visible = state.repo.get_visible_jobs().await;
    let filter_spec = params.into_filter();
    let filtered = filter::filter_jobs(&visible, &filter_spec);
    let (own, others) = filter::partition_by_company(filtered, id);
    Ok(Json(CompanyJobsResponse { own, others }))
}

/// get_job_details
///
/// [Public Route] A single posting, only while it is active.
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    responses((status = 200, description = "Found", body = JobPosting))
)]
pub async fn get_job_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobPosting>, StatusCode> {
    match state.repo.get_active_job(id).await {
        Some(job) => Ok(Json(job)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// create_job
///
/// [Authenticated Route] Submits a new posting.
///
/// *RBAC*: only company principals may post; this is what guarantees the
/// "a posting's owner is always a company" invariant at the source.
#[utoipa::path(
    post,
    path = "/jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Created", body = JobPosting),
        (status = 403, description = "Not a company")
    )
)]
pub async fn create_job(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobPosting>), StatusCode> {
    if role != Role::Company {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.create_job(payload, id).await {
        Some(job) => Ok((StatusCode::CREATED, Json(job))),
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// update_job
///
/// [Authenticated Route] Edits a posting, including caller-driven status
/// transitions (activate/close).
///
/// *Authorization*: the repository enforces the **Owner-Only** check in the
/// WHERE clause; a non-owner sees 404, indistinguishable from "not found".
#[utoipa::path(
    put,
    path = "/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    request_body = UpdateJobRequest,
    responses((status = 200, description = "Updated", body = JobPosting))
)]
pub async fn update_job(
    AuthUser { id: company_id, role }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobRequest>,
) -> Result<Json<JobPosting>, StatusCode> {
    if role != Role::Company {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.update_job(id, company_id, payload).await {
        Some(job) => Ok(Json(job)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// delete_job
///
/// [Authenticated Route] Removes one of the company's own postings.
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found or Not Owner")
    )
)]
pub async fn delete_job(
    AuthUser { id: company_id, role }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if role != Role::Company {
        return StatusCode::FORBIDDEN;
    }
    if state.repo.delete_job(id, company_id).await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

// --- Company Directory Handlers ---

/// get_companies
///
/// [Public Route] The hiring company directory.
#[utoipa::path(
    get,
    path = "/companies",
    responses((status = 200, description = "Companies", body = [User]))
)]
pub async fn get_companies(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.repo.get_companies().await)
}

/// get_company_details
///
/// [Public Route] One company profile. Non-company ids resolve to 404 so the
/// directory cannot be used to enumerate developer accounts.
#[utoipa::path(
    get,
    path = "/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses((status = 200, description = "Found", body = User))
)]
pub async fn get_company_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, StatusCode> {
    match state.repo.get_user(id).await {
        Some(user) if user.role == Role::Company => Ok(Json(user)),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

/// get_company_jobs
///
/// [Public Route] A company's active postings, for the company detail page.
#[utoipa::path(
    get,
    path = "/companies/{id}/jobs",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses((status = 200, description = "Active postings", body = [JobPosting]))
)]
pub async fn get_company_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<Vec<JobPosting>> {
    let jobs = state.repo.get_jobs_by_company(id).await;
    // Public view: drafts and closed postings stay private to the owner.
    Json(
        jobs.into_iter()
            .filter(|job| job.status == JobStatus::Active)
            .collect(),
    )
}

// --- Application Handlers ---

/// apply_to_job
///
/// [Authenticated Route] A developer's expression of interest in a posting.
///
/// *Validation*: the cover letter carries a minimum length; the posting must
/// exist and still be active.
/// *Idempotency*: the (job, developer) unique constraint turns a repeat
/// application into a 409 Conflict rather than a duplicate row.
#[utoipa::path(
    post,
    path = "/applications",
    request_body = CreateApplicationRequest,
    responses(
        (status = 201, description = "Applied", body = Application),
        (status = 400, description = "Cover letter too short"),
        (status = 404, description = "Job not open"),
        (status = 409, description = "Already applied")
    )
)]
pub async fn apply_to_job(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), StatusCode> {
    if role != Role::Developer {
        return Err(StatusCode::FORBIDDEN);
    }
    if payload.cover_letter.chars().count() < MIN_COVER_LETTER_LEN {
        return Err(StatusCode::BAD_REQUEST);
    }
    // Applications are only accepted against postings that are still open.
    if state.repo.get_active_job(payload.job_id).await.is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    match state.repo.create_application(payload, id).await {
        Some(application) => Ok((StatusCode::CREATED, Json(application))),
        None => Err(StatusCode::CONFLICT),
    }
}

/// get_my_applications
///
/// [Authenticated Route] The developer's own applications, enriched with
/// posting titles and company names.
#[utoipa::path(
    get,
    path = "/applications/mine",
    responses((status = 200, description = "My applications", body = [ApplicationResponse]))
)]
pub async fn get_my_applications(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationResponse>>, StatusCode> {
    if role != Role::Developer {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(state.repo.get_applications_by_developer(id).await))
}

/// get_job_applications
///
/// [Authenticated Route] All applications received by one posting.
///
/// *Authorization*: the posting must belong to the requesting company; the
/// handler resolves the posting first and compares owners before touching
/// the applications at all.
#[utoipa::path(
    get,
    path = "/applications/job/{job_id}",
    params(("job_id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Applications", body = [ApplicationResponse]),
        (status = 403, description = "Not the posting owner")
    )
)]
pub async fn get_job_applications(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Vec<ApplicationResponse>>, StatusCode> {
    if role != Role::Company {
        return Err(StatusCode::FORBIDDEN);
    }
    let job = state.repo.get_job(job_id).await.ok_or(StatusCode::NOT_FOUND)?;
    if job.company_id != id {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(state.repo.get_applications_for_job(job_id).await))
}

/// update_application_status
///
/// [Authenticated Route] The owning company moves an application through
/// pending → reviewed → accepted/rejected.
///
/// *Authorization*: the ownership check is folded into the repository
/// UPDATE; zero rows means "not found or not yours", reported as 404.
#[utoipa::path(
    put,
    path = "/applications/{id}/status",
    params(("id" = Uuid, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusRequest,
    responses((status = 200, description = "Updated", body = Application))
)]
pub async fn update_application_status(
    AuthUser { id: company_id, role }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApplicationStatusRequest>,
) -> Result<Json<Application>, StatusCode> {
    if role != Role::Company {
        return Err(StatusCode::FORBIDDEN);
    }
    match state
        .repo
        .set_application_status(id, company_id, payload.status)
        .await
    {
        Some(application) => Ok(Json(application)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// withdraw_application
///
/// [Authenticated Route] Withdrawal is deletion: the developer removes their
/// own application; the status field never records a "withdrawn" state.
#[utoipa::path(
    delete,
    path = "/applications/{id}",
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 204, description = "Withdrawn"),
        (status = 404, description = "Not Found or Not Yours")
    )
)]
pub async fn withdraw_application(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
    Path(application_id): Path<Uuid>,
) -> StatusCode {
    if role != Role::Developer {
        return StatusCode::FORBIDDEN;
    }
    if state.repo.delete_application(application_id, id).await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

// --- Portfolio Handlers ---

/// get_portfolios
///
/// [Public Route] The portfolio gallery: every developer showcasing at least
/// one project.
#[utoipa::path(
    get,
    path = "/portfolios",
    responses((status = 200, description = "Portfolios", body = [Portfolio]))
)]
pub async fn get_portfolios(State(state): State<AppState>) -> Json<Vec<Portfolio>> {
    Json(state.repo.get_portfolios().await)
}

/// get_portfolio_by_user
///
/// [Public Route] One developer's portfolio.
#[utoipa::path(
    get,
    path = "/portfolios/{user_id}",
    params(("user_id" = Uuid, Path, description = "Developer ID")),
    responses((status = 200, description = "Found", body = Portfolio))
)]
pub async fn get_portfolio_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Portfolio>, StatusCode> {
    match state.repo.get_portfolio(user_id).await {
        Some(portfolio) => Ok(Json(portfolio)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// get_my_portfolio
///
/// [Authenticated Route] The developer's own portfolio, present even while
/// it has no projects yet.
#[utoipa::path(
    get,
    path = "/portfolio/mine",
    responses((status = 200, description = "My portfolio", body = Portfolio))
)]
pub async fn get_my_portfolio(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Portfolio>, StatusCode> {
    if role != Role::Developer {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.get_portfolio(id).await {
        Some(portfolio) => Ok(Json(portfolio)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// add_portfolio_project
///
/// [Authenticated Route] Adds one showcased project to the developer's
/// portfolio.
#[utoipa::path(
    post,
    path = "/portfolio/projects",
    request_body = UpsertPortfolioProjectRequest,
    responses((status = 201, description = "Added", body = PortfolioProject))
)]
pub async fn add_portfolio_project(
    AuthUser { id, role }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<UpsertPortfolioProjectRequest>,
) -> Result<(StatusCode, Json<PortfolioProject>), StatusCode> {
    if role != Role::Developer {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.add_portfolio_project(id, payload).await {
        Some(project) => Ok((StatusCode::CREATED, Json(project))),
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// update_portfolio_project
///
/// [Authenticated Route] Edits one of the developer's own projects
/// (**Owner-Only**, enforced in the repository WHERE clause).
#[utoipa::path(
    put,
    path = "/portfolio/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    request_body = UpsertPortfolioProjectRequest,
    responses((status = 200, description = "Updated", body = PortfolioProject))
)]
pub async fn update_portfolio_project(
    AuthUser { id: developer_id, role }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertPortfolioProjectRequest>,
) -> Result<Json<PortfolioProject>, StatusCode> {
    if role != Role::Developer {
        return Err(StatusCode::FORBIDDEN);
    }
    match state
        .repo
        .update_portfolio_project(id, developer_id, payload)
        .await
    {
        Some(project) => Ok(Json(project)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// delete_portfolio_project
///
/// [Authenticated Route] Removes one of the developer's own projects.
#[utoipa::path(
    delete,
    path = "/portfolio/projects/{id}",
    params(("id" = Uuid, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found or Not Yours")
    )
)]
pub async fn delete_portfolio_project(
    AuthUser { id: developer_id, role }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if role != Role::Developer {
        return StatusCode::FORBIDDEN;
    }
    if state.repo.delete_portfolio_project(id, developer_id).await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

// --- Upload Handlers ---

/// get_avatar_upload_url
///
/// [Authenticated Route] Generates a temporary, secure URL for direct
/// client-to-cloud profile picture upload.
///
/// *Security*: the URL is short-lived, constrained to the declared MIME
/// type, and keyed by a fresh UUID so uploads never collide or overwrite
/// another user's object.
#[utoipa::path(
    post,
    path = "/upload/avatar",
    request_body = PresignedUrlRequest,
    responses((status = 200, description = "URL", body = PresignedUrlResponse))
)]
pub async fn get_avatar_upload_url(
    AuthUser { id: _user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<PresignedUrlRequest>,
) -> impl IntoResponse {
    // Generate a unique, structured object key (e.g., 'avatars/UUID.ext').
    let extension = std::path::Path::new(&payload.filename)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("bin");
    let unique_id = Uuid::new_v4();
    let object_key = format!("avatars/{}.{}", unique_id, extension);

    match state
        .storage
        .presign_upload(&object_key, &payload.file_type)
        .await
    {
        Ok(url) => {
            let response = PresignedUrlResponse {
                upload_url: url,
                resource_key: object_key,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            // Log the underlying storage error for debugging but return a generic internal error.
            tracing::error!("storage error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed").into_response()
        }
    }
}

// --- Admin Handlers ---

/// get_admin_stats
///
/// [Admin Route] Core marketplace counters for the dashboard.
///
/// *RBAC*: strict enforcement of the admin role before calling the repository.
#[utoipa::path(
    get,
    path = "/admin/stats",
    responses((status = 200, description = "Stats", body = AdminDashboardStats))
)]
pub async fn get_admin_stats(
    AuthUser { role, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<AdminDashboardStats>, StatusCode> {
    if role != Role::Admin {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(state.repo.get_stats().await))
}

/// get_admin_jobs
///
/// [Admin Route] Every posting in the system, drafts and closed included.
#[utoipa::path(
    get,
    path = "/admin/jobs",
    responses((status = 200, description = "All postings", body = [JobPosting]))
)]
pub async fn get_admin_jobs(
    AuthUser { role, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, StatusCode> {
    if role != Role::Admin {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(state.repo.get_all_jobs().await))
}

/// get_admin_users
///
/// [Admin Route] Every account regardless of role.
#[utoipa::path(
    get,
    path = "/admin/users",
    responses((status = 200, description = "All users", body = [User]))
)]
pub async fn get_admin_users(
    AuthUser { role, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, StatusCode> {
    if role != Role::Admin {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(state.repo.get_all_users().await))
}

/// delete_job_admin
///
/// [Admin Route] Force-deletes any posting, ignoring ownership.
#[utoipa::path(
    delete,
    path = "/admin/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_job_admin(
    AuthUser { role, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if role != Role::Admin {
        return StatusCode::FORBIDDEN;
    }
    if state.repo.delete_job_admin(id).await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
