use async_trait::async_trait;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use std::sync::Arc;
use terracode::{
    AppState,
    auth::AuthUser,
    config::AppConfig,
    filter::JobFilterParams,
    handlers,
    models::{
        AdminDashboardStats, Application, ApplicationResponse, ApplicationStatus,
        AuthCredentials, CreateApplicationRequest, CreateJobRequest, ExperienceLevel,
        JobPosting, JobStatus, JobType, Portfolio, PortfolioProject, RegisterRequest, Role,
        UpdateApplicationStatusRequest, UpdateJobRequest, UpdateUserRequest,
        UpsertPortfolioProjectRequest, User,
    },
    repository::Repository,
    storage::MockStorageService,
};
use tokio::test;
use uuid::Uuid;

// --- Fixtures ---

fn sample_user(id: Uuid, role: Role) -> User {
    User {
        id,
        name: "Test User".to_string(),
        email: "user@example.com".to_string(),
        role,
        bio: None,
        location: None,
        skills: vec![],
        company_description: None,
        website: None,
        avatar: None,
        created_at: Utc::now(),
    }
}

fn sample_job(company_id: Uuid, title: &str) -> JobPosting {
    JobPosting {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{} description", title),
        company_id,
        company_name: "Acme".to_string(),
        location: "Remote".to_string(),
        job_type: JobType::FullTime,
        experience_level: ExperienceLevel::Mid,
        skills: vec!["Rust".to_string()],
        requirements: vec![],
        status: JobStatus::Active,
        salary_min: None,
        salary_max: None,
        salary_currency: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn sample_application(job_id: Uuid, developer_id: Uuid) -> Application {
    Application {
        id: Uuid::new_v4(),
        job_id,
        developer_id,
        cover_letter: "x".repeat(60),
        resume_link: None,
        status: ApplicationStatus::Pending,
        created_at: Utc::now(),
    }
}

// --- MOCK REPOSITORY IMPLEMENTATION ---

// This struct is the central control point for testing handler logic.
// Handlers rely on traits, so we mock the trait implementation with
// pre-canned outputs per test.
pub struct MockRepoControl {
    pub user_role: Role,
    pub jobs_to_return: Vec<JobPosting>,
    pub get_job_result: Option<JobPosting>,
    pub active_job_result: Option<JobPosting>,
    pub created_job: Option<JobPosting>,
    pub update_job_result: Option<JobPosting>,
    pub delete_job_result: bool,
    pub delete_job_admin_result: bool,
    pub create_application_result: Option<Application>,
    pub applications_to_return: Vec<ApplicationResponse>,
    pub set_status_result: Option<Application>,
    pub delete_application_result: bool,
    pub updated_user: Option<User>,
    pub users_to_return: Vec<User>,
    pub stats_to_return: AdminDashboardStats,
}

impl Default for MockRepoControl {
    fn default() -> Self {
        MockRepoControl {
            user_role: Role::Developer,
            jobs_to_return: vec![],
            get_job_result: None,
            active_job_result: None,
            created_job: None,
            update_job_result: None,
            delete_job_result: false,
            delete_job_admin_result: false,
            create_application_result: None,
            applications_to_return: vec![],
            set_status_result: None,
            delete_application_result: false,
            updated_user: None,
            users_to_return: vec![],
            stats_to_return: AdminDashboardStats::default(),
        }
    }
}

#[async_trait]
impl Repository for MockRepoControl {
    async fn get_user(&self, id: Uuid) -> Option<User> {
        Some(sample_user(id, self.user_role))
    }
    async fn get_credentials(&self, _email: &str) -> Option<AuthCredentials> {
        None
    }
    async fn create_user(&self, _req: RegisterRequest, _hash: String) -> Option<User> {
        panic!("Stub called")
    }
    async fn update_user(&self, _id: Uuid, _req: UpdateUserRequest) -> Option<User> {
        self.updated_user.clone()
    }
    async fn get_companies(&self) -> Vec<User> {
        self.users_to_return.clone()
    }
    async fn get_all_users(&self) -> Vec<User> {
        self.users_to_return.clone()
    }

    async fn get_visible_jobs(&self) -> Vec<JobPosting> {
        self.jobs_to_return.clone()
    }
    async fn get_all_jobs(&self) -> Vec<JobPosting> {
        self.jobs_to_return.clone()
    }
    async fn get_job(&self, _id: Uuid) -> Option<JobPosting> {
        self.get_job_result.clone()
    }
    async fn get_active_job(&self, _id: Uuid) -> Option<JobPosting> {
        self.active_job_result.clone()
    }
    async fn get_jobs_by_company(&self, _company_id: Uuid) -> Vec<JobPosting> {
        self.jobs_to_return.clone()
    }
    async fn create_job(&self, _req: CreateJobRequest, _company_id: Uuid) -> Option<JobPosting> {
        self.created_job.clone()
    }
    async fn update_job(
        &self,
        _id: Uuid,
        _company_id: Uuid,
        _req: UpdateJobRequest,
    ) -> Option<JobPosting> {
        self.update_job_result.clone()
    }
    async fn delete_job(&self, _id: Uuid, _company_id: Uuid) -> bool {
        self.delete_job_result
    }
    async fn delete_job_admin(&self, _id: Uuid) -> bool {
        self.delete_job_admin_result
    }

    async fn create_application(
        &self,
        _req: CreateApplicationRequest,
        _developer_id: Uuid,
    ) -> Option<Application> {
        self.create_application_result.clone()
    }
    async fn get_applications_by_developer(&self, _developer_id: Uuid) -> Vec<ApplicationResponse> {
        self.applications_to_return.clone()
    }
    async fn get_applications_for_job(&self, _job_id: Uuid) -> Vec<ApplicationResponse> {
        self.applications_to_return.clone()
    }
    async fn set_application_status(
        &self,
        _id: Uuid,
        _company_id: Uuid,
        _status: ApplicationStatus,
    ) -> Option<Application> {
        self.set_status_result.clone()
    }
    async fn delete_application(&self, _id: Uuid, _developer_id: Uuid) -> bool {
        self.delete_application_result
    }

    async fn get_portfolio(&self, developer_id: Uuid) -> Option<Portfolio> {
        Some(Portfolio {
            developer_id,
            developer_name: "Test User".to_string(),
            projects: vec![],
        })
    }
    async fn get_portfolios(&self) -> Vec<Portfolio> {
        vec![]
    }
    async fn add_portfolio_project(
        &self,
        _developer_id: Uuid,
        _req: UpsertPortfolioProjectRequest,
    ) -> Option<PortfolioProject> {
        None
    }
    async fn update_portfolio_project(
        &self,
        _id: Uuid,
        _developer_id: Uuid,
        _req: UpsertPortfolioProjectRequest,
    ) -> Option<PortfolioProject> {
        None
    }
    async fn delete_portfolio_project(&self, _id: Uuid, _developer_id: Uuid) -> bool {
        false
    }

    async fn get_stats(&self) -> AdminDashboardStats {
        self.stats_to_return.clone()
    }
}

// --- Test Helpers ---

fn create_test_state(repo: MockRepoControl, storage: MockStorageService) -> AppState {
    AppState {
        repo: Arc::new(repo),
        storage: Arc::new(storage),
        config: AppConfig::default(),
    }
}

fn developer_user() -> AuthUser {
    AuthUser {
        id: Uuid::new_v4(),
        role: Role::Developer,
    }
}

fn company_user(id: Uuid) -> AuthUser {
    AuthUser {
        id,
        role: Role::Company,
    }
}

fn admin_user() -> AuthUser {
    AuthUser {
        id: Uuid::new_v4(),
        role: Role::Admin,
    }
}

const TEST_ID: Uuid = Uuid::nil();

// --- JOB HANDLER TESTS ---

#[test]
async fn test_get_job_details_success() {
    let mock_job = sample_job(Uuid::new_v4(), "Frontend Developer");
    let state = create_test_state(
        MockRepoControl {
            active_job_result: Some(mock_job.clone()),
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let result = handlers::get_job_details(State(state), Path(TEST_ID)).await;

    assert!(result.is_ok());
    let Json(job) = result.unwrap();
    assert_eq!(job.id, mock_job.id);
}

#[test]
async fn test_get_job_details_not_found() {
    let state = create_test_state(MockRepoControl::default(), MockStorageService::new());

    let result = handlers::get_job_details(State(state), Path(TEST_ID)).await;

    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
}

#[test]
async fn test_get_jobs_applies_the_filter_engine() {
    let company = Uuid::new_v4();
    let state = create_test_state(
        MockRepoControl {
            jobs_to_return: vec![
                sample_job(company, "Frontend Developer"),
                sample_job(company, "Backend Engineer"),
            ],
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let params = JobFilterParams {
        search: Some("Developer".to_string()),
        ..JobFilterParams::default()
    };
    let Json(jobs) = handlers::get_jobs(State(state), Query(params)).await;

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Frontend Developer");
}

#[test]
async fn test_company_jobs_view_partitions_own_from_others() {
    let mine = Uuid::new_v4();
    let theirs = Uuid::new_v4();
    let state = create_test_state(
        MockRepoControl {
            user_role: Role::Company,
            jobs_to_return: vec![
                sample_job(theirs, "Their Posting"),
                sample_job(mine, "My Posting"),
            ],
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let result = handlers::get_company_jobs_view(
        company_user(mine),
        State(state),
        Query(JobFilterParams::default()),
    )
    .await;

    assert!(result.is_ok());
    let Json(view) = result.unwrap();
    assert_eq!(view.own.len(), 1);
    assert_eq!(view.own[0].title, "My Posting");
    assert_eq!(view.others.len(), 1);
    assert_eq!(view.others[0].title, "Their Posting");
}

#[test]
async fn test_company_jobs_view_forbidden_for_developers() {
    let state = create_test_state(MockRepoControl::default(), MockStorageService::new());

    let result = handlers::get_company_jobs_view(
        developer_user(),
        State(state),
        Query(JobFilterParams::default()),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), StatusCode::FORBIDDEN);
}

#[test]
async fn test_create_job_forbidden_for_developers() {
    let state = create_test_state(MockRepoControl::default(), MockStorageService::new());

    let payload = CreateJobRequest {
        title: "Backend Engineer".to_string(),
        description: "Build the backend".to_string(),
        location: "Remote".to_string(),
        job_type: JobType::FullTime,
        experience_level: ExperienceLevel::Senior,
        skills: vec![],
        requirements: vec![],
        status: None,
        salary_min: None,
        salary_max: None,
        salary_currency: None,
    };

    let result = handlers::create_job(developer_user(), State(state), Json(payload)).await;

    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), StatusCode::FORBIDDEN);
}

#[test]
async fn test_create_job_success_for_companies() {
    let company = Uuid::new_v4();
    let created = sample_job(company, "Backend Engineer");
    let state = create_test_state(
        MockRepoControl {
            user_role: Role::Company,
            created_job: Some(created.clone()),
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let payload = CreateJobRequest {
        title: "Backend Engineer".to_string(),
        description: "Build the backend".to_string(),
        location: "Remote".to_string(),
        job_type: JobType::FullTime,
        experience_level: ExperienceLevel::Senior,
        skills: vec![],
        requirements: vec![],
        status: None,
        salary_min: None,
        salary_max: None,
        salary_currency: None,
    };

    let result = handlers::create_job(company_user(company), State(state), Json(payload)).await;

    assert!(result.is_ok());
    let (status, Json(job)) = result.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(job.id, created.id);
}

#[test]
async fn test_delete_job_not_found_or_not_owner() {
    let state = create_test_state(
        MockRepoControl {
            user_role: Role::Company,
            delete_job_result: false,
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let status = handlers::delete_job(company_user(Uuid::new_v4()), State(state), Path(TEST_ID)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- APPLICATION HANDLER TESTS ---

fn application_payload(job_id: Uuid, cover_letter: &str) -> CreateApplicationRequest {
    CreateApplicationRequest {
        job_id,
        cover_letter: cover_letter.to_string(),
        resume_link: None,
    }
}

#[test]
async fn test_apply_forbidden_for_companies() {
    let state = create_test_state(
        MockRepoControl {
            user_role: Role::Company,
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let result = handlers::apply_to_job(
        company_user(Uuid::new_v4()),
        State(state),
        Json(application_payload(TEST_ID, &"x".repeat(60))),
    )
    .await;

    assert_eq!(result.unwrap_err(), StatusCode::FORBIDDEN);
}

#[test]
async fn test_apply_rejects_short_cover_letters() {
    let state = create_test_state(MockRepoControl::default(), MockStorageService::new());

    let result = handlers::apply_to_job(
        developer_user(),
        State(state),
        Json(application_payload(TEST_ID, "too short")),
    )
    .await;

    assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
}

#[test]
async fn test_apply_requires_an_open_posting() {
    // No active job in the stub: the posting is draft, closed, or missing.
    let state = create_test_state(MockRepoControl::default(), MockStorageService::new());

    let result = handlers::apply_to_job(
        developer_user(),
        State(state),
        Json(application_payload(TEST_ID, &"x".repeat(60))),
    )
    .await;

    assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
}

#[test]
async fn test_apply_duplicate_conflict() {
    let job = sample_job(Uuid::new_v4(), "Backend Engineer");
    let state = create_test_state(
        MockRepoControl {
            active_job_result: Some(job),
            // None from the repository means the unique constraint fired.
            create_application_result: None,
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let result = handlers::apply_to_job(
        developer_user(),
        State(state),
        Json(application_payload(TEST_ID, &"x".repeat(60))),
    )
    .await;

    assert_eq!(result.unwrap_err(), StatusCode::CONFLICT);
}

#[test]
async fn test_apply_success() {
    let developer = developer_user();
    let job = sample_job(Uuid::new_v4(), "Backend Engineer");
    let application = sample_application(job.id, developer.id);
    let state = create_test_state(
        MockRepoControl {
            active_job_result: Some(job),
            create_application_result: Some(application.clone()),
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let result = handlers::apply_to_job(
        developer,
        State(state),
        Json(application_payload(application.job_id, &"x".repeat(60))),
    )
    .await;

    assert!(result.is_ok());
    let (status, Json(created)) = result.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.status, ApplicationStatus::Pending);
}

#[test]
async fn test_job_applications_require_posting_ownership() {
    let requester = Uuid::new_v4();
    let someone_else = Uuid::new_v4();
    let state = create_test_state(
        MockRepoControl {
            user_role: Role::Company,
            get_job_result: Some(sample_job(someone_else, "Their Posting")),
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let result =
        handlers::get_job_applications(company_user(requester), State(state), Path(TEST_ID)).await;

    assert_eq!(result.unwrap_err(), StatusCode::FORBIDDEN);
}

#[test]
async fn test_job_applications_success_for_owner() {
    let requester = Uuid::new_v4();
    let job = sample_job(requester, "My Posting");
    let state = create_test_state(
        MockRepoControl {
            user_role: Role::Company,
            get_job_result: Some(job),
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let result =
        handlers::get_job_applications(company_user(requester), State(state), Path(TEST_ID)).await;

    assert!(result.is_ok());
}

#[test]
async fn test_update_application_status_not_owner_is_not_found() {
    let state = create_test_state(
        MockRepoControl {
            user_role: Role::Company,
            set_status_result: None,
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let result = handlers::update_application_status(
        company_user(Uuid::new_v4()),
        State(state),
        Path(TEST_ID),
        Json(UpdateApplicationStatusRequest {
            status: ApplicationStatus::Reviewed,
        }),
    )
    .await;

    assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
}

#[test]
async fn test_withdraw_application_success() {
    let state = create_test_state(
        MockRepoControl {
            delete_application_result: true,
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let status =
        handlers::withdraw_application(developer_user(), State(state), Path(TEST_ID)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// --- PROFILE HANDLER TESTS ---

#[test]
async fn test_update_user_is_self_only() {
    let state = create_test_state(MockRepoControl::default(), MockStorageService::new());

    // Path id differs from the authenticated id.
    let result = handlers::update_user(
        developer_user(),
        State(state),
        Path(Uuid::new_v4()),
        Json(UpdateUserRequest::default()),
    )
    .await;

    assert_eq!(result.unwrap_err(), StatusCode::FORBIDDEN);
}

#[test]
async fn test_update_user_success_for_self() {
    let auth = developer_user();
    let updated = sample_user(auth.id, Role::Developer);
    let state = create_test_state(
        MockRepoControl {
            updated_user: Some(updated.clone()),
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let result = handlers::update_user(
        auth.clone(),
        State(state),
        Path(auth.id),
        Json(UpdateUserRequest {
            bio: Some("Rustacean".to_string()),
            ..UpdateUserRequest::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let Json(user) = result.unwrap();
    assert_eq!(user.id, auth.id);
}

// --- ADMIN HANDLER TESTS ---

#[test]
async fn test_admin_stats_forbidden_for_non_admins() {
    let state = create_test_state(MockRepoControl::default(), MockStorageService::new());

    let result = handlers::get_admin_stats(developer_user(), State(state)).await;

    assert!(result.is_err());
    assert_eq!(result.unwrap_err(), StatusCode::FORBIDDEN);
}

#[test]
async fn test_admin_stats_success() {
    let state = create_test_state(
        MockRepoControl {
            user_role: Role::Admin,
            stats_to_return: AdminDashboardStats {
                total_users: 10,
                total_jobs: 4,
                total_applications: 7,
                open_positions: 3,
            },
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let result = handlers::get_admin_stats(admin_user(), State(state)).await;

    assert!(result.is_ok());
    let Json(stats) = result.unwrap();
    assert_eq!(stats.total_users, 10);
    assert_eq!(stats.open_positions, 3);
}

#[test]
async fn test_admin_force_delete_job() {
    let state = create_test_state(
        MockRepoControl {
            user_role: Role::Admin,
            delete_job_admin_result: true,
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let status = handlers::delete_job_admin(admin_user(), State(state), Path(TEST_ID)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[test]
async fn test_admin_force_delete_forbidden_for_companies() {
    let state = create_test_state(
        MockRepoControl {
            user_role: Role::Company,
            delete_job_admin_result: true,
            ..MockRepoControl::default()
        },
        MockStorageService::new(),
    );

    let status =
        handlers::delete_job_admin(company_user(Uuid::new_v4()), State(state), Path(TEST_ID)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
