use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Utc;
use std::sync::Arc;
use terracode::{
    AppConfig, AppState, create_router,
    models::{
        AdminDashboardStats, Application, ApplicationResponse, ApplicationStatus,
        AuthCredentials, CreateApplicationRequest, CreateJobRequest, JobPosting, Portfolio,
        PortfolioProject, PresignedUrlRequest, PresignedUrlResponse, RegisterRequest, Role,
        UpdateJobRequest, UpdateUserRequest, UpsertPortfolioProjectRequest, User,
    },
    repository::{Repository, RepositoryState},
    storage::MockStorageService,
};
use tower::util::ServiceExt;
use uuid::Uuid;

// A do-nothing repository: only get_user matters here, since the local-dev
// x-user-id bypass resolves the authenticated identity through it.
struct StubRepository;

#[async_trait]
impl Repository for StubRepository {
    async fn get_user(&self, id: Uuid) -> Option<User> {
        // Return a valid test user for any UUID
        Some(User {
            id,
            name: "Test User".to_string(),
            email: "test@test.com".to_string(),
            role: Role::Developer,
            bio: None,
            location: None,
            skills: vec![],
            company_description: None,
            website: None,
            avatar: None,
            created_at: Utc::now(),
        })
    }
    async fn get_credentials(&self, _email: &str) -> Option<AuthCredentials> {
        None
    }
    async fn create_user(&self, _req: RegisterRequest, _hash: String) -> Option<User> {
        panic!("Stub called")
    }
    async fn update_user(&self, _id: Uuid, _req: UpdateUserRequest) -> Option<User> {
        None
    }
    async fn get_companies(&self) -> Vec<User> {
        vec![]
    }
    async fn get_all_users(&self) -> Vec<User> {
        vec![]
    }

    async fn get_visible_jobs(&self) -> Vec<JobPosting> {
        vec![]
    }
    async fn get_all_jobs(&self) -> Vec<JobPosting> {
        vec![]
    }
    async fn get_job(&self, _id: Uuid) -> Option<JobPosting> {
        None
    }
    async fn get_active_job(&self, _id: Uuid) -> Option<JobPosting> {
        None
    }
    async fn get_jobs_by_company(&self, _company_id: Uuid) -> Vec<JobPosting> {
        vec![]
    }
    async fn create_job(&self, _req: CreateJobRequest, _company_id: Uuid) -> Option<JobPosting> {
        None
    }
    async fn update_job(
        &self,
        _id: Uuid,
        _company_id: Uuid,
        _req: UpdateJobRequest,
    ) -> Option<JobPosting> {
        None
    }
    async fn delete_job(&self, _id: Uuid, _company_id: Uuid) -> bool {
        false
    }
    async fn delete_job_admin(&self, _id: Uuid) -> bool {
        false
    }

    async fn create_application(
        &self,
        _req: CreateApplicationRequest,
        _developer_id: Uuid,
    ) -> Option<Application> {
        None
    }
    async fn get_applications_by_developer(&self, _developer_id: Uuid) -> Vec<ApplicationResponse> {
        vec![]
    }
    async fn get_applications_for_job(&self, _job_id: Uuid) -> Vec<ApplicationResponse> {
        vec![]
    }
    async fn set_application_status(
        &self,
        _id: Uuid,
        _company_id: Uuid,
        _status: ApplicationStatus,
    ) -> Option<Application> {
        None
    }
    async fn delete_application(&self, _id: Uuid, _developer_id: Uuid) -> bool {
        false
    }

    async fn get_portfolio(&self, _developer_id: Uuid) -> Option<Portfolio> {
        None
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
        AdminDashboardStats::default()
    }
}

fn app(mock_storage: MockStorageService) -> axum::Router {
    let repo = Arc::new(StubRepository) as RepositoryState;
    let storage = Arc::new(mock_storage);
    let config = AppConfig::default();

    let state = AppState {
        repo,
        storage,
        config,
    };
    create_router(state)
}

#[tokio::test]
async fn test_avatar_presign_success() {
    let app = app(MockStorageService::new());
    let user_id = Uuid::new_v4();

    let payload = PresignedUrlRequest {
        filename: "headshot.png".to_string(),
        file_type: "image/png".to_string(),
    };

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload/avatar")
                .header("Content-Type", "application/json")
                .header("x-user-id", user_id.to_string())
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_json: PresignedUrlResponse = serde_json::from_slice(&body_bytes).unwrap();

    assert!(body_json.upload_url.contains("signature=fake"));
    assert!(body_json.resource_key.ends_with(".png"));
    assert!(body_json.resource_key.starts_with("avatars/"));
}

#[tokio::test]
async fn test_avatar_presign_sanitizes_traversal_attempts() {
    let app = app(MockStorageService::new());
    let user_id = Uuid::new_v4();

    let payload = PresignedUrlRequest {
        filename: "../../etc/passwd.png".to_string(),
        file_type: "image/png".to_string(),
    };

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload/avatar")
                .header("Content-Type", "application/json")
                .header("x-user-id", user_id.to_string())
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_json: PresignedUrlResponse = serde_json::from_slice(&body_bytes).unwrap();

    assert!(body_json.resource_key.ends_with(".png"));
    assert!(!body_json.resource_key.contains(".."));
}

#[tokio::test]
async fn test_avatar_presign_storage_failure() {
    let app = app(MockStorageService::new_failing());
    let user_id = Uuid::new_v4();

    let payload = PresignedUrlRequest {
        filename: "valid.png".to_string(),
        file_type: "image/png".to_string(),
    };

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload/avatar")
                .header("Content-Type", "application/json")
                .header("x-user-id", user_id.to_string())
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_avatar_presign_requires_authentication() {
    let app = app(MockStorageService::new());

    let payload = PresignedUrlRequest {
        filename: "headshot.png".to_string(),
        file_type: "image/png".to_string(),
    };

    // No x-user-id bypass and no bearer token.
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload/avatar")
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
