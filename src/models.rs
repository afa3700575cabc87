use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Core Application Schemas (Mapped to Database) ---

/// Role
///
/// The RBAC discriminator assigned at registration. It never changes afterwards;
/// every authorization decision in the application derives from this single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    /// Job seekers: browse jobs, apply, maintain a portfolio.
    Developer,
    /// Hiring companies: post jobs, review incoming applications.
    Company,
    /// Platform operators: oversight and moderation.
    Admin,
}

impl Role {
    /// Parses the stored text representation. Anything outside the known set
    /// yields `None`; callers degrade to the anonymous/public path rather than erroring.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "developer" => Some(Self::Developer),
            "company" => Some(Self::Company),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Company => "company",
            Self::Admin => "admin",
        }
    }
}

/// User
///
/// The canonical identity record stored in the `users` table. Developers and
/// companies share one table; the `role` field decides which profile fields are
/// meaningful. The password hash lives in the same row but is never part of
/// this struct, so it cannot leak through a serialized response.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    /// Display name: a person's name for developers, the company name otherwise.
    pub name: String,
    // The unique contact identifier, also the login handle.
    pub email: String,
    pub role: Role,
    pub bio: Option<String>,
    pub location: Option<String>,
    // Developer skill tags. Empty for companies.
    pub skills: Vec<String>,
    pub company_description: Option<String>,
    pub website: Option<String>,
    // S3 object key of the uploaded profile picture, if any.
    pub avatar: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// AuthCredentials
///
/// Internal row used only by the login flow: the minimal pair needed to verify
/// a password and then resolve the full user record.
#[derive(Debug, Clone, FromRow)]
pub struct AuthCredentials {
    pub id: Uuid,
    pub password_hash: String,
}

/// JobType
///
/// The engagement model of a posting. Serialized in kebab-case to match the
/// values the frontend selects ("full-time", "part-time", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "job_type", rename_all = "kebab-case")]
#[ts(export)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    /// Lenient parse of the wire spelling; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full-time" => Some(Self::FullTime),
            "part-time" => Some(Self::PartTime),
            "contract" => Some(Self::Contract),
            "internship" => Some(Self::Internship),
            _ => None,
        }
    }
}

/// ExperienceLevel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "experience_level", rename_all = "lowercase")]
#[ts(export)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    /// Lenient parse of the wire spelling; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "entry" => Some(Self::Entry),
            "mid" => Some(Self::Mid),
            "senior" => Some(Self::Senior),
            "lead" => Some(Self::Lead),
            _ => None,
        }
    }
}

/// JobStatus
///
/// Lifecycle marker of a posting. Transitions are caller-driven; there is no
/// automatic expiry. Only `Active` postings are visible to anonymous browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[ts(export)]
pub enum JobStatus {
    Draft,
    Active,
    Closed,
}

/// JobPosting
///
/// A vacancy advertised by a company. The owner (`company_id`) is always a
/// user with the `company` role; this is guaranteed at creation time by the
/// role check in the handler, and the `company_name` denormalization is filled
/// by a JOIN in the repository queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema, FromRow)]
#[ts(export)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    // FK to users.id (owner, role = company).
    pub company_id: Uuid,
    // Loaded via JOIN with the owning user row.
    #[sqlx(default)]
    pub company_name: String,
    pub location: String,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    // Ordered skill tags; order is whatever the poster entered.
    pub skills: Vec<String>,
    // Free-form requirement lines, one per entry.
    pub requirements: Vec<String>,
    pub status: JobStatus,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_currency: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// ApplicationStatus
///
/// Starts at `Pending`; mutated only by the owning company. A developer does
/// not change status — withdrawal is deletion of the application row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[ts(export)]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

/// Application
///
/// A developer's expression of interest in exactly one job posting. The
/// (job_id, developer_id) pair is unique; re-applying is a conflict, not an
/// update.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow)]
#[ts(export)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub developer_id: Uuid,
    pub cover_letter: String,
    pub resume_link: Option<String>,
    pub status: ApplicationStatus,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// ApplicationResponse
///
/// Enriched application row for listing views: joins in the posting title,
/// the hiring company's name, and the applicant's display name so the frontend
/// renders without extra round trips.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow)]
#[ts(export)]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub job_id: Uuid,
    pub developer_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub developer_name: String,
    pub cover_letter: String,
    pub resume_link: Option<String>,
    pub status: ApplicationStatus,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// PortfolioProject
///
/// One showcased project inside a developer's portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow)]
#[ts(export)]
pub struct PortfolioProject {
    pub id: Uuid,
    // FK to users.id (owner, role = developer).
    pub developer_id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_link: Option<String>,
    pub live_demo: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// Portfolio
///
/// A developer's showcase, assembled from the owner record plus their project
/// rows. Not itself a table.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Portfolio {
    pub developer_id: Uuid,
    pub developer_name: String,
    pub projects: Vec<PortfolioProject>,
}

/// --- Request Payloads (Input Schemas) ---

/// RegisterRequest
///
/// Input payload for POST /auth/register. The role is chosen once here and is
/// not self-changeable afterwards. The password is hashed before storage and
/// never logged.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// LoginRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// AuthResponse
///
/// Success shape of both identity endpoints: the signed token plus the
/// principal it represents. The client persists exactly this pair.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// AuthFailure
///
/// Structured failure body for identity endpoints. The caller surfaces
/// `message` directly; no retry, and no session state is touched on failure.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AuthFailure {
    pub message: String,
}

/// CreateJobRequest
///
/// Input payload for POST /jobs (company only). Status defaults to `Active`
/// when omitted, matching the posting form's default.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub status: Option<JobStatus>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_currency: Option<String>,
}

/// UpdateJobRequest
///
/// Partial update payload for PUT /jobs/{id}. `Option<T>` on every field and
/// `skip_serializing_if` keep the wire payload to only what changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct UpdateJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_currency: Option<String>,
}

/// CreateApplicationRequest
///
/// Input payload for POST /applications (developer only). The cover letter
/// must be at least [`MIN_COVER_LETTER_LEN`] characters.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CreateApplicationRequest {
    pub job_id: Uuid,
    pub cover_letter: String,
    pub resume_link: Option<String>,
}

/// Minimum accepted cover letter length, in characters.
pub const MIN_COVER_LETTER_LEN: usize = 50;

/// UpdateApplicationStatusRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
}

/// UpdateUserRequest
///
/// Partial profile update for PUT /users/{id}. Role and email are
/// intentionally absent: neither is self-changeable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// UpsertPortfolioProjectRequest
///
/// Input payload for adding or editing one portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct UpsertPortfolioProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github_link: Option<String>,
    pub live_demo: Option<String>,
}

/// PresignedUrlRequest
///
/// Input payload for requesting a short-lived S3 upload URL for a profile
/// picture (POST /upload/avatar).
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, TS, Default)]
#[ts(export)]
pub struct PresignedUrlRequest {
    /// The original filename, used to derive the file extension.
    #[schema(example = "headshot.png")]
    pub filename: String,
    /// The MIME type, used to constrain the S3 upload to the allowed type.
    #[schema(example = "image/png")]
    pub file_type: String,
}

/// PresignedUrlResponse
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, TS, Default)]
#[ts(export)]
pub struct PresignedUrlResponse {
    /// The time-limited URL for the PUT request.
    pub upload_url: String,
    /// The S3 object key where the file will land (stored on the profile).
    pub resource_key: String,
}

/// --- Dashboard Schemas (Output) ---

/// AdminDashboardStats
///
/// Output schema for the administrative statistics endpoint (GET /admin/stats).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct AdminDashboardStats {
    pub total_users: i64,
    pub total_jobs: i64,
    pub total_applications: i64,
    /// Postings currently in the `active` status.
    pub open_positions: i64,
}

/// CompanyJobsResponse
///
/// Output of the company jobs view: the visible, filtered postings split into
/// the requesting company's own postings and everyone else's, each preserving
/// the listing order.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CompanyJobsResponse {
    pub own: Vec<JobPosting>,
    pub others: Vec<JobPosting>,
}
