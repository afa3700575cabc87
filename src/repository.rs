use crate::models::{
    AdminDashboardStats, Application, ApplicationResponse, ApplicationStatus, AuthCredentials,
    CreateApplicationRequest, CreateJobRequest, JobPosting, JobStatus, Portfolio, PortfolioProject,
    RegisterRequest, Role, UpdateJobRequest, UpdateUserRequest, UpsertPortfolioProjectRequest,
    User,
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations. This is the core
/// of the Repository Abstraction pattern, allowing the handlers to interact with
/// the data layer without knowing the specific implementation (Postgres, Stub, etc.).
///
/// **Send + Sync + async_trait** are required to make the trait object (`Arc<dyn Repository>`)
/// safely shareable and usable across Axum's asynchronous task boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Users & Identity ---
    async fn get_user(&self, id: Uuid) -> Option<User>;
    // Login support: the minimal id/hash pair for a given email.
    async fn get_credentials(&self, email: &str) -> Option<AuthCredentials>;
    // Returns None when the email is already taken (unique constraint).
    async fn create_user(&self, req: RegisterRequest, password_hash: String) -> Option<User>;
    // Self-service partial profile update.
    async fn update_user(&self, id: Uuid, req: UpdateUserRequest) -> Option<User>;
    // Public company directory (role = company).
    async fn get_companies(&self) -> Vec<User>;
    // Admin access: every user regardless of role.
    async fn get_all_users(&self) -> Vec<User>;

    // --- Job Postings ---
    // Public listing: active postings only, newest first.
    async fn get_visible_jobs(&self) -> Vec<JobPosting>;
    // Admin access: all postings regardless of status.
    async fn get_all_jobs(&self) -> Vec<JobPosting>;
    // Retrieval with and without the visibility rule.
    async fn get_job(&self, id: Uuid) -> Option<JobPosting>;
    async fn get_active_job(&self, id: Uuid) -> Option<JobPosting>;
    // A company's own postings, any status.
    async fn get_jobs_by_company(&self, company_id: Uuid) -> Vec<JobPosting>;
    async fn create_job(&self, req: CreateJobRequest, company_id: Uuid) -> Option<JobPosting>;
    // Owner-Only: updates only if company_id matches. Uses COALESCE for partial updates.
    async fn update_job(
        &self,
        id: Uuid,
        company_id: Uuid,
        req: UpdateJobRequest,
    ) -> Option<JobPosting>;
    // Owner-Only: deletes only if company_id matches.
    async fn delete_job(&self, id: Uuid, company_id: Uuid) -> bool;
    /// Admin Override: delete ANY posting by ID (no ownership check).
    async fn delete_job_admin(&self, id: Uuid) -> bool;

    // --- Applications ---
    // Idempotent per (job, developer): returns None if a duplicate application exists.
    async fn create_application(
        &self,
        req: CreateApplicationRequest,
        developer_id: Uuid,
    ) -> Option<Application>;
    async fn get_applications_by_developer(&self, developer_id: Uuid) -> Vec<ApplicationResponse>;
    async fn get_applications_for_job(&self, job_id: Uuid) -> Vec<ApplicationResponse>;
    // Status mutation restricted to the company owning the posting.
    async fn set_application_status(
        &self,
        id: Uuid,
        company_id: Uuid,
        status: ApplicationStatus,
    ) -> Option<Application>;
    // Withdrawal: deletes only if the developer owns the application.
    async fn delete_application(&self, id: Uuid, developer_id: Uuid) -> bool;

    // --- Portfolios ---
    async fn get_portfolio(&self, developer_id: Uuid) -> Option<Portfolio>;
    async fn get_portfolios(&self) -> Vec<Portfolio>;
    async fn add_portfolio_project(
        &self,
        developer_id: Uuid,
        req: UpsertPortfolioProjectRequest,
    ) -> Option<PortfolioProject>;
    // Owner-Only project edit/removal.
    async fn update_portfolio_project(
        &self,
        id: Uuid,
        developer_id: Uuid,
        req: UpsertPortfolioProjectRequest,
    ) -> Option<PortfolioProject>;
    async fn delete_portfolio_project(&self, id: Uuid, developer_id: Uuid) -> bool;

    // --- Admin ---
    async fn get_stats(&self) -> AdminDashboardStats;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by the PostgreSQL database.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Shared column lists keep the runtime queries in one spelling.
const USER_COLUMNS: &str = "id, name, email, role, bio, location, skills, \
     company_description, website, avatar, created_at";

const JOB_COLUMNS: &str = "j.id, j.title, j.description, j.company_id, u.name AS company_name, \
     j.location, j.job_type, j.experience_level, j.skills, j.requirements, j.status, \
     j.salary_min, j.salary_max, j.salary_currency, j.created_at, j.updated_at";

const APPLICATION_COLUMNS: &str =
    "id, job_id, developer_id, cover_letter, resume_link, status, created_at";

#[async_trait]
impl Repository for PostgresRepository {
    // --- USERS & IDENTITY ---

    /// get_user
    ///
    /// Retrieves the profile record needed for authentication and authorization.
    async fn get_user(&self, id: Uuid) -> Option<User> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("get_user error: {:?}", e);
                None
            })
    }

    /// get_credentials
    ///
    /// Fetches only the id/hash pair for the login flow; the full user record
    /// is loaded separately once the password verifies.
    async fn get_credentials(&self, email: &str) -> Option<AuthCredentials> {
        sqlx::query_as::<_, AuthCredentials>(
            "SELECT id, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_credentials error: {:?}", e);
            None
        })
    }

    /// create_user
    ///
    /// Inserts the identity row. `ON CONFLICT DO NOTHING` turns a duplicate
    /// email into `None` instead of a database error, which the handler maps
    /// to a structured failure message.
    async fn create_user(&self, req: RegisterRequest, password_hash: String) -> Option<User> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (id, name, email, role, password_hash, skills, created_at) \
             VALUES ($1, $2, $3, $4, $5, '{{}}', NOW()) \
             ON CONFLICT (email) DO NOTHING \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.name)
        .bind(req.email)
        .bind(req.role)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("create_user error: {:?}", e);
            None
        })
    }

    /// update_user
    ///
    /// Partial profile update using COALESCE so only provided fields change.
    /// The WHERE clause is the **self-only** authorization check: the handler
    /// passes the authenticated id, never a path parameter it didn't verify.
    async fn update_user(&self, id: Uuid, req: UpdateUserRequest) -> Option<User> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users \
             SET name = COALESCE($2, name), \
                 bio = COALESCE($3, bio), \
                 location = COALESCE($4, location), \
                 skills = COALESCE($5, skills), \
                 company_description = COALESCE($6, company_description), \
                 website = COALESCE($7, website), \
                 avatar = COALESCE($8, avatar) \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(req.name)
        .bind(req.bio)
        .bind(req.location)
        .bind(req.skills)
        .bind(req.company_description)
        .bind(req.website)
        .bind(req.avatar)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_user error: {:?}", e);
            None
        })
    }

    /// get_companies
    ///
    /// The public company directory.
    async fn get_companies(&self) -> Vec<User> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = 'company' ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_companies error: {:?}", e);
            vec![]
        })
    }

    /// get_all_users
    ///
    /// Administrative listing. **Note**: no role restriction here; the
    /// handler enforces the admin check before calling.
    async fn get_all_users(&self) -> Vec<User> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_all_users error: {:?}", e);
            vec![]
        })
    }

    // --- JOB POSTINGS ---

    /// get_visible_jobs
    ///
    /// **Security**: strictly enforces `status = 'active'` in the base query,
    /// so drafts and closed postings never leak to anonymous browsing. The
    /// in-memory filter engine narrows this set further per request.
    async fn get_visible_jobs(&self) -> Vec<JobPosting> {
        sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j \
             JOIN users u ON j.company_id = u.id \
             WHERE j.status = 'active' \
             ORDER BY j.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_visible_jobs error: {:?}", e);
            vec![]
        })
    }

    /// get_all_jobs
    ///
    /// Administrative function to retrieve all postings regardless of status.
    async fn get_all_jobs(&self) -> Vec<JobPosting> {
        sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j \
             JOIN users u ON j.company_id = u.id \
             ORDER BY j.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_all_jobs error: {:?}", e);
            vec![]
        })
    }

    /// get_job
    ///
    /// Retrieval of any posting by ID (no visibility check). For callers that
    /// have already established authorization (owner or admin paths).
    async fn get_job(&self, id: Uuid) -> Option<JobPosting> {
        sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j \
             JOIN users u ON j.company_id = u.id \
             WHERE j.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_job error: {:?}", e);
            None
        })
    }

    /// get_active_job
    ///
    /// Retrieves a posting *only* if it is active. Used by the public detail handler.
    async fn get_active_job(&self, id: Uuid) -> Option<JobPosting> {
        sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j \
             JOIN users u ON j.company_id = u.id \
             WHERE j.id = $1 AND j.status = 'active'"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_active_job error: {:?}", e);
            None
        })
    }

    /// get_jobs_by_company
    ///
    /// All postings owned by one company, including drafts and closed ones.
    async fn get_jobs_by_company(&self, company_id: Uuid) -> Vec<JobPosting> {
        sqlx::query_as::<_, JobPosting>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs j \
             JOIN users u ON j.company_id = u.id \
             WHERE j.company_id = $1 \
             ORDER BY j.created_at DESC"
        ))
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_jobs_by_company error: {:?}", e);
            vec![]
        })
    }

    /// create_job
    ///
    /// Inserts a new posting. Status defaults to `Active` when the request
    /// omits it, matching the posting form's default.
    async fn create_job(&self, req: CreateJobRequest, company_id: Uuid) -> Option<JobPosting> {
        let status = req.status.unwrap_or(JobStatus::Active);
        let new_id = Uuid::new_v4();
        let inserted = sqlx::query(
            "INSERT INTO jobs (id, company_id, title, description, location, job_type, \
             experience_level, skills, requirements, status, salary_min, salary_max, \
             salary_currency, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW(), NOW())",
        )
        .bind(new_id)
        .bind(company_id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.location)
        .bind(req.job_type)
        .bind(req.experience_level)
        .bind(req.skills)
        .bind(req.requirements)
        .bind(status)
        .bind(req.salary_min)
        .bind(req.salary_max)
        .bind(req.salary_currency)
        .execute(&self.pool)
        .await;

        match inserted {
            // Re-read through the JOIN so the response carries company_name.
            Ok(_) => self.get_job(new_id).await,
            Err(e) => {
                tracing::error!("create_job error: {:?}", e);
                None
            }
        }
    }

    /// update_job
    ///
    /// Updates a posting only if the provided `company_id` matches the owner.
    /// Uses the PostgreSQL `COALESCE` function to efficiently handle `Option<T>` fields,
    /// only updating a column if the corresponding field in `req` is `Some`.
    async fn update_job(
        &self,
        id: Uuid,
        company_id: Uuid,
        req: UpdateJobRequest,
    ) -> Option<JobPosting> {
        let updated = sqlx::query(
            "UPDATE jobs \
             SET title = COALESCE($3, title), \
                 description = COALESCE($4, description), \
                 location = COALESCE($5, location), \
                 job_type = COALESCE($6, job_type), \
                 experience_level = COALESCE($7, experience_level), \
                 skills = COALESCE($8, skills), \
                 requirements = COALESCE($9, requirements), \
                 status = COALESCE($10, status), \
                 salary_min = COALESCE($11, salary_min), \
                 salary_max = COALESCE($12, salary_max), \
                 salary_currency = COALESCE($13, salary_currency), \
                 updated_at = NOW() \
             WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.location)
        .bind(req.job_type)
        .bind(req.experience_level)
        .bind(req.skills)
        .bind(req.requirements)
        .bind(req.status)
        .bind(req.salary_min)
        .bind(req.salary_max)
        .bind(req.salary_currency)
        .execute(&self.pool)
        .await;

        match updated {
            Ok(res) if res.rows_affected() > 0 => self.get_job(id).await,
            Ok(_) => None,
            Err(e) => {
                tracing::error!("update_job error: {:?}", e);
                None
            }
        }
    }

    /// delete_job
    ///
    /// Deletes a posting only if the provided `company_id` matches the owner.
    /// This is the **Owner-Only** authorization check.
    async fn delete_job(&self, id: Uuid, company_id: Uuid) -> bool {
        match sqlx::query("DELETE FROM jobs WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_job error: {:?}", e);
                false
            }
        }
    }

    /// delete_job_admin
    ///
    /// **Admin Override**: deletes a posting without checking ownership.
    async fn delete_job_admin(&self, id: Uuid) -> bool {
        match sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_job_admin error: {:?}", e);
                false
            }
        }
    }

    // --- APPLICATIONS ---

    /// create_application
    ///
    /// Inserts an application. Uses `ON CONFLICT DO NOTHING` against the
    /// (job_id, developer_id) unique constraint to ensure **idempotency**:
    /// the function returns `Some` only if a new row was inserted, and the
    /// handler maps `None` to 409 Conflict.
    async fn create_application(
        &self,
        req: CreateApplicationRequest,
        developer_id: Uuid,
    ) -> Option<Application> {
        sqlx::query_as::<_, Application>(&format!(
            "INSERT INTO applications (id, job_id, developer_id, cover_letter, resume_link, \
             status, created_at) \
             VALUES ($1, $2, $3, $4, $5, 'pending', NOW()) \
             ON CONFLICT (job_id, developer_id) DO NOTHING \
             RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(req.job_id)
        .bind(developer_id)
        .bind(req.cover_letter)
        .bind(req.resume_link)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("create_application error: {:?}", e);
            None
        })
    }

    /// get_applications_by_developer
    ///
    /// The developer's own applications, enriched with the posting title and
    /// company name via JOINs.
    async fn get_applications_by_developer(&self, developer_id: Uuid) -> Vec<ApplicationResponse> {
        sqlx::query_as::<_, ApplicationResponse>(
            "SELECT a.id, a.job_id, a.developer_id, j.title AS job_title, \
                    c.name AS company_name, d.name AS developer_name, \
                    a.cover_letter, a.resume_link, a.status, a.created_at \
             FROM applications a \
             JOIN jobs j ON a.job_id = j.id \
             JOIN users c ON j.company_id = c.id \
             JOIN users d ON a.developer_id = d.id \
             WHERE a.developer_id = $1 \
             ORDER BY a.created_at DESC",
        )
        .bind(developer_id)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_applications_by_developer error: {:?}", e);
            vec![]
        })
    }

    /// get_applications_for_job
    ///
    /// All applications received by one posting. **Note**: the job-ownership
    /// check happens in the handler before this is called.
    async fn get_applications_for_job(&self, job_id: Uuid) -> Vec<ApplicationResponse> {
        sqlx::query_as::<_, ApplicationResponse>(
            "SELECT a.id, a.job_id, a.developer_id, j.title AS job_title, \
                    c.name AS company_name, d.name AS developer_name, \
                    a.cover_letter, a.resume_link, a.status, a.created_at \
             FROM applications a \
             JOIN jobs j ON a.job_id = j.id \
             JOIN users c ON j.company_id = c.id \
             JOIN users d ON a.developer_id = d.id \
             WHERE a.job_id = $1 \
             ORDER BY a.created_at ASC",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_applications_for_job error: {:?}", e);
            vec![]
        })
    }

    /// set_application_status
    ///
    /// Status mutation with the ownership check folded into the statement:
    /// the UPDATE joins through the posting and only fires when the caller's
    /// company owns it.
    async fn set_application_status(
        &self,
        id: Uuid,
        company_id: Uuid,
        status: ApplicationStatus,
    ) -> Option<Application> {
        sqlx::query_as::<_, Application>(
            "UPDATE applications a \
             SET status = $3 \
             FROM jobs j \
             WHERE a.id = $1 AND a.job_id = j.id AND j.company_id = $2 \
             RETURNING a.id, a.job_id, a.developer_id, a.cover_letter, a.resume_link, \
                       a.status, a.created_at",
        )
        .bind(id)
        .bind(company_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("set_application_status error: {:?}", e);
            None
        })
    }

    /// delete_application
    ///
    /// Withdrawal: deletes only if the developer owns the application.
    async fn delete_application(&self, id: Uuid, developer_id: Uuid) -> bool {
        match sqlx::query("DELETE FROM applications WHERE id = $1 AND developer_id = $2")
            .bind(id)
            .bind(developer_id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_application error: {:?}", e);
                false
            }
        }
    }

    // --- PORTFOLIOS ---

    /// get_portfolio
    ///
    /// Assembles one developer's portfolio from the owner row plus their
    /// project rows. `None` if the user does not exist or is not a developer.
    async fn get_portfolio(&self, developer_id: Uuid) -> Option<Portfolio> {
        let owner = self.get_user(developer_id).await?;
        if owner.role != Role::Developer {
            return None;
        }

        let projects = sqlx::query_as::<_, PortfolioProject>(
            "SELECT id, developer_id, title, description, technologies, github_link, \
                    live_demo, created_at \
             FROM portfolio_projects \
             WHERE developer_id = $1 \
             ORDER BY created_at ASC",
        )
        .bind(developer_id)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_portfolio error: {:?}", e);
            vec![]
        });

        Some(Portfolio {
            developer_id,
            developer_name: owner.name,
            projects,
        })
    }

    /// get_portfolios
    ///
    /// The public portfolio gallery: every developer with at least one
    /// project. Two set queries assembled in memory, instead of a query per
    /// developer.
    async fn get_portfolios(&self) -> Vec<Portfolio> {
        let projects = sqlx::query_as::<_, PortfolioProject>(
            "SELECT id, developer_id, title, description, technologies, github_link, \
                    live_demo, created_at \
             FROM portfolio_projects \
             ORDER BY developer_id, created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_portfolios projects error: {:?}", e);
            vec![]
        });

        let developers = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = 'developer' ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_portfolios developers error: {:?}", e);
            vec![]
        });

        let mut by_owner: HashMap<Uuid, Vec<PortfolioProject>> = HashMap::new();
        for project in projects {
            by_owner.entry(project.developer_id).or_default().push(project);
        }

        developers
            .into_iter()
            .filter_map(|dev| {
                by_owner.remove(&dev.id).map(|projects| Portfolio {
                    developer_id: dev.id,
                    developer_name: dev.name,
                    projects,
                })
            })
            .collect()
    }

    /// add_portfolio_project
    async fn add_portfolio_project(
        &self,
        developer_id: Uuid,
        req: UpsertPortfolioProjectRequest,
    ) -> Option<PortfolioProject> {
        sqlx::query_as::<_, PortfolioProject>(
            "INSERT INTO portfolio_projects (id, developer_id, title, description, \
             technologies, github_link, live_demo, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW()) \
             RETURNING id, developer_id, title, description, technologies, github_link, \
                       live_demo, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(developer_id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.technologies)
        .bind(req.github_link)
        .bind(req.live_demo)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("add_portfolio_project error: {:?}", e);
            None
        })
    }

    /// update_portfolio_project
    ///
    /// **Owner-Only**: the WHERE clause requires the authenticated developer.
    async fn update_portfolio_project(
        &self,
        id: Uuid,
        developer_id: Uuid,
        req: UpsertPortfolioProjectRequest,
    ) -> Option<PortfolioProject> {
        sqlx::query_as::<_, PortfolioProject>(
            "UPDATE portfolio_projects \
             SET title = $3, description = $4, technologies = $5, github_link = $6, \
                 live_demo = $7 \
             WHERE id = $1 AND developer_id = $2 \
             RETURNING id, developer_id, title, description, technologies, github_link, \
                       live_demo, created_at",
        )
        .bind(id)
        .bind(developer_id)
        .bind(req.title)
        .bind(req.description)
        .bind(req.technologies)
        .bind(req.github_link)
        .bind(req.live_demo)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_portfolio_project error: {:?}", e);
            None
        })
    }

    /// delete_portfolio_project
    async fn delete_portfolio_project(&self, id: Uuid, developer_id: Uuid) -> bool {
        match sqlx::query("DELETE FROM portfolio_projects WHERE id = $1 AND developer_id = $2")
            .bind(id)
            .bind(developer_id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_portfolio_project error: {:?}", e);
                false
            }
        }
    }

    // --- ADMIN ---

    /// get_stats
    ///
    /// Compiles all necessary counters for the administrative dashboard in a single call.
    async fn get_stats(&self) -> AdminDashboardStats {
        let total_users = count(&self.pool, "SELECT COUNT(*) FROM users").await;
        let total_jobs = count(&self.pool, "SELECT COUNT(*) FROM jobs").await;
        let total_applications = count(&self.pool, "SELECT COUNT(*) FROM applications").await;
        let open_positions =
            count(&self.pool, "SELECT COUNT(*) FROM jobs WHERE status = 'active'").await;
        AdminDashboardStats {
            total_users,
            total_jobs,
            total_applications,
            open_positions,
        }
    }
}

/// Scalar COUNT helper: errors degrade to zero, consistent with the
/// error→log→degrade convention used across the repository.
async fn count(pool: &PgPool, sql: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(sql)
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("count error: {:?}", e);
            0
        })
}
