use crate::models::Role;
use crate::session::Session;

/// Destination
///
/// A named, abstract target in the application's navigation space. The
/// variants mirror the SPA route table one-to-one. Each destination carries
/// exactly one [`AccessPolicy`]; centralizing the table here (instead of
/// re-branching on the role inside each view) is what keeps the
/// no-redirect-loop guarantee checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Signup,
    Jobs,
    JobDetails,
    Portfolios,
    PortfolioDetails,
    Companies,
    CompanyDetails,
    Profile,
    JobApplications,
    DeveloperDashboard,
    MyApplications,
    MyPortfolio,
    CompanyDashboard,
    PostJob,
    AdminDashboard,
}

/// AccessPolicy
///
/// The access tag attached to a destination. `RoleRestricted` names the
/// allowed set explicitly; everything else is either open or merely requires
/// a login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    Public,
    AnyAuthenticated,
    RoleRestricted(&'static [Role]),
}

impl Destination {
    /// The access policy for this destination.
    ///
    /// Maintenance invariant: the home destination of a role (see
    /// [`role_home`]) must never be restricted to a role set excluding that
    /// role, or the guard would loop.
    pub fn policy(self) -> AccessPolicy {
        match self {
            Self::Home
            | Self::Login
            | Self::Signup
            | Self::Jobs
            | Self::JobDetails
            | Self::Portfolios
            | Self::PortfolioDetails
            | Self::Companies
            | Self::CompanyDetails => AccessPolicy::Public,

            Self::Profile => AccessPolicy::AnyAuthenticated,

            Self::JobApplications | Self::CompanyDashboard | Self::PostJob => {
                AccessPolicy::RoleRestricted(&[Role::Company])
            }

            Self::DeveloperDashboard | Self::MyApplications | Self::MyPortfolio => {
                AccessPolicy::RoleRestricted(&[Role::Developer])
            }

            Self::AdminDashboard => AccessPolicy::RoleRestricted(&[Role::Admin]),
        }
    }

    /// The SPA route pattern this destination renders at.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Jobs => "/jobs",
            Self::JobDetails => "/jobs/:id",
            Self::Portfolios => "/portfolios",
            Self::PortfolioDetails => "/portfolios/:userId",
            Self::Companies => "/companies",
            Self::CompanyDetails => "/companies/:companyId",
            Self::Profile => "/profile",
            Self::JobApplications => "/job-applications/:jobId",
            Self::DeveloperDashboard => "/dashboard/developer",
            Self::MyApplications => "/my-applications",
            Self::MyPortfolio => "/my-portfolio",
            Self::CompanyDashboard => "/dashboard/company",
            Self::PostJob => "/post-job",
            Self::AdminDashboard => "/dashboard/admin",
        }
    }

    /// Every destination, for exhaustive property checks.
    pub const ALL: [Destination; 17] = [
        Self::Home,
        Self::Login,
        Self::Signup,
        Self::Jobs,
        Self::JobDetails,
        Self::Portfolios,
        Self::PortfolioDetails,
        Self::Companies,
        Self::CompanyDetails,
        Self::Profile,
        Self::JobApplications,
        Self::DeveloperDashboard,
        Self::MyApplications,
        Self::MyPortfolio,
        Self::CompanyDashboard,
        Self::PostJob,
        Self::AdminDashboard,
    ];
}

/// Decision
///
/// The guard's verdict for one navigation attempt. There is no error variant:
/// every input maps to exactly one of these two outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(Destination),
}

/// role_home
///
/// Maps a role to its canonical landing destination. Deterministic, total,
/// no side effects.
pub fn role_home(role: Role) -> Destination {
    match role {
        Role::Developer => Destination::DeveloperDashboard,
        Role::Company => Destination::CompanyDashboard,
        Role::Admin => Destination::AdminDashboard,
    }
}

/// landing_for
///
/// The generic "/dashboard" redirect: an authenticated principal lands on its
/// role home, everyone else on the public home. Absence of a recognizable
/// role falls back to the public home rather than erroring.
pub fn landing_for(session: &Session) -> Destination {
    match session.principal() {
        Some(principal) => role_home(principal.role),
        None => Destination::Home,
    }
}

/// decide
///
/// Gates access to a destination for the given session. Pure: no session
/// mutation, no failure path — the only side effect is the navigation the
/// caller performs with the result.
///
/// Callers must not invoke this while the session store is still loading;
/// a session mid-restore is not anonymous, and deciding early would
/// flash-redirect a logged-in user to the login screen.
pub fn decide(destination: Destination, session: &Session) -> Decision {
    match destination.policy() {
        AccessPolicy::Public => Decision::Allow,
        AccessPolicy::AnyAuthenticated => match session.principal() {
            Some(_) => Decision::Allow,
            None => Decision::RedirectTo(Destination::Login),
        },
        AccessPolicy::RoleRestricted(roles) => match session.principal() {
            None => Decision::RedirectTo(Destination::Login),
            Some(principal) if roles.contains(&principal.role) => Decision::Allow,
            Some(principal) => Decision::RedirectTo(role_home(principal.role)),
        },
    }
}
