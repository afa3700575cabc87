use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ExperienceLevel, JobPosting, JobType};

/// JobFilter
///
/// The filter specification applied to an in-memory job posting collection.
/// Every field is optional; an absent or blank field means "predicate not
/// applied" for that dimension. Supplied predicates are ANDed. Malformed
/// values never error — the HTTP boundary parses leniently and drops
/// anything it does not recognize (see [`JobFilterParams`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFilter {
    /// Case-insensitive containment match on title, description, or company name.
    pub search: Option<String>,
    /// Case-insensitive containment match on the posting location.
    pub location: Option<String>,
    /// Exact match on the engagement model.
    pub job_type: Option<JobType>,
    /// Exact match on the experience level.
    pub experience_level: Option<ExperienceLevel>,
    /// Case-insensitive equality with any of the posting's skill tags.
    pub skill: Option<String>,
}

impl JobFilter {
    /// True when the posting satisfies every supplied predicate.
    pub fn matches(&self, job: &JobPosting) -> bool {
        if let Some(needle) = non_blank(&self.search) {
            let needle = needle.to_lowercase();
            let hit = job.title.to_lowercase().contains(&needle)
                || job.description.to_lowercase().contains(&needle)
                || job.company_name.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(location) = non_blank(&self.location) {
            if !job
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if let Some(job_type) = self.job_type {
            if job.job_type != job_type {
                return false;
            }
        }

        if let Some(level) = self.experience_level {
            if job.experience_level != level {
                return false;
            }
        }

        if let Some(skill) = non_blank(&self.skill) {
            if !job.skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
                return false;
            }
        }

        true
    }
}

/// Treats empty and whitespace-only strings as absent predicates.
fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// filter_jobs
///
/// Returns the subset of `jobs` matching every supplied predicate, in the
/// input collection's order (stable filter, not a sort). Pure and
/// synchronous: applying the same specification twice yields the same
/// result in the same order.
pub fn filter_jobs(jobs: &[JobPosting], filter: &JobFilter) -> Vec<JobPosting> {
    jobs.iter()
        .filter(|job| filter.matches(job))
        .cloned()
        .collect()
}

/// partition_by_company
///
/// Splits a posting collection into the given company's own postings and the
/// remainder, preserving relative order within each half. Used by the jobs
/// listing for company principals ("your posted jobs" vs "jobs from other
/// companies").
pub fn partition_by_company(
    jobs: Vec<JobPosting>,
    company_id: Uuid,
) -> (Vec<JobPosting>, Vec<JobPosting>) {
    jobs.into_iter()
        .partition(|job| job.company_id == company_id)
}

/// JobFilterParams
///
/// The HTTP-boundary shape of [`JobFilter`]: every dimension arrives as an
/// optional string so that a malformed enum value degrades to "predicate
/// absent" instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
pub struct JobFilterParams {
    /// Free-text search over title, description, and company name.
    pub search: Option<String>,
    /// Location substring.
    pub location: Option<String>,
    /// One of: full-time, part-time, contract, internship.
    pub job_type: Option<String>,
    /// One of: entry, mid, senior, lead.
    pub experience_level: Option<String>,
    /// A single skill tag.
    pub skill: Option<String>,
}

impl JobFilterParams {
    /// Lenient conversion into the engine's typed filter. Unrecognized enum
    /// spellings are dropped, never an error.
    pub fn into_filter(self) -> JobFilter {
        JobFilter {
            search: self.search,
            location: self.location,
            job_type: self.job_type.as_deref().and_then(JobType::parse),
            experience_level: self
                .experience_level
                .as_deref()
                .and_then(ExperienceLevel::parse),
            skill: self.skill,
        }
    }
}
