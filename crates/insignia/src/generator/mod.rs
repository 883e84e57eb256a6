//! Seedable synthetic dataset for the dashboard.
//!
//! Every generator draws from an explicit [`Sampler`], so a fixed seed and
//! reference date reproduce the dataset byte for byte.

mod adherence;
mod facilities;
mod finance;
mod fixtures;
mod orchestrator;
mod progress;
mod projects;
mod random;
mod reporting;
mod sales;
mod shared;
mod units;

use chrono::NaiveDate;
use thiserror::Error;

pub use adherence::calculate_payment_adherence;
pub use finance::{cost_sub_categories, default_cost_categories, payment_plan_structures};
pub use orchestrator::generate_platform_data;
pub use progress::document_versions;
pub use random::{RandomSource, Sampler, SeededRandom};

/// Upper bound on generated projects; one per fixture name.
pub const MAX_PROJECTS: usize = fixtures::PROJECT_NAMES.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub project_count: usize,
    /// "Today" for adherence, upload timestamps and reporting periods.
    pub reference_date: NaiveDate,
}

impl GenerationOptions {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            project_count: MAX_PROJECTS,
            reference_date,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("project count {requested} is outside 1..={max}")]
    InvalidProjectCount { requested: usize, max: usize },
    #[error("no candidates available for {0}")]
    EmptyPool(&'static str),
}
