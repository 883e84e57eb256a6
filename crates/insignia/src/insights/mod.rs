//! Read-only analytics over a generated [`PlatformData`](crate::platform::PlatformData).

pub mod forecast;
pub mod portfolio;
pub mod search;
pub mod technicians;

pub use forecast::{forecast, ScenarioForecast, ScenarioInputs};
pub use portfolio::{summarize, PortfolioSummary};
pub use search::{search_platform, SearchResults, SearchTerm, Searchable};
pub use technicians::{technician_performance, TechnicianPerformance};
