use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{CustomField, ProjectId, ProjectType};
use super::unit::{PopulatedUnitDetail, UnitAvailabilityStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    PreLaunch,
    Construction,
    SalesPhase,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Planning,
            Self::PreLaunch,
            Self::Construction,
            Self::SalesPhase,
            Self::Completed,
            Self::OnHold,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::PreLaunch => "Pre-Launch",
            Self::Construction => "Construction",
            Self::SalesPhase => "Sales Phase",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }

    /// Projects that still consume attention on the portfolio overview.
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Completed | Self::OnHold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialHealth {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl FinancialHealth {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Excellent,
            Self::Good,
            Self::Fair,
            Self::Poor,
            Self::Critical,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketSentiment {
    Positive,
    Neutral,
    Cautious,
    Negative,
    Volatile,
}

impl MarketSentiment {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Positive,
            Self::Neutral,
            Self::Cautious,
            Self::Negative,
            Self::Volatile,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Cautious => "Cautious",
            Self::Negative => "Negative",
            Self::Volatile => "Volatile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectRisk {
    SupplyChainDelay,
    RegulatoryApprovalPending,
    MarketFluctuation,
    ContractorPerformance,
    UnexpectedSiteConditions,
}

impl ProjectRisk {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::SupplyChainDelay,
            Self::RegulatoryApprovalPending,
            Self::MarketFluctuation,
            Self::ContractorPerformance,
            Self::UnexpectedSiteConditions,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SupplyChainDelay => "Supply Chain Delay",
            Self::RegulatoryApprovalPending => "Regulatory Approval Pending",
            Self::MarketFluctuation => "Market Fluctuation",
            Self::ContractorPerformance => "Contractor Performance",
            Self::UnexpectedSiteConditions => "Unexpected Site Conditions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectActivity {
    pub date: NaiveDate,
    pub activity: String,
    pub user: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewProject {
    pub id: ProjectId,
    pub name: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub overall_progress: u32,
    /// Percentage of budget spent, kept within `[10, 150]`.
    pub budget_utilization: u32,
    pub estimated_completion_date: NaiveDate,
    /// Always equals the number of sold entries in `units`.
    pub units_sold: usize,
    pub total_units: usize,
    pub key_risks: Vec<ProjectRisk>,
    pub financial_health: FinancialHealth,
    pub thumbnail_url: String,
    pub units: Vec<PopulatedUnitDetail>,
    pub recent_activity: Vec<ProjectActivity>,
    pub market_sentiment: Option<MarketSentiment>,
    pub custom_fields: Vec<CustomField>,
    pub tags: Vec<String>,
}

impl OverviewProject {
    /// Sum of current unit prices.
    pub fn current_value(&self) -> f64 {
        self.units.iter().map(|unit| unit.current_price as f64).sum()
    }

    /// Sum of initial unit prices, the dashboard's stand-in for the project budget.
    pub fn initial_value(&self) -> f64 {
        self.units.iter().map(|unit| unit.initial_price as f64).sum()
    }

    pub fn units_with_status(&self, status: UnitAvailabilityStatus) -> usize {
        self.units
            .iter()
            .filter(|unit| unit.availability_status == status)
            .count()
    }

    pub fn listing(&self) -> ProjectListing {
        ProjectListing {
            id: self.id.clone(),
            name: self.name.clone(),
            project_type: self.project_type,
            type_label: self.project_type.label(),
            status: self.status,
            status_label: self.status.label(),
            overall_progress: self.overall_progress,
            budget_utilization: self.budget_utilization,
            units_sold: self.units_sold,
            total_units: self.total_units,
            financial_health_label: self.financial_health.label(),
            estimated_completion_date: self.estimated_completion_date,
        }
    }
}

/// Compact project row without the unit inventory.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListing {
    pub id: ProjectId,
    pub name: String,
    pub project_type: ProjectType,
    pub type_label: &'static str,
    pub status: ProjectStatus,
    pub status_label: &'static str,
    pub overall_progress: u32,
    pub budget_utilization: u32,
    pub units_sold: usize,
    pub total_units: usize,
    pub financial_health_label: &'static str,
    pub estimated_completion_date: NaiveDate,
}
