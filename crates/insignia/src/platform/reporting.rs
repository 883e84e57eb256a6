use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::ProjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashFlowStatus {
    Positive,
    Neutral,
    Negative,
}

impl CashFlowStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Positive, Self::Neutral, Self::Negative]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthIndicator {
    Green,
    Amber,
    Red,
}

impl HealthIndicator {
    pub const fn ordered() -> [Self; 3] {
        [Self::Green, Self::Amber, Self::Red]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Amber => "Amber",
            Self::Red => "Red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectHealthMetric {
    pub id: ProjectId,
    pub project_name: String,
    pub units_sold: usize,
    pub total_units: usize,
    pub revenue_collected: u64,
    pub target_revenue: u64,
    pub budget_spent: f64,
    pub total_budget: f64,
    pub completion_percentage: u32,
    pub cash_flow_status: CashFlowStatus,
    pub overdue_payments_count: u32,
    pub health_indicator: HealthIndicator,
    pub risk_level: Option<RiskLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueLine {
    pub source: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityData {
    pub project_id: ProjectId,
    pub project_name: String,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub gross_profit: f64,
    pub net_profit: f64,
    pub roi_percentage: f64,
    pub period: String,
    pub revenue_breakdown: Vec<RevenueLine>,
    pub cost_breakdown: Vec<CostLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    ProjectProgress,
    FinancialPerformance,
    UnitSalesSummary,
    InvestorUpdate,
    ComplianceAudit,
}

impl ReportType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ProjectProgress,
            Self::FinancialPerformance,
            Self::UnitSalesSummary,
            Self::InvestorUpdate,
            Self::ComplianceAudit,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProjectProgress => "Project Progress",
            Self::FinancialPerformance => "Financial Performance",
            Self::UnitSalesSummary => "Unit Sales Summary",
            Self::InvestorUpdate => "Investor Update",
            Self::ComplianceAudit => "Compliance Audit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportAudience {
    InvestorGroupA,
    BankXyz,
    InternalManagement,
    RegulatoryBody,
}

impl ReportAudience {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::InvestorGroupA,
            Self::BankXyz,
            Self::InternalManagement,
            Self::RegulatoryBody,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InvestorGroupA => "Investor Group A",
            Self::BankXyz => "Bank XYZ",
            Self::InternalManagement => "Internal Management",
            Self::RegulatoryBody => "Regulatory Body",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Draft,
    Finalized,
    Sent,
    Archived,
}

impl ReportStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Draft, Self::Finalized, Self::Sent, Self::Archived]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Finalized => "Finalized",
            Self::Sent => "Sent",
            Self::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Pdf,
    Excel,
    DashboardSnapshot,
}

impl ReportFormat {
    pub const fn ordered() -> [Self; 3] {
        [Self::Pdf, Self::Excel, Self::DashboardSnapshot]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Excel => "Excel",
            Self::DashboardSnapshot => "Dashboard Snapshot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub id: String,
    pub report_name: String,
    pub report_type: ReportType,
    pub generated_for: ReportAudience,
    pub generation_date: NaiveDate,
    pub period_covered: String,
    pub status: ReportStatus,
    pub format: Option<ReportFormat>,
}
