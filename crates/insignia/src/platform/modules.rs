use serde::{Deserialize, Serialize};

use super::facilities::{FacilityAsset, MaintenanceTask, ServiceProvider};
use super::finance::{
    CashFlowDataPoint, ExpenseItem, Invoice, PaymentPlanStructure, ProjectBlueprintTemplate,
};
use super::progress::{
    ComplianceItem, MediaUpload, MilestoneStatus, QualityInspectionRecord, StoredDocument,
};
use super::project::OverviewProject;
use super::reporting::{GeneratedReport, ProfitabilityData, ProjectHealthMetric};
use super::sales::{AutomatedCommunicationLog, Broker, Lead, UnitReservation, UnitViewing};
use super::unit::{PopulatedUnitDetail, UnitDetailsSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetMarket {
    pub segment: String,
    pub industry: String,
    pub project_value: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChallenge {
    pub challenge: String,
    pub description: String,
}

/// Static positioning copy shown on the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub name: String,
    pub target_market: TargetMarket,
    pub core_philosophy: Vec<String>,
    pub key_challenges: Vec<KeyChallenge>,
}

/// One dashboard feature: descriptive copy plus the sample records it renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<T> {
    pub name: String,
    pub description: Option<String>,
    pub capabilities: Vec<String>,
    pub benefits: Vec<String>,
    /// Domain vocabulary the feature advertises, such as milestone names,
    /// document types, report types, or cash-flow sources.
    pub catalog: Vec<String>,
    pub samples: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeospatialLocation {
    pub name: String,
    pub lat: f64,
    pub long: f64,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSetupModule {
    pub module_name: String,
    pub blueprint_templates: Feature<ProjectBlueprintTemplate>,
    pub unit_inventory: Feature<PopulatedUnitDetail>,
    /// Default values offered when a unit is added by hand.
    pub unit_details: UnitDetailsSchema,
    pub geospatial: Feature<GeospatialLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialModule {
    pub module_name: String,
    pub payment_plans: Feature<PaymentPlanStructure>,
    pub cash_flow: Feature<CashFlowDataPoint>,
    pub invoices: Feature<Invoice>,
    pub budget_vs_actuals: Feature<ExpenseItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesCrmModule {
    pub module_name: String,
    pub leads: Feature<Lead>,
    pub reservations: Feature<UnitReservation>,
    pub brokers: Feature<Broker>,
    pub communications: Feature<AutomatedCommunicationLog>,
    pub viewings: Feature<UnitViewing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressComplianceModule {
    pub module_name: String,
    pub milestones: Feature<MilestoneStatus>,
    pub media_uploads: Feature<MediaUpload>,
    pub compliance: Feature<ComplianceItem>,
    pub documents: Feature<StoredDocument>,
    pub quality_inspections: Feature<QualityInspectionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingModule {
    pub module_name: String,
    pub project_health: Feature<ProjectHealthMetric>,
    pub profitability: Feature<ProfitabilityData>,
    pub reports: Feature<GeneratedReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilitiesModule {
    pub module_name: String,
    pub assets: Feature<FacilityAsset>,
    pub maintenance: Feature<MaintenanceTask>,
    pub service_providers: Feature<ServiceProvider>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformModules {
    pub project_property_setup: ProjectSetupModule,
    pub financial_payment_plan: FinancialModule,
    pub sales_crm: SalesCrmModule,
    pub project_progress_compliance: ProgressComplianceModule,
    pub reporting_decision_support: ReportingModule,
    pub facilities_management: FacilitiesModule,
}

/// The whole in-memory dataset. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformData {
    pub platform: PlatformInfo,
    pub modules: PlatformModules,
    pub overall_projects: Vec<OverviewProject>,
}

impl PlatformData {
    pub fn units(&self) -> impl Iterator<Item = &PopulatedUnitDetail> {
        self.overall_projects
            .iter()
            .flat_map(|project| project.units.iter())
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.modules.financial_payment_plan.invoices.samples
    }
}
