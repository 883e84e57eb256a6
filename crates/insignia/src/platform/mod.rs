//! Domain records for the development-management dashboard.
//!
//! Everything here is plain data: enums carry their display labels and the
//! structs serialize straight to the HTTP layer.

mod common;
mod facilities;
mod finance;
mod index;
mod modules;
mod progress;
mod project;
mod reporting;
mod sales;
mod unit;

pub use common::{CustomField, CustomFieldValue, ProjectId, ProjectType, UnitId};
pub use facilities::{
    AssetComponent, AssetStatus, AssetType, ComponentStatus, FacilityAsset, MaintenanceLogEntry,
    MaintenanceTask, MaintenanceTaskStatus, MaintenanceTaskType, ServiceProvider, TaskPriority,
};
pub use finance::{
    CashFlowDataPoint, CostSubCategory, DefaultCostCategory, ExpenseCategory, ExpenseItem,
    ExpensePaymentStatus, InstallmentMilestone, Invoice, InvoiceStatus, PaymentMethod,
    PaymentPlanInstallment, PaymentPlanStructure, ProjectBlueprintTemplate,
};
pub use index::{PlatformCatalog, PlatformIndex};
pub use modules::{
    FacilitiesModule, Feature, FinancialModule, GeospatialLocation, KeyChallenge, PlatformData,
    PlatformInfo, PlatformModules, ProgressComplianceModule, ProjectSetupModule, ReportingModule,
    SalesCrmModule, TargetMarket,
};
pub use progress::{
    AccessAction, ChecklistItemStatus, ComplianceItem, ComplianceStatus, Department,
    DocumentAccessLogEntry, DocumentStatus, DocumentVersion, GeoPoint, InspectionOutcome,
    InspectionType, MediaType, MediaUpload, MilestoneState, MilestoneStatus, MilestoneSubTask,
    QualityInspectionChecklistItem, QualityInspectionRecord, StoredDocument, SubTaskStatus,
};
pub use project::{
    FinancialHealth, MarketSentiment, OverviewProject, ProjectActivity, ProjectListing,
    ProjectRisk, ProjectStatus,
};
pub use reporting::{
    CashFlowStatus, CostLine, GeneratedReport, HealthIndicator, ProfitabilityData,
    ProjectHealthMetric, ReportAudience, ReportFormat, ReportStatus, ReportType, RevenueLine,
    RiskLevel,
};
pub use sales::{
    AutomatedCommunicationLog, Broker, BrokerStatus, BudgetRange, CommunicationChannel,
    CommunicationType, ContactMethod, DeliveryStatus, InteractionType, Lead, LeadInteraction,
    LeadSource, LeadStatus, ReservationStatus, UnitReservation, UnitViewing, ViewingOutcome,
};
pub use unit::{
    AreaBreakdownItem, Orientation, PaymentAdherenceMetrics, PopulatedUnitDetail,
    RequestedUpgrade, UnitAvailabilityStatus, UnitDetailsSchema, UnitSizeUnit, UnitView,
    UpgradeStatus,
};
