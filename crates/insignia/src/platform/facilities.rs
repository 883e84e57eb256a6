use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::CustomField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Hvac,
    Elevator,
    PlumbingSystem,
    ElectricalPanel,
    FireSafetySystem,
    SwimmingPoolEquipment,
    SecuritySystem,
    LandscapingFeature,
    Generator,
    WaterPump,
}

impl AssetType {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Hvac,
            Self::Elevator,
            Self::PlumbingSystem,
            Self::ElectricalPanel,
            Self::FireSafetySystem,
            Self::SwimmingPoolEquipment,
            Self::SecuritySystem,
            Self::LandscapingFeature,
            Self::Generator,
            Self::WaterPump,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hvac => "HVAC",
            Self::Elevator => "Elevator",
            Self::PlumbingSystem => "Plumbing System",
            Self::ElectricalPanel => "Electrical Panel",
            Self::FireSafetySystem => "Fire Safety System",
            Self::SwimmingPoolEquipment => "Swimming Pool Equipment",
            Self::SecuritySystem => "Security System",
            Self::LandscapingFeature => "Landscaping Feature",
            Self::Generator => "Generator",
            Self::WaterPump => "Water Pump",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Operational,
    MaintenanceDue,
    UnderRepair,
    OutOfOrder,
    ScheduledReplacement,
    Decommissioned,
}

impl AssetStatus {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Operational,
            Self::MaintenanceDue,
            Self::UnderRepair,
            Self::OutOfOrder,
            Self::ScheduledReplacement,
            Self::Decommissioned,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::MaintenanceDue => "Maintenance Due",
            Self::UnderRepair => "Under Repair",
            Self::OutOfOrder => "Out of Order",
            Self::ScheduledReplacement => "Scheduled Replacement",
            Self::Decommissioned => "Decommissioned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    Operational,
    NeedsRepair,
    Replaced,
}

impl ComponentStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Operational, Self::NeedsRepair, Self::Replaced]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::NeedsRepair => "Needs Repair",
            Self::Replaced => "Replaced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetComponent {
    pub component_id: String,
    pub name: String,
    pub serial_number: Option<String>,
    pub install_date: NaiveDate,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub last_service_date: Option<NaiveDate>,
    pub manufacturer: Option<String>,
    pub supplier: Option<String>,
    pub status: Option<ComponentStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceLogEntry {
    pub date: NaiveDate,
    pub notes: String,
    pub performed_by: String,
    pub cost: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityAsset {
    pub id: String,
    pub name: String,
    pub asset_type: AssetType,
    /// Name of the project hosting the asset.
    pub project_location: String,
    pub specific_location: Option<String>,
    pub status: AssetStatus,
    pub installation_date: NaiveDate,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_due_date: Option<NaiveDate>,
    pub assigned_technician: Option<String>,
    pub maintenance_log: Vec<MaintenanceLogEntry>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub purchase_cost: Option<u64>,
    pub operational_hours: Option<u32>,
    pub expected_lifespan_years: Option<u32>,
    pub components: Vec<AssetComponent>,
    pub custom_fields: Vec<CustomField>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
    Critical,
}

impl TaskPriority {
    pub const fn ordered() -> [Self; 4] {
        [Self::High, Self::Medium, Self::Low, Self::Critical]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceTaskType {
    Preventive,
    Corrective,
    Inspection,
    Emergency,
}

impl MaintenanceTaskType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Preventive,
            Self::Corrective,
            Self::Inspection,
            Self::Emergency,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Preventive => "Preventive",
            Self::Corrective => "Corrective",
            Self::Inspection => "Inspection",
            Self::Emergency => "Emergency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceTaskStatus {
    Pending,
    Scheduled,
    InProgress,
    OnHoldParts,
    Completed,
    Cancelled,
    RequiresFollowUp,
}

impl MaintenanceTaskStatus {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Pending,
            Self::Scheduled,
            Self::InProgress,
            Self::OnHoldParts,
            Self::Completed,
            Self::Cancelled,
            Self::RequiresFollowUp,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::OnHoldParts => "On Hold - Parts",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::RequiresFollowUp => "Requires Follow-up",
        }
    }

    /// Work still sitting in a technician's queue.
    pub const fn is_open(self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Scheduled | Self::InProgress | Self::OnHoldParts
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub id: String,
    pub facility_asset_id: String,
    pub facility_asset_name: String,
    pub task_description: String,
    pub priority: TaskPriority,
    pub task_type: Option<MaintenanceTaskType>,
    pub status: MaintenanceTaskStatus,
    pub reported_date: NaiveDate,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub assigned_to: String,
    pub notes: Option<String>,
    pub estimated_hours: Option<u32>,
    pub actual_hours: Option<u32>,
    pub labor_costs: Option<u64>,
    pub parts_cost: Option<u64>,
    pub total_cost: Option<u64>,
    pub invoice_reference: Option<String>,
    pub tools_required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub contact_number: String,
    pub email: String,
    pub specialization: Vec<String>,
    pub rating: Option<f64>,
    pub notes: Option<String>,
    pub contract_id: Option<String>,
    pub contract_expiry_date: Option<NaiveDate>,
    pub address: Option<String>,
}
