use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::{CustomField, ProjectId, UnitId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSizeUnit {
    Sqft,
    Sqm,
    Custom,
}

impl UnitSizeUnit {
    pub const fn ordered() -> [Self; 3] {
        [Self::Sqft, Self::Sqm, Self::Custom]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sqft => "sqft",
            Self::Sqm => "sqm",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitAvailabilityStatus {
    Available,
    Reserved,
    Sold,
    Blocked,
}

impl UnitAvailabilityStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Available, Self::Reserved, Self::Sold, Self::Blocked]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
            Self::Blocked => "blocked",
        }
    }

    /// Sold or reserved units carry buyer obligations and therefore invoices.
    pub const fn is_committed(self) -> bool {
        matches!(self, Self::Sold | Self::Reserved)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitView {
    CityView,
    SeaView,
    GardenView,
    PoolView,
    PartialSeaView,
}

impl UnitView {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::CityView,
            Self::SeaView,
            Self::GardenView,
            Self::PoolView,
            Self::PartialSeaView,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CityView => "City View",
            Self::SeaView => "Sea View",
            Self::GardenView => "Garden View",
            Self::PoolView => "Pool View",
            Self::PartialSeaView => "Partial Sea View",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Orientation {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::North,
            Self::South,
            Self::East,
            Self::West,
            Self::NorthEast,
            Self::NorthWest,
            Self::SouthEast,
            Self::SouthWest,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::NorthEast => "North-East",
            Self::NorthWest => "North-West",
            Self::SouthEast => "South-East",
            Self::SouthWest => "South-West",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeStatus {
    Requested,
    Approved,
    Installed,
    Rejected,
}

impl UpgradeStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Requested,
            Self::Approved,
            Self::Installed,
            Self::Rejected,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::Approved => "Approved",
            Self::Installed => "Installed",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestedUpgrade {
    pub upgrade_name: String,
    pub cost: u64,
    pub status: UpgradeStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaBreakdownItem {
    pub room_name: String,
    pub area_sqft: u32,
}

/// Punctuality metrics derived from a committed unit's invoice history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAdherenceMetrics {
    pub average_days_overdue: f64,
    pub on_time_payment_percentage: f64,
    pub total_installments: usize,
    pub overdue_installments: usize,
    pub next_payment_due_date: Option<NaiveDate>,
    pub last_payment_amount: Option<f64>,
    pub last_payment_date: Option<NaiveDate>,
}

/// Baseline attributes shown by the inventory manager's unit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDetailsSchema {
    pub size: u32,
    pub size_unit: UnitSizeUnit,
    pub view: Option<UnitView>,
    pub bedrooms: Option<u32>,
    pub initial_price: u64,
    pub availability_status: UnitAvailabilityStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulatedUnitDetail {
    pub id: UnitId,
    pub unit_number: String,
    pub project_id: ProjectId,
    /// Display copy of the owning project's name; joins go through `project_id`.
    pub project_name: String,
    pub floor: Option<u32>,
    pub size: u32,
    pub size_unit: UnitSizeUnit,
    pub view: Option<UnitView>,
    pub bedrooms: Option<u32>,
    pub initial_price: u64,
    pub current_price: u64,
    pub availability_status: UnitAvailabilityStatus,
    pub unit_features: Vec<String>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub floor_plan_url: String,
    pub selected_finishes_package: Option<String>,
    pub requested_upgrades: Vec<RequestedUpgrade>,
    pub customization_notes: Option<String>,
    pub floor_plan_version: Option<String>,
    pub floor_plan_last_revised_date: Option<NaiveDate>,
    pub area_breakdown: Vec<AreaBreakdownItem>,
    pub orientation: Option<Orientation>,
    pub custom_fields: Vec<CustomField>,
    pub tags: Vec<String>,
    pub payment_adherence: Option<PaymentAdherenceMetrics>,
}

impl PopulatedUnitDetail {
    pub fn is_sold(&self) -> bool {
        self.availability_status == UnitAvailabilityStatus::Sold
    }
}
