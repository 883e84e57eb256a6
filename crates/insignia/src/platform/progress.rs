use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::common::UnitId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTaskStatus {
    Pending,
    InProgress,
    Completed,
    Blocked,
    Deferred,
}

impl SubTaskStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Pending,
            Self::InProgress,
            Self::Completed,
            Self::Blocked,
            Self::Deferred,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Blocked => "Blocked",
            Self::Deferred => "Deferred",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneSubTask {
    pub id: String,
    pub name: String,
    pub status: SubTaskStatus,
    pub assigned_to: String,
    pub due_date: Option<NaiveDate>,
    pub progress_percentage: u32,
    pub start_date: Option<NaiveDate>,
    pub actual_end_date: Option<NaiveDate>,
    pub blockers: Vec<String>,
    pub depends_on_tasks: Vec<String>,
    pub estimated_hours: Option<u32>,
    pub actual_hours: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneState {
    Pending,
    InProgress,
    Completed,
    Delayed,
    AtRisk,
}

impl MilestoneState {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Pending,
            Self::InProgress,
            Self::Completed,
            Self::Delayed,
            Self::AtRisk,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Delayed => "Delayed",
            Self::AtRisk => "At Risk",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneStatus {
    pub milestone_name: String,
    pub project: String,
    pub defined_date: NaiveDate,
    pub completion_date: Option<NaiveDate>,
    pub status: MilestoneState,
    pub linked_to_payment: bool,
    pub progress_percentage: u32,
    pub sub_tasks: Vec<MilestoneSubTask>,
    pub issues_or_blockers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Photo,
    Video,
    DocumentScan,
    Tour360,
    DroneFootage,
}

impl MediaType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Photo,
            Self::Video,
            Self::DocumentScan,
            Self::Tour360,
            Self::DroneFootage,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Photo => "Photo",
            Self::Video => "Video",
            Self::DocumentScan => "Document Scan",
            Self::Tour360 => "360 Tour",
            Self::DroneFootage => "Drone Footage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaUpload {
    pub id: String,
    pub file_name: String,
    pub media_type: MediaType,
    pub upload_date: NaiveDate,
    pub timestamp: NaiveDateTime,
    pub uploaded_by: String,
    pub milestone_tag: Option<String>,
    pub project: String,
    pub url: String,
    pub geotag: Option<GeoPoint>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    NotStarted,
    InProgress,
    Submitted,
    Approved,
    Rejected,
    Expired,
}

impl ComplianceStatus {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::NotStarted,
            Self::InProgress,
            Self::Submitted,
            Self::Approved,
            Self::Rejected,
            Self::Expired,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Expired => "Expired",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: String,
    pub requirement_name: String,
    pub authority: String,
    pub status: ComplianceStatus,
    pub due_date: Option<NaiveDate>,
    pub submission_date: Option<NaiveDate>,
    pub approval_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub responsible_person: String,
    pub notes: String,
    pub linked_document_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentVersion {
    pub version: String,
    pub upload_date: NaiveDate,
    pub uploaded_by: String,
    pub change_reason: String,
    pub file_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessAction {
    Viewed,
    Downloaded,
    Shared,
    Edited,
    VersionChanged,
}

impl AccessAction {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Viewed,
            Self::Downloaded,
            Self::Shared,
            Self::Edited,
            Self::VersionChanged,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Viewed => "Viewed",
            Self::Downloaded => "Downloaded",
            Self::Shared => "Shared",
            Self::Edited => "Edited",
            Self::VersionChanged => "VersionChanged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAccessLogEntry {
    pub user_id: String,
    pub user_name: String,
    pub access_date: NaiveDate,
    pub action: AccessAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Draft,
    Approved,
    Archived,
    Superseded,
    UnderReview,
}

impl DocumentStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Draft,
            Self::Approved,
            Self::Archived,
            Self::Superseded,
            Self::UnderReview,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Approved => "Approved",
            Self::Archived => "Archived",
            Self::Superseded => "Superseded",
            Self::UnderReview => "Under Review",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Legal,
    Finance,
    Construction,
    Sales,
}

impl Department {
    pub const fn ordered() -> [Self; 4] {
        [Self::Legal, Self::Finance, Self::Construction, Self::Sales]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Legal => "Legal",
            Self::Finance => "Finance",
            Self::Construction => "Construction",
            Self::Sales => "Sales",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub document_name: String,
    pub document_type: String,
    pub project: String,
    /// Upload date of the latest version.
    pub upload_date: NaiveDate,
    pub current_version: String,
    pub status: DocumentStatus,
    pub access_permissions: Vec<String>,
    pub file_path: String,
    pub expiry_date: Option<NaiveDate>,
    pub reviewers: Vec<String>,
    pub keywords: Vec<String>,
    /// Chronological by upload date.
    pub version_history: Vec<DocumentVersion>,
    pub access_log: Vec<DocumentAccessLogEntry>,
    pub department: Option<Department>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItemStatus {
    Pass,
    Fail,
    Observation,
    NotApplicable,
}

impl ChecklistItemStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Pass,
            Self::Fail,
            Self::Observation,
            Self::NotApplicable,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Observation => "Observation",
            Self::NotApplicable => "Not Applicable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityInspectionChecklistItem {
    pub item: String,
    pub status: ChecklistItemStatus,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
    pub corrected_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionType {
    Snagging,
    PreHandover,
    MilestoneCompletion,
    SafetyAudit,
}

impl InspectionType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Snagging,
            Self::PreHandover,
            Self::MilestoneCompletion,
            Self::SafetyAudit,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Snagging => "Snagging",
            Self::PreHandover => "Pre-Handover",
            Self::MilestoneCompletion => "Milestone Completion",
            Self::SafetyAudit => "Safety Audit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionOutcome {
    Approved,
    ReworkNeeded,
    PendingReview,
}

impl InspectionOutcome {
    pub const fn ordered() -> [Self; 3] {
        [Self::Approved, Self::ReworkNeeded, Self::PendingReview]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::ReworkNeeded => "Rework Needed",
            Self::PendingReview => "Pending Review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityInspectionRecord {
    pub id: String,
    pub inspection_id_number: String,
    pub project: String,
    pub unit_id: Option<UnitId>,
    pub milestone_name: Option<String>,
    pub area_inspected: String,
    pub inspection_date: NaiveDate,
    pub inspector: String,
    pub inspection_type: InspectionType,
    pub checklist_items: Vec<QualityInspectionChecklistItem>,
    pub overall_status: InspectionOutcome,
    pub rework_due_date: Option<NaiveDate>,
    /// Free reference, not validated against other inspections.
    pub follow_up_inspection_id: Option<String>,
}
