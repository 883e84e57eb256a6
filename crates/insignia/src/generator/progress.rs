use chrono::{Datelike, Duration, NaiveDate};

use super::fixtures::{agents_and_technicians, AGENT_NAMES, BUYER_NAMES, DOCUMENT_TYPES, MILESTONES};
use super::random::{date, RandomSource, Sampler};
use super::GenerationError;
use crate::platform::{
    AccessAction, ChecklistItemStatus, ComplianceItem, ComplianceStatus, Department,
    DocumentAccessLogEntry, DocumentStatus, DocumentVersion, GeoPoint, InspectionOutcome,
    InspectionType, MediaType, MediaUpload, MilestoneState, MilestoneStatus, MilestoneSubTask,
    OverviewProject, QualityInspectionChecklistItem, QualityInspectionRecord, StoredDocument,
    SubTaskStatus,
};

const SUB_TASK_TRADES: [&str; 5] = [
    "Electrical Wiring",
    "Plumbing",
    "Interior Painting",
    "Fixture Installation",
    "Facade Panel Mounting",
];

const SUB_TASK_BLOCKERS: [&str; 3] = [
    "Material not available",
    "Awaiting dependent task",
    "Access restricted",
];

const MILESTONE_ISSUES: [&str; 5] = [
    "Permit delay",
    "Material shortage",
    "Contractor issue",
    "Weather impact",
    "Design change",
];

const UPLOAD_DESCRIPTIONS: [&str; 3] = [
    "Foundation pour complete",
    "Facade inspection view",
    "Safety drill footage",
];

const COMPLIANCE_REQUIREMENTS: [&str; 5] = [
    "EIA Approval",
    "Building Permit",
    "Fire Safety Cert",
    "Handover Cert",
    "Escrow Account Setup",
];

const AUTHORITIES: [&str; 5] = [
    "Local Municipality",
    "Utility Provider",
    "Environmental Agency",
    "Civil Defense",
    "Real Estate Regulatory Authority",
];

const CHANGE_REASONS: [&str; 5] = [
    "Initial draft",
    "Minor revisions",
    "Approved version",
    "Updated clauses",
    "Corrected typos",
];

const DOCUMENT_KINDS: [&str; 7] = [
    "Contract",
    "Permit",
    "NOC",
    "Drawing",
    "Report",
    "Agreement",
    "Certificate",
];

const ACCESS_TEAMS: [&str; 4] = [
    "Project Manager",
    "Legal Team",
    "Sales Team",
    "Finance Team",
];

const DOCUMENT_KEYWORDS: [&str; 9] = [
    "legal",
    "financial",
    "technical",
    "approval",
    "blueprint",
    "sales",
    "safety",
    "contract",
    "permit",
];

const CHECKLIST_ITEMS: [&str; 6] = [
    "Paint finish quality",
    "Fixture installation accuracy",
    "Floor leveling",
    "Window sealing",
    "Electrical socket functionality",
    "Plumbing leak check",
];

const CHECKLIST_NOTES: [&str; 3] = [
    "Minor scratch noted.",
    "Requires adjustment.",
    "Exceeds standard.",
];

const UNIT_AREAS: [&str; 4] = ["Kitchen", "Master Bathroom", "Living Area", "Overall"];

const COMMON_AREAS: [&str; 3] = ["Common Lobby", "Roof Deck", "External Facade - North Wing"];

const MAX_MILESTONES: usize = 40;

pub fn milestone_sub_tasks<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<MilestoneSubTask> {
    let assignees = agents_and_technicians();
    (0..count)
        .map(|i| {
            let status = *sampler.pick(&SubTaskStatus::ordered());
            let completed = status == SubTaskStatus::Completed;
            let start_date = (status != SubTaskStatus::Pending)
                .then(|| sampler.date_between(date(2023, 1, 1), date(2023, 7, 30)));
            MilestoneSubTask {
                id: sampler.id(),
                name: format!("Sub-task {} for {}", i + 1, sampler.pick(&SUB_TASK_TRADES)),
                status,
                assigned_to: sampler.pick(&assignees).to_string(),
                due_date: sampler.maybe(0.5, |s| s.date_between(date(2024, 1, 1), date(2024, 7, 30))),
                progress_percentage: match status {
                    SubTaskStatus::Completed => 100,
                    SubTaskStatus::InProgress => sampler.percent(10, 90),
                    _ => 0,
                },
                start_date,
                actual_end_date: match start_date {
                    Some(start) if completed => Some(sampler.date_within_days(start, 30)),
                    _ => None,
                },
                blockers: if status == SubTaskStatus::Blocked {
                    vec![sampler.pick(&SUB_TASK_BLOCKERS).to_string()]
                } else {
                    Vec::new()
                },
                depends_on_tasks: sampler
                    .maybe(0.8, |s| format!("task-{}", &s.id()[..4]))
                    .into_iter()
                    .collect(),
                estimated_hours: Some(sampler.percent(4, 40)),
                actual_hours: completed.then(|| sampler.percent(3, 45)),
            }
        })
        .collect()
}

/// Four or more of the standard milestones per project, capped at forty rows.
pub fn milestone_statuses<R: RandomSource>(
    sampler: &mut Sampler<R>,
    projects: &[OverviewProject],
) -> Vec<MilestoneStatus> {
    let mut statuses = Vec::new();
    for project in projects {
        let milestone_count = sampler.count(4, MILESTONES.len());
        for milestone in MILESTONES.iter().take(milestone_count) {
            let sub_task_count = sampler.count(2, 7);
            statuses.push(MilestoneStatus {
                milestone_name: milestone.to_string(),
                project: project.name.clone(),
                defined_date: sampler.date_between(date(2023, 1, 1), date(2025, 1, 1)),
                completion_date: sampler
                    .maybe(0.3, |s| s.date_between(date(2023, 1, 1), date(2025, 1, 1))),
                status: *sampler.pick(&MilestoneState::ordered()),
                linked_to_payment: sampler.chance(0.5),
                progress_percentage: sampler.percent(0, 100),
                sub_tasks: milestone_sub_tasks(sampler, sub_task_count),
                issues_or_blockers: if sampler.chance(0.7) {
                    let limit = sampler.count(1, 2);
                    sampler
                        .pick_many(&MILESTONE_ISSUES, limit)
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                } else {
                    Vec::new()
                },
            });
        }
    }
    statuses.truncate(MAX_MILESTONES);
    statuses
}

pub fn media_uploads<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    project_names: &[String],
    reference_date: NaiveDate,
) -> Vec<MediaUpload> {
    let timestamp = reference_date.and_hms_opt(12, 0, 0).unwrap_or_default();
    (0..count)
        .map(|_| MediaUpload {
            id: sampler.id(),
            file_name: format!("IMG_{}.jpg", sampler.number(1000, 9999)),
            media_type: *sampler.pick(&MediaType::ordered()),
            upload_date: sampler.date_between(date(2023, 11, 1), date(2024, 1, 15)),
            timestamp,
            uploaded_by: sampler.pick(&AGENT_NAMES).to_string(),
            milestone_tag: Some(sampler.pick(&MILESTONES).to_string()),
            project: sampler.try_pick(project_names).cloned().unwrap_or_default(),
            url: format!("https://picsum.photos/seed/media{}/300/200", sampler.id()),
            geotag: sampler.maybe(0.6, |s| GeoPoint {
                lat: s.float(25.0, 25.2, 4),
                long: s.float(55.1, 55.4, 4),
            }),
            description: sampler.maybe(0.5, |s| s.pick(&UPLOAD_DESCRIPTIONS).to_string()),
        })
        .collect()
}

pub fn compliance_items<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<ComplianceItem> {
    (0..count)
        .map(|_| ComplianceItem {
            id: sampler.id(),
            requirement_name: sampler.pick(&COMPLIANCE_REQUIREMENTS).to_string(),
            authority: sampler.pick(&AUTHORITIES).to_string(),
            status: *sampler.pick(&ComplianceStatus::ordered()),
            due_date: Some(sampler.date_between(date(2024, 2, 1), date(2025, 7, 1))),
            submission_date: sampler
                .maybe(0.5, |s| s.date_between(date(2024, 1, 1), date(2025, 1, 1))),
            approval_date: sampler
                .maybe(0.3, |s| s.date_between(date(2024, 1, 15), date(2025, 2, 15))),
            expiry_date: sampler.maybe(0.2, |s| s.date_between(date(2025, 7, 1), date(2027, 7, 1))),
            responsible_person: sampler.pick(&AGENT_NAMES).to_string(),
            notes: "Awaiting feedback on phase 1 submission.".to_string(),
            linked_document_id: sampler.maybe(0.6, |s| format!("DOC-{}", &s.id()[..6])),
        })
        .collect()
}

/// Version history sorted by upload date. Labels advance by major bump with
/// probability 0.7 and minor bump otherwise, so after sorting they need not
/// be monotonic.
pub fn document_versions<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    initial_file_path: &str,
) -> Vec<DocumentVersion> {
    let mut major = 1;
    let mut minor = 0;
    let mut versions: Vec<DocumentVersion> = (0..count)
        .map(|i| {
            if i > 0 {
                if sampler.chance(0.3) {
                    major += 1;
                    minor = 0;
                } else {
                    minor += 1;
                }
            }
            let earliest = date(2022, 1, 1) + Duration::days(i as i64 * 10);
            DocumentVersion {
                version: format!("v{}.{}", major, minor),
                upload_date: sampler.date_between(earliest, date(2023, 12, 30)),
                uploaded_by: sampler.pick(&AGENT_NAMES).to_string(),
                change_reason: sampler.pick(&CHANGE_REASONS).to_string(),
                file_path: initial_file_path.replace(".pdf", &format!("_v{}.{}.pdf", major, minor)),
            }
        })
        .collect();
    versions.sort_by_key(|version| version.upload_date);
    versions
}

pub fn document_access_log<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<DocumentAccessLogEntry> {
    let readers: Vec<&str> = AGENT_NAMES
        .iter()
        .chain(BUYER_NAMES.iter().take(3))
        .copied()
        .collect();
    (0..count)
        .map(|_| DocumentAccessLogEntry {
            user_id: format!("user-{}", sampler.id()),
            user_name: sampler.pick(&readers).to_string(),
            access_date: sampler.date_between(date(2023, 1, 1), date(2024, 1, 15)),
            action: *sampler.pick(&AccessAction::ordered()),
        })
        .collect()
}

pub fn stored_documents<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    project_names: &[String],
) -> Result<Vec<StoredDocument>, GenerationError> {
    let reviewers_pool: Vec<&str> = AGENT_NAMES
        .iter()
        .chain(BUYER_NAMES.iter().take(5))
        .copied()
        .collect();

    let mut documents = Vec::with_capacity(count);
    for _ in 0..count {
        let folder = sampler
            .try_pick(project_names)
            .map(|name| name.replacen(' ', "_", 1))
            .unwrap_or_default();
        let initial_file_path = format!("/docs/{}/{}.pdf", folder, sampler.id());
        let version_count = sampler.count(1, 5);
        let version_history = document_versions(sampler, version_count, &initial_file_path);
        let latest = version_history
            .last()
            .cloned()
            .ok_or(GenerationError::EmptyPool("document versions"))?;

        let reviewer_limit = sampler.count(1, 3);
        let keyword_limit = sampler.count(2, 4);
        let access_count = sampler.count(3, 10);
        documents.push(StoredDocument {
            id: format!("DOC-{}", &sampler.id()[..6]),
            document_name: format!(
                "{}-{}.pdf",
                sampler.pick(&DOCUMENT_KINDS),
                sampler.number(100, 500)
            ),
            document_type: sampler.pick(&DOCUMENT_TYPES).to_string(),
            project: sampler.try_pick(project_names).cloned().unwrap_or_default(),
            upload_date: latest.upload_date,
            current_version: latest.version,
            status: *sampler.pick(&DocumentStatus::ordered()),
            access_permissions: vec![
                "Admin".to_string(),
                sampler.pick(&ACCESS_TEAMS).to_string(),
            ],
            file_path: latest.file_path,
            expiry_date: sampler
                .maybe(0.8, |s| s.date_between(date(2024, 7, 1), date(2026, 12, 31))),
            reviewers: sampler
                .pick_many(&reviewers_pool, reviewer_limit)
                .into_iter()
                .map(str::to_string)
                .collect(),
            keywords: sampler
                .pick_many(&DOCUMENT_KEYWORDS, keyword_limit)
                .into_iter()
                .map(str::to_string)
                .collect(),
            version_history,
            access_log: document_access_log(sampler, access_count),
            department: Some(*sampler.pick(&Department::ordered())),
        });
    }
    Ok(documents)
}

pub fn quality_checklist_items<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<QualityInspectionChecklistItem> {
    (0..count)
        .map(|_| QualityInspectionChecklistItem {
            item: sampler.pick(&CHECKLIST_ITEMS).to_string(),
            status: *sampler.pick(&ChecklistItemStatus::ordered()),
            notes: sampler.maybe(0.6, |s| s.pick(&CHECKLIST_NOTES).to_string()),
            photo_url: sampler.maybe(0.7, |s| {
                format!("https://picsum.photos/seed/{}/200/150", s.id())
            }),
            corrected_date: sampler
                .maybe(0.8, |s| s.date_between(date(2023, 11, 1), date(2023, 12, 15))),
        })
        .collect()
}

/// Inspections over random projects; sixty percent target a specific unit
/// when the project has any.
pub fn quality_inspections<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    projects: &[OverviewProject],
    reference_date: NaiveDate,
) -> Vec<QualityInspectionRecord> {
    if projects.is_empty() {
        return Vec::new();
    }
    let inspectors: Vec<&str> = AGENT_NAMES
        .iter()
        .copied()
        .chain(std::iter::once("Third Party QA Ltd."))
        .collect();

    (0..count)
        .map(|i| {
            let project = sampler.pick(projects);
            let unit = if sampler.chance(0.4) {
                sampler.try_pick(&project.units)
            } else {
                None
            };
            let checklist_count = sampler.count(5, 15);
            QualityInspectionRecord {
                id: format!("QIR-{}", sampler.id().to_uppercase()),
                inspection_id_number: format!(
                    "QIR-{}-{}-{}",
                    reference_date.year(),
                    sampler.number(100, 999),
                    i
                ),
                project: project.name.clone(),
                unit_id: unit.map(|unit| unit.id.clone()),
                milestone_name: sampler.maybe(0.5, |s| s.pick(&MILESTONES).to_string()),
                area_inspected: match unit {
                    Some(unit) => format!("{} - {}", unit.unit_number, sampler.pick(&UNIT_AREAS)),
                    None => sampler.pick(&COMMON_AREAS).to_string(),
                },
                inspection_date: sampler.date_between(date(2023, 7, 1), date(2024, 1, 1)),
                inspector: sampler.pick(&inspectors).to_string(),
                inspection_type: *sampler.pick(&InspectionType::ordered()),
                checklist_items: quality_checklist_items(sampler, checklist_count),
                overall_status: *sampler.pick(&InspectionOutcome::ordered()),
                rework_due_date: sampler
                    .maybe(0.7, |s| s.date_between(date(2024, 1, 1), date(2024, 2, 15))),
                follow_up_inspection_id: sampler.maybe(0.8, |s| {
                    format!("QIR-{}", &s.id().to_uppercase()[..5])
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_history_is_chronological_and_rewrites_paths() {
        let mut sampler = Sampler::seeded(77);
        for _ in 0..100 {
            let versions = document_versions(&mut sampler, 5, "/docs/Elysian_Towers/abc.pdf");
            assert_eq!(versions.len(), 5);
            assert!(versions
                .windows(2)
                .all(|pair| pair[0].upload_date <= pair[1].upload_date));
            assert!(versions
                .iter()
                .all(|v| v.file_path.ends_with(&format!("_{}.pdf", v.version))));
        }
    }

    #[test]
    fn completed_sub_tasks_are_fully_progressed() {
        let mut sampler = Sampler::seeded(19);
        let tasks = milestone_sub_tasks(&mut sampler, 200);
        for task in &tasks {
            match task.status {
                SubTaskStatus::Completed => {
                    assert_eq!(task.progress_percentage, 100);
                    assert!(task.actual_end_date.is_some());
                }
                SubTaskStatus::Pending => assert!(task.start_date.is_none()),
                SubTaskStatus::Blocked => assert_eq!(task.blockers.len(), 1),
                _ => assert!(task.actual_hours.is_none()),
            }
        }
    }
}
