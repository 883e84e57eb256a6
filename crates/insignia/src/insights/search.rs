use serde::Serialize;

use crate::platform::{
    Broker, ComplianceItem, CustomField, FacilityAsset, GeneratedReport, Invoice, Lead,
    MaintenanceTask, MilestoneStatus, OverviewProject, PlatformData, PopulatedUnitDetail,
    ProjectListing, QualityInspectionRecord, ServiceProvider, StoredDocument, UnitReservation,
    UnitViewing,
};

/// Lower-cased search term. An empty term matches every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hits(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0)
    }

    pub fn hits_opt(&self, text: Option<&str>) -> bool {
        text.map_or(false, |text| self.hits(text))
    }

    pub fn hits_number(&self, value: impl ToString) -> bool {
        self.hits(&value.to_string())
    }

    pub fn hits_any<S: AsRef<str>>(&self, texts: &[S]) -> bool {
        texts.iter().any(|text| self.hits(text.as_ref()))
    }

    pub fn hits_custom_fields(&self, fields: &[CustomField]) -> bool {
        fields
            .iter()
            .any(|field| self.hits(&field.field_name) || self.hits_number(&field.value))
    }
}

/// Record types the dashboard tables can filter.
pub trait Searchable {
    fn matches_term(&self, term: &SearchTerm) -> bool;

    fn matches(&self, raw: &str) -> bool {
        let term = SearchTerm::new(raw);
        term.is_empty() || self.matches_term(&term)
    }
}

pub fn filter<'a, T: Searchable>(items: &'a [T], term: &SearchTerm) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| term.is_empty() || item.matches_term(term))
        .collect()
}

impl Searchable for OverviewProject {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.name)
            || term.hits(self.project_type.label())
            || term.hits(self.status.label())
            || term.hits_opt(self.market_sentiment.map(|sentiment| sentiment.label()))
            || term.hits_any(&self.tags)
            || term.hits_custom_fields(&self.custom_fields)
    }
}

impl Searchable for PopulatedUnitDetail {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.unit_number)
            || term.hits(&self.project_name)
            || term.hits(self.availability_status.label())
            || term.hits_opt(self.view.map(|view| view.label()))
            || term.hits_number(self.size)
            || term.hits_number(self.current_price)
            || term.hits_any(&self.unit_features)
            || self
                .requested_upgrades
                .iter()
                .any(|upgrade| term.hits(&upgrade.upgrade_name))
            || term.hits_any(&self.tags)
            || term.hits_custom_fields(&self.custom_fields)
    }
}

impl Searchable for Invoice {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.invoice_number)
            || term.hits(&self.buyer_name)
            || term.hits(self.status.label())
            || term.hits(self.installment_milestone.label())
            || term.hits_number(self.amount_due)
            || term.hits_opt(self.linked_payment_plan_name.as_deref())
    }
}

impl Searchable for Lead {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.name)
            || term.hits(self.source.label())
            || term.hits(self.status.label())
            || term.hits(&self.assigned_agent)
            || term.hits(&self.project_interest)
            || self.budget_range.as_ref().map_or(false, |budget| {
                term.hits_number(budget.min) || term.hits_number(budget.max)
            })
            || self.interaction_history.iter().any(|interaction| {
                term.hits(&interaction.summary) || term.hits(interaction.interaction_type.label())
            })
            || term.hits_any(&self.tags)
            || term.hits_custom_fields(&self.custom_fields)
    }
}

impl Searchable for UnitReservation {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.unit_number)
            || term.hits(&self.project_name)
            || term.hits(&self.client_name)
            || term.hits(self.status.label())
            || term.hits(&self.linked_payment_plan)
    }
}

impl Searchable for Broker {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.name)
            || term.hits(&self.agency)
            || term.hits(self.status.label())
            || term.hits_number(self.deals_closed)
            || self
                .specialization
                .iter()
                .any(|kind| term.hits(kind.label()))
    }
}

impl Searchable for UnitViewing {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.lead_name)
            || term.hits(&self.unit_number)
            || term.hits(&self.project_name)
            || term.hits(&self.agent)
            || term.hits_opt(self.positive_notes.as_deref())
            || term.hits_opt(self.negative_notes.as_deref())
            || term.hits_opt(self.outcome.map(|outcome| outcome.label()))
    }
}

impl Searchable for MilestoneStatus {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.milestone_name)
            || term.hits(&self.project)
            || term.hits(self.status.label())
            || self.sub_tasks.iter().any(|task| {
                term.hits(&task.name) || term.hits(task.status.label()) || term.hits_any(&task.blockers)
            })
            || term.hits_any(&self.issues_or_blockers)
    }
}

impl Searchable for StoredDocument {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.document_name)
            || term.hits(&self.document_type)
            || term.hits(&self.project)
            || term.hits(self.status.label())
            || term.hits_any(&self.reviewers)
            || term.hits_any(&self.keywords)
            || self
                .version_history
                .iter()
                .any(|version| term.hits(&version.version) || term.hits(&version.change_reason))
    }
}

impl Searchable for ComplianceItem {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.requirement_name)
            || term.hits(&self.authority)
            || term.hits(self.status.label())
            || term.hits(&self.responsible_person)
    }
}

impl Searchable for QualityInspectionRecord {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.inspection_id_number)
            || term.hits(&self.project)
            || term.hits(&self.area_inspected)
            || term.hits(&self.inspector)
            || term.hits(self.inspection_type.label())
            || term.hits(self.overall_status.label())
            || self
                .checklist_items
                .iter()
                .any(|item| term.hits(&item.item) || term.hits_opt(item.notes.as_deref()))
    }
}

impl Searchable for FacilityAsset {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.name)
            || term.hits(self.asset_type.label())
            || term.hits(&self.project_location)
            || term.hits_opt(self.specific_location.as_deref())
            || term.hits(self.status.label())
            || term.hits_opt(self.assigned_technician.as_deref())
            || self.components.iter().any(|component| {
                term.hits(&component.name) || term.hits_opt(component.serial_number.as_deref())
            })
            || term.hits_any(&self.tags)
            || term.hits_custom_fields(&self.custom_fields)
    }
}

impl Searchable for MaintenanceTask {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.task_description)
            || term.hits(&self.facility_asset_name)
            || term.hits(self.priority.label())
            || term.hits_opt(self.task_type.map(|kind| kind.label()))
            || term.hits(self.status.label())
            || term.hits(&self.assigned_to)
            || term.hits_any(&self.tools_required)
    }
}

impl Searchable for ServiceProvider {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.name)
            || term.hits(&self.contact_person)
            || term.hits(&self.email)
            || term.hits_any(&self.specialization)
    }
}

impl Searchable for GeneratedReport {
    fn matches_term(&self, term: &SearchTerm) -> bool {
        term.hits(&self.report_name)
            || term.hits(self.report_type.label())
            || term.hits(self.generated_for.label())
            || term.hits(self.status.label())
            || term.hits(&self.period_covered)
    }
}

/// Per-table matches for one term across the dataset.
#[derive(Debug, Serialize)]
pub struct SearchResults<'a> {
    pub term: String,
    pub projects: Vec<ProjectListing>,
    pub units: Vec<&'a PopulatedUnitDetail>,
    pub invoices: Vec<&'a Invoice>,
    pub leads: Vec<&'a Lead>,
    pub reservations: Vec<&'a UnitReservation>,
    pub brokers: Vec<&'a Broker>,
    pub viewings: Vec<&'a UnitViewing>,
    pub milestones: Vec<&'a MilestoneStatus>,
    pub documents: Vec<&'a StoredDocument>,
    pub compliance: Vec<&'a ComplianceItem>,
    pub inspections: Vec<&'a QualityInspectionRecord>,
    pub assets: Vec<&'a FacilityAsset>,
    pub maintenance_tasks: Vec<&'a MaintenanceTask>,
    pub service_providers: Vec<&'a ServiceProvider>,
    pub reports: Vec<&'a GeneratedReport>,
}

impl SearchResults<'_> {
    pub fn total(&self) -> usize {
        self.projects.len()
            + self.units.len()
            + self.invoices.len()
            + self.leads.len()
            + self.reservations.len()
            + self.brokers.len()
            + self.viewings.len()
            + self.milestones.len()
            + self.documents.len()
            + self.compliance.len()
            + self.inspections.len()
            + self.assets.len()
            + self.maintenance_tasks.len()
            + self.service_providers.len()
            + self.reports.len()
    }
}

pub fn search_platform<'a>(data: &'a PlatformData, raw: &str) -> SearchResults<'a> {
    let term = SearchTerm::new(raw);
    let modules = &data.modules;
    let sales = &modules.sales_crm;
    let progress = &modules.project_progress_compliance;
    let facilities = &modules.facilities_management;

    SearchResults {
        term: term.as_str().to_string(),
        projects: filter(&data.overall_projects, &term)
            .into_iter()
            .map(OverviewProject::listing)
            .collect(),
        units: data
            .units()
            .filter(|unit| term.is_empty() || unit.matches_term(&term))
            .collect(),
        invoices: filter(data.invoices(), &term),
        leads: filter(&sales.leads.samples, &term),
        reservations: filter(&sales.reservations.samples, &term),
        brokers: filter(&sales.brokers.samples, &term),
        viewings: filter(&sales.viewings.samples, &term),
        milestones: filter(&progress.milestones.samples, &term),
        documents: filter(&progress.documents.samples, &term),
        compliance: filter(&progress.compliance.samples, &term),
        inspections: filter(&progress.quality_inspections.samples, &term),
        assets: filter(&facilities.assets.samples, &term),
        maintenance_tasks: filter(&facilities.maintenance.samples, &term),
        service_providers: filter(&facilities.service_providers.samples, &term),
        reports: filter(&modules.reporting_decision_support.reports.samples, &term),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_platform_data, GenerationOptions, Sampler};
    use crate::platform::CustomFieldValue;
    use chrono::NaiveDate;

    #[test]
    fn term_is_trimmed_and_case_folded() {
        let term = SearchTerm::new("  ElySian ");
        assert!(term.hits("Elysian Towers"));
        assert!(!term.hits("Azure Residences"));
        assert!(SearchTerm::new("").is_empty());
        assert!(SearchTerm::new("412").hits_number(4120));
    }

    #[test]
    fn custom_field_values_are_matched_as_text() {
        let fields = vec![CustomField {
            field_name: "Internal Rating".to_string(),
            value: CustomFieldValue::Boolean(true),
        }];
        assert!(SearchTerm::new("rating").hits_custom_fields(&fields));
        assert!(SearchTerm::new("TRUE").hits_custom_fields(&fields));
        assert!(!SearchTerm::new("false").hits_custom_fields(&fields));
    }

    #[test]
    fn platform_search_spans_tables() {
        let mut sampler = Sampler::seeded(9);
        let options = GenerationOptions {
            project_count: 3,
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        };
        let data = generate_platform_data(&options, &mut sampler).expect("dataset");
        let name = data.overall_projects[0].name.clone();

        let results = search_platform(&data, &name.to_uppercase());
        assert!(results.projects.iter().any(|listing| listing.name == name));
        assert!(results.units.iter().all(|unit| unit.matches(&name)));
        assert!(!results.units.is_empty());

        let everything = search_platform(&data, "");
        assert_eq!(everything.projects.len(), 3);
        assert_eq!(everything.invoices.len(), data.invoices().len());
        assert!(everything.total() > results.total());
    }
}
