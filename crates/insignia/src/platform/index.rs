use std::collections::HashMap;

use super::common::{ProjectId, UnitId};
use super::facilities::{FacilityAsset, MaintenanceTask};
use super::finance::Invoice;
use super::modules::PlatformData;
use super::project::OverviewProject;
use super::sales::Lead;
use super::unit::PopulatedUnitDetail;

/// Position-based lookup tables over a [`PlatformData`] snapshot.
///
/// Records keep their denormalized display names; drill-down requests resolve
/// through the id maps here instead of scanning every project.
#[derive(Debug, Default, Clone)]
pub struct PlatformIndex {
    projects_by_id: HashMap<ProjectId, usize>,
    projects_by_name: HashMap<String, usize>,
    units: HashMap<UnitId, (usize, usize)>,
    invoices_by_unit: HashMap<UnitId, Vec<usize>>,
    leads: HashMap<String, usize>,
    assets: HashMap<String, usize>,
    tasks_by_asset: HashMap<String, Vec<usize>>,
}

impl PlatformIndex {
    pub fn build(data: &PlatformData) -> Self {
        let mut index = Self::default();

        for (project_pos, project) in data.overall_projects.iter().enumerate() {
            index.projects_by_id.insert(project.id.clone(), project_pos);
            index
                .projects_by_name
                .entry(project.name.clone())
                .or_insert(project_pos);
            for (unit_pos, unit) in project.units.iter().enumerate() {
                index
                    .units
                    .insert(unit.id.clone(), (project_pos, unit_pos));
            }
        }

        for (pos, invoice) in data.invoices().iter().enumerate() {
            index
                .invoices_by_unit
                .entry(invoice.unit_id.clone())
                .or_default()
                .push(pos);
        }

        for (pos, lead) in data.modules.sales_crm.leads.samples.iter().enumerate() {
            index.leads.insert(lead.id.clone(), pos);
        }

        let facilities = &data.modules.facilities_management;
        for (pos, asset) in facilities.assets.samples.iter().enumerate() {
            index.assets.insert(asset.id.clone(), pos);
        }
        for (pos, task) in facilities.maintenance.samples.iter().enumerate() {
            index
                .tasks_by_asset
                .entry(task.facility_asset_id.clone())
                .or_default()
                .push(pos);
        }

        index
    }
}

/// Owns the generated dataset together with its index.
#[derive(Debug, Clone)]
pub struct PlatformCatalog {
    data: PlatformData,
    index: PlatformIndex,
}

impl PlatformCatalog {
    pub fn new(data: PlatformData) -> Self {
        let index = PlatformIndex::build(&data);
        Self { data, index }
    }

    pub fn data(&self) -> &PlatformData {
        &self.data
    }

    pub fn projects(&self) -> &[OverviewProject] {
        &self.data.overall_projects
    }

    pub fn project(&self, id: &ProjectId) -> Option<&OverviewProject> {
        self.index
            .projects_by_id
            .get(id)
            .and_then(|&pos| self.data.overall_projects.get(pos))
    }

    pub fn project_by_name(&self, name: &str) -> Option<&OverviewProject> {
        self.index
            .projects_by_name
            .get(name)
            .and_then(|&pos| self.data.overall_projects.get(pos))
    }

    /// Resolves a unit together with the project that owns it.
    pub fn unit(&self, id: &UnitId) -> Option<(&OverviewProject, &PopulatedUnitDetail)> {
        let &(project_pos, unit_pos) = self.index.units.get(id)?;
        let project = self.data.overall_projects.get(project_pos)?;
        let unit = project.units.get(unit_pos)?;
        Some((project, unit))
    }

    pub fn invoices_for_unit(&self, id: &UnitId) -> Vec<&Invoice> {
        let invoices = self.data.invoices();
        self.index
            .invoices_by_unit
            .get(id)
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&pos| invoices.get(pos))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn lead(&self, id: &str) -> Option<&Lead> {
        self.index
            .leads
            .get(id)
            .and_then(|&pos| self.data.modules.sales_crm.leads.samples.get(pos))
    }

    pub fn asset(&self, id: &str) -> Option<&FacilityAsset> {
        self.index.assets.get(id).and_then(|&pos| {
            self.data
                .modules
                .facilities_management
                .assets
                .samples
                .get(pos)
        })
    }

    pub fn tasks_for_asset(&self, asset_id: &str) -> Vec<&MaintenanceTask> {
        let tasks = &self.data.modules.facilities_management.maintenance.samples;
        self.index
            .tasks_by_asset
            .get(asset_id)
            .map(|positions| positions.iter().filter_map(|&pos| tasks.get(pos)).collect())
            .unwrap_or_default()
    }
}
