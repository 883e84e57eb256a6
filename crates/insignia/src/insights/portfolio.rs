use serde::Serialize;

use crate::platform::{
    FinancialHealth, OverviewProject, ProjectId, ProjectRisk, ProjectStatus, ProjectType,
    UnitAvailabilityStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveProjectsSnapshot {
    pub total_active_projects: usize,
    pub status_breakdown: Vec<StatusCount>,
    pub average_progress: f64,
    pub total_units: usize,
    pub total_sold_units: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectValue {
    pub project_id: ProjectId,
    pub project_name: String,
    pub estimated_value: f64,
    /// Current value as a share of the portfolio's allocated budget.
    pub value_contribution_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioValue {
    pub total_value: f64,
    pub total_budget_allocated: f64,
    pub by_project: Vec<ProjectValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSales {
    pub project_name: String,
    pub units_sold: usize,
    pub total_units: usize,
    pub progress_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesProgress {
    pub total_units: usize,
    pub total_sold: usize,
    pub total_reserved: usize,
    pub overall_sales_percentage: f64,
    pub by_project: Vec<ProjectSales>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskExposure {
    pub risk: ProjectRisk,
    pub description: &'static str,
    pub affected_projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueNode {
    pub name: String,
    pub size: f64,
    pub financial_health: FinancialHealth,
}

/// Treemap parent: one project type with its projects as children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeValueGroup {
    pub project_type: ProjectType,
    pub name: &'static str,
    pub size: f64,
    pub children: Vec<ValueNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub active_projects: ActiveProjectsSnapshot,
    pub portfolio_value: PortfolioValue,
    pub sales: SalesProgress,
    pub risks: Vec<RiskExposure>,
    pub status_distribution: Vec<StatusCount>,
    pub value_by_type: Vec<TypeValueGroup>,
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

fn status_counts<'a>(projects: impl Iterator<Item = &'a OverviewProject> + Clone) -> Vec<StatusCount> {
    ProjectStatus::ordered()
        .into_iter()
        .filter_map(|status| {
            let count = projects.clone().filter(|p| p.status == status).count();
            (count > 0).then_some(StatusCount {
                status,
                label: status.label(),
                count,
            })
        })
        .collect()
}

pub fn active_projects(projects: &[OverviewProject]) -> ActiveProjectsSnapshot {
    let active = projects.iter().filter(|project| project.status.is_active());
    let count = active.clone().count();
    let progress_sum: u32 = active.clone().map(|project| project.overall_progress).sum();
    ActiveProjectsSnapshot {
        total_active_projects: count,
        status_breakdown: status_counts(active.clone()),
        average_progress: if count > 0 {
            f64::from(progress_sum) / count as f64
        } else {
            0.0
        },
        total_units: active.clone().map(|project| project.total_units).sum(),
        total_sold_units: active.map(|project| project.units_sold).sum(),
    }
}

pub fn portfolio_value(projects: &[OverviewProject]) -> PortfolioValue {
    let total_budget_allocated: f64 = projects.iter().map(OverviewProject::initial_value).sum();
    let by_project: Vec<ProjectValue> = projects
        .iter()
        .map(|project| {
            let estimated_value = project.current_value();
            ProjectValue {
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                estimated_value,
                value_contribution_percentage: percentage(estimated_value, total_budget_allocated),
            }
        })
        .collect();
    PortfolioValue {
        total_value: by_project.iter().map(|row| row.estimated_value).sum(),
        total_budget_allocated,
        by_project,
    }
}

pub fn sales_progress(projects: &[OverviewProject]) -> SalesProgress {
    let total_units: usize = projects.iter().map(|project| project.total_units).sum();
    let total_sold: usize = projects.iter().map(|project| project.units_sold).sum();
    SalesProgress {
        total_units,
        total_sold,
        total_reserved: projects
            .iter()
            .map(|project| project.units_with_status(UnitAvailabilityStatus::Reserved))
            .sum(),
        overall_sales_percentage: percentage(total_sold as f64, total_units as f64),
        by_project: projects
            .iter()
            .map(|project| ProjectSales {
                project_name: project.name.clone(),
                units_sold: project.units_sold,
                total_units: project.total_units,
                progress_percentage: percentage(
                    project.units_sold as f64,
                    project.total_units as f64,
                ),
            })
            .collect(),
    }
}

/// Distinct risks in order of first appearance, each with the projects it touches.
pub fn risk_exposure(projects: &[OverviewProject]) -> Vec<RiskExposure> {
    let mut seen: Vec<ProjectRisk> = Vec::new();
    for risk in projects.iter().flat_map(|project| project.key_risks.iter()) {
        if !seen.contains(risk) {
            seen.push(*risk);
        }
    }
    seen.into_iter()
        .map(|risk| RiskExposure {
            risk,
            description: risk.label(),
            affected_projects: projects
                .iter()
                .filter(|project| project.key_risks.contains(&risk))
                .map(|project| project.name.clone())
                .collect(),
        })
        .collect()
}

/// Current value grouped by project type. Projects without value are left
/// out, and so are types left empty.
pub fn value_by_type(projects: &[OverviewProject]) -> Vec<TypeValueGroup> {
    let mut groups: Vec<TypeValueGroup> = Vec::new();
    for project in projects {
        let size = project.current_value();
        if size <= 0.0 {
            continue;
        }
        let node = ValueNode {
            name: project.name.clone(),
            size,
            financial_health: project.financial_health,
        };
        match groups
            .iter_mut()
            .find(|group| group.project_type == project.project_type)
        {
            Some(group) => {
                group.size += size;
                group.children.push(node);
            }
            None => groups.push(TypeValueGroup {
                project_type: project.project_type,
                name: project.project_type.title(),
                size,
                children: vec![node],
            }),
        }
    }
    groups
}

pub fn summarize(projects: &[OverviewProject]) -> PortfolioSummary {
    PortfolioSummary {
        active_projects: active_projects(projects),
        portfolio_value: portfolio_value(projects),
        sales: sales_progress(projects),
        risks: risk_exposure(projects),
        status_distribution: status_counts(projects.iter()),
        value_by_type: value_by_type(projects),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_platform_data, GenerationOptions, Sampler};
    use chrono::NaiveDate;

    fn projects() -> Vec<OverviewProject> {
        let options = GenerationOptions {
            project_count: 6,
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        };
        generate_platform_data(&options, &mut Sampler::seeded(17))
            .expect("dataset")
            .overall_projects
    }

    #[test]
    fn empty_portfolio_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.active_projects.total_active_projects, 0);
        assert_eq!(summary.active_projects.average_progress, 0.0);
        assert_eq!(summary.sales.overall_sales_percentage, 0.0);
        assert!(summary.risks.is_empty());
        assert!(summary.value_by_type.is_empty());
    }

    #[test]
    fn summary_reconciles_with_projects() {
        let projects = projects();
        let summary = summarize(&projects);

        let sold: usize = projects.iter().map(|p| p.units_sold).sum();
        assert_eq!(summary.sales.total_sold, sold);
        let status_total: usize = summary.status_distribution.iter().map(|s| s.count).sum();
        assert_eq!(status_total, projects.len());

        let grouped: f64 = summary.value_by_type.iter().map(|group| group.size).sum();
        assert!((grouped - summary.portfolio_value.total_value).abs() < 1e-6);

        for exposure in &summary.risks {
            assert!(!exposure.affected_projects.is_empty());
        }
        let active = projects.iter().filter(|p| p.status.is_active()).count();
        assert_eq!(summary.active_projects.total_active_projects, active);
    }
}
