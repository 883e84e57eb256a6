use super::random::{date, RandomSource, Sampler};
use crate::platform::{
    CashFlowStatus, CostLine, GeneratedReport, GeospatialLocation, HealthIndicator,
    OverviewProject, ProfitabilityData, ProjectHealthMetric, ReportAudience, ReportFormat,
    ReportStatus, ReportType, RevenueLine, RiskLevel,
};

const REPORT_TITLES: [&str; 4] = ["Q4 Update", "Annual Review", "Sales Summary", "Compliance Check"];

const AMENITIES: [&str; 6] = [
    "Metro Station",
    "Shopping Mall",
    "International School",
    "Hospital",
    "Park",
    "Beach Access",
];

const FALLBACK_BUDGET: f64 = 5_000_000.0;
const FALLBACK_BUDGET_UNIT: f64 = 50_000.0;

/// One KPI row per project. Budget figures derive from unit prices, with
/// fixed fallbacks for projects that have no units.
pub fn health_metrics<R: RandomSource>(
    sampler: &mut Sampler<R>,
    projects: &[OverviewProject],
) -> Vec<ProjectHealthMetric> {
    projects
        .iter()
        .map(|project| {
            let initial_value = project.initial_value();
            let (budget_unit, total_budget) = if initial_value > 0.0 {
                (initial_value / 100.0, initial_value)
            } else {
                (FALLBACK_BUDGET_UNIT, FALLBACK_BUDGET)
            };
            ProjectHealthMetric {
                id: project.id.clone(),
                project_name: project.name.clone(),
                units_sold: project.units_sold,
                total_units: project.total_units,
                revenue_collected: sampler.amount(1_000_000, 50_000_000),
                target_revenue: sampler.amount(1_500_000, 60_000_000),
                budget_spent: f64::from(project.budget_utilization) * budget_unit,
                total_budget,
                completion_percentage: project.overall_progress,
                cash_flow_status: *sampler.pick(&CashFlowStatus::ordered()),
                overdue_payments_count: sampler.percent(0, 15),
                health_indicator: *sampler.pick(&HealthIndicator::ordered()),
                risk_level: Some(*sampler.pick(&RiskLevel::ordered())),
            }
        })
        .collect()
}

pub fn profitability<R: RandomSource>(
    sampler: &mut Sampler<R>,
    projects: &[OverviewProject],
    year: i32,
) -> Vec<ProfitabilityData> {
    projects
        .iter()
        .map(|project| {
            let total_revenue = sampler.amount(5_000_000, 100_000_000) as f64;
            let total_cost = total_revenue * sampler.float(0.6, 0.85, 2);
            let gross_profit = total_revenue - total_cost;
            let net_profit = gross_profit * sampler.float(0.5, 0.8, 2);
            ProfitabilityData {
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                total_revenue,
                total_cost,
                gross_profit,
                net_profit,
                roi_percentage: net_profit / total_cost * 100.0,
                period: format!("YTD {}", year),
                revenue_breakdown: vec![
                    RevenueLine {
                        source: "Unit Sales".to_string(),
                        amount: total_revenue * 0.9,
                    },
                    RevenueLine {
                        source: "Other Fees".to_string(),
                        amount: total_revenue * 0.1,
                    },
                ],
                cost_breakdown: vec![
                    CostLine {
                        category: "Construction".to_string(),
                        amount: total_cost * 0.7,
                    },
                    CostLine {
                        category: "Marketing & Sales".to_string(),
                        amount: total_cost * 0.15,
                    },
                    CostLine {
                        category: "Overheads".to_string(),
                        amount: total_cost * 0.15,
                    },
                ],
            }
        })
        .collect()
}

/// Stakeholder reports covering a quarter of the year before `year`.
pub fn reports<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    project_names: &[String],
    year: i32,
) -> Vec<GeneratedReport> {
    (0..count)
        .map(|_| {
            let title = sampler.pick(&REPORT_TITLES);
            let project = sampler.try_pick(project_names).cloned().unwrap_or_default();
            GeneratedReport {
                id: sampler.id(),
                report_name: format!("{} - {}", title, project),
                report_type: *sampler.pick(&ReportType::ordered()),
                generated_for: *sampler.pick(&ReportAudience::ordered()),
                generation_date: sampler.date_between(date(2023, 10, 1), date(2024, 1, 15)),
                period_covered: format!("Q{} {}", sampler.number(1, 4), year - 1),
                status: *sampler.pick(&ReportStatus::ordered()),
                format: Some(*sampler.pick(&ReportFormat::ordered())),
            }
        })
        .collect()
}

pub fn geospatial_locations<R: RandomSource>(
    sampler: &mut Sampler<R>,
    projects: &[OverviewProject],
) -> Vec<GeospatialLocation> {
    projects
        .iter()
        .map(|project| {
            let amenity_count = sampler.count(2, 5);
            GeospatialLocation {
                name: project.name.clone(),
                lat: sampler.float(25.0, 25.2, 4),
                long: sampler.float(55.1, 55.4, 4),
                amenities: AMENITIES
                    .iter()
                    .take(amenity_count)
                    .map(|amenity| amenity.to_string())
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_name_their_project_and_prior_year() {
        let mut sampler = Sampler::seeded(4);
        assert!(profitability(&mut sampler, &[], 2024).is_empty());

        let names = vec!["Elysian Towers".to_string()];
        let generated = reports(&mut sampler, 6, &names, 2024);
        assert_eq!(generated.len(), 6);
        for report in &generated {
            assert!(report.report_name.ends_with(" - Elysian Towers"));
            assert!(report.period_covered.ends_with(" 2023"));
        }
    }
}
