use super::fixtures::{AGENT_NAMES, PROJECT_NAMES};
use super::random::{date, RandomSource, Sampler};
use super::shared::{optional_custom_fields, optional_tags};
use crate::platform::{
    FinancialHealth, MarketSentiment, OverviewProject, ProjectActivity, ProjectId, ProjectRisk,
    ProjectStatus, ProjectType,
};

const ACTIVITY_TYPES: [&str; 7] = [
    "Milestone Updated",
    "New Document Uploaded",
    "Budget Adjusted",
    "Lead Converted",
    "Compliance Status Changed",
    "Invoice Paid",
    "New Risk Identified",
];

const ACTIVITY_DETAILS: [&str; 3] = [
    "Status changed to 'Completed'.",
    "Contract signed.",
    "Payment of $50,000 received.",
];

pub const MIN_BUDGET_UTILIZATION: u32 = 10;
pub const MAX_BUDGET_UTILIZATION: u32 = 150;

pub fn project_activities<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<ProjectActivity> {
    (0..count)
        .map(|_| ProjectActivity {
            date: sampler.date_between(date(2023, 11, 1), date(2024, 1, 15)),
            activity: sampler.pick(&ACTIVITY_TYPES).to_string(),
            user: sampler.pick(&AGENT_NAMES).to_string(),
            details: sampler.maybe(0.6, |s| s.pick(&ACTIVITY_DETAILS).to_string()),
        })
        .collect()
}

fn thumbnail_url(name: &str) -> String {
    let seed: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(5)
        .collect();
    format!("https://picsum.photos/seed/proj{}/200/200", seed)
}

/// Project shells for the first `count` fixture names.
///
/// Units are attached later; until then `total_units` is the planned unit
/// count and `units_sold` a placeholder that the orchestrator recomputes.
pub fn project_shells<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<OverviewProject> {
    PROJECT_NAMES
        .iter()
        .take(count)
        .map(|name| {
            let risk_count = sampler.count(1, 3);
            let activity_count = sampler.count(3, 7);
            OverviewProject {
                id: ProjectId(sampler.id()),
                name: name.to_string(),
                project_type: *sampler.pick(&ProjectType::ordered()),
                status: *sampler.pick(&ProjectStatus::ordered()),
                overall_progress: sampler.percent(5, 95),
                budget_utilization: sampler.percent(10, 110),
                estimated_completion_date: sampler
                    .date_between(date(2024, 7, 1), date(2027, 12, 31)),
                units_sold: sampler.count(10, 100),
                total_units: sampler.count(100, 200),
                key_risks: (0..risk_count)
                    .map(|_| *sampler.pick(&ProjectRisk::ordered()))
                    .collect(),
                financial_health: *sampler.pick(&FinancialHealth::ordered()),
                thumbnail_url: thumbnail_url(name),
                units: Vec::new(),
                recent_activity: project_activities(sampler, activity_count),
                market_sentiment: Some(*sampler.pick(&MarketSentiment::ordered())),
                custom_fields: optional_custom_fields(sampler, 0.7, 2),
                tags: optional_tags(sampler, 0.6, 3),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shells_follow_fixture_order() {
        let mut sampler = Sampler::seeded(2);
        let shells = project_shells(&mut sampler, 3);
        let names: Vec<&str> = shells.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, PROJECT_NAMES[..3].to_vec());
        assert_eq!(
            shells[0].thumbnail_url,
            "https://picsum.photos/seed/projElysi/200/200"
        );
        for shell in &shells {
            assert!(shell.units.is_empty());
            assert!((100..=200).contains(&shell.total_units));
            assert!((1..=3).contains(&shell.key_risks.len()));
            assert!((3..=7).contains(&shell.recent_activity.len()));
        }
    }
}
