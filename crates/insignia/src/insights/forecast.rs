use serde::{Deserialize, Serialize};

use crate::platform::OverviewProject;

/// Sell-out change reported when the velocity change wipes out all sales.
pub const STALLED_SELL_OUT_CHANGE: f64 = 200.0;

/// What-if adjustments, each a percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    pub sales_velocity_change: f64,
    pub construction_cost_increase: f64,
    pub market_value_appreciation: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScenarioForecast {
    pub new_projected_portfolio_value: f64,
    pub adjusted_average_profit_margin: f64,
    /// Negative means the portfolio sells out faster.
    pub sell_out_change_percentage: f64,
}

fn factor(percentage: f64) -> f64 {
    1.0 + percentage / 100.0
}

fn floor_to_one(value: f64) -> f64 {
    if value == 0.0 {
        1.0
    } else {
        value
    }
}

pub fn forecast(projects: &[OverviewProject], inputs: &ScenarioInputs) -> ScenarioForecast {
    if projects.is_empty() {
        return ScenarioForecast::default();
    }

    let revenue = floor_to_one(projects.iter().map(OverviewProject::current_value).sum());
    let budget = floor_to_one(projects.iter().map(OverviewProject::initial_value).sum());

    let appreciation = factor(inputs.market_value_appreciation);
    let cost_increase = factor(inputs.construction_cost_increase);

    let new_revenue = revenue * appreciation;
    let new_cost = budget * cost_increase;
    let adjusted_average_profit_margin = if new_revenue > 0.0 {
        (new_revenue - new_cost) / new_revenue * 100.0
    } else {
        0.0
    };

    let sell_out_change_percentage = if inputs.sales_velocity_change == 0.0 {
        0.0
    } else {
        let velocity = factor(inputs.sales_velocity_change);
        if velocity > 0.0 {
            (1.0 / velocity - 1.0) * 100.0
        } else {
            STALLED_SELL_OUT_CHANGE
        }
    };

    ScenarioForecast {
        new_projected_portfolio_value: new_revenue - budget * (cost_increase - 1.0),
        adjusted_average_profit_margin,
        sell_out_change_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_platform_data, GenerationOptions, Sampler};
    use chrono::NaiveDate;

    fn projects() -> Vec<OverviewProject> {
        let options = GenerationOptions {
            project_count: 4,
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        };
        generate_platform_data(&options, &mut Sampler::seeded(5))
            .expect("dataset")
            .overall_projects
    }

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-6
    }

    #[test]
    fn empty_portfolio_forecasts_nothing() {
        let inputs = ScenarioInputs {
            sales_velocity_change: 25.0,
            construction_cost_increase: 10.0,
            market_value_appreciation: 5.0,
        };
        assert_eq!(forecast(&[], &inputs), ScenarioForecast::default());
    }

    #[test]
    fn neutral_scenario_keeps_current_value() {
        let projects = projects();
        let revenue: f64 = projects.iter().map(OverviewProject::current_value).sum();
        let budget: f64 = projects.iter().map(OverviewProject::initial_value).sum();

        let result = forecast(&projects, &ScenarioInputs::default());
        assert!(close(result.new_projected_portfolio_value, revenue));
        assert!(close(
            result.adjusted_average_profit_margin,
            (revenue - budget) / revenue * 100.0
        ));
        assert_eq!(result.sell_out_change_percentage, 0.0);
    }

    #[test]
    fn cost_increase_is_charged_against_budget() {
        let projects = projects();
        let revenue: f64 = projects.iter().map(OverviewProject::current_value).sum();
        let budget: f64 = projects.iter().map(OverviewProject::initial_value).sum();

        let inputs = ScenarioInputs {
            construction_cost_increase: 10.0,
            market_value_appreciation: 20.0,
            ..ScenarioInputs::default()
        };
        let result = forecast(&projects, &inputs);
        assert!(close(
            result.new_projected_portfolio_value,
            revenue * 1.2 - budget * 0.1
        ));
    }

    #[test]
    fn sell_out_change_follows_velocity() {
        let projects = projects();
        let faster = ScenarioInputs {
            sales_velocity_change: 100.0,
            ..ScenarioInputs::default()
        };
        assert!(close(
            forecast(&projects, &faster).sell_out_change_percentage,
            -50.0
        ));

        let stalled = ScenarioInputs {
            sales_velocity_change: -100.0,
            ..ScenarioInputs::default()
        };
        assert_eq!(
            forecast(&projects, &stalled).sell_out_change_percentage,
            STALLED_SELL_OUT_CHANGE
        );
    }
}
