use serde::Serialize;

use crate::platform::{MaintenanceTask, MaintenanceTaskStatus};

/// Hours assumed for an unscheduled task without an estimate.
const DEFAULT_ESTIMATED_HOURS: u32 = 24;
const ON_TIME_TOLERANCE: f64 = 1.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicianPerformance {
    pub technician_name: String,
    pub tasks_assigned: usize,
    pub tasks_completed: usize,
    pub tasks_completed_on_time: usize,
    pub average_completion_days: f64,
    pub current_open_tasks: usize,
}

impl TechnicianPerformance {
    fn new(technician_name: &str) -> Self {
        Self {
            technician_name: technician_name.to_string(),
            tasks_assigned: 0,
            tasks_completed: 0,
            tasks_completed_on_time: 0,
            average_completion_days: 0.0,
            current_open_tasks: 0,
        }
    }

    pub fn on_time_percentage(&self) -> f64 {
        if self.tasks_completed == 0 {
            0.0
        } else {
            self.tasks_completed_on_time as f64 / self.tasks_completed as f64 * 100.0
        }
    }

    fn record(&mut self, task: &MaintenanceTask) {
        self.tasks_assigned += 1;
        if task.status == MaintenanceTaskStatus::Completed {
            self.tasks_completed += 1;
            if completed_on_time(task) {
                self.tasks_completed_on_time += 1;
            }
            if let Some(completed) = task.completed_date {
                let days = (completed - task.reported_date).num_days().abs() as f64;
                let previous = self.tasks_completed as f64 - 1.0;
                self.average_completion_days =
                    (self.average_completion_days * previous + days) / self.tasks_completed as f64;
            }
        } else if task.status.is_open() {
            self.current_open_tasks += 1;
        }
    }
}

fn completed_on_time(task: &MaintenanceTask) -> bool {
    let Some(completed) = task.completed_date else {
        return false;
    };
    match task.scheduled_date {
        Some(scheduled) => completed <= scheduled,
        None => {
            let elapsed_hours = (completed - task.reported_date).num_hours() as f64;
            let allowance = f64::from(task.estimated_hours.unwrap_or(DEFAULT_ESTIMATED_HOURS))
                * ON_TIME_TOLERANCE;
            elapsed_hours <= allowance
        }
    }
}

/// Workload and punctuality per assignee, in order of first assignment.
/// Tasks without an assignee are skipped.
pub fn technician_performance(tasks: &[MaintenanceTask]) -> Vec<TechnicianPerformance> {
    let mut rows: Vec<TechnicianPerformance> = Vec::new();
    for task in tasks.iter().filter(|task| !task.assigned_to.is_empty()) {
        let position = match rows
            .iter()
            .position(|row| row.technician_name == task.assigned_to)
        {
            Some(position) => position,
            None => {
                rows.push(TechnicianPerformance::new(&task.assigned_to));
                rows.len() - 1
            }
        };
        rows[position].record(task);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::platform::TaskPriority;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).expect("valid date")
    }

    fn task(assignee: &str, status: MaintenanceTaskStatus) -> MaintenanceTask {
        MaintenanceTask {
            id: format!("MT-{assignee}"),
            facility_asset_id: "FA-1".to_string(),
            facility_asset_name: "Chiller".to_string(),
            task_description: "Inspect".to_string(),
            priority: TaskPriority::Medium,
            task_type: None,
            status,
            reported_date: day(1),
            scheduled_date: None,
            completed_date: None,
            assigned_to: assignee.to_string(),
            notes: None,
            estimated_hours: None,
            actual_hours: None,
            labor_costs: None,
            parts_cost: None,
            total_cost: None,
            invoice_reference: None,
            tools_required: Vec::new(),
        }
    }

    #[test]
    fn counts_completion_and_open_work() {
        let mut scheduled = task("Ana", MaintenanceTaskStatus::Completed);
        scheduled.scheduled_date = Some(day(5));
        scheduled.completed_date = Some(day(4));

        let mut late = task("Ana", MaintenanceTaskStatus::Completed);
        late.estimated_hours = Some(8);
        late.completed_date = Some(day(3));

        let open = task("Ana", MaintenanceTaskStatus::OnHoldParts);
        let cancelled = task("Ben", MaintenanceTaskStatus::Cancelled);
        let unassigned = task("", MaintenanceTaskStatus::Pending);

        let rows = technician_performance(&[scheduled, late, open, cancelled, unassigned]);
        assert_eq!(rows.len(), 2);

        let ana = &rows[0];
        assert_eq!(ana.technician_name, "Ana");
        assert_eq!(ana.tasks_assigned, 3);
        assert_eq!(ana.tasks_completed, 2);
        assert_eq!(ana.tasks_completed_on_time, 1);
        assert_eq!(ana.current_open_tasks, 1);
        assert_eq!(ana.average_completion_days, 2.5);
        assert_eq!(ana.on_time_percentage(), 50.0);

        let ben = &rows[1];
        assert_eq!(ben.tasks_assigned, 1);
        assert_eq!(ben.current_open_tasks, 0);
        assert_eq!(ben.on_time_percentage(), 0.0);
    }

    #[test]
    fn unscheduled_tasks_default_to_a_day_of_work() {
        let mut quick = task("Cy", MaintenanceTaskStatus::Completed);
        quick.completed_date = Some(day(2));
        let rows = technician_performance(&[quick]);
        assert_eq!(rows[0].tasks_completed_on_time, 1);
        assert_eq!(rows[0].average_completion_days, 1.0);
    }
}
