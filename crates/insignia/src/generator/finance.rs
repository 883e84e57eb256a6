use chrono::Datelike;

use super::fixtures::BUYER_NAMES;
use super::random::{date, RandomSource, Sampler};
use super::units::UnitSlot;
use crate::platform::{
    CashFlowDataPoint, CostSubCategory, DefaultCostCategory, ExpenseCategory, ExpenseItem,
    ExpensePaymentStatus, InstallmentMilestone, Invoice, InvoiceStatus, PaymentMethod,
    PaymentPlanInstallment, PaymentPlanStructure, ProjectBlueprintTemplate, ProjectType,
};

const PLAN_NAMES: [&str; 5] = [
    "Standard 20/80",
    "Aggressive 40/60",
    "Post-Handover 10/90",
    "Milestone-Based A",
    "Milestone-Based B",
];

const COST_CATEGORIES: [&str; 7] = [
    "Site Preparation & Demolition",
    "Foundation & Substructure",
    "Superstructure",
    "Exterior & Facade",
    "Interior Construction & Finishes",
    "MEP Systems",
    "External Works & Landscaping",
];

const COST_SUB_CATEGORIES: [&str; 7] = [
    "Site Work",
    "Foundation",
    "Structural Steel",
    "HVAC Systems",
    "Electrical Wiring",
    "Interior Finishes",
    "Landscaping",
];

const REVENUE_STREAMS: [&str; 5] = [
    "Unit Sales",
    "Rental Income",
    "Commercial Leases",
    "Service Fees",
    "Parking Fees",
];

const BUDGET_ITEMS: [&str; 12] = [
    "Land",
    "Design",
    "Foundation",
    "Structure",
    "Facade",
    "MEP",
    "Finishes",
    "Marketing",
    "Sales Commission",
    "Legal Fees",
    "Overheads",
    "Contingency Allocation",
];

const SUPPLIERS: [&str; 3] = [
    "Global Construction Supplies",
    "Creative Marketing Agency",
    "Legal Eagles LLP",
];

/// Minimum share kept back for every installment or category still to come.
const RESERVE_PER_SLOT: u32 = 5;

/// Draws one greedy share of `remaining`, leaving room for `slots_after`
/// further shares. The lower bound relaxes when the reserve would otherwise
/// push it above the cap.
fn greedy_share<R: RandomSource>(
    sampler: &mut Sampler<R>,
    remaining: u32,
    slots_after: u32,
    floor: u32,
    cap: u32,
) -> u32 {
    let upper = cap.min(remaining.saturating_sub(slots_after * RESERVE_PER_SLOT));
    sampler.percent(floor.min(upper), upper)
}

/// Installment plans whose percentages always total exactly 100.
pub fn payment_plan_structures<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<PaymentPlanStructure> {
    let mut plans = Vec::with_capacity(count);
    for plan_no in 0..count {
        let installment_count = sampler.percent(3, 6);
        let mut remaining = 100_u32;
        let mut installments = Vec::with_capacity(installment_count as usize);

        for position in 0..installment_count {
            let is_last = position + 1 == installment_count;
            let percentage = if is_last {
                remaining
            } else {
                greedy_share(sampler, remaining, installment_count - 1 - position, 10, 30)
            };
            remaining -= percentage;

            let milestone = *sampler.pick(&InstallmentMilestone::ordered());
            let due_date = if position > 0 && sampler.chance(0.5) {
                Some(sampler.date_between(date(2024, 1, 1), date(2026, 12, 31)))
            } else {
                None
            };

            installments.push(PaymentPlanInstallment {
                percentage,
                milestone,
                due_date,
                invoice_id: None,
            });
        }

        plans.push(PaymentPlanStructure {
            plan_name: format!("{} Var {}", sampler.pick(&PLAN_NAMES), plan_no + 1),
            installments,
        });
    }
    plans
}

/// Splits a parent share into up to `count` sub-categories. Zero-valued rows
/// are dropped, so the result may be shorter than requested.
pub fn cost_sub_categories<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    parent_share: u32,
) -> Vec<CostSubCategory> {
    let mut remaining = parent_share;
    let mut rows = Vec::with_capacity(count);
    for position in 0..count {
        let share = if position + 1 == count {
            remaining
        } else {
            let upper = (parent_share * 2 / 5).min(remaining);
            let lower = (parent_share / 10).min(upper);
            sampler.percent(lower, upper)
        };
        remaining -= share;

        let name = sampler.pick(&COST_SUB_CATEGORIES).to_string();
        let notes = sampler.maybe(0.8, |_| "High variability component.".to_string());
        if share > 0 {
            rows.push(CostSubCategory {
                name,
                estimated_percentage: share,
                notes,
            });
        }
    }
    rows
}

/// Cost categories sharing 100%; categories left with nothing are dropped.
pub fn default_cost_categories<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
) -> Vec<DefaultCostCategory> {
    let count_u32 = count as u32;
    let mut remaining = 100_u32;
    let mut categories = Vec::with_capacity(count);
    for position in 0..count_u32 {
        let share = if position + 1 == count_u32 {
            remaining
        } else {
            greedy_share(sampler, remaining, count_u32 - 1 - position, 10, 40)
        };
        remaining -= share;

        let sub_count = sampler.count(2, 4);
        let sub_categories = cost_sub_categories(sampler, sub_count, share);
        let total_estimated_percentage = sub_categories
            .iter()
            .map(|row| row.estimated_percentage)
            .sum();
        categories.push(DefaultCostCategory {
            category_name: COST_CATEGORIES[position as usize % COST_CATEGORIES.len()].to_string(),
            sub_categories,
            total_estimated_percentage,
        });
    }
    categories.retain(|category| category.total_estimated_percentage > 0);
    categories
}

pub fn blueprint_templates<R: RandomSource>(
    sampler: &mut Sampler<R>,
) -> Vec<ProjectBlueprintTemplate> {
    ProjectType::ordered()
        .into_iter()
        .map(|project_type| {
            let category_count = sampler.count(3, 5);
            let default_cost_categories = default_cost_categories(sampler, category_count);
            let stream_count = sampler.count(2, 4);
            let plan_count = sampler.count(2, 4);
            ProjectBlueprintTemplate {
                project_type,
                default_cost_categories,
                revenue_streams: REVENUE_STREAMS
                    .iter()
                    .take(stream_count)
                    .map(|stream| stream.to_string())
                    .collect(),
                payment_plan_structures: payment_plan_structures(sampler, plan_count),
            }
        })
        .collect()
}

/// Invoices raised against sold or reserved slots using the plan templates.
///
/// Draws that land on a project without committed units, or on a plan with no
/// installments, are skipped, so fewer than `count` invoices may come back.
pub fn invoices<R: RandomSource>(
    sampler: &mut Sampler<R>,
    count: usize,
    slots_by_project: &[Vec<UnitSlot>],
    plans: &[PaymentPlanStructure],
) -> Vec<Invoice> {
    if slots_by_project.is_empty() || plans.is_empty() {
        return Vec::new();
    }

    let mut invoices = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(slots) = sampler.try_pick(slots_by_project) else {
            continue;
        };
        let committed: Vec<&UnitSlot> = slots
            .iter()
            .filter(|slot| slot.availability_status.is_committed())
            .collect();
        let Some(slot) = sampler.try_pick(&committed).copied() else {
            continue;
        };
        let plan = sampler.pick(plans);
        let Some(installment) = sampler.try_pick(&plan.installments) else {
            continue;
        };

        let issue_date = sampler.date_between(date(2023, 1, 1), date(2024, 1, 1));
        let due_date = match installment.due_date {
            Some(due) => due,
            None => sampler.date_within_days(issue_date, 30),
        };
        let status = *sampler.pick(&InvoiceStatus::ordered());
        let paid = status == InvoiceStatus::Paid;
        let overdue = status == InvoiceStatus::Overdue;

        let id = format!("INV-{}", sampler.id().to_uppercase());
        let invoice_number = format!("INV-{}-{}", issue_date.year(), sampler.number(1000, 9999));
        let buyer_name = sampler.pick(&BUYER_NAMES).to_string();

        invoices.push(Invoice {
            id,
            invoice_number,
            unit_id: slot.id.clone(),
            buyer_name,
            installment_milestone: installment.milestone,
            amount_due: slot.initial_price as f64 * (f64::from(installment.percentage) / 100.0),
            issue_date,
            due_date,
            status,
            payment_date: paid.then(|| sampler.date_within_days(due_date, 10)),
            payment_method: paid.then(|| *sampler.pick(&PaymentMethod::ordered())),
            transaction_id: paid.then(|| format!("TXN-{}", sampler.id().to_uppercase())),
            payment_attempts: overdue.then(|| sampler.percent(1, 3)),
            late_fee_applied: if overdue && sampler.chance(0.6) {
                Some(sampler.amount(50, 500))
            } else {
                None
            },
            notes: sampler.maybe(0.8, |_| "Partial payment discussion ongoing.".to_string()),
            linked_payment_plan_name: Some(plan.plan_name.clone()),
        });
    }
    invoices
}

/// Twelve monthly points for the cash-flow chart, January to December 2023.
pub fn cash_flow_series<R: RandomSource>(sampler: &mut Sampler<R>) -> Vec<CashFlowDataPoint> {
    (1..=12)
        .map(|month| CashFlowDataPoint {
            period: date(2023, month, 1).format("%b %Y").to_string(),
            projected_inflow: sampler.amount(500_000, 2_000_000),
            actual_inflow: sampler.amount(400_000, 1_900_000),
            projected_outflow: sampler.amount(300_000, 1_500_000),
            actual_outflow: sampler.amount(250_000, 1_600_000),
        })
        .collect()
}

pub fn expense_items<R: RandomSource>(sampler: &mut Sampler<R>) -> Vec<ExpenseItem> {
    BUDGET_ITEMS
        .iter()
        .map(|item| {
            let budgeted_amount = sampler.amount(100_000, 5_000_000);
            let actual_amount = budgeted_amount as f64 * sampler.float(0.75, 1.25, 2);
            ExpenseItem {
                category: *sampler.pick(&ExpenseCategory::ordered()),
                budget_item: item.to_string(),
                budgeted_amount,
                actual_amount,
                variance: actual_amount - budgeted_amount as f64,
                invoice_reference: sampler.maybe(0.5, |s| format!("INV-{}", &s.id()[..6])),
                supplier_name: sampler.maybe(0.6, |s| s.pick(&SUPPLIERS).to_string()),
                payment_date: sampler
                    .maybe(0.7, |s| s.date_between(date(2023, 1, 1), date(2024, 1, 1))),
                payment_status: if sampler.chance(0.3) {
                    *sampler.pick(&ExpensePaymentStatus::ordered())
                } else {
                    ExpensePaymentStatus::Paid
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{UnitAvailabilityStatus, UnitId};

    #[test]
    fn every_plan_totals_one_hundred_percent() {
        let mut sampler = Sampler::seeded(99);
        let plans = payment_plan_structures(&mut sampler, 200);
        for plan in &plans {
            assert_eq!(plan.total_percentage(), 100, "{}", plan.plan_name);
            assert!((3..=6).contains(&plan.installments.len()));
            assert!(plan.installments.iter().all(|i| i.percentage > 0));
            assert!(plan.installments[0].due_date.is_none());
        }
        assert!(plans[4].plan_name.ends_with("Var 5"));
    }

    #[test]
    fn cost_categories_report_the_sum_of_their_rows() {
        let mut sampler = Sampler::seeded(12);
        for _ in 0..50 {
            let categories = default_cost_categories(&mut sampler, 5);
            for category in &categories {
                let rows: u32 = category
                    .sub_categories
                    .iter()
                    .map(|row| row.estimated_percentage)
                    .sum();
                assert_eq!(category.total_estimated_percentage, rows);
                assert!(category.total_estimated_percentage > 0);
                assert!(category
                    .sub_categories
                    .iter()
                    .all(|row| row.estimated_percentage > 0));
            }
            let overall: u32 = categories
                .iter()
                .map(|category| category.total_estimated_percentage)
                .sum();
            assert_eq!(overall, 100);
        }
    }

    #[test]
    fn invoices_only_target_committed_slots() {
        let mut sampler = Sampler::seeded(31);
        let slots = vec![
            vec![
                UnitSlot {
                    id: UnitId("sold-1".to_string()),
                    initial_price: 1_000_000,
                    availability_status: UnitAvailabilityStatus::Sold,
                },
                UnitSlot {
                    id: UnitId("free-1".to_string()),
                    initial_price: 900_000,
                    availability_status: UnitAvailabilityStatus::Available,
                },
            ],
            Vec::new(),
        ];
        let plans = payment_plan_structures(&mut sampler, 3);
        let invoices = invoices(&mut sampler, 50, &slots, &plans);
        assert!(!invoices.is_empty());
        for invoice in &invoices {
            assert_eq!(invoice.unit_id.0, "sold-1");
            assert!(invoice.amount_due > 0.0 && invoice.amount_due <= 1_000_000.0);
            assert_eq!(invoice.payment_date.is_some(), invoice.status == InvoiceStatus::Paid);
            assert!(invoice.due_date >= invoice.issue_date);
        }
    }

    #[test]
    fn cash_flow_covers_a_calendar_year() {
        let mut sampler = Sampler::seeded(1);
        let series = cash_flow_series(&mut sampler);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].period, "Jan 2023");
        assert_eq!(series[11].period, "Dec 2023");
    }
}
