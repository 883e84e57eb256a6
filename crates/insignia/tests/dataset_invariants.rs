use chrono::NaiveDate;
use insignia::generator::{
    calculate_payment_adherence, default_cost_categories, document_versions,
    generate_platform_data, payment_plan_structures, GenerationOptions, Sampler,
};
use insignia::platform::{PlatformData, UnitAvailabilityStatus};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid reference date")
}

fn dataset(seed: u64) -> PlatformData {
    generate_platform_data(&GenerationOptions::new(reference_date()), &mut Sampler::seeded(seed))
        .expect("dataset generates")
}

#[test]
fn units_sold_matches_sold_units_in_every_project() {
    for seed in [1, 7, 42] {
        let data = dataset(seed);
        for project in &data.overall_projects {
            assert_eq!(
                project.units_sold,
                project.units_with_status(UnitAvailabilityStatus::Sold),
                "project {}",
                project.name
            );
            assert_eq!(project.total_units, project.units.len());
        }
    }
}

#[test]
fn every_payment_plan_totals_one_hundred_percent() {
    let data = dataset(3);
    let plans = data
        .modules
        .financial_payment_plan
        .payment_plans
        .samples
        .iter()
        .chain(
            data.modules
                .project_property_setup
                .blueprint_templates
                .samples
                .iter()
                .flat_map(|template| template.payment_plan_structures.iter()),
        );
    for plan in plans {
        assert_eq!(plan.total_percentage(), 100, "plan {}", plan.plan_name);
        assert!((3..=6).contains(&plan.installments.len()));
    }

    let mut sampler = Sampler::seeded(99);
    for plan in payment_plan_structures(&mut sampler, 200) {
        assert_eq!(plan.total_percentage(), 100);
    }
}

#[test]
fn cost_category_totals_match_their_sub_categories() {
    let mut sampler = Sampler::seeded(5);
    for _ in 0..50 {
        for category in default_cost_categories(&mut sampler, 5) {
            let sum: u32 = category
                .sub_categories
                .iter()
                .map(|row| row.estimated_percentage)
                .sum();
            assert_eq!(category.total_estimated_percentage, sum);
            assert!(category.total_estimated_percentage > 0);
            assert!(category
                .sub_categories
                .iter()
                .all(|row| row.estimated_percentage > 0));
        }
    }
}

#[test]
fn only_committed_units_carry_adherence() {
    let data = dataset(11);
    for unit in data.units() {
        if !unit.availability_status.is_committed() {
            assert!(unit.payment_adherence.is_none(), "unit {}", unit.id);
            assert_eq!(
                calculate_payment_adherence(unit, data.invoices(), reference_date()),
                None
            );
        }
    }
}

#[test]
fn document_histories_are_chronological() {
    let data = dataset(21);
    for document in &data.modules.project_progress_compliance.documents.samples {
        let dates: Vec<NaiveDate> = document
            .version_history
            .iter()
            .map(|version| version.upload_date)
            .collect();
        assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    let mut sampler = Sampler::seeded(4);
    let history = document_versions(&mut sampler, 6, "/docs/Permit/abc.pdf");
    assert_eq!(history.len(), 6);
    assert!(history
        .windows(2)
        .all(|pair| pair[0].upload_date <= pair[1].upload_date));
}

#[test]
fn same_seed_reproduces_the_dataset() {
    assert_eq!(dataset(8), dataset(8));
}
