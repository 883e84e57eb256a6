use chrono::NaiveDate;
use insignia::generator::{
    calculate_payment_adherence, generate_platform_data, GenerationOptions, Sampler,
};
use insignia::platform::{
    InstallmentMilestone, Invoice, InvoiceStatus, PopulatedUnitDetail, UnitAvailabilityStatus,
};

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid date")
}

fn committed_unit() -> PopulatedUnitDetail {
    let options = GenerationOptions {
        project_count: 1,
        reference_date: day(1, 15),
    };
    let data = generate_platform_data(&options, &mut Sampler::seeded(12)).expect("dataset");
    let mut unit = data.units().next().cloned().expect("at least one unit");
    unit.availability_status = UnitAvailabilityStatus::Sold;
    unit
}

fn invoice(unit: &PopulatedUnitDetail, id: &str, due: NaiveDate, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.to_string(),
        invoice_number: format!("INV-{id}"),
        unit_id: unit.id.clone(),
        buyer_name: "Jordan Avery".to_string(),
        installment_milestone: InstallmentMilestone::Booking,
        amount_due: 25_000.0,
        issue_date: due - chrono::Duration::days(30),
        due_date: due,
        status,
        payment_date: None,
        payment_method: None,
        transaction_id: None,
        payment_attempts: None,
        late_fee_applied: None,
        notes: None,
        linked_payment_plan_name: None,
    }
}

#[test]
fn one_late_and_one_punctual_payment_split_evenly() {
    let unit = committed_unit();
    let mut late = invoice(&unit, "a", day(2, 1), InvoiceStatus::Paid);
    late.payment_date = Some(day(2, 4));
    let mut punctual = invoice(&unit, "b", day(3, 1), InvoiceStatus::Paid);
    punctual.payment_date = Some(day(3, 1));

    let metrics =
        calculate_payment_adherence(&unit, &[late, punctual], day(6, 1)).expect("metrics");
    assert_eq!(metrics.on_time_payment_percentage, 50.0);
    assert_eq!(metrics.average_days_overdue, 1.5);
    assert_eq!(metrics.total_installments, 2);
    assert_eq!(metrics.last_payment_date, Some(day(3, 1)));
    assert_eq!(metrics.last_payment_amount, Some(25_000.0));
}

#[test]
fn committed_unit_without_payments_defaults_to_punctual() {
    let mut unit = committed_unit();
    unit.availability_status = UnitAvailabilityStatus::Reserved;
    let invoices = vec![
        invoice(&unit, "a", day(2, 1), InvoiceStatus::Sent),
        invoice(&unit, "b", day(8, 1), InvoiceStatus::Draft),
    ];

    let metrics = calculate_payment_adherence(&unit, &invoices, day(3, 1)).expect("metrics");
    assert_eq!(metrics.on_time_payment_percentage, 100.0);
    assert_eq!(metrics.average_days_overdue, 0.0);
    assert_eq!(metrics.overdue_installments, 1);
    assert_eq!(metrics.next_payment_due_date, Some(day(8, 1)));
    assert_eq!(metrics.last_payment_date, None);
}

#[test]
fn units_without_invoices_or_commitment_have_no_metrics() {
    let mut unit = committed_unit();
    assert_eq!(calculate_payment_adherence(&unit, &[], day(3, 1)), None);

    let paid = invoice(&unit, "a", day(2, 1), InvoiceStatus::Paid);
    unit.availability_status = UnitAvailabilityStatus::Available;
    assert_eq!(calculate_payment_adherence(&unit, &[paid], day(3, 1)), None);
}
