use chrono::Datelike;
use tracing::{debug, info};

use super::facilities::{facility_assets, maintenance_tasks, service_providers};
use super::finance::{
    blueprint_templates, cash_flow_series, expense_items, invoices, payment_plan_structures,
};
use super::fixtures::{DOCUMENT_TYPES, MILESTONES};
use super::progress::{
    compliance_items, media_uploads, milestone_statuses, quality_inspections, stored_documents,
};
use super::projects::{project_shells, MAX_BUDGET_UTILIZATION, MIN_BUDGET_UTILIZATION};
use super::random::{RandomSource, Sampler};
use super::reporting::{geospatial_locations, health_metrics, profitability, reports};
use super::sales::{brokers, communication_logs, leads, reservations, unit_viewings};
use super::units::{populated_units, unit_slots};
use super::{GenerationError, GenerationOptions, MAX_PROJECTS};
use crate::platform::{
    FacilitiesModule, Feature, FinancialModule, KeyChallenge, OverviewProject, PlatformData,
    PlatformInfo, PlatformModules, ProgressComplianceModule, ProjectSetupModule,
    ReportingModule, SalesCrmModule, TargetMarket, UnitAvailabilityStatus, UnitDetailsSchema,
    UnitSizeUnit,
};

const PAYMENT_PLAN_TEMPLATES: usize = 10;
const INVOICE_DRAWS: usize = 200;
const LEADS: usize = 50;
const VIEWINGS: usize = 30;
const BROKERS: usize = 20;
const COMMUNICATION_LOGS: usize = 30;
const MEDIA_UPLOADS: usize = 30;
const COMPLIANCE_ITEMS: usize = 25;
const DOCUMENTS: usize = 40;
const INSPECTIONS: usize = 25;
const REPORTS: usize = 20;
const ASSETS: usize = 40;
const MAINTENANCE_TASKS: usize = 60;
const SERVICE_PROVIDERS: usize = 15;
const SHOWCASE_PROJECTS: usize = 3;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn feature<T>(
    name: &str,
    description: Option<&str>,
    capabilities: &[&str],
    benefits: &[&str],
    catalog: Vec<String>,
    samples: Vec<T>,
) -> Feature<T> {
    Feature {
        name: name.to_string(),
        description: description.map(str::to_string),
        capabilities: strings(capabilities),
        benefits: strings(benefits),
        catalog,
        samples,
    }
}

fn platform_info() -> PlatformInfo {
    PlatformInfo {
        name: "Insignia Dashboard".to_string(),
        target_market: TargetMarket {
            segment: "Boutique & Luxury Real Estate Developers".to_string(),
            industry: "High-End Property Development & Asset Management".to_string(),
            project_value: "Projects ranging from $10M to $500M+".to_string(),
            location: "Prime Global Real Estate Markets".to_string(),
        },
        core_philosophy: strings(&[
            "Excellence in Design & Craftsmanship",
            "Unwavering Commitment to Quality & Detail",
            "Data-Driven Insights for Superior Returns",
            "Building Legacies, Not Just Structures",
        ]),
        key_challenges: [
            (
                "Maintaining exclusivity and brand prestige while scaling.",
                "Curating a portfolio that reflects discernment and lasting value.",
            ),
            (
                "Sourcing unique opportunities in competitive high-value markets.",
                "Identifying and securing prime locations and development prospects.",
            ),
            (
                "Delivering unparalleled client experiences and after-sales service.",
                "Ensuring every touchpoint reinforces the luxury brand promise.",
            ),
            (
                "Integrating cutting-edge technology to enhance luxury and efficiency.",
                "Leveraging innovation to streamline operations and elevate resident experiences.",
            ),
        ]
        .into_iter()
        .map(|(challenge, description)| KeyChallenge {
            challenge: challenge.to_string(),
            description: description.to_string(),
        })
        .collect(),
    }
}

/// Builds the whole dashboard dataset in one pass.
///
/// Projects are shelled first, then invoices are drawn against placeholder
/// unit slots, and finally the real units are generated on the same slots so
/// every invoice joins to a real unit. `units_sold` and the budget clamp are
/// settled after the units exist. Every other module reads the finished
/// project list.
pub fn generate_platform_data<R: RandomSource>(
    options: &GenerationOptions,
    sampler: &mut Sampler<R>,
) -> Result<PlatformData, GenerationError> {
    if options.project_count == 0 || options.project_count > MAX_PROJECTS {
        return Err(GenerationError::InvalidProjectCount {
            requested: options.project_count,
            max: MAX_PROJECTS,
        });
    }
    let today = options.reference_date;
    let year = today.year();

    let shells = project_shells(sampler, options.project_count);
    let payment_plans = payment_plan_structures(sampler, PAYMENT_PLAN_TEMPLATES);
    let slots: Vec<_> = shells
        .iter()
        .map(|shell| unit_slots(sampler, shell.total_units))
        .collect();
    let all_invoices = invoices(sampler, INVOICE_DRAWS, &slots, &payment_plans);
    debug!(
        invoices = all_invoices.len(),
        plans = payment_plans.len(),
        "drew invoices against unit slots"
    );

    let projects: Vec<OverviewProject> = shells
        .into_iter()
        .zip(&slots)
        .map(|(shell, project_slots)| {
            let units = populated_units(
                sampler,
                &shell.id,
                &shell.name,
                project_slots,
                &all_invoices,
                today,
            );
            let units_sold = units
                .iter()
                .filter(|unit| unit.availability_status == UnitAvailabilityStatus::Sold)
                .count();
            OverviewProject {
                total_units: units.len(),
                units_sold,
                budget_utilization: shell
                    .budget_utilization
                    .clamp(MIN_BUDGET_UTILIZATION, MAX_BUDGET_UTILIZATION),
                units,
                ..shell
            }
        })
        .collect();
    let project_names: Vec<String> = projects.iter().map(|project| project.name.clone()).collect();

    let project_property_setup = project_setup_module(sampler, &projects);

    let financial_payment_plan = FinancialModule {
        module_name: "Financial & Payment Plan Mastery (Core Engine)".to_string(),
        payment_plans: feature(
            "Dynamic Payment Plan Creator",
            Some("Drag-and-Drop or Rule-Based Interface"),
            &[
                "Define installment percentages and amounts",
                "Link payments to construction milestones or fixed dates",
                "Automated calculation of installment schedules",
            ],
            &[
                "Eliminates complex manual calculations",
                "Reduces errors in payment schedules",
                "Allows for quick adjustments to market conditions",
            ],
            {
                let examples = sampler.count(3, 5);
                strings(&MILESTONES[..examples])
            },
            payment_plans.clone(),
        ),
        cash_flow: feature(
            "Real-time Cash Flow Dashboard (Project & Portfolio)",
            None,
            &[
                "Visual graphs of projected vs. actual cash inflows/outflows",
                "Cash balance trends over time",
            ],
            &[
                "Provides exact financial position",
                "Helps anticipate cash shortfalls or surpluses",
                "Enables timely decisions to manage liquidity",
            ],
            strings(&[
                "Unit sales payments",
                "Financing disbursements",
                "Rental Income",
                "Construction costs",
                "Marketing & sales expenses",
                "Operational Costs",
            ]),
            cash_flow_series(sampler),
        ),
        invoices: feature(
            "Automated Invoice Tracking",
            None,
            &[
                "Generate invoices from payment plans",
                "Track invoice status (Draft, Sent, Paid, Overdue)",
                "Automated reminders for overdue invoices",
            ],
            &[
                "Streamlines billing process",
                "Improves cash flow by reducing payment delays",
                "Clear audit trail of financial transactions",
            ],
            Vec::new(),
            all_invoices,
        ),
        budget_vs_actuals: feature(
            "Budget vs. Actuals for Expenses (Detailed Tracking)",
            Some("Categorize and track all project expenses against pre-defined budgets with variance analysis."),
            &[],
            &[
                "Highlights cost overruns or savings early",
                "Allows corrective action to maintain profitability",
                "Improves future budgeting accuracy",
            ],
            Vec::new(),
            expense_items(sampler),
        ),
    };

    let all_leads = leads(sampler, LEADS, &project_names);
    let all_units: Vec<_> = projects.iter().flat_map(|project| project.units.iter()).collect();
    let viewings = unit_viewings(sampler, VIEWINGS, &all_leads, &all_units);

    let sales_crm = SalesCrmModule {
        module_name: "Sales & Customer Relationship Management (Streamlined)".to_string(),
        leads: feature(
            "Lead & Prospect Tracker (Intelligent CRM)",
            None,
            &[
                "Manage inquiries from multiple channels",
                "Automated lead scoring and assignment",
                "Track complete communication history",
            ],
            &[
                "Eliminates scattered spreadsheets and lost leads",
                "Centralizes sales efforts",
                "Improves lead conversion rates",
            ],
            Vec::new(),
            all_leads,
        ),
        reservations: feature(
            "Unit Reservation & Booking System",
            Some("Quick, reliable process to mark units as 'reserved' or 'sold', preventing double bookings and errors."),
            &["Directly links to payment plans, inventory, and customer accounts."],
            &[
                "Instant visibility on unit availability",
                "Reduces administrative overhead",
                "Streamlines the sales transaction process",
            ],
            Vec::new(),
            reservations(sampler, &projects, &payment_plans),
        ),
        brokers: feature(
            "Broker & Channel Partner Management",
            None,
            &[
                "Register and manage external brokers/agencies",
                "Track broker-registered clients and deal progression",
                "Automate commission calculations",
            ],
            &[
                "Fair, transparent, and efficient commission management",
                "Fosters strong relationships with sales channel partners",
                "Expands market reach",
            ],
            Vec::new(),
            brokers(sampler, BROKERS),
        ),
        communications: feature(
            "Automated Customer Communication Engine",
            None,
            &[
                "Send automated payment reminders & receipts",
                "Construction progress updates",
                "Handover notifications",
                "New property launch alerts",
                "Viewing confirmations & reminders",
            ],
            &[
                "Enhances customer satisfaction",
                "Reduces manual outreach",
                "Builds trust through consistent information",
            ],
            Vec::new(),
            communication_logs(sampler, COMMUNICATION_LOGS),
        ),
        viewings: feature(
            "Unit Viewing Feedback Capture",
            Some("Collect and analyze feedback from prospective buyers after unit viewings."),
            &[],
            &[
                "Understand property appeal",
                "Identify areas for improvement",
                "Gauge agent effectiveness",
            ],
            Vec::new(),
            viewings,
        ),
    };

    let project_progress_compliance = ProgressComplianceModule {
        module_name: "Project Progress & Compliance (Global Standards)".to_string(),
        milestones: feature(
            "Milestone & Progress Tracker (Advanced)",
            None,
            &[
                "Define key construction and project milestones",
                "Update completion status with evidence",
                "Link milestones to payment plan triggers",
                "Track sub-task progress and dependencies",
            ],
            &[
                "Simple, visual progress tracking",
                "Supports communication with regulatory bodies",
                "Early identification of potential delays and bottlenecks",
            ],
            strings(&MILESTONES),
            milestone_statuses(sampler, &projects),
        ),
        media_uploads: feature(
            "Photo & Video Upload for Progress Verification",
            Some("Site managers can easily upload timestamped, geotagged photos/videos directly from mobile or desktop."),
            &[
                "Timestamped and geotagged uploads",
                "Tagging to specific milestones",
                "Mobile device support",
                "Categorization (e.g., Progress, Snagging, Safety)",
            ],
            &[
                "Verifiable proof of progress",
                "Supports remote project monitoring",
                "Enhances transparency",
            ],
            Vec::new(),
            media_uploads(sampler, MEDIA_UPLOADS, &project_names, today),
        ),
        compliance: feature(
            "Regulatory Compliance Checklists & Reminders",
            Some("Pre-built, customizable checklists for common regulatory requirements."),
            &[
                "Automated reminders for submission deadlines",
                "Customizable checklists",
                "Document attachment and versioning",
                "Audit trail for compliance actions",
            ],
            &[
                "Reduces risk of non-compliance",
                "Ensures smooth project flow",
                "Centralizes all compliance-related documentation",
            ],
            strings(&[
                "Environmental Impact Assessment",
                "Building Permit Application",
                "Utility Connection Approval",
                "Civil Defense Approval",
                "Handover Certification",
            ]),
            compliance_items(sampler, COMPLIANCE_ITEMS),
        ),
        documents: feature(
            "Digital Document Repository (Secure & Categorized)",
            Some("Store all project-related documents securely, with version control, accessible by authorized personnel."),
            &[
                "Secure, cloud-based storage",
                "Categorized organization with tagging",
                "Powerful search functionality",
                "Version control",
                "Access logs and audit trails",
            ],
            &[
                "Centralized, single source of truth for documents",
                "Supports audits and legal discovery",
                "Reduces risk of lost documents",
                "Controlled access based on roles",
            ],
            DOCUMENT_TYPES
                .iter()
                .chain(&[
                    "Sales Agreements",
                    "Supplier Contracts",
                    "Compliance Certificates",
                    "Inspection Reports",
                ])
                .map(|kind| kind.to_string())
                .collect(),
            stored_documents(sampler, DOCUMENTS, &project_names)?,
        ),
        quality_inspections: feature(
            "Quality Assurance & Control Checklists",
            Some("Conduct and track quality inspections for construction milestones and unit handovers."),
            &[],
            &[
                "Ensures adherence to quality standards",
                "Systematic defect (snag) tracking and resolution",
                "Improves client satisfaction with final product",
            ],
            Vec::new(),
            quality_inspections(sampler, INSPECTIONS, &projects, today),
        ),
    };

    let reporting_decision_support = ReportingModule {
        module_name: "Reporting & Decision Support (Actionable Insights)".to_string(),
        project_health: feature(
            "Comprehensive Project Health Dashboard",
            Some("At-a-glance, configurable view of key performance indicators (KPIs) across projects or portfolio."),
            &[],
            &[
                "Immediate understanding of project performance",
                "No need to dig through multiple reports",
                "Enables proactive decision-making",
            ],
            strings(&[
                "Units Sold vs. Target",
                "Revenue Collected vs. Forecast",
                "Budget vs. Actual Spend",
                "Project Completion Percentage",
                "Customer Satisfaction Index",
                "Risk Exposure Level",
            ]),
            health_metrics(sampler, &projects),
        ),
        profitability: feature(
            "Advanced Profitability Analysis & Forecasting",
            Some("Based on actuals from financial module and projections from sales/cost plans."),
            &[
                "Estimated Gross Profit Margin",
                "Net Profit Margin",
                "Return on Investment (ROI)",
                "Internal Rate of Return (IRR)",
            ],
            &[
                "Deep understanding of project financial success",
                "Supports investment decisions",
                "Identifies most profitable project types",
            ],
            Vec::new(),
            profitability(sampler, &projects, year),
        ),
        reports: feature(
            "Investor & Bank Reporting Templates (Customizable)",
            Some("Generate clear, concise, and professional reports tailored for investors, banks, and other stakeholders."),
            &[],
            &[
                "Professional, consistent, and accurate reporting",
                "Saves significant time in report preparation",
                "Builds trust with financial partners",
            ],
            strings(&[
                "Quarterly Project Progress Report",
                "Annual Financial Performance Summary",
                "Unit Sales & Inventory Status Report",
                "Compliance Audit Summary",
                "Market Analysis Report",
            ]),
            reports(sampler, REPORTS, &project_names, year),
        ),
    };

    let assets = facility_assets(sampler, ASSETS, &project_names);
    let tasks = maintenance_tasks(sampler, MAINTENANCE_TASKS, &assets);
    let facilities_management = FacilitiesModule {
        module_name: "Facilities Management & Operations".to_string(),
        assets: feature(
            "Centralized Asset Register",
            Some("Manage all critical facility assets across projects, from HVAC units to elevators."),
            &[],
            &[
                "Comprehensive overview of all manageable assets",
                "Track maintenance history and warranty",
                "Plan for replacements and upgrades effectively",
                "Detailed component tracking",
            ],
            Vec::new(),
            assets,
        ),
        maintenance: feature(
            "Proactive Maintenance Scheduler",
            Some("Schedule, assign, and track preventive and corrective maintenance tasks with cost monitoring."),
            &[],
            &[
                "Reduce asset downtime",
                "Optimize technician workload",
                "Ensure timely completion of critical maintenance",
                "Track maintenance costs accurately",
            ],
            Vec::new(),
            tasks,
        ),
        service_providers: feature(
            "Service Provider Directory",
            Some("Manage contacts, contracts, and performance for external service providers."),
            &[],
            &[
                "Quickly find and dispatch qualified vendors",
                "Track service quality and costs",
                "Manage contracts and SLAs",
            ],
            Vec::new(),
            service_providers(sampler, SERVICE_PROVIDERS),
        ),
    };

    let data = PlatformData {
        platform: platform_info(),
        modules: PlatformModules {
            project_property_setup,
            financial_payment_plan,
            sales_crm,
            project_progress_compliance,
            reporting_decision_support,
            facilities_management,
        },
        overall_projects: projects,
    };

    info!(
        projects = data.overall_projects.len(),
        units = data.units().count(),
        invoices = data.invoices().len(),
        reference_date = %today,
        "generated platform dataset"
    );
    Ok(data)
}

fn project_setup_module<R: RandomSource>(
    sampler: &mut Sampler<R>,
    projects: &[OverviewProject],
) -> ProjectSetupModule {
    let showcase_units: Vec<_> = projects
        .iter()
        .take(SHOWCASE_PROJECTS)
        .flat_map(|project| {
            let take = sampler.count(8, 20);
            project.units.iter().take(take).cloned().collect::<Vec<_>>()
        })
        .collect();

    ProjectSetupModule {
        module_name: "Project & Property Setup (Global Standards)".to_string(),
        blueprint_templates: feature(
            "Universal Project Blueprint Templates",
            Some("Pre-configured templates for common global project types (e.g. residential, commercial, mixed-use)."),
            &[],
            &[
                "Reduces setup time drastically",
                "Ensures comprehensive data capture from day one",
                "Guides developers on best-practice data structures",
            ],
            Vec::new(),
            blueprint_templates(sampler),
        ),
        unit_inventory: feature(
            "Intuitive Unit Inventory Manager",
            Some("Visual floor plans (conceptual) where developers can click on units to add/edit details."),
            &[],
            &[
                "Quick overview of available and sold stock",
                "Easy to update unit status as sales progress",
                "Centralized unit data for all teams",
            ],
            Vec::new(),
            showcase_units,
        ),
        unit_details: UnitDetailsSchema {
            size: 1200,
            size_unit: UnitSizeUnit::Sqft,
            view: None,
            bedrooms: Some(2),
            initial_price: 750_000,
            availability_status: UnitAvailabilityStatus::Available,
        },
        geospatial: feature(
            "Geospatial Lite Mapping",
            Some("Simple map integration to pinpoint project locations and key area data."),
            &[
                "Display nearby amenities",
                "Visualize high-level zoning information",
                "Embed maps in marketing materials",
            ],
            &[
                "Aids in initial site assessment and feasibility",
                "Supports marketing and sales efforts",
                "Provides context for project planning",
            ],
            Vec::new(),
            geospatial_locations(sampler, projects),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::date;

    #[test]
    fn rejects_project_counts_outside_fixture_pool() {
        let mut sampler = Sampler::seeded(1);
        for requested in [0, MAX_PROJECTS + 1] {
            let options = GenerationOptions {
                project_count: requested,
                reference_date: date(2024, 1, 15),
            };
            let err = generate_platform_data(&options, &mut sampler).unwrap_err();
            assert!(matches!(
                err,
                GenerationError::InvalidProjectCount { max, .. } if max == MAX_PROJECTS
            ));
        }
    }

    #[test]
    fn invoices_join_to_real_units() {
        let mut sampler = Sampler::seeded(42);
        let options = GenerationOptions {
            project_count: 4,
            reference_date: date(2024, 1, 15),
        };
        let data = generate_platform_data(&options, &mut sampler).expect("dataset");
        assert_eq!(data.overall_projects.len(), 4);
        assert!(!data.invoices().is_empty());
        for invoice in data.invoices() {
            let unit = data
                .units()
                .find(|unit| unit.id == invoice.unit_id)
                .expect("invoice unit exists");
            assert!(unit.availability_status.is_committed());
            assert!(unit.payment_adherence.is_some());
        }
        for project in &data.overall_projects {
            assert!(
                (MIN_BUDGET_UTILIZATION..=MAX_BUDGET_UTILIZATION)
                    .contains(&project.budget_utilization)
            );
            assert!(project.units.iter().all(|unit| unit.project_id == project.id));
        }
    }
}
