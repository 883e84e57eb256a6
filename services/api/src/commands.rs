use crate::infra::{build_catalog, parse_date};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;
use clap::Args;
use insignia::ai::GeminiClient;
use insignia::config::{AppConfig, GenerationConfig};
use insignia::error::AppError;
use insignia::insights::{summarize, technician_performance, PortfolioSummary};
use insignia::platform::{PlatformCatalog, UnitId};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct DatasetArgs {
    /// Seed for a reproducible dataset
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Number of projects to generate
    #[arg(long)]
    pub(crate) projects: Option<usize>,
    /// Reference "today" (YYYY-MM-DD) for adherence and reporting periods
    #[arg(long, value_parser = parse_date)]
    pub(crate) reference_date: Option<NaiveDate>,
}

impl DatasetArgs {
    fn apply(&self, config: &mut GenerationConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(projects) = self.projects {
            config.project_count = projects;
        }
        if let Some(date) = self.reference_date {
            config.reference_date = Some(date);
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetArgs,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
    /// Write to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SummaryArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetArgs,
}

/// Unit ids are only stable for a fixed seed, so the dataset must be
/// regenerated with the seed, project count and reference date of the run
/// the id came from.
#[derive(Args, Debug)]
pub(crate) struct DescribeUnitArgs {
    /// Unit identifier from a seeded `generate` or `serve` run
    #[arg(long)]
    pub(crate) unit_id: String,
    /// Seed of the run the unit id came from
    #[arg(long)]
    pub(crate) seed: u64,
    /// Number of projects in that run
    #[arg(long)]
    pub(crate) projects: Option<usize>,
    /// Reference date of that run (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) reference_date: Option<NaiveDate>,
}

impl DescribeUnitArgs {
    fn dataset(&self) -> DatasetArgs {
        DatasetArgs {
            seed: Some(self.seed),
            projects: self.projects,
            reference_date: self.reference_date,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeContractArgs {
    /// Document to analyze
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Question to answer from the document
    #[arg(long)]
    pub(crate) query: String,
    /// MIME type; inferred from the file extension when omitted
    #[arg(long)]
    pub(crate) mime_type: Option<String>,
}

fn load_catalog(dataset: &DatasetArgs) -> Result<(AppConfig, PlatformCatalog), AppError> {
    let mut config = AppConfig::load()?;
    dataset.apply(&mut config.generation);
    let catalog = build_catalog(&config.generation)?;
    Ok((config, catalog))
}

pub(crate) async fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let (_, catalog) = load_catalog(&args.dataset)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(catalog.data())?
    } else {
        serde_json::to_string(catalog.data())?
    };

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, json).await?;
            println!(
                "Wrote {} projects to {}",
                catalog.projects().len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), AppError> {
    let (_, catalog) = load_catalog(&args.dataset)?;
    let summary = summarize(catalog.projects());
    render_summary(&catalog, &summary);
    Ok(())
}

fn render_summary(catalog: &PlatformCatalog, summary: &PortfolioSummary) {
    let active = &summary.active_projects;
    println!("{}", catalog.data().platform.name);
    println!(
        "- {} active projects | {:.1}% average progress | {} of {} units sold",
        active.total_active_projects,
        active.average_progress,
        active.total_sold_units,
        active.total_units
    );
    for status in &active.status_breakdown {
        println!("  - {}: {}", status.label, status.count);
    }

    let value = &summary.portfolio_value;
    println!(
        "\nPortfolio value ${:.0} against ${:.0} allocated",
        value.total_value, value.total_budget_allocated
    );
    for group in &summary.value_by_type {
        println!(
            "  - {}: ${:.0} across {} projects",
            group.name,
            group.size,
            group.children.len()
        );
    }

    let sales = &summary.sales;
    println!(
        "\nSales: {} sold, {} reserved of {} units ({:.1}%)",
        sales.total_sold, sales.total_reserved, sales.total_units, sales.overall_sales_percentage
    );
    for project in &sales.by_project {
        println!(
            "  - {}: {}/{} ({:.0}%)",
            project.project_name,
            project.units_sold,
            project.total_units,
            project.progress_percentage
        );
    }

    if !summary.risks.is_empty() {
        println!("\nRisk exposure:");
        for risk in &summary.risks {
            println!(
                "  - {}: {}",
                risk.description,
                risk.affected_projects.join(", ")
            );
        }
    }

    let technicians =
        technician_performance(&catalog.data().modules.facilities_management.maintenance.samples);
    if !technicians.is_empty() {
        println!("\nTechnicians:");
        for row in technicians {
            println!(
                "  - {}: {} assigned | {} open | {:.0}% on time | {:.1} days avg",
                row.technician_name,
                row.tasks_assigned,
                row.current_open_tasks,
                row.on_time_percentage(),
                row.average_completion_days
            );
        }
    }
}

pub(crate) async fn run_describe_unit(args: DescribeUnitArgs) -> Result<(), AppError> {
    let (config, catalog) = load_catalog(&args.dataset())?;
    let id = UnitId(args.unit_id);
    let (_, unit) = catalog.unit(&id).ok_or_else(|| AppError::NotFound {
        entity: "unit",
        id: id.0.clone(),
    })?;

    let client = GeminiClient::new(&config.ai);
    let description = client.generate_property_description(unit).await?;
    println!("{} {} ({})", unit.project_name, unit.unit_number, id);
    println!("{description}");
    Ok(())
}

pub(crate) fn infer_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

pub(crate) async fn run_analyze_contract(args: AnalyzeContractArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let client = GeminiClient::new(&config.ai);

    let bytes = tokio::fs::read(&args.file).await?;
    let mime_type = args
        .mime_type
        .unwrap_or_else(|| infer_mime_type(&args.file));
    let encoded = STANDARD.encode(bytes);

    let analysis = client
        .analyze_contract(&encoded, &mime_type, &args.query)
        .await?;
    println!("{analysis}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_follows_extension() {
        assert_eq!(infer_mime_type(Path::new("lease.pdf")), "application/pdf");
        assert_eq!(infer_mime_type(Path::new("notes.txt")), "text/plain");
        assert_eq!(
            infer_mime_type(Path::new("contract")),
            "application/octet-stream"
        );
    }

    #[test]
    fn dataset_flags_override_configuration() {
        let mut config = GenerationConfig::default();
        let args = DatasetArgs {
            seed: Some(9),
            projects: Some(3),
            reference_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        };
        args.apply(&mut config);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.project_count, 3);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn describe_unit_pins_the_dataset_seed() {
        let args = DescribeUnitArgs {
            unit_id: "abc123".to_string(),
            seed: 42,
            projects: Some(5),
            reference_date: None,
        };
        let mut config = GenerationConfig::default();
        args.dataset().apply(&mut config);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.project_count, 5);
    }
}
