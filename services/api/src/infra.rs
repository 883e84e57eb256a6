use chrono::{Local, NaiveDate};
use insignia::ai::GeminiClient;
use insignia::config::GenerationConfig;
use insignia::error::AppError;
use insignia::generator::generate_platform_data;
use insignia::platform::PlatformCatalog;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<PlatformCatalog>,
    pub(crate) ai: Arc<GeminiClient>,
}

/// Generates the dataset once and wraps it with its lookup index.
pub(crate) fn build_catalog(config: &GenerationConfig) -> Result<PlatformCatalog, AppError> {
    let options = config.options(Local::now().date_naive());
    let mut sampler = config.sampler();
    let data = generate_platform_data(&options, &mut sampler)?;
    info!(
        projects = data.overall_projects.len(),
        reference_date = %options.reference_date,
        seeded = config.seed.is_some(),
        "platform dataset generated"
    );
    Ok(PlatformCatalog::new(data))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use insignia::config::AiConfig;
    use metrics_exporter_prometheus::PrometheusBuilder;

    pub(crate) fn seeded_catalog(seed: u64) -> PlatformCatalog {
        let config = GenerationConfig {
            seed: Some(seed),
            project_count: 4,
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 15),
        };
        build_catalog(&config).expect("dataset generates")
    }

    pub(crate) fn state_with(ai: AiConfig) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            catalog: Arc::new(seeded_catalog(11)),
            ai: Arc::new(GeminiClient::new(&ai)),
        }
    }

    pub(crate) fn state() -> AppState {
        state_with(AiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date(" 2024-02-29 "),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date"))
        );
        assert!(parse_date("29/02/2024").is_err());
    }

    #[test]
    fn seeded_catalogs_repeat() {
        let first = test_support::seeded_catalog(3);
        let second = test_support::seeded_catalog(3);
        assert_eq!(first.data(), second.data());
        assert_eq!(first.projects().len(), 4);
    }
}
