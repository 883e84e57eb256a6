use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use insignia::error::AppError;
use insignia::insights::search::{filter, search_platform, SearchTerm};
use insignia::insights::{
    forecast, summarize, technician_performance, PortfolioSummary, ScenarioForecast,
    ScenarioInputs, TechnicianPerformance,
};
use insignia::platform::{
    FacilityAsset, Invoice, Lead, MaintenanceTask, OverviewProject, PopulatedUnitDetail,
    ProjectId, ProjectListing, UnitId,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProjectQuery {
    #[serde(default)]
    pub(crate) search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) q: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct UnitResponse {
    pub(crate) project_id: ProjectId,
    pub(crate) project_name: String,
    pub(crate) unit: PopulatedUnitDetail,
    pub(crate) invoices: Vec<Invoice>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssetResponse {
    pub(crate) asset: FacilityAsset,
    pub(crate) maintenance_tasks: Vec<MaintenanceTask>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PropertyDescriptionRequest {
    pub(crate) unit_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContractAnalysisRequest {
    pub(crate) file_base64: String,
    pub(crate) mime_type: String,
    pub(crate) query: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeneratedText {
    pub(crate) text: String,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/platform", get(platform_endpoint))
        .route("/api/v1/projects", get(projects_endpoint))
        .route("/api/v1/projects/:project_id", get(project_endpoint))
        .route("/api/v1/units/:unit_id", get(unit_endpoint))
        .route("/api/v1/leads/:lead_id", get(lead_endpoint))
        .route("/api/v1/assets/:asset_id", get(asset_endpoint))
        .route("/api/v1/search", get(search_endpoint))
        .route("/api/v1/portfolio/summary", get(portfolio_endpoint))
        .route(
            "/api/v1/technicians/performance",
            get(technicians_endpoint),
        )
        .route("/api/v1/forecast", post(forecast_endpoint))
        .route(
            "/api/v1/ai/property-description",
            post(property_description_endpoint),
        )
        .route(
            "/api/v1/ai/contract-analysis",
            post(contract_analysis_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "ai_configured": state.ai.is_configured() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

// Borrowed payloads are serialized before the handler returns.
pub(crate) async fn platform_endpoint(Extension(state): Extension<AppState>) -> Response {
    Json(state.catalog.data()).into_response()
}

pub(crate) async fn projects_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<ProjectQuery>,
) -> Json<Vec<ProjectListing>> {
    let term = SearchTerm::new(query.search.as_deref().unwrap_or_default());
    let listings = filter(state.catalog.projects(), &term)
        .into_iter()
        .map(OverviewProject::listing)
        .collect();
    Json(listings)
}

/// Resolves by id first, then by exact project name.
pub(crate) async fn project_endpoint(
    Extension(state): Extension<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<OverviewProject>, AppError> {
    let id = ProjectId(project_id);
    state
        .catalog
        .project(&id)
        .or_else(|| state.catalog.project_by_name(&id.0))
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound {
            entity: "project",
            id: id.0,
        })
}

pub(crate) async fn lead_endpoint(
    Extension(state): Extension<AppState>,
    Path(lead_id): Path<String>,
) -> Result<Json<Lead>, AppError> {
    state
        .catalog
        .lead(&lead_id)
        .cloned()
        .map(Json)
        .ok_or(AppError::NotFound {
            entity: "lead",
            id: lead_id,
        })
}

pub(crate) async fn asset_endpoint(
    Extension(state): Extension<AppState>,
    Path(asset_id): Path<String>,
) -> Result<Json<AssetResponse>, AppError> {
    let asset = state
        .catalog
        .asset(&asset_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound {
            entity: "asset",
            id: asset_id.clone(),
        })?;

    Ok(Json(AssetResponse {
        maintenance_tasks: state
            .catalog
            .tasks_for_asset(&asset_id)
            .into_iter()
            .cloned()
            .collect(),
        asset,
    }))
}

pub(crate) async fn unit_endpoint(
    Extension(state): Extension<AppState>,
    Path(unit_id): Path<String>,
) -> Result<Json<UnitResponse>, AppError> {
    let id = UnitId(unit_id);
    let (project, unit) = state.catalog.unit(&id).ok_or_else(|| AppError::NotFound {
        entity: "unit",
        id: id.0.clone(),
    })?;

    Ok(Json(UnitResponse {
        project_id: project.id.clone(),
        project_name: project.name.clone(),
        unit: unit.clone(),
        invoices: state
            .catalog
            .invoices_for_unit(&id)
            .into_iter()
            .cloned()
            .collect(),
    }))
}

pub(crate) async fn search_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    Json(search_platform(state.catalog.data(), &query.q)).into_response()
}

pub(crate) async fn portfolio_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<PortfolioSummary> {
    Json(summarize(state.catalog.projects()))
}

pub(crate) async fn technicians_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<Vec<TechnicianPerformance>> {
    let tasks = &state
        .catalog
        .data()
        .modules
        .facilities_management
        .maintenance
        .samples;
    Json(technician_performance(tasks))
}

pub(crate) async fn forecast_endpoint(
    Extension(state): Extension<AppState>,
    Json(inputs): Json<ScenarioInputs>,
) -> Json<ScenarioForecast> {
    Json(forecast(state.catalog.projects(), &inputs))
}

pub(crate) async fn property_description_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<PropertyDescriptionRequest>,
) -> Result<Json<GeneratedText>, AppError> {
    let id = UnitId(request.unit_id);
    let (_, unit) = state.catalog.unit(&id).ok_or_else(|| AppError::NotFound {
        entity: "unit",
        id: id.0.clone(),
    })?;

    let text = state.ai.generate_property_description(unit).await?;
    info!(unit_id = %id, "property description generated");
    Ok(Json(GeneratedText { text }))
}

pub(crate) async fn contract_analysis_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<ContractAnalysisRequest>,
) -> Result<Json<GeneratedText>, AppError> {
    let text = state
        .ai
        .analyze_contract(&request.file_base64, &request.mime_type, &request.query)
        .await?;
    Ok(Json(GeneratedText { text }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::test_support;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn projects_endpoint_filters_by_search_term() {
        let state = test_support::state();
        let first = state.catalog.projects()[0].name.clone();

        let Json(all) =
            projects_endpoint(Extension(state.clone()), Query(ProjectQuery::default())).await;
        assert_eq!(all.len(), state.catalog.projects().len());

        let query = ProjectQuery {
            search: Some(first.to_uppercase()),
        };
        let Json(matched) = projects_endpoint(Extension(state), Query(query)).await;
        assert!(matched.iter().any(|listing| listing.name == first));
    }

    #[tokio::test]
    async fn unit_endpoint_returns_unit_with_its_invoices() {
        let state = test_support::state();
        let unit = state
            .catalog
            .data()
            .invoices()
            .first()
            .map(|invoice| invoice.unit_id.clone())
            .expect("dataset has invoices");

        let Json(body) = unit_endpoint(Extension(state), Path(unit.0.clone()))
            .await
            .expect("unit exists");
        assert_eq!(body.unit.id, unit);
        assert!(!body.invoices.is_empty());
        assert!(body.invoices.iter().all(|invoice| invoice.unit_id == unit));
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let state = test_support::state();
        let err = project_endpoint(Extension(state.clone()), Path("missing".to_string()))
            .await
            .expect_err("no such project");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = unit_endpoint(Extension(state), Path("missing".to_string()))
            .await
            .expect_err("no such unit");
        assert_eq!(err.to_string(), "unit 'missing' not found");
    }

    #[tokio::test]
    async fn project_endpoint_accepts_names() {
        let state = test_support::state();
        let project = state.catalog.projects()[1].clone();

        let Json(by_name) = project_endpoint(Extension(state.clone()), Path(project.name.clone()))
            .await
            .expect("resolved by name");
        assert_eq!(by_name.id, project.id);

        let Json(by_id) = project_endpoint(Extension(state), Path(project.id.0.clone()))
            .await
            .expect("resolved by id");
        assert_eq!(by_id.name, project.name);
    }

    #[tokio::test]
    async fn lead_endpoint_resolves_generated_leads() {
        let state = test_support::state();
        let lead = state.catalog.data().modules.sales_crm.leads.samples[0].clone();

        let Json(body) = lead_endpoint(Extension(state.clone()), Path(lead.id.clone()))
            .await
            .expect("lead exists");
        assert_eq!(body, lead);

        let err = lead_endpoint(Extension(state), Path("missing".to_string()))
            .await
            .expect_err("no such lead");
        assert_eq!(err.to_string(), "lead 'missing' not found");
    }

    #[tokio::test]
    async fn asset_endpoint_includes_its_maintenance_tasks() {
        let state = test_support::state();
        let facilities = &state.catalog.data().modules.facilities_management;
        let asset_id = facilities
            .maintenance
            .samples
            .first()
            .map(|task| task.facility_asset_id.clone())
            .expect("dataset has maintenance tasks");
        let expected = facilities
            .maintenance
            .samples
            .iter()
            .filter(|task| task.facility_asset_id == asset_id)
            .count();

        let Json(body) = asset_endpoint(Extension(state.clone()), Path(asset_id.clone()))
            .await
            .expect("asset exists");
        assert_eq!(body.asset.id, asset_id);
        assert_eq!(body.maintenance_tasks.len(), expected);
        assert!(body
            .maintenance_tasks
            .iter()
            .all(|task| task.facility_asset_id == asset_id));

        let err = asset_endpoint(Extension(state), Path("missing".to_string()))
            .await
            .expect_err("no such asset");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn forecast_endpoint_reports_no_change_for_neutral_inputs() {
        let state = test_support::state();
        let Json(body) =
            forecast_endpoint(Extension(state), Json(ScenarioInputs::default())).await;
        assert_eq!(body.sell_out_change_percentage, 0.0);
        assert!(body.new_projected_portfolio_value > 0.0);
    }

    #[tokio::test]
    async fn property_description_without_key_is_unavailable() {
        let state = test_support::state();
        let unit_id = state
            .catalog
            .data()
            .units()
            .next()
            .map(|unit| unit.id.0.clone())
            .expect("dataset has units");

        let err = property_description_endpoint(
            Extension(state),
            Json(PropertyDescriptionRequest { unit_id }),
        )
        .await
        .expect_err("no key configured");
        assert_eq!(err.to_string(), "API_KEY for Gemini is not configured.");
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn router_serves_search_and_readiness() {
        let app = router().layer(Extension(test_support::state()));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/search?q=villa")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
