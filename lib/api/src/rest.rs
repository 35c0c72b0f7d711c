use actix_web::{web, App, HttpServer, HttpResponse, Result as ActixResult};
use actix_cors::Cors;
use camsim_catalog::CatalogSource;
use camsim_core::raw_settings_from_pairs;
use camsim_similarity::{EngineError, SimilarityEngine};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared, read-only state for every request
pub struct AppState {
    pub engine: SimilarityEngine,
    pub catalog: CatalogSource,
}

impl AppState {
    pub fn new(engine: SimilarityEngine, catalog: CatalogSource) -> Self {
        Self { engine, catalog }
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        state: Arc<AppState>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .configure(RestApi::configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Register the routes; expects `web::Data<Arc<AppState>>` in app data
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/api/similar-camera-settings", web::get().to(similar_camera_settings))
            .route("/api/camera-settings/bounds", web::get().to(get_bounds));
    }
}

fn is_truthy(value: Option<&String>) -> bool {
    matches!(value.map(String::as_str), Some("true") | Some("1"))
}

async fn similar_camera_settings(
    state: web::Data<Arc<AppState>>,
    params: web::Query<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    let params = params.into_inner();
    let explain = is_truthy(params.get("explain"));
    let query = raw_settings_from_pairs(params);

    // Reject a bad query before paying for the catalog
    if let Err(EngineError::MalformedQuery(failure)) = state.engine.prepare_query(&query) {
        debug!(error = %failure, "rejected malformed query");
        let fields: Vec<_> = failure
            .errors
            .iter()
            .map(|e| serde_json::json!({ "field": e.field, "reason": e.kind.to_string() }))
            .collect();
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": failure.to_string(),
            "fields": fields
        })));
    }

    let candidates = match state.catalog.candidates().await {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!(error = %e, "catalog unavailable");
            return Ok(HttpResponse::BadGateway().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    match state.engine.compare(&query, &candidates, explain) {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn get_bounds(
    state: web::Data<Arc<AppState>>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.engine.bounds()))
}
