//! REST API server implementation using Axum
//!
//! This module provides the relationship endpoints, the health probe and
//! (with the `openapi` feature) the OpenAPI documentation.

use crate::api::{
    create_simple_relationship, match_preferences, CreateRelationshipRequest,
    CreateRelationshipResponse, ErrorResponse, PreferenceMatchRequest, PreferenceMatchResponse,
    RelationshipTypesResponse,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use usergraph_core::config::ServerConfig;
use usergraph_core::{AllowedRelationshipTypes, Error};
use usergraph_storage::Neo4jClientTrait;

#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use utoipa_swagger_ui::SwaggerUi;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<dyn Neo4jClientTrait>,
    pub allowed_types: Arc<AllowedRelationshipTypes>,
}

impl AppState {
    pub fn new(graph: Arc<dyn Neo4jClientTrait>, allowed_types: AllowedRelationshipTypes) -> Self {
        Self {
            graph,
            allowed_types: Arc::new(allowed_types),
        }
    }
}

/// Build the Axum router with all endpoints
pub fn build_router(state: AppState, server_config: &ServerConfig) -> Router {
    let router = Router::new()
        // Relationship endpoints
        .route("/api/v1/relationships", post(create_relationship_handler))
        .route(
            "/api/v1/relationships/preferences",
            post(match_preferences_handler),
        )
        .route(
            "/api/v1/relationships/types",
            get(relationship_types_handler),
        )
        // Health check
        .route("/health", get(health_handler));

    // OpenAPI documentation
    #[cfg(feature = "openapi")]
    let router = router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Configure CORS based on allowed_origins
    let cors_layer = if server_config.allowed_origins.is_empty() {
        // CORS disabled
        CorsLayer::new()
    } else if server_config.allowed_origins.iter().any(|o| o == "*") {
        // Allow all origins
        CorsLayer::permissive()
    } else {
        // Allow specific origins
        let mut cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([axum::http::header::CONTENT_TYPE]);

        for origin in &server_config.allowed_origins {
            match HeaderValue::from_str(origin) {
                Ok(header_value) => cors = cors.allow_origin(header_value),
                Err(e) => tracing::warn!("Ignoring invalid CORS origin '{origin}': {e}"),
            }
        }
        cors
    };

    router
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /api/v1/relationships
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/relationships",
    request_body = CreateRelationshipRequest,
    responses(
        (status = 200, description = "Relationship created", body = CreateRelationshipResponse),
        (status = 400, description = "Invalid request or relationship type", body = ErrorResponse),
        (status = 404, description = "Either user does not exist", body = ErrorResponse),
        (status = 500, description = "Graph database failure", body = ErrorResponse)
    ),
    tag = "relationships"
))]
async fn create_relationship_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRelationshipRequest>, JsonRejection>,
) -> Result<Json<CreateRelationshipResponse>, ApiError> {
    let Json(request) = payload?;

    tracing::info!(
        "Create relationship request: {} -[{}]-> {}",
        request.person1,
        request.relationship,
        request.person2
    );

    let response =
        create_simple_relationship(request, state.graph.as_ref(), &state.allowed_types).await?;
    Ok(Json(response))
}

/// POST /api/v1/relationships/preferences
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/relationships/preferences",
    request_body = PreferenceMatchRequest,
    responses(
        (status = 200, description = "Similarity relationship created", body = PreferenceMatchResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Either user does not exist", body = ErrorResponse),
        (status = 500, description = "Graph database failure", body = ErrorResponse)
    ),
    tag = "relationships"
))]
async fn match_preferences_handler(
    State(state): State<AppState>,
    payload: Result<Json<PreferenceMatchRequest>, JsonRejection>,
) -> Result<Json<PreferenceMatchResponse>, ApiError> {
    let Json(request) = payload?;

    tracing::info!(
        "Preference match request: {} -> {}",
        request.person1,
        request.person2
    );

    let response = match_preferences(request, state.graph.as_ref()).await?;
    Ok(Json(response))
}

/// GET /api/v1/relationships/types
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/relationships/types",
    responses(
        (status = 200, description = "Allowed relationship types", body = RelationshipTypesResponse)
    ),
    tag = "relationships"
))]
async fn relationship_types_handler(
    State(state): State<AppState>,
) -> Json<RelationshipTypesResponse> {
    Json(RelationshipTypesResponse {
        types: state.allowed_types.iter().map(str::to_string).collect(),
    })
}

/// GET /health
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 503, description = "Graph database is unreachable")
    ),
    tag = "health"
))]
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    use serde_json::json;

    let (status, service_status, neo4j_status) = match state.graph.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "connected"),
        Err(e) => {
            tracing::warn!("Health check failed to reach Neo4j: {e:#}");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    let health_status = json!({
        "status": service_status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "neo4j": {"status": neo4j_status}
        }
    });

    (status, Json(health_status))
}

/// Error handling for API endpoints
#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
    NotFound(String),
    QueryFailed(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::InvalidRequest(msg) => {
                tracing::debug!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::QueryFailed(msg) => {
                tracing::error!("Graph query failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(err) => {
                // Log the full error details for debugging
                tracing::error!("Internal server error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(_) => ApiError::InvalidRequest(err.to_string()),
            Error::NotFound(_) => ApiError::NotFound(err.to_string()),
            Error::QueryExecution { .. } => ApiError::QueryFailed(err.to_string()),
            other => ApiError::Internal(other.into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Error::invalid_input(rejection.body_text()).into()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

/// OpenAPI documentation
#[cfg(feature = "openapi")]
#[derive(OpenApi)]
#[openapi(
    paths(
        create_relationship_handler,
        match_preferences_handler,
        relationship_types_handler,
        health_handler
    ),
    components(schemas(
        CreateRelationshipRequest,
        CreateRelationshipResponse,
        PreferenceMatchRequest,
        PreferenceMatchResponse,
        RelationshipTypesResponse,
        ErrorResponse
    )),
    tags(
        (name = "relationships", description = "User relationship endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
struct ApiDoc;
