//! HTTP application assembly
//!
//! Wires the role and health routers together, attaches OpenAPI docs in
//! development mode, and applies tracing and CORS layers.

use axum::{
    http::{HeaderValue, Method, Uri},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::openapi::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::role::api::{roles_router, RolesState};
use crate::shared::error::PlatformError;
use crate::shared::health_api::{health_router, HealthState};

/// Swagger UI mount point (dev mode only)
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// OpenAPI document path (dev mode only)
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Cross-origin policy applied to every response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Mirror any origin, method and header, with credentials
    #[default]
    Any,
    /// Only these origins are echoed back
    AllowList(Vec<String>),
}

impl CorsPolicy {
    /// `any_origin` comes from the `"*"` entry in configuration.
    pub fn from_origins(any_origin: bool, origins: &[String]) -> Self {
        if any_origin {
            CorsPolicy::Any
        } else {
            CorsPolicy::AllowList(origins.to_vec())
        }
    }
}

/// Shell-level options taken from configuration
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub dev_mode: bool,
    pub cors: CorsPolicy,
}

/// Build the OpenAPI document and router for the role endpoints
pub fn api_parts(roles_state: RolesState) -> (Router, OpenApi) {
    let (router, mut openapi) = OpenApiRouter::new()
        .merge(roles_router(roles_state))
        .split_for_parts();

    openapi.info.title = "Roles API".to_string();
    openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    openapi.info.description = Some("CRUD operations over the in-memory role collection".to_string());

    (router, openapi)
}

/// Build the complete application router
pub fn build_app(roles_state: RolesState, options: &AppOptions) -> Router {
    let health_state = HealthState::new(roles_state.role_repo.clone());
    let (api, openapi) = api_parts(roles_state);

    let mut app = Router::new()
        .merge(api)
        .merge(health_router(health_state));

    if options.dev_mode {
        app = app.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, openapi));
    }

    app.method_not_allowed_fallback(method_not_allowed)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.cors))
}

async fn fallback(uri: Uri) -> PlatformError {
    PlatformError::not_found("resource", uri.path())
}

async fn method_not_allowed(method: Method) -> PlatformError {
    PlatformError::method_not_allowed(method.as_str())
}

/// Any method and header is mirrored, with credentials. The policy decides origins.
pub fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let origins = match policy {
        CorsPolicy::Any => return layer.allow_origin(AllowOrigin::mirror_request()),
        CorsPolicy::AllowList(origins) => origins,
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
