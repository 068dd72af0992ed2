use axum::{Router, middleware, routing::get};
use catalog::{FileBackend, ProductStore};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{admin, dashboard, pages, products, recommendations};
use crate::auth::{ApiKeyCheck, CredentialCheck};
use crate::config::Config;
use crate::middleware::auth::require_admin_key;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<ProductStore>,
    pub credentials: Arc<dyn CredentialCheck>,
}

impl AppState {
    /// 按配置创建文件存储和 API Key 校验
    pub fn from_config(config: Config) -> Self {
        let store = ProductStore::new(Arc::new(FileBackend::new(config.store_path())));
        let credentials = ApiKeyCheck::new(config.auth.admin_key());

        Self {
            config,
            store: Arc::new(store),
            credentials: Arc::new(credentials),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let app_state = Arc::new(state);

    // 健康检查路由
    let health_route = Router::new()
        .route("/", get(pages::home))
        .route("/health", get(|| async { "OK" }));

    // 管理路由，需要 API Key
    let admin_routes = Router::new()
        .merge(products::admin_routes())
        .merge(admin::routes())
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_admin_key,
        ));

    // API 路由
    let api_routes = Router::new()
        .merge(products::routes())
        .merge(dashboard::routes())
        .merge(recommendations::routes())
        .merge(admin_routes);

    // 组合所有路由
    Router::new()
        .nest("/api", api_routes)
        .merge(health_route)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any))
        .with_state(app_state)
}
