use storefront_api::config::Config;
use storefront_api::error::AppError;
use storefront_api::server::{AppState, create_app};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    telemetry::init(&config.logging)?;

    tracing::info!(environment = %config.server.environment, "Starting storefront service");

    // 创建应用状态，并提前准备好商品数据文件
    let app_state = AppState::from_config(config.clone());
    app_state
        .store
        .ensure_store()
        .await
        .map_err(AppError::store("Failed to prepare product store"))?;
    tracing::info!(location = %app_state.store.location(), "Product store ready");

    if !app_state.credentials.is_enforced() {
        tracing::warn!("No admin API key configured, admin routes are open");
    }

    // 创建并启动服务器
    let app = create_app(app_state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", &addr);

    axum::serve(listener, app).await?;
    Ok(())
}
