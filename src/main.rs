// ==========================================
// 比赛评分与抽奖系统 - HTTP 服务主入口
// ==========================================

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use contest_lottery::app::{self, AppState};
use contest_lottery::config::ConfigManager;
use contest_lottery::{i18n, logging};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", contest_lottery::APP_NAME);
    tracing::info!("系统版本: {}", contest_lottery::VERSION);
    tracing::info!("==================================================");

    // 加载配置
    let config = ConfigManager::from_env()?.load()?;
    i18n::set_locale(&config.locale);

    let bind_addr = config.bind_addr();
    let cors_enabled = config.cors_enabled;
    let state = web::Data::new(AppState::new(config));

    tracing::info!("启动HTTP服务: {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        let cors = if cors_enabled {
            Cors::permissive()
        } else {
            Cors::default()
        };

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(app::configure)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    tracing::info!("HTTP服务已停止");
    Ok(())
}
