mod app;
mod calculator;
mod config;
mod error;
mod state;
mod storage;
mod users;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    if config.log.json {
        tracing_subscriber::fmt()
            .with_env_filter(config.log.filter.as_str())
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(config.log.filter.as_str())
            .init();
    }

    let addr = config.bind_addr();
    let app_state = AppState::init();
    let app = app::build_app(app_state);

    app::serve(app, &addr).await
}
