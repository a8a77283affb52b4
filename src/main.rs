use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;

use clinic_agenda_backend::{app, app_state::AppState, config, i18n, scheduling, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let telemetry = telemetry::init_telemetry(None).await?;

    let env = config::init()?.clone();
    let localizer = Arc::new(i18n::init_i18n().await?);
    let validator = Arc::new(scheduling::SlotValidator::new(env.clinic_hours.clone()));

    let state = AppState::new(env.clone(), localizer, validator);
    let router = app::create_router(state);

    let addr = env.server_addr();
    info!("{} listening on {}", env.app.name, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, router)
        .await
        .context("Failed to serve application")?;

    telemetry.shutdown().await?;
    Ok(())
}
