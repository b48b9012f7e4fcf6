use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use voxnotes::{create_router, AppState, Config, OpenAiChat, OpenAiStt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = Config::load("config/voxnotes")?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let api_key = Config::api_key_from_env();
    if api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; transcribe/summarize requests will return 500");
    }

    let stt = Arc::new(OpenAiStt::new(&cfg.openai, api_key.clone()));
    let llm = Arc::new(OpenAiChat::new(&cfg.openai, api_key));
    let state = AppState::new(stt, llm);

    let app = create_router(state, &cfg.service.static_dir);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
