use std::sync::Arc;

use clap::Parser;
use foodguess_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    if args.llm.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; guesses will fail until it is configured");
    }

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let app = router(state(args.clone()))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "listening on {} (model {})",
        listener.local_addr()?,
        args.llm.openai_model
    );

    axum::serve(listener, app).await?;

    Ok(())
}
