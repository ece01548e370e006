use std::path::PathBuf;

#[derive(Debug, Clone, clap::Args)]
pub struct ServeArgs {
    /// Directory holding the `{world}_data*.json` documents
    #[arg(long, default_value = "public/")]
    pub public: PathBuf,
    /// Built frontend, served first
    #[arg(long, default_value = "frontend/dist/")]
    pub dist: PathBuf,
    #[arg(long, default_value = "0.0.0.0:3000")]
    pub bind: std::net::SocketAddr,
}

/// The frontend build at `/`, falling back to the documents directory so the
/// page can fetch them by relative path.
pub fn router(args: &ServeArgs) -> axum::Router {
    let documents = tower_http::services::ServeDir::new(&args.public);

    axum::Router::new()
        .fallback_service(tower_http::services::ServeDir::new(&args.dist).fallback(documents))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    tracing::info!(public = ?args.public, dist = ?args.dist, bind = %args.bind, "Serving statistics");

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, router(&args)).await?;

    Ok(())
}
