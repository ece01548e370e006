use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

#[derive(Debug, clap::Parser)]
#[command(about = "Serves the dice statistics page and checks its documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Serve the built frontend and the statistics documents
    Serve(backend::serve::ServeArgs),
    /// Check a statistics document against the page layout
    Check(backend::check::CheckArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("backend=info,render=info,tower_http=info"));
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(filter);
    tracing::subscriber::set_global_default(registry)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Serve(args) => backend::serve::run(args).await,
        Command::Check(args) => {
            let json = args.json;
            let report = backend::check::run(&args)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            for cell in report.missing.iter() {
                tracing::warn!(table = %cell.table, row = %cell.row, column = %cell.column, "Missing cell");
            }
            tracing::info!(
                path = ?report.path,
                version = report.version,
                rows = report.rows,
                players = report.players,
                missing = report.missing.len(),
                "Checked statistics document"
            );

            Ok(())
        }
    }
}
