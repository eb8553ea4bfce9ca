use clap::Parser;
use tracing_subscriber::EnvFilter;

use vcloud::api::ApiClient;
use vcloud::cli;
use vcloud::error::Result;

use vcloud::cli::Args;
use vcloud::config::load_api_config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr so that stdout stays parseable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run_app(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_app(args: Args) -> Result<()> {
    cli::validate(&args)?;
    let config = load_api_config()?;
    let client = ApiClient::new(&config)?;
    cli::run(args, client).await?;
    Ok(())
}
