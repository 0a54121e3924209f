// src/main.rs
use clap::Parser;
use league_store::cli::{Args, is_config_command};
use league_store::commands::{
    handle_config_update_command, handle_list_config_command, handle_view_command, validate_args,
};
use league_store::config::Config;
use league_store::error::AppError;
use league_store::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // The guard must stay alive until exit so buffered logs are flushed
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if is_config_command(&args) {
        if args.list_config {
            return handle_list_config_command().await;
        }
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    handle_view_command(&args, &config).await
}
