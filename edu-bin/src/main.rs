use clap::Parser;
use edu_common::EduAppContext;
use edu_error::{EduError, EduResult};
use edu_models::constants::DEFAULT_CONFIG_FILE_NAME;
use edu_storage::EduDbManager;
use edu_web::EduWebServer;
use std::{env::current_dir, path::PathBuf};

/// REST backend of the learning platform
///
/// Serves the block, class, lecture and lesson catalogue, exercises with
/// scoring, news and user accounts over HTTP.
#[derive(Parser)]
#[command(name = "edu-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Learning platform backend", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the server looks for 'edu.toml'
    /// in the current working directory.
    #[arg(short, long, env = "EDU_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> EduResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| EduError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let ctx =
        EduAppContext::init::<EduDbManager, EduWebServer>(config_path.to_string_lossy().to_string())
            .await?;

    // Run until a shutdown signal is received
    ctx.run().await
}
