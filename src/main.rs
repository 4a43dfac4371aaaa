//! Entry point: load configuration, start logging, run the web server.

use clap::Parser;
use fansapprove_web::{cli::Frontend, core::initialize_logging, web::serve};

/// Run the server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply
    let _ = dotenvy::dotenv();

    let app = Frontend::parse();
    initialize_logging(&app.log_level)?;

    serve(app).await?;

    Ok(())
}
