/// projectd: minimal CRUD service for project records
/// 
/// Main entry point. Loads configuration from the environment and starts the HTTP server:
/// - Project CRUD at /project and /project/{id}
/// - Health check at /healthz

use projectd::{config::Config, server::start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (defaults to 0.0.0.0:3004 and sqlite://projects.db)
    let config = Config::default();
    
    start_server(config).await?;
    
    Ok(())
}
