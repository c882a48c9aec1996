use attendance_tracker::cli::Args;
use attendance_tracker::record_service::RecordService;
use attendance_tracker::web;
use env_logger::Env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse_args();
    let config = args.database_config()?;

    // Create tables and sample data before accepting requests
    let service = Arc::new(RecordService::initialize(config)?);

    web::serve(service, &args.bind).await?;

    Ok(())
}
