use attendance_tracker::database_factory::DatabaseConfig;
use attendance_tracker::record_service::RecordService;
use attendance_tracker::report::format_report;
use attendance_tracker::student::normalize_student_id;
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// Prints a student's monthly attendance summary and record history.
#[derive(Parser, Debug)]
#[command(name = "attendance_report")]
#[command(about = "Prints a student's monthly attendance summary and record history")]
struct ReportArgs {
    /// Path to the SQLite database file
    database_file: PathBuf,

    /// Student to report on (case-insensitive)
    student_id: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = ReportArgs::parse();

    let config = DatabaseConfig::builder()
        .path(args.database_file.to_string_lossy())
        .seed_samples(false)
        .build();

    let service = match RecordService::initialize(config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            process::exit(1);
        }
    };

    let overview = match service.student_overview(&args.student_id) {
        Ok(Some(overview)) => overview,
        Ok(None) => {
            println!(
                "No student found with ID: {}",
                normalize_student_id(&args.student_id)
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error reading attendance: {}", e);
            process::exit(1);
        }
    };

    println!("{}", format_report(&overview, !args.no_color));
}
