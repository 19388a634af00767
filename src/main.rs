// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Make sure the input files exist
// 3. Load the document (local file or downloaded page)
// 4. Check every selector and print the JSON report
// 5. Exit with proper code (0 = success, 1 = missing input, 2 = error)
// =============================================================================

use clap::Parser;
use tracing::debug;

use html_grader::cli::Cli;
use html_grader::error::GraderError;
use html_grader::{checker, logger, report, source};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    // run() has returned by the time we exit, so the downloaded temp file
    // (if any) has already been dropped and removed
    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => report_failure(&e),
    };

    std::process::exit(exit_code);
}

// This is the main application logic
async fn run(cli: &Cli) -> Result<()> {
    debug!("{:?}", cli);

    // Missing inputs are fatal before any real work starts
    cli.validate_paths()?;

    let source = cli.document_source();
    let document = source::load_document(&source, &cli.fetch_options()).await?;

    let checks = checker::load_checks(&cli.checks)?;
    let result = checker::check_presence(document.html(), &checks)?;

    report::print_report(&result)?;
    Ok(())
}

// Prints the error and picks the exit code
//
// A missing input path goes to stdout with exit code 1, everything else to
// stderr with exit code 2.
fn report_failure(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<GraderError>() {
        Some(e) if e.is_missing_input() => {
            println!("{}", e);
            e.exit_code()
        }
        Some(e) => {
            debug!("{:?}", e);
            eprintln!("Error: {}", e);
            e.exit_code()
        }
        None => {
            debug!("{:?}", err);
            eprintln!("Error: {:#}", err);
            2
        }
    }
}
