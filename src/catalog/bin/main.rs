use std::io;
use clap::Parser;
use libcat::catalog::controller::MenuController;
use libcat::catalog::factory::create_library_service;
use libcat::core::controller::AppState;
use libcat::core::domain::{Configuration, DisplayFormat, DEFAULT_MAX_ISSUED_BOOKS};
use libcat::core::library::LibraryError;
use libcat::gateway::GatewayPublisherVia;
use libcat::utils::logs::setup_tracing;

#[derive(Parser, Debug)]
#[command(name = "libcat")]
#[command(version, about = "Interactive in-memory library catalog")]
struct Cli {
    /// Branch label recorded on every catalog event
    #[arg(long, default_value = "main")]
    branch: String,

    /// Maximum number of books a member may hold at once
    #[arg(long, default_value_t = DEFAULT_MAX_ISSUED_BOOKS)]
    max_issued_books: usize,

    /// Listing format for the display actions
    #[arg(long, short = 'f', value_enum, default_value_t = DisplayFormat::Text)]
    format: DisplayFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, env = "LIBCAT_JSON_LOGS")]
    json_logs: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<(), LibraryError> {
    let cli = Cli::parse();
    setup_tracing(cli.json_logs, cli.verbose);

    let config = Configuration::new(cli.branch.as_str())
        .with_max_issued_books(cli.max_issued_books)
        .with_display_format(cli.format);
    let library = create_library_service(&config, GatewayPublisherVia::Logs);

    let stdin = io::stdin();
    let mut controller = MenuController::new(AppState::new(config), library, stdin.lock(), io::stdout());
    controller.run()
}
