use clap::Parser;
use console::style;
use random_poly::cli::Cli;
use tracing::Level;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .init();

    // Run the main application logic from the library
    if let Err(e) = random_poly::run(&cli) {
        eprintln!("{} {:#}", style("Error:").red(), e);
        std::process::exit(1);
    }
}
