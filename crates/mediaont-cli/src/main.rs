//! mediaont - convert embedded media metadata into Media Ontology RDF.

use clap::{CommandFactory, Parser};
use mediaont_cli::{execute_convert, Cli, Config, Formatter, PROFILES_HELP};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> mediaont_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if cli.long_help {
        println!("{}", Cli::command().render_long_help());
        println!("{}", PROFILES_HELP);
        return Ok(());
    }

    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let mapper_config = cli.mapper_config(&config.settings);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let conversion = execute_convert(
        &cli.files,
        cli.source.into(),
        &mapper_config,
        &config.vocabularies,
    )?;

    for (report, reason) in conversion.unreadable() {
        eprintln!(
            "{}",
            formatter.warning(&format!("{}: {}", report.resource.as_str(), reason))
        );
    }

    println!("{}", formatter.format_graph(&conversion.graph)?);

    if cli.verbose > 0 {
        eprintln!(
            "{}",
            formatter.success(&format!(
                "{} file(s), {} triple(s)",
                conversion.reports.len(),
                conversion.graph.len()
            ))
        );
    }

    Ok(())
}

/// Log to stderr; `MEDIAONT_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env("MEDIAONT_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
