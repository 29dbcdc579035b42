use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use linkograph::config::Config;
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON profile with lattice, regression and service settings
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enumerate the candidate links for a move count
    Catalog(cmd::catalog::CatalogArgs),
    /// Mark links and compute the creativity and run-test scores
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Run the scoring service over HTTP
    Serve(cmd::serve::ServeArgs),
}

fn resolve_config(path: &Option<String>, cli_config: &Config, sub_matches: &ArgMatches) -> Config {
    let Some(path) = path else {
        return cli_config.clone();
    };

    println!("⚖️  Loading profile from: {}", path);
    let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        process::exit(1);
    });
    config.merge_from_cli(cli_config, sub_matches);
    config
}

#[tokio::main]
async fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_name) = match &cli.command {
        Commands::Catalog(args) => (&args.config, "catalog"),
        Commands::Analyze(args) => (&args.config, "analyze"),
        Commands::Serve(args) => (&args.config, "serve"),
    };
    let sub_matches = matches
        .subcommand_matches(sub_name)
        .unwrap_or_else(|| unreachable!("clap matched a subcommand it does not know"));
    let config = resolve_config(&cli.config, cli_config, sub_matches);

    let outcome = match cli.command {
        Commands::Catalog(args) => cmd::catalog::run(args, config),
        Commands::Analyze(args) => cmd::analyze::run(args, config).await,
        Commands::Serve(args) => cmd::serve::run(args, config).await,
    };

    if let Err(e) = outcome {
        eprintln!("\n❌ {}", e);
        process::exit(1);
    }
}
