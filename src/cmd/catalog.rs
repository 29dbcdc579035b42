use crate::reports;
use clap::Args;
use linkograph::config::Config;
use linkograph::error::LgResult;
use linkograph::session::Session;

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub config: Config,

    /// Number of moves in the design sequence
    #[arg(short, long, allow_hyphen_values = true)]
    pub moves: String,

    /// Draw the lattice grid
    #[arg(long, default_value_t = false)]
    pub grid: bool,
}

pub fn run(args: CatalogArgs, config: Config) -> LgResult<()> {
    let mut session = Session::new(config.lattice)?;
    let catalog = session.regenerate_from_input(&args.moves)?;

    println!("\n🔗 === LINK CATALOG === 🔗");
    reports::print_catalog_summary(catalog);
    if args.grid {
        reports::print_lattice_grid(catalog);
    }
    reports::print_run_test_report(&session.run_test_rows());
    Ok(())
}
