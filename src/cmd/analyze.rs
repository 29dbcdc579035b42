use crate::reports;
use clap::Args;
use linkograph::catalog::LinkId;
use linkograph::client::HttpScoringClient;
use linkograph::config::{Config, ScoringBackend};
use linkograph::error::LgResult;
use linkograph::protocol::SelectionSync;
use linkograph::scoring::{LocalScorer, ScoringService};
use linkograph::session::{Applied, Session};
use tracing::{debug, warn};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Number of moves in the design sequence
    #[arg(short, long, allow_hyphen_values = true)]
    pub moves: String,

    /// Link to mark, as 0-based "<move1>-<move2>"; repeat or comma-separate
    #[arg(short, long = "link", value_delimiter = ',')]
    pub links: Vec<String>,

    /// Forward every selection change to the service's sync endpoint
    #[arg(long, default_value_t = false)]
    pub sync: bool,
}

pub async fn run(args: AnalyzeArgs, config: Config) -> LgResult<()> {
    let mut session = Session::new(config.lattice.clone())?;
    session.regenerate_from_input(&args.moves)?;

    let ids = args
        .links
        .iter()
        .map(|s| s.parse::<LinkId>())
        .collect::<LgResult<Vec<_>>>()?;

    match config.service.backend {
        ScoringBackend::Local => {
            let scorer = LocalScorer::new(config.regression.clone());
            analyze_with(&mut session, &scorer, &ids, args.sync).await
        }
        ScoringBackend::Remote => {
            let client = HttpScoringClient::new(&config.service)?;
            println!("🌐 Scoring remotely at {}", client.base_url());
            analyze_with(&mut session, &client, &ids, args.sync).await
        }
    }
}

async fn analyze_with<S: ScoringService>(
    session: &mut Session,
    service: &S,
    ids: &[LinkId],
    sync: bool,
) -> LgResult<()> {
    for &id in ids {
        match session.toggle(id) {
            Ok(notice) => {
                if sync {
                    forward_sync(service, &notice).await;
                }
            }
            Err(e) if e.is_not_found() => println!("⚠️  {}", e),
            Err(e) => return Err(e),
        }
    }

    println!("\n🧭 === LINKOGRAPH ANALYSIS === 🧭");
    reports::print_catalog_summary(session.catalog());
    reports::print_lattice_grid(session.catalog());
    reports::print_link_list(&session.selected_links());
    reports::print_run_test_report(&session.run_test_rows());

    let (entropy, runs) = session.score(service).await;
    report_outcome("Entropy", entropy);
    report_outcome("Run test", runs);

    reports::print_score_report(session.scores());
    Ok(())
}

async fn forward_sync<S: ScoringService>(service: &S, notice: &SelectionSync) {
    match service.sync_selection(notice).await {
        Ok(ack) => debug!("Sync acknowledged: {} -> {}", ack.link_id, ack.state),
        Err(e) => warn!("Sync for {} failed: {}", notice.link_id, e),
    }
}

fn report_outcome(label: &str, outcome: LgResult<Applied>) {
    match outcome {
        Ok(Applied::Current) => {}
        Ok(Applied::Stale { requested, current }) => println!(
            "⚠️  {} result was computed for an older selection ({} < {})",
            label, requested, current
        ),
        Err(e) => println!("❌ {}: {}", label, e),
    }
}
