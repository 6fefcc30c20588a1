//! Career Navigator terminal driver
//!
//! Walks the guided flows (connect, pay, assess, plan, track) against the
//! simulated backend and prints what the dashboard would show.

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use navigator_core::fixtures::{self, list_known_wallets};
use navigator_core::progress::{
    group_achievements_by_category, level_progress, pending_milestones, recent_progress,
    AchievementStats, DEFAULT_RECENT_LIMIT,
};
use navigator_core::{FlowKind, Navigator, NavigatorConfig, NavigatorError, ServiceId, Timeline};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "career_navigator=info,navigator_core=info";
const PAYMENT_ATTEMPTS: usize = 3;

fn cli() -> Command {
    Command::new("career-navigator")
        .version(navigator_core::VERSION)
        .about("Wallet-gated career guidance demo")
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("wallets").about("List the demo wallets"))
        .subcommand(
            Command::new("demo")
                .about("Run the guided flow for one wallet")
                .arg(
                    Arg::new("wallet")
                        .long("wallet")
                        .default_value(fixtures::BEGINNER_WALLET)
                        .help("Wallet address to connect"),
                )
                .arg(
                    Arg::new("timeline")
                        .long("timeline")
                        .default_value("6-month")
                        .help("Roadmap timeline: 3-month, 6-month or 12-month"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Path to a TOML config file"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Seed for the simulated backend"),
                )
                .arg(
                    Arg::new("instant")
                        .long("instant")
                        .action(ArgAction::SetTrue)
                        .help("Skip simulated latency"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the final session as JSON"),
                ),
        )
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("career_navigator=debug,navigator_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("wallets", _)) => {
            print_wallets();
            Ok(())
        }
        Some(("demo", args)) => run_demo(args).await,
        _ => Ok(()),
    }
}

fn print_wallets() {
    for wallet in list_known_wallets() {
        let level = fixtures::lookup_by_wallet(wallet)
            .map(|demo| demo.profile.experience_level.to_string())
            .unwrap_or_default();
        println!("{level:<13} {wallet}");
    }
}

fn load_config(args: &ArgMatches) -> Result<NavigatorConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => NavigatorConfig::load(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => NavigatorConfig::default(),
    };
    if args.get_flag("instant") {
        config = config.with_latency(navigator_core::LatencyConfig::zero());
    }
    if let Some(seed) = args.get_one::<u64>("seed") {
        config = config.with_seed(*seed);
    }
    Ok(config)
}

async fn run_demo(args: &ArgMatches) -> Result<()> {
    let config = load_config(args)?;
    let timeline: Timeline = args
        .get_one::<String>("timeline")
        .map_or(Ok(Timeline::default()), |raw| raw.parse())
        .map_err(|bad| anyhow!(bad))?;
    let wallet = args
        .get_one::<String>("wallet")
        .map_or(fixtures::BEGINNER_WALLET, String::as_str);

    let mut navigator = Navigator::new(config)?;
    navigator.register().await;
    navigator.connect(wallet).await.context("failed to connect wallet")?;

    purchase(&mut navigator, ServiceId::SkillsAssessment).await?;
    navigator.run_assessment().await.context("skills assessment failed")?;
    navigator.finish_flow(FlowKind::Assessment)?;

    purchase(&mut navigator, ServiceId::RoadmapGeneration).await?;
    navigator
        .generate_roadmap(timeline)
        .await
        .context("roadmap generation failed")?;
    navigator.finish_flow(FlowKind::Roadmap)?;

    let next = navigator
        .session()
        .roadmap()
        .and_then(|roadmap| pending_milestones(roadmap).first().map(|m| m.id.clone()));
    if let Some(milestone_id) = next {
        navigator
            .complete_milestone(&milestone_id, true)
            .await
            .with_context(|| format!("failed to complete {milestone_id}"))?;
    }

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(navigator.session())?);
    } else {
        print_summary(&navigator);
    }
    Ok(())
}

/// Pay for a service, retrying declined payments a few times
async fn purchase(navigator: &mut Navigator, id: ServiceId) -> Result<()> {
    let service = navigator.select_service(id.as_str())?;
    tracing::info!(service = service.name, price = %service.display_price(), "Purchasing");

    for attempt in 1..=PAYMENT_ATTEMPTS {
        match navigator.pay(id).await {
            Ok(()) => return Ok(()),
            Err(e @ NavigatorError::PaymentFailed { .. }) if attempt < PAYMENT_ATTEMPTS => {
                tracing::warn!(attempt, error = %e, "Retrying payment");
                navigator.retry_payment()?;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(anyhow!("payment for {id} did not go through"))
}

fn print_summary(navigator: &Navigator) {
    let session = navigator.session();
    let Some(user) = session.user() else {
        println!("No wallet connected");
        return;
    };

    println!("Wallet:       {}", user.wallet_address);
    println!("Level:        {}", user.experience_level);
    println!("Career path:  {}", user.preferred_career_path);
    if !user.technical_skills.is_empty() {
        println!("Skills:       {}", user.technical_skills.join(", "));
    }

    if let Some(roadmap) = session.roadmap() {
        let summary = navigator.progress_summary();
        println!();
        println!(
            "Roadmap ({}): {}/{} milestones, {}%",
            roadmap.timeline, summary.completed, summary.total, summary.percentage
        );
        for milestone in &roadmap.milestones {
            let mark = if milestone.completed { "x" } else { " " };
            println!("  [{mark}] {} (due {})", milestone.title, milestone.target_date);
        }
    }

    let recent = recent_progress(session.progress_entries(), DEFAULT_RECENT_LIMIT);
    if !recent.is_empty() {
        println!();
        println!("Recent progress:");
        for entry in recent {
            println!(
                "  {} {}% {}",
                entry.milestone_id,
                entry.percentage,
                navigator.explorer_url(&entry.transaction_hash)
            );
        }
    }

    let gallery = group_achievements_by_category(session.achievements());
    if !gallery.is_empty() {
        let stats = AchievementStats::from_achievements(session.achievements());
        println!();
        println!(
            "Achievements: {} earned, {} verified, {} NFT certificates, {} categories",
            stats.total, stats.verified, stats.minted, stats.categories
        );
        for (category, achievements) in gallery {
            let titles: Vec<_> = achievements.iter().map(|a| a.title.as_str()).collect();
            println!("  {category}: {}", titles.join(", "));
        }
        for level in level_progress(session.achievements()) {
            println!(
                "  {} level: {} of {} ({}%)",
                level.level, level.earned, level.cap, level.percentage
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_demo_flags() {
        let matches = cli()
            .try_get_matches_from([
                "career-navigator",
                "demo",
                "--timeline",
                "3-month",
                "--seed",
                "7",
                "--instant",
            ])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "demo");

        let config = load_config(args).unwrap();
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.latency, navigator_core::LatencyConfig::zero());
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(cli().try_get_matches_from(["career-navigator"]).is_err());
    }

    #[tokio::test]
    async fn demo_runs_for_advanced_wallet() {
        let matches = cli()
            .try_get_matches_from([
                "career-navigator",
                "demo",
                "--wallet",
                fixtures::ADVANCED_WALLET,
                "--instant",
                "--json",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        run_demo(args).await.unwrap();
    }

    #[tokio::test]
    async fn demo_rejects_bad_timeline() {
        let matches = cli()
            .try_get_matches_from(["career-navigator", "demo", "--timeline", "2-year", "--instant"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let message = run_demo(args).await.unwrap_err().to_string();
        assert_eq!(message.matches("unknown timeline").count(), 1, "{message}");
        assert!(message.contains("'2-year'"));
    }
}
