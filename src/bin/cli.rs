//! matchtip CLI - betting suggestions from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use matchtip::analysis::{select_candidate, Analyzer, MatchAnalysis};
use matchtip::api_football::{ApiFootballClient, FootballApi};
use matchtip::config::{AppConfig, SelectionPolicy};
use matchtip::core::suggestion::Suggestion;
use matchtip::models::{StatsScope, TeamSummary};

#[derive(Parser)]
#[command(name = "matchtip")]
#[command(author, version, about = "Football betting suggestions from API-Football statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// League id for statistics (overrides API_FOOTBALL_LEAGUE)
    #[arg(long, global = true)]
    league: Option<u32>,

    /// Season year for statistics (overrides API_FOOTBALL_SEASON)
    #[arg(long, global = true)]
    season: Option<u16>,

    /// Always take the first search result instead of the best name match
    #[arg(long, global = true)]
    first_candidate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a match ("Home Team vs Away Team")
    Analyze {
        /// Match description
        jogo: String,
    },

    /// Search teams by name
    Search {
        /// Team name or part of it
        name: String,
    },

    /// Show the win/draw/loss record of a team
    Stats {
        /// API-Football team id
        team_id: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    if cli.league.is_some() {
        config.scope.league = cli.league;
    }
    if cli.season.is_some() {
        config.scope.season = cli.season;
    }
    if cli.first_candidate {
        config.selection = SelectionPolicy::FirstCandidate;
    }

    if config.scope.is_empty() {
        eprintln!(
            "{}",
            "warning: no league/season set (--league/--season or API_FOOTBALL_LEAGUE/API_FOOTBALL_SEASON); \
             statistics requests may be rejected"
                .yellow()
        );
    }

    let client = ApiFootballClient::new(config.api.clone())
        .context("Failed to create API-Football client")?;
    let api: Arc<dyn FootballApi> = Arc::new(client);
    let analyzer = Analyzer::from_config(api.clone(), &config);

    // Create runtime for async operations
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    println!("{}", "matchtip".cyan().bold());
    println!();

    if cli.interactive {
        run_interactive(&rt, &analyzer)?;
    } else if let Some(command) = cli.command {
        match command {
            Commands::Analyze { jogo } => run_analyze(&rt, &analyzer, &jogo),
            Commands::Search { name } => run_search(&rt, api.as_ref(), &name, config.selection)?,
            Commands::Stats { team_id } => run_stats(&rt, api.as_ref(), team_id, &config.scope)?,
        }
    } else {
        println!("Use --help for usage information or --interactive for interactive mode.");
    }

    Ok(())
}

/// Run a future with a spinner on screen
fn with_spinner<F: Future>(rt: &tokio::runtime::Runtime, message: &str, fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let output = rt.block_on(fut);
    pb.finish_and_clear();
    output
}

fn run_analyze(rt: &tokio::runtime::Runtime, analyzer: &Analyzer, jogo: &str) {
    println!("{}: {}", "Analyzing".green(), jogo);
    println!();

    match with_spinner(rt, "Querying API-Football...", analyzer.analyze(jogo)) {
        Ok(analysis) => print_analysis(&analysis),
        Err(e) => println!("{}", e.user_message().red()),
    }
}

fn print_analysis(analysis: &MatchAnalysis) {
    println!("{}", "Record (V / E / D):".yellow().bold());
    println!("{}", "-".repeat(50));
    print_summary(&analysis.home);
    print_summary(&analysis.away);
    println!();

    let message = match analysis.suggestion {
        Suggestion::HomeWin | Suggestion::AwayWin => analysis.message.green().bold(),
        Suggestion::Balanced => analysis.message.yellow().bold(),
    };
    println!("💡 Sugestão: {}", message);
}

fn print_summary(summary: &TeamSummary) {
    println!(
        "  {:<30} {:>3}V / {:>3}E / {:>3}D",
        truncate_name(&summary.team.name, 30),
        summary.record.wins,
        summary.record.draws,
        summary.record.losses
    );
}

fn run_search(
    rt: &tokio::runtime::Runtime,
    api: &dyn FootballApi,
    name: &str,
    policy: SelectionPolicy,
) -> Result<()> {
    let candidates = with_spinner(rt, "Searching teams...", api.search_teams(name))
        .with_context(|| format!("Search for {:?} failed", name))?;

    if candidates.is_empty() {
        println!("{}", "No teams found.".red());
        return Ok(());
    }

    let selected = select_candidate(name, &candidates, policy).map(|c| c.id);

    println!("{}", "Teams:".yellow().bold());
    println!("{:>2} {:>7}  {:<30} {}", "", "ID", "Name", "Country");
    println!("{}", "-".repeat(60));
    for candidate in &candidates {
        let marker = if Some(candidate.id) == selected { "*" } else { "" };
        let line = format!(
            "{:>2} {:>7}  {:<30} {}",
            marker,
            candidate.id,
            truncate_name(&candidate.name, 30),
            candidate.country.as_deref().unwrap_or("-")
        );
        if marker.is_empty() {
            println!("{}", line);
        } else {
            println!("{}", line.green());
        }
    }
    println!();
    println!("{} = team picked by `analyze`", "*".green());

    Ok(())
}

fn run_stats(
    rt: &tokio::runtime::Runtime,
    api: &dyn FootballApi,
    team_id: u32,
    scope: &StatsScope,
) -> Result<()> {
    let record = with_spinner(rt, "Fetching statistics...", api.team_statistics(team_id, scope))
        .with_context(|| format!("Statistics for team {} failed", team_id))?;

    match record {
        Some(record) => println!(
            "Team {}: {}V / {}E / {}D",
            team_id, record.wins, record.draws, record.losses
        ),
        None => println!(
            "{}",
            format!("No statistics for team {} ({})", team_id, format_scope(scope)).red()
        ),
    }

    Ok(())
}

fn run_interactive(rt: &tokio::runtime::Runtime, analyzer: &Analyzer) -> Result<()> {
    println!("{}", "Interactive mode".green().bold());
    println!("Type 'quit' to exit.\n");

    let theme = ColorfulTheme::default();

    loop {
        let jogo: String = Input::with_theme(&theme)
            .with_prompt("Jogo (Equipa Casa vs Equipa Fora)")
            .interact_text()?;

        if jogo.trim().eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        println!();
        run_analyze(rt, analyzer, &jogo);
        println!();
    }

    Ok(())
}

fn format_scope(scope: &StatsScope) -> String {
    match (scope.league, scope.season) {
        (Some(league), Some(season)) => format!("league {}, season {}", league, season),
        (Some(league), None) => format!("league {}", league),
        (None, Some(season)) => format!("season {}", season),
        (None, None) => "all competitions".to_string(),
    }
}

/// Truncate name to fit display width
fn truncate_name(name: &str, max_len: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_len {
        name.to_string()
    } else {
        chars[..max_len - 1].iter().collect::<String>() + "…"
    }
}
