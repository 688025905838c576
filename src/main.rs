use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use merge2048::config::GameConfig;
use merge2048::engine::RandomSource;
use merge2048::game::{GameState, GameView};

#[derive(Debug, Parser)]
#[command(name = "merge2048", about = "Play headless 2048 games with a random legal-move policy")]
struct Args {
    /// TOML config file; command-line flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    size: Option<usize>,

    /// Base seed (game i uses seed + i)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Stop each game after this many moves
    #[arg(long)]
    steps: Option<u64>,

    /// Worker threads for multi-game runs (defaults to rayon's choice)
    #[arg(long)]
    workers: Option<usize>,

    /// Suppress board printing
    #[arg(long)]
    quiet: bool,

    /// Print one JSON summary per game instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, serde::Serialize)]
struct GameSummary {
    game: usize,
    seed: Option<u64>,
    moves: u64,
    score: u64,
    highest_tile: u64,
    game_over: bool,
    elapsed_s: f64,
    final_state: GameView,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cfg = resolve_config(&args)?;
    info!("Playing {} game(s) on a {}x{} board", cfg.games, cfg.size, cfg.size);

    let show_boards = cfg.games == 1 && !args.quiet && !args.json;
    let play = || -> Vec<GameSummary> {
        (0..cfg.games)
            .into_par_iter()
            .map(|game| play_game(&cfg, game, show_boards))
            .collect()
    };
    let summaries = match args.workers {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .context("failed to build rayon thread pool")?
            .install(play),
        None => play(),
    };

    for s in &summaries {
        if args.json {
            println!("{}", serde_json::to_string(s)?);
        } else {
            println!(
                "Game {}: moves: {} | score: {} | highest tile: {} | {}",
                s.game,
                s.moves,
                s.score,
                s.highest_tile,
                if s.game_over { "game over" } else { "stopped" }
            );
        }
    }
    if summaries.len() > 1 {
        let best = summaries.iter().map(|s| s.score).max().unwrap_or(0);
        let mean = summaries.iter().map(|s| s.score as f64).sum::<f64>() / summaries.len() as f64;
        info!("Completed {} games: mean score {:.1}, best {}", summaries.len(), mean, best);
    }
    Ok(())
}

fn resolve_config(args: &Args) -> Result<GameConfig> {
    let mut cfg = match &args.config {
        Some(path) => GameConfig::from_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size { cfg.size = size; }
    if let Some(seed) = args.seed { cfg.seed = Some(seed); }
    if let Some(games) = args.games { cfg.games = games; }
    if let Some(steps) = args.steps { cfg.max_steps = Some(steps); }
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}

fn play_game(cfg: &GameConfig, game: usize, show_boards: bool) -> GameSummary {
    let start = Instant::now();
    let seed = cfg.seed.map(|s| s.wrapping_add(game as u64));
    let (mut source, mut policy) = match seed {
        Some(s) => (RandomSource::seeded(s), StdRng::seed_from_u64(s.rotate_left(32))),
        None => (RandomSource::from_entropy(), StdRng::from_entropy()),
    };

    let mut state = GameState::new_game(cfg.size, &mut source);
    if show_boards { println!("{}", state.board()); }
    while !state.is_game_over() {
        if let Some(limit) = cfg.max_steps {
            if state.moves() >= limit { break; }
        }
        let legal = state.legal_moves();
        let dir = legal[policy.gen_range(0..legal.len())];
        state = state.apply_move(dir, &mut source);
        if show_boards {
            println!("{dir} (+{})", state.score_earned());
            println!("{}", state.board());
        }
    }

    GameSummary {
        game,
        seed,
        moves: state.moves(),
        score: state.score(),
        highest_tile: state.highest_tile(),
        game_over: state.is_game_over(),
        elapsed_s: start.elapsed().as_secs_f64(),
        final_state: state.view(),
    }
}
