use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use targeting::{
    init_logging, Game, GameStatus, LogSink, ProbabilisticAgent, ShipInventory, DEFAULT_COLS,
    DEFAULT_ROWS,
};

/// Play the hunt/target agent against randomly placed fleets and print a JSON
/// summary of the shots it needed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct SimConfig {
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    games: usize,
    #[arg(long, help = "Print the final board of each game")]
    show: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cfg = SimConfig::parse();

    let mut rng = match cfg.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let max_turns = cfg.rows * cfg.cols;
    let mut games = Vec::with_capacity(cfg.games);
    for i in 0..cfg.games {
        let mut game = Game::random(cfg.rows, cfg.cols, ShipInventory::standard(), &mut rng)?;
        let mut agent = ProbabilisticAgent::with_sink(LogSink);
        let report = game.play(&mut agent, max_turns)?;
        log::info!("game {} finished after {} shots", i + 1, report.shots);
        if cfg.show {
            eprintln!("{}", game.board());
        }
        games.push(report);
    }

    let won = games.iter().filter(|r| r.status == GameStatus::Won).count();
    let total: usize = games.iter().map(|r| r.shots).sum();
    let mean = if games.is_empty() {
        0.0
    } else {
        total as f64 / games.len() as f64
    };

    let result = json!({
        "rows": cfg.rows,
        "cols": cfg.cols,
        "won": won,
        "mean_shots": mean,
        "games": games,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
