use clap::{Parser, Subcommand};
use flotilla::{
    coord_label, init_logging, AiPlayer, CliPlayer, Game, GameConfig, Player, ShotOutcome,
    TurnState, ViewMode, Winner, DEFAULT_BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Grid-based naval combat in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let game = Game::new(&GameConfig::with_board_size(size), &mut rng)?;
            let players: Vec<Box<dyn Player>> = vec![
                Box::new(CliPlayer::new("Player 1")),
                Box::new(AiPlayer::new("Computer")),
            ];
            run_game(game, players, rng, Some(0))
        }
        Commands::Auto { seed, size } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let game = Game::new(&GameConfig::with_board_size(size), &mut rng)?;
            let players: Vec<Box<dyn Player>> = vec![
                Box::new(AiPlayer::new("Computer 1")),
                Box::new(AiPlayer::new("Computer 2")),
            ];
            run_game(game, players, rng, None)
        }
    }
}

fn run_game(
    mut game: Game,
    mut players: Vec<Box<dyn Player>>,
    mut rng: SmallRng,
    human: Option<usize>,
) -> anyhow::Result<()> {
    let mut state = TurnState::PlayerTurn(0);
    while let TurnState::PlayerTurn(current) = state {
        let opponent = game.opponent_of(current)?;
        println!("\n=== {}'s turn ===", players[current].name());
        if human == Some(current) {
            println!("Your fleet:");
            print!("{}", game.render_board(current, ViewMode::Owner)?);
            println!("Opponent waters:");
            print!("{}", game.render_board(opponent, ViewMode::Opponent)?);
        }

        let (x, y) = players[current].select_target(&mut rng, game.board(opponent)?)?;
        let afloat_before = game.fleet(opponent)?.alive_count();
        match game.fire(current, x, y)? {
            ShotOutcome::Miss => println!(
                "{} fires at {} - splash, shot missed.",
                players[current].name(),
                coord_label(x, y)
            ),
            ShotOutcome::Hit => println!(
                "{} fires at {} - direct hit!",
                players[current].name(),
                coord_label(x, y)
            ),
            ShotOutcome::AlreadyShot => println!(
                "{} fires at {} - already shot there, wasted turn.",
                players[current].name(),
                coord_label(x, y)
            ),
        }
        if game.fleet(opponent)?.alive_count() < afloat_before {
            println!("One of {}'s ships has been sunk!", players[opponent].name());
        }

        state = state.advance(&game);
    }

    println!("\n=== Game over ===");
    for i in 0..game.player_count() {
        println!("{}'s fleet:", players[i].name());
        print!("{}", game.render_board(i, ViewMode::Owner)?);
    }
    match game.winner() {
        Winner::Player(i) => println!("\n{} wins!", players[i].name()),
        Winner::Draw => println!("\nIt's a draw!"),
    }
    Ok(())
}
