use flotilla::{AiPlayer, Game, GameConfig, Player, TurnState, Winner};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(&GameConfig::default(), &mut rng)?;
    let mut players = [AiPlayer::new("player1"), AiPlayer::new("player2")];
    let mut shots = [0usize; 2];

    let mut state = TurnState::PlayerTurn(0);
    while let TurnState::PlayerTurn(current) = state {
        let opponent = game.opponent_of(current)?;
        let (x, y) = players[current].select_target(&mut rng, game.board(opponent)?)?;
        game.fire(current, x, y)?;
        shots[current] += 1;
        state = state.advance(&game);
    }

    let winner = match game.winner() {
        Winner::Player(0) => Some("player1"),
        Winner::Player(1) => Some("player2"),
        _ => None,
    };

    let result = json!({
        "seed": seed,
        "player1": {"shots": shots[0], "ships_afloat": game.fleet(0)?.alive_count()},
        "player2": {"shots": shots[1], "ships_afloat": game.fleet(1)?.alive_count()},
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
