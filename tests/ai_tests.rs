use flotilla::{AiPlayer, Board, Player};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn ai_only_targets_untried_cells() {
    let mut board = Board::new(3).unwrap();
    // shoot everything except (2, 2)
    for y in 0..3 {
        for x in 0..3 {
            if (x, y) != (2, 2) {
                board.fire(x, y).unwrap();
            }
        }
    }
    let mut rng = SmallRng::seed_from_u64(0);
    let mut ai = AiPlayer::new("computer");
    assert_eq!(ai.select_target(&mut rng, &board).unwrap(), (2, 2));
}

#[test]
fn ai_fails_on_an_exhausted_board() {
    let mut board = Board::new(2).unwrap();
    for y in 0..2 {
        for x in 0..2 {
            board.fire(x, y).unwrap();
        }
    }
    let mut rng = SmallRng::seed_from_u64(0);
    let mut ai = AiPlayer::new("computer");
    assert!(ai.select_target(&mut rng, &board).is_err());
}
