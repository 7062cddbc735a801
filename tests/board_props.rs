use flotilla::{Board, Cell, Game, GameConfig, Orientation, ShotOutcome, Winner};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_placement_stays_in_bounds(seed in any::<u64>(), size in 1usize..=5) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(10).unwrap();
        let ship = board.place_random(&mut rng, size).unwrap();
        let (x, y) = ship.origin();
        match ship.orientation() {
            Orientation::Horizontal => prop_assert!(x + size <= 10),
            Orientation::Vertical => prop_assert!(y + size <= 10),
        }
        for (cx, cy) in ship.cells() {
            prop_assert_eq!(board.cell(cx, cy).unwrap(), Cell::Ship);
        }
    }

    #[test]
    fn fleets_cover_disjoint_cells(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = Game::new(&GameConfig::default(), &mut rng).unwrap();
        for player in 0..2 {
            let total: usize = game
                .fleet(player)
                .unwrap()
                .ships()
                .iter()
                .map(|s| s.size())
                .sum();
            prop_assert_eq!(game.board(player).unwrap().count(Cell::Ship), total);
        }
    }

    #[test]
    fn fire_is_idempotent_after_first_shot(
        seed in any::<u64>(),
        x in 0usize..10,
        y in 0usize..10,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(&GameConfig::default(), &mut rng).unwrap();
        let first = game.fire(0, x, y).unwrap();
        prop_assert!(matches!(first, ShotOutcome::Hit | ShotOutcome::Miss));
        let cell_after = game.board(1).unwrap().cell(x, y).unwrap();
        let second = game.fire(0, x, y).unwrap();
        prop_assert_eq!(second, ShotOutcome::AlreadyShot);
        prop_assert_eq!(game.board(1).unwrap().cell(x, y).unwrap(), cell_after);
    }

    #[test]
    fn sinking_every_ship_ends_the_game(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(&GameConfig::default(), &mut rng).unwrap();
        let ships: Vec<_> = game.fleet(1).unwrap().ships().to_vec();
        for ship in ships {
            for (x, y) in ship.cells() {
                prop_assert_eq!(game.fire(0, x, y).unwrap(), ShotOutcome::Hit);
            }
        }
        prop_assert!(game.is_finished());
        prop_assert_eq!(game.winner(), Winner::Player(0));
    }
}
