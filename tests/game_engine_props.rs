use battleships::{BoardError, GameConfig, Match, Phase, Player, Point};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Match with both fleets placed at random and play about to start.
fn random_match(seed: u64, size: usize) -> Match {
    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::with_fleet(size, vec![3, 2, 2]).unwrap();
    let mut game = Match::new(&config, ["Ann".to_string(), "Bob".to_string()]);
    while let Phase::Setup(_) = game.phase() {
        game.place_random(&mut rng).unwrap();
        game.confirm().unwrap();
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random play always ends, and the winner is whoever sank the other fleet.
    #[test]
    fn random_games_end_with_a_winner(seed in any::<u64>(), size in 4usize..10) {
        let mut game = random_match(seed, size);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut accepted = 0;

        while game.winner().is_none() {
            let player = game.active_player();
            let point = Point::new(rng.random_range(0..size), rng.random_range(0..size));
            match game.guess(point) {
                Ok(report) => {
                    accepted += 1;
                    prop_assert_eq!(report.player, player);
                    let next = if report.result.is_hit() { player } else { player.other() };
                    match report.phase {
                        Phase::Round(p) => prop_assert_eq!(p, next),
                        Phase::GameOver(w) => prop_assert_eq!(w, player),
                        Phase::Setup(_) => prop_assert!(false, "back in setup"),
                    }
                }
                Err(BoardError::AlreadyGuessed(p)) => prop_assert_eq!(p, point),
                Err(e) => prop_assert!(false, "unexpected error {:?}", e),
            }
            prop_assert!(accepted <= 2 * size * size);
        }

        let winner = game.winner().unwrap();
        prop_assert!(game.board(winner.other()).all_sunk());
        prop_assert!(!game.board(winner).all_sunk());
        prop_assert_eq!(game.score(winner), 7);
        prop_assert_eq!(game.guess(Point::new(0, 0)), Err(BoardError::GameOver));
    }

    /// Off-board, repeated and unparsable guesses leave the match untouched.
    #[test]
    fn rejected_guesses_change_nothing(
        seed in any::<u64>(),
        row in 0usize..40,
        col in 0usize..40,
        junk in "[a-z0-9 ]{0,6}",
    ) {
        let mut game = random_match(seed, 6);
        game.guess(Point::new(0, 0)).unwrap();
        let phase = game.phase();
        let boards = Player::ALL.map(|p| game.board(p).clone());
        let report = game.last_report();

        let point = Point::new(row, col);
        let on_board = row < 6 && col < 6;
        let repeat = phase == Phase::Round(Player::A) && point == Point::new(0, 0);
        if !on_board || repeat {
            prop_assert!(game.guess(point).is_err());
        }
        if junk.trim().parse::<Point>().is_err() {
            prop_assert!(game.guess_str(&junk).is_err());
        }

        prop_assert_eq!(game.phase(), phase);
        prop_assert_eq!(game.last_report(), report);
        for (p, before) in Player::ALL.into_iter().zip(&boards) {
            prop_assert_eq!(game.board(p), before);
        }
    }
}
