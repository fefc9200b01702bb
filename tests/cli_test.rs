#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::{self, Cursor, Write};
    use std::sync::{Arc, Mutex};

    use std::time::Duration;

    use mancala::{
        choose_mode, AiPlayer, Board, BoardState, CliPlayer, Difficulty, GameEngine, Mode,
        MoveResult, Outcome, Player, Session, Side,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Writer whose contents can be read back after the player or session is done.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Writer that refuses every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn scripted(input: &str) -> (CliPlayer, SharedBuf) {
        let out = SharedBuf::default();
        let player = CliPlayer::with_io(Cursor::new(input.as_bytes().to_vec()), out.clone());
        (player, out)
    }

    #[test]
    fn test_cli_reprompts_until_valid() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = Board::default();
        let (mut player, out) = scripted("abc\n9\n3\n");
        assert_eq!(player.select_pit(&mut rng, &board, Side::One).unwrap(), 2);
        let text = out.contents();
        assert_eq!(text.matches("[Player One] - Choose which bucket to move:").count(), 3);
        assert_eq!(text.matches("Choose a value in [1-6]. Please try again.").count(), 2);
    }

    #[test]
    fn test_cli_player_two_reads_reversed_row() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = Board::default();
        let (mut player, _) = scripted("1\n6\n");
        assert_eq!(player.select_pit(&mut rng, &board, Side::Two).unwrap(), 11);
        assert_eq!(player.select_pit(&mut rng, &board, Side::Two).unwrap(), 6);
    }

    #[test]
    fn test_cli_closed_input_is_an_error() {
        let mut rng = SmallRng::seed_from_u64(1);
        let (mut player, _) = scripted("");
        assert!(player
            .select_pit(&mut rng, &Board::default(), Side::One)
            .is_err());
    }

    #[test]
    fn test_session_reprompts_on_empty_pit() {
        // pit 0 is empty; pit 1 empties player one's row and ends the game
        let board = Board::try_from(BoardState {
            pits_per_player: 2,
            pits: vec![0, 2, 1, 1],
            stores: [0, 0],
        })
        .unwrap();
        let (one, prompts) = scripted("1\n2\n");
        let (two, _) = scripted("");
        let out = SharedBuf::default();
        let mut session = Session::new(GameEngine::new(board), Box::new(one), Box::new(two))
            .with_output(out.clone())
            .without_pause();
        let mut rng = SmallRng::seed_from_u64(3);

        assert_eq!(session.run(&mut rng).unwrap(), Outcome::Tie);
        let text = out.contents();
        assert!(text.contains("Please move a bucket with beads in it."));
        assert!(text.ends_with("Tie game!\n"));
        assert!(text.starts_with("------- [0] [2] -------\n[[ 0 ]] ------- [[ 0 ]]\n"));
        assert_eq!(prompts.contents().matches("Choose which bucket").count(), 2);
        assert_eq!(session.engine().board().pits(Side::Two), vec![2, 2]);
    }

    #[test]
    fn test_session_extra_turn_keeps_player() {
        // pit 1 reaches player one's store, then pit 0 empties the row
        let board = Board::try_from(BoardState {
            pits_per_player: 2,
            pits: vec![1, 3, 1, 1],
            stores: [0, 0],
        })
        .unwrap();
        let (one, prompts) = scripted("2\n1\n");
        let (two, _) = scripted("");
        let mut session = Session::new(GameEngine::new(board), Box::new(one), Box::new(two))
            .with_output(io::sink())
            .without_pause();
        let mut rng = SmallRng::seed_from_u64(3);

        let outcome = session.run(&mut rng).unwrap();
        assert_eq!(session.engine().turn_count(), 2);
        assert!(prompts.contents().contains("goes again"));
        assert_eq!(outcome, session.engine().board().player_ahead());
    }

    #[test]
    fn test_cli_report_survives_broken_output() {
        let mut player = CliPlayer::with_io(Cursor::new(Vec::new()), BrokenPipe);
        player.handle_move_result(Side::One, 5, MoveResult::ExtraTurn);
        player.handle_move_result(
            Side::Two,
            7,
            MoveResult::Captured {
                pit: 7,
                opposite: 4,
                beads: 3,
            },
        );
        player.handle_move_result(Side::One, 0, MoveResult::TurnEnds);
    }

    #[test]
    fn test_menu_retries_bad_input() {
        let mut input = Cursor::new("3\n1\nexpert\n1\nhard\n");
        let mut out = Vec::new();
        let mode = choose_mode(&mut input, &mut out).unwrap();
        assert_eq!(mode, Mode::Single(Difficulty::Hard));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Bad input.").count(), 2);
        assert_eq!(text.matches("Choose number of players: [1 or 2]").count(), 3);
        assert_eq!(text.matches("Choose difficulty: [easy, medium, or hard]").count(), 2);
        assert!(text.rfind("Bad input.") < text.rfind("Choose difficulty"));
    }

    #[test]
    fn test_menu_two_players_and_closed_input() {
        let mut out = Vec::new();
        assert_eq!(
            choose_mode(&mut Cursor::new(" 2 \n"), &mut out).unwrap(),
            Mode::TwoPlayer
        );
        assert!(!String::from_utf8(out).unwrap().contains("Choose difficulty"));

        assert!(choose_mode(&mut Cursor::new("1\n"), &mut io::sink()).is_err());
        assert!(choose_mode(&mut Cursor::new(""), &mut io::sink()).is_err());
    }

    #[test]
    fn test_session_pauses_once_per_turn() {
        // pit 0 lands in player one's store; the replay from pit 1 empties the row
        let board = Board::try_from(BoardState {
            pits_per_player: 2,
            pits: vec![4, 0, 1, 1],
            stores: [0, 0],
        })
        .unwrap();
        let (two, prompts) = scripted("");
        let out = SharedBuf::default();
        let mut session = Session::new(
            GameEngine::new(board),
            Box::new(AiPlayer::default()),
            Box::new(two),
        )
        .with_output(out.clone())
        .with_thinking_pause(1, Duration::ZERO);
        let mut rng = SmallRng::seed_from_u64(5);

        assert_eq!(session.run(&mut rng).unwrap(), Outcome::Winner(Side::One));
        assert_eq!(session.engine().turn_count(), 2);
        assert_eq!(out.contents().matches("[Player One] - Moving.").count(), 1);
        assert!(prompts.contents().is_empty());
    }
}
