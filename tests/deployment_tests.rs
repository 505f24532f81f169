//! Deployment phase tests.
//!
//! Placement legality, withdrawal, readiness and the one-way switch to play.

use generals_engine::core::{Intent, Phase, PlayerId, Tile};
use generals_engine::rules::{Event, Illegal, Malformed, Outcome};
use generals_engine::{check_invariants, GameRng, Match, PieceId};

/// Test that each player deploys into rows 5-7 of their own frame.
#[test]
fn test_home_rows_in_own_frame() {
    let mut game = Match::classic();

    for player in PlayerId::all() {
        for row in 0..5 {
            let tile = Tile::new(row, 4);
            let outcome = game.submit_placement(player, PieceId(0), Some(tile));
            assert_eq!(outcome, Outcome::RejectedIllegal(Illegal::OutsideHomeRows(tile)));
        }
        for row in 5..8 {
            let outcome = game.submit_placement(player, PieceId(0), Some(Tile::new(row, 4)));
            assert!(outcome.is_applied());
        }
    }

    // Player one ends on canonical (7, 4), player two on its rotation (0, 4).
    let board = game.state().board();
    assert_eq!(board.piece(PlayerId::One, PieceId(0)).unwrap().position(), Some(Tile::new(7, 4)));
    assert_eq!(board.piece(PlayerId::Two, PieceId(0)).unwrap().position(), Some(Tile::new(0, 4)));
    assert!(check_invariants(board).is_empty());
}

/// Test that rejected placements leave the state untouched.
#[test]
fn test_rejected_placements_change_nothing() {
    let mut game = Match::classic();
    game.submit_placement(PlayerId::One, PieceId(3), Some(Tile::new(6, 6)));
    let before = game.state().clone();

    let rejected = [
        (PieceId(4), Some(Tile::new(6, 6))),
        (PieceId(4), Some(Tile::new(3, 3))),
        (PieceId(21), Some(Tile::new(7, 0))),
        (PieceId(4), Some(Tile::new(8, 0))),
        (PieceId(5), None),
    ];
    for (piece, tile) in rejected {
        let outcome = game.submit_placement(PlayerId::One, piece, tile);
        assert!(!outcome.is_applied(), "{piece} to {tile:?} was applied");
        assert_eq!(game.state(), &before);
    }
}

/// Test that malformed and illegal placements are told apart.
#[test]
fn test_rejection_categories() {
    let mut game = Match::classic();

    assert_eq!(
        game.submit_placement(PlayerId::Two, PieceId(40), Some(Tile::new(5, 0))),
        Outcome::RejectedMalformed(Malformed::UnknownPiece(PieceId(40)))
    );
    assert_eq!(
        game.submit_placement(PlayerId::Two, PieceId(1), Some(Tile::new(5, 12))),
        Outcome::RejectedMalformed(Malformed::TileOffBoard(Tile::new(5, 12)))
    );
    game.submit_placement(PlayerId::Two, PieceId(1), Some(Tile::new(5, 0)));
    assert_eq!(
        game.submit_placement(PlayerId::Two, PieceId(2), Some(Tile::new(5, 0))),
        Outcome::RejectedIllegal(Illegal::TileOccupied(Tile::new(5, 0)))
    );
}

/// Test that pieces can be rearranged and withdrawn before play.
#[test]
fn test_rearrange_and_withdraw() {
    let mut game = Match::classic();

    game.submit_placement(PlayerId::One, PieceId(20), Some(Tile::new(7, 0)));
    game.submit_placement(PlayerId::One, PieceId(20), Some(Tile::new(7, 8)));
    let board = game.state().board();
    assert!(board.is_empty(Tile::new(7, 0)));
    assert_eq!(board.deployed(PlayerId::One).count(), 1);

    assert_eq!(
        game.submit_placement(PlayerId::One, PieceId(20), None),
        Outcome::Applied(Event::Withdrawn { piece: PieceId(20) })
    );
    assert_eq!(game.state().board().deployed(PlayerId::One).count(), 0);
    assert!(check_invariants(game.state().board()).is_empty());
}

/// Test that readiness from both sides starts play immediately.
#[test]
fn test_readiness_starts_play() {
    let mut game = Match::classic();
    let mut rng = GameRng::new(11);
    game.deploy_randomly(PlayerId::One, &mut rng);
    game.deploy_randomly(PlayerId::Two, &mut rng);

    assert_eq!(
        game.submit_ready(PlayerId::Two),
        Outcome::Applied(Event::Readied { play_started: false })
    );
    assert_eq!(game.state().phase(), Phase::Deployment);
    assert!(game.view(PlayerId::One).opponent_ready);
    assert!(!game.view(PlayerId::Two).opponent_ready);

    // A ready player may still adjust their army.
    assert!(game.submit_placement(PlayerId::Two, PieceId(0), None).is_applied());
    let redeploy = game
        .legal_intents(PlayerId::Two)
        .into_iter()
        .find(|intent| {
            matches!(intent, Intent::Place { piece, tile: Some(_) } if *piece == PieceId(0))
        })
        .unwrap();
    assert!(game.submit(PlayerId::Two, &redeploy).is_applied());

    assert_eq!(
        game.submit_ready(PlayerId::Two),
        Outcome::RejectedIllegal(Illegal::AlreadyReady)
    );
    assert_eq!(
        game.submit_ready(PlayerId::One),
        Outcome::Applied(Event::Readied { play_started: true })
    );
    assert_eq!(game.state().phase(), Phase::Play);
    assert_eq!(game.view(PlayerId::Two).phase, Phase::Play);
}

/// Test that the phases accept only their own intents.
#[test]
fn test_phase_gates() {
    let mut game = Match::classic();
    game.submit_placement(PlayerId::One, PieceId(14), Some(Tile::new(5, 0)));

    assert_eq!(
        game.submit_move(PlayerId::One, PieceId(14), Some(Tile::new(4, 0))),
        Outcome::RejectedIllegal(Illegal::WrongPhase { expected: Phase::Play })
    );

    game.submit_ready(PlayerId::One);
    game.submit_ready(PlayerId::Two);

    assert_eq!(
        game.submit_placement(PlayerId::One, PieceId(13), Some(Tile::new(5, 1))),
        Outcome::RejectedIllegal(Illegal::WrongPhase {
            expected: Phase::Deployment
        })
    );
    assert_eq!(game.submit_ready(PlayerId::One), Outcome::RejectedIllegal(Illegal::AlreadyReady));
    assert!(game.submit_move(PlayerId::One, PieceId(14), Some(Tile::new(4, 0))).is_applied());
}
