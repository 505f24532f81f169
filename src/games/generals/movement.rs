//! Play phase: the move processor.
//!
//! A move steps one piece to an orthogonally adjacent tile. Stepping onto an
//! enemy starts an engagement settled by [`resolve`]; stepping onto the far
//! edge with the Flag is a flag rush. After every move the opponent's pending
//! flag rush, if any, is confirmed: they survived the one reply they were
//! owed.

use tracing::{debug, info};

use crate::board::{Occupant, PieceId};
use crate::combat::{resolve, CombatOutcome};
use crate::core::{far_edge, ArmyConfig, GameState, MoveRecord, Phase, PlayerId, Tile};
use crate::rules::{Event, FlagRush, Illegal, Malformed, Rejection, VictoryCause, VictoryStatus};

/// Validate and apply one move for `player`.
pub(super) fn step(
    army: &ArmyConfig,
    state: &mut GameState,
    player: PlayerId,
    piece: PieceId,
    tile: Option<Tile>,
) -> Result<Event, Rejection> {
    let (from, to) = validate(state, player, piece, tile)?;
    let record = MoveRecord::new(from, to);
    let opponent = player.opponent();

    state.count_move();
    state.observe_move(opponent, Some(record.to_frame(opponent)));

    let event = match state.board().occupant(to) {
        Some(defender) => engage(army, state, player, piece, defender, record)?,
        None => advance(army, state, player, piece, record)?,
    };

    if !state.is_game_over() && state.victory().status(opponent) == VictoryStatus::Pending {
        state.victory_mut().promote_pending(opponent);
        announce_result(state);
    }

    if !state.is_game_over() {
        state.pass_turn();
        state.observe_move(player, None);
    }

    Ok(event)
}

/// Check a move against the rules; returns canonical origin and destination.
fn validate(
    state: &GameState,
    player: PlayerId,
    piece: PieceId,
    tile: Option<Tile>,
) -> Result<(Tile, Tile), Rejection> {
    if !piece.is_valid() {
        return Err(Malformed::UnknownPiece(piece).into());
    }
    if let Some(tile) = tile.filter(|tile| !tile.is_on_board()) {
        return Err(Malformed::TileOffBoard(tile).into());
    }
    if state.phase() != Phase::Play {
        return Err(Illegal::WrongPhase { expected: Phase::Play }.into());
    }
    if !state.is_turn(player) {
        return Err(Illegal::NotYourTurn.into());
    }

    let mover = state
        .board()
        .piece(player, piece)
        .ok_or(Malformed::UnknownPiece(piece))?;
    if mover.is_eliminated() {
        return Err(Illegal::PieceEliminated(piece).into());
    }
    let from = mover.position().ok_or(Illegal::PieceNotDeployed(piece))?;
    let tile = tile.ok_or(Illegal::DestinationOffBoard)?;
    let to = tile.from_frame(player);

    if state.board().occupant(to).is_some_and(|occupant| occupant.owner == player) {
        return Err(Illegal::OwnPieceAtDestination(tile).into());
    }
    let distance = from.distance(to);
    if distance != 1 {
        return Err(Illegal::NotAdjacent { distance }.into());
    }

    Ok((from, to))
}

fn engage(
    army: &ArmyConfig,
    state: &mut GameState,
    player: PlayerId,
    piece: PieceId,
    defender: Occupant,
    record: MoveRecord,
) -> Result<Event, Rejection> {
    let board = state.board();
    let attacker_rank = board.piece(player, piece).ok_or(Malformed::UnknownPiece(piece))?.rank;
    let defender_rank = board
        .piece(defender.owner, defender.piece)
        .ok_or(Malformed::UnknownPiece(defender.piece))?
        .rank;

    let result = resolve(attacker_rank, defender_rank, army);
    match result {
        CombatOutcome::AttackerWins => {
            eliminate(army, state, defender.owner, defender.piece)?;
            state.board_mut().place(player, piece, record.to)?;
        }
        CombatOutcome::Draw => {
            eliminate(army, state, player, piece)?;
            eliminate(army, state, defender.owner, defender.piece)?;
        }
        CombatOutcome::DefenderWins => {
            eliminate(army, state, player, piece)?;
        }
    }

    debug!(
        %player,
        attacker = %piece,
        defender = %defender.piece,
        from = %record.from,
        to = %record.to,
        ?result,
        "engagement"
    );
    Ok(Event::Engaged {
        piece,
        defender: defender.piece,
        record: record.to_frame(player),
        result,
    })
}

fn advance(
    army: &ArmyConfig,
    state: &mut GameState,
    player: PlayerId,
    piece: PieceId,
    record: MoveRecord,
) -> Result<Event, Rejection> {
    state.board_mut().place(player, piece, record.to)?;
    debug!(%player, %piece, from = %record.from, to = %record.to, "piece advanced");

    let is_flag = state
        .board()
        .piece(player, piece)
        .is_some_and(|mover| army.is_flag(mover.rank));
    let flag_rush = if is_flag && record.to.row == far_edge(player) {
        Some(flag_rush(state, player, record.to))
    } else {
        None
    };

    Ok(Event::Advanced {
        piece,
        record: record.to_frame(player),
        flag_rush,
    })
}

/// Settle a Flag arriving on the far edge at `tile`.
fn flag_rush(state: &mut GameState, player: PlayerId, tile: Tile) -> FlagRush {
    let challenged = tile
        .horizontal_neighbors()
        .into_iter()
        .any(|side| state.board().occupant(side).is_some_and(|occupant| occupant.owner != player));

    if challenged {
        state.victory_mut().mark_pending(player);
        debug!(%player, %tile, "flag rush challenged, victory pending");
        FlagRush::Challenged
    } else {
        state.victory_mut().confirm(player, VictoryCause::FlagRush);
        announce_result(state);
        FlagRush::Unchallenged
    }
}

/// Remove a piece from play, ending the game if it is a Flag.
fn eliminate(
    army: &ArmyConfig,
    state: &mut GameState,
    owner: PlayerId,
    piece: PieceId,
) -> Result<(), Rejection> {
    let rank = state
        .board()
        .piece(owner, piece)
        .ok_or(Malformed::UnknownPiece(piece))?
        .rank;

    state.board_mut().eliminate(owner, piece)?;
    state.record_elimination(owner, piece);

    let captor = owner.opponent();
    if army.is_flag(rank) && state.victory_mut().confirm(captor, VictoryCause::FlagCaptured) {
        announce_result(state);
    }
    Ok(())
}

fn announce_result(state: &GameState) {
    if let Some(result) = state.result() {
        info!(
            winner = %result.winner,
            cause = ?result.cause,
            moves = state.moves_played(),
            "game over"
        );
    }
}
