//! Deployment phase: placement, withdrawal and readiness.
//!
//! Placements are submitted in the player's own frame and may only land on
//! an empty tile of the player's home rows. A piece can be moved around or
//! taken back off the board freely until play begins.

use tracing::{info, trace};

use crate::board::PieceId;
use crate::core::{home_rows, GameState, Phase, PlayerId, Tile};
use crate::rules::{Event, Illegal, Malformed, Rejection};

/// Place a piece on `tile`, or withdraw it when `tile` is `None`.
pub(super) fn place(
    state: &mut GameState,
    player: PlayerId,
    piece: PieceId,
    tile: Option<Tile>,
) -> Result<Event, Rejection> {
    if !piece.is_valid() {
        return Err(Malformed::UnknownPiece(piece).into());
    }
    if let Some(tile) = tile.filter(|tile| !tile.is_on_board()) {
        return Err(Malformed::TileOffBoard(tile).into());
    }
    if state.phase() != Phase::Deployment {
        return Err(Illegal::WrongPhase {
            expected: Phase::Deployment,
        }
        .into());
    }

    match tile {
        Some(tile) => deploy(state, player, piece, tile),
        None => withdraw(state, player, piece),
    }
}

fn deploy(
    state: &mut GameState,
    player: PlayerId,
    piece: PieceId,
    tile: Tile,
) -> Result<Event, Rejection> {
    let canonical = tile.from_frame(player);
    if !home_rows(player).contains(&canonical.row) {
        return Err(Illegal::OutsideHomeRows(tile).into());
    }
    if !state.board().is_empty(canonical) {
        return Err(Illegal::TileOccupied(tile).into());
    }

    let previous = state.board_mut().place(player, piece, canonical)?;
    trace!(%player, %piece, %canonical, ?previous, "piece placed");
    Ok(Event::Placed { piece, tile })
}

fn withdraw(state: &mut GameState, player: PlayerId, piece: PieceId) -> Result<Event, Rejection> {
    if state.board().piece(player, piece).is_some_and(|p| !p.is_eliminated() && !p.is_deployed()) {
        return Err(Illegal::PieceNotDeployed(piece).into());
    }

    let previous = state.board_mut().clear(player, piece)?;
    trace!(%player, %piece, ?previous, "piece withdrawn");
    Ok(Event::Withdrawn { piece })
}

/// Signal readiness; play starts once both players are ready.
pub(super) fn ready(state: &mut GameState, player: PlayerId) -> Result<Event, Rejection> {
    if state.is_ready(player) {
        return Err(Illegal::AlreadyReady.into());
    }

    state.set_ready(player);
    let play_started = state.phase() == Phase::Play;
    if play_started {
        info!(first = %state.turn(), "both armies ready, play begins");
    } else {
        trace!(%player, "player ready");
    }
    Ok(Event::Readied { play_started })
}
