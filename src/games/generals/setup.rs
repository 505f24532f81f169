//! Random deployment.

use crate::core::{home_rows, GameRng, GameState, Intent, PlayerId, Tile, BOARD_COLUMNS};

/// Produce placements that deploy every remaining piece of `player`'s army
/// on a random empty home tile.
///
/// Pieces already on the board stay where they are. Tiles in the returned
/// intents are in `player`'s frame, ready to be submitted in order.
pub fn random_deployment(state: &GameState, player: PlayerId, rng: &mut GameRng) -> Vec<Intent> {
    let board = state.board();

    let mut tiles: Vec<Tile> = home_rows(player)
        .flat_map(|row| (0..BOARD_COLUMNS).map(move |column| Tile::new(row, column)))
        .filter(|tile| board.is_empty(*tile))
        .collect();
    rng.shuffle(&mut tiles);

    board
        .army(player)
        .iter()
        .filter(|piece| !piece.is_deployed() && !piece.is_eliminated())
        .zip(tiles)
        .map(|(piece, tile)| Intent::place(piece.id, tile.to_frame(player)))
        .collect()
}
