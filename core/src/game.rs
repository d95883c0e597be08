use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A game from construction to its terminal state.
///
/// The discovered counter adds up every cell opened by `play` and the score deltas of
/// `flag`: flagging a mine counts like opening a safe cell, unflagging it takes that
/// back. Reaching `width * height - mines` ends the game with a victory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    discovered: Saturating<CellCount>,
    dead: bool,
}

impl Game {
    /// Random layout drawn from `seed`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_sampler(config, &mut RandomSampler::seed_from_u64(seed))
    }

    pub fn with_sampler(config: GameConfig, sampler: &mut impl MineSampler) -> Result<Self> {
        config.validate()?;

        let mut board = Board::new(config.size());
        for _ in 0..config.mines {
            let coords = board.deploy_mine(sampler);
            log::trace!("Deployed mine at {:?}", coords);
        }
        log::debug!(
            "New {}x{} game with {} mines",
            config.width,
            config.height,
            config.mines
        );

        Ok(Self::from_board(config, board))
    }

    /// Fixed layout, duplicated coordinates only count once
    pub fn from_mine_coords(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut config = GameConfig::new_unchecked(width, height, 0);
        config.validate()?;

        let mut board = Board::new(config.size());
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board[coords].deploy_mine();
        }
        config.mines = board.mine_count();

        Ok(Self::from_board(config, board))
    }

    fn from_board(config: GameConfig, board: Board) -> Self {
        Self {
            config,
            board,
            discovered: Saturating(0),
            dead: false,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn discovered(&self) -> CellCount {
        self.discovered.0
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Opens a cell.
    ///
    /// Returns whether the move changed the game, a detonation included. Clicking a
    /// revealed or flagged cell, or any cell once the game is over, is a no-op.
    pub fn play(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.board.validate_coords(coords)?;

        if !self.still_playing() {
            log::debug!("Ignoring play at {:?}, game is over", coords);
            return Ok(false);
        }

        if !self.board[coords].is_valid(self.dead) {
            log::debug!("Ignoring play at {:?}, cell is not playable", coords);
            return Ok(false);
        }

        match self.board.click(coords) {
            ClickOutcome::Detonated => {
                log::debug!("Mine at {:?} exploded, game lost", coords);
                self.dead = true;
            }
            ClickOutcome::Revealed(count) => {
                self.discovered += count;
                if self.victory() {
                    log::debug!("All safe cells discovered, game won");
                }
            }
        }

        Ok(true)
    }

    /// Toggles the flag on a cell, returns whether the cell could be flagged.
    ///
    /// This does not check whether the game is over: flagging a mine after the end still
    /// moves the discovered counter.
    pub fn flag(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.board.validate_coords(coords)?;

        let outcome = self.board[coords].flag();
        match outcome.delta {
            ScoreDelta::Up => self.discovered += 1,
            ScoreDelta::Down => self.discovered -= 1,
            ScoreDelta::Unchanged => {}
        }
        log::debug!(
            "Flag at {:?}: eligible {}, score {}",
            coords,
            outcome.eligible,
            outcome.delta.value()
        );

        Ok(outcome.eligible)
    }

    pub fn still_playing(&self) -> bool {
        !self.dead && self.discovered.0 < self.config.safe_cell_count()
    }

    pub fn victory(&self) -> bool {
        !self.still_playing() && !self.dead
    }

    pub fn status(&self) -> GameStatus {
        if self.dead {
            GameStatus::Lost
        } else if self.still_playing() {
            GameStatus::Playing
        } else {
            GameStatus::Won
        }
    }

    /// Snapshot for renderers, mines are included only with `xray` once the game is over
    pub fn board_state(&self, xray: bool) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, !self.still_playing(), xray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: Coord, height: Coord, mines: CellCount) -> GameConfig {
        GameConfig::new(width, height, mines).unwrap()
    }

    fn game(width: Coord, height: Coord, mines: &[Coord2]) -> Game {
        Game::from_mine_coords(width, height, mines).unwrap()
    }

    fn find_mine(game: &Game) -> Coord2 {
        game.board
            .cells()
            .find(|cell| cell.has_mine())
            .map(Cell::coords)
            .unwrap()
    }

    #[test]
    fn new_game_starts_clean() {
        let game = Game::new(config(2, 4, 3), 1).unwrap();

        assert_eq!(game.size(), (4, 2));
        assert_eq!(game.total_mines(), 3);
        assert_eq!(game.discovered(), 0);
        assert!(!game.is_dead());
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn too_many_mines_is_rejected() {
        let config = GameConfig::new_unchecked(10, 10, 101);
        let err = Game::new(config, 0).unwrap_err();

        assert_eq!(
            err,
            GameError::TooManyMines {
                mines: 101,
                capacity: 100
            }
        );
    }

    #[test]
    fn full_board_is_accepted() {
        let game = Game::new(config(3, 3, 9), 5).unwrap();
        assert_eq!(game.board.mine_count(), 9);
    }

    #[test]
    fn exact_mine_count_is_deployed() {
        for (width, height, mines) in [
            (10, 10, 1),
            (10, 10, 50),
            (10, 10, 99),
            (10, 1, 1),
            (10, 1, 5),
            (10, 1, 9),
            (1, 10, 1),
            (1, 10, 5),
            (1, 10, 9),
        ] {
            let game = Game::new(config(width, height, mines), 11).unwrap();
            assert_eq!(game.board.mine_count(), mines);
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let a = Game::new(config(16, 16, 40), 1234).unwrap();
        let b = Game::new(config(16, 16, 40), 1234).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_mine_coords_counts_distinct_mines() {
        let game = game(4, 4, &[(1, 1), (1, 1), (2, 3)]);
        assert_eq!(game.total_mines(), 2);

        let err = Game::from_mine_coords(4, 4, &[(4, 0)]).unwrap_err();
        assert_eq!(err, GameError::OutOfBounds { coords: (4, 0) });
    }

    #[test]
    fn play_on_empty_board_wins_in_one_click() {
        let mut game = game(10, 10, &[]);

        assert!(game.play((0, 1)).unwrap());

        assert_eq!(game.discovered(), 100);
        assert!(!game.still_playing());
        assert!(game.victory());
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn play_on_mine_ends_the_game() {
        let mut game = game(10, 10, &[(1, 2)]);

        assert!(game.play((1, 2)).unwrap());

        assert!(game.is_dead());
        assert!(!game.still_playing());
        assert!(!game.victory());
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(!game.play((5, 5)).unwrap());
    }

    #[test]
    fn play_with_random_mine_loses() {
        let mut game = Game::new(config(10, 10, 1), 99).unwrap();
        let mine = find_mine(&game);

        assert!(game.play(mine).unwrap());
        assert!(!game.victory());
    }

    #[test]
    fn play_on_flagged_cell_is_rejected() {
        let mut game = game(10, 10, &[(2, 1)]);

        assert!(game.flag((2, 1)).unwrap());
        let discovered = game.discovered();

        assert!(!game.play((2, 1)).unwrap());
        assert_eq!(game.discovered(), discovered);
        assert!(!game.is_dead());
    }

    #[test]
    fn play_on_revealed_cell_is_rejected() {
        let mut game = game(10, 10, &[(3, 3)]);

        assert!(game.play((2, 3)).unwrap());
        assert_eq!(game.discovered(), 1);

        assert!(!game.play((2, 3)).unwrap());
        assert_eq!(game.discovered(), 1);
    }

    #[test]
    fn play_counts_flood_fill_and_wins() {
        let mut game = game(10, 10, &[(3, 3)]);

        assert!(game.play((1, 1)).unwrap());

        assert_eq!(game.discovered(), 99);
        assert!(game.victory());
    }

    #[test]
    fn out_of_bounds_moves_fail() {
        let mut game = game(10, 5, &[]);

        assert_eq!(
            game.play((5, 0)),
            Err(GameError::OutOfBounds { coords: (5, 0) })
        );
        assert_eq!(
            game.flag((0, 10)),
            Err(GameError::OutOfBounds { coords: (0, 10) })
        );
        assert!(game.play((4, 9)).unwrap());
    }

    #[test]
    fn flag_and_unflag_mine_round_trips_counter() {
        let mut game = game(10, 10, &[(4, 4)]);
        let before = game.discovered();

        assert!(game.flag((4, 4)).unwrap());
        assert_eq!(game.discovered(), before + 1);

        assert!(game.flag((4, 4)).unwrap());
        assert_eq!(game.discovered(), before);
    }

    #[test]
    fn flag_on_safe_cell_does_not_score() {
        let mut game = game(10, 10, &[(4, 4)]);

        assert!(game.flag((1, 2)).unwrap());
        assert!(game.board[(1, 2)].is_flagged());
        assert_eq!(game.discovered(), 0);
    }

    #[test]
    fn flag_on_revealed_cell_is_rejected() {
        let mut game = game(10, 10, &[(3, 3)]);
        game.play((2, 3)).unwrap();

        assert!(!game.flag((2, 3)).unwrap());
        assert!(!game.board[(2, 3)].is_flagged());
        assert_eq!(game.discovered(), 1);
    }

    #[test]
    fn flagging_every_mine_wins() {
        let mut game = game(2, 2, &[(0, 0), (0, 1)]);

        game.play((1, 0)).unwrap();
        assert!(game.still_playing());

        game.flag((0, 0)).unwrap();
        assert!(!game.still_playing());
        assert!(game.victory());
    }

    #[test]
    fn flag_after_the_end_still_moves_the_counter() {
        let mut game = game(3, 1, &[(0, 0)]);
        game.play((0, 2)).unwrap();
        assert!(game.victory());
        assert_eq!(game.discovered(), 2);

        assert!(game.flag((0, 0)).unwrap());
        assert_eq!(game.discovered(), 3);

        assert!(game.flag((0, 0)).unwrap());
        assert_eq!(game.discovered(), 2);
        assert!(game.victory());
    }

    #[test]
    fn board_state_reports_flags_counts_and_state() {
        let mut game = game(10, 10, &[(2, 2)]);
        game.flag((1, 1)).unwrap();

        let state = game.board_state(false);
        assert!(state[(1, 1)].flagged);
        assert_eq!(state[(1, 2)].mines_nearby, 1);
        assert_eq!(state[(2, 5)].state, CellState::Unknown);
        assert_eq!(state[(2, 5)].has_mine, None);
    }

    #[test]
    fn board_state_xray_requires_finished_game() {
        let mut game = game(10, 10, &[(5, 5)]);

        assert_eq!(game.board_state(true)[(5, 5)].has_mine, None);

        game.play((5, 5)).unwrap();
        let state = game.board_state(true);
        assert!(state.is_final());
        assert_eq!(state[(5, 5)].has_mine, Some(true));
        assert_eq!(state[(0, 0)].has_mine, Some(false));
        assert_eq!(game.board_state(false)[(5, 5)].has_mine, None);
    }
}
