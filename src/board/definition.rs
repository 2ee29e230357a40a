//! Board definition: the validated, immutable square array.
//!
//! A board is loaded once from a [`BoardAsset`] (usually JSON) and then
//! only read. Lookups index directly by position; the forward searches
//! used by the movement resolver walk the array with wraparound.

use std::ops::Index;
use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::square::Square;
use crate::core::{BoardConfig, Error, Result, SquareId};

const STANDARD_BOARD_JSON: &str = include_str!("standard_board.json");

/// Board data as stored on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardAsset {
    /// Declared number of squares.
    pub board_size: usize,

    /// Squares in traversal order.
    pub squares: Vec<Square>,

    /// Positions of the bus-ticket squares, in board order.
    pub bus_ticket_squares: Vec<usize>,
}

impl BoardAsset {
    /// Parse an asset from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the asset against a board configuration.
    #[must_use]
    pub fn validate(&self, config: &BoardConfig) -> BoardValidation {
        let mut errors = Vec::new();

        if self.board_size != config.board_size {
            errors.push(format!(
                "Board declares {} squares but config expects {}",
                self.board_size, config.board_size
            ));
        }

        check_layout(config, &self.squares, &self.bus_ticket_squares, &mut errors);

        BoardValidation::from_errors(errors)
    }
}

/// Outcome of a board integrity check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardValidation {
    /// No errors were found.
    pub valid: bool,

    /// Human-readable problems, in discovery order.
    pub errors: Vec<String>,
}

impl BoardValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert into a `Result`, failing with [`Error::InvalidBoard`].
    pub fn into_result(self) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(Error::InvalidBoard(self.errors))
        }
    }
}

/// Shared checks for assets and loaded boards.
fn check_layout(config: &BoardConfig, squares: &[Square], bus_tickets: &[usize], errors: &mut Vec<String>) {
    if config.board_size == 0 {
        errors.push("Board must have at least 1 square".to_string());
    }

    if squares.len() != config.board_size {
        errors.push(format!(
            "Board should have {} squares, found {}",
            config.board_size,
            squares.len()
        ));
    }

    for (i, square) in squares.iter().enumerate() {
        if square.id.index() != i {
            errors.push(format!("Square at index {} has incorrect id: {}", i, square.id.index()));
        }
    }

    for &pos in bus_tickets {
        if pos >= squares.len() {
            errors.push(format!("Bus ticket square {} not found", pos));
        }
    }

    for square in squares.iter().filter(|s| s.has_bus_ticket) {
        if !bus_tickets.contains(&square.id.index()) {
            errors.push(format!(
                "Square {} is marked with a bus ticket but is not listed as a bus ticket square",
                square.id.index()
            ));
        }
    }

    for (label, index) in [("Start", config.start_index), ("Jail", config.jail_index)] {
        if index.index() >= squares.len() {
            errors.push(format!("{} square {} is not on the board", label, index.index()));
        }
    }
}

/// Immutable, validated board.
///
/// ## Example
///
/// ```
/// use speed_die_rules::board::{Board, SquareType};
///
/// let board = Board::standard();
/// assert_eq!(board.size(), 40);
/// assert_eq!(board.square_at(0).unwrap().name, "GO");
/// assert!(board.is_bus_ticket_square(5));
/// assert_eq!(board.square_at(39).unwrap().kind, SquareType::Property);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    squares: Vec<Square>,
    bus_tickets: Vec<SquareId>,
    bus_ticket_set: FxHashSet<SquareId>,
}

impl Board {
    /// The classic 40-square board, parsed once per process.
    #[must_use]
    pub fn standard() -> &'static Board {
        static STANDARD: OnceLock<Board> = OnceLock::new();
        STANDARD.get_or_init(|| {
            Board::from_json(STANDARD_BOARD_JSON).expect("embedded standard board is valid")
        })
    }

    /// Parse and validate a board from JSON, using the classic start and jail squares.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_asset(BoardAsset::from_json(json)?)
    }

    /// Validate an asset and build a board from it.
    ///
    /// The board size comes from the asset; start and jail keep their
    /// classic positions.
    pub fn from_asset(asset: BoardAsset) -> Result<Self> {
        let config = BoardConfig {
            board_size: asset.board_size,
            ..BoardConfig::default()
        };
        Self::from_asset_with_config(asset, config)
    }

    /// Validate an asset against an explicit config and build a board.
    pub fn from_asset_with_config(asset: BoardAsset, config: BoardConfig) -> Result<Self> {
        let validation = asset.validate(&config);
        if !validation.valid {
            warn!(errors = ?validation.errors, "rejecting board asset");
        }
        validation.into_result()?;

        let bus_tickets: Vec<SquareId> = asset
            .bus_ticket_squares
            .iter()
            .map(|&pos| SquareId::new(pos as u8))
            .collect();
        let bus_ticket_set = bus_tickets.iter().copied().collect();

        debug!(
            squares = asset.squares.len(),
            bus_tickets = bus_tickets.len(),
            "loaded board"
        );

        Ok(Self {
            config,
            squares: asset.squares,
            bus_tickets,
            bus_ticket_set,
        })
    }

    /// Board constants.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of squares in one lap.
    #[must_use]
    pub fn size(&self) -> usize {
        self.config.board_size
    }

    /// All squares in traversal order.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Bus-ticket squares in board order.
    #[must_use]
    pub fn bus_ticket_squares(&self) -> &[SquareId] {
        &self.bus_tickets
    }

    /// Get the square at a position.
    pub fn square_at(&self, index: usize) -> Result<&Square> {
        self.squares.get(index).ok_or(Error::SquareNotFound(index))
    }

    /// Check whether a position is a bus-ticket square.
    #[must_use]
    pub fn is_bus_ticket_square(&self, index: usize) -> bool {
        index < self.squares.len() && self.bus_ticket_set.contains(&SquareId::new(index as u8))
    }

    /// Check whether landing on a position triggers an instruction
    /// (corner squares, Chance, Community Chest, tax).
    pub fn is_special_square(&self, index: usize) -> Result<bool> {
        Ok(self.square_at(index)?.kind.requires_action())
    }

    /// Square records for every position along a path.
    pub fn path_details(&self, path: &[SquareId]) -> Result<Vec<&Square>> {
        path.iter().map(|id| self.square_at(id.index())).collect()
    }

    /// Re-check the loaded board's integrity.
    ///
    /// Boards are validated when built, so this only fails for boards
    /// assembled with an inconsistent config.
    #[must_use]
    pub fn validate(&self) -> BoardValidation {
        let bus_tickets: Vec<usize> = self.bus_tickets.iter().map(|id| id.index()).collect();
        let mut errors = Vec::new();
        check_layout(&self.config, &self.squares, &bus_tickets, &mut errors);
        BoardValidation::from_errors(errors)
    }

    /// First square after `from` (wrapping) that matches `predicate`.
    ///
    /// Checks `from + 1` through `from + size`, so `from` itself is
    /// tested last. Returns `None` if no square matches.
    pub fn find_next_from<F>(&self, from: SquareId, predicate: F) -> Option<SquareId>
    where
        F: Fn(&Square) -> bool,
    {
        let size = self.size();
        (1..=size)
            .map(|step| from.advance(step, size))
            .find(|pos| predicate(&self.squares[pos.index()]))
    }

    /// Next property, railroad or utility after `from`.
    #[must_use]
    pub fn next_purchasable(&self, from: SquareId) -> Option<SquareId> {
        self.find_next_from(from, |square| square.kind.is_purchasable())
    }

    /// Next bus-ticket square after `from`.
    #[must_use]
    pub fn next_bus_ticket(&self, from: SquareId) -> Option<SquareId> {
        self.find_next_from(from, |square| self.bus_ticket_set.contains(&square.id))
    }
}

impl Index<SquareId> for Board {
    type Output = Square;

    fn index(&self, id: SquareId) -> &Self::Output {
        &self.squares[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareType;

    fn tiny_asset() -> BoardAsset {
        BoardAsset {
            board_size: 4,
            squares: vec![
                Square::new(SquareId::new(0), "Start", SquareType::Start),
                Square::new(SquareId::new(1), "Lot", SquareType::Property).with_price(10),
                Square::new(SquareId::new(2), "Depot", SquareType::Railroad).with_bus_ticket(),
                Square::new(SquareId::new(3), "Tax", SquareType::Tax).with_amount(5),
            ],
            bus_ticket_squares: vec![2],
        }
    }

    fn tiny_config() -> BoardConfig {
        BoardConfig::new(4).with_jail_index(SquareId::new(3))
    }

    #[test]
    fn test_standard_board_is_valid() {
        let board = Board::standard();
        let validation = board.validate();
        assert!(validation.valid, "{:?}", validation.errors);
        assert_eq!(board.size(), 40);
        assert_eq!(board.bus_ticket_squares().len(), 4);
    }

    #[test]
    fn test_square_at() {
        let board = Board::standard();
        assert_eq!(board.square_at(9).unwrap().name, "Connecticut Avenue");
        assert!(matches!(board.square_at(40), Err(Error::SquareNotFound(40))));
    }

    #[test]
    fn test_index_by_square_id() {
        let board = Board::standard();
        assert_eq!(board[SquareId::new(10)].name, "Jail / Just Visiting");
    }

    #[test]
    fn test_is_bus_ticket_square() {
        let board = Board::standard();
        for pos in [5, 15, 25, 35] {
            assert!(board.is_bus_ticket_square(pos));
        }
        assert!(!board.is_bus_ticket_square(12));
        assert!(!board.is_bus_ticket_square(400));
    }

    #[test]
    fn test_special_squares() {
        let board = Board::standard();
        assert!(board.is_special_square(10).unwrap());
        assert!(board.is_special_square(7).unwrap());
        assert!(board.is_special_square(2).unwrap());
        assert!(board.is_special_square(38).unwrap());
        assert!(!board.is_special_square(1).unwrap());
        assert!(board.is_special_square(99).is_err());
    }

    #[test]
    fn test_find_next_wraps() {
        let board = Board::standard();
        assert_eq!(board.next_purchasable(SquareId::new(7)), Some(SquareId::new(8)));
        assert_eq!(board.next_purchasable(SquareId::new(39)), Some(SquareId::new(1)));
        assert_eq!(board.next_bus_ticket(SquareId::new(36)), Some(SquareId::new(5)));
        assert_eq!(board.next_bus_ticket(SquareId::new(5)), Some(SquareId::new(15)));
    }

    #[test]
    fn test_find_next_tests_origin_last() {
        let board = Board::from_asset_with_config(tiny_asset(), tiny_config()).unwrap();
        // Only square 2 is a railroad; searching from it laps the board.
        let found = board.find_next_from(SquareId::new(2), |s| s.kind == SquareType::Railroad);
        assert_eq!(found, Some(SquareId::new(2)));
        assert_eq!(board.find_next_from(SquareId::new(0), |s| s.name == "Nowhere"), None);
    }

    #[test]
    fn test_path_details() {
        let board = Board::standard();
        let path = [SquareId::new(0), SquareId::new(1), SquareId::new(2)];
        let details = board.path_details(&path).unwrap();

        assert_eq!(details.len(), 3);
        assert_eq!(details[0].name, "GO");
        assert_eq!(details[2].name, "Community Chest");
    }

    #[test]
    fn test_asset_wrong_size() {
        let mut asset = tiny_asset();
        asset.squares.pop();

        let validation = asset.validate(&tiny_config());
        assert!(!validation.valid);
        assert!(validation.errors.iter().any(|e| e.contains("should have 4 squares, found 3")));
    }

    #[test]
    fn test_asset_bad_ids() {
        let mut asset = tiny_asset();
        asset.squares[1].id = SquareId::new(7);

        let validation = asset.validate(&tiny_config());
        assert_eq!(validation.errors, vec!["Square at index 1 has incorrect id: 7".to_string()]);
    }

    #[test]
    fn test_asset_missing_bus_ticket_square() {
        let mut asset = tiny_asset();
        asset.bus_ticket_squares.push(9);

        let validation = asset.validate(&tiny_config());
        assert_eq!(validation.errors, vec!["Bus ticket square 9 not found".to_string()]);
    }

    #[test]
    fn test_asset_unlisted_bus_ticket_flag() {
        let mut asset = tiny_asset();
        asset.bus_ticket_squares.clear();

        let validation = asset.validate(&tiny_config());
        assert_eq!(validation.errors.len(), 1);
        assert!(validation.errors[0].contains("not listed"));
    }

    #[test]
    fn test_jail_off_board() {
        let validation = tiny_asset().validate(&BoardConfig::new(4));
        assert_eq!(validation.errors, vec!["Jail square 10 is not on the board".to_string()]);
    }

    #[test]
    fn test_from_asset_rejects_invalid() {
        let mut asset = tiny_asset();
        asset.squares.pop();

        let err = Board::from_asset_with_config(asset, tiny_config()).unwrap_err();
        assert!(matches!(err, Error::InvalidBoard(_)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Board::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::BoardFormat(_)));
    }

    #[test]
    fn test_asset_round_trip() {
        let asset = BoardAsset::from_json(STANDARD_BOARD_JSON).unwrap();
        let json = serde_json::to_string(&asset).unwrap();
        assert_eq!(BoardAsset::from_json(&json).unwrap(), asset);
    }

    #[test]
    fn test_validation_into_result() {
        assert!(BoardValidation::from_errors(vec![]).into_result().is_ok());
        assert!(BoardValidation::from_errors(vec!["bad".into()]).into_result().is_err());
    }
}
