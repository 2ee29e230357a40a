//! Path generation and start-crossing detection.

use smallvec::SmallVec;

use crate::core::SquareId;

/// Squares visited by a move, start and end inclusive.
///
/// Inline capacity covers the longest single roll (6 + 6 + 3 = 15 steps).
pub type Path = SmallVec<[SquareId; 16]>;

/// Walk forward one square at a time from `start` to `end`.
///
/// When `end < start` the walk wraps through index 0. A zero-length move
/// yields `[start]`.
///
/// ```
/// use speed_die_rules::core::SquareId;
/// use speed_die_rules::movement::walk_path;
///
/// let path = walk_path(SquareId::new(38), SquareId::new(1), 40);
/// let raw: Vec<u8> = path.iter().map(|s| s.0).collect();
/// assert_eq!(raw, vec![38, 39, 0, 1]);
/// ```
#[must_use]
pub fn walk_path(start: SquareId, end: SquareId, board_size: usize) -> Path {
    let distance = forward_distance(start, end, board_size);
    (0..=distance).map(|step| start.advance(step, board_size)).collect()
}

/// Teleport path: just the two endpoints.
#[must_use]
pub fn direct_path(start: SquareId, end: SquareId) -> Path {
    SmallVec::from_slice(&[start, end])
}

/// Number of forward steps from `start` to `end`.
#[must_use]
pub fn forward_distance(start: SquareId, end: SquareId, board_size: usize) -> usize {
    if end >= start {
        end.index() - start.index()
    } else {
        board_size - start.index() + end.index()
    }
}

/// Check whether a forward move from `start` to `end` crossed the start square.
///
/// The walk wrapped iff the destination index is lower than the origin.
/// Landing exactly on index 0 from elsewhere counts as passing. A move
/// that begins on index 0 can never wrap within one lap.
#[must_use]
pub fn passed_start(start: SquareId, end: SquareId) -> bool {
    end < start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(path: &Path) -> Vec<u8> {
        path.iter().map(|s| s.0).collect()
    }

    #[test]
    fn test_short_path() {
        let path = walk_path(SquareId::new(5), SquareId::new(10), 40);
        assert_eq!(ids(&path), vec![5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_wraparound_path() {
        let path = walk_path(SquareId::new(38), SquareId::new(3), 40);
        assert_eq!(ids(&path), vec![38, 39, 0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_length_path() {
        let path = walk_path(SquareId::new(12), SquareId::new(12), 40);
        assert_eq!(ids(&path), vec![12]);
    }

    #[test]
    fn test_path_to_start_square() {
        let path = walk_path(SquareId::new(35), SquareId::new(0), 40);
        assert_eq!(ids(&path), vec![35, 36, 37, 38, 39, 0]);
    }

    #[test]
    fn test_direct_path() {
        let path = direct_path(SquareId::new(30), SquareId::new(10));
        assert_eq!(ids(&path), vec![30, 10]);
    }

    #[test]
    fn test_forward_distance() {
        assert_eq!(forward_distance(SquareId::new(0), SquareId::new(9), 40), 9);
        assert_eq!(forward_distance(SquareId::new(37), SquareId::new(5), 40), 8);
        assert_eq!(forward_distance(SquareId::new(4), SquareId::new(4), 40), 0);
    }

    #[test]
    fn test_passed_start() {
        assert!(passed_start(SquareId::new(37), SquareId::new(5)));
        assert!(passed_start(SquareId::new(35), SquareId::new(0)));
        assert!(!passed_start(SquareId::new(0), SquareId::new(9)));
        assert!(!passed_start(SquareId::new(5), SquareId::new(12)));
    }
}
