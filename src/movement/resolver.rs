//! Movement resolution.
//!
//! The resolver borrows an immutable [`Board`] and maps a starting
//! position plus a dice roll to a [`MovementResult`]. It holds no state
//! between calls; identical inputs give identical results.

use tracing::{debug, trace, warn};

use super::path::{direct_path, passed_start, walk_path};
use super::result::{BusOptions, FollowUpAction, Leg, MovementResult, WalkOption};
use crate::board::Board;
use crate::core::{DiceRoll, Error, Result, SpeedDie, SquareId};

/// Resolves token movement against a board.
///
/// ## Example
///
/// ```
/// use speed_die_rules::board::Board;
/// use speed_die_rules::core::{SpeedDie, SquareId};
/// use speed_die_rules::movement::MovementResolver;
///
/// let resolver = MovementResolver::new(Board::standard());
/// let result = resolver.resolve(37, 5, 2, SpeedDie::Number(1)).unwrap();
///
/// assert_eq!(result.destination(), Some(SquareId::new(5)));
/// assert!(result.leg().unwrap().passed_start);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MovementResolver<'a> {
    board: &'a Board,
}

impl<'a> MovementResolver<'a> {
    /// Create a resolver over `board`.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// The board this resolver reads.
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Resolve a move from raw inputs.
    ///
    /// Fails with an invalid-argument error when `position` is off the
    /// board, a regular die is outside 1-6, or the roll would walk a full
    /// lap.
    pub fn resolve(&self, position: i64, die1: u8, die2: u8, speed: SpeedDie) -> Result<MovementResult> {
        self.resolve_roll(position, &DiceRoll { die1, die2, speed })
    }

    /// Resolve a move for a full roll.
    pub fn resolve_roll(&self, position: i64, roll: &DiceRoll) -> Result<MovementResult> {
        let start = self.checked_position(position)?;
        roll.validate()?;

        let board_size = self.board.size();
        if usize::from(roll.total()) >= board_size {
            return Err(Error::MoveTooLong {
                spaces: roll.total(),
                board_size,
            });
        }

        let regular_total = roll.regular_total();
        let is_doubles = roll.is_doubles();

        let result = match roll.speed {
            SpeedDie::MrMonopoly => self.advance_to_property(start, regular_total, is_doubles)?,
            SpeedDie::Bus => self.bus_choice(start, regular_total, is_doubles)?,
            SpeedDie::Chance => self.draw_card_move(start, regular_total, is_doubles)?,
            SpeedDie::Number(n) => self.normal_move(start, regular_total + u16::from(n), is_doubles)?,
        };

        debug!(
            position,
            roll = %roll,
            outcome = result.type_tag(),
            destination = ?result.destination(),
            "resolved movement"
        );
        Ok(result)
    }

    /// Send the token directly to jail.
    ///
    /// The path is a teleport `[start, jail]`, and the start bonus is
    /// never paid.
    pub fn direct_to_jail(&self, position: i64) -> Result<MovementResult> {
        let start = self.checked_position(position)?;
        let jail = self.board.config().jail_index;

        let leg = Leg {
            destination: jail,
            path: direct_path(start, jail),
            passed_start: false,
            landed_square: self.board.square_at(jail.index())?.clone(),
        };

        debug!(position, "sent to jail");
        Ok(MovementResult::GoToJail {
            start_position: start,
            leg,
            special_actions: vec![FollowUpAction::InJail],
        })
    }

    fn checked_position(&self, position: i64) -> Result<SquareId> {
        let config = self.board.config();
        if !config.contains(position) {
            return Err(Error::InvalidPosition {
                position,
                board_size: config.board_size,
            });
        }
        Ok(SquareId::new(position as u8))
    }

    /// Walk forward to `destination` and describe the move.
    fn leg_to(&self, start: SquareId, destination: SquareId) -> Result<Leg> {
        let path = walk_path(start, destination, self.board.size());
        trace!(?path, "walked path");

        Ok(Leg {
            destination,
            path,
            passed_start: passed_start(start, destination),
            landed_square: self.board.square_at(destination.index())?.clone(),
        })
    }

    fn step(&self, start: SquareId, spaces: u16) -> SquareId {
        start.advance(usize::from(spaces), self.board.size())
    }

    fn normal_move(&self, start: SquareId, total: u16, is_doubles: bool) -> Result<MovementResult> {
        let leg = self.leg_to(start, self.step(start, total))?;
        let special_actions = start_bonus(&leg);

        Ok(MovementResult::Normal {
            start_position: start,
            leg,
            total_movement: total,
            is_doubles,
            special_actions,
        })
    }

    fn advance_to_property(&self, start: SquareId, regular_total: u16, is_doubles: bool) -> Result<MovementResult> {
        let normal_destination = self.step(start, regular_total);
        let target = self.board.next_purchasable(normal_destination).unwrap_or_else(|| {
            warn!(from = %normal_destination, "no purchasable square on board, staying put");
            normal_destination
        });

        let leg = self.leg_to(start, target)?;
        let mut special_actions = start_bonus(&leg);
        special_actions.push(FollowUpAction::CheckOwnership);

        Ok(MovementResult::AdvanceToProperty {
            start_position: start,
            normal_destination,
            leg,
            is_doubles,
            special_actions,
        })
    }

    fn bus_choice(&self, start: SquareId, regular_total: u16, is_doubles: bool) -> Result<MovementResult> {
        let walk = self.leg_to(start, self.step(start, regular_total))?;

        let stop = match self.board.next_bus_ticket(start) {
            Some(stop) => stop,
            None => {
                let first = self.board.bus_ticket_squares().first().copied().unwrap_or(start);
                warn!(from = %start, fallback = %first, "no bus ticket found ahead");
                first
            }
        };
        let ride = self.leg_to(start, stop)?;

        Ok(MovementResult::BusChoice {
            start_position: start,
            is_doubles,
            options: BusOptions {
                normal: WalkOption {
                    leg: walk,
                    movement: regular_total,
                },
                bus: ride,
            },
        })
    }

    fn draw_card_move(&self, start: SquareId, regular_total: u16, is_doubles: bool) -> Result<MovementResult> {
        let leg = self.leg_to(start, self.step(start, regular_total))?;
        let mut special_actions = start_bonus(&leg);
        special_actions.push(FollowUpAction::DrawCard);

        Ok(MovementResult::DrawCardMove {
            start_position: start,
            leg,
            movement: regular_total,
            is_doubles,
            special_actions,
        })
    }
}

fn start_bonus(leg: &Leg) -> Vec<FollowUpAction> {
    if leg.passed_start {
        vec![FollowUpAction::CollectStartBonus]
    } else {
        Vec::new()
    }
}
