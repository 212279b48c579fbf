//! Position planning for sequence reordering.
//!
//! A sequence's entries carry 1-based positions that must always form the
//! dense range `1..=N` (no gaps, no duplicates). The functions here validate
//! a requested insert/move against the current entry count and produce the
//! shift plan the repository layer executes inside a single transaction.
//! Keeping the arithmetic pure makes the edge cases unit-testable without a
//! database.

use crate::error::CoreError;

/// The one-past-end slot an insert may target (`count + 1`).
///
/// Note the asymmetry with moves: an insert may target `count + 1` because it
/// adds a slot, while a move is capped at `count` because the entry already
/// occupies one. This is intentional, not a bug.
pub fn max_insert_position(entry_count: i32) -> i32 {
    entry_count + 1
}

/// Resolve the position an insert should land at.
///
/// - `None` appends at `count + 1`.
/// - `Some(p)` must satisfy `1 <= p <= count + 1`, else `InvalidPosition`.
pub fn resolve_insert_position(
    requested: Option<i32>,
    entry_count: i32,
) -> Result<i32, CoreError> {
    let max = max_insert_position(entry_count);
    match requested {
        None => Ok(max),
        Some(p) if (1..=max).contains(&p) => Ok(p),
        Some(p) => Err(CoreError::InvalidPosition { position: p, max }),
    }
}

/// Inclusive range of existing positions that must shift up by one before an
/// insert at `position`, or `None` when appending (nothing to shift).
pub fn insert_shift_range(position: i32, entry_count: i32) -> Option<(i32, i32)> {
    if position <= entry_count {
        Some((position, entry_count))
    } else {
        None
    }
}

/// How the other entries of a sequence must shift to accommodate a move.
///
/// Both variants carry the inclusive position range of the rows to shift.
/// The two directions are mirror images; the moved entry itself is excluded
/// from the range and is written last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePlan {
    /// `new_position == old_position`; nothing to do.
    NoOp,
    /// Moving later: rows in `(old, new]` decrement by one.
    Later { shift_start: i32, shift_end: i32 },
    /// Moving earlier: rows in `[new, old)` increment by one.
    Earlier { shift_start: i32, shift_end: i32 },
}

/// Validate a move and compute the shift plan.
///
/// Valid target range is `1..=count` — one slot narrower than the insert
/// range, since the moved entry already occupies a slot.
pub fn plan_move(
    old_position: i32,
    new_position: i32,
    entry_count: i32,
) -> Result<MovePlan, CoreError> {
    if !(1..=entry_count).contains(&new_position) {
        return Err(CoreError::InvalidPosition {
            position: new_position,
            max: entry_count,
        });
    }

    Ok(if new_position == old_position {
        MovePlan::NoOp
    } else if new_position > old_position {
        MovePlan::Later {
            shift_start: old_position + 1,
            shift_end: new_position,
        }
    } else {
        MovePlan::Earlier {
            shift_start: new_position,
            shift_end: old_position - 1,
        }
    })
}

/// Check that a multiset of positions is exactly `{1, ..., N}`.
///
/// Used by tests to assert the dense-position invariant after each operation.
pub fn is_dense(positions: &[i32]) -> bool {
    let mut sorted: Vec<i32> = positions.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .enumerate()
        .all(|(i, &p)| p == i as i32 + 1)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    // -- resolve_insert_position --------------------------------------------

    #[test]
    fn insert_defaults_to_append() {
        assert_eq!(resolve_insert_position(None, 0).unwrap(), 1);
        assert_eq!(resolve_insert_position(None, 3).unwrap(), 4);
    }

    #[test]
    fn insert_accepts_one_past_end() {
        assert_eq!(resolve_insert_position(Some(4), 3).unwrap(), 4);
    }

    #[test]
    fn insert_accepts_first_slot() {
        assert_eq!(resolve_insert_position(Some(1), 3).unwrap(), 1);
    }

    #[test]
    fn insert_rejects_zero() {
        assert_matches!(
            resolve_insert_position(Some(0), 3),
            Err(CoreError::InvalidPosition { position: 0, max: 4 })
        );
    }

    #[test]
    fn insert_rejects_two_past_end() {
        assert_matches!(
            resolve_insert_position(Some(5), 3),
            Err(CoreError::InvalidPosition { position: 5, max: 4 })
        );
    }

    #[test]
    fn insert_rejects_negative() {
        assert!(resolve_insert_position(Some(-1), 3).is_err());
    }

    // -- insert_shift_range -------------------------------------------------

    #[test]
    fn append_shifts_nothing() {
        assert_eq!(insert_shift_range(4, 3), None);
        assert_eq!(insert_shift_range(1, 0), None);
    }

    #[test]
    fn insert_in_middle_shifts_tail() {
        assert_eq!(insert_shift_range(2, 3), Some((2, 3)));
    }

    #[test]
    fn insert_at_front_shifts_everything() {
        assert_eq!(insert_shift_range(1, 3), Some((1, 3)));
    }

    // -- plan_move ----------------------------------------------------------

    #[test]
    fn move_same_position_is_noop() {
        assert_eq!(plan_move(2, 2, 4).unwrap(), MovePlan::NoOp);
    }

    #[test]
    fn move_later_shifts_between() {
        // [A@1 B@2 C@3 D@4], move A to 3: B and C decrement.
        assert_eq!(
            plan_move(1, 3, 4).unwrap(),
            MovePlan::Later { shift_start: 2, shift_end: 3 }
        );
    }

    #[test]
    fn move_earlier_shifts_between() {
        // [A@1 B@2 C@3 D@4], move D to 2: B and C increment.
        assert_eq!(
            plan_move(4, 2, 4).unwrap(),
            MovePlan::Earlier { shift_start: 2, shift_end: 3 }
        );
    }

    #[test]
    fn move_to_adjacent_later_slot() {
        assert_eq!(
            plan_move(2, 3, 4).unwrap(),
            MovePlan::Later { shift_start: 3, shift_end: 3 }
        );
    }

    #[test]
    fn move_rejects_zero() {
        assert_matches!(
            plan_move(2, 0, 4),
            Err(CoreError::InvalidPosition { position: 0, max: 4 })
        );
    }

    /// Pins the insert/move range asymmetry: inserting into a 4-entry
    /// sequence may target position 5, but moving within it may not.
    #[test]
    fn move_rejects_one_past_end_while_insert_allows_it() {
        assert!(resolve_insert_position(Some(5), 4).is_ok());
        assert_matches!(
            plan_move(2, 5, 4),
            Err(CoreError::InvalidPosition { position: 5, max: 4 })
        );
    }

    // -- is_dense -----------------------------------------------------------

    #[test]
    fn dense_positions() {
        assert!(is_dense(&[]));
        assert!(is_dense(&[1]));
        assert!(is_dense(&[3, 1, 2]));
    }

    #[test]
    fn gap_is_not_dense() {
        assert!(!is_dense(&[1, 3]));
    }

    #[test]
    fn duplicate_is_not_dense() {
        assert!(!is_dense(&[1, 2, 2]));
    }

    #[test]
    fn zero_based_is_not_dense() {
        assert!(!is_dense(&[0, 1, 2]));
    }
}
