//! Frame module - one turn-group of rolls and its legality rules
//!
//! A frame validates each incoming roll against ten-pin legality rules,
//! reclassifies itself after every recorded roll and keeps one display
//! mark per roll. Bonus points from later frames land here too, but only
//! the engine ever writes them.

use crate::error::GameError;
use crate::types::{FrameKind, RollMark, FRAME_MAX_ROLLS, LAST_FRAME_MAX_ROLLS};

/// Rolls of a single frame.
///
/// Frames 1-9 hold up to two rolls; the last frame holds up to three and
/// follows its own legality rules for rolls two and three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    kind: FrameKind,
    rolls: Vec<u8>,
    marks: Vec<RollMark>,
    bonus_points: u32,
    max_pins: u8,
    is_last: bool,
}

impl Frame {
    pub fn new(max_pins: u8, is_last: bool) -> Self {
        Self {
            kind: FrameKind::Open,
            rolls: Vec::with_capacity(LAST_FRAME_MAX_ROLLS),
            marks: Vec::with_capacity(LAST_FRAME_MAX_ROLLS),
            bonus_points: 0,
            max_pins,
            is_last,
        }
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn marks(&self) -> &[RollMark] {
        &self.marks
    }

    pub fn bonus_points(&self) -> u32 {
        self.bonus_points
    }

    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// Frame display score: recorded pins plus carried-forward bonus.
    pub fn score(&self) -> u32 {
        self.rolls.iter().map(|&r| r as u32).sum::<u32>() + self.bonus_points
    }

    /// Credit pins rolled in a later frame to this strike/spare frame.
    ///
    /// Engine-only: the frame never mutates its own bonus.
    pub(crate) fn add_bonus(&mut self, pins: u8) {
        self.bonus_points += pins as u32;
    }

    /// Whether the frame still accepts a roll.
    pub fn is_roll_allowed(&self) -> bool {
        if self.is_last {
            match self.rolls.len() {
                0 | 1 => true,
                // A third roll requires a strike or spare in the first two.
                2 => matches!(self.kind, FrameKind::Strike | FrameKind::Spare),
                _ => false,
            }
        } else {
            self.kind != FrameKind::Strike && self.rolls.len() < FRAME_MAX_ROLLS
        }
    }

    /// Check a prospective roll without recording it.
    ///
    /// Returns the validated pin count. Range errors come first, then
    /// roll-count availability, then the two-roll pin-sum caps.
    pub fn validate(&self, pins: i32) -> Result<u8, GameError> {
        if pins < 0 {
            return Err(GameError::RollIsNegative(pins));
        }
        if pins > self.max_pins as i32 {
            return Err(GameError::RollExceedsMaxPins(pins));
        }
        if !self.is_roll_allowed() {
            return Err(GameError::NoMoreRollsAvailable);
        }

        let pins = pins as u8;
        let max = self.max_pins as u32;
        match self.rolls.as_slice() {
            [] => {}
            [first] => {
                // Roll two is a fresh rack after a last-frame strike,
                // otherwise the pair shares the standing pins.
                if !(self.is_last && *first == self.max_pins) {
                    let sum = *first as u32 + pins as u32;
                    if sum > max {
                        return Err(GameError::FrameExceedsMaxPins(sum));
                    }
                }
            }
            [first, second] => {
                // Last-frame roll three: a strike followed by a non-strike
                // leaves rolls two and three on one rack.
                if *first == self.max_pins && *second != self.max_pins {
                    let sum = *second as u32 + pins as u32;
                    if sum > max {
                        return Err(GameError::FrameExceedsMaxPins(sum));
                    }
                }
            }
            _ => return Err(GameError::NoMoreRollsAvailable),
        }

        Ok(pins)
    }

    /// Validate and record one roll, reclassifying the frame.
    pub fn roll(&mut self, pins: i32) -> Result<(), GameError> {
        let pins = self.validate(pins)?;
        let mark = self.classify(pins);
        self.rolls.push(pins);
        self.marks.push(mark);
        Ok(())
    }

    /// Update `kind` for the incoming roll and pick its display mark.
    ///
    /// Called after validation, before the roll is pushed.
    fn classify(&mut self, pins: u8) -> RollMark {
        let max = self.max_pins;
        match self.rolls.as_slice() {
            [] => {
                if pins == max {
                    self.kind = FrameKind::Strike;
                    RollMark::Strike
                } else {
                    pin_mark(pins)
                }
            }
            [first] => {
                let mark = if *first != max && *first + pins == max {
                    self.kind = FrameKind::Spare;
                    RollMark::Spare
                } else if pins == max {
                    // Fresh rack after a last-frame strike.
                    RollMark::Strike
                } else {
                    pin_mark(pins)
                };
                if *first == 0 && pins == 0 {
                    self.kind = FrameKind::Gutter;
                }
                mark
            }
            // Last-frame roll three, marked relative to roll two.
            [_, second, ..] => {
                if pins == max {
                    RollMark::Strike
                } else if *second + pins == max {
                    RollMark::Spare
                } else {
                    pin_mark(pins)
                }
            }
        }
    }
}

fn pin_mark(pins: u8) -> RollMark {
    if pins == 0 {
        RollMark::Miss
    } else {
        RollMark::Pins(pins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TENPIN_MAX_PINS;

    fn frame() -> Frame {
        Frame::new(TENPIN_MAX_PINS, false)
    }

    fn last_frame() -> Frame {
        Frame::new(TENPIN_MAX_PINS, true)
    }

    #[test]
    fn test_rejects_negative_roll() {
        let mut f = frame();
        assert_eq!(f.roll(-1), Err(GameError::RollIsNegative(-1)));
        assert!(f.rolls().is_empty());
    }

    #[test]
    fn test_rejects_roll_over_max_pins() {
        let mut f = frame();
        assert_eq!(f.roll(11), Err(GameError::RollExceedsMaxPins(11)));
        assert!(f.rolls().is_empty());
    }

    #[test]
    fn test_rejects_pair_over_max_pins() {
        let mut f = frame();
        f.roll(8).unwrap();
        assert_eq!(f.roll(8), Err(GameError::FrameExceedsMaxPins(16)));
        // Rejected roll leaves the frame untouched.
        assert_eq!(f.rolls(), &[8]);
        assert_eq!(f.kind(), FrameKind::Open);
    }

    #[test]
    fn test_rejects_third_roll() {
        let mut f = frame();
        f.roll(3).unwrap();
        f.roll(4).unwrap();
        assert_eq!(f.roll(2), Err(GameError::NoMoreRollsAvailable));
    }

    #[test]
    fn test_rejects_second_roll_after_strike() {
        let mut f = frame();
        f.roll(10).unwrap();
        assert!(!f.is_roll_allowed());
        assert_eq!(f.roll(0), Err(GameError::NoMoreRollsAvailable));
    }

    #[test]
    fn test_negative_beats_roll_count() {
        // Range errors apply regardless of frame state.
        let mut f = frame();
        f.roll(3).unwrap();
        f.roll(4).unwrap();
        assert_eq!(f.roll(-3), Err(GameError::RollIsNegative(-3)));
    }

    #[test]
    fn test_classifies_strike() {
        let mut f = frame();
        f.roll(10).unwrap();
        assert_eq!(f.kind(), FrameKind::Strike);
        assert_eq!(f.marks(), &[RollMark::Strike]);
    }

    #[test]
    fn test_classifies_spare() {
        let mut f = frame();
        f.roll(3).unwrap();
        f.roll(7).unwrap();
        assert_eq!(f.kind(), FrameKind::Spare);
        assert_eq!(f.marks(), &[RollMark::Pins(3), RollMark::Spare]);
    }

    #[test]
    fn test_classifies_zero_ten_as_spare() {
        let mut f = frame();
        f.roll(0).unwrap();
        f.roll(10).unwrap();
        assert_eq!(f.kind(), FrameKind::Spare);
        assert_eq!(f.marks(), &[RollMark::Miss, RollMark::Spare]);
    }

    #[test]
    fn test_classifies_gutter() {
        let mut f = frame();
        f.roll(0).unwrap();
        f.roll(0).unwrap();
        assert_eq!(f.kind(), FrameKind::Gutter);
        assert_eq!(f.marks(), &[RollMark::Miss, RollMark::Miss]);
    }

    #[test]
    fn test_open_frame_marks() {
        let mut f = frame();
        f.roll(5).unwrap();
        f.roll(0).unwrap();
        assert_eq!(f.kind(), FrameKind::Open);
        assert_eq!(f.marks(), &[RollMark::Pins(5), RollMark::Miss]);
    }

    #[test]
    fn test_score_is_rolls_plus_bonus() {
        let mut f = frame();
        f.roll(10).unwrap();
        assert_eq!(f.score(), 10);
        f.add_bonus(6);
        f.add_bonus(3);
        assert_eq!(f.score(), 19);
        assert_eq!(f.bonus_points(), 9);
    }

    #[test]
    fn test_last_frame_triple_strike() {
        let mut f = last_frame();
        f.roll(10).unwrap();
        assert!(f.is_roll_allowed());
        f.roll(10).unwrap();
        f.roll(10).unwrap();
        assert_eq!(f.kind(), FrameKind::Strike);
        assert_eq!(
            f.marks(),
            &[RollMark::Strike, RollMark::Strike, RollMark::Strike]
        );
        assert_eq!(f.score(), 30);
        assert!(!f.is_roll_allowed());
    }

    #[test]
    fn test_last_frame_strike_then_fresh_rack() {
        let mut f = last_frame();
        f.roll(10).unwrap();
        f.roll(4).unwrap();
        f.roll(5).unwrap();
        assert_eq!(f.kind(), FrameKind::Strike);
        assert_eq!(
            f.marks(),
            &[RollMark::Strike, RollMark::Pins(4), RollMark::Pins(5)]
        );
    }

    #[test]
    fn test_last_frame_caps_rolls_two_and_three() {
        // Strike, then a non-strike: rolls two and three share one rack.
        let mut f = last_frame();
        f.roll(10).unwrap();
        f.roll(4).unwrap();
        assert_eq!(f.roll(7), Err(GameError::FrameExceedsMaxPins(11)));
        assert_eq!(f.rolls(), &[10, 4]);
    }

    #[test]
    fn test_last_frame_spare_then_strike() {
        let mut f = last_frame();
        f.roll(4).unwrap();
        f.roll(6).unwrap();
        assert_eq!(f.kind(), FrameKind::Spare);
        f.roll(10).unwrap();
        assert_eq!(
            f.marks(),
            &[RollMark::Pins(4), RollMark::Spare, RollMark::Strike]
        );
        assert_eq!(f.score(), 20);
    }

    #[test]
    fn test_last_frame_open_gets_no_third_roll() {
        let mut f = last_frame();
        f.roll(3).unwrap();
        f.roll(4).unwrap();
        assert!(!f.is_roll_allowed());
        assert_eq!(f.roll(2), Err(GameError::NoMoreRollsAvailable));
    }

    #[test]
    fn test_last_frame_third_roll_spare_mark() {
        // The third roll is marked relative to the second.
        let mut f = last_frame();
        f.roll(10).unwrap();
        f.roll(3).unwrap();
        f.roll(7).unwrap();
        assert_eq!(
            f.marks(),
            &[RollMark::Strike, RollMark::Pins(3), RollMark::Spare]
        );
    }

    #[test]
    fn test_last_frame_strike_strike_miss() {
        let mut f = last_frame();
        f.roll(10).unwrap();
        f.roll(10).unwrap();
        f.roll(0).unwrap();
        assert_eq!(f.score(), 20);
        assert_eq!(f.rolls(), &[10, 10, 0]);
    }
}
