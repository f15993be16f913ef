#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that translates per-frame input snapshots into player commands.
//!
//! Keyboard steps map directly onto [`Command::StepPlayer`]. Touch input is
//! stateful: horizontal drag accumulates across frames, and every time the
//! accumulated distance crosses the swipe threshold the system emits a fixed
//! [`Command::SlidePlayer`] and re-anchors the accumulator, so a continuous
//! drag produces evenly spaced slides.

use crown_rush_core::{Command, Direction, GameStatus, InputFrame};

/// Drag distance that must accumulate before a slide command fires.
const SWIPE_THRESHOLD: f32 = 50.0;

/// Stateful input translator emitting world commands.
#[derive(Debug, Default)]
pub struct Controls {
    swipe_accumulator: f32,
}

impl Controls {
    /// Creates a new controls system with a neutral swipe anchor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one frame of input and emits the matching commands.
    pub fn handle(&mut self, frame: &InputFrame, status: GameStatus, out: &mut Vec<Command>) {
        if frame.start && status == GameStatus::Ready {
            out.push(Command::Start);
        }

        if frame.restart && status.is_terminal() {
            self.swipe_accumulator = 0.0;
            out.push(Command::Reset);
        }

        if status != GameStatus::Running {
            return;
        }

        if frame.step_left {
            out.push(Command::StepPlayer {
                direction: Direction::Left,
            });
        }
        if frame.step_right {
            out.push(Command::StepPlayer {
                direction: Direction::Right,
            });
        }

        self.swipe_accumulator += frame.swipe_delta;
        while self.swipe_accumulator.abs() > SWIPE_THRESHOLD {
            let direction = if self.swipe_accumulator < 0.0 {
                Direction::Left
            } else {
                Direction::Right
            };
            out.push(Command::SlidePlayer { direction });
            self.swipe_accumulator -= direction.sign() * SWIPE_THRESHOLD;
        }

        if frame.boost_tap {
            out.push(Command::BoostPlayer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> InputFrame {
        InputFrame::default()
    }

    #[test]
    fn start_fires_only_from_ready() {
        let mut controls = Controls::new();
        let mut out = Vec::new();
        let input = InputFrame {
            start: true,
            ..frame()
        };

        controls.handle(&input, GameStatus::Ready, &mut out);
        assert_eq!(out, vec![Command::Start]);

        out.clear();
        controls.handle(&input, GameStatus::Running, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn restart_fires_only_from_terminal_states() {
        let mut controls = Controls::new();
        let mut out = Vec::new();
        let input = InputFrame {
            restart: true,
            ..frame()
        };

        controls.handle(&input, GameStatus::Running, &mut out);
        assert!(out.is_empty());

        controls.handle(&input, GameStatus::Over, &mut out);
        controls.handle(&input, GameStatus::Won, &mut out);
        assert_eq!(out, vec![Command::Reset, Command::Reset]);
    }

    #[test]
    fn steps_translate_to_speed_scaled_moves() {
        let mut controls = Controls::new();
        let mut out = Vec::new();
        let input = InputFrame {
            step_left: true,
            step_right: true,
            ..frame()
        };

        controls.handle(&input, GameStatus::Running, &mut out);
        assert_eq!(
            out,
            vec![
                Command::StepPlayer {
                    direction: Direction::Left,
                },
                Command::StepPlayer {
                    direction: Direction::Right,
                },
            ]
        );
    }

    #[test]
    fn swipes_accumulate_across_frames_before_sliding() {
        let mut controls = Controls::new();
        let mut out = Vec::new();

        let drag = InputFrame {
            swipe_delta: -30.0,
            ..frame()
        };
        controls.handle(&drag, GameStatus::Running, &mut out);
        assert!(out.is_empty(), "below the swipe threshold");

        controls.handle(&drag, GameStatus::Running, &mut out);
        assert_eq!(
            out,
            vec![Command::SlidePlayer {
                direction: Direction::Left,
            }]
        );
    }

    #[test]
    fn long_drag_emits_multiple_slides() {
        let mut controls = Controls::new();
        let mut out = Vec::new();
        let drag = InputFrame {
            swipe_delta: 160.0,
            ..frame()
        };

        controls.handle(&drag, GameStatus::Running, &mut out);
        assert_eq!(
            out,
            vec![
                Command::SlidePlayer {
                    direction: Direction::Right,
                },
                Command::SlidePlayer {
                    direction: Direction::Right,
                },
                Command::SlidePlayer {
                    direction: Direction::Right,
                },
            ]
        );
    }

    #[test]
    fn opposing_drags_cancel_out() {
        let mut controls = Controls::new();
        let mut out = Vec::new();

        controls.handle(
            &InputFrame {
                swipe_delta: 40.0,
                ..frame()
            },
            GameStatus::Running,
            &mut out,
        );
        controls.handle(
            &InputFrame {
                swipe_delta: -40.0,
                ..frame()
            },
            GameStatus::Running,
            &mut out,
        );

        assert!(out.is_empty());
    }

    #[test]
    fn boost_tap_requests_a_boost() {
        let mut controls = Controls::new();
        let mut out = Vec::new();
        let input = InputFrame {
            boost_tap: true,
            ..frame()
        };

        controls.handle(&input, GameStatus::Running, &mut out);
        assert_eq!(out, vec![Command::BoostPlayer]);

        out.clear();
        controls.handle(&input, GameStatus::Over, &mut out);
        assert!(out.is_empty(), "boost is ignored outside running");
    }
}
