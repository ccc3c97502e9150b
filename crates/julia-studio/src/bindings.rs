//! Keyboard and wheel bindings.
//!
//! | input                     | action                              |
//! |---------------------------|-------------------------------------|
//! | Space                     | pause / resume                      |
//! | Up / Down                 | speed ± 0.001                       |
//! | `]` / `[`, PgUp / PgDn    | max iterations ± 50                 |
//! | `+` / `-`                 | slider zoom ± 0.1 (clamped 0.1–10)  |
//! | wheel                     | zoom ×1.1 / ×0.9 at the pointer     |
//! | R                         | reset zoom and offset               |
//! | Escape                    | quit                                |

use julia_engine::coords::{Vec2, Viewport};
use julia_engine::input::{InputEvent, InputFrame, Key, KeyState};

use crate::control::ControlState;
use crate::view::ViewTransform;

/// Result of applying one frame of input.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct BindingOutcome {
    /// Some control value changed.
    pub changed: bool,
    pub quit: bool,
}

/// Applies the frame's key presses and wheel input to `control`.
///
/// `viewport` is the logical window size, the basis of pointer positions.
/// Key-repeat only drives the stepping bindings; toggles fire once per press.
pub fn apply_input(control: &mut ControlState, frame: &InputFrame, viewport: Viewport) -> BindingOutcome {
    let mut outcome = BindingOutcome::default();

    for ev in &frame.events {
        let InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers,
            repeat,
        } = ev
        else {
            continue;
        };

        // Leave chorded shortcuts (Ctrl+..., Cmd+...) to the platform.
        if modifiers.ctrl || modifiers.alt || modifiers.meta {
            continue;
        }

        let changed = match key {
            Key::Escape => {
                outcome.quit = true;
                false
            }
            Key::Space if !repeat => {
                control.toggle_paused();
                log::info!("animation {}", if control.paused() { "paused" } else { "resumed" });
                true
            }
            Key::R if !repeat => control.reset_view(),

            Key::ArrowUp => control.nudge_speed(1),
            Key::ArrowDown => control.nudge_speed(-1),

            Key::BracketRight | Key::PageUp => control.nudge_max_iterations(1),
            Key::BracketLeft | Key::PageDown => control.nudge_max_iterations(-1),

            Key::Equal | Key::NumpadAdd => control.nudge_zoom(1),
            Key::Minus | Key::NumpadSubtract => control.nudge_zoom(-1),

            _ => false,
        };
        outcome.changed |= changed;
    }

    for wheel in &frame.wheel {
        let Some(factor) = ViewTransform::wheel_factor(wheel.delta) else {
            continue;
        };
        let (cx, cy) = viewport.center();
        let anchor = wheel.pointer.map(Vec2::from).unwrap_or(Vec2::new(cx, cy));
        outcome.changed |= control.view.zoom_at(anchor, viewport, factor);
    }

    if outcome.changed {
        log::debug!(
            "controls: speed {:.3} iterations {} zoom {:.4} offset ({:.5}, {:.5})",
            control.speed(),
            control.max_iterations(),
            control.zoom(),
            control.offset().x,
            control.offset().y,
        );
    }

    outcome
}

#[cfg(test)]
mod tests {
    use julia_engine::input::{InputState, Modifiers, MouseWheelDelta, PointerMoveEvent};

    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn key(key: Key, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat,
        }
    }

    fn frame_of(events: impl IntoIterator<Item = InputEvent>) -> InputFrame {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for ev in events {
            state.apply_event(&mut frame, ev);
        }
        frame
    }

    #[test]
    fn space_toggles_pause_once_per_press() {
        let mut control = ControlState::default();
        let frame = frame_of([key(Key::Space, false), key(Key::Space, true), key(Key::Space, true)]);

        let outcome = apply_input(&mut control, &frame, VP);
        assert!(outcome.changed);
        assert!(control.paused());
    }

    #[test]
    fn stepping_keys_follow_repeat() {
        let mut control = ControlState::default();
        let frame = frame_of([
            key(Key::BracketRight, false),
            key(Key::BracketRight, true),
            key(Key::ArrowUp, false),
        ]);

        apply_input(&mut control, &frame, VP);
        assert_eq!(control.max_iterations(), 600);
        assert!((control.speed() - 0.011).abs() < 1e-12);
    }

    #[test]
    fn escape_requests_quit() {
        let mut control = ControlState::default();
        let outcome = apply_input(&mut control, &frame_of([key(Key::Escape, false)]), VP);
        assert!(outcome.quit);
        assert!(!outcome.changed);
    }

    #[test]
    fn ctrl_chords_are_ignored() {
        let mut control = ControlState::default();
        let ev = InputEvent::Key {
            key: Key::R,
            state: KeyState::Pressed,
            modifiers: Modifiers { ctrl: true, ..Modifiers::default() },
            repeat: false,
        };
        control.set_zoom(2.0);
        apply_input(&mut control, &frame_of([ev]), VP);
        assert_eq!(control.zoom(), 2.0);
    }

    #[test]
    fn wheel_zooms_at_the_pointer() {
        let mut control = ControlState::default();
        let pointer = Vec2::new(650.0, 120.0);
        let before = control.view.screen_to_plane(pointer, VP);

        let frame = frame_of([
            InputEvent::PointerMoved(PointerMoveEvent { x: pointer.x, y: pointer.y }),
            InputEvent::MouseWheel {
                delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 },
                modifiers: Modifiers::default(),
            },
        ]);
        let outcome = apply_input(&mut control, &frame, VP);

        assert!(outcome.changed);
        assert!((control.zoom() - 1.1).abs() < 1e-6);
        let after = control.view.screen_to_plane(pointer, VP);
        assert!((before.x - after.x).abs() < 1e-5 && (before.y - after.y).abs() < 1e-5);
    }

    #[test]
    fn wheel_without_pointer_zooms_at_centre() {
        let mut control = ControlState::default();
        let frame = frame_of([InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y: -1.0 },
            modifiers: Modifiers::default(),
        }]);
        apply_input(&mut control, &frame, VP);

        assert!((control.zoom() - 0.9).abs() < 1e-6);
        assert_eq!(control.offset(), Vec2::zero());
    }

    #[test]
    fn reset_key_restores_view() {
        let mut control = ControlState::default();
        control.view.zoom_at(Vec2::new(10.0, 10.0), VP, 5.0);

        let outcome = apply_input(&mut control, &frame_of([key(Key::R, false)]), VP);
        assert!(outcome.changed);
        assert_eq!(control.zoom(), 1.0);
        assert_eq!(control.offset(), Vec2::zero());
    }
}
