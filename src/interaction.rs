//! Translates pointer and keyboard events into edits of the control points,
//! the sample step and the sampling mode.
//!
//! Pointer state machine:
//! ```text
//! Idle --press on empty space--> Idle (point appended)
//! Idle --press on a point------> Dragging(index)
//! Dragging(index) --motion-----> Dragging(index) (point moved)
//! Dragging(index) --release----> Idle
//! ```
//! Scrolling changes the sample step regardless of the pointer state.

use num_traits::Float;

use super::*;
use crate::bezier::scalar;

/// Initial distance between two curve samples in parameter space.
pub const SAMPLE_STEP: NativeFloat = 0.05;
/// Change of the sample step per scroll notch.
pub const SAMPLE_STEP_DELTA: NativeFloat = 0.001;
pub const SAMPLE_STEP_MIN: NativeFloat = 0.001;
pub const SAMPLE_STEP_MAX: NativeFloat = 0.999;

/// Keys the controller reacts to, everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Flip between marker and line segment rendering
    F1,
    /// Switch to markers on the quadratic of the first three points
    F2,
    /// Remove all control points
    C,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Middle,
}

/// Input events in canvas coordinates, as drained from the window each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent<P> {
    Quit,
    KeyDown(Key),
    ButtonDown(Button, P),
    ButtonUp(Button),
    PointerMove(P),
    /// Vertical wheel movement, positive away from the user
    Scroll(NativeFloat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parameter distance between curve samples, kept within [min, max].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStep<F> {
    value: F,
    delta: F,
    min: F,
    max: F,
}

impl<F: Float> SampleStep<F> {
    /// A step starting at `value` (clamped) that moves by `delta` per scroll notch
    pub fn new(value: F, delta: F) -> Self {
        let min = scalar::<F>(SAMPLE_STEP_MIN);
        let max = scalar::<F>(SAMPLE_STEP_MAX);
        SampleStep {
            value: value.max(min).min(max),
            delta,
            min,
            max,
        }
    }

    pub fn value(&self) -> F {
        self.value
    }

    pub fn increase(&mut self) {
        self.value = (self.value + self.delta).min(self.max);
    }

    pub fn decrease(&mut self) {
        self.value = (self.value - self.delta).max(self.min);
    }

    /// Only the sign of the wheel movement matters
    pub fn scroll(&mut self, delta_y: NativeFloat) {
        if delta_y > 0.0 {
            self.increase();
        } else if delta_y < 0.0 {
            self.decrease();
        }
    }
}

impl<F: Float> Default for SampleStep<F> {
    fn default() -> Self {
        SampleStep::new(scalar(SAMPLE_STEP), scalar(SAMPLE_STEP_DELTA))
    }
}

/// Interactive editing state: the control points, the sample step, the
/// sampling mode and the last known pointer position (used as probe).
#[derive(Debug, Clone)]
pub struct Controller<P, const N: usize = DEFAULT_CAPACITY>
where
    P: Point,
    [P; N]: tinyvec::Array<Item = P>,
{
    points: ControlPointSet<P, N>,
    step: SampleStep<P::Scalar>,
    mode: SampleMode,
    pointer: Option<P>,
}

impl<P, const N: usize> Controller<P, N>
where
    P: Point,
    [P; N]: tinyvec::Array<Item = P>,
{
    pub fn new(points: ControlPointSet<P, N>, step: SampleStep<P::Scalar>) -> Self {
        Controller {
            points,
            step,
            mode: SampleMode::default(),
            pointer: None,
        }
    }

    pub fn points(&self) -> &ControlPointSet<P, N> {
        &self.points
    }

    pub fn step(&self) -> P::Scalar {
        self.step.value()
    }

    pub fn mode(&self) -> SampleMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SampleMode) {
        self.mode = mode;
    }

    /// Last pointer position seen by the controller
    pub fn pointer(&self) -> Option<P> {
        self.pointer
    }

    /// Apply all `events` in order; stops at the first event that requests to quit.
    pub fn drain<I>(&mut self, events: I) -> Flow
    where
        I: IntoIterator<Item = InputEvent<P>>,
    {
        for event in events {
            if self.handle(event) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    pub fn handle(&mut self, event: InputEvent<P>) -> Flow {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => return Flow::Quit,
            InputEvent::KeyDown(Key::F1) => {
                self.mode = self.mode.toggled();
                log::debug!("sample mode {:?}", self.mode);
            }
            InputEvent::KeyDown(Key::F2) => {
                self.mode = SampleMode::QuadraticMarkers;
                log::debug!("sample mode {:?}", self.mode);
            }
            InputEvent::KeyDown(Key::C) => self.points.clear(),
            InputEvent::KeyDown(Key::Other) => {}
            InputEvent::ButtonDown(Button::Left, position) => match self.points.hit_test(position) {
                Some(index) => self.points.begin_drag(index),
                None => {
                    self.points.end_drag();
                    let _ = self.points.add(position);
                }
            },
            InputEvent::ButtonDown(Button::Right, position) => {
                if let Some(index) = self.points.hit_test(position) {
                    let _ = self.points.remove(index);
                }
            }
            InputEvent::ButtonDown(Button::Middle, _) => {}
            InputEvent::ButtonUp(Button::Left) => self.points.end_drag(),
            InputEvent::ButtonUp(_) => {}
            InputEvent::PointerMove(position) => {
                self.pointer = Some(position);
                self.points.update_drag(position);
            }
            InputEvent::Scroll(delta_y) => self.step.scroll(delta_y),
        }
        Flow::Continue
    }
}

impl<P, const N: usize> Default for Controller<P, N>
where
    P: Point,
    [P; N]: tinyvec::Array<Item = P>,
{
    fn default() -> Self {
        Controller::new(ControlPointSet::new(), SampleStep::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn press(x: f32, y: f32) -> InputEvent<Vec2> {
        InputEvent::ButtonDown(Button::Left, Vec2::new(x, y))
    }

    fn moved(x: f32, y: f32) -> InputEvent<Vec2> {
        InputEvent::PointerMove(Vec2::new(x, y))
    }

    const RELEASE: InputEvent<Vec2> = InputEvent::ButtonUp(Button::Left);

    #[test]
    fn press_on_empty_space_appends() {
        let mut ctl: Controller<Vec2> = Controller::default();
        ctl.drain([press(10.0, 10.0), RELEASE, press(200.0, 200.0), RELEASE]);
        assert_eq!(
            ctl.points().points(),
            &[Vec2::new(10.0, 10.0), Vec2::new(200.0, 200.0)]
        );
        assert!(!ctl.points().is_dragging());
    }

    #[test]
    fn press_on_point_drags_it() {
        let mut ctl: Controller<Vec2> = Controller::default();
        ctl.drain([press(10.0, 10.0), RELEASE, press(200.0, 200.0), RELEASE]);

        ctl.handle(press(12.0, 8.0));
        assert_eq!(ctl.points().selected(), Some(0));
        ctl.drain([moved(50.0, 60.0), moved(55.0, 65.0)]);
        assert_eq!(ctl.points().get(0), Some(Vec2::new(55.0, 65.0)));
        assert_eq!(ctl.points().len(), 2);

        ctl.handle(RELEASE);
        ctl.handle(moved(300.0, 300.0));
        assert_eq!(ctl.points().get(0), Some(Vec2::new(55.0, 65.0)));
        assert_eq!(ctl.pointer(), Some(Vec2::new(300.0, 300.0)));
    }

    #[test]
    fn motion_while_idle_only_moves_probe() {
        let mut ctl: Controller<Vec2> = Controller::default();
        ctl.drain([press(10.0, 10.0), RELEASE, moved(40.0, 40.0)]);
        assert_eq!(ctl.points().points(), &[Vec2::new(10.0, 10.0)]);
        assert_eq!(ctl.pointer(), Some(Vec2::new(40.0, 40.0)));
    }

    #[test]
    fn press_at_capacity_is_ignored() {
        let mut ctl: Controller<Vec2, 2> = Controller::default();
        ctl.drain([press(0.0, 0.0), RELEASE, press(100.0, 0.0), RELEASE, press(200.0, 0.0)]);
        assert_eq!(ctl.points().len(), 2);
        assert!(!ctl.points().is_dragging());
    }

    #[test]
    fn right_click_removes_point() {
        let mut ctl: Controller<Vec2> = Controller::default();
        ctl.drain([press(0.0, 0.0), RELEASE, press(100.0, 0.0), RELEASE]);
        ctl.handle(InputEvent::ButtonDown(Button::Right, Vec2::new(1.0, 1.0)));
        assert_eq!(ctl.points().points(), &[Vec2::new(100.0, 0.0)]);
        ctl.handle(InputEvent::ButtonDown(Button::Right, Vec2::new(400.0, 400.0)));
        assert_eq!(ctl.points().len(), 1);
    }

    #[test]
    fn scroll_adjusts_step_within_range() {
        let mut ctl: Controller<Vec2> = Controller::default();
        assert_abs_diff_eq!(ctl.step(), 0.05);
        ctl.handle(InputEvent::Scroll(1.0));
        assert_abs_diff_eq!(ctl.step(), 0.051, epsilon = 1e-6);
        ctl.drain([InputEvent::Scroll(-3.0), InputEvent::Scroll(-1.0)]);
        assert_abs_diff_eq!(ctl.step(), 0.049, epsilon = 1e-6);
        ctl.handle(InputEvent::Scroll(0.0));
        assert_abs_diff_eq!(ctl.step(), 0.049, epsilon = 1e-6);

        for _ in 0..100 {
            ctl.handle(InputEvent::Scroll(-1.0));
        }
        assert_abs_diff_eq!(ctl.step(), SAMPLE_STEP_MIN);
    }

    #[test]
    fn scroll_while_dragging() {
        let mut ctl: Controller<Vec2> = Controller::default();
        ctl.drain([press(0.0, 0.0), RELEASE, press(0.0, 0.0)]);
        ctl.handle(InputEvent::Scroll(1.0));
        assert!(ctl.points().is_dragging());
        assert_abs_diff_eq!(ctl.step(), 0.051, epsilon = 1e-6);
    }

    #[test]
    fn step_clamps_at_maximum() {
        let mut step = SampleStep::new(0.998f32, 0.001);
        step.increase();
        step.increase();
        assert_abs_diff_eq!(step.value(), SAMPLE_STEP_MAX);
        assert_abs_diff_eq!(SampleStep::new(5.0f32, 0.1).value(), SAMPLE_STEP_MAX);
        assert_abs_diff_eq!(SampleStep::new(0.0f32, 0.1).value(), SAMPLE_STEP_MIN);
    }

    #[test]
    fn keys_switch_mode() {
        let mut ctl: Controller<Vec2> = Controller::default();
        assert_eq!(ctl.mode(), SampleMode::Markers);
        ctl.handle(InputEvent::KeyDown(Key::F1));
        assert_eq!(ctl.mode(), SampleMode::Segments);
        ctl.handle(InputEvent::KeyDown(Key::F1));
        assert_eq!(ctl.mode(), SampleMode::Markers);
        ctl.handle(InputEvent::KeyDown(Key::F2));
        assert_eq!(ctl.mode(), SampleMode::QuadraticMarkers);
        ctl.handle(InputEvent::KeyDown(Key::Other));
        assert_eq!(ctl.mode(), SampleMode::QuadraticMarkers);
    }

    #[test]
    fn clear_key_empties_canvas() {
        let mut ctl: Controller<Vec2> = Controller::default();
        ctl.drain([press(0.0, 0.0), RELEASE, InputEvent::KeyDown(Key::C)]);
        assert!(ctl.points().is_empty());
    }

    #[test]
    fn quit_stops_draining() {
        let mut ctl: Controller<Vec2> = Controller::default();
        let flow = ctl.drain([press(0.0, 0.0), InputEvent::Quit, press(100.0, 100.0)]);
        assert_eq!(flow, Flow::Quit);
        assert_eq!(ctl.points().len(), 1);
        assert_eq!(ctl.handle(InputEvent::KeyDown(Key::Escape)), Flow::Quit);
    }
}
