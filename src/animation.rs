use std::ops::RangeInclusive;
use ggez::glam::Vec2;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::bezier_curve::BezierCurve;
use crate::plot_trace::PlotTrace;
use crate::settings::Settings;

/// Upper bound on the number of steps of one curve.
pub const MAX_STEPS: usize = 10_000;

/// Number of steps needed to go from `t = 0` to `t = 1` with the given increment.
pub fn step_count(increment: f32) -> usize {
    ((1.0 / increment as f64).round() as usize).clamp(1, MAX_STEPS)
}

#[derive(Clone, Debug)]
pub struct AnimationConfig {
    pub increment: f32,
    pub orders: RangeInclusive<usize>,
    pub loop_forever: bool,
    pub seed: Option<u64>,
}

impl From<&Settings> for AnimationConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            increment: settings.increment,
            orders: settings.min_order..=settings.max_order,
            loop_forever: !settings.no_loop,
            seed: settings.seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Restart {
    /// Rewind the current curve.
    SameCurve,
    /// Draw a new order, new control points and new colours.
    NewCurve,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Paused,
    Restarting(Restart),
}

/// Everything the frame loop mutates: the curve pyramid, the trace and the progress along `t`.
///
/// Progress is kept as a step counter so the last step evaluates `t = 1` exactly.
pub struct Animation {
    config: AnimationConfig,
    rng: StdRng,
    bounds: Vec2,
    curve: BezierCurve,
    trace: PlotTrace,
    step: usize,
    steps: usize,
    state: AnimationState,
}

impl Animation {
    pub fn new(config: AnimationConfig, bounds: Vec2) -> Self {
        let mut rng = Self::rng(config.seed);
        let curve = Self::random_curve(&mut rng, &config.orders, bounds);
        Self::with_curve(config, rng, bounds, curve)
    }

    /// Starts from the given curve instead of a random one; later regenerations are still random.
    pub fn from_curve(config: AnimationConfig, bounds: Vec2, curve: BezierCurve) -> Self {
        let rng = Self::rng(config.seed);
        Self::with_curve(config, rng, bounds, curve)
    }

    fn rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn with_curve(config: AnimationConfig, rng: StdRng, bounds: Vec2, curve: BezierCurve) -> Self {
        let steps = step_count(config.increment);
        Self {
            config,
            rng,
            bounds,
            curve,
            // One entry per evaluated t, both ends included.
            trace: PlotTrace::with_capacity(steps + 1),
            step: 0,
            steps,
            state: AnimationState::Running,
        }
    }

    fn random_curve(rng: &mut StdRng, orders: &RangeInclusive<usize>, bounds: Vec2) -> BezierCurve {
        let order = rng.gen_range(orders.clone());
        let curve = BezierCurve::random(rng, order, bounds);
        debug!("New curve: {}", curve);
        curve
    }

    pub fn curve(&self) -> &BezierCurve {
        &self.curve
    }

    pub fn trace(&self) -> &PlotTrace {
        &self.trace
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Current `t`, clamped to `[0, 1]` once the curve is complete.
    pub fn progress(&self) -> f32 {
        self.step.min(self.steps) as f32 / self.steps as f32
    }

    pub fn is_complete(&self) -> bool {
        self.step > self.steps
    }

    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            AnimationState::Running => AnimationState::Paused,
            AnimationState::Paused => AnimationState::Running,
            restarting => restarting,
        };
        debug!("Animation {:?}", self.state);
    }

    /// Rewinds the current curve right away, so the next frame already shows an empty trace.
    pub fn restart(&mut self) {
        self.apply_restart(Restart::SameCurve);
    }

    /// Advances the animation by one step.
    pub fn update(&mut self) {
        if let AnimationState::Restarting(restart) = self.state {
            self.apply_restart(restart);
        }

        if self.state != AnimationState::Running || self.is_complete() {
            return;
        }

        self.curve.calc_new_points(self.progress());
        if let Some(point) = self.curve.plotted_point() {
            self.trace.record(point);
        }
        self.step += 1;

        if self.is_complete() && self.config.loop_forever {
            self.state = AnimationState::Restarting(Restart::NewCurve);
        }
    }

    fn apply_restart(&mut self, restart: Restart) {
        if restart == Restart::NewCurve {
            self.curve = Self::random_curve(&mut self.rng, &self.config.orders, self.bounds);
        }
        self.step = 0;
        self.trace.clear();
        self.state = AnimationState::Running;
        debug!("Restarted with {:?}", restart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(loop_forever: bool) -> AnimationConfig {
        AnimationConfig { increment: 0.25, orders: 2..=8, loop_forever, seed: Some(1) }
    }

    fn square() -> BezierCurve {
        BezierCurve::new(
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 100.0),
                Vec2::new(100.0, 100.0),
                Vec2::new(100.0, 0.0),
            ],
            vec![],
        )
    }

    #[test]
    fn steps_follow_the_increment() {
        let animation = Animation::from_curve(config(false), Vec2::new(100.0, 100.0), square());
        assert_eq!(animation.steps(), 4);
        assert_eq!(animation.trace().capacity(), 5);
        assert_eq!(animation.progress(), 0.0);
    }

    #[test]
    fn default_increment_takes_two_hundred_steps() {
        let config = AnimationConfig { increment: 0.005, ..config(false) };
        let animation = Animation::new(config, Vec2::new(100.0, 100.0));
        assert_eq!(animation.steps(), 200);
    }

    #[test]
    fn first_step_plots_the_first_control_point() {
        let mut animation = Animation::from_curve(config(false), Vec2::new(100.0, 100.0), square());
        animation.update();
        assert_eq!(animation.trace().entries()[0], Some(Vec2::new(0.0, 0.0)));
        assert_relative_eq!(animation.progress(), 0.25);
    }

    #[test]
    fn runs_to_exactly_one_then_holds() {
        let mut animation = Animation::from_curve(config(false), Vec2::new(100.0, 100.0), square());
        for _ in 0..10 {
            animation.update();
        }
        assert!(animation.is_complete());
        assert_eq!(animation.progress(), 1.0);
        assert_eq!(animation.trace().len(), 5);
        assert_eq!(animation.curve().plotted_point(), Some(Vec2::new(100.0, 0.0)));
        assert_eq!(animation.state(), AnimationState::Running);
    }

    #[test]
    fn pause_freezes_progress() {
        let mut animation = Animation::from_curve(config(false), Vec2::new(100.0, 100.0), square());
        animation.update();
        animation.toggle_pause();
        assert_eq!(animation.state(), AnimationState::Paused);
        animation.update();
        animation.update();
        assert_relative_eq!(animation.progress(), 0.25);
        assert_eq!(animation.trace().len(), 1);
        animation.toggle_pause();
        animation.update();
        assert_relative_eq!(animation.progress(), 0.5);
    }

    #[test]
    fn restart_keeps_control_points() {
        let mut animation = Animation::from_curve(config(false), Vec2::new(100.0, 100.0), square());
        let control_points = animation.curve().control_points().to_vec();
        animation.update();
        animation.update();
        animation.restart();
        assert_eq!(animation.state(), AnimationState::Running);
        assert_eq!(animation.curve().control_points(), control_points.as_slice());
        animation.update();
        assert_eq!(animation.trace().entries()[0], Some(Vec2::new(0.0, 0.0)));
        assert_eq!(animation.trace().len(), 1);
    }

    #[test]
    fn restart_resets_progress_and_trace_immediately() {
        let mut animation = Animation::from_curve(config(false), Vec2::new(100.0, 100.0), square());
        animation.update();
        animation.update();
        assert_eq!(animation.trace().len(), 2);
        animation.restart();
        assert_eq!(animation.progress(), 0.0);
        assert!(animation.trace().is_empty());
        assert!(animation.trace().entries().iter().all(Option::is_none));
    }

    #[test]
    fn restart_resumes_a_paused_animation() {
        let mut animation = Animation::from_curve(config(false), Vec2::new(100.0, 100.0), square());
        animation.update();
        animation.toggle_pause();
        animation.restart();
        assert_eq!(animation.state(), AnimationState::Running);
        animation.update();
        assert_eq!(animation.trace().len(), 1);
    }

    #[test]
    fn restart_of_a_finished_loop_keeps_the_curve() {
        let mut animation = Animation::from_curve(config(true), Vec2::new(100.0, 100.0), square());
        let control_points = animation.curve().control_points().to_vec();
        for _ in 0..5 {
            animation.update();
        }
        assert_eq!(animation.state(), AnimationState::Restarting(Restart::NewCurve));
        animation.restart();
        assert_eq!(animation.state(), AnimationState::Running);
        assert_eq!(animation.curve().control_points(), control_points.as_slice());
    }

    #[test]
    fn step_count_is_bounded() {
        assert_eq!(step_count(0.005), 200);
        assert_eq!(step_count(0.25), 4);
        assert_eq!(step_count(1.0), 1);
        assert_eq!(step_count(1e-45), MAX_STEPS);
        let config = AnimationConfig { increment: 1e-45, ..config(false) };
        let animation = Animation::from_curve(config, Vec2::new(100.0, 100.0), square());
        assert_eq!(animation.steps(), MAX_STEPS);
        assert_eq!(animation.trace().capacity(), MAX_STEPS + 1);
    }

    #[test]
    fn loop_forever_generates_a_new_curve() {
        let mut animation = Animation::from_curve(config(true), Vec2::new(640.0, 480.0), square());
        for _ in 0..5 {
            animation.update();
        }
        assert_eq!(animation.state(), AnimationState::Restarting(Restart::NewCurve));
        animation.update();
        assert_eq!(animation.state(), AnimationState::Running);
        assert!((2..=8).contains(&animation.curve().order()));
        for p in animation.curve().control_points() {
            assert!(p.position.x >= 0.0 && p.position.x <= 640.0);
            assert!(p.position.y >= 0.0 && p.position.y <= 480.0);
        }
        assert_eq!(animation.trace().len(), 1);
    }

    #[test]
    fn new_curves_use_the_latest_bounds() {
        let mut animation = Animation::from_curve(config(true), Vec2::new(640.0, 480.0), square());
        animation.set_bounds(Vec2::new(10.0, 20.0));
        for _ in 0..6 {
            animation.update();
        }
        for p in animation.curve().control_points() {
            assert!(p.position.x <= 10.0 && p.position.y <= 20.0);
        }
    }

    #[test]
    fn same_seed_same_curve() {
        let a = Animation::new(config(true), Vec2::new(800.0, 600.0));
        let b = Animation::new(config(true), Vec2::new(800.0, 600.0));
        assert_eq!(a.curve().control_points(), b.curve().control_points());
    }
}
