use anyhow::{bail, Result};
use clap::Parser;
use crate::animation::MAX_STEPS;

// Slack allowed between 1 / increment and the nearest whole step count.
const STEP_TOLERANCE: f64 = 1e-2;

#[derive(Parser, Debug, Clone)]
#[command(name = "bezier")]
#[command(about = "Animated de Casteljau construction of random Bézier curves")]
pub struct Settings {
    /// Initial window width in pixels
    #[arg(long, default_value_t = 1920.0)]
    pub width: f32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 1080.0)]
    pub height: f32,

    /// Simulation steps per second
    #[arg(long, default_value_t = 30)]
    pub tick_rate: u32,

    /// Progress added to t at each step
    #[arg(long, default_value_t = 0.005)]
    pub increment: f32,

    /// Lowest random order
    #[arg(long, default_value_t = 2)]
    pub min_order: usize,

    /// Highest random order
    #[arg(long, default_value_t = 8)]
    pub max_order: usize,

    /// Keep the finished curve instead of generating a new one
    #[arg(long)]
    pub no_loop: bool,

    /// Seed for reproducible curves
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            tick_rate: 30,
            increment: 0.005,
            min_order: 2,
            max_order: 8,
            no_loop: false,
            seed: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        let finite = self.width.is_finite() && self.height.is_finite();
        if !(finite && self.width > 0.0 && self.height > 0.0) {
            bail!("window size must be positive and finite, got {}x{}", self.width, self.height);
        }
        if self.tick_rate == 0 {
            bail!("tick rate must be at least 1");
        }
        if !(self.increment > 0.0 && self.increment <= 1.0) {
            bail!("increment must be in (0, 1], got {}", self.increment);
        }
        let steps = 1.0 / self.increment as f64;
        if (steps - steps.round()).abs() > STEP_TOLERANCE {
            bail!("increment {} does not divide 1 into whole steps", self.increment);
        }
        if steps.round() > MAX_STEPS as f64 {
            bail!("increment {} needs more than {} steps", self.increment, MAX_STEPS);
        }
        if self.min_order == 0 {
            bail!("order must be at least 1");
        }
        if self.min_order > self.max_order {
            bail!("min order {} is above max order {}", self.min_order, self.max_order);
        }
        Ok(())
    }
}
