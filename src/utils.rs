use ggez::glam::Vec2;
use ggez::graphics::Color;
use rand::Rng;

// Written as a weighted sum so that t = 0 and t = 1 land exactly on the end points.
pub fn lerp(start: Vec2, end: Vec2, t: f32) -> Vec2 {
    start * (1.0 - t) + end * t
}

pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::from_rgb(rng.gen(), rng.gen(), rng.gen())
}

pub fn random_position<R: Rng>(rng: &mut R, bounds: Vec2) -> Vec2 {
    Vec2::new(
        rng.gen_range(0.0..=bounds.x.max(0.0)),
        rng.gen_range(0.0..=bounds.y.max(0.0)),
    )
}
