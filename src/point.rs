use ggez::glam::Vec2;

pub const CONSTRUCTION_RADIUS: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    pub position: Vec2,
    pub radius: f32,
}

impl ControlPoint {
    pub fn to(self: &Self, other: &Self) -> [Vec2; 2] {
        [self.position, other.position]
    }
}

impl From<Vec2> for ControlPoint {
    fn from(position: Vec2) -> Self {
        Self { position, radius: CONSTRUCTION_RADIUS }
    }
}

pub trait Curve {
    fn location(self: &Self, t: f32) -> Vec2;
}
