use std::fmt::{Display, Formatter};
use ggez::glam::Vec2;
use ggez::graphics::Color;
use rand::Rng;
use crate::point::{ControlPoint, Curve};
use crate::utils;

// https://en.wikipedia.org/wiki/B%C3%A9zier_curve#Constructing_B%C3%A9zier_curves

const FIRST_LAYER_COLOR: Color = Color::new(200. / 255., 200. / 255., 200. / 255., 1.0);

/// The de Casteljau pyramid of a Bézier curve.
///
/// Layer 0 holds the control points, layer `k` holds `order + 1 - k` points and the last layer
/// holds the single point of the curve for the last interpolated `t`.
pub struct BezierCurve {
    layers: Vec<Vec<ControlPoint>>,
    colors: Vec<Color>,
}

impl BezierCurve {
    /// Seeds every layer with a copy of the leading control points, as the lower layers are
    /// overwritten by the first interpolation anyway.
    pub fn new(control_points: &[Vec2], colors: Vec<Color>) -> Self {
        let layers = (1..=control_points.len())
            .rev()
            .map(|n| control_points[..n].iter().map(|p| ControlPoint::from(*p)).collect())
            .collect();

        Self { layers, colors }
    }

    pub fn random<R: Rng>(rng: &mut R, order: usize, bounds: Vec2) -> Self {
        let control_points: Vec<Vec2> = (0..=order)
            .map(|_| utils::random_position(rng, bounds))
            .collect();
        let mut colors = vec![FIRST_LAYER_COLOR];
        colors.extend((1..order).map(|_| utils::random_color(rng)));

        Self::new(&control_points, colors)
    }

    pub fn order(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    pub fn layers(&self) -> &[Vec<ControlPoint>] {
        &self.layers
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        self.layers.first().map(|layer| layer.as_slice()).unwrap_or(&[])
    }

    /// Colour used for the segments joining the points of `layer`.
    pub fn layer_color(&self, layer: usize) -> Color {
        self.colors.get(layer).copied().unwrap_or(Color::WHITE)
    }

    /// Recomputes every layer below the control points for the given `t`.
    pub fn calc_new_points(&mut self, t: f32) {
        for i in 1..self.layers.len() {
            let (above, below) = self.layers.split_at_mut(i);
            let above = &above[i - 1];
            for (p, point) in below[0].iter_mut().enumerate() {
                point.position = utils::lerp(above[p].position, above[p + 1].position, t);
            }
        }
    }

    /// The curve point computed by the last call to `calc_new_points`.
    pub fn plotted_point(&self) -> Option<Vec2> {
        self.layers.last().and_then(|layer| layer.first()).map(|p| p.position)
    }
}

impl Curve for BezierCurve {
    fn location(self: &Self, t: f32) -> Vec2 {
        let mut points: Vec<Vec2> = self.control_points().iter().map(|p| p.position).collect();
        while points.len() > 1 {
            points = points.windows(2).map(|w| utils::lerp(w[0], w[1], t)).collect();
        }
        points.first().copied().unwrap_or(Vec2::ZERO)
    }
}

impl Display for BezierCurve {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "order {} [", self.order())?;
        for (i, p) in self.control_points().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:.0}, {:.0})", p.position.x, p.position.y)?;
        }
        write!(f, "]")
    }
}
