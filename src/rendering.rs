use ggez::GameResult;
use ggez::glam::Vec2;
use ggez::graphics::{Color, DrawMode, DrawParam, MeshBuilder, Text};
use crate::animation::Animation;
use crate::bezier_curve::BezierCurve;
use crate::plot_trace::PlotTrace;

pub const BACKGROUND: Color = Color::new(20. / 255., 20. / 255., 25. / 255., 1.0);
const TEXT_COLOR: Color = Color::WHITE;
const POINT_COLOR: Color = Color::WHITE;
const CURVE_COLOR: Color = Color::WHITE;
const FONT_SIZE: f32 = 15.0;
const CONSTRUCTION_WIDTH: f32 = 1.0;
const CURVE_WIDTH: f32 = 2.0;
const POINT_TOLERANCE: f32 = 0.1;
const TEXT_MARGIN: f32 = 10.0;
const LINE_SPACING: f32 = 20.0;
const BOTTOM_OFFSET: f32 = 23.0;
pub const INSTRUCTIONS: [&str; 6] = [
    "Press space to pause the simulation",
    "Press R to restart the simulation",
    "Press H to toggle construction lines",
    "Press G to toggle tutorial text",
    "Press F to toggle fullscreen",
    "Press ESC to exit",
];

pub enum DrawData {
    Meshes(MeshBuilder, DrawParam),
    Label(Text, DrawParam),
}

/// Segments joining neighbours of every layer that still has more than one point.
pub fn construction_segments(curve: &BezierCurve) -> Vec<(Color, [Vec2; 2])> {
    curve
        .layers()
        .iter()
        .enumerate()
        .take_while(|(_, layer)| layer.len() > 1)
        .flat_map(|(i, layer)| {
            let color = curve.layer_color(i);
            layer.windows(2).map(move |pair| (color, pair[0].to(&pair[1])))
        })
        .collect()
}

/// Bottom-left anchored positions of the instruction lines, first line lowest.
pub fn instruction_positions(height: f32) -> impl Iterator<Item = Vec2> {
    (0..INSTRUCTIONS.len()).map(move |i| {
        Vec2::new(TEXT_MARGIN, height - BOTTOM_OFFSET - LINE_SPACING * (i as f32))
    })
}

pub struct Renderer {
    show_construction: bool,
    show_instructions: bool,
}

impl Renderer {
    pub fn new() -> Renderer {
        Renderer {
            show_construction: true,
            show_instructions: true,
        }
    }

    pub fn show_construction(&self) -> bool {
        self.show_construction
    }

    pub fn show_instructions(&self) -> bool {
        self.show_instructions
    }

    pub fn toggle_construction(&mut self) {
        self.show_construction = !self.show_construction;
    }

    pub fn toggle_instructions(&mut self) {
        self.show_instructions = !self.show_instructions;
    }

    fn construction(&self, curve: &BezierCurve) -> GameResult<DrawData> {
        let mut builder = MeshBuilder::new();
        for layer in curve.layers() {
            for point in layer {
                builder.circle(
                    DrawMode::fill(),
                    point.position,
                    point.radius,
                    POINT_TOLERANCE,
                    POINT_COLOR,
                )?;
            }
        }
        for (color, segment) in construction_segments(curve) {
            builder.line(&segment, CONSTRUCTION_WIDTH, color)?;
        }
        Ok(DrawData::Meshes(builder, DrawParam::new()))
    }

    fn curve(&self, trace: &PlotTrace) -> GameResult<DrawData> {
        let mut builder = MeshBuilder::new();
        for segment in trace.segments() {
            builder.line(&segment, CURVE_WIDTH, CURVE_COLOR)?;
        }
        Ok(DrawData::Meshes(builder, DrawParam::new()))
    }

    fn label(text: String, dest: Vec2) -> DrawData {
        let mut text = Text::new(text);
        text.set_scale(FONT_SIZE);
        DrawData::Label(text, DrawParam::new().dest(dest).color(TEXT_COLOR))
    }

    pub fn compute_drawables(
        &self,
        animation: &Animation,
        size: Vec2,
        fps: f64,
    ) -> GameResult<Vec<DrawData>> {
        let mut result = vec![];

        if self.show_construction {
            result.push(self.construction(animation.curve())?);
        }
        result.push(self.curve(animation.trace())?);

        if self.show_instructions {
            for (line, dest) in INSTRUCTIONS.iter().zip(instruction_positions(size.y)) {
                result.push(Self::label(line.to_string(), dest));
            }
        }
        let order = animation.curve().order();
        let tick = animation.progress();
        result.push(Self::label(format!("FPS: {:.1}", fps), Vec2::new(TEXT_MARGIN, 5.0)));
        result.push(Self::label(format!("Order: {}", order), Vec2::new(TEXT_MARGIN, 20.0)));
        result.push(Self::label(format!("Tick: {:.2}", tick), Vec2::new(TEXT_MARGIN, 35.0)));

        Ok(result)
    }
}
