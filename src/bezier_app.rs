use ggez::{Context, GameResult};
use ggez::event;
use ggez::glam::Vec2;
use ggez::graphics::{Canvas, Mesh};
use ggez::input::keyboard::{KeyCode, KeyInput};
use log::{debug, info};
use crate::animation::{Animation, AnimationConfig};
use crate::rendering::{DrawData, Renderer, BACKGROUND};
use crate::settings::Settings;

pub struct BezierApp {
    animation: Animation,
    renderer: Renderer,
    tick_rate: u32,
}

impl BezierApp {
    pub fn new(settings: &Settings) -> BezierApp {
        let bounds = Vec2::new(settings.width, settings.height);
        BezierApp {
            animation: Animation::new(AnimationConfig::from(settings), bounds),
            renderer: Renderer::new(),
            tick_rate: settings.tick_rate,
        }
    }

    fn frame_size(&self, ctx: &Context) -> Vec2 {
        Vec2::new(ctx.gfx.frame().width() as f32, ctx.gfx.frame().height() as f32)
    }
}

impl event::EventHandler<ggez::GameError> for BezierApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.tick_rate) {
            self.animation.update();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let size = self.frame_size(ctx);
        let fps = ctx.time.fps();

        let mut canvas = Canvas::from_frame(ctx, BACKGROUND);
        for drawable in self.renderer.compute_drawables(&self.animation, size, fps)? {
            match drawable {
                DrawData::Meshes(builder, params) => {
                    let data = builder.build();
                    // Nothing to upload before the trace holds two points.
                    if !data.indices.is_empty() {
                        canvas.draw(&Mesh::from_data(ctx, data), params);
                    }
                }
                DrawData::Label(text, params) => canvas.draw(&text, params),
            }
        }
        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeat: bool) -> GameResult {
        if repeat {
            return Ok(());
        }
        match input.keycode {
            Some(KeyCode::Space) => self.animation.toggle_pause(),
            Some(KeyCode::R) => self.animation.restart(),
            Some(KeyCode::H) => {
                self.renderer.toggle_construction();
                debug!("Construction lines: {}", self.renderer.show_construction());
            }
            Some(KeyCode::G) => {
                self.renderer.toggle_instructions();
                debug!("Instructions: {}", self.renderer.show_instructions());
            }
            Some(KeyCode::F) => info!("Fullscreen is not supported, ignoring"),
            Some(KeyCode::Escape) => {
                info!("Exit requested");
                ctx.request_quit();
            }
            _ => (),
        }
        Ok(())
    }

    fn resize_event(&mut self, _ctx: &mut Context, width: f32, height: f32) -> GameResult {
        debug!("Resized to {}x{}", width, height);
        self.animation.set_bounds(Vec2::new(width, height));
        Ok(())
    }
}
