use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};
use log::info;
use bezier::bezier_app::BezierApp;
use bezier::settings::Settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::parse();
    settings.validate().context("Invalid settings")?;
    info!("Bezier v{} starting with {:?}", env!("CARGO_PKG_VERSION"), settings);

    let (ctx, event_loop) = ContextBuilder::new("bezier", "bezier")
        .window_setup(WindowSetup::default().title("Bezier curve"))
        .window_mode(
            WindowMode::default()
                .dimensions(settings.width, settings.height)
                .resizable(true),
        )
        .build()
        .map_err(|e| anyhow!("Could not create the window: {}", e))?;

    let app = BezierApp::new(&settings);
    event::run(ctx, event_loop, app)
}
