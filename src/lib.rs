pub mod animation;
pub mod bezier_app;
pub mod bezier_curve;
pub mod plot_trace;
pub mod point;
pub mod rendering;
pub mod settings;
pub mod utils;
