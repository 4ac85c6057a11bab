pub mod camera;
pub mod curve;
pub mod interp;
pub mod lifetime;
pub mod loader;
pub mod menu;
pub mod motion;
pub mod scene;
pub mod theme;
pub mod view;

// Shaders bundled as string constants
pub static SPIRAL_WGSL: &str = include_str!("../../shaders/spiral.wgsl");
