pub mod geometry;
pub mod shading;
pub mod state;
pub mod texture;
pub mod transform;

// Constants for the application window
pub const WINDOW_TITLE: &str = "Atlas Cube";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
