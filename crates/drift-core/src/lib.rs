pub mod camera;
pub mod config;
pub mod constants;
pub mod driver;
pub mod follow;
pub mod input;
pub mod picking;
pub mod scroll;
pub mod spin;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use driver::*;
pub use follow::*;
pub use input::*;
pub use scroll::*;
pub use spin::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
