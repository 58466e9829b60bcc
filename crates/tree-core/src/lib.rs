pub mod clock;
pub mod config;
pub mod constants;
pub mod driver;
pub mod gesture;
pub mod particles;
pub mod photos;
pub mod sampler;
pub mod scene;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use driver::*;
pub use gesture::*;
pub use particles::*;
pub use photos::*;
pub use sampler::*;
pub use scene::*;
pub use state::*;
