pub mod scene_config;

pub use scene_config::{SceneConfig, DEFAULT_COUNT};
