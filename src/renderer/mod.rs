//! WebGPU rendering module
//!
//! The whole scene is procedural - SDF shapes in the fragment shader, no
//! texture assets. `scene` turns a `Session` into draw data; `pipeline`
//! owns the GPU state.

pub mod pipeline;
pub mod scene;

pub use pipeline::SceneRenderState;
pub use scene::{Scene, SpriteInstance, build_scene};
