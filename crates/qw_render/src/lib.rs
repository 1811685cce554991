pub mod gpu_context;
pub mod quad;
pub mod quad_pipeline;
pub mod texture;

pub use gpu_context::GpuContext;
pub use quad::{QuadMesh, QuadVertex};
pub use quad_pipeline::QuadPipeline;
pub use texture::Texture;
