//! Material system: physical material definitions, GPU-packed material data,
//! the texture manifest and the island's material library.

mod library;
mod material;
mod texture;

pub use library::MaterialLibrary;
pub use material::{MaterialDef, MaterialError, MaterialGpuData, Side};
pub use texture::{TextureInfo, TextureSet, TextureSlot, load_texture};
