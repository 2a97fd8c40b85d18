//! Island lighting: sun and moon directional lights, hemisphere and ambient
//! fill, orthographic shadow camera and the day/night rig that drives them.

mod ambient;
mod directional;
mod rig;
mod shadow;

pub use ambient::{AmbientLight, HemisphereLight};
pub use directional::{DirectionalLight, DirectionalLightUniform};
pub use rig::{
    DAY_BACKGROUND, LightRig, LightRigUniform, MAX_INTENSITY_SCALE, NIGHT_BACKGROUND, TimeOfDay,
    rgb_from_hex,
};
pub use shadow::ShadowCamera;
