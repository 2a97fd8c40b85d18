//! Day/night light rig.
//!
//! The rig owns both directional lights and switches between two presets.
//! Exactly one of sun and moon is visible at any time. A global intensity
//! scale multiplies every preset intensity.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ambient::{AmbientLight, HemisphereLight};
use crate::directional::{DirectionalLight, DirectionalLightUniform};
use crate::shadow::ShadowCamera;

/// Upper bound of [`LightRig::set_intensity_scale`].
pub const MAX_INTENSITY_SCALE: f32 = 2.0;

/// `#FFEECC`
pub const DAY_BACKGROUND: u32 = 0xFFEECC;
/// `#0B1026`
pub const NIGHT_BACKGROUND: u32 = 0x0B1026;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

impl TimeOfDay {
    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

/// Split a `0xRRGGBB` literal into unit RGB.
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}

struct Preset {
    hemisphere: f32,
    ambient: f32,
    background: u32,
    exposure: f32,
}

fn preset(time: TimeOfDay) -> Preset {
    match time {
        TimeOfDay::Day => Preset {
            hemisphere: 0.6,
            ambient: 0.3,
            background: DAY_BACKGROUND,
            exposure: 1.0,
        },
        TimeOfDay::Night => Preset {
            hemisphere: 0.15,
            ambient: 0.08,
            background: NIGHT_BACKGROUND,
            exposure: 0.45,
        },
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub sun: DirectionalLight,
    pub moon: DirectionalLight,
    pub hemisphere: HemisphereLight,
    pub ambient: AmbientLight,
    /// Clear color of the current preset.
    pub background: Vec3,
    /// Tone-mapping exposure of the current preset.
    pub exposure: f32,
    time_of_day: TimeOfDay,
    intensity_scale: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new(TimeOfDay::Day, 1.0)
    }
}

impl LightRig {
    pub fn new(time_of_day: TimeOfDay, intensity_scale: f32) -> Self {
        let mut rig = Self {
            sun: DirectionalLight::sun(),
            moon: DirectionalLight::moon(),
            hemisphere: HemisphereLight::default(),
            ambient: AmbientLight::default(),
            background: rgb_from_hex(DAY_BACKGROUND),
            exposure: 1.0,
            time_of_day,
            intensity_scale: 1.0,
        };
        rig.set_time_of_day(time_of_day);
        rig.set_intensity_scale(intensity_scale);
        rig
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn intensity_scale(&self) -> f32 {
        self.intensity_scale
    }

    /// Apply a preset: visibility of sun and moon, fill intensities,
    /// background and exposure.
    pub fn set_time_of_day(&mut self, time: TimeOfDay) {
        let p = preset(time);
        self.sun.visible = time == TimeOfDay::Day;
        self.moon.visible = time == TimeOfDay::Night;
        self.hemisphere.intensity = p.hemisphere;
        self.ambient.intensity = p.ambient;
        self.background = rgb_from_hex(p.background);
        self.exposure = p.exposure;
        self.time_of_day = time;
        debug!(time = time.name(), "applied lighting preset");
    }

    /// Switch to the other preset and return it.
    pub fn toggle(&mut self) -> TimeOfDay {
        let next = self.time_of_day.toggled();
        self.set_time_of_day(next);
        next
    }

    /// Set the global multiplier, clamped to `[0, MAX_INTENSITY_SCALE]`.
    /// Non-finite input keeps the current scale.
    pub fn set_intensity_scale(&mut self, scale: f32) -> f32 {
        if scale.is_finite() {
            self.intensity_scale = scale.clamp(0.0, MAX_INTENSITY_SCALE);
        }
        self.intensity_scale
    }

    /// Resize both shadow frusta to cover an island of `radius`.
    pub fn fit_shadows(&mut self, radius: f32) {
        let camera = ShadowCamera::covering(radius);
        self.sun.shadow = camera;
        self.moon.shadow = camera;
    }

    /// The directional light that is currently shown.
    pub fn active_light(&self) -> &DirectionalLight {
        match self.time_of_day {
            TimeOfDay::Day => &self.sun,
            TimeOfDay::Night => &self.moon,
        }
    }

    pub fn visible_directional_count(&self) -> usize {
        [&self.sun, &self.moon].iter().filter(|l| l.visible).count()
    }

    pub fn effective_sun_intensity(&self) -> f32 {
        self.sun.intensity * self.intensity_scale
    }

    pub fn effective_moon_intensity(&self) -> f32 {
        self.moon.intensity * self.intensity_scale
    }

    pub fn effective_hemisphere_intensity(&self) -> f32 {
        self.hemisphere.intensity * self.intensity_scale
    }

    pub fn effective_ambient_intensity(&self) -> f32 {
        self.ambient.intensity * self.intensity_scale
    }

    pub fn to_uniform(&self) -> LightRigUniform {
        let light = self.active_light();
        let intensity = light.intensity * self.intensity_scale;
        let hemi = self.hemisphere.intensity * self.intensity_scale;
        let ambient = self.ambient.color * self.effective_ambient_intensity();
        LightRigUniform {
            directional: light.to_uniform(intensity),
            sky_intensity: self.hemisphere.sky_color.extend(hemi).to_array(),
            ground_padding: self.hemisphere.ground_color.extend(0.0).to_array(),
            ambient_exposure: ambient.extend(self.exposure).to_array(),
            background: self.background.extend(1.0).to_array(),
        }
    }
}

/// Everything a shader needs for one frame, 96 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LightRigUniform {
    pub directional: DirectionalLightUniform,
    /// xyz = hemisphere sky color, w = scaled hemisphere intensity.
    pub sky_intensity: [f32; 4],
    /// xyz = hemisphere ground color, w = padding.
    pub ground_padding: [f32; 4],
    /// xyz = ambient color premultiplied by scaled intensity, w = exposure.
    pub ambient_exposure: [f32; 4],
    /// xyzw = clear color.
    pub background: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_directional_visible() {
        let mut rig = LightRig::default();
        assert_eq!(rig.visible_directional_count(), 1);
        assert!(rig.sun.visible);
        for _ in 0..5 {
            rig.toggle();
            assert_eq!(rig.visible_directional_count(), 1);
        }
        assert_eq!(rig.time_of_day(), TimeOfDay::Night);
        assert!(rig.moon.visible);
    }

    #[test]
    fn test_night_preset() {
        let rig = LightRig::new(TimeOfDay::Night, 1.0);
        assert!(!rig.sun.visible);
        assert_eq!(rig.background, rgb_from_hex(NIGHT_BACKGROUND));
        assert!(rig.exposure < 1.0);
        let day = LightRig::default();
        assert!(rig.effective_ambient_intensity() < day.effective_ambient_intensity());
    }

    #[test]
    fn test_intensity_scale_clamped() {
        let mut rig = LightRig::default();
        assert_eq!(rig.set_intensity_scale(5.0), MAX_INTENSITY_SCALE);
        assert_eq!(rig.set_intensity_scale(-1.0), 0.0);
        assert_eq!(rig.effective_sun_intensity(), 0.0);
        assert_eq!(rig.set_intensity_scale(f32::NAN), 0.0);
        rig.set_intensity_scale(0.5);
        assert!((rig.effective_sun_intensity() - 1.75).abs() < 1e-6);
        assert!((rig.effective_hemisphere_intensity() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_toggle_keeps_scale() {
        let mut rig = LightRig::new(TimeOfDay::Day, 1.5);
        rig.toggle();
        assert_eq!(rig.intensity_scale(), 1.5);
        assert!((rig.effective_moon_intensity() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_uses_active_light() {
        let rig = LightRig::new(TimeOfDay::Night, 1.0);
        let u = rig.to_uniform();
        assert_eq!(std::mem::size_of::<LightRigUniform>(), 96);
        assert!((u.directional.direction_intensity[3] - 0.8).abs() < 1e-6);
        assert!((u.ambient_exposure[3] - 0.45).abs() < 1e-6);
        let d = rig.moon.direction();
        assert!((u.directional.direction_intensity[0] - d.x).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_from_hex() {
        let c = rgb_from_hex(DAY_BACKGROUND);
        assert_eq!(c.x, 1.0);
        assert!((c.y - 238.0 / 255.0).abs() < 1e-6);
        assert!((c.z - 204.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_shadows() {
        let mut rig = LightRig::default();
        rig.fit_shadows(30.0);
        assert_eq!(rig.sun.shadow.half_extent, 32.5);
        assert_eq!(rig.moon.shadow, rig.sun.shadow);
    }

    #[test]
    fn test_time_of_day_ron() {
        let text = ron::to_string(&TimeOfDay::Night).unwrap();
        assert_eq!(ron::from_str::<TimeOfDay>(&text).unwrap(), TimeOfDay::Night);
    }
}
