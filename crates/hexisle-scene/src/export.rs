//! Writing a scene to disk: OBJ/MTL meshes, a RON summary and a top-down
//! biome map.

use std::path::{Path, PathBuf};

use hexisle_materials::{MaterialLibrary, TextureSet};
use hexisle_mesh::{MtlMaterial, ObjObject, export_obj};
use hexisle_terrain::debug_viz::render_biome_map;
use hexisle_terrain::{Biome, Island};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SceneError;
use crate::scene::IslandScene;

pub const OBJ_STEM: &str = "island";
pub const SUMMARY_FILE: &str = "scene.ron";
pub const BIOME_MAP_FILE: &str = "biomes.png";
/// Directory next to the MTL file that receives the referenced textures.
pub const TEXTURE_DIR: &str = "textures";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomeSummary {
    pub biome: String,
    pub columns: usize,
    pub decorations: usize,
    pub triangles: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightSummary {
    pub time_of_day: String,
    pub intensity_scale: f32,
    pub directional_intensity: f32,
    pub hemisphere_intensity: f32,
    pub ambient_intensity: f32,
    pub background: [f32; 3],
    pub exposure: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CloudSummary {
    pub id: u64,
    pub position: [f32; 3],
}

/// Human-readable snapshot of a scene, written as `scene.ron`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneSummary {
    pub seed: u64,
    pub radius: f32,
    pub max_height: f32,
    pub tiles: usize,
    pub empty_cells: usize,
    pub rocks: usize,
    pub trees: usize,
    pub highest: f32,
    pub biomes: Vec<BiomeSummary>,
    pub lights: LightSummary,
    pub clouds: Vec<CloudSummary>,
    pub elapsed: f64,
}

impl SceneSummary {
    pub fn new(scene: &IslandScene, elapsed: f64) -> Self {
        let params = scene.island.params();
        let stats = scene.island.stats();
        let rig = &scene.lights;
        let directional_intensity = match rig.time_of_day() {
            hexisle_lighting::TimeOfDay::Day => rig.effective_sun_intensity(),
            hexisle_lighting::TimeOfDay::Night => rig.effective_moon_intensity(),
        };

        Self {
            seed: scene.seed,
            radius: params.radius,
            max_height: params.max_height,
            tiles: stats.tile_count(),
            empty_cells: stats.empty_cells,
            rocks: stats.rocks,
            trees: stats.trees,
            highest: stats.highest,
            biomes: scene
                .meshes
                .iter()
                .map(|m| BiomeSummary {
                    biome: m.biome.name().to_string(),
                    columns: m.column_count,
                    decorations: m.decoration_count,
                    triangles: m.geometry.triangle_count(),
                })
                .collect(),
            lights: LightSummary {
                time_of_day: rig.time_of_day().name().to_string(),
                intensity_scale: rig.intensity_scale(),
                directional_intensity,
                hemisphere_intensity: rig.effective_hemisphere_intensity(),
                ambient_intensity: rig.effective_ambient_intensity(),
                background: rig.background.to_array(),
                exposure: rig.exposure,
            },
            clouds: scene
                .clouds
                .clouds()
                .iter()
                .map(|c| CloudSummary {
                    id: c.id,
                    position: c.position.to_array(),
                })
                .collect(),
            elapsed,
        }
    }

    pub fn to_ron(&self) -> Result<String, SceneError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }
}

/// Paths written by [`export_scene`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportedFiles {
    pub obj: Option<PathBuf>,
    pub mtl: Option<PathBuf>,
    pub summary: PathBuf,
    pub biome_map: Option<PathBuf>,
    /// Textures copied into [`TEXTURE_DIR`].
    pub textures: Vec<PathBuf>,
}

/// MTL entries for every library material. A texture is only referenced
/// when it was loaded; the path points into [`TEXTURE_DIR`] next to the MTL.
pub fn mtl_materials(library: &MaterialLibrary, textures: Option<&TextureSet>) -> Vec<MtlMaterial> {
    library
        .iter()
        .map(|m| MtlMaterial {
            name: m.name.clone(),
            diffuse: m.color,
            opacity: m.opacity,
            texture: m
                .texture
                .zip(textures)
                .and_then(|(slot, set)| set.get(slot))
                .map(|info| format!("{TEXTURE_DIR}/{}", info.slot.file_name())),
        })
        .collect()
}

/// Copy every loaded texture the library uses into `dir/textures`.
pub fn copy_textures(
    library: &MaterialLibrary,
    textures: &TextureSet,
    dir: &Path,
) -> Result<Vec<PathBuf>, SceneError> {
    let used: Vec<_> = library
        .used_textures()
        .into_iter()
        .filter_map(|slot| textures.get(slot))
        .collect();
    if used.is_empty() {
        return Ok(Vec::new());
    }

    let texture_dir = dir.join(TEXTURE_DIR);
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| SceneError::Io { path, source }
    };
    std::fs::create_dir_all(&texture_dir).map_err(io_err(&texture_dir))?;

    let mut copied = Vec::with_capacity(used.len());
    for info in used {
        let target = texture_dir.join(info.slot.file_name());
        std::fs::copy(&info.path, &target).map_err(io_err(&info.path))?;
        debug!("Copied texture {} to {}", info.path.display(), target.display());
        copied.push(target);
    }
    Ok(copied)
}

/// Write `island.obj` and `island.mtl`.
pub fn write_meshes(
    scene: &IslandScene,
    textures: Option<&TextureSet>,
    dir: &Path,
) -> Result<(PathBuf, PathBuf), SceneError> {
    let clouds = scene.clouds.geometry();
    let mut objects: Vec<ObjObject<'_>> = scene
        .meshes
        .iter()
        .map(|m| ObjObject {
            name: m.biome.name(),
            material: m.biome.name(),
            geometry: &m.geometry,
        })
        .collect();
    objects.extend([
        ObjObject {
            name: "water",
            material: "water",
            geometry: &scene.shore.water,
        },
        ObjObject {
            name: "container",
            material: "container",
            geometry: &scene.shore.container,
        },
        ObjObject {
            name: "floor",
            material: "floor",
            geometry: &scene.shore.floor,
        },
        ObjObject {
            name: "clouds",
            material: "cloud",
            geometry: &clouds,
        },
    ]);

    let materials = mtl_materials(&scene.materials, textures);
    Ok(export_obj(dir, OBJ_STEM, &objects, &materials)?)
}

/// Rasterise the biome map and save it as PNG.
pub fn write_biome_map(island: &Island, size: u32, path: &Path) -> Result<(), SceneError> {
    let map = render_biome_map(island, size.max(1));
    let image_err = |source| SceneError::Image {
        path: path.to_path_buf(),
        source,
    };
    image::save_buffer(
        path,
        &map.pixels,
        map.width,
        map.height,
        image::ExtendedColorType::Rgba8,
    )
    .map_err(image_err)
}

pub fn write_summary(summary: &SceneSummary, path: &Path) -> Result<(), SceneError> {
    std::fs::write(path, summary.to_ron()?).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Options for [`export_scene`].
#[derive(Clone, Copy, Debug)]
pub struct ExportOptions {
    pub write_obj: bool,
    pub write_png: bool,
    pub png_size: u32,
}

/// Write every enabled output into `dir`, creating it if needed.
pub fn export_scene(
    scene: &IslandScene,
    textures: Option<&TextureSet>,
    elapsed: f64,
    dir: &Path,
    options: ExportOptions,
) -> Result<ExportedFiles, SceneError> {
    std::fs::create_dir_all(dir).map_err(|source| SceneError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = ExportedFiles {
        summary: dir.join(SUMMARY_FILE),
        ..Default::default()
    };

    if options.write_obj {
        let (obj, mtl) = write_meshes(scene, textures, dir)?;
        if let Some(textures) = textures {
            files.textures = copy_textures(&scene.materials, textures, dir)?;
        }
        files.obj = Some(obj);
        files.mtl = Some(mtl);
    }
    if options.write_png {
        let path = dir.join(BIOME_MAP_FILE);
        write_biome_map(&scene.island, options.png_size, &path)?;
        files.biome_map = Some(path);
    }
    write_summary(&SceneSummary::new(scene, elapsed), &files.summary)?;

    info!("Exported scene to {}", dir.display());
    Ok(files)
}

/// Number of columns per biome in [`Biome::ALL`] order, for log lines.
pub fn biome_counts(island: &Island) -> String {
    Biome::ALL
        .iter()
        .map(|&b| format!("{}={}", b.name(), island.stats().count(b)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexisle_config::Config;
    use hexisle_materials::TextureSlot;

    fn scene() -> IslandScene {
        let mut config = Config::default();
        config.island.radius = 6.0;
        IslandScene::build(&config, 21).unwrap()
    }

    #[test]
    fn test_export_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let files = export_scene(
            &scene(),
            None,
            2.0,
            &out,
            ExportOptions {
                write_obj: true,
                write_png: true,
                png_size: 64,
            },
        )
        .unwrap();

        assert!(files.obj.as_ref().unwrap().exists());
        assert!(files.mtl.as_ref().unwrap().exists());
        assert!(files.summary.exists());

        let png = image::open(files.biome_map.unwrap()).unwrap();
        assert_eq!((png.width(), png.height()), (64, 64));

        let obj = std::fs::read_to_string(files.obj.unwrap()).unwrap();
        for name in ["o stone", "o water", "o container", "o floor", "o clouds"] {
            assert!(obj.contains(name), "missing {name}");
        }
        let mtl = std::fs::read_to_string(files.mtl.unwrap()).unwrap();
        assert!(mtl.contains("newmtl cloud"));
        assert!(!mtl.contains("map_Kd"));
    }

    #[test]
    fn test_export_respects_options() {
        let dir = tempfile::tempdir().unwrap();
        let files = export_scene(
            &scene(),
            None,
            0.0,
            dir.path(),
            ExportOptions {
                write_obj: false,
                write_png: false,
                png_size: 64,
            },
        )
        .unwrap();
        assert!(files.obj.is_none());
        assert!(files.biome_map.is_none());
        assert!(!dir.path().join("island.obj").exists());
        assert!(files.summary.exists());
    }

    #[test]
    fn test_summary_round_trips_through_ron() {
        let scene = scene();
        let summary = SceneSummary::new(&scene, 1.5);
        assert_eq!(summary.biomes.len(), 5);
        assert_eq!(summary.clouds.len(), 4);
        assert_eq!(summary.tiles, scene.island.len());
        assert_eq!(summary.lights.time_of_day, "day");

        let text = summary.to_ron().unwrap();
        let back: SceneSummary = ron::from_str(&text).unwrap();
        assert_eq!(back.seed, summary.seed);
        assert_eq!(back.biomes, summary.biomes);
        assert_eq!(back.clouds.len(), summary.clouds.len());
    }

    #[test]
    fn test_mtl_textures_only_when_loaded() {
        let library = MaterialLibrary::default();
        let without = mtl_materials(&library, None);
        assert!(without.iter().all(|m| m.texture.is_none()));
        assert_eq!(without.len(), library.len());
    }

    fn write_textures(dir: &Path, skip: Option<TextureSlot>) {
        std::fs::create_dir_all(dir).unwrap();
        for slot in TextureSlot::ALL.into_iter().filter(|s| Some(*s) != skip) {
            let img = image::RgbImage::from_pixel(2, 2, image::Rgb([120, 100, 80]));
            img.save(slot.path_in(dir)).unwrap();
        }
    }

    fn map_kd_paths(mtl: &Path) -> Vec<String> {
        std::fs::read_to_string(mtl)
            .unwrap()
            .lines()
            .filter_map(|l| l.strip_prefix("map_Kd "))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_texture_paths_resolve_from_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        write_textures(&assets, None);
        let textures = TextureSet::load(&assets);
        let out = dir.path().join("out");

        let files = export_scene(
            &scene(),
            Some(&textures),
            0.0,
            &out,
            ExportOptions {
                write_obj: true,
                write_png: false,
                png_size: 16,
            },
        )
        .unwrap();

        let paths = map_kd_paths(files.mtl.as_ref().unwrap());
        assert!(!paths.is_empty());
        for path in &paths {
            assert!(out.join(path).exists(), "{path} does not resolve");
        }
        assert_eq!(files.textures.len(), MaterialLibrary::default().used_textures().len());
        assert!(!out.join(TEXTURE_DIR).join("leaves.png").exists());
    }

    #[test]
    fn test_missing_unused_texture_keeps_others() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        write_textures(&assets, Some(TextureSlot::Leaves));
        let textures = TextureSet::load(&assets);

        let materials = mtl_materials(&MaterialLibrary::default(), Some(&textures));
        let stone = materials.iter().find(|m| m.name == "stone").unwrap();
        assert_eq!(stone.texture.as_deref(), Some("textures/stone.png"));
        let library = MaterialLibrary::default();
        let textured = materials.iter().filter(|m| m.texture.is_some()).count();
        assert_eq!(textured, library.iter().filter(|m| m.texture.is_some()).count());
    }

    #[test]
    fn test_missing_used_texture_drops_only_its_map() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        write_textures(&assets, Some(TextureSlot::Sand));
        let textures = TextureSet::load(&assets);

        let materials = mtl_materials(&MaterialLibrary::default(), Some(&textures));
        let sand = materials.iter().find(|m| m.name == "sand").unwrap();
        assert!(sand.texture.is_none());
        let grass = materials.iter().find(|m| m.name == "grass").unwrap();
        assert_eq!(grass.texture.as_deref(), Some("textures/grass.jpg"));
    }

    #[test]
    fn test_biome_counts_lists_every_biome() {
        let line = biome_counts(&scene().island);
        for biome in Biome::ALL {
            assert!(line.contains(biome.name()));
        }
    }
}
