//! Wavefront OBJ/MTL export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::geometry::Geometry;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A named object written as an `o` group.
#[derive(Clone, Copy, Debug)]
pub struct ObjObject<'a> {
    pub name: &'a str,
    /// Material referenced through `usemtl`.
    pub material: &'a str,
    pub geometry: &'a Geometry,
}

/// One `newmtl` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MtlMaterial {
    pub name: String,
    pub diffuse: [f32; 3],
    pub opacity: f32,
    /// Diffuse texture path, relative to the directory holding the MTL file.
    pub texture: Option<String>,
}

/// Write `objects` as OBJ text. Indices are 1-based and global across objects.
pub fn write_obj<W: Write>(
    out: &mut W,
    mtllib: Option<&str>,
    objects: &[ObjObject<'_>],
) -> io::Result<()> {
    writeln!(out, "# hexisle island")?;
    if let Some(lib) = mtllib {
        writeln!(out, "mtllib {lib}")?;
    }

    let mut base = 1usize;
    for object in objects {
        let g = object.geometry;
        writeln!(out, "o {}", object.name)?;
        for p in &g.positions {
            writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
        }
        for uv in &g.uvs {
            writeln!(out, "vt {} {}", uv.x, uv.y)?;
        }
        for n in &g.normals {
            writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        writeln!(out, "usemtl {}", object.material)?;
        for tri in g.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| i as usize + base);
            writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }
        base += g.vertex_count();
    }
    Ok(())
}

pub fn write_mtl<W: Write>(out: &mut W, materials: &[MtlMaterial]) -> io::Result<()> {
    for (i, m) in materials.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "newmtl {}", m.name)?;
        writeln!(out, "Kd {} {} {}", m.diffuse[0], m.diffuse[1], m.diffuse[2])?;
        writeln!(out, "d {}", m.opacity)?;
        if let Some(texture) = &m.texture {
            writeln!(out, "map_Kd {texture}")?;
        }
    }
    Ok(())
}

/// Write `<stem>.obj` and `<stem>.mtl` into `dir`, creating it if needed.
pub fn export_obj(
    dir: &Path,
    stem: &str,
    objects: &[ObjObject<'_>],
    materials: &[MtlMaterial],
) -> Result<(PathBuf, PathBuf), ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let obj_path = dir.join(format!("{stem}.obj"));
    let mtl_path = dir.join(format!("{stem}.mtl"));
    let mtl_name = format!("{stem}.mtl");

    write_file(&mtl_path, |out| write_mtl(out, materials))?;
    write_file(&obj_path, |out| write_obj(out, Some(&mtl_name), objects))?;

    info!(
        "Exported {} objects to {}",
        objects.len(),
        obj_path.display()
    );
    Ok((obj_path, mtl_path))
}

fn write_file(
    path: &Path,
    body: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    body(&mut out).map_err(io_err)?;
    out.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{CylinderParams, cylinder};

    fn count_prefix(text: &str, prefix: &str) -> usize {
        text.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn test_obj_indices_continue_across_objects() {
        let a = cylinder(CylinderParams::new(1.0, 1.0, 1.0, 6));
        let b = cylinder(CylinderParams::new(0.0, 1.0, 1.0, 3));
        let objects = [
            ObjObject {
                name: "stone",
                material: "stone",
                geometry: &a,
            },
            ObjObject {
                name: "grass",
                material: "grass",
                geometry: &b,
            },
        ];
        let mut buf = Vec::new();
        write_obj(&mut buf, Some("island.mtl"), &objects).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("mtllib island.mtl"));
        assert_eq!(count_prefix(&text, "v "), a.vertex_count() + b.vertex_count());
        assert_eq!(count_prefix(&text, "vn "), a.vertex_count() + b.vertex_count());
        assert_eq!(count_prefix(&text, "f "), a.triangle_count() + b.triangle_count());

        let max_index = text
            .lines()
            .filter(|l| l.starts_with("f "))
            .flat_map(|l| l.split_whitespace().skip(1))
            .map(|v| v.split('/').next().unwrap().parse::<usize>().unwrap())
            .max()
            .unwrap();
        assert_eq!(max_index, a.vertex_count() + b.vertex_count());
        assert!(!text.contains("f 0/"));
    }

    #[test]
    fn test_mtl_entries() {
        let materials = [
            MtlMaterial {
                name: "water".into(),
                diffuse: [0.33, 0.67, 0.87],
                opacity: 0.6,
                texture: Some("water.jpg".into()),
            },
            MtlMaterial {
                name: "floor".into(),
                diffuse: [0.5, 0.4, 0.3],
                opacity: 1.0,
                texture: None,
            },
        ];
        let mut buf = Vec::new();
        write_mtl(&mut buf, &materials).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(count_prefix(&text, "newmtl "), 2);
        assert_eq!(count_prefix(&text, "map_Kd "), 1);
        assert!(text.contains("d 0.6"));
    }

    #[test]
    fn test_export_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        let g = cylinder(CylinderParams::new(1.0, 1.0, 1.0, 6));
        let objects = [ObjObject {
            name: "dirt",
            material: "dirt",
            geometry: &g,
        }];
        let (obj, mtl) = export_obj(&out, "island", &objects, &[]).unwrap();
        assert!(obj.exists());
        assert!(mtl.exists());
        let text = std::fs::read_to_string(obj).unwrap();
        assert!(text.contains("usemtl dirt"));
    }
}
