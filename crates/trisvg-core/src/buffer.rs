//! Flat render buffers and their JSON form.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::config::ColorLayout;
use crate::error::TriSvgResult;
use crate::scene::Scene;

/// Per-vertex colors, in one of the two supported layouts.
///
/// The JSON form carries no tag. An empty buffer reads back as `Nested`
/// whichever layout wrote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorBuffer {
    Nested(Vec<[i64; 3]>),
    Flat(Vec<i64>),
}

impl ColorBuffer {
    /// Number of vertices the buffer holds a color for.
    pub fn vertex_count(&self) -> usize {
        match self {
            ColorBuffer::Nested(v) => v.len(),
            ColorBuffer::Flat(v) => v.len() / 3,
        }
    }
}

/// Vertex data ready for a triangle renderer.
///
/// Triangle `i` owns `coordinates[6i..6i + 6]` (x, y per vertex) and three
/// colors, one per vertex, all equal to the triangle's fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderBuffer {
    pub coordinates: Vec<f64>,
    pub colors: ColorBuffer,
}

impl RenderBuffer {
    /// Flatten a (normalized) scene.
    pub fn from_scene(scene: &Scene, layout: ColorLayout) -> Self {
        let mut coordinates = Vec::with_capacity(scene.len() * 6);
        for triangle in scene.triangles() {
            for p in triangle.vertices() {
                coordinates.push(p.x);
                coordinates.push(p.y);
            }
        }

        let per_vertex = scene.colors().flat_map(|c| [c.to_array(); 3]);
        let colors = match layout {
            ColorLayout::Nested => ColorBuffer::Nested(per_vertex.collect()),
            ColorLayout::Flat => ColorBuffer::Flat(per_vertex.flatten().collect()),
        };

        Self {
            coordinates,
            colors,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.coordinates.len() / 6
    }

    /// Pretty-printed JSON text.
    pub fn to_json_pretty(&self) -> TriSvgResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON to `path`, replacing any existing file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> TriSvgResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!(
            path = %path.display(),
            triangles = self.triangle_count(),
            "render buffer written"
        );
        Ok(())
    }
}
