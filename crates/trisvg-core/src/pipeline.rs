//! End-to-end conversion: extract, parse, normalize, serialize.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, info_span};

use crate::buffer::RenderBuffer;
use crate::config::ConvertConfig;
use crate::error::{TriSvgError, TriSvgResult};
use crate::extract::{extract_paths, path_tags};
use crate::normalize::normalize_with_bounds;
use crate::scene::{Bounds, Scene, Triangle};

/// Outcome of [`convert_file`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub triangles: usize,
    /// Source-space bounds the transform was centered on
    pub bounds: Bounds,
}

/// Diagnostic view of a parsed SVG, produced without writing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneReport {
    /// Every `<path>` tag found, with or without geometry
    pub path_elements: usize,
    pub triangles: usize,
    pub bounds: Bounds,
    /// Raw `d` of the first path with geometry
    pub first_path: Option<String>,
    /// First triangle, in source space
    pub first_triangle: Option<Triangle>,
}

/// Extract and parse every triangle of an SVG document.
pub fn parse_scene(svg: &str) -> TriSvgResult<Scene> {
    let records = extract_paths(svg)?;
    Scene::from_records(&records)
}

/// Run the whole pipeline on in-memory SVG text.
pub fn convert_str(svg: &str, config: &ConvertConfig) -> TriSvgResult<RenderBuffer> {
    convert_scene(&parse_scene(svg)?, config).map(|(buffer, _)| buffer)
}

fn convert_scene(scene: &Scene, config: &ConvertConfig) -> TriSvgResult<(RenderBuffer, Bounds)> {
    config.validate()?;
    let bounds = scene.bounds();
    let normalized = normalize_with_bounds(scene, &bounds, &config.normalize);
    Ok((RenderBuffer::from_scene(&normalized, config.color_layout), bounds))
}

/// Read an SVG file, mapping a missing file to [`TriSvgError::FileNotFound`].
pub fn read_svg(path: impl AsRef<Path>) -> TriSvgResult<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TriSvgError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => TriSvgError::Io(e),
    })
}

/// Convert `input` and write the render buffer to `output`.
///
/// Nothing is written unless every path parses.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ConvertConfig,
) -> TriSvgResult<ConvertSummary> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let _span = info_span!("convert", input = %input.display()).entered();

    let svg = read_svg(input)?;
    let scene = parse_scene(&svg)?;
    info!(triangles = scene.len(), "parsed scene");

    let (buffer, bounds) = convert_scene(&scene, config)?;
    buffer.write_json(output)?;

    Ok(ConvertSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        triangles: scene.len(),
        bounds,
    })
}

/// Parse SVG text and describe it.
pub fn inspect_str(svg: &str) -> TriSvgResult<SceneReport> {
    let records = extract_paths(svg)?;
    let scene = Scene::from_records(&records)?;
    let first_triangle = scene.shapes.first().map(|shape| shape.triangle);

    Ok(SceneReport {
        path_elements: path_tags(svg).count(),
        triangles: scene.len(),
        bounds: scene.bounds(),
        first_path: records.first().map(|r| r.d.clone()),
        first_triangle,
    })
}

/// Read an SVG file and describe it.
pub fn inspect_file(input: impl AsRef<Path>) -> TriSvgResult<SceneReport> {
    let input = input.as_ref();
    let _span = info_span!("inspect", input = %input.display()).entered();
    inspect_str(&read_svg(input)?)
}
