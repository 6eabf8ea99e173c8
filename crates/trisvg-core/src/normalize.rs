//! Mapping from SVG user space into render output space.
//!
//! The transform centers on half the scene maxima rather than on the true
//! bounding-box center. Minima are never subtracted, and maxima are seeded at
//! zero, so a scene with only negative coordinates maps each point to
//! `x * scale + offset_x` with no centering at all.

use tracing::{debug, warn};

use crate::config::NormalizeConfig;
use crate::scene::{Bounds, Point, Scene, Shape};

/// Map one point given precomputed bounds.
pub fn normalize_point(p: Point, bounds: &Bounds, config: &NormalizeConfig) -> Point {
    let half = bounds.half_extent();
    Point::new(
        (p.x - half.x) * config.scale + config.offset_x,
        (p.y - half.y) * config.scale + config.offset_y,
    )
}

/// Map every vertex of `scene` into output space.
///
/// Bounds are computed from `scene` itself. Colors and shape order are kept.
pub fn normalize(scene: &Scene, config: &NormalizeConfig) -> Scene {
    normalize_with_bounds(scene, &scene.bounds(), config)
}

/// Map every vertex of `scene` using explicit bounds.
pub fn normalize_with_bounds(scene: &Scene, bounds: &Bounds, config: &NormalizeConfig) -> Scene {
    if !scene.is_empty() && bounds.is_degenerate() {
        warn!(
            max_x = bounds.max_x,
            max_y = bounds.max_y,
            "scene has no positive extent on one axis; output will not be centered"
        );
    }
    debug!(max_x = bounds.max_x, max_y = bounds.max_y, "normalizing scene");

    let shapes = scene
        .shapes
        .iter()
        .map(|shape| Shape {
            triangle: shape
                .triangle
                .map(|p| normalize_point(p, bounds, config)),
            color: shape.color,
        })
        .collect();

    Scene::new(shapes)
}
