//! # trisvg core
//!
//! Converts flat-shaded triangle SVGs into render buffers.
//!
//! ## Pipeline
//!
//! ```text
//! SVG text
//!    └── extract    <path d=... fill=...> records
//!           ├── path_data   d    -> 3 vertices
//!           └── color       fill -> (r, g, b)
//!                  └── scene      paired triangles + bounds
//!                         └── normalize   output-space vertices
//!                                └── buffer      { coordinates, colors } JSON
//! ```
//!
//! Only absolute `M`/`L` segments written as `Cx,y` and `rgb()`/`rgba()` fills
//! are understood. Anything else is reported as an error rather than skipped.
//!
//! ## Example
//!
//! ```rust
//! use trisvg_core::{convert_str, ConvertConfig};
//!
//! let svg = r#"<svg><path d="M0,0 L10,0 L0,10 L0,0" fill="rgb(255,0,0)"/></svg>"#;
//! let buffer = convert_str(svg, &ConvertConfig::default()).unwrap();
//! assert_eq!(buffer.coordinates.len(), 6);
//! ```

pub mod buffer;
pub mod color;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod normalize;
pub mod path_data;
pub mod pipeline;
pub mod scene;

pub use buffer::{ColorBuffer, RenderBuffer};
pub use color::parse_fill;
pub use config::{ColorLayout, ConvertConfig, NormalizeConfig, DEFAULT_OUTPUT};
pub use error::{TriSvgError, TriSvgResult};
pub use extract::{extract_paths, PathRecord};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use normalize::{normalize, normalize_point};
pub use path_data::parse_path_data;
pub use pipeline::{
    convert_file, convert_str, inspect_file, inspect_str, parse_scene, read_svg, ConvertSummary,
    SceneReport,
};
pub use scene::{Bounds, Color, Point, Scene, Shape, Triangle};
