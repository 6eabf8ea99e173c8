//! Fill color parsing for `rgb(r,g,b)` and `rgba(r,g,b,a)`.

use crate::error::{TriSvgError, TriSvgResult};
use crate::scene::Color;

/// Parse a functional `rgb()`/`rgba()` fill into its RGB channels.
///
/// The alpha channel, when present, must be a number but is discarded.
/// Fields past the fourth are ignored.
pub fn parse_fill(fill: &str) -> TriSvgResult<Color> {
    let s = fill.trim();

    let inner = strip_function(s, "rgba")
        .or_else(|| strip_function(s, "rgb"))
        .ok_or_else(|| {
            TriSvgError::malformed_color(fill, "expected rgb(r,g,b) or rgba(r,g,b,a)")
        })?;

    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    if fields.len() < 3 {
        return Err(TriSvgError::malformed_color(
            fill,
            format!("expected at least 3 channels, found {}", fields.len()),
        ));
    }

    let channel = |s: &str| -> TriSvgResult<i64> {
        s.parse()
            .map_err(|_| TriSvgError::malformed_color(fill, format!("invalid channel {:?}", s)))
    };
    let color = Color::from_rgb(channel(fields[0])?, channel(fields[1])?, channel(fields[2])?);

    if let Some(alpha) = fields.get(3) {
        alpha.parse::<f64>().map_err(|_| {
            TriSvgError::malformed_color(fill, format!("invalid alpha {:?}", alpha))
        })?;
    }

    Ok(color)
}

/// Return the argument text of `name(...)`, matching the name case-insensitively.
fn strip_function<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let head = s.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    s[name.len()..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}
