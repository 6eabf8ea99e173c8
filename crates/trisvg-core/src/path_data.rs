//! Path geometry parsing.
//!
//! Supported grammar, one segment per whitespace-separated token:
//!
//! ```text
//! path-data := segment (ws+ segment)*
//! segment   := command x "," y
//! command   := ASCII letter (M, L, ...)
//! ```
//!
//! Every command is read as an absolute vertex. Curves and relative
//! commands are not interpreted.

use crate::error::{TriSvgError, TriSvgResult};
use crate::scene::Point;

/// A single `<command><x>,<y>` token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub command: char,
    pub point: Point,
}

/// Tokenize path data into segments.
pub fn tokenize(d: &str) -> TriSvgResult<Vec<Segment>> {
    d.split_ascii_whitespace()
        .map(|token| parse_segment(token, d))
        .collect()
}

/// Parse path data into vertices, dropping the final segment.
///
/// The final segment of a closed triangle repeats the first vertex. It is
/// still tokenized, so a malformed closing point is reported too.
pub fn parse_path_data(d: &str) -> TriSvgResult<Vec<Point>> {
    let mut segments = tokenize(d)?;
    segments.pop();
    Ok(segments.into_iter().map(|s| s.point).collect())
}

fn parse_segment(token: &str, raw: &str) -> TriSvgResult<Segment> {
    let mut chars = token.chars();
    let command = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => c,
        _ => {
            return Err(TriSvgError::malformed_path(
                raw,
                format!("segment {:?} does not start with a command letter", token),
            ))
        }
    };

    let mut fields = chars.as_str().split(',');
    let (x, y) = match (fields.next(), fields.next(), fields.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => {
            return Err(TriSvgError::malformed_path(
                raw,
                format!(
                    "segment {:?} must hold exactly two comma-separated numbers",
                    token
                ),
            ))
        }
    };

    Ok(Segment {
        command,
        point: Point::new(parse_coordinate(x, raw)?, parse_coordinate(y, raw)?),
    })
}

fn parse_coordinate(s: &str, raw: &str) -> TriSvgResult<f64> {
    let value: f64 = s
        .parse()
        .map_err(|_| TriSvgError::malformed_path(raw, format!("invalid number {:?}", s)))?;
    if !value.is_finite() {
        return Err(TriSvgError::malformed_path(
            raw,
            format!("coordinate {:?} is not finite", s),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(err: TriSvgError) -> String {
        match err {
            TriSvgError::MalformedPath { reason, .. } => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_drops_closing_point() {
        let points = parse_path_data("M530,700 L529,701 L526,701 L530,700").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(530.0, 700.0),
                Point::new(529.0, 701.0),
                Point::new(526.0, 701.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_keeps_commands() {
        let segments = tokenize("M1.5,2 L-3,4e1").unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].command, 'M');
        assert_eq!(segments[1].command, 'L');
        assert_eq!(segments[1].point, Point::new(-3.0, 40.0));
    }

    #[test]
    fn test_extra_whitespace_tolerated() {
        let points = parse_path_data("  M0,0   L1,0\nL0,1 L0,0 ").unwrap();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_empty_and_single_segment() {
        assert!(parse_path_data("").unwrap().is_empty());
        assert!(parse_path_data("M1,1").unwrap().is_empty());
    }

    #[test]
    fn test_point_count_not_validated() {
        let points = parse_path_data("M0,0 L1,0 L1,1 L0,1 L0,0").unwrap();
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_missing_coordinates() {
        let err = parse_path_data("M L1,0 L0,1 M").unwrap_err();
        assert_eq!(
            reason(err),
            "segment \"M\" must hold exactly two comma-separated numbers"
        );
    }

    #[test]
    fn test_too_many_fields() {
        let err = parse_path_data("M0,0,0 L1,0 L0,1 L0,0").unwrap_err();
        assert!(reason(err).contains("exactly two"));
    }

    #[test]
    fn test_single_field() {
        assert!(parse_path_data("M5 L1,0 L0,1 L0,0").is_err());
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_path_data("M0,zero L1,0 L0,1 L0,0").unwrap_err();
        assert_eq!(reason(err), "invalid number \"zero\"");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_path_data("Minf,0 L1,0 L0,1 L0,0").is_err());
        assert!(parse_path_data("M0,NaN L1,0 L0,1 L0,0").is_err());
    }

    #[test]
    fn test_missing_command_letter() {
        let err = parse_path_data("0,0 L1,0 L0,1 L0,0").unwrap_err();
        assert!(reason(err).contains("command letter"));
    }

    #[test]
    fn test_malformed_closing_point_reported() {
        assert!(parse_path_data("M0,0 L1,0 L0,1 L0,").is_err());
    }

    #[test]
    fn test_error_quotes_raw_data() {
        let d = "M0,0 Lx,0 L0,1 L0,0";
        match parse_path_data(d).unwrap_err() {
            TriSvgError::MalformedPath { raw, index, .. } => {
                assert_eq!(raw, d);
                assert_eq!(index, None);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
