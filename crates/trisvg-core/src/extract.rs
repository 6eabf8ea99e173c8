//! `<path>` element extraction.
//!
//! This is not an XML parser. It scans for `<path ...>` tags, ending each tag at
//! the next `>`, and tokenizes the attributes inside. Comments are skipped.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{TriSvgError, TriSvgResult};

/// Raw attribute values of one `<path>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
    /// Position of the element among all `<path>` tags in the document.
    pub index: usize,
    /// Geometry (`d` attribute).
    pub d: String,
    /// Fill color (`fill` attribute), if present.
    pub fill: Option<String>,
}

/// Extract every `<path>` element that carries geometry.
///
/// Elements without a `d` attribute are skipped. A missing `fill` is kept as
/// `None` and rejected later, when the scene is built.
pub fn extract_paths(svg: &str) -> TriSvgResult<Vec<PathRecord>> {
    let mut records = Vec::new();

    for (index, tag) in path_tags(svg).enumerate() {
        let attrs = parse_attributes(tag);
        match attr(&attrs, "d") {
            Some(d) => records.push(PathRecord {
                index,
                d: d.to_string(),
                fill: attr(&attrs, "fill").map(str::to_string),
            }),
            None => debug!(index, "skipping <path> without a d attribute"),
        }
    }

    if records.is_empty() {
        return Err(TriSvgError::NoPathElementsFound);
    }

    debug!(paths = records.len(), "extracted path elements");
    Ok(records)
}

/// Iterate over the attribute text of every `<path>` tag, in document order.
pub fn path_tags(svg: &str) -> PathTags<'_> {
    PathTags { src: svg, pos: 0 }
}

/// Iterator returned by [`path_tags`].
pub struct PathTags<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Iterator for PathTags<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let src = self.src;

        while self.pos < src.len() {
            let tag_start = self.pos + src[self.pos..].find('<')?;
            let rest = &src[tag_start..];

            if rest.starts_with("<!--") {
                match rest.find("-->") {
                    Some(end) => {
                        self.pos = tag_start + end + 3;
                        continue;
                    }
                    None => {
                        self.pos = src.len();
                        return None;
                    }
                }
            }

            if let Some(body) = rest.strip_prefix("<path") {
                // `<pathology>` is some other element
                let is_path = body
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_whitespace() || c == '>' || c == '/');
                if is_path {
                    let Some(end) = body.find('>') else {
                        trace!(offset = tag_start, "unterminated <path> tag");
                        self.pos = src.len();
                        return None;
                    };
                    self.pos = tag_start + "<path".len() + end + 1;
                    return Some(&body[..end]);
                }
            }

            self.pos = tag_start + 1;
        }

        None
    }
}

/// Tokenize `name="value"` pairs from the inside of a tag.
///
/// Single and double quotes are accepted, as are unquoted values, which end at
/// whitespace or `/`. Attributes without a value are dropped. Tokenizing stops
/// at an unterminated quote.
fn parse_attributes(tag: &str) -> Vec<(&str, &str)> {
    let mut attrs = Vec::new();
    let mut rest = tag;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if rest.is_empty() {
            break;
        }

        let name_end = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();

        let Some(value) = rest.strip_prefix('=') else {
            continue;
        };
        let value = value.trim_start();

        match value.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &value[1..];
                let Some(end) = body.find(quote) else {
                    break;
                };
                if !name.is_empty() {
                    attrs.push((name, &body[..end]));
                }
                rest = &body[end + 1..];
            }
            Some(_) => {
                let end = value
                    .find(|c: char| c.is_whitespace() || c == '/')
                    .unwrap_or(value.len());
                if !name.is_empty() {
                    attrs.push((name, &value[..end]));
                }
                rest = &value[end..];
            }
            None => break,
        }
    }

    attrs
}

/// First non-empty value of attribute `name`.
fn attr<'a>(attrs: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(n, v)| *n == name && !v.is_empty())
        .map(|(_, v)| *v)
}
