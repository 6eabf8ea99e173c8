//! # trisvg bench
//!
//! Input generators shared by the criterion benchmarks in `benches/trisvg.rs`.
//!
//! Run with: `cargo bench -p trisvg-bench`

/// Generate an SVG with `n` triangles laid out on a 40-column grid.
///
/// Every triangle gets its own `rgba()` fill so color parsing is exercised too.
pub fn generate_svg(n: usize) -> String {
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="1600" height="1200">"#,
    );
    for i in 0..n {
        let x = (i % 40) * 40;
        let y = (i / 40) * 40;
        svg.push_str(&format!(
            r#"<path d="M{x},{y} L{},{y} L{x},{} L{x},{y}" fill="rgba({},{},{},1)"/>"#,
            x + 37,
            y + 37,
            i % 256,
            (i * 7) % 256,
            (i * 13) % 256,
        ));
    }
    svg.push_str("</svg>");
    svg
}
