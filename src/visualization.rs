//! Visualization utilities for queen placements.
//!
//! Generates SVG chessboards and optionally renders them to PNG.

use crate::board::Placement;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;
#[cfg(feature = "resvg")]
use resvg::render;
#[cfg(feature = "resvg")]
use resvg::tiny_skia::{Pixmap, Transform};
#[cfg(feature = "resvg")]
use resvg::usvg;
#[cfg(feature = "resvg")]
use resvg::usvg::TreeParsing;
#[cfg(feature = "resvg")]
use resvg::FitTo;

/// SVG board renderer
pub struct Visualizer {
    /// Side length of one board cell
    pub cell_size: f64,
    /// Margin around the board
    pub margin: f64,
}

impl Default for Visualizer {
    fn default() -> Self {
        Visualizer {
            cell_size: 60.0,
            margin: 50.0,
        }
    }
}

impl Visualizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn canvas_size(&self, dim: usize) -> f64 {
        dim as f64 * self.cell_size + 2.0 * self.margin
    }

    /// Generate an SVG chessboard for a placement. Queens are drawn as
    /// circles; columns whose queen is part of a conflict are tinted red.
    pub fn generate_svg(&self, placement: &Placement) -> String {
        let dim = placement.dim();
        let size = self.canvas_size(dim);
        let mut svg = String::new();

        svg.push_str(&format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
<style>
    .light {{ fill: #ecf0f1; }}
    .dark {{ fill: #95a5a6; }}
    .queen {{ fill: #2c3e50; stroke: #1a252f; stroke-width: 2; }}
    .attacked {{ fill: #e74c3c; stroke: #c0392b; stroke-width: 2; }}
    .frame {{ fill: none; stroke: #2c3e50; stroke-width: 2; }}
    .title {{ font-family: Arial; font-size: 14px; fill: #2c3e50; font-weight: bold; }}
</style>
<rect width="100%" height="100%" fill="#ffffff"/>
"##,
            size, size, size, size
        ));

        let fitness = if placement.fitness == usize::MAX {
            "-".to_string()
        } else {
            placement.fitness.to_string()
        };
        svg.push_str(&format!(
            r#"<text x="{}" y="25" class="title">{}-queens | Fitness: {} | Solved: {}</text>
"#,
            self.margin, dim, fitness, placement.solved
        ));

        // Checkerboard
        for i in 0..dim {
            for j in 0..dim {
                let x = self.margin + j as f64 * self.cell_size;
                let y = self.margin + i as f64 * self.cell_size;
                let class = if (i + j) % 2 == 0 { "light" } else { "dark" };
                svg.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{}" height="{}" class="{}"/>
"#,
                    x, y, self.cell_size, self.cell_size, class
                ));
            }
        }

        // Queens; a placement that validates clean gets the normal style,
        // otherwise every queen on an attacked file is highlighted.
        let valid = placement.is_valid();
        for (j, &i) in placement.rows.iter().enumerate() {
            let cx = self.margin + (j as f64 + 0.5) * self.cell_size;
            let cy = self.margin + (i as f64 + 0.5) * self.cell_size;
            let class = if valid { "queen" } else { "attacked" };
            svg.push_str(&format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" class="{}"/>
"#,
                cx,
                cy,
                self.cell_size * 0.35,
                class
            ));
        }

        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{:.1}" height="{:.1}" class="frame"/>
"#,
            self.margin,
            self.margin,
            dim as f64 * self.cell_size,
            dim as f64 * self.cell_size
        ));

        svg.push_str("</svg>");
        svg
    }

    /// Save SVG to file
    pub fn save_svg<P: AsRef<Path>>(&self, svg: &str, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(svg.as_bytes())?;
        Ok(())
    }

    /// Save SVG as PNG.
    ///
    /// Uses the native resvg renderer when the `resvg` feature is enabled,
    /// otherwise shells out to `rsvg-convert`, `magick convert` or `inkscape`,
    /// whichever is available.
    pub fn save_png<P: AsRef<Path>>(&self, svg: &str, path: P) -> std::io::Result<()> {
        let path = path.as_ref();

        #[cfg(feature = "resvg")]
        {
            let opt = usvg::Options::default();
            let rtree = usvg::Tree::from_str(svg, &opt).map_err(|e| {
                std::io::Error::new(std::io::ErrorKind::Other, format!("usvg parse error: {}", e))
            })?;
            let side = infer_canvas_side(svg).unwrap_or(800);
            let mut pixmap = Pixmap::new(side, side).ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "Failed to create pixmap")
            })?;
            render(&rtree, FitTo::Original, Transform::default(), pixmap.as_mut()).ok_or_else(
                || std::io::Error::new(std::io::ErrorKind::Other, "resvg render failed"),
            )?;
            pixmap.save_png(path).map_err(|e| {
                std::io::Error::new(std::io::ErrorKind::Other, format!("save_png failed: {}", e))
            })?;
            return Ok(());
        }

        // Fallback: write a temporary svg and try external converters
        let tmp_svg = path.with_extension("svg.tmp");
        {
            let mut f = File::create(&tmp_svg)?;
            f.write_all(svg.as_bytes())?;
        }

        let tmp = tmp_svg.to_string_lossy().to_string();
        let out = path.to_string_lossy().to_string();
        let converters: [(&str, Vec<&str>); 3] = [
            ("rsvg-convert", vec!["-o", &out, &tmp]),
            ("magick", vec!["convert", &tmp, &out]),
            (
                "inkscape",
                vec![&tmp, "--export-type=png", "--export-filename", &out],
            ),
        ];

        for (program, args) in &converters {
            if let Ok(status) = Command::new(program).args(args).status() {
                if status.success() {
                    let _ = std::fs::remove_file(&tmp_svg);
                    return Ok(());
                }
            }
        }

        let _ = std::fs::remove_file(&tmp_svg);
        Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "No SVG->PNG converter succeeded (tried rsvg-convert, magick, inkscape)",
        ))
    }
}

/// Pull the width attribute back out of a generated SVG header.
#[cfg(feature = "resvg")]
fn infer_canvas_side(svg: &str) -> Option<u32> {
    let rest = svg.split_once("width=\"")?.1;
    let value = rest.split_once('"')?.0;
    value.parse::<f64>().ok().map(|v| (v as u32).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_contains_board_and_queens() {
        let placement = Placement::from_rows(vec![1, 3, 0, 2], 0, "test");
        let viz = Visualizer::new();
        let svg = viz.generate_svg(&placement);

        assert!(svg.contains("<svg"));
        assert!(svg.contains("4-queens"));
        assert_eq!(svg.matches("<circle").count(), 4);
        // Solved board uses the normal queen style only.
        assert!(svg.contains("class=\"queen\""));
        assert!(!svg.contains("class=\"attacked\""));
    }

    #[test]
    fn test_conflicting_board_highlighted() {
        let placement = Placement::from_rows(vec![0, 0], 2, "test");
        let svg = Visualizer::new().generate_svg(&placement);
        assert!(svg.contains("class=\"attacked\""));
    }
}
