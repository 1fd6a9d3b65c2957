//! Turning sketches into draw calls on an abstract [`Surface`].
//!
//! Use different crate features for ready-made surfaces:
//! - `draw-svg` to collect the draw calls into an svg document

use crate::bezier::BezierCurve;
use crate::sketch::Sketch;
use nalgebra::Vector2;
use serde::Deserialize;
use std::path::Path;

#[cfg(feature = "draw-svg")]
pub mod svg;

/// A drawing surface, implemented by the host.
///
/// These three operations are everything curve rendering needs. What they
/// mean is up to the implementation, be it svg elements or canvas paths.
pub trait Surface {
    /// Wipe the surface.
    fn clear(&mut self);

    /// Draw a straight line segment from `from` to `to`.
    fn line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: &str);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &str);
}

/// Cosmetic rendering parameters.
///
/// The defaults are the reference look: everything grey except a fat red
/// curve. A style can also be read from a toml file with [`Style::load`],
/// where missing keys keep their defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Line width of the control polygon.
    pub polygon_width: f64,
    /// Color of the control polygon.
    pub polygon_color: String,
    /// Radius of the marker drawn on every control point.
    pub marker_radius: f64,
    /// Color of the control point markers.
    pub marker_color: String,
    /// Line width of the curve itself.
    pub curve_width: f64,
    /// Color of the curve itself.
    pub curve_color: String,
    /// Number of fixed-size steps a curve is tessellated into.
    ///
    /// There is no adaptive refinement, the step count is the same for every
    /// curve.
    pub samples: usize,
}

impl Default for Style {
    fn default() -> Style {
        Style {
            polygon_width: 1.0,
            polygon_color: "#404040".to_string(),
            marker_radius: 5.0,
            marker_color: "#404040".to_string(),
            curve_width: 2.0,
            curve_color: "#ff0000".to_string(),
            samples: 100,
        }
    }
}

/// Failed to load a [`Style`] from a file.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The file couldn't be read.
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),
    /// The file isn't valid toml for a [`Style`].
    #[error("failed to parse style file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Style {
    /// Read a style from a toml file.
    pub fn load(path: impl AsRef<Path>) -> Result<Style, StyleError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Draw a single curve onto `surface`.
///
/// Emits, in order: the control polygon connecting consecutive control
/// points, a marker per control point and, for two points or more, the
/// tessellated curve itself. A single-point curve is just its marker.
pub fn draw_curve<S: Surface + ?Sized>(surface: &mut S, curve: &BezierCurve<f64>, style: &Style) {
    for pair in curve.windows(2) {
        surface.line(pair[0], pair[1], style.polygon_width, &style.polygon_color);
    }
    for &point in curve.iter() {
        surface.fill_circle(point, style.marker_radius, &style.marker_color);
    }
    if curve.len() > 1 {
        // Fixed step tessellation. The sampled t never reaches exactly 1, so
        // the final segment is anchored on the last control point itself.
        let mut prev = curve[0];
        for i in 1..style.samples {
            let point = curve.casteljau_eval(i as f64 / style.samples as f64);
            surface.line(prev, point, style.curve_width, &style.curve_color);
            prev = point;
        }
        surface.line(
            prev,
            curve[curve.len() - 1],
            style.curve_width,
            &style.curve_color,
        );
    }
}

/// Redraw a whole sketch onto `surface`.
///
/// Clears first, then draws the committed curves oldest first, then the curve
/// still being drawn if there is one. On an empty sketch this is a single
/// clear and nothing else.
pub fn render_all<S: Surface + ?Sized>(surface: &mut S, sketch: &Sketch, style: &Style) {
    surface.clear();
    for curve in sketch.curves() {
        draw_curve(surface, curve, style);
    }
    if !sketch.current().is_empty() {
        draw_curve(surface, sketch.current(), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Line {
            from: Vector2<f64>,
            to: Vector2<f64>,
            width: f64,
            color: String,
        },
        Circle {
            center: Vector2<f64>,
            radius: f64,
            color: String,
        },
    }

    /// Surface which records every call for inspection.
    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.0.push(Op::Clear);
        }
        fn line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: &str) {
            self.0.push(Op::Line {
                from,
                to,
                width,
                color: color.to_string(),
            });
        }
        fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &str) {
            self.0.push(Op::Circle {
                center,
                radius,
                color: color.to_string(),
            });
        }
    }

    #[test]
    fn empty_sketch_only_clears() {
        let mut recorder = Recorder::default();
        render_all(&mut recorder, &Sketch::new(), &Style::default());
        assert_eq!(recorder.0, vec![Op::Clear]);
    }

    #[test]
    fn single_point_draws_its_marker_and_nothing_else() {
        let curve = BezierCurve(smallvec![Vector2::new(4.0, 2.0)]);
        let mut recorder = Recorder::default();
        draw_curve(&mut recorder, &curve, &Style::default());
        assert_eq!(
            recorder.0,
            vec![Op::Circle {
                center: Vector2::new(4.0, 2.0),
                radius: 5.0,
                color: "#404040".to_string(),
            }]
        );
    }

    #[test]
    fn line_segment_counts_add_up() {
        let style = Style {
            samples: 10,
            ..Style::default()
        };
        let curve = BezierCurve(smallvec![Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)]);
        let mut recorder = Recorder::default();
        draw_curve(&mut recorder, &curve, &style);

        // 1 polygon segment, 2 markers, `samples` curve segments.
        assert_eq!(recorder.0.len(), 13);
        assert_eq!(
            recorder.0[0],
            Op::Line {
                from: Vector2::new(0.0, 0.0),
                to: Vector2::new(10.0, 0.0),
                width: 1.0,
                color: "#404040".to_string(),
            }
        );
        let curve_segments: Vec<_> = recorder
            .0
            .iter()
            .filter(|op| matches!(op, Op::Line { width, .. } if *width == 2.0))
            .collect();
        assert_eq!(curve_segments.len(), 10);
    }

    #[test]
    fn tessellation_is_anchored_on_the_endpoints() {
        let style = Style {
            samples: 7,
            ..Style::default()
        };
        let curve: BezierCurve<f64> = [(0.0, 0.0), (3.0, 8.0), (-2.0, 4.0), (5.0, 5.0), (9.0, 1.0)]
            .into_iter()
            .map(|(x, y)| Vector2::new(x, y))
            .collect();
        let mut recorder = Recorder::default();
        draw_curve(&mut recorder, &curve, &style);

        let mut segments = recorder.0.iter().filter_map(|op| match op {
            Op::Line { from, to, width, .. } if *width == style.curve_width => Some((from, to)),
            _ => None,
        });
        let first = segments.next().unwrap();
        let last = segments.last().unwrap();
        assert_eq!(*first.0, curve[0]);
        assert_eq!(*last.1, curve[4]);
    }

    #[test]
    fn in_progress_curve_is_drawn_last() {
        let mut sketch = Sketch::new();
        sketch.start_curve(Vector2::new(0.0, 0.0));
        sketch.extend_curve(Vector2::new(1.0, 0.0));
        sketch.finish_curve();
        sketch.start_curve(Vector2::new(8.0, 8.0));

        let mut recorder = Recorder::default();
        render_all(&mut recorder, &sketch, &Style::default());

        assert_eq!(recorder.0.first(), Some(&Op::Clear));
        assert_eq!(
            recorder.0.last(),
            Some(&Op::Circle {
                center: Vector2::new(8.0, 8.0),
                radius: 5.0,
                color: "#404040".to_string(),
            })
        );
    }

    #[test]
    fn style_toml_keeps_defaults_for_missing_keys() {
        let style: Style = toml::from_str("curve_color = \"#00ff00\"\nsamples = 32").unwrap();
        assert_eq!(style.curve_color, "#00ff00");
        assert_eq!(style.samples, 32);
        assert_eq!(style.curve_width, 2.0);
        assert_eq!(style.marker_radius, 5.0);
    }
}
