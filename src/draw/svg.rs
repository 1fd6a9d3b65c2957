//! A [`Surface`] collecting draw calls into an svg document.
//!
//! Used by the demo binary to show sketches without a windowing host.

use super::Surface;
use nalgebra::Vector2;
use std::fmt::{Display, Formatter};

/// An svg document built from [`Surface`] calls.
///
/// [`Display`] writes the complete document, elements in draw order.
pub struct SvgSurface {
    view_box: (f64, f64, f64, f64),
    elements: Vec<Element>,
}

enum Element {
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

impl SvgSurface {
    /// An empty surface with the given viewBox.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> SvgSurface {
        SvgSurface {
            view_box: (min_x, min_y, width, height),
            elements: Vec::new(),
        }
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: &str) {
        self.elements.push(Element::Line {
            from,
            to,
            width,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &str) {
        self.elements.push(Element::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }
}

impl Display for SvgSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.0, self.view_box.1, self.view_box.2, self.view_box.3
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Line {
                from,
                to,
                width,
                color,
            } => writeln!(
                f,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                from[0], from[1], to[0], to[1], color, width
            ),
            Element::Circle {
                center,
                radius,
                color,
            } => writeln!(
                f,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                center[0], center[1], radius, color
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_elements_in_draw_order() {
        let mut svg = SvgSurface::new(0.0, 0.0, 100.0, 100.0);
        svg.line(
            Vector2::new(1.0, 2.0),
            Vector2::new(3.0, 4.0),
            1.0,
            "#404040",
        );
        svg.fill_circle(Vector2::new(5.0, 6.0), 5.0, "#404040");

        let doc = svg.to_string();
        assert!(doc.starts_with("<svg viewBox=\"0 0 100 100\""));
        assert!(doc.ends_with("</svg>\n"));
        let line = doc.find("<line x1=\"1\" y1=\"2\" x2=\"3\" y2=\"4\"").unwrap();
        let circle = doc.find("<circle cx=\"5\" cy=\"6\" r=\"5\"").unwrap();
        assert!(line < circle);
    }

    #[test]
    fn clear_drops_all_elements() {
        let mut svg = SvgSurface::new(0.0, 0.0, 10.0, 10.0);
        svg.fill_circle(Vector2::new(1.0, 1.0), 2.0, "red");
        svg.clear();
        assert!(!svg.to_string().contains("<circle"));
    }
}
