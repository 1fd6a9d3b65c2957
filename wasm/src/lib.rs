//! Canvas bindings: drive a [`Sketch`] from javascript pointer events and
//! draw it onto a `CanvasRenderingContext2d`.
//!
//! The page owns the event wiring, the undo button and the curve counter
//! label; this crate only exposes the model operations and the draw calls.

use bsketch::draw::{self, Style, Surface};
use bsketch::Sketch;
use js_sys::Array;
use nalgebra::Vector2;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[derive(Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

/// One sketching session attached to a canvas.
#[wasm_bindgen]
pub struct Sketchpad {
    sketch: Sketch,
    style: Style,
}

#[wasm_bindgen]
impl Sketchpad {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Sketchpad {
        Sketchpad {
            sketch: Sketch::new(),
            style: Style::default(),
        }
    }

    /// Primary button pressed: a new curve begins.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.sketch.start_curve(Vector2::new(x, y));
    }

    /// Pointer moved while pressed: the curve grows by one control point.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.sketch.extend_curve(Vector2::new(x, y));
    }

    /// Primary button released: the curve is committed.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.sketch.finish_curve();
    }

    /// Remove the last committed curve.
    pub fn undo(&mut self) {
        self.sketch.undo();
    }

    /// Number of committed curves, for the counter label.
    #[wasm_bindgen(js_name = curveCount)]
    pub fn curve_count(&self) -> usize {
        self.sketch.curve_count()
    }

    /// Replay a whole gesture from an array of `{x, y}` objects.
    #[wasm_bindgen(js_name = strokeFrom)]
    pub fn stroke_from(&mut self, points: Array) {
        for i in 0..points.length() {
            let point: Vector2<f64> = points
                .get(i)
                .into_serde::<Point>()
                .unwrap_throw()
                .into();
            if i == 0 {
                self.sketch.start_curve(point);
            } else {
                self.sketch.extend_curve(point);
            }
        }
        self.sketch.finish_curve();
    }

    /// Override the style from an object; missing keys keep their defaults.
    #[wasm_bindgen(js_name = setStyle)]
    pub fn set_style(&mut self, style: &JsValue) {
        self.style = style.into_serde().unwrap_throw();
    }

    /// Redraw the whole sketch onto `ctx`.
    pub fn render(&self, ctx: CanvasRenderingContext2d, width: f64, height: f64) {
        let mut surface = CanvasSurface { ctx, width, height };
        draw::render_all(&mut surface, &self.sketch, &self.style);
    }
}

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_line_width(width);
        self.ctx.set_stroke_style(&JsValue::from_str(color));
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .unwrap_throw();
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill();
    }
}
