//! The sketch model: committed curves plus the one being drawn.
//!
//! The model is driven synchronously by whoever owns the event loop. A
//! press-drag-release gesture maps onto [`Sketch::start_curve`],
//! [`Sketch::extend_curve`] per move sample and [`Sketch::finish_curve`],
//! a secondary click or undo button onto [`Sketch::undo`].

use crate::bezier::BezierCurve;
use nalgebra::Vector2;

/// All state of one sketching session.
///
/// Every operation is total: calls which make no sense in the current state
/// (extending or finishing a curve when none is active, undoing with an empty
/// history) are no-ops instead of errors.
#[derive(Clone, Debug, Default)]
pub struct Sketch {
    /// Committed curves, oldest first. Append only, except for [`Sketch::undo`]
    /// popping the last one. A committed curve is never edited.
    curves: Vec<BezierCurve<f64>>,
    /// The curve being drawn. Empty whenever `drawing` is false.
    current: BezierCurve<f64>,
    drawing: bool,
}

impl Sketch {
    /// An empty sketch with no active gesture.
    pub fn new() -> Sketch {
        Sketch::default()
    }

    /// Begin a new curve at `point`.
    ///
    /// The host is expected to deliver one gesture at a time. Should a
    /// pointer-up have been missed anyway, the pending curve is committed
    /// before the new one starts, so there is never more than one curve in
    /// progress.
    pub fn start_curve(&mut self, point: Vector2<f64>) {
        if self.drawing {
            self.finish_curve();
        }
        self.drawing = true;
        self.current.push(point);
        log::debug!("started curve at ({}, {})", point.x, point.y);
    }

    /// Append `point` to the curve being drawn.
    ///
    /// Called for every pointer move sample, so this is nothing more than a
    /// push. No-op while no gesture is active.
    pub fn extend_curve(&mut self, point: Vector2<f64>) {
        if !self.drawing {
            log::trace!("ignoring extend_curve without an active gesture");
            return;
        }
        self.current.push(point);
    }

    /// Commit the curve being drawn, ending the gesture.
    ///
    /// A single-point curve is committed like any other and renders as a lone
    /// marker. No-op while no gesture is active, so a stray second pointer-up
    /// commits nothing.
    pub fn finish_curve(&mut self) {
        if !self.drawing {
            return;
        }
        self.drawing = false;
        let curve = std::mem::take(&mut self.current);
        log::debug!("committed curve with {} points", curve.len());
        self.curves.push(curve);
    }

    /// Remove the last committed curve. No-op on an empty history.
    ///
    /// A curve being drawn is not affected; it still commits on pointer-up.
    pub fn undo(&mut self) {
        match self.curves.pop() {
            Some(curve) => log::debug!("undo removed a curve with {} points", curve.len()),
            None => log::trace!("undo with empty history"),
        }
    }

    /// Number of committed curves.
    ///
    /// This counts curves, not control points.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// The committed curves, oldest first.
    pub fn curves(&self) -> &[BezierCurve<f64>] {
        &self.curves
    }

    /// The curve being drawn. Empty while no gesture is active.
    pub fn current(&self) -> &BezierCurve<f64> {
        &self.current
    }

    /// Whether a gesture is active.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}
