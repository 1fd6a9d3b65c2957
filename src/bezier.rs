//! Bezier curves of arbitrary degree and their de Casteljau evaluation.

use nalgebra::{Field, Scalar, Vector2};
use smallvec::SmallVec;
use std::ops::{Deref, DerefMut};

/// Backing storage of a [`BezierCurve`].
///
/// Hand drawn curves are usually a few dozen points long, so short ones are
/// kept inline and longer ones spill to the heap.
pub type CurvePoints<T> = SmallVec<[Vector2<T>; 4]>;

/// A bezier curve, defined by its control points.
///
/// The insertion order of the points is the curve's parameterization order:
/// reversing them yields the same shape traversed backwards. A curve of a
/// single point is valid and degenerates to that point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BezierCurve<T: Scalar>(pub CurvePoints<T>);

impl<T: Scalar> Deref for BezierCurve<T> {
    type Target = CurvePoints<T>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<T: Scalar> DerefMut for BezierCurve<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Scalar> FromIterator<Vector2<T>> for BezierCurve<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(points: I) -> Self {
        BezierCurve(points.into_iter().collect())
    }
}

impl<T: Scalar> BezierCurve<T> {
    /// Returns a curve's degree which is one lower than its number of control points
    pub fn degree(&self) -> usize {
        self.len() - 1
    }
}

impl<T: Field + Scalar> BezierCurve<T> {
    /// Get the point on the curve at position `t`.
    ///
    /// This method uses de Casteljau's algorithm: repeatedly combine `n`
    /// points into `n - 1` by lerping consecutive pairs, until a single point
    /// remains. Curves up to cubic are unrolled. The evaluation is defined
    /// for any real `t`, although only `[0, 1]` lies between the endpoints.
    ///
    /// # Panics
    /// An empty curve has no points to evaluate and panics.
    pub fn casteljau_eval(&self, t: T) -> Vector2<T> {
        let inv_t = T::one() - t.clone();
        match &self[..] {
            [] => panic!("evaluated an empty curve"),
            [a] => a.clone(),
            [a, b] => a * inv_t + b * t,
            [a, b, c] => {
                let ab = a * inv_t.clone() + b * t.clone();
                let bc = b * inv_t.clone() + c * t.clone();
                ab * inv_t + bc * t
            }
            [a, b, c, d] => {
                let ab = a * inv_t.clone() + b * t.clone();
                let bc = b * inv_t.clone() + c * t.clone();
                let cd = c * inv_t.clone() + d * t.clone();
                let abc = &ab * inv_t.clone() + &bc * t.clone();
                let bcd = &bc * inv_t.clone() + &cd * t.clone();
                abc * inv_t + bcd * t
            }
            _ => {
                // Double buffered reduction, swapping the buffers instead of
                // recursing on a shrinking list.
                let mut read = self.0.clone();
                let mut write = self.0.clone();
                loop {
                    Self::casteljau_step(&read, &mut write, t.clone());
                    if write.len() == 1 {
                        return write[0].clone();
                    }
                    std::mem::swap(&mut read, &mut write);
                }
            }
        }
    }

    /// Performs a single step of de Casteljau's algorithm
    ///
    /// i.e. combines `n` points into `n - 1` points by computing
    /// `(1 - t) * A + t * B` on consecutive points `A` and `B`
    fn casteljau_step(input: &CurvePoints<T>, output: &mut CurvePoints<T>, t: T) {
        output.clear();
        let len = input.len();
        let inv_t = T::one() - t.clone();
        for (p, q) in input[..len - 1].iter().zip(input[1..].iter()) {
            output.push(p * inv_t.clone() + q * t.clone());
        }
    }
}
