use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;
    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.iter_mut().for_each(|x| *x = c);
        self
    }

    fn negate(&mut self) -> &mut Self {
        self.iter_mut().for_each(|x| *x = -*x);
        self
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn sumsq(&self) -> T {
        self.dot(self)
    }

    fn norm_inf_diff(&self, b: &[T]) -> T {
        assert_eq!(self.len(), b.len());
        let mut out = T::zero();
        for (&x, &y) in zip(self, b) {
            let d = T::abs(x - y);
            if d.is_nan() {
                return T::nan();
            }
            out = T::max(out, d);
        }
        out
    }
}
