use std::collections::VecDeque;

/// A growable ordered collection the decode driver can fill.
///
/// The driver only needs two things from its output type: construction
/// with a capacity hint and in-order append. The hint is an optimization,
/// not a contract — implementations may ignore it.
pub trait PointContainer {
    type Point;

    fn with_capacity_hint(capacity: usize) -> Self;

    fn push(&mut self, point: Self::Point);
}

impl<P> PointContainer for Vec<P> {
    type Point = P;

    fn with_capacity_hint(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn push(&mut self, point: P) {
        Self::push(self, point);
    }
}

impl<P> PointContainer for VecDeque<P> {
    type Point = P;

    fn with_capacity_hint(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn push(&mut self, point: P) {
        self.push_back(point);
    }
}
