use crate::*;
pub use random::*;

mod random;

/// Source of candidate mine positions.
///
/// A sampler only proposes coordinates, the board rejects the ones that already hold a
/// mine and asks again.
pub trait MineSampler {
    fn sample(&mut self, size: Coord2) -> Coord2;
}
