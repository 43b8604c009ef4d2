//! Primitive value generators shared by the entity builders.
//!
//! Every function takes the random source explicitly; nothing here keeps
//! state between calls.

pub mod numeric;
pub mod timestamp;

use rand::Rng;

/// Pick one element uniformly.
///
/// The index is drawn as a `u32` so the random stream does not depend on
/// the platform's pointer width. `items` must not be empty.
pub fn pick<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    let idx = rng.gen_range(0..items.len() as u32) as usize;
    items[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_stays_in_slice() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            assert!(items.contains(&pick(&mut rng, &items)));
        }
    }

    #[test]
    fn test_pick_single_element() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick(&mut rng, &[9]), 9);
    }
}
