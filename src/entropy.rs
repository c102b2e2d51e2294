use crate::error::Result;

use rand::RngCore;

/// Source of uniform index draws.
pub trait Entropy {
    /// A uniform draw from `0..n`. `n` must be non-zero.
    fn pick(&mut self, n: usize) -> Result<usize>;
}

impl<R: RngCore> Entropy for R {
    fn pick(&mut self, n: usize) -> Result<usize> {
        assert!(n > 0, "pick from an empty range");
        let n = n as u64;
        // Largest multiple of n that fits in 32 bits; draws above it are redrawn.
        let zone = (1u64 << 32) / n * n;
        loop {
            let mut bytes = [0u8; 4];
            self.try_fill_bytes(&mut bytes)?;
            let v = u64::from(u32::from_le_bytes(bytes));
            if v < zone {
                return Ok((v % n) as usize);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Broken, Scripted};
    use super::*;
    use crate::error::Error;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pick_reduces_modulo() {
        let mut rng = Scripted::new(&[0, 1, 2, 5]);
        let picks: Vec<usize> = (0..4).map(|_| rng.pick(3).unwrap()).collect();
        assert_eq!(picks, vec![0, 1, 2, 2]);
    }

    #[test]
    fn pick_redraws_the_biased_tail() {
        // 2^32 - 1 lies above the last full multiple of 3.
        let mut rng = Scripted::new(&[u32::MAX, 4]);
        assert_eq!(rng.pick(3).unwrap(), 1);
    }

    #[test]
    fn pick_fails_when_source_fails() {
        match Broken.pick(3) {
            Err(Error::Entropy(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn pick_covers_every_index() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [0usize; 3];
        for _ in 0..300 {
            seen[rng.pick(3).unwrap()] += 1;
        }
        assert!(seen.iter().all(|&n| n > 0), "{:?}", seen);
    }
}
