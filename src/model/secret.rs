use log::trace;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

pub const SECRET_LEN: usize = 4;

/// The hidden target for one round: `SECRET_LEN` distinct digits,
/// first digit never zero.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    digits: [u8; SECRET_LEN],
    pub seed: u64,
}

impl Secret {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(rand::rng().next_u64());
        let mut rng = StdRng::seed_from_u64(seed);

        // First digit comes from 1-9; the rest are drawn without
        // replacement from the nine digits left over.
        let first: u8 = rng.random_range(1..=9);
        let mut pool: Vec<u8> = (0..=9u8).filter(|&d| d != first).collect();
        pool.shuffle(&mut rng);

        let mut digits = [0u8; SECRET_LEN];
        digits[0] = first;
        digits[1..].copy_from_slice(&pool[..SECRET_LEN - 1]);

        let secret = Self { digits, seed };
        trace!(target: "secret", "Secret {:?} (seed {})", secret, seed);
        secret
    }

    pub fn digits(&self) -> &[u8; SECRET_LEN] {
        &self.digits
    }

    #[cfg(test)]
    /// Parse a secret from a string of the form "1405".
    pub fn parse(s: &str) -> Self {
        let mut digits = [0u8; SECRET_LEN];
        for (slot, c) in digits.iter_mut().zip(s.bytes()) {
            *slot = c - b'0';
        }
        Self { digits, seed: 0 }
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
