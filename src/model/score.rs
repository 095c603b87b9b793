use super::guess::Guess;
use super::secret::{Secret, SECRET_LEN};

/// Result of comparing one guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub bulls: usize,
    pub cows: usize,
}

impl Score {
    /// Bulls are positional matches; cows are guess digits present in the
    /// secret at some other position. Both sequences have distinct digits,
    /// so no digit can be counted twice.
    pub fn of(secret: &Secret, guess: &Guess) -> Self {
        let s = secret.digits();
        let g = guess.digits();

        let bulls = s.iter().zip(g.iter()).filter(|(a, b)| a == b).count();
        let cows = g
            .iter()
            .enumerate()
            .filter(|&(i, d)| s[i] != *d && s.contains(d))
            .count();

        Self { bulls, cows }
    }

    pub fn is_win(&self) -> bool {
        self.bulls == SECRET_LEN
    }
}
