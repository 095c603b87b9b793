use super::secret::SECRET_LEN;
use thiserror::Error;

/// Why a candidate guess was rejected. Checks run in declaration order
/// and the first failure wins, so the messages stay distinct.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("insert only numbers")]
    NotNumeric,
    #[error("length is not correct")]
    WrongLength,
    #[error("there is 0 on the first position")]
    LeadingZero,
    #[error("duplicate digits are not allowed")]
    DuplicateDigits,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    digits: [u8; SECRET_LEN],
}

impl Guess {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotNumeric);
        }
        if input.len() != SECRET_LEN {
            return Err(ValidationError::WrongLength);
        }
        if input.starts_with('0') {
            return Err(ValidationError::LeadingZero);
        }

        let mut digits = [0u8; SECRET_LEN];
        for (slot, b) in digits.iter_mut().zip(input.bytes()) {
            *slot = b - b'0';
        }

        let mut seen = [false; 10];
        for &d in &digits {
            if seen[d as usize] {
                return Err(ValidationError::DuplicateDigits);
            }
            seen[d as usize] = true;
        }

        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[u8; SECRET_LEN] {
        &self.digits
    }
}

impl std::fmt::Debug for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
