//! Colour codes stored in grid cells.

use std::fmt;

use crate::error::{BitmapError, Result};

/// A single cell colour: one uppercase ASCII letter `A`..=`Z`.
///
/// The only way to obtain a `Colour` is through validation, so any value of
/// this type is guaranteed to be in the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour(u8);

impl Colour {
    /// Colour of a freshly created or cleared cell.
    pub const DEFAULT: Colour = Colour(b'O');

    /// Validate a character as a colour code.
    pub fn new(c: char) -> Result<Self> {
        if c.is_ascii_uppercase() {
            Ok(Self(c as u8))
        } else {
            Err(BitmapError::Colour(c.to_string()))
        }
    }

    /// The colour as its letter.
    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<char> for Colour {
    type Error = BitmapError;

    fn try_from(c: char) -> Result<Self> {
        Self::new(c)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_is_o() {
        assert_eq!(Colour::default().as_char(), 'O');
        assert_eq!(Colour::DEFAULT.to_string(), "O");
    }

    #[test]
    fn accepts_whole_alphabet() {
        for c in 'A'..='Z' {
            assert_eq!(Colour::new(c).unwrap().as_char(), c);
        }
    }

    #[test]
    fn rejects_lowercase() {
        let err = Colour::new('a').unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Colour);
    }

    #[test]
    fn rejects_digits_and_symbols() {
        for c in ['0', '9', '#', ' ', '@', '['] {
            assert!(Colour::try_from(c).is_err(), "{c:?} should be rejected");
        }
    }

    #[test]
    fn rejects_non_ascii_letters() {
        assert!(Colour::new('Ä').is_err());
        assert!(Colour::new('Ω').is_err());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_iff_ascii_uppercase(c in any::<char>()) {
                prop_assert_eq!(Colour::new(c).is_ok(), c.is_ascii_uppercase());
            }
        }
    }
}
