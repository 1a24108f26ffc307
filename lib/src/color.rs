use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit sRGB color. Blending happens in raw channel space.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| Error::InvalidColorFormat(s.to_string()))?;

        let channel = |range| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::InvalidColorFormat(s.to_string()))
        };

        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_hex_triplets() {
        assert_eq!("#ff0000".parse::<Color>().unwrap(), Color::new(255, 0, 0));
        assert_eq!("#0000FF".parse::<Color>().unwrap(), Color::new(0, 0, 255));
        assert_eq!("#8a2be2".parse::<Color>().unwrap(), Color::new(138, 43, 226));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in [
            "ff0000", "#ff00", "#ff000000", "#gg0000", "#ff00zz", "#+fff00", "#-ff000", "", "#",
        ] {
            assert!(
                matches!(input.parse::<Color>(), Err(Error::InvalidColorFormat(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn serde_round_trips_as_hex_string() {
        let color = Color::new(18, 52, 86);
        let json = serde_json::to_string(&color).unwrap();

        assert_eq!(json, "\"#123456\"");
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), color);
    }
}
