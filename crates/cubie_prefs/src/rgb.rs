use std::fmt;
use std::str::FromStr;

use serde::de::Error;

/// 8-bit sRGB color that serializes to a string like `"#ff00ff"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rgb = [0_u8; 3];
        let s = s.strip_prefix('#').unwrap_or(s).trim();
        match s.len() {
            3 => {
                let s = &s.chars().flat_map(|c| [c, c]).collect::<String>();
                hex::decode_to_slice(s, &mut rgb)?;
            }
            _ => hex::decode_to_slice(s, &mut rgb)?,
        }
        Ok(Rgb { rgb })
    }
}
impl From<u32> for Rgb {
    /// Converts a `0xRRGGBB` integer to a color. The top byte is ignored.
    fn from(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Rgb { rgb: [r, g, b] }
    }
}
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Self>().map_err(D::Error::custom)
    }
}
impl Rgb {
    /// Pure white
    pub const WHITE: Rgb = Rgb { rgb: [255; 3] };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_strings() {
        let orange = Rgb { rgb: [0xff, 0x8c, 0x00] };
        assert_eq!(Ok(orange), "#ff8c00".parse());
        assert_eq!(Ok(orange), "FF8C00".parse());
        assert_eq!(Ok(Rgb::WHITE), "#fff".parse());
        assert_eq!("#ff8c00", orange.to_string());
        assert_eq!(orange, Rgb::from(0xff8c00));
        assert!("#12345".parse::<Rgb>().is_err());
    }
}
