//! Sticker patterns for practicing each stage of a layer-by-layer solve.

use strum::{Display, EnumString, VariantArray};

use crate::stickers::StickerPattern;

/// Built-in sticker pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, VariantArray)]
#[strum(serialize_all = "kebab-case")]
pub enum PatternPreset {
    /// Centers and the cross on the `D` face.
    Cross,
    /// Centers and the whole `D` layer.
    FirstLayer,
    /// Everything except the `U` layer.
    FirstTwoLayers,
    /// First two layers plus the cross on the `U` face.
    OllCross,
    /// First two layers plus every `U` sticker.
    Oll,
    /// Every sticker.
    Solved,
}

impl PatternPreset {
    /// Returns the pattern, with one entry for each of the 26 cubies.
    pub fn pattern(self) -> StickerPattern {
        match self {
            Self::Cross => StickerPattern::all_off_except(&StickerPattern::from_iter([
                ("FD", 0b11),
                ("BD", 0b11),
                ("RD", 0b11),
                ("LD", 0b11),
                ("U", 0b1),
                ("F", 0b1),
                ("R", 0b1),
                ("L", 0b1),
                ("D", 0b1),
                ("B", 0b1),
            ])),
            Self::FirstLayer => StickerPattern::all_off_except(&StickerPattern::from_iter([
                ("FLD", 0b111),
                ("FRD", 0b111),
                ("BLD", 0b111),
                ("BRD", 0b111),
                ("FD", 0b11),
                ("BD", 0b11),
                ("RD", 0b11),
                ("LD", 0b11),
                ("F", 0b1),
                ("R", 0b1),
                ("L", 0b1),
                ("D", 0b1),
                ("B", 0b1),
                ("U", 0b1),
            ])),
            Self::FirstTwoLayers => StickerPattern::all_on_except(&StickerPattern::from_iter([
                ("FLU", 0b000),
                ("FRU", 0b000),
                ("BLU", 0b000),
                ("BRU", 0b000),
                ("UL", 0b00),
                ("UR", 0b00),
                ("UF", 0b00),
                ("UB", 0b00),
            ])),
            Self::OllCross => StickerPattern::all_on_except(&StickerPattern::from_iter([
                ("FLU", 0b000),
                ("FRU", 0b000),
                ("BLU", 0b000),
                ("BRU", 0b000),
                ("UL", 0b10),
                ("UR", 0b10),
                ("UF", 0b10),
                ("UB", 0b10),
            ])),
            Self::Oll => StickerPattern::all_on_except(&StickerPattern::from_iter([
                ("FLU", 0b001),
                ("FRU", 0b001),
                ("BLU", 0b001),
                ("BRU", 0b001),
                ("FU", 0b01),
                ("BU", 0b01),
                ("LU", 0b01),
                ("RU", 0b01),
            ])),
            Self::Solved => StickerPattern::all_on_except(&StickerPattern::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_cover_every_cubie() {
        for &preset in PatternPreset::VARIANTS {
            assert_eq!(26, preset.pattern().len(), "{preset}");
        }
    }

    #[test]
    fn test_preset_names() {
        assert_eq!("first-two-layers", PatternPreset::FirstTwoLayers.to_string());
        assert_eq!(Ok(PatternPreset::OllCross), "oll-cross".parse());
        assert!("nope".parse::<PatternPreset>().is_err());
    }
}
