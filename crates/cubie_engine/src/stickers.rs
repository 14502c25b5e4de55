//! Lighting and masking individual stickers.

use indexmap::IndexMap;

use crate::cubie::{CubieIdentity, lattice_indices, parse_face_letters};
use crate::engine::CubeEngine;
use crate::scene::SceneGraph;

/// Mask for every sticker of a cubie. Bits beyond the cubie's face count are
/// ignored.
pub const ALL_ON: u32 = 0b111;
/// Mask for no stickers.
pub const ALL_OFF: u32 = 0;

/// Sticker mask for some cubies.
///
/// Each key names a cubie by its face letters, such as `RUF`. The letters may
/// be written in any order, and the order determines which bit of the mask
/// controls which sticker: the first letter is the highest bit that the
/// cubie uses. For example, `RUF: 0b110` lights the `R` and `U` stickers and
/// masks the `F` sticker, while `FRU: 0b110` lights `F` and `R` and masks `U`.
///
/// Cubies that are not mentioned keep their stickers as they are.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StickerPattern(IndexMap<String, u32>);
impl<K: Into<String>> FromIterator<(K, u32)> for StickerPattern {
    fn from_iter<T: IntoIterator<Item = (K, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
impl<K: Into<String>> Extend<(K, u32)> for StickerPattern {
    fn extend<T: IntoIterator<Item = (K, u32)>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}
impl StickerPattern {
    /// Constructs an empty pattern.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mask for a cubie, returning the old one if the same key was
    /// already present.
    pub fn insert(&mut self, key: impl Into<String>, mask: u32) -> Option<u32> {
        self.0.insert(key.into(), mask)
    }
    /// Returns the mask for a key, exactly as written.
    pub fn get(&self, key: &str) -> Option<u32> {
        self.0.get(key).copied()
    }
    /// Iterates over keys and masks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns whether there are no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a pattern that covers all 26 cubies, masking every sticker
    /// except those lit in `stickers`.
    pub fn all_off_except(stickers: &StickerPattern) -> Self {
        Self::fill(stickers, ALL_OFF)
    }
    /// Returns a pattern that covers all 26 cubies, lighting every sticker
    /// except those masked in `stickers`.
    pub fn all_on_except(stickers: &StickerPattern) -> Self {
        Self::fill(stickers, ALL_ON)
    }

    /// Returns a pattern with one entry per cubie, in registry order. Cubies
    /// named in `stickers` keep their key and mask. The rest get `default`.
    ///
    /// Keys in `stickers` that do not name a cubie are dropped.
    fn fill(stickers: &StickerPattern, default: u32) -> Self {
        lattice_indices()
            .map(|index| {
                let identity = CubieIdentity::at_lattice_index(index);
                stickers
                    .iter()
                    .find(|(key, _)| key.parse::<CubieIdentity>().is_ok_and(|k| k == identity))
                    .map_or_else(
                        || (identity.to_string(), default),
                        |(key, mask)| (key.to_owned(), mask),
                    )
            })
            .collect()
    }
}

impl<S: SceneGraph> CubeEngine<S> {
    /// Lights or masks stickers according to `pattern`. Masked stickers show
    /// the inside color.
    ///
    /// Keys that do not name a cubie are logged and skipped. Applying the
    /// same pattern twice has the same effect as applying it once.
    pub fn apply_pattern(&mut self, pattern: &StickerPattern) {
        for (key, mask) in pattern.iter() {
            let faces = match parse_face_letters(key) {
                Ok(faces) => faces,
                Err(e) => {
                    log::warn!("skipping sticker pattern key {key:?}: {e}");
                    continue;
                }
            };
            let identity = match CubieIdentity::new(faces.iter().copied()) {
                Ok(identity) => identity,
                Err(e) => {
                    log::warn!("skipping sticker pattern key {key:?}: {e}");
                    continue;
                }
            };
            let Some(cubie) = self.cubies.iter_mut().find(|c| *c.identity() == identity) else {
                log::warn!("skipping sticker pattern key {key:?}: no such cubie");
                continue;
            };

            let mut changed = false;
            for (i, &face) in faces.iter().enumerate() {
                let bit = faces.len() - 1 - i;
                let on = (mask >> bit) & 1 == 1;
                changed |= cubie.set_sticker(face, on, &self.prefs.colors);
            }
            if changed {
                self.scene.set_polygon_colors(cubie.id(), cubie.polygon_colors());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_all_off_except() {
        let stickers = StickerPattern::from_iter([("RUF", 0b110), ("XYZ", 0b1)]);
        let pattern = StickerPattern::all_off_except(&stickers);
        assert_eq!(26, pattern.len());
        assert_eq!(Some(0b110), pattern.get("RUF"));
        assert_eq!(None, pattern.get("FRU"));
        assert_eq!(None, pattern.get("XYZ"));
        assert_eq!(Some(ALL_OFF), pattern.get("BDL"));
        assert_eq!(Some(ALL_OFF), pattern.get("U"));
        // registry order
        assert_eq!(Some(("BDL", 0)), pattern.iter().next());
        assert_eq!(Some(("RUF", 0b110)), pattern.iter().last());
    }

    #[test]
    fn test_all_on_except() {
        let stickers = StickerPattern::from_iter([("UL", 0b10)]);
        let pattern = StickerPattern::all_on_except(&stickers);
        assert_eq!(26, pattern.len());
        assert_eq!(Some(0b10), pattern.get("UL"));
        assert_eq!(None, pattern.get("LU"));
        assert_eq!(Some(ALL_ON), pattern.get("FRU"));
        assert_eq!(Some(ALL_ON), pattern.get("D"));
    }
}
