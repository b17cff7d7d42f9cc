//! Input fingerprints for external memoization.
//!
//! The core never caches. Callers that recompute on every slider drag can key
//! their own cache on a [`LayoutKey`] instead of cloning the unit list.

use std::fmt;

use blake3::{Hash, Hasher};
use serde::{Serialize, Serializer};

use crate::unit::UnitSpec;

/// blake3 digest of `(total_width, units)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutKey(Hash);

impl LayoutKey {
    /// Fingerprint exactly what the allocator and splitter read. Widths are
    /// hashed bit-for-bit, so `0.0` and `-0.0` produce different keys.
    pub fn of(total_width: f64, units: &[UnitSpec]) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(&total_width.to_bits().to_le_bytes());
        hasher.update(&(units.len() as u64).to_le_bytes());
        for unit in units {
            hasher.update(&(unit.id.len() as u64).to_le_bytes());
            hasher.update(unit.id.as_bytes());
            hasher.update(&[u8::from(unit.elastic), unit.kind.tag()]);
            hasher.update(&unit.width.to_bits().to_le_bytes());
        }
        Self(hasher.finalize())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl fmt::Display for LayoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for LayoutKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.to_hex().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitKind;

    fn units() -> Vec<UnitSpec> {
        vec![
            UnitSpec::fixed("left", 450.0),
            UnitSpec::elastic("mid"),
            UnitSpec::fixed("corner", 900.0).with_kind(UnitKind::Corner),
        ]
    }

    #[test]
    fn equal_inputs_share_a_key() {
        assert_eq!(LayoutKey::of(3000.0, &units()), LayoutKey::of(3000.0, &units()));
    }

    #[test]
    fn any_input_change_moves_the_key() {
        let base = LayoutKey::of(3000.0, &units());

        assert_ne!(base, LayoutKey::of(3050.0, &units()));

        let mut reordered = units();
        reordered.swap(0, 1);
        assert_ne!(base, LayoutKey::of(3000.0, &reordered));

        let mut rekinded = units();
        rekinded[2].kind = UnitKind::Drawers;
        assert_ne!(base, LayoutKey::of(3000.0, &rekinded));

        let mut toggled = units();
        toggled[1].elastic = false;
        assert_ne!(base, LayoutKey::of(3000.0, &toggled));
    }

    #[test]
    fn id_boundaries_are_unambiguous() {
        let split_ids = vec![UnitSpec::elastic("ab"), UnitSpec::elastic("c")];
        let joined_ids = vec![UnitSpec::elastic("a"), UnitSpec::elastic("bc")];
        assert_ne!(
            LayoutKey::of(1000.0, &split_ids),
            LayoutKey::of(1000.0, &joined_ids)
        );
    }

    #[test]
    fn displays_as_hex() {
        let key = LayoutKey::of(1000.0, &[]);
        let text = key.to_string();
        assert_eq!(text.len(), 64);
        assert!(text.chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}
