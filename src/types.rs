//! # Bidi type domains
//!
//! The glyph and class types the resolver operates on, plus the small set
//! of predicates the W/N/I rules dispatch on. None of this interprets a
//! glyph's value beyond opacity — classification is always the caller's job,
//! supplied as a plain closure at the call site (see [`crate::reorder_glyphs`]).

/// An opaque glyph code point identifier supplied by the caller.
///
/// The core never interprets this beyond passing it to the classifier and
/// mirror callbacks and moving it around during reordering.
pub type Glyph = u32;

/// The resolved Bidi class of a glyph.
///
/// Mirrors the categories of UAX #9 that this core actually resolves.
/// Explicit formatting codes (LRE/RLE/PDF/LRI/RLI/FSI/PDI) are deliberately
/// absent — see spec.md §1 Non-goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidiType {
    /// Strong left-to-right (Latin, CJK, ...).
    Ltr,
    /// Strong right-to-left (Hebrew).
    Rtl,
    /// Strong right-to-left Arabic letter.
    Al,
    /// European number.
    En,
    /// Arabic number.
    An,
    /// European number separator (`+`, `-`).
    Es,
    /// European number terminator (`$`, `%`).
    Et,
    /// Common number separator (`,`, `.`, `:`).
    Cs,
    /// Non-spacing mark.
    Nsm,
    /// Boundary neutral.
    Bn,
    /// Whitespace.
    Ws,
    /// Other neutral.
    On,
    /// Paragraph separator.
    Bs,
    /// Segment separator.
    Ss,
    /// Start-of-text sentinel. Never returned by a classifier, never
    /// resolved, never reordered.
    Sot,
    /// End-of-text sentinel. Never returned by a classifier, never
    /// resolved, never reordered.
    Eot,
}

impl BidiType {
    /// A strong directional type: L, R, or AL.
    #[inline]
    pub fn is_strong(self) -> bool {
        matches!(self, BidiType::Ltr | BidiType::Rtl | BidiType::Al)
    }

    /// A strong type that also determines the paragraph's base direction
    /// (same set as [`Self::is_strong`] — kept distinct because the rules
    /// in spec.md §4.2 name it `IS_LETTER` rather than `IS_STRONG`).
    #[inline]
    pub fn is_letter(self) -> bool {
        self.is_strong()
    }

    /// EN or AN.
    #[inline]
    pub fn is_number(self) -> bool {
        matches!(self, BidiType::En | BidiType::An)
    }

    /// ES or CS — the separators W4 may rewrite.
    #[inline]
    pub fn is_es_or_cs(self) -> bool {
        matches!(self, BidiType::Es | BidiType::Cs)
    }

    /// ES, ET, or CS — what W6 sweeps into ON if nothing else claimed it.
    #[inline]
    pub fn is_number_separator_or_terminator(self) -> bool {
        matches!(self, BidiType::Es | BidiType::Et | BidiType::Cs)
    }

    /// WS, ON, BS, or SS.
    #[inline]
    pub fn is_neutral(self) -> bool {
        matches!(self, BidiType::Ws | BidiType::On | BidiType::Bs | BidiType::Ss)
    }

    /// Treat EN and AN as though they were R, per N1/N2's `NUMBER_TO_RTL`.
    #[inline]
    pub fn number_to_rtl(self) -> BidiType {
        if self.is_number() {
            BidiType::Rtl
        } else {
            self
        }
    }
}

/// An embedding level: 0 is the LTR paragraph base, 1 the RTL base; even
/// levels run left-to-right, odd levels right-to-left. Nesting depth in
/// practice never comes close to overflowing a `u8`.
pub type EmbeddingLevel = i16;

/// The sentinel level carried by SOT/EOT runs. Resolution passes iterate
/// `list.next ..= list.last.prev` and must never observe this value.
pub const SENTINEL_LEVEL: EmbeddingLevel = -1;

/// Paragraph or embedding direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// `LEVEL_TO_DIR(l) = (l & 1) ? RTL : LTR`.
    #[inline]
    pub fn from_level(level: EmbeddingLevel) -> Direction {
        if level & 1 != 0 {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// `DIR_TO_LEVEL(d) = (d == RTL) ? 1 : 0`.
    #[inline]
    pub fn to_level(self) -> EmbeddingLevel {
        match self {
            Direction::Rtl => 1,
            Direction::Ltr => 0,
        }
    }

    /// The `BidiType` a strong character of this direction resolves to
    /// (AL also maps to RTL in `DIR_TO_LEVEL`, but a `Direction` only ever
    /// carries the two base cases).
    #[inline]
    pub fn as_bidi_type(self) -> BidiType {
        match self {
            Direction::Ltr => BidiType::Ltr,
            Direction::Rtl => BidiType::Rtl,
        }
    }
}

/// `DIR_TO_LEVEL` applied directly to a strong `BidiType` (AL counts as RTL).
#[inline]
pub(crate) fn dir_to_level(ty: BidiType) -> EmbeddingLevel {
    match ty {
        BidiType::Rtl | BidiType::Al => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_direction_roundtrip() {
        assert_eq!(Direction::from_level(0), Direction::Ltr);
        assert_eq!(Direction::from_level(1), Direction::Rtl);
        assert_eq!(Direction::from_level(2), Direction::Ltr);
        assert_eq!(Direction::from_level(3), Direction::Rtl);
        assert_eq!(Direction::Ltr.to_level(), 0);
        assert_eq!(Direction::Rtl.to_level(), 1);
    }

    #[test]
    fn predicates() {
        assert!(BidiType::Al.is_strong());
        assert!(!BidiType::En.is_strong());
        assert!(BidiType::En.is_number());
        assert!(BidiType::An.is_number());
        assert!(BidiType::Es.is_es_or_cs());
        assert!(BidiType::Cs.is_es_or_cs());
        assert!(!BidiType::Et.is_es_or_cs());
        assert!(BidiType::Et.is_number_separator_or_terminator());
        assert!(BidiType::Ws.is_neutral());
        assert!(!BidiType::Nsm.is_neutral());
    }

    #[test]
    fn number_to_rtl_maps_only_numbers() {
        assert_eq!(BidiType::En.number_to_rtl(), BidiType::Rtl);
        assert_eq!(BidiType::An.number_to_rtl(), BidiType::Rtl);
        assert_eq!(BidiType::Ltr.number_to_rtl(), BidiType::Ltr);
        assert_eq!(BidiType::On.number_to_rtl(), BidiType::On);
    }

    #[test]
    fn dir_to_level_treats_al_as_rtl() {
        assert_eq!(dir_to_level(BidiType::Al), 1);
        assert_eq!(dir_to_level(BidiType::Rtl), 1);
        assert_eq!(dir_to_level(BidiType::Ltr), 0);
    }
}
