//! # Paragraph resolver (P2/P3 approximation)
//!
//! Scans the run list for the first strong character and derives the
//! paragraph base level/direction from it, per spec.md §4.2. A caller
//! supplying `pel ∈ {0, 1}` bypasses the scan entirely — see
//! [`resolve_base_level`].

use crate::run::RunList;
use crate::types::{dir_to_level, Direction, EmbeddingLevel};

/// Scan `list` for the first letter (L, R, or AL) and derive
/// `(base_dir, base_level)` from it. Defaults to LTR/level 0 if no letter
/// is found, matching the original's `bidi_resolveParagraphs`.
pub(crate) fn resolve_paragraph(list: &RunList) -> (Direction, EmbeddingLevel) {
    let mut cur = list.first();
    while let Some(idx) = cur {
        let run = list.get(idx);
        if run.ty.is_letter() {
            let level = dir_to_level(run.ty);
            return (Direction::from_level(level), level);
        }
        cur = run.next.filter(|&n| n != list.tail());
    }
    (Direction::Ltr, 0)
}

/// Resolve the base level either from the caller's override or by scanning
/// the paragraph. `pel` outside `{0, 1}` means "auto-detect" per spec.md
/// §4.2's caller-override contract.
pub(crate) fn resolve_base_level(list: &RunList, pel: Option<EmbeddingLevel>) -> (Direction, EmbeddingLevel) {
    match pel {
        Some(level @ (0 | 1)) => (Direction::from_level(level), level),
        _ => resolve_paragraph(list),
    }
}
