//! # Mirroring (L4)
//!
//! Substitutes each glyph on an odd (RTL) level for its mirrored
//! counterpart, where the caller's `mirror` callback provides one. This is
//! the only stage that touches glyph *content* rather than type or level.

use crate::run::RunList;
use crate::types::Glyph;

/// Walk every run at an odd level and overwrite `glyphs[pos..pos+len]` in
/// place with `mirror`'s output, where it returns `Some`.
pub(crate) fn apply_mirroring(list: &RunList, glyphs: &mut [Glyph], mirror: &impl Fn(Glyph) -> Option<Glyph>) {
    for idx in list.non_sentinel_indices() {
        let run = list.get(idx);
        if run.level & 1 == 0 {
            continue;
        }
        for g in &mut glyphs[run.pos..run.pos + run.len] {
            if let Some(mirrored) = mirror(*g) {
                *g = mirrored;
            }
        }
    }
}
