//! # Reordering (L2)
//!
//! Turns resolved embedding levels into visual order: for each level from
//! the highest produced down to 1, every maximal stretch of positions at
//! or above that level gets reversed. Operates on a per-glyph level array
//! rather than the run list directly, since L2 works at character
//! granularity regardless of how coarsely the runs tiled the text.

use crate::run::RunList;
use crate::types::EmbeddingLevel;
use crate::ReorderTarget;

/// Expand `list`'s runs into one level per glyph position, `len` long.
pub(crate) fn levels_per_glyph(list: &RunList, len: usize) -> Vec<EmbeddingLevel> {
    let mut out = vec![0; len];
    for idx in list.non_sentinel_indices() {
        let run = list.get(idx);
        for level in &mut out[run.pos..run.pos + run.len] {
            *level = run.level;
        }
    }
    out
}

/// Reverse every maximal run of positions whose level is `>= level`, for
/// `level` descending from `max_level` to 1, applying the reversal to
/// `target`.
pub(crate) fn reorder(per_glyph_levels: &[EmbeddingLevel], max_level: EmbeddingLevel, target: &mut ReorderTarget) {
    let len = per_glyph_levels.len();
    let mut level = max_level;
    while level >= 1 {
        let mut i = 0;
        while i < len {
            if per_glyph_levels[i] >= level {
                let start = i;
                while i < len && per_glyph_levels[i] >= level {
                    i += 1;
                }
                target.reverse_range(start, i);
            } else {
                i += 1;
            }
        }
        level -= 1;
    }
}
