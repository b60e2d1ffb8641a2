//! # Implicit resolver (I1–I2)
//!
//! The last rewrite pass before mirroring and reordering: every run's
//! resolved type is folded into its embedding level, and after this point
//! only levels matter (L2 reorders by level, not by type). Returns the
//! highest level produced, since the reorderer needs it as its starting
//! point.

use crate::run::RunList;
use crate::types::{dir_to_level, EmbeddingLevel};

/// I1 (numbers round up to the next even level) and I2 (letters move toward
/// the level whose parity matches their own direction). Runs `compact_list`
/// afterward since distinct types can now land on the same level.
///
/// `max_level` starts at `base_level` per spec.md §4.6 — redundant in
/// practice since every run's level only ever moves up from there, but
/// kept to match the written contract.
pub(crate) fn resolve_implicit(list: &mut RunList, base_level: EmbeddingLevel) -> EmbeddingLevel {
    let mut max_level = base_level;

    for idx in list.non_sentinel_indices() {
        let run = list.get(idx);
        let level = run.level;
        let new_level = if run.ty.is_number() {
            (level + 2) & !1
        } else {
            (level ^ dir_to_level(run.ty)) + (level & 1)
        };
        list.get_mut(idx).level = new_level;
        max_level = max_level.max(new_level);
    }

    list.compact_list();
    max_level
}
