//! # Neutral resolver (N1–N2)
//!
//! Runs after W1–W7 have settled every weak type. Numbers are treated as R
//! for the purposes of this pass (`NUMBER_TO_RTL`, spec.md §4.5) since they
//! reorder like RTL text even though they aren't a strong type.

use crate::run::RunList;
use crate::types::{BidiType, Direction};

/// N1 (neutral run between two runs of the same resolved direction takes
/// that direction) and N2 (otherwise it takes the embedding direction).
pub(crate) fn resolve_neutral(list: &mut RunList) {
    let mut cur = list.first();

    while let Some(idx) = cur {
        if idx == list.tail() {
            break;
        }
        let this_ty = list.get(idx).ty;
        if this_ty.is_neutral() {
            let prev_idx = list.get(idx).prev.unwrap();
            let next_idx = list.get(idx).next.unwrap();
            let prev_ty = list.get(prev_idx).ty.number_to_rtl();
            let next_ty = list.get(next_idx).ty.number_to_rtl();

            list.get_mut(idx).ty = if prev_ty == next_ty {
                prev_ty
            } else {
                Direction::from_level(list.get(idx).level).as_bidi_type()
            };
        }
        cur = list.get(idx).next;
    }

    list.compact_list();
}
