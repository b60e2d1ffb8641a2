//! # Weak resolver (W1–W7)
//!
//! Two passes over the non-sentinel runs, because the rule dependencies
//! (W1↔W2, W4↔W5↔W7) do not factor into a single pass — see spec.md §4.4
//! and design note §9. Both passes walk the run list by following `next`
//! links directly rather than iterating a pre-collected index list, since
//! W1 can merge runs out from under a naive snapshot.

use crate::run::RunList;
use crate::types::{BidiType, Direction};

pub(crate) fn resolve_weak(list: &mut RunList, base_dir: Direction) {
    pass1_nsm_and_en_after_al(list, base_dir);
    pass2_separators_terminators_and_en_after_ltr(list, base_dir);
    list.compact_neutrals();
}

/// W1 (NSM takes the type of its predecessor, or merges into it when the
/// level matches) and W2 (EN after AL becomes AN), collapsed into one pass
/// by preemptively rewriting a following NSM when W2 fires.
fn pass1_nsm_and_en_after_al(list: &mut RunList, base_dir: Direction) {
    let mut last_strong = base_dir.as_bidi_type();
    let mut pp = list.first();

    while let Some(idx) = pp {
        if idx == list.tail() {
            break;
        }
        let prev_idx = list.get(idx).prev.unwrap();
        let next_idx = list.get(idx).next.unwrap();
        let prev_type = list.get(prev_idx).ty;
        let next_type = list.get(next_idx).ty;
        let this_type = list.get(idx).ty;

        if prev_type.is_strong() {
            last_strong = prev_type;
        }

        if this_type == BidiType::Nsm {
            if list.get(prev_idx).level == list.get(idx).level {
                list.merge_with_prev(idx);
            } else if list.is_sentinel(prev_idx) {
                // A leading NSM has no real predecessor to crib a level
                // run from; it inherits the paragraph's own direction
                // rather than the literal SOT tag (spec.md §8: "all-NSM
                // input must inherit from SOT → baseDir").
                list.get_mut(idx).ty = base_dir.as_bidi_type();
            } else {
                list.get_mut(idx).ty = prev_type;
            }
        } else if this_type == BidiType::En && last_strong == BidiType::Al {
            list.get_mut(idx).ty = BidiType::An;
            // Collapses the W1 dependency: a following NSM would otherwise
            // need a second pass to see this run's rewritten type.
            if next_type == BidiType::Nsm {
                list.get_mut(next_idx).ty = BidiType::An;
            }
        }

        pp = Some(next_idx);
    }
}

/// W3 (AL → R), W4 (single separator between like numbers), W5 (ET next
/// to EN), W6 (leftover separators/terminators → ON), W7 (EN after L).
fn pass2_separators_terminators_and_en_after_ltr(list: &mut RunList, base_dir: Direction) {
    let mut last_strong = base_dir.as_bidi_type();
    let mut w4 = true;
    let mut prev_type_org = BidiType::On;
    let mut pp = list.first();

    while let Some(idx) = pp {
        if idx == list.tail() {
            break;
        }
        let prev_idx = list.get(idx).prev.unwrap();
        let next_idx = list.get(idx).next.unwrap();
        let prev_type = list.get(prev_idx).ty;
        let next_type = list.get(next_idx).ty;

        if prev_type.is_strong() {
            last_strong = prev_type;
        }

        if list.get(idx).ty == BidiType::Al {
            list.get_mut(idx).ty = BidiType::Rtl;
            w4 = true;
            prev_type_org = BidiType::On;
            pp = Some(next_idx);
            continue;
        }

        // W4: a single ES/CS between two numbers of the same resolved type
        // becomes that type, but an ES between two ANs does not qualify —
        // see design note §9's open question, preserved as written.
        if w4
            && list.get(idx).len == 1
            && list.get(idx).ty.is_es_or_cs()
            && prev_type_org.is_number()
            && prev_type_org == next_type
            && (prev_type_org == BidiType::En || list.get(idx).ty == BidiType::Cs)
        {
            list.get_mut(idx).ty = prev_type;
        }
        w4 = true;

        // W5: ET adjacent to EN becomes EN.
        if list.get(idx).ty == BidiType::Et
            && (prev_type_org == BidiType::En || next_type == BidiType::En)
        {
            list.get_mut(idx).ty = BidiType::En;
            w4 = false;
        }

        // W6: any separator/terminator still standing becomes ON.
        if list.get(idx).ty.is_number_separator_or_terminator() {
            list.get_mut(idx).ty = BidiType::On;
        }

        // W7: EN after an LTR strong character becomes L.
        if list.get(idx).ty == BidiType::En && last_strong == BidiType::Ltr {
            list.get_mut(idx).ty = BidiType::Ltr;
            prev_type_org = if list.get(idx).level == list.get(next_idx).level {
                BidiType::En
            } else {
                BidiType::On
            };
        } else {
            prev_type_org = list.get(idx).ty;
        }

        pp = Some(next_idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::build_runs;
    use crate::types::BidiType;

    fn run_types(list: &crate::run::RunList) -> Vec<BidiType> {
        list.non_sentinel_indices()
            .into_iter()
            .map(|idx| list.get(idx).ty)
            .collect()
    }

    fn set_base_level(list: &mut crate::run::RunList, level: i16) {
        crate::explicit::resolve_explicit(list, level);
    }

    #[test]
    fn w2_en_after_al_becomes_an() {
        // AL, EN
        let mut list = build_runs(&[0, 1], 2, |g| match g {
            0 => BidiType::Al,
            _ => BidiType::En,
        });
        set_base_level(&mut list, 1);
        resolve_weak(&mut list, Direction::Rtl);
        let types = run_types(&list);
        assert_eq!(types, vec![BidiType::Rtl, BidiType::An]);
    }

    #[test]
    fn w4_single_es_between_en_becomes_en() {
        // R, EN, ES, EN — an RTL strong predecessor keeps the numbers as EN
        // rather than letting W7 sweep them to L (see DESIGN.md's note on
        // spec.md §8's EN-after-L scenarios).
        let mut list = build_runs(&[0, 1, 2, 1], 4, |g| match g {
            0 => BidiType::Rtl,
            1 => BidiType::En,
            _ => BidiType::Es,
        });
        set_base_level(&mut list, 1);
        resolve_weak(&mut list, Direction::Rtl);
        let types = run_types(&list);
        assert_eq!(types, vec![BidiType::Rtl, BidiType::En]);
    }

    #[test]
    fn w4_es_between_an_does_not_fire() {
        // AN, ES, AN — ES between ANs is preserved per the open question.
        let mut list = build_runs(&[0, 1, 0], 3, |g| match g {
            0 => BidiType::An,
            _ => BidiType::Es,
        });
        set_base_level(&mut list, 0);
        resolve_weak(&mut list, Direction::Ltr);
        let types = run_types(&list);
        assert_eq!(types, vec![BidiType::An, BidiType::On, BidiType::An]);
    }

    #[test]
    fn w5_et_adjacent_to_en_becomes_en() {
        // R, ET, EN — RTL predecessor again keeps W7 from reclassifying the
        // resulting EN as L.
        let mut list = build_runs(&[0, 1, 2], 3, |g| match g {
            0 => BidiType::Rtl,
            1 => BidiType::Et,
            _ => BidiType::En,
        });
        set_base_level(&mut list, 1);
        resolve_weak(&mut list, Direction::Rtl);
        let types = run_types(&list);
        assert_eq!(types, vec![BidiType::Rtl, BidiType::En]);
    }

    #[test]
    fn w7_en_after_ltr_becomes_ltr() {
        // L, EN
        let mut list = build_runs(&[0, 1], 2, |g| match g {
            0 => BidiType::Ltr,
            _ => BidiType::En,
        });
        set_base_level(&mut list, 0);
        resolve_weak(&mut list, Direction::Ltr);
        let types = run_types(&list);
        assert_eq!(types, vec![BidiType::Ltr]);
    }

    #[test]
    fn nsm_inherits_from_sot_when_leading() {
        // NSM, L — leading NSM inherits base direction via SOT.
        let mut list = build_runs(&[0, 1], 2, |g| match g {
            0 => BidiType::Nsm,
            _ => BidiType::Ltr,
        });
        set_base_level(&mut list, 0);
        resolve_weak(&mut list, Direction::Ltr);
        let types = run_types(&list);
        assert_eq!(types, vec![BidiType::Ltr]);
    }

    #[test]
    fn nsm_merges_when_level_matches_predecessor() {
        let mut list = build_runs(&[0, 1, 1], 3, |g| match g {
            0 => BidiType::Ltr,
            _ => BidiType::Nsm,
        });
        set_base_level(&mut list, 0);
        resolve_weak(&mut list, Direction::Ltr);
        let idxs = list.non_sentinel_indices();
        assert_eq!(idxs.len(), 1);
        assert_eq!(list.get(idxs[0]).len, 3);
    }
}
