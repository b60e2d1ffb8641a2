//! # Run list
//!
//! A doubly-linked list of typed runs bracketed by SOT/EOT sentinels,
//! stored as an arena (`Vec<Run>`) with `Option<usize>` links instead of
//! pointers — same shape the teacher uses for its Knuth-Plass breakpoint
//! chain, just applied to runs instead of line breaks.
//!
//! SOT always lives at arena index 0, EOT at index 1; every other run is
//! appended after them and spliced into the chain. Sentinels are never
//! touched by a resolution pass — passes walk `next(head) ..= prev(tail)`.

use crate::types::{BidiType, EmbeddingLevel, Glyph, SENTINEL_LEVEL};

#[derive(Debug, Clone)]
pub(crate) struct Run {
    pub ty: BidiType,
    pub pos: usize,
    pub len: usize,
    pub level: EmbeddingLevel,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// The arena-backed run list for one resolution call.
pub(crate) struct RunList {
    arena: Vec<Run>,
    head: usize,
    tail: usize,
}

impl RunList {
    pub fn head(&self) -> usize {
        self.head
    }

    pub fn tail(&self) -> usize {
        self.tail
    }

    pub fn get(&self, idx: usize) -> &Run {
        &self.arena[idx]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut Run {
        &mut self.arena[idx]
    }

    /// `true` iff `idx` is a sentinel (SOT or EOT).
    pub fn is_sentinel(&self, idx: usize) -> bool {
        idx == self.head || idx == self.tail
    }

    /// The first non-sentinel run, if the input was non-empty.
    pub fn first(&self) -> Option<usize> {
        self.get(self.head).next.filter(|&n| n != self.tail)
    }

    /// Indices of every non-sentinel run, in order. Collected eagerly since
    /// passes mutate and merge the list as they walk it.
    pub fn non_sentinel_indices(&self) -> Vec<usize> {
        let mut out = Vec::new();
        let mut cur = self.get(self.head).next;
        while let Some(idx) = cur {
            if idx == self.tail {
                break;
            }
            out.push(idx);
            cur = self.get(idx).next;
        }
        out
    }

    /// Append a new run after `after`, splicing it into the chain. Returns
    /// the new run's index. Does not fix up `len` on the predecessor — the
    /// builder does that once it knows where the run ends.
    fn splice_after(&mut self, after: usize, run: Run) -> usize {
        let idx = self.arena.len();
        let old_next = self.arena[after].next;
        self.arena.push(run);
        self.arena[idx].prev = Some(after);
        self.arena[idx].next = old_next;
        self.arena[after].next = Some(idx);
        if let Some(n) = old_next {
            self.arena[n].prev = Some(idx);
        }
        idx
    }

    /// Merge run `second` into its predecessor, retaining the
    /// predecessor's type. Returns the predecessor's index. `second` stays
    /// in the arena (unreachable, never freed — Rust drops the whole arena
    /// at the end of the call instead of the original's per-node `free`).
    pub fn merge_with_prev(&mut self, second: usize) -> usize {
        let first = self.arena[second].prev.expect("merge target has no prev");
        let second_next = self.arena[second].next;
        let second_len = self.arena[second].len;

        self.arena[first].next = second_next;
        if let Some(n) = second_next {
            self.arena[n].prev = Some(first);
        }
        self.arena[first].len += second_len;
        first
    }

    /// Merge adjacent runs with identical type **and** level (used after
    /// N1/N2 and after I1/I2).
    pub fn compact_list(&mut self) {
        let mut cur = self.get(self.head).next;
        while let Some(idx) = cur {
            if idx == self.tail {
                break;
            }
            let prev = self.get(idx).prev.unwrap();
            let next = self.get(idx).next;
            if self.get(prev).ty == self.get(idx).ty && self.get(prev).level == self.get(idx).level
            {
                self.merge_with_prev(idx);
                cur = next;
            } else {
                cur = next;
            }
        }
    }

    /// Merge adjacent runs that share a level and either share a type or
    /// are both neutral (used after W1–W7, ahead of N1/N2).
    pub fn compact_neutrals(&mut self) {
        let mut cur = self.get(self.head).next;
        while let Some(idx) = cur {
            if idx == self.tail {
                break;
            }
            let prev = self.get(idx).prev.unwrap();
            let next = self.get(idx).next;
            let same_level = self.get(prev).level == self.get(idx).level;
            let mergeable = same_level
                && (self.get(prev).ty == self.get(idx).ty
                    || (self.get(prev).ty.is_neutral() && self.get(idx).ty.is_neutral()));
            if mergeable {
                self.merge_with_prev(idx);
                cur = next;
            } else {
                cur = next;
            }
        }
    }
}

/// Scan `glyphs[0..len]`, classify each position, and emit one run per
/// maximal same-class span, bracketed by SOT/EOT sentinels.
///
/// `classify` is total: spec.md §6.1 requires it never to return
/// `Sot`/`Eot`. As a defensive normalization (spec.md §7: "an
/// implementation SHOULD treat unknowns as ON"), a classifier that
/// violates this is clamped to `On` rather than trusted.
pub(crate) fn build_runs(
    glyphs: &[Glyph],
    len: usize,
    mut classify: impl FnMut(Glyph) -> BidiType,
) -> RunList {
    let sot = Run {
        ty: BidiType::Sot,
        pos: 0,
        len: 0,
        level: SENTINEL_LEVEL,
        prev: None,
        next: None,
    };
    let eot = Run {
        ty: BidiType::Eot,
        pos: len,
        len: 0,
        level: SENTINEL_LEVEL,
        prev: None,
        next: None,
    };
    let mut list = RunList {
        arena: Vec::with_capacity(len + 2),
        head: 0,
        tail: 1,
    };
    list.arena.push(sot);
    list.arena.push(eot);
    list.arena[0].next = Some(1);
    list.arena[1].prev = Some(0);

    let mut last = list.head;
    let mut run_start = 0usize;
    for i in 0..len {
        let ty = normalize_classifier_output(classify(glyphs[i]));
        if ty != list.get(last).ty || last == list.head {
            if last != list.head {
                list.get_mut(last).len = i - run_start;
            }
            let idx = list.splice_after(
                last,
                Run {
                    ty,
                    pos: i,
                    len: 0,
                    level: 0,
                    prev: None,
                    next: None,
                },
            );
            last = idx;
            run_start = i;
        }
    }
    if last != list.head {
        list.get_mut(last).len = len - run_start;
    }

    list
}

/// See spec.md §7: classifiers must never emit SOT/EOT; clamp to ON if one
/// does rather than let a sentinel type escape into a resolution pass.
fn normalize_classifier_output(ty: BidiType) -> BidiType {
    match ty {
        BidiType::Sot | BidiType::Eot => BidiType::On,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_letters(g: Glyph) -> BidiType {
        match g {
            0 => BidiType::Ltr,
            1 => BidiType::Rtl,
            2 => BidiType::En,
            _ => BidiType::On,
        }
    }

    #[test]
    fn empty_input_has_only_sentinels() {
        let list = build_runs(&[], 0, classify_letters);
        assert_eq!(list.first(), None);
        assert_eq!(list.get(list.tail()).pos, 0);
    }

    #[test]
    fn single_run_tiles_exactly() {
        let glyphs = [0, 0, 0];
        let list = build_runs(&glyphs, glyphs.len(), classify_letters);
        let idxs = list.non_sentinel_indices();
        assert_eq!(idxs.len(), 1);
        let r = list.get(idxs[0]);
        assert_eq!((r.pos, r.len, r.ty), (0, 3, BidiType::Ltr));
    }

    #[test]
    fn tiling_has_no_gaps_or_overlaps() {
        let glyphs = [0, 0, 1, 2, 2, 3];
        let list = build_runs(&glyphs, glyphs.len(), classify_letters);
        let idxs = list.non_sentinel_indices();
        let mut expected_pos = 0;
        for idx in &idxs {
            let r = list.get(*idx);
            assert_eq!(r.pos, expected_pos);
            assert!(r.len >= 1);
            expected_pos += r.len;
        }
        assert_eq!(expected_pos, glyphs.len());
    }

    #[test]
    fn sentinels_bracket_the_list() {
        let glyphs = [0, 1];
        let list = build_runs(&glyphs, glyphs.len(), classify_letters);
        assert_eq!(list.get(list.head()).ty, BidiType::Sot);
        assert_eq!(list.get(list.tail()).ty, BidiType::Eot);
        assert_eq!(list.get(list.head()).level, SENTINEL_LEVEL);
        assert_eq!(list.get(list.tail()).level, SENTINEL_LEVEL);
    }

    #[test]
    fn compact_list_merges_same_type_and_level() {
        let glyphs = [0, 1];
        let mut list = build_runs(&glyphs, glyphs.len(), classify_letters);
        assert_eq!(list.non_sentinel_indices().len(), 2);
        // Simulate a resolution pass that rewrote the second run's type to
        // match the first (both now level 0, as the builder leaves them).
        let second = list.non_sentinel_indices()[1];
        list.get_mut(second).ty = BidiType::Ltr;

        list.compact_list();
        let idxs = list.non_sentinel_indices();
        assert_eq!(idxs.len(), 1);
        assert_eq!(list.get(idxs[0]).len, 2);
    }
}
