//! # bidicore
//!
//! A from-scratch core for resolving and reordering mixed left-to-right
//! and right-to-left text, covering the narrowed slice of UAX #9 spelled
//! out in `SPEC_FULL.md`: weak-type resolution (W1–W7), neutral resolution
//! (N1–N2), implicit level assignment (I1–I2), and visual reordering (L2),
//! plus mirrored-glyph substitution (L4).
//!
//! Explicit directional formatting codes, isolates, overrides, and
//! bracket-pair (BD16/N0) resolution are out of scope — callers that need
//! those should pre-flatten embeddings before calling in.
//!
//! ## Architecture
//!
//! ```text
//! glyphs
//!    |
//!    v
//! [run]        build one run per maximal same-class span (+ SOT/EOT)
//!    |
//! [paragraph]  detect base direction (or take the caller's override)
//!    |
//! [explicit]   stamp every run with the base level (no embedding codes)
//!    |
//! [weak]       W1-W7
//!    |
//! [neutral]    N1-N2
//!    |
//! [implicit]   I1-I2 -> per-run embedding levels, plus the max level
//!    |
//! [mirror]     L4, glyph content only
//!    |
//! [reorder]    L2, logical -> visual order
//! ```
//!
//! Every call is synchronous, single-threaded, and independent of every
//! other call — there is no state shared across calls. See `SPEC_FULL.md`
//! §5.

mod explicit;
mod implicit;
mod mirror;
mod neutral;
mod paragraph;
mod reorder;
mod run;
mod types;
mod weak;

pub use types::{BidiType, Direction, EmbeddingLevel, Glyph};

use run::build_runs;

/// Where a reversal step during [`reorder_glyphs`]/[`compute_embedding_levels`]
/// should land, expressed as a tagged sum rather than a raw callback pointer
/// (`SPEC_FULL.md` §6, following design note §9's suggestion).
pub enum ReorderTarget<'a> {
    /// Reverse stretches of this glyph buffer directly.
    Glyphs(&'a mut [Glyph]),
    /// Reverse stretches of a parallel level buffer (used when a caller
    /// wants levels reported in visual rather than logical order).
    Levels(&'a mut [EmbeddingLevel]),
    /// Hand each reversed half-open range `[start, end)` to the caller,
    /// which owns whatever parallel data (glyph IDs, cluster maps, ...)
    /// needs the same treatment.
    Callback(&'a mut dyn FnMut(usize, usize)),
}

impl ReorderTarget<'_> {
    fn reverse_range(&mut self, start: usize, end: usize) {
        match self {
            ReorderTarget::Glyphs(buf) => buf[start..end].reverse(),
            ReorderTarget::Levels(buf) => buf[start..end].reverse(),
            ReorderTarget::Callback(cb) => cb(start, end),
        }
    }
}

/// Build the run list, resolve paragraph direction, and run W1-W7/N1-N2/I1-I2
/// over it. Shared by every public entry point below.
fn resolve(
    glyphs: &[Glyph],
    classify: impl Fn(Glyph) -> BidiType,
    pel: Option<EmbeddingLevel>,
) -> (run::RunList, EmbeddingLevel) {
    let len = glyphs.len();
    let mut list = build_runs(glyphs, len, classify);
    tracing::trace!(run_count = list.non_sentinel_indices().len(), "runs built");

    let (base_dir, base_level) = paragraph::resolve_base_level(&list, pel);
    tracing::trace!(?base_dir, base_level, "paragraph resolved");

    explicit::resolve_explicit(&mut list, base_level);
    tracing::trace!("explicit levels stamped");

    weak::resolve_weak(&mut list, base_dir);
    tracing::trace!(run_count = list.non_sentinel_indices().len(), "weak types resolved");

    neutral::resolve_neutral(&mut list);
    tracing::trace!(run_count = list.non_sentinel_indices().len(), "neutral types resolved");

    let max_level = implicit::resolve_implicit(&mut list, base_level);
    tracing::trace!(max_level, "implicit levels resolved");

    (list, max_level)
}

/// Compute one embedding level per glyph in `glyphs`.
///
/// `classify` must be total — it is called once per glyph and must never
/// return [`BidiType::Sot`]/[`BidiType::Eot`] (see `SPEC_FULL.md` §7; a
/// classifier that does anyway has its output normalized to
/// [`BidiType::On`]).
///
/// `pel` overrides the detected paragraph embedding level when it is `0` or
/// `1`; any other value (including `None`) means "auto-detect from the
/// first strong character" (`SPEC_FULL.md` §4.2).
///
/// If `visual_order` is `true`, the returned levels are permuted into the
/// same visual order [`reorder_glyphs`] would produce for the glyph buffer
/// itself — useful when a caller wants to reorder levels and glyphs through
/// the same code path.
pub fn compute_embedding_levels(
    glyphs: &[Glyph],
    classify: impl Fn(Glyph) -> BidiType,
    pel: Option<EmbeddingLevel>,
    visual_order: bool,
) -> Vec<EmbeddingLevel> {
    if glyphs.is_empty() {
        return Vec::new();
    }
    let (list, max_level) = resolve(glyphs, classify, pel);
    let mut levels = reorder::levels_per_glyph(&list, glyphs.len());
    if visual_order {
        let source = levels.clone();
        let mut target = ReorderTarget::Levels(&mut levels);
        reorder::reorder(&source, max_level, &mut target);
    }
    levels
}

/// Resolve and reorder `glyphs` in place, returning the paragraph's
/// resolved maximum embedding level.
///
/// `mirror`, if supplied, is consulted for every glyph on an odd
/// (right-to-left) level and its result substituted in before reordering
/// (L4, `SPEC_FULL.md` §4.7). `pel` has the same override semantics as in
/// [`compute_embedding_levels`].
pub fn reorder_glyphs(
    glyphs: &mut [Glyph],
    classify: impl Fn(Glyph) -> BidiType,
    mirror: Option<impl Fn(Glyph) -> Option<Glyph>>,
    pel: Option<EmbeddingLevel>,
) -> EmbeddingLevel {
    if glyphs.is_empty() {
        return 0;
    }
    let (list, max_level) = resolve(glyphs, &classify, pel);

    if let Some(mirror) = mirror {
        mirror::apply_mirroring(&list, glyphs, &mirror);
        tracing::trace!("mirroring applied");
    }

    let levels = reorder::levels_per_glyph(&list, glyphs.len());
    let mut target = ReorderTarget::Glyphs(glyphs);
    reorder::reorder(&levels, max_level, &mut target);
    tracing::trace!(max_level, "glyphs reordered");

    max_level
}

/// Reverse `extra`'s `[start, end)` ranges in lockstep with the same
/// glyph buffer's reordering — the `ReorderTarget::Callback` case exposed
/// as a convenience wrapper for callers carrying one parallel array.
pub fn reorder_glyphs_with_parallel(
    glyphs: &mut [Glyph],
    classify: impl Fn(Glyph) -> BidiType,
    mirror: Option<impl Fn(Glyph) -> Option<Glyph>>,
    pel: Option<EmbeddingLevel>,
    mut on_reverse: impl FnMut(usize, usize),
) -> EmbeddingLevel {
    if glyphs.is_empty() {
        return 0;
    }
    let (list, max_level) = resolve(glyphs, &classify, pel);

    if let Some(mirror) = mirror {
        mirror::apply_mirroring(&list, glyphs, &mirror);
    }

    let levels = reorder::levels_per_glyph(&list, glyphs.len());
    {
        let mut target = ReorderTarget::Glyphs(glyphs);
        reorder::reorder(&levels, max_level, &mut target);
    }
    let mut target = ReorderTarget::Callback(&mut on_reverse);
    reorder::reorder(&levels, max_level, &mut target);

    max_level
}

/// Determine the base direction of `glyphs` by scanning for the first
/// strong character, defaulting to [`Direction::Ltr`] if none is found
/// (`SPEC_FULL.md` §4.9's thin wrapper over paragraph resolution).
pub fn base_direction(glyphs: &[Glyph], classify: impl Fn(Glyph) -> BidiType) -> Direction {
    let list = build_runs(glyphs, glyphs.len(), classify);
    paragraph::resolve_paragraph(&list).0
}
