//! # Explicit resolver
//!
//! Per spec.md §4.3, this core does not process embedding codes: every
//! non-sentinel run is simply stamped with the paragraph base level. Any
//! LRE/RLE/PDF/LRI/RLI/FSI/PDI semantics present in the input are
//! flattened away here — callers must not rely on them being honoured.

use crate::run::RunList;
use crate::types::EmbeddingLevel;

pub(crate) fn resolve_explicit(list: &mut RunList, base_level: EmbeddingLevel) {
    for idx in list.non_sentinel_indices() {
        list.get_mut(idx).level = base_level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::build_runs;
    use crate::types::BidiType;

    #[test]
    fn stamps_every_run_with_base_level() {
        let mut list = build_runs(&[0, 1, 2], 3, |g| match g {
            0 => BidiType::Ltr,
            1 => BidiType::Rtl,
            _ => BidiType::On,
        });
        resolve_explicit(&mut list, 1);
        for idx in list.non_sentinel_indices() {
            assert_eq!(list.get(idx).level, 1);
        }
    }

    #[test]
    fn sentinels_are_untouched() {
        let mut list = build_runs(&[0], 1, |_| BidiType::Ltr);
        resolve_explicit(&mut list, 1);
        assert_eq!(list.get(list.head()).level, crate::types::SENTINEL_LEVEL);
        assert_eq!(list.get(list.tail()).level, crate::types::SENTINEL_LEVEL);
    }
}
