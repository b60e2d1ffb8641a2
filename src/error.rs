//! Error type for the demo CLI's JSON fixture layer.
//!
//! The core resolver (`lib.rs` and the nine resolver modules) never returns
//! a `Result` — see `SPEC_FULL.md` §7, it cannot fail by construction. This
//! type only covers the ambient, non-normative convenience layer that reads
//! a glyph-run fixture off disk or stdin.

use thiserror::Error;

/// Errors surfaced by `bidicore-cli` while decoding a glyph-run fixture.
#[derive(Debug, Error)]
pub enum BidiCliError {
    #[error("failed to parse glyph-run fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read fixture file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
