//! # bidicore-cli
//!
//! A small inspection tool for exercising the library end-to-end against a
//! JSON glyph-run fixture. Not part of the algorithmic core — its fixture
//! schema and flags are a non-normative convenience layer (`SPEC_FULL.md`
//! §2).
//!
//! Usage:
//!   bidicore-cli run.json
//!   echo '{ "text": "abc" }' | bidicore-cli --mirror

mod error;

use bidicore::{reorder_glyphs, BidiType, Glyph};
use error::BidiCliError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::{self, Read};

#[derive(Deserialize)]
struct Fixture {
    text: String,
    #[serde(default)]
    pel: Option<i16>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let mirror_enabled = args.iter().any(|a| a == "--mirror");
    let input_path = args.iter().skip(1).find(|a| !a.starts_with('-'));

    let input = match read_input(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&input, mirror_enabled) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn read_input(path: Option<&String>) -> Result<String, BidiCliError> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|source| BidiCliError::Io {
            path: p.clone(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| BidiCliError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn run(input: &str, mirror_enabled: bool) -> Result<(), BidiCliError> {
    let fixture: Fixture = serde_json::from_str(input)?;
    let mut glyphs: Vec<Glyph> = fixture.text.chars().map(|c| c as Glyph).collect();

    let mirror = mirror_enabled.then_some(builtin_mirror as fn(Glyph) -> Option<Glyph>);
    let max_level = reorder_glyphs(&mut glyphs, builtin_classify, mirror, fixture.pel);

    let visual: String = glyphs.iter().filter_map(|&g| char::from_u32(g)).collect();
    println!("max level: {}", max_level);
    println!("visual order: {}", visual);
    Ok(())
}

/// A coarse, demo-only classifier covering the Unicode blocks most likely
/// to show up in a quick fixture: Latin, Hebrew, Arabic, ASCII digits and
/// punctuation. Real callers are expected to supply their own classifier
/// backed by the Unicode Character Database.
fn builtin_classify(g: Glyph) -> BidiType {
    match g {
        0x0030..=0x0039 => BidiType::En,
        0x0041..=0x005A | 0x0061..=0x007A => BidiType::Ltr,
        0x0591..=0x05F4 => BidiType::Rtl,
        0x0600..=0x06FF => BidiType::Al,
        0x000A | 0x000D => BidiType::Bs,
        0x0009 => BidiType::Ss,
        0x000B | 0x000C | 0x0020 => BidiType::Ws,
        0x002B | 0x002D => BidiType::Es,
        0x0023 | 0x0024 | 0x0025 => BidiType::Et,
        0x002C | 0x002E | 0x003A => BidiType::Cs,
        _ => BidiType::On,
    }
}

fn builtin_mirror(g: Glyph) -> Option<Glyph> {
    match g {
        0x0028 => Some(0x0029), // ( -> )
        0x0029 => Some(0x0028), // ) -> (
        0x005B => Some(0x005D), // [ -> ]
        0x005D => Some(0x005B), // ] -> [
        0x007B => Some(0x007D), // { -> }
        0x007D => Some(0x007B), // } -> {
        0x003C => Some(0x003E), // < -> >
        0x003E => Some(0x003C), // > -> <
        _ => None,
    }
}
