//! Splitting of long literals into separately declared chunks.
//!
//! A class file string constant is capped at 65535 bytes. [`SAFE_CHAR_LIMIT`]
//! stays under that cap even if every code unit expands to a six character
//! `\uXXXX` escape.

use tracing::debug;

use crate::escape::escape_utf16;

/// Maximum number of UTF-16 code units placed in one literal.
pub const SAFE_CHAR_LIMIT: usize = (65535 - 5) / 6;

/// Comment placed in front of a concatenated expression.
pub const WORKAROUND_COMMENT: &str = "/* 64KB byte limit workaround via appending large strings */ ";

/// One named piece of split literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub name: String,
    /// Escaped text including the surrounding double quotes
    pub literal: String,
}

/// Ordered set of chunks produced during one generation run, together with
/// the counter that names them.
#[derive(Debug, Clone)]
pub struct ChunkRegistry {
    prefix: String,
    next_id: usize,
    chunks: Vec<Chunk>,
}

impl ChunkRegistry {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_id: 0,
            chunks: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Produce the next member name: `<prefix>0`, `<prefix>1`, ...
    pub fn next_name(&mut self) -> String {
        let name = format!("{}{}", self.prefix, self.next_id);
        self.next_id += 1;
        name
    }

    pub fn register(&mut self, name: String, literal: String) {
        self.chunks.push(Chunk { name, literal });
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }
}

fn quote(units: &[u16]) -> String {
    format!("\"{}\"", escape_utf16(units))
}

/// Render `text` as a single Java expression of type `String`.
///
/// Short text becomes one quoted literal. Text longer than
/// [`SAFE_CHAR_LIMIT`] code units is split into blocks that are registered
/// in `registry`, and the expression joins their names with `+`.
pub fn embed_literal(indent: usize, text: &str, registry: &mut ChunkRegistry) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    embed_units(indent, &units, SAFE_CHAR_LIMIT, registry)
}

fn embed_units(indent: usize, units: &[u16], limit: usize, registry: &mut ChunkRegistry) -> String {
    let mut out = " ".repeat(indent);

    if units.len() <= limit {
        out.push_str(&quote(units));
        return out;
    }

    out.push_str(WORKAROUND_COMMENT);

    let block_count = units.len().div_ceil(limit);
    debug!(
        code_units = units.len(),
        limit, block_count, "splitting literal into chunks"
    );

    // chunks() yields full blocks and a shorter final block only when there is a remainder
    let names: Vec<String> = units
        .chunks(limit)
        .map(|block| {
            let name = registry.next_name();
            registry.register(name.clone(), quote(block));
            name
        })
        .collect();

    out.push_str(&names.join(" + "));
    out
}
