//! Embed the content of a UTF-8 text file in generated Java source as a
//! `String` constant, splitting it into concatenated chunks when it is too
//! long for a single literal.

pub mod chunk;
pub mod class;
pub mod config;
pub mod error;
pub mod escape;
pub mod generate;

pub use chunk::{embed_literal, Chunk, ChunkRegistry, SAFE_CHAR_LIMIT};
pub use class::{create_class_for_static_text, TargetClass};
pub use error::{EscapeError, InjectError};
pub use escape::{escape_java_literal, escape_optional, escape_utf16, unescape_java_literal};
pub use generate::{generate, render_only, GenerateOutcome, GenerateRequest};
