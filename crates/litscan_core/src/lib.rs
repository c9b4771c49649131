//! litscan_core: Source text primitives shared by the literal scanners.
//!
//! Provides byte ranges, offset-to-line mapping for diagnostics, and the
//! character classification helpers used by the whitespace policies.

pub mod char_codes;
pub mod text;

// Re-export commonly used types
pub use text::{text_pos, LineAndColumn, LineMap, TextPos, TextRange};
