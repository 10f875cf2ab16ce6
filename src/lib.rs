//! A minimal pattern matching engine with a single greedy forward pass.
//!
//! A pattern compiles to a small syntax tree ([`Node`]) which is then
//! interpreted against a subject string. Matching is anchored at both ends:
//! the verdict is true only when the whole subject is consumed. Quantifiers
//! are greedy and never backtrack — characters consumed by a repetition are
//! not given back, even if a later part of the pattern then fails.
//!
//! # Pattern syntax
//!
//! | Token | Meaning                        |
//! |-------|--------------------------------|
//! | `c`   | One literal character          |
//! | `.`   | One arbitrary character        |
//! | `(…)` | Grouping                       |
//! | `X?`  | `X` zero or one time           |
//! | `X*`  | `X` zero or more times, greedy |
//! | `X+`  | `X` one or more times, greedy  |
//!
//! Character classes (`[…]`), anchors and escape sequences are not
//! supported; `[` and `]` are rejected at parse time.
//!
//! # Example
//!
//! ```rust
//! use onepass::{check, parse};
//!
//! let tree = parse("a(c)?").unwrap();
//! assert!(check(&tree, "ac"));
//! assert!(check(&tree, "a"));
//! assert!(!check(&tree, "ab"));
//! ```

pub mod ast;
pub mod matcher;
pub mod parser;

pub use ast::Node;
pub use matcher::{Checker, check};
pub use parser::{PatternError, parse};

/// Parse `pattern` and match it against `subject` in one call.
pub fn is_match(pattern: &str, subject: &str) -> Result<bool, PatternError> {
    let root = parse(pattern)?;
    Ok(check(&root, subject))
}
