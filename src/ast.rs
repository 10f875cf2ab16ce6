//! Syntax tree for compiled patterns.

use std::fmt;

use itertools::Itertools;

/// One node of a compiled pattern.
///
/// The parser always produces a [`Node::Group`] root; every other variant
/// appears beneath it. The wrapper variants (`Optional`, `ZeroOrMore`,
/// `OneOrMore`) hold a previously completed sibling and are never built
/// around an empty slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An ordered sequence of sub-patterns matched one after another.
    ///
    /// `level` is the number of enclosing open groups at the point the group
    /// was opened. It is carried for diagnostic display only; matching never
    /// consults it.
    Group { level: usize, nodes: Vec<Node> },
    /// The wrapped pattern may match zero or one time.
    Optional(Box<Node>),
    /// Matches exactly the stored character.
    Literal(char),
    /// Matches exactly one arbitrary character.
    Any,
    /// The wrapped pattern matches zero or more times, greedily.
    ZeroOrMore(Box<Node>),
    /// The wrapped pattern matches one or more times, greedily.
    OneOrMore(Box<Node>),
}

impl Node {
    /// Render the tree as an indented outline, one node per line.
    ///
    /// Groups print their stored nesting level, so a mis-levelled tree is
    /// visible at a glance.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(&mut out, 0);
        out
    }

    fn outline_into(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        match self {
            Node::Group { level, nodes } => {
                out.push_str(&format!("{pad}group level={level}\n"));
                for node in nodes {
                    node.outline_into(out, depth + 1);
                }
            }
            Node::Optional(node) => {
                out.push_str(&format!("{pad}optional\n"));
                node.outline_into(out, depth + 1);
            }
            Node::Literal(c) => out.push_str(&format!("{pad}literal {c:?}\n")),
            Node::Any => out.push_str(&format!("{pad}any\n")),
            Node::ZeroOrMore(node) => {
                out.push_str(&format!("{pad}zero-or-more\n"));
                node.outline_into(out, depth + 1);
            }
            Node::OneOrMore(node) => {
                out.push_str(&format!("{pad}one-or-more\n"));
                node.outline_into(out, depth + 1);
            }
        }
    }
}

/// Compact one-line form: `a(c)?` renders as `(a,(c)?)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Group { nodes, .. } => write!(f, "({})", nodes.iter().join(",")),
            Node::Optional(node) => write!(f, "{node}?"),
            Node::Literal(c) => write!(f, "{c}"),
            Node::Any => write!(f, "."),
            Node::ZeroOrMore(node) => write!(f, "{node}*"),
            Node::OneOrMore(node) => write!(f, "{node}+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;

    fn tree(pattern: &str) -> super::Node {
        parse(pattern).expect("parse should succeed")
    }

    // --- Compact rendering ---

    #[test]
    fn display_literal_and_optional_group() {
        assert_eq!(tree("a(c)?").to_string(), "(a,(c)?)");
    }

    #[test]
    fn display_quantified_leaves() {
        assert_eq!(tree(".*b+").to_string(), "(.*,b+)");
    }

    #[test]
    fn display_empty_root() {
        assert_eq!(tree("").to_string(), "()");
    }

    // --- Outline ---

    #[test]
    fn outline_indents_by_nesting() {
        let expected = "\
group level=0
  literal 'a'
  zero-or-more
    group level=1
      literal 'b'
";
        assert_eq!(tree("a(b)*").outline(), expected);
    }

    #[test]
    fn outline_shows_any_and_one_or_more() {
        let expected = "\
group level=0
  one-or-more
    any
";
        assert_eq!(tree(".+").outline(), expected);
    }
}
