//! Documentation chain resolution.
//!
//! All resolvers share one deduplication policy: a normalized block is kept
//! unless it is a substring of the block kept immediately before it. Only
//! the adjacent block is compared, so a text that reappears after an
//! unrelated block is kept again.

use crate::registry::Registry;
use crate::unindent::unindent;

/// Separator placed between kept blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Ordered, adjacency-deduplicated documentation blocks.
#[derive(Debug, Default)]
pub(crate) struct DocBlocks {
    kept: Vec<String>,
}

impl DocBlocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Normalize `doc` and keep it unless it is absent, empty, or contained
    /// in the last kept block. Returns whether the block was kept.
    pub(crate) fn push(&mut self, doc: Option<&str>) -> bool {
        let Some(doc) = doc else {
            return false;
        };
        let doc = unindent(doc);
        if doc.is_empty() {
            return false;
        }
        if self.kept.last().is_some_and(|last| last.contains(doc.as_str())) {
            return false;
        }
        self.kept.push(doc);
        true
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    /// Join in collection order.
    pub(crate) fn join(&self) -> String {
        self.kept.join(BLOCK_SEPARATOR)
    }

    /// Join in reverse collection order. Blocks collected most specific
    /// first come out base first.
    pub(crate) fn join_reversed(&self) -> String {
        let reversed: Vec<&str> = self.kept.iter().rev().map(String::as_str).collect();
        reversed.join(BLOCK_SEPARATOR)
    }
}

/// Inherited documentation of `member` over `ancestors` (most specific
/// first).
///
/// The member is looked up on each ancestor the way attribute access would
/// find it, so an ancestor that only inherits the member contributes the
/// inherited text. Returns `None` when no ancestor documents the member.
pub fn attribute_doc<S: AsRef<str>>(
    registry: &Registry,
    ancestors: &[S],
    member: &str,
) -> Option<String> {
    let mut blocks = DocBlocks::new();
    for ancestor in ancestors {
        let Some(found) = registry.lookup(ancestor.as_ref(), member) else {
            continue;
        };
        blocks.push(found.doc());
    }
    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join_reversed())
    }
}

/// Inherited type documentation over `ancestors` (most specific first).
///
/// Unregistered names contribute nothing. Always returns a string, empty
/// when no ancestor is documented.
pub fn type_doc<S: AsRef<str>>(registry: &Registry, ancestors: &[S]) -> String {
    let mut blocks = DocBlocks::new();
    for ancestor in ancestors {
        if let Some(def) = registry.get(ancestor.as_ref()) {
            blocks.push(def.doc());
        }
    }
    blocks.join_reversed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TypeBuilder;
    use crate::model::Member;

    #[test]
    fn blocks_skip_contained_text() {
        let mut blocks = DocBlocks::new();
        assert!(blocks.push(Some("foo bar")));
        assert!(!blocks.push(Some("foo")));
        assert_eq!(blocks.join(), "foo bar");
    }

    #[test]
    fn blocks_skip_absent_and_blank() {
        let mut blocks = DocBlocks::new();
        assert!(!blocks.push(None));
        assert!(!blocks.push(Some("   \n  ")));
        assert!(blocks.is_empty());
        assert_eq!(blocks.join_reversed(), "");
    }

    #[test]
    fn blocks_only_compare_with_previous() {
        let mut blocks = DocBlocks::new();
        blocks.push(Some("foo"));
        blocks.push(Some("baz"));
        blocks.push(Some("foo"));
        assert_eq!(blocks.join_reversed(), "foo\n\nbaz\n\nfoo");
    }

    fn chain() -> Registry {
        let mut reg = Registry::new();
        reg.define(
            TypeBuilder::new("A")
                .doc("A\n\n    Class A docstr.\n    ")
                .member("run", Member::function("Run it.")),
        )
        .unwrap();
        reg.define(TypeBuilder::new("B").base("A").doc("B docs"))
            .unwrap();
        reg.define(
            TypeBuilder::new("C")
                .base("B")
                .member("run", Member::function("Run it twice.")),
        )
        .unwrap();
        reg
    }

    #[test]
    fn attribute_doc_base_first() {
        let reg = chain();
        // B inherits A.run, which dedups against itself.
        assert_eq!(
            attribute_doc(&reg, &["C", "B", "A"], "run").as_deref(),
            Some("Run it.\n\nRun it twice.")
        );
    }

    #[test]
    fn attribute_doc_absent_everywhere() {
        let reg = chain();
        assert_eq!(attribute_doc(&reg, &["C", "B", "A"], "missing"), None);
    }

    #[test]
    fn type_doc_base_first() {
        let reg = chain();
        assert_eq!(
            type_doc(&reg, &["C", "B", "A"]),
            "A\n\nClass A docstr.\n\nB docs"
        );
    }
}
