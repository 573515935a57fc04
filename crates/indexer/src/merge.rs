//! Reconciliation of definition and reference tags

use lextags_core::Tag;
use std::collections::HashSet;

/// Combine both tag sets into one line-ordered sequence
///
/// A reference with the same `(symbol, line)` as a definition is dropped.
/// The sort is stable, so on a shared line definitions stay ahead of
/// references and each group keeps its source order.
pub fn merge_tags(definitions: Vec<Tag>, references: Vec<Tag>) -> Vec<Tag> {
    let kept_references: Vec<Tag> = {
        let defined: HashSet<(&str, usize)> = definitions
            .iter()
            .map(|d| (d.symbol.as_str(), d.line))
            .collect();

        references
            .into_iter()
            .filter(|r| !defined.contains(&(r.symbol.as_str(), r.line)))
            .collect()
    };

    let mut merged = definitions;
    merged.extend(kept_references);
    merged.sort_by_key(|t| t.line);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use lextags_core::TagKind;
    use pretty_assertions::assert_eq;

    fn def(symbol: &str, line: usize) -> Tag {
        Tag::definition(symbol, line, "a.wg", format!("{symbol} image")).expect("valid tag")
    }

    fn reference(symbol: &str, line: usize) -> Tag {
        Tag::reference(symbol, line, "a.wg").expect("valid tag")
    }

    fn summary(tags: &[Tag]) -> Vec<(TagKind, &str, usize)> {
        tags.iter()
            .map(|t| (t.kind, t.symbol.as_str(), t.line))
            .collect()
    }

    #[test]
    fn test_definition_replaces_reference() {
        let merged = merge_tags(
            vec![def("foo", 10)],
            vec![reference("foo", 10), reference("bar", 12)],
        );

        assert_eq!(
            summary(&merged),
            vec![
                (TagKind::Definition, "foo", 10),
                (TagKind::Reference, "bar", 12),
            ]
        );
    }

    #[test]
    fn test_same_symbol_other_line_is_kept() {
        let merged = merge_tags(vec![def("foo", 1)], vec![reference("foo", 5)]);
        assert_eq!(
            summary(&merged),
            vec![
                (TagKind::Definition, "foo", 1),
                (TagKind::Reference, "foo", 5),
            ]
        );
    }

    #[test]
    fn test_definitions_lead_on_shared_line() {
        let merged = merge_tags(
            vec![def("b", 3), def("a", 3)],
            vec![reference("x", 3), reference("a", 3), reference("y", 3)],
        );

        assert_eq!(
            summary(&merged),
            vec![
                (TagKind::Definition, "b", 3),
                (TagKind::Definition, "a", 3),
                (TagKind::Reference, "x", 3),
                (TagKind::Reference, "y", 3),
            ]
        );
    }

    #[test]
    fn test_sorted_by_line() {
        let merged = merge_tags(
            vec![def("late", 20), def("early", 2)],
            vec![reference("mid", 7), reference("first", 1)],
        );

        let lines: Vec<usize> = merged.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 7, 20]);
    }

    #[test]
    fn test_duplicate_references_survive() {
        let merged = merge_tags(vec![], vec![reference("x", 1), reference("x", 1)]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_tags(vec![], vec![]).is_empty());
    }
}
