//! Cross-reference resolution.
//!
//! A placeholder node whose text starts with `-> See <label>.` is expanded
//! in place: its text is replaced by the referenced node's text, and the
//! referenced node's entire descendant subtree is duplicated under the
//! placeholder with fresh ids. Unresolvable references are left as their
//! literal placeholder text.

use crate::argmap::{ArgumentMap, ArgumentNode};
use crate::parser::outline_text::LabelIndex;
use thiserror::Error;

/// Leading marker identifying a cross-reference placeholder node.
pub const REFERENCE_MARKER: &str = "-> See ";

/// Represents errors that can occur during reference resolution.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The referenced subtree contains the placeholder being expanded, so
    /// the copy would consume its own output indefinitely.
    #[error("Circular reference while expanding \"{0}\"")]
    CircularReference(String),
}

/// Expands every cross-reference placeholder in `map`.
///
/// Placeholders are detected over the parsed, pre-expansion node sequence in
/// order; copies are appended to the end of the sequence and participate in
/// later child scans, so a reference into a subtree expanded by an earlier
/// placeholder copies the already-expanded content.
///
/// # Arguments
///
/// * `map` - The parsed argument map, mutated in place.
/// * `index` - The label lookup built by the parser.
///
/// # Returns
///
/// `Ok(())` on success, or `ResolveError::CircularReference` if a reference
/// points back into its own ancestry.
pub fn expand_references(map: &mut ArgumentMap, index: &LabelIndex) -> Result<(), ResolveError> {
    let parsed_len = map.node.len();
    for position in 0..parsed_len {
        let text = map.node[position].text.trim();
        if !text.starts_with(REFERENCE_MARKER) {
            continue;
        }
        // Reference target is the third whitespace-separated token, with
        // the trailing period removed.
        let Some(token) = text.split_whitespace().nth(2) else {
            continue;
        };
        let target = token.trim_end_matches('.').to_string();
        let Some(&referenced_id) = index.get(&target) else {
            // Unresolvable: the literal placeholder text stays in place.
            continue;
        };

        let placeholder_id = map.node[position].id;
        let referenced_text = map.get(referenced_id).map(|n| n.text.clone());
        if let Some(referenced_text) = referenced_text {
            map.node[position].text = referenced_text;
        }

        // Ids above the fence are created by this expansion; meeting one
        // during the child scan means the referenced subtree contains the
        // placeholder itself.
        let fence = map.node.len() as u32;
        copy_children(map, referenced_id, placeholder_id, fence, &target)?;
    }
    Ok(())
}

/// Recursively duplicates the children of `source_id` under `anchor_id`,
/// assigning each copy the next sequential id.
fn copy_children(
    map: &mut ArgumentMap,
    source_id: u32,
    anchor_id: u32,
    fence: u32,
    target: &str,
) -> Result<(), ResolveError> {
    let child_ids = map.children_of(source_id);
    for child_id in child_ids {
        if child_id > fence {
            return Err(ResolveError::CircularReference(target.to_string()));
        }
        let copy_id = map.next_id();
        let source = map.node[child_id as usize - 1].clone();
        map.add_node(ArgumentNode {
            id: copy_id,
            parent_id: Some(anchor_id),
            ..source
        });
        copy_children(map, child_id, copy_id, fence, target)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argmap::Sentiment;
    use crate::parser::outline_text::{OutlineTextParser, OutlineTextParserOptions};

    fn parse_and_resolve(input: &str) -> Result<ArgumentMap, ResolveError> {
        let parser = OutlineTextParser::new(OutlineTextParserOptions::default());
        let (mut map, index) = parser.parse(input).unwrap();
        expand_references(&mut map, &index)?;
        Ok(map)
    }

    #[test]
    fn test_leaf_reference_replaces_text_only() {
        let input = r#"1. Pro: Root
  1.1. Con: Child A
2. Pro: -> See 1.1.
"#;
        let map = parse_and_resolve(input).unwrap();

        // The placeholder keeps its id, parent and sentiment; only the text
        // is overwritten, and a childless target adds no nodes.
        assert_eq!(map.node.len(), 3);
        assert_eq!(map.node[2].id, 3);
        assert_eq!(map.node[2].text, "Child A");
        assert_eq!(map.node[2].parent_id, None);
        assert_eq!(map.node[2].sentiment, Sentiment::Pro);
    }

    #[test]
    fn test_reference_copies_descendants_under_placeholder() {
        let input = r#"1. Pro: Topic
  1.1. Con: Alpha
    1.1.1. Pro: First leaf
    1.1.2. Con: Second leaf
2. Pro: -> See 1.1.
"#;
        let map = parse_and_resolve(input).unwrap();

        assert_eq!(map.node.len(), 7);
        assert!(map.valid());
        assert_eq!(map.node[4].text, "Alpha");

        // Exactly two copies, fresh sequential ids, parented at the
        // placeholder rather than the original referenced node.
        assert_eq!(map.node[5].id, 6);
        assert_eq!(map.node[5].text, "First leaf");
        assert_eq!(map.node[5].parent_id, Some(5));
        assert_eq!(map.node[5].sentiment, Sentiment::Pro);

        assert_eq!(map.node[6].id, 7);
        assert_eq!(map.node[6].text, "Second leaf");
        assert_eq!(map.node[6].parent_id, Some(5));
        assert_eq!(map.node[6].sentiment, Sentiment::Con);
    }

    #[test]
    fn test_deep_subtree_copy_keeps_nesting() {
        let input = r#"1. Pro: Topic
  1.1. Con: Alpha
    1.1.1. Pro: Mid
      1.1.1.1. Con: Leaf
2. Pro: -> See 1.1.
"#;
        let map = parse_and_resolve(input).unwrap();

        assert_eq!(map.node.len(), 7);
        // Copy of "Mid" hangs off the placeholder, copy of "Leaf" off the
        // copy of "Mid".
        assert_eq!(map.node[5].text, "Mid");
        assert_eq!(map.node[5].parent_id, Some(5));
        assert_eq!(map.node[6].text, "Leaf");
        assert_eq!(map.node[6].parent_id, Some(6));
    }

    #[test]
    fn test_unresolvable_reference_keeps_literal_text() {
        let input = "1. Pro: Root\n2. Pro: -> See 9.9.9.\n";
        let map = parse_and_resolve(input).unwrap();
        assert_eq!(map.node.len(), 2);
        assert_eq!(map.node[1].text, "-> See 9.9.9.");
    }

    #[test]
    fn test_marker_must_lead_the_text() {
        let input = "1. Pro: For details -> See 9.9.9.\n";
        let map = parse_and_resolve(input).unwrap();
        assert_eq!(map.node[0].text, "For details -> See 9.9.9.");
    }

    #[test]
    fn test_reference_into_expanded_subtree_copies_expanded_content() {
        let input = r#"1. Pro: A
  1.1. Con: B
    1.1.1. Pro: C
2. Pro: -> See 1.1.
3. Pro: -> See 2.
"#;
        let map = parse_and_resolve(input).unwrap();

        // Expanding "2" first gives it a copy of C (id 6); expanding "3"
        // afterwards copies the already-expanded content of "2".
        assert_eq!(map.node.len(), 7);
        assert_eq!(map.node[3].text, "B");
        assert_eq!(map.node[5].id, 6);
        assert_eq!(map.node[5].text, "C");
        assert_eq!(map.node[5].parent_id, Some(4));
        assert_eq!(map.node[4].text, "B");
        assert_eq!(map.node[6].text, "C");
        assert_eq!(map.node[6].parent_id, Some(5));
    }

    #[test]
    fn test_circular_reference_fails_fast() {
        let input = "1. Pro: Root\n  1.1. Con: -> See 1.\n";
        let err = parse_and_resolve(input).unwrap_err();
        assert_eq!(err, ResolveError::CircularReference("1".to_string()));
    }
}
