use std::collections::HashMap;

use crate::argmap::{ArgumentMap, ArgumentNode, Sentiment};
use anyhow::Result;
use regex::Regex;

/// Lookup from the dotted source numbering (e.g. "1.2.3") to the id of the
/// node parsed from that line. Built during parsing, consumed during
/// reference resolution.
pub type LabelIndex = HashMap<String, u32>;

/// Options for configuring the `OutlineTextParser`.
pub struct OutlineTextParserOptions {
    /// Number of literal space characters per nesting level.
    pub indent_width: usize,
    /// Weight assigned to every node in the run.
    pub weight: u32,
    /// If true, `-> See` cross-reference placeholders are expanded after
    /// parsing.
    pub resolve_references: bool,
}

impl Default for OutlineTextParserOptions {
    /// Returns the default options for `OutlineTextParser`.
    ///
    /// Default values:
    /// - `indent_width`: 2
    /// - `weight`: 10
    /// - `resolve_references`: true
    fn default() -> Self {
        OutlineTextParserOptions {
            indent_width: 2,
            weight: 10,
            resolve_references: true,
        }
    }
}

/// A parser for converting argument-map outline text into an `ArgumentMap`.
///
/// Every line either introduces a new node (an outline header: indentation,
/// a dotted numbering label, an optional `Pro`/`Con` tag, then text) or is
/// folded as continuation text into the most recently opened node.
pub struct OutlineTextParser {
    option: OutlineTextParserOptions,
}

impl OutlineTextParser {
    /// Creates a new `OutlineTextParser` with the given options.
    pub fn new(option: OutlineTextParserOptions) -> Self {
        OutlineTextParser { option }
    }

    /// Parses the input string into an `ArgumentMap` plus the label lookup
    /// used for cross-reference resolution.
    ///
    /// # Arguments
    ///
    /// * `input` - The raw outline text.
    ///
    /// # Returns
    ///
    /// A `Result` with the parsed map and the label index on success, or an
    /// `anyhow::Error` if an error occurs (e.g. invalid regex).
    pub fn parse(&self, input: &str) -> Result<(ArgumentMap, LabelIndex)> {
        let header_regexp =
            Regex::new(r"^(?P<indent>\s*)(?P<label>\d+(?:\.\d+)*)\.\s*(?P<tag>Pro|Con)?:?\s*(?P<text>.*)$")?;
        let footnote_regexp = Regex::new(r"\[\d+\]")?;

        let mut map = ArgumentMap::new();
        let mut index = LabelIndex::new();
        // Open-path stack of node ids, one entry per nesting level.
        let mut stack: Vec<u32> = Vec::new();
        let mut pending = String::new();

        for line in input.trim().lines() {
            if let Some(captures) = header_regexp.captures(line) {
                if !pending.is_empty() {
                    Self::flush_pending(&mut map, &stack, &mut pending);
                }

                let indent = captures.name("indent").unwrap().as_str();
                let label = captures.name("label").unwrap().as_str();
                let tag = captures.name("tag").map(|m| m.as_str());
                let raw_text = captures.name("text").unwrap().as_str();

                // Close out any deeper open siblings, then the stack top is
                // the parent. A zero indent width flattens everything to
                // root level.
                let depth = match self.option.indent_width {
                    0 => 0,
                    width => indent.len() / width,
                };
                stack.truncate(depth);
                let parent_id = stack.last().copied();

                let text = footnote_regexp.replace_all(raw_text, "");
                let sentiment = if tag == Some("Con") {
                    Sentiment::Con
                } else {
                    Sentiment::Pro
                };

                let id = map.next_id();
                map.add_node(ArgumentNode::new(
                    id,
                    text.trim(),
                    parent_id,
                    self.option.weight,
                    sentiment,
                    label,
                ));
                stack.push(id);
                index.insert(label.to_string(), id);
            } else {
                pending.push(' ');
                pending.push_str(line.trim());
            }
        }

        if !pending.is_empty() {
            Self::flush_pending(&mut map, &stack, &mut pending);
        }

        Ok((map, index))
    }

    /// Folds the pending continuation text into the most recently opened
    /// node. Continuation text arriving before any header has no node to
    /// attach to and is dropped.
    fn flush_pending(map: &mut ArgumentMap, stack: &[u32], pending: &mut String) {
        if let Some(&open_id) = stack.last() {
            let node = &mut map.node[open_id as usize - 1];
            let folded = format!("{} {}", node.text, pending.trim());
            node.text = folded.trim().to_string();
        }
        pending.clear();
    }
}
