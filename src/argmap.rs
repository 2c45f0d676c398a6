use thiserror::Error;

/// Represents errors that can occur during ArgumentMap validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgMapError {
    /// Indicates a validation failure with a descriptive message.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Stance of an argument relative to its parent.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Sentiment {
    /// Supportive of the parent argument.
    #[default]
    Pro,
    /// Opposing the parent argument.
    Con,
}

impl Sentiment {
    /// Returns the numeric encoding used in tabular output: +1 for `Pro`,
    /// -1 for `Con`.
    pub fn value(&self) -> i32 {
        match self {
            Sentiment::Pro => 1,
            Sentiment::Con => -1,
        }
    }
}

/// A single argument within an argument map.
///
/// Nodes carry a parent id rather than child lists; the parent relation is
/// the sole link between nodes.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ArgumentNode {
    /// Unique 1-based id, assigned in encounter order.
    pub id: u32,
    /// Argument text, possibly folded together from several physical lines.
    pub text: String,
    /// Id of the owning parent node, or `None` for a root argument.
    pub parent_id: Option<u32>,
    /// Per-run weight constant.
    pub weight: u32,
    /// Supportive or opposing stance.
    pub sentiment: Sentiment,
    /// Dotted hierarchical numbering from the source line (e.g. "1.2.3").
    /// Used only to key cross-references; never emitted.
    pub label: String,
}

impl ArgumentNode {
    /// Creates a new `ArgumentNode`.
    pub fn new(
        id: u32,
        text: &str,
        parent_id: Option<u32>,
        weight: u32,
        sentiment: Sentiment,
        label: &str,
    ) -> Self {
        ArgumentNode {
            id,
            text: text.to_string(),
            parent_id,
            weight,
            sentiment,
            label: label.to_string(),
        }
    }
}

/// A parsed argument map: a flat, append-only sequence of nodes forming a
/// forest through their `parent_id` links.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ArgumentMap {
    /// The nodes of the map, in id order.
    pub node: Vec<ArgumentNode>,
}

impl ArgumentMap {
    /// Creates a new, empty `ArgumentMap`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the map.
    pub fn add_node(&mut self, node: ArgumentNode) {
        self.node.push(node);
    }

    /// Returns the id the next appended node should carry.
    pub fn next_id(&self) -> u32 {
        self.node.len() as u32 + 1
    }

    /// Looks up a node by id.
    ///
    /// Ids are dense and 1-based, so this is a direct index.
    pub fn get(&self, id: u32) -> Option<&ArgumentNode> {
        (id as usize)
            .checked_sub(1)
            .and_then(|index| self.node.get(index))
    }

    /// Returns the ids of the direct children of `id`, in sequence order.
    ///
    /// Children are found by scanning for a matching `parent_id`; the map
    /// keeps no child lists.
    pub fn children_of(&self, id: u32) -> Vec<u32> {
        self.node
            .iter()
            .filter(|n| n.parent_id == Some(id))
            .map(|n| n.id)
            .collect()
    }

    /// Validates the structural invariants of the map.
    ///
    /// Ids must be dense and 1-based in sequence order, and every
    /// `parent_id` must reference an id that appears earlier (a node is
    /// always emitted after its parent).
    ///
    /// # Returns
    ///
    /// `Ok(())` if the map is valid, otherwise an `ArgMapError`.
    pub fn validate(&self) -> Result<(), ArgMapError> {
        for (index, node) in self.node.iter().enumerate() {
            let expected_id = index as u32 + 1;
            if node.id != expected_id {
                return Err(ArgMapError::ValidationError(format!(
                    "node at position {} has id {}, expected {}",
                    index, node.id, expected_id
                )));
            }
            if let Some(parent_id) = node.parent_id {
                if parent_id >= node.id {
                    return Err(ArgMapError::ValidationError(format!(
                        "node {} references parent {} which does not precede it",
                        node.id, parent_id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Checks if the `ArgumentMap` is valid.
    ///
    /// This is a convenience method that returns `true` if `validate`
    /// returns `Ok(())`, and `false` otherwise.
    pub fn valid(&self) -> bool {
        self.validate().is_ok()
    }
}
