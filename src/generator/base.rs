use crate::argmap::{ArgumentMap, ArgumentNode};
use anyhow::Result;
use std::io::Write;

/// Column order of the flat table, shared by every generator.
pub const COLUMNS: [&str; 5] = ["id", "text", "parent_id", "weight", "sentiment"];

/// Externally visible projection of an `ArgumentNode`.
///
/// The internal numbering label never appears here, so the tabular writers
/// only ever see the five output columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    pub id: u32,
    pub text: String,
    pub parent_id: Option<u32>,
    pub weight: u32,
    pub sentiment: i32,
}

impl From<&ArgumentNode> for FlatRecord {
    fn from(node: &ArgumentNode) -> Self {
        FlatRecord {
            id: node.id,
            text: node.text.clone(),
            parent_id: node.parent_id,
            weight: node.weight,
            sentiment: node.sentiment.value(),
        }
    }
}

pub trait Generator {
    fn output_to_writer(&self, writer: &mut dyn Write, map: &ArgumentMap) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argmap::Sentiment;

    #[test]
    fn test_flat_record_projection() {
        let node = ArgumentNode::new(4, "claim", Some(2), 10, Sentiment::Con, "1.2.1");
        let record = FlatRecord::from(&node);
        assert_eq!(record.id, 4);
        assert_eq!(record.text, "claim");
        assert_eq!(record.parent_id, Some(2));
        assert_eq!(record.weight, 10);
        assert_eq!(record.sentiment, -1);
    }
}
