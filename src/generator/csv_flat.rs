use crate::argmap::ArgumentMap;
use crate::generator::base::{FlatRecord, Generator, COLUMNS};
use anyhow::Result;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

/// Options for configuring the `CsvFlatGenerator`.
#[derive(Debug, Clone)]
pub struct CsvFlatGeneratorOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for CsvFlatGeneratorOptions {
    /// Returns the default options for `CsvFlatGenerator`.
    ///
    /// Default values:
    /// - `delimiter`: `,`
    fn default() -> Self {
        CsvFlatGeneratorOptions { delimiter: b',' }
    }
}

/// Writes the flat node table as CSV: a header row followed by one record
/// per node. All non-numeric fields are quoted; a root node's `parent_id`
/// is the empty (quoted) string.
pub struct CsvFlatGenerator {
    options: CsvFlatGeneratorOptions,
}

impl CsvFlatGenerator {
    pub fn new(options: CsvFlatGeneratorOptions) -> Self {
        CsvFlatGenerator { options }
    }
}

impl Generator for CsvFlatGenerator {
    fn output_to_writer(&self, writer: &mut dyn Write, map: &ArgumentMap) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .delimiter(self.options.delimiter)
            .quote_style(QuoteStyle::NonNumeric)
            .from_writer(writer);

        csv_writer.write_record(COLUMNS)?;
        for node in &map.node {
            let record = FlatRecord::from(node);
            csv_writer.write_record([
                record.id.to_string(),
                record.text,
                record.parent_id.map(|id| id.to_string()).unwrap_or_default(),
                record.weight.to_string(),
                record.sentiment.to_string(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argmap::{ArgumentNode, Sentiment};

    fn reference_map() -> ArgumentMap {
        let mut map = ArgumentMap::new();
        map.add_node(ArgumentNode::new(1, "Root claim", None, 10, Sentiment::Pro, "1"));
        map.add_node(ArgumentNode::new(
            2,
            "An objection",
            Some(1),
            10,
            Sentiment::Con,
            "1.1",
        ));
        map
    }

    fn generate(map: &ArgumentMap, options: CsvFlatGeneratorOptions) -> String {
        let generator = CsvFlatGenerator::new(options);
        let mut buffer = Vec::new();
        generator.output_to_writer(&mut buffer, map).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_csv_flat_generator_options_default() {
        assert_eq!(CsvFlatGeneratorOptions::default().delimiter, b',');
    }

    #[test]
    fn test_csv_flat_generator_output() {
        let output = generate(&reference_map(), CsvFlatGeneratorOptions::default());
        // Numeric fields bare, everything else quoted; empty quoted string
        // for a root's parent_id.
        let expected = "\"id\",\"text\",\"parent_id\",\"weight\",\"sentiment\"\n\
                        1,\"Root claim\",\"\",10,1\n\
                        2,\"An objection\",1,10,-1\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_csv_flat_generator_quotes_embedded_delimiters() {
        let mut map = ArgumentMap::new();
        map.add_node(ArgumentNode::new(
            1,
            "claims, with \"quotes\"",
            None,
            10,
            Sentiment::Pro,
            "1",
        ));
        let output = generate(&map, CsvFlatGeneratorOptions::default());
        assert!(output.contains("\"claims, with \"\"quotes\"\"\""));
    }

    #[test]
    fn test_csv_flat_generator_custom_delimiter() {
        let output = generate(
            &reference_map(),
            CsvFlatGeneratorOptions { delimiter: b';' },
        );
        assert!(output.starts_with("\"id\";\"text\";\"parent_id\";\"weight\";\"sentiment\"\n"));
        assert!(output.contains("1;\"Root claim\";\"\";10;1\n"));
    }

    #[test]
    fn test_csv_flat_generator_empty_map() {
        let output = generate(&ArgumentMap::new(), CsvFlatGeneratorOptions::default());
        assert_eq!(output, "\"id\",\"text\",\"parent_id\",\"weight\",\"sentiment\"\n");
    }
}
