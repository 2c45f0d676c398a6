use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::generator::base::Generator;
use crate::generator::csv_flat::CsvFlatGenerator;
use crate::generator::xlsx_flat::XlsxFlatGenerator;
use crate::generator::GeneratorOptions;
use crate::parser::outline_text::OutlineTextParser;
use crate::parser::ParserOptions;
use crate::resolver::expand_references;

/// Reads the input file as text.
///
/// The file is decoded as UTF-8; if that fails, decoding is retried with
/// Windows-1252 and an informational notice is printed to stderr. A missing
/// or unreadable file is a fatal error.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read input file {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            eprintln!("input is not valid UTF-8; retrying with Windows-1252");
            let bytes = err.into_bytes();
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(text.into_owned())
        }
    }
}

/// Runs the full conversion pipeline: parse the outline text, expand
/// cross-references (unless disabled in the parser options), and write the
/// flat table with the selected generator.
pub fn run_conversion(
    input_content: &str,
    output_writer: &mut dyn Write,
    from_options: ParserOptions,
    to_options: GeneratorOptions,
) -> Result<()> {
    let (mut map, index, resolve) = match from_options {
        ParserOptions::OutlineText(options) => {
            let resolve = options.resolve_references;
            let parser = OutlineTextParser::new(options);
            let (map, index) = parser.parse(input_content)?;
            (map, index, resolve)
        }
    };

    if resolve {
        expand_references(&mut map, &index)?;
    }

    match to_options {
        GeneratorOptions::CsvFlat(options) => {
            CsvFlatGenerator::new(options).output_to_writer(output_writer, &map)?;
        }
        GeneratorOptions::XlsxFlat(options) => {
            XlsxFlatGenerator::new(options).output_to_writer(output_writer, &map)?;
        }
    }

    Ok(())
}
