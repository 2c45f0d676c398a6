//! Output generators for the flat node table.
//!
//! This module contains generators that can write the resolved argument
//! map as a tabular file, one record per node.

pub mod base;
pub mod csv_flat;
pub mod xlsx_flat;

#[derive(Debug, Clone)]
pub enum GeneratorOptions {
    CsvFlat(csv_flat::CsvFlatGeneratorOptions),
    XlsxFlat(xlsx_flat::XlsxFlatGeneratorOptions),
}
