use crate::argmap::ArgumentMap;
use crate::generator::base::{FlatRecord, Generator, COLUMNS};
use anyhow::Result;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct XlsxFlatGeneratorOptions {
    /// If true, set the background color of all cells to white.
    pub shironuri: bool,
}

/// Writes the flat node table to a worksheet: one header row, one row per
/// node, numeric columns as numbers and an empty cell for a root's
/// `parent_id`.
pub struct XlsxFlatGenerator {
    options: XlsxFlatGeneratorOptions,
}

impl XlsxFlatGenerator {
    pub fn new(options: XlsxFlatGeneratorOptions) -> Self {
        XlsxFlatGenerator { options }
    }

    pub fn output_to_worksheet(&self, worksheet: &mut Worksheet, map: &ArgumentMap) -> Result<()> {
        // Define a format for cells with thin borders
        let mut border_format = Format::new().set_border(rust_xlsxwriter::FormatBorder::Thin);
        if self.options.shironuri {
            border_format = border_format.set_background_color(rust_xlsxwriter::Color::White);

            let cell_format = Format::new().set_background_color(rust_xlsxwriter::Color::White);
            worksheet.set_column_range_format(0, 16383, &cell_format)?;
        }

        for (col_index, v) in COLUMNS.iter().enumerate() {
            worksheet.write_with_format(0 as RowNum, col_index as ColNum, *v, &border_format)?;
        }

        for (row_offset, node) in map.node.iter().enumerate() {
            let row_index = row_offset as RowNum + 1;
            let record = FlatRecord::from(node);
            worksheet.write_number_with_format(
                row_index,
                0 as ColNum,
                record.id as f64,
                &border_format,
            )?;
            worksheet.write_with_format(
                row_index,
                1 as ColNum,
                record.text.as_str(),
                &border_format,
            )?;
            match record.parent_id {
                Some(parent_id) => {
                    worksheet.write_number_with_format(
                        row_index,
                        2 as ColNum,
                        parent_id as f64,
                        &border_format,
                    )?;
                }
                None => {
                    worksheet.write_blank(row_index, 2 as ColNum, &border_format)?;
                }
            }
            worksheet.write_number_with_format(
                row_index,
                3 as ColNum,
                record.weight as f64,
                &border_format,
            )?;
            worksheet.write_number_with_format(
                row_index,
                4 as ColNum,
                record.sentiment as f64,
                &border_format,
            )?;
        }

        Ok(())
    }
}

impl Generator for XlsxFlatGenerator {
    fn output_to_writer(&self, writer: &mut dyn Write, map: &ArgumentMap) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        self.output_to_worksheet(worksheet, map)?;

        let buffer = workbook.save_to_buffer()?;
        writer.write_all(&buffer)?;
        Ok(())
    }
}
