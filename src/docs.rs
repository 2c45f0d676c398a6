//! Detailed documentation for input and output types.
//!
//! This module contains comprehensive documentation about the input parser
//! and output generators supported by argmap-conv-rs.

/// # Types of Input
///
/// ## `outline_text`
///
/// A plaintext export of a hierarchical argument map:
///
/// - `<line> ::= <indent> <dotted-number> "." [ "Pro" | "Con" ] [ ":" ] <text>`
/// - `<indent>` : 2 literal space characters per nesting level
///   (configurable via `--from-indent-width`).
/// - `<dotted-number>` : one or more numeric groups separated by `.`
///   (e.g. `1`, `1.1`, `1.1.2`); used only to key cross-references, never
///   preserved in the output.
/// - `Pro` / `Con` : optional sentiment tag; absence implies `Pro`.
/// - Any line not matching this pattern is folded as continuation text into
///   the most recently opened node.
/// - Footnote markers of the form `[<digits>]` are removed from header text.
/// - A node whose entire text is `-> See <dotted-number>.` is a
///   cross-reference placeholder; it is expanded into a copy of the
///   referenced node's text and descendant subtree unless
///   `--from-skip-references` is given.
pub mod input_types {
    /// Documentation for outline_text input format
    pub mod outline_text {
        //! Indentation-based argument-map outline with Pro/Con tags
    }
}

/// # Types of Output
///
/// Every generator emits the same flat table, one record per resolved node,
/// with the columns `id`, `text`, `parent_id`, `weight`, `sentiment`.
/// `parent_id` is empty for root nodes; `sentiment` is `1` (supportive) or
/// `-1` (opposing).
///
/// ## `csv_flat`
///
/// CSV with a header row. All non-numeric fields are quoted.
///
/// ### Options for `csv_flat`
///
/// `--to-delimiter=<char>` : field delimiter (default `,`).
///
/// ## `xlsx_flat`
///
/// The same table on a single worksheet, numeric columns written as
/// numbers.
///
/// ### Options for `xlsx_flat`
///
/// `--to-shironuri` : fill all the cells with white color.
pub mod output_types {
    /// Documentation for csv_flat output format
    pub mod csv_flat {
        //! Flat CSV table
    }

    /// Documentation for xlsx_flat output format
    pub mod xlsx_flat {
        //! Flat XLSX table
    }
}
