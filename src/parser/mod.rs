pub mod outline_text;

pub enum ParserOptions {
    OutlineText(outline_text::OutlineTextParserOptions),
}
