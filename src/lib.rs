pub mod argmap;
pub mod cli;
pub mod docs;
pub mod generator;
pub mod parser;
pub mod resolver;

pub fn get_parser_types() -> Vec<String> {
    vec!["outline_text".to_string()]
}

pub fn get_generator_types() -> Vec<String> {
    vec!["csv_flat".to_string(), "xlsx_flat".to_string()]
}
