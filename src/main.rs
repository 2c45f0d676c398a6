use clap::Parser;

use argmap_conv_rs::cli::{read_input, run_conversion};
use argmap_conv_rs::generator::csv_flat::CsvFlatGeneratorOptions;
use argmap_conv_rs::generator::xlsx_flat::XlsxFlatGeneratorOptions;
use argmap_conv_rs::generator::GeneratorOptions;
use argmap_conv_rs::parser::outline_text::OutlineTextParserOptions;
use argmap_conv_rs::parser::ParserOptions;
use argmap_conv_rs::{get_generator_types, get_parser_types};

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Type of input (e.g., outline_text)
    #[arg(short = 'f', long, value_name = "TYPE", default_value = "outline_text")]
    from_type: String,

    /// Type of output (e.g., csv_flat, xlsx_flat)
    #[arg(short = 't', long, value_name = "TYPE", default_value = "csv_flat")]
    to_type: String,

    /// Number of literal space characters per nesting level.
    #[arg(long = "from-indent-width", default_value_t = 2)]
    indent_width: usize,
    /// Weight assigned to every node.
    #[arg(long = "from-weight", default_value_t = 10)]
    weight: u32,
    /// Leave "-> See" cross-reference placeholders unexpanded.
    #[arg(long = "from-skip-references", default_value_t = false)]
    skip_references: bool,

    /// Field delimiter for CSV output.
    #[arg(long = "to-delimiter", default_value_t = ',')]
    to_delimiter: char,

    /// Fill all cells with white color (xlsx_flat).
    #[arg(long = "to-shironuri", default_value_t = false)]
    to_shironuri: bool,

    /// Input file ("-" for stdin)
    #[arg(default_value = "input.txt")]
    input: String,

    /// Output file ("-" for stdout)
    #[arg(default_value = "output.csv")]
    output: String,

    /// List available input/output types
    #[arg(short = 'l', long)]
    list_type: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_type {
        println!("type of input:");
        println!("{}", get_parser_types().join(" "));
        println!();
        println!("type of output:");
        println!("{}", get_generator_types().join(" "));
        println!();
        return Ok(());
    }

    let input_content = if cli.input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        read_input(Path::new(&cli.input))?
    };

    let from_options = match cli.from_type.as_str() {
        "outline_text" => ParserOptions::OutlineText(OutlineTextParserOptions {
            indent_width: cli.indent_width,
            weight: cli.weight,
            resolve_references: !cli.skip_references,
        }),
        _ => anyhow::bail!(
            "Unsupported from_type: {}. Supported types are: {}",
            cli.from_type,
            get_parser_types().join(", ")
        ),
    };

    let to_options = match cli.to_type.as_str() {
        "csv_flat" => GeneratorOptions::CsvFlat(CsvFlatGeneratorOptions {
            delimiter: cli.to_delimiter as u8,
        }),
        "xlsx_flat" => GeneratorOptions::XlsxFlat(XlsxFlatGeneratorOptions {
            shironuri: cli.to_shironuri,
        }),
        _ => anyhow::bail!(
            "Unsupported to_type: {}. Supported types are: {}",
            cli.to_type,
            get_generator_types().join(", ")
        ),
    };

    let mut output_writer: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(File::create(&cli.output)?)
    };

    run_conversion(&input_content, &mut output_writer, from_options, to_options)?;

    if cli.output != "-" {
        println!("Conversion complete. Output written to {}", cli.output);
    }

    Ok(())
}
