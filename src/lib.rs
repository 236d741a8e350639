use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{CodingError, HuffmanCoder};
use lines::{LineCoder, LineOutcome};
pub use report::CompressionReport;
use threadpool::ThreadPool;

mod cli;
mod error;
pub mod huffman;
mod lines;
mod logger;
mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    encoded_file: PathBuf,
    decoded_file: PathBuf,
    number_of_threads: usize,
    print_tree: bool,
    print_codes: bool,
}

fn path_to_string(file_path: &Path) -> String {
    file_path.display().to_string()
}

fn read_input_file(file_path: &Path) -> Result<String> {
    fs::read_to_string(file_path)
        .map_err(|e| Error::UnableToReadInputFile(path_to_string(file_path), e))
}

fn read_encoded_file(file_path: &Path) -> Result<String> {
    fs::read_to_string(file_path)
        .map_err(|e| Error::UnableToReadEncodedFile(path_to_string(file_path), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(path_to_string(file_path), e))
}

/// Writes `lines` separated by `'\n'`, so that splitting the file on
/// `'\n'` gives back exactly the same lines.
fn write_lines(file_path: &Path, lines: &[String]) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    let mut writer = BufWriter::new(output_file);
    writer
        .write_all(lines.join("\n").as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| Error::FailedToWriteOutputFile(path_to_string(file_path), e))
}

fn collect_lines(
    outcomes: Vec<LineOutcome>,
    on_failure: fn(usize, CodingError) -> Error,
) -> Result<Vec<String>> {
    outcomes
        .into_iter()
        .map(|(line_number, outcome)| match outcome {
            Some(result) => result.map_err(|e| on_failure(line_number, e)),
            None => Err(Error::WorkerDidNotDeliverLine(line_number)),
        })
        .collect()
}

fn print_code_table(coder: &HuffmanCoder<char>) {
    println!("symbol\tweight\tcode");
    for leaf in coder.tree().leaf_weights() {
        if let Some(symbol) = leaf.symbol {
            let path = coder.path_table().get(&symbol).unwrap_or_default();
            println!("{:?}\t{}\t{}", symbol, leaf.weight, path);
        }
    }
}

/// Builds a tree from the input file, encodes the file into the encoded
/// file line by line, then decodes the encoded file into the decoded file.
pub fn encode_and_decode_text_file(arguments: &Arguments) -> Result<CompressionReport> {
    let original_text = read_input_file(&arguments.input_file)?;
    let coder = Arc::new(HuffmanCoder::from_text(&original_text)?);
    log::info!(
        "Built Huffman tree from '{}' with {} distinct symbols",
        path_to_string(&arguments.input_file),
        coder.path_table().len()
    );
    logger::log_code_table(coder.as_ref());

    if arguments.print_tree {
        println!("{}", coder.tree());
    }
    if arguments.print_codes {
        print_code_table(&coder);
    }

    let threadpool = ThreadPool::new(arguments.number_of_threads);
    let line_coder = LineCoder::new(&threadpool, Arc::clone(&coder));

    let original_lines: Vec<&str> = original_text.split('\n').collect();
    let encoded_lines = collect_lines(
        line_coder.encode_lines(&original_lines),
        Error::FailedToEncodeLine,
    )?;
    write_lines(&arguments.encoded_file, &encoded_lines)?;
    log::info!(
        "Wrote {} encoded lines to '{}'",
        encoded_lines.len(),
        path_to_string(&arguments.encoded_file)
    );

    let encoded_text = read_encoded_file(&arguments.encoded_file)?;
    let encoded_lines: Vec<&str> = encoded_text.split('\n').collect();
    let decoded_lines = collect_lines(
        line_coder.decode_lines(&encoded_lines),
        Error::FailedToDecodeLine,
    )?;
    write_lines(&arguments.decoded_file, &decoded_lines)?;
    log::info!(
        "Wrote {} decoded lines to '{}'",
        decoded_lines.len(),
        path_to_string(&arguments.decoded_file)
    );

    Ok(CompressionReport::new(
        &original_text,
        &encoded_text,
        &decoded_lines.join("\n"),
    ))
}
