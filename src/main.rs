use std::env::args_os;

use huffman_text_encoder::{encode_and_decode_text_file, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match encode_and_decode_text_file(&arguments) {
        Ok(report) => println!("Encoding successful\n{}", report),
        Err(e) => eprintln!("Encoding failed because of: {}", e),
    }
}
