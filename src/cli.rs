use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_encoded_file_argument(command);
        let command = Self::register_decoded_file_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_print_tree_argument(command);
        Self::register_print_codes_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_encoded_file_argument(command: Command) -> Command {
        command.arg(Self::create_encoded_file_argument())
    }

    fn register_decoded_file_argument(command: Command) -> Command {
        command.arg(Self::create_decoded_file_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_print_tree_argument(command: Command) -> Command {
        command.arg(Self::create_print_tree_argument())
    }

    fn register_print_codes_argument(command: Command) -> Command {
        command.arg(Self::create_print_codes_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the text file the tree is built from and which gets encoded")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_encoded_file_argument() -> Arg {
        Arg::new("encoded_file")
            .help("Path to the output file of '0'/'1' lines")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_decoded_file_argument() -> Arg {
        Arg::new("decoded_file")
            .help("Path to the output file the encoded lines are decoded into")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_print_tree_argument() -> Arg {
        arg!(print_tree: -p --print_tree "Print the Huffman tree").action(ArgAction::SetTrue)
    }

    fn create_print_codes_argument() -> Arg {
        arg!(print_codes: -c --print_codes "Print the code of every symbol")
            .action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            encoded_file: Self::extract_encoded_file_argument(matches),
            decoded_file: Self::extract_decoded_file_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            print_tree: Self::extract_print_tree_argument(matches),
            print_codes: Self::extract_print_codes_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_encoded_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("encoded_file")
            .expect("Required argument encoded_file not provided")
            .clone()
    }

    fn extract_decoded_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("decoded_file")
            .expect("Required argument decoded_file not provided")
            .clone()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
            .max(1)
    }

    fn extract_print_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("print_tree")
    }

    fn extract_print_codes_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("print_codes")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
