use std::{
    env,
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use mini_parser::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    lexer::lexer::tokenize,
    parse_source,
};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let dump_tokens = args.iter().any(|arg| arg == "--tokens");
    let Some(file_path) = args.iter().find(|arg| !arg.starts_with("--")) else {
        eprintln!("Usage: mini-parser <file> [--tokens]");
        return ExitCode::FAILURE;
    };

    let file = PathBuf::from(file_path);
    let source = match read_to_string(&file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read {}: {}", file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if dump_tokens {
        for token in tokenize(&source) {
            println!("{}", token);
        }
        return ExitCode::SUCCESS;
    }

    let start = Instant::now();
    let (program, errors) = parse_source(&source);
    log::info!("Parsed {} in {:?}", file.display(), start.elapsed());

    if !errors.is_empty() {
        println!("Parse failed with {} error(s):", errors.len());
        for error in &errors {
            display_error(error, &file, &source);
        }
        return ExitCode::FAILURE;
    }

    println!("Parse succeeded:");
    println!("{}", program);

    ExitCode::SUCCESS
}

fn display_error(error: &Error, file: &Path, source: &str) {
    /*
        Error: line 3 column 9: cannot parse ;
        -> example.mini
           |
         3 | x := 1 + ;
           | ---------^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error);
    } else {
        println!("Error: {} ({})", error, error.get_tip());
    }
    println!("-> {}", file.display());

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return;
    };

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

/// Strips leading blanks, returning the rest and how many characters were removed.
fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    let removed = string[..string.len() - trimmed.len()].chars().count();

    (trimmed, removed)
}
