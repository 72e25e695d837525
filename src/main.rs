use std::{env, fs::read_to_string, path::PathBuf, process, rc::Rc, time::Instant};

use frieza::{display_error, lexer::lexer::tokenize, parser::parser::parse};

/// Input data was incorrect, see sysexits.h
const EXIT_DATA_ERROR: i32 = 65;
const EXIT_USAGE: i32 = 64;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: frieza <file>");
        process::exit(EXIT_USAGE);
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            process::exit(EXIT_DATA_ERROR);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            process::exit(EXIT_DATA_ERROR);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = match parse(tokens, Rc::new(file_name)) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source);
            process::exit(EXIT_DATA_ERROR);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    print!("{}", program);
}
