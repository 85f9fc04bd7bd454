use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use mulscan::{
    ast::ast::Instruction,
    errors::errors::{Error, ErrorImpl, ErrorTip},
    eval::eval::{sum_of_products, sum_of_program, Context},
    line_at_position, scan, scan_instructions, Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    One,
    Two,
    Both,
}

/// Scan corrupted memory for `mul(<int>,<int>)` instructions and sum their products.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// File to scan
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Which total to print
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,

    /// Print every instruction found and how long each phase took
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error, &args.input);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let start = Instant::now();

    let source = fs::read(&args.input).map_err(|error| {
        Error::new(
            ErrorImpl::InputUnreadable {
                path: args.input.to_string_lossy().into_owned(),
                reason: error.to_string(),
            },
            Position::null(),
        )
    })?;

    if args.verbose {
        println!("Read {} bytes in {:?}", source.len(), start.elapsed());
    }

    if matches!(args.part, Part::One | Part::Both) {
        let scan_start = Instant::now();
        let calls = scan(&source);

        if args.verbose {
            println!("Scanned {} calls in {:?}", calls.len(), scan_start.elapsed());
        }

        println!("Part one: {}", sum_of_products(&calls));
    }

    if matches!(args.part, Part::Two | Part::Both) {
        let scan_start = Instant::now();
        let instructions = scan_instructions(&source);

        if args.verbose {
            println!(
                "Scanned {} instructions in {:?}",
                instructions.len(),
                scan_start.elapsed()
            );

            for instruction in &instructions {
                print_instruction(&source, instruction);
            }
        }

        println!(
            "Part two: {}",
            sum_of_program(&instructions, Context::new_gated())
        );
    }

    if args.verbose {
        println!("Total time: {:?}", start.elapsed());
    }

    Ok(())
}

fn print_instruction(source: &[u8], instruction: &Instruction) {
    match line_at_position(source, instruction.span().start.0) {
        Some((line, _, column)) => println!("{}:{} {}", line, column + 1, instruction),
        None => println!("?:? {}", instruction),
    }
}

fn display_error(error: &Error, file: &Path) {
    /*
        Error: InputUnreadable (Check that `input.txt` exists and is readable)
        -> input.txt
           could not read input "input.txt": No such file or directory
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file.as_os_str().to_string_lossy());
    eprintln!("   {}", error.get_error_impl());
}
