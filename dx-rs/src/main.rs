mod error;
mod render;

use clap::Parser;
use dx_compute::{
    pipeline::{differentiate_with, Differentiated},
    symbolic::SimplifyOptions,
};
use error::{Error, WithPath};
use log::info;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    fs::{self, File},
    io::{self, BufWriter, IsTerminal, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Differentiates a single-variable expression, such as `x^2*sin(x)`, and simplifies the result.
///
/// Every letter in the expression is treated as the same variable.
#[derive(Parser, Debug)]
#[command(name = "dx", author, version, about)]
struct Args {
    /// File containing the expression. If omitted, the expression is read from stdin, or an
    /// interactive prompt is started if stdin is a terminal.
    #[arg(value_name = "EXPRESSION_FILE")]
    expression_file: Option<PathBuf>,

    /// File to write the results to, instead of stdout.
    #[arg(value_name = "RESFILE")]
    resfile: Option<PathBuf>,

    /// Write a LaTeX document with the derivative equation to this file.
    #[arg(long, value_name = "FILE")]
    tex: Option<PathBuf>,

    /// Write a Graphviz digraph of the derivative's tree to this file.
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Also print the values of the expression and its derivative at this point.
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    at: Option<f64>,

    /// Absolute tolerance used by the simplifier to compare constants.
    #[arg(long, default_value_t = SimplifyOptions::default().tolerance)]
    tolerance: f64,

    /// Maximum number of simplification rounds.
    #[arg(long, default_value_t = SimplifyOptions::default().max_rounds)]
    max_rounds: usize,

    /// Print the simplification steps that were applied.
    #[arg(long)]
    steps: bool,
}

impl Args {
    /// Returns the simplifier options selected on the command line.
    fn options(&self) -> SimplifyOptions {
        SimplifyOptions::default()
            .tolerance(self.tolerance)
            .max_rounds(self.max_rounds)
    }
}

/// Writes the results of a differentiation to `out`, as selected on the command line.
fn write_results(out: &mut impl Write, args: &Args, result: &Differentiated, path: &Path) -> Result<(), Error> {
    render::write_summary(out, result).with_path(path)?;
    if args.steps {
        render::write_steps(out, result).with_path(path)?;
    }
    if let Some(x) = args.at {
        render::write_values(out, result, x, path)?;
    }
    out.flush().with_path(path)
}

/// Creates the file at `path` and writes to it with the given function.
fn write_file<F>(path: &Path, f: F) -> Result<(), Error>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut file = BufWriter::new(File::create(path).with_path(path)?);
    f(&mut file).and_then(|_| file.flush()).with_path(path)?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Differentiates the given expression and writes every requested output.
fn run(args: &Args, input: &str) -> Result<(), Error> {
    let result = differentiate_with(input, &args.options())?;

    match &args.resfile {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path).with_path(path)?);
            write_results(&mut file, args, &result, path)?;
        },
        None => write_results(&mut io::stdout().lock(), args, &result, Path::new("<stdout>"))?,
    }

    if let Some(path) = &args.tex {
        write_file(path, |out| render::tex::write_document(out, &result.original, &result.derivative))?;
    }
    if let Some(path) = &args.dot {
        write_file(path, |out| render::dot::write_digraph(out, "derivative", &result.derivative))?;
    }

    Ok(())
}

/// Runs the whole input as one expression, reporting any error to stderr.
fn execute(args: &Args, src_id: &str, input: &str) -> ExitCode {
    let input = input.trim();
    match run(args, input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr(src_id, input);
            ExitCode::FAILURE
        },
    }
}

/// Runs the interactive prompt, differentiating each line.
fn repl(args: &Args) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        },
    };

    fn process_line(rl: &mut DefaultEditor, args: &Args) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }

        rl.add_history_entry(input)?;

        if let Err(err) = run(args, input) {
            err.report_to_stderr("input", input);
        }
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, args) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = &args.expression_file {
        // run expression file
        match fs::read_to_string(path).with_path(path) {
            Ok(input) => execute(&args, &path.display().to_string(), &input),
            Err(err) => {
                err.report_to_stderr("", "");
                ExitCode::FAILURE
            },
        }
    } else if !io::stdin().is_terminal() {
        // read expression from stdin
        let mut input = String::new();
        match io::stdin().read_to_string(&mut input).with_path("<stdin>") {
            Ok(_) => execute(&args, "input", &input),
            Err(err) => {
                err.report_to_stderr("", "");
                ExitCode::FAILURE
            },
        }
    } else {
        // run the repl / interactive mode
        repl(&args)
    }
}
