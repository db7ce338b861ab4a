//! CLI argument definitions and the two console programs behind them: the tree demonstration
//! and the duplicate character finder.
//!
//! Everything writes to a caller supplied `Write` (and reads from a `BufRead`) so the binary can
//! hand over stdin/stdout and tests can hand over buffers.

use std::io::{BufRead, Write};

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, info};

use crate::dupes::find_duplicates;
use crate::error::{CliError, CliResult};
use crate::OrderedTree;

/// Binary search tree demonstration and duplicate character finder
#[derive(Parser, Debug)]
#[command(name = "ordered-tree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// What to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands of [`Cli`].
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree, search it and remove from it, printing it along the way
    Demo(DemoArgs),

    /// Report characters that occur more than once
    Dupes {
        /// String to analyse; prompts for strings until told to stop when omitted
        input: Option<String>,
    },
}

/// Arguments of the `demo` subcommand. The defaults replay the classic demonstration.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DemoArgs {
    /// Keys to insert, in order
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [50, 30, 70, 20, 40, 60, 80]
    )]
    pub keys: Vec<i64>,

    /// Keys to look up after inserting
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [40, 25]
    )]
    pub search: Vec<i64>,

    /// Keys to remove after searching
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [30]
    )]
    pub remove: Vec<i64>,
}

/// Runs the parsed command against the given input and output.
pub fn execute_command<R, W>(cli: &Cli, stdin: R, mut stdout: W) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    match &cli.command {
        Commands::Demo(args) => run_demo(args, &mut stdout),
        Commands::Dupes { input: Some(input) } => run_dupes(input, &mut stdout),
        Commands::Dupes { input: None } => run_dupes_session(stdin, stdout),
    }
}

/// Inserts, searches and removes the keys in `args`, printing the tree in order after building
/// it and after every removal.
pub fn run_demo<W: Write>(args: &DemoArgs, out: &mut W) -> CliResult<()> {
    info!(keys = args.keys.len(), "building demo tree");
    let mut tree: OrderedTree<i64> = args.keys.iter().copied().collect();
    debug!(len = tree.len(), height = tree.height(), "demo tree built");

    writeln!(out, "Binary Search Tree created!")?;
    writeln!(out, "BST (inorder): {}", tree)?;

    for key in &args.search {
        let found = if tree.search(key) { "Found" } else { "Not found" };
        writeln!(out, "Searching for {}: {}", key, found)?;
    }

    for key in &args.remove {
        writeln!(out, "Removing {}...", key)?;
        let removed = tree.remove(key);
        debug!(key, removed, "removed key");
        writeln!(out, "BST (inorder): {}", tree)?;
    }

    out.flush()?;
    Ok(())
}

/// Analyses a single string given on the command line.
pub fn run_dupes<W: Write>(input: &str, out: &mut W) -> CliResult<()> {
    if input.is_empty() {
        return Err(CliError::EmptyInput);
    }

    write_analysis(input, out)?;
    out.flush()?;
    Ok(())
}

/// Prompts for strings and analyses each one until the user answers anything but `y` to the
/// "another string?" question, or input runs out. Blank answers are skipped.
pub fn run_dupes_session<R, W>(mut input: R, mut out: W) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut analysed = 0usize;
    loop {
        writeln!(out)?;
        writeln!(out, "=== Duplicate Character Finder ===")?;
        write!(out, "Enter a string: ")?;
        out.flush()?;

        let line = match read_line(&mut input)? {
            Some(line) => line,
            None => {
                writeln!(out)?;
                break;
            }
        };
        if line.is_empty() {
            writeln!(out, "Empty string entered. Please enter a valid string.")?;
        } else {
            writeln!(out)?;
            write_analysis(&line, &mut out)?;
            analysed += 1;
        }

        write!(out, "\nDo you want to check another string? (y/n): ")?;
        out.flush()?;
        // Blank lines aren't an answer; keep waiting for one.
        let answer = loop {
            match read_line(&mut input)? {
                Some(answer) if answer.trim().is_empty() => continue,
                answer => break answer,
            }
        };
        match answer {
            Some(answer) if matches!(answer.trim().chars().next(), Some('y' | 'Y')) => {}
            Some(_) => break,
            None => {
                writeln!(out)?;
                break;
            }
        }
    }

    info!(analysed, "duplicate finder session finished");
    writeln!(out, "Thank you for using the Duplicate Character Finder!")?;
    out.flush()?;
    Ok(())
}

fn write_analysis<W: Write>(input: &str, out: &mut W) -> CliResult<()> {
    let report = find_duplicates(input);
    writeln!(out, "Analyzing string: \"{}\"", input)?;
    writeln!(out, "String length: {} characters", report.length)?;
    writeln!(out)?;
    write!(out, "{}", report)?;
    Ok(())
}

/// Reads one line without its line ending. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> CliResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
    line.truncate(len);
    Ok(Some(line))
}
