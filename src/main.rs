use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use unicode_segmentation::UnicodeSegmentation;

use crate::options::{Options, ProperFraction, SortOrder, Symbols, Threshold};
use word_trie::trie::{InsertResult, Trie};

mod count_tree;
mod options;
mod unicode_bar;

const BAR_WIDTH: usize = 20;
const TARGET_MAX_LINE_WIDTH: usize = 100;
const WORD_MARKER: &str = " *";

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    init_logging(options.verbose);
    debug!(?options, "parsed options");

    // Read words from input, or stdin.
    let input: Box<dyn BufRead> = if let Some(file) = &options.input {
        Box::new(BufReader::new(open(file)?))
    } else {
        Box::new(io::stdin().lock())
    };

    // Write search results and trie to output, or stdout.
    let mut output: Box<dyn Write> = if let Some(file) = &options.output {
        let file = File::create(file)
            .with_context(|| format!("could not create output file '{}'", file.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(io::stdout().lock())
    };

    match options.symbols {
        Symbols::Chars => run(&options, input, &mut output, chars)?,
        Symbols::Graphemes => run(&options, input, &mut output, graphemes)?,
    }

    output.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    // Logs go to stderr, such that stdout contains only the results.
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open(file: &Path) -> anyhow::Result<File> {
    File::open(file).with_context(|| format!("could not open file '{}'", file.display()))
}

fn chars(word: &str) -> Vec<char> {
    word.chars().collect()
}

fn graphemes(word: &str) -> Vec<String> {
    word.graphemes(true).map(str::to_owned).collect()
}

/// Builds the trie from `input`, then searches for all queries and/or prints the trie.
fn run<K>(
    options: &Options,
    input: impl BufRead,
    output: &mut dyn Write,
    symbols: fn(&str) -> Vec<K>,
) -> anyhow::Result<()>
where
    K: Ord + Clone + Display,
{
    let mut trie = Trie::new();
    let mut skipped = 0;

    for (i, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("input line {}: could not read", i + 1))?;

        for word in split_words(&line, options) {
            if word.is_empty() {
                debug!(line = i + 1, "skipping empty word");
                skipped += 1;
                continue;
            }
            if trie.insert(symbols(word)) == InsertResult::AlreadyPresent {
                debug!(line = i + 1, word, "word was already inserted");
            }
        }
    }
    info!(words = trie.len(), nodes = trie.node_count(), skipped, "built trie");

    let queries = read_queries(options)?;
    for query in &queries {
        let result = trie.search_with(symbols(query), options.match_policy);
        let status = if result.matched { "found" } else { "not found" };
        writeln!(output, "'{query}': {status}, matched '{}'", result.prefix_string())?;
    }

    if queries.is_empty() || options.tree {
        // Convert the trie to a tree, where each subtree contains the count of all its words.
        let mut count_tree = count_tree::Node::from(&trie);

        if options.compact {
            count_tree.compact();
        }

        // Optionally sort by subtree sizes.
        match options.sort {
            Some(SortOrder::Count) => count_tree.sort_by_count_desc(),
            Some(SortOrder::Alphabetical) => count_tree.sort_by_str(),
            None => {}
        };

        print_tree(output, &count_tree, 0, options, count_tree.count)?;
    }

    Ok(())
}

fn split_words<'line>(line: &'line str, options: &Options) -> Vec<&'line str> {
    let words: Vec<&str> = match &options.split_delimiter {
        Some(delimiter) => delimiter.split(line).collect(),
        None => vec![line],
    };
    if options.trim_input {
        words.into_iter().map(str::trim).collect()
    } else {
        words
    }
}

/// Returns the words given with `--query`, followed by the non-blank lines of `--query-file`.
/// Both are trimmed with `--trim-input`, like the input words.
fn read_queries(options: &Options) -> anyhow::Result<Vec<String>> {
    let trim = |query: &str| if options.trim_input { query.trim().to_owned() } else { query.to_owned() };

    let mut queries: Vec<String> = options.queries.iter().map(|query| trim(query)).collect();
    if let Some(file) = &options.query_file {
        for (i, line) in BufReader::new(open(file)?).lines().enumerate() {
            let line = line.with_context(|| format!("query file line {}: could not read", i + 1))?;
            if !line.trim().is_empty() {
                queries.push(trim(&line));
            }
        }
    }
    Ok(queries)
}

fn print_tree(
    output: &mut dyn Write,
    node: &count_tree::Node,
    level: usize,
    options: &Options,
    total_count: u64,
) -> io::Result<()> {
    let fraction = ProperFraction::new(node.count, total_count).unwrap_or(ProperFraction(1.0));
    match options.min {
        Some(Threshold::Count(threshold)) if node.count < threshold => return Ok(()),
        Some(Threshold::Fraction(threshold)) if fraction < threshold => return Ok(()),
        _ => {},
    }

    let mut line = options.indent_with.repeat(level);
    line.push_str(&node.count.to_string());
    if options.percent {
        line.push_str(&format!(" ({:.1}%)", fraction.0 * 100.0));
    }
    if options.quote {
        line.push_str(&format!(" '{}'", node.str));
    } else if !node.str.is_empty() {
        line.push(' ');
        line.push_str(&node.str);
    }
    if node.is_word {
        line.push_str(WORD_MARKER);
    }

    if options.bar {
        let bar = unicode_bar::unicode_bar(fraction, BAR_WIDTH);
        // Put bar right of the other information and align such that total width is not exceeded.
        writeln!(output, "{:width$}{}", line, bar, width = TARGET_MAX_LINE_WIDTH - BAR_WIDTH)?;
    } else {
        writeln!(output, "{line}")?;
    }

    for child in node.children.iter() {
        print_tree(output, child, level + 1, options, total_count)?;
    }
    Ok(())
}
