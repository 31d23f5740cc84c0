use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use clap::ValueHint;
use regex::Regex;

use word_trie::trie::MatchPolicy;

#[derive(Parser, Debug)]
#[clap(
    author = clap::crate_authors!(),
    version = clap::crate_version!(),
    about = clap::crate_description!(),
)]
pub struct Options {
    /// Input file to read the words from, one per line. [default: stdin]
    #[clap(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file to write the search results and the trie to. [default: stdout]
    #[clap(short, long = "out", value_name = "file", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Search for the given word after inserting all input words. Can be given multiple times.
    #[clap(short, long = "query", value_name = "word")]
    pub queries: Vec<String>,

    /// File with words to search for, one per line.
    #[clap(short = 'Q', long, value_name = "file", value_hint = ValueHint::FilePath)]
    pub query_file: Option<PathBuf>,

    /// When a searched word counts as found: only if it was inserted as a word ("terminal"),
    /// or already if it is a prefix of an inserted word ("path").
    /// [default: terminal]
    #[clap(short = 'M', long, value_name = "terminal|path", default_value = "terminal", hide_default_value = true)]
    pub match_policy: MatchPolicy,

    /// Print the trie, also when searching for words. [default: only if there are no queries]
    #[clap(long)]
    pub tree: bool,

    /// Trim leading and trailing whitespace from each input word and from each query, given with
    /// --query or read from --query-file.
    /// [default: false]
    #[clap(short, long)]
    pub trim_input: bool,

    /// Split each input line into several words at the given regex pattern.
    /// For example, -d'\s+' reads whitespace separated words.
    /// [default: one word per line]
    #[clap(short = 'd', long, value_name = "regex")]
    pub split_delimiter: Option<Regex>,

    /// What a single symbol, i.e., the label of a trie node, is: a Unicode scalar value ("chars")
    /// or an extended grapheme cluster ("graphemes").
    /// [default: chars]
    #[clap(short = 'g', long, value_name = "chars|graphemes", default_value = "chars", hide_default_value = true)]
    pub symbols: Symbols,

    /// Merge chains of nodes that neither end a word nor branch into a single line.
    /// [default: false]
    #[clap(short, long)]
    pub compact: bool,

    /// Sort the trie either by the count of contained words, i.e., largest subtries come first,
    /// or alphabetically.
    /// [default: symbol order]
    #[clap(short, long, value_name = "c[ount]|a[lpha]")]
    pub sort: Option<SortOrder>,

    /// Character(s) with which to indent levels of the tree. [default: "  "]
    #[clap(short, long, default_value = "  ", value_name = "string", hide_default_value = true)]
    pub indent_with: String,

    /// Quote the strings in the output. [default: false]
    #[clap(long)]
    pub quote: bool,

    /// Do not show subtries below an integer <count> or that account for less than <fraction> of the total count. [default: disabled]
    #[clap(short, long, value_name = "count|fraction")]
    pub min: Option<Threshold>,

    /// Show a percentage next to the count. [default: false]
    #[clap(short, long)]
    pub percent: bool,

    /// Show a textual barchart next to the count. [default: false]
    #[clap(short, long)]
    pub bar: bool,

    /// Log debug information to stderr, unless overridden by RUST_LOG. [default: false]
    #[clap(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Count,
    Alphabetical,
}

impl FromStr for SortOrder {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" | "count" => Ok(SortOrder::Count),
            "a" | "alpha" => Ok(SortOrder::Alphabetical),
            _ => Err("sort order must be either 'count' or 'alpha'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbols {
    Chars,
    Graphemes,
}

impl FromStr for Symbols {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" | "chars" => Ok(Symbols::Chars),
            "g" | "graphemes" => Ok(Symbols::Graphemes),
            _ => Err("symbols must be either 'chars' or 'graphemes'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    Count(u64),
    Fraction(ProperFraction),
}

impl FromStr for Threshold {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(count) = s.parse() {
            Ok(Threshold::Count(count))
        } else {
            let fraction = s.parse()?;
            Ok(Threshold::Fraction(fraction))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ProperFraction(pub f64);

impl ProperFraction {
    /// Returns `None` if `nominator > denominator`, and 1.0 for `0 / 0`.
    pub fn new(nominator: u64, denominator: u64) -> Option<Self> {
        if nominator > denominator {
            None
        } else if denominator == 0 {
            Some(ProperFraction(1.0))
        } else {
            Some(ProperFraction(nominator as f64 / denominator as f64))
        }
    }

    pub fn from(f: f64) -> Option<Self> {
        if !(0.0..=1.0).contains(&f) {
            None
        } else {
            Some(ProperFraction(f))
        }
    }
}

impl FromStr for ProperFraction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fraction: f64 = s
            .parse()
            .map_err(|_| "fraction must be a decimal value, e.g., 0.1 or .5")?;
        ProperFraction::from(fraction).ok_or("fraction must be in range [0, 1]")
    }
}
