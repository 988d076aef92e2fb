//! `lths` command line front-end
//!
//! Validates user input, builds the alphabet and hands the search to
//! [`HammingSearcher`]. Matches are streamed to the writer as they are found.

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use crate::alphabet::Alphabet;
use crate::error::validate;
use crate::report::write_matches;
use crate::search::HammingSearcher;

#[derive(Parser, Debug)]
#[command(
    name = "lths",
    version,
    about = "LTHS: Linear Time Hamming Search",
    long_about = "Search for a pattern in a text with k-mismatches under the Hamming distance model"
)]
pub struct Args {
    /// Alphabet string, e.g. ACGT [default: the distinct bytes of the pattern]
    #[arg(short = 'A', long)]
    pub alphabet: Option<String>,

    /// The pattern (needle)
    #[arg(short, long)]
    pub pattern: String,

    /// K-mismatches threshold
    #[arg(short, long, allow_negative_numbers = true)]
    pub k_mismatches: i64,

    /// The text to search (haystack)
    #[arg(short, long, required_unless_present = "text_file", conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the text (haystack) from a file
    #[arg(short = 'f', long, value_name = "PATH")]
    pub text_file: Option<PathBuf>,

    /// Print only the number of matches
    #[arg(short, long)]
    pub count: bool,
}

/// Run one search and write the report to `out`.
pub fn run<W: Write>(args: &Args, mut out: W) -> Result<()> {
    let text: Cow<'_, [u8]> = match (&args.text, &args.text_file) {
        (Some(text), _) => Cow::Borrowed(text.as_bytes()),
        (None, Some(path)) => Cow::Owned(read_text(path)?),
        (None, None) => bail!("no text given: use --text or --text-file"),
    };
    let pattern = args.pattern.as_bytes();

    validate(pattern.len(), text.len(), args.k_mismatches)?;
    let k = usize::try_from(args.k_mismatches)?;

    let alphabet = match &args.alphabet {
        Some(symbols) => Alphabet::new(symbols.as_bytes()),
        None => Alphabet::from_pattern(pattern),
    };
    if let Some(&c) = pattern.iter().find(|&&c| !alphabet.contains(c)) {
        warn!(
            "pattern byte {:?} is not in the alphabet; such positions always match",
            c as char
        );
    }
    info!(
        "searching {} bytes for a {}-byte pattern, k={}, alphabet {:?}",
        text.len(),
        pattern.len(),
        k,
        alphabet
    );

    let searcher = HammingSearcher::new(alphabet, pattern, k);
    if args.count {
        writeln!(out, "{}", searcher.count(&text))?;
        out.flush()?;
    } else {
        let n = write_matches(out, searcher.find_iter(&text))?;
        info!("{} matches", n);
    }
    Ok(())
}

/// Whole file, minus one trailing line ending
fn read_text(path: &Path) -> Result<Vec<u8>> {
    let mut bytes =
        fs::read(path).with_context(|| format!("failed to read text file {}", path.display()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(core::iter::once("lths").chain(argv.iter().copied())).unwrap()
    }

    fn output(argv: &[&str]) -> Result<String> {
        let mut out = Vec::new();
        run(&parse(argv), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exact_report() {
        let out = output(&["-A", "ACGT", "-p", "ACGT", "-k", "0", "-t", "TTACGTTT"]).unwrap();
        assert_eq!(out, "2,0\tACGT\n");
    }

    #[test]
    fn test_mismatch_report() {
        let out = output(&[
            "--alphabet",
            "ACGT",
            "--pattern",
            "ACGT",
            "--k-mismatches",
            "1",
            "--text",
            "ACCTACGA",
        ])
        .unwrap();
        assert_eq!(out, "0,1\tACCT\n4,1\tACGA\n");
    }

    #[test]
    fn test_alphabet_from_pattern() {
        let out = output(&["-p", "ACGT", "-k", "1", "-t", "ACCTACGA"]).unwrap();
        assert_eq!(out, "0,1\tACCT\n4,1\tACGA\n");
    }

    #[test]
    fn test_count() {
        let out = output(&["-p", "ACGT", "-k", "1", "-t", "ACCTACGA", "--count"]).unwrap();
        assert_eq!(out, "2\n");
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let err = output(&["-p", "ACGTA", "-k", "0", "-t", "ACGT"]).unwrap_err();
        assert!(err.to_string().contains("pattern is longer than text"));
    }

    #[test]
    fn test_negative_k() {
        let err = output(&["-p", "ACGT", "-k", "-1", "-t", "ACGTACGT"]).unwrap_err();
        assert!(err.to_string().contains("invalid k-mismatches value -1"));
    }

    #[test]
    fn test_k_equal_to_pattern_len() {
        let err = output(&["-p", "ACGT", "-k", "4", "-t", "ACGTACGT"]).unwrap_err();
        assert!(err.to_string().contains("invalid k-mismatches value 4"));
    }

    #[test]
    fn test_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"TTACGTTT\r\n").unwrap();
        let path = file.path().to_str().unwrap();

        let out = output(&["-A", "ACGT", "-p", "ACGT", "-k", "0", "-f", path]).unwrap();
        assert_eq!(out, "2,0\tACGT\n");
    }

    #[test]
    fn test_missing_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = output(&["-p", "AC", "-k", "0", "-f", path.to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().contains("failed to read text file"));
    }

    #[test]
    fn test_text_required() {
        let argv = ["lths", "-p", "ACGT", "-k", "0"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_text_and_file_conflict() {
        let argv = ["lths", "-p", "AC", "-k", "0", "-t", "ACAC", "-f", "text.txt"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_k_required() {
        let argv = ["lths", "-p", "ACGT", "-t", "ACGT"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
