//! Match Reporting
//!
//! One line per match: `{position},{mismatches}\t{matched_text}`.

use core::fmt;

use crate::search::Match;

impl fmt::Display for Match<'_> {
    /// Non-UTF-8 bytes are rendered lossily.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}\t", self.position, self.mismatches)?;
        for chunk in self.text.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

/// Write every match as a report line, in emission order.
///
/// Returns the number of lines written.
#[cfg(feature = "std")]
pub fn write_matches<'a, W, I>(mut out: W, matches: I) -> std::io::Result<usize>
where
    W: std::io::Write,
    I: IntoIterator<Item = Match<'a>>,
{
    let mut n = 0;
    for m in matches {
        writeln!(out, "{}", m)?;
        n += 1;
    }
    out.flush()?;
    Ok(n)
}
