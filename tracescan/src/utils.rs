// src/utils.rs
use crate::models::Finding;
use std::io::{self, Write};

pub const FOUND_HEADER: &str = "[+] Traces found:";
pub const NONE_FOUND: &str = "[-] No traces found.";

/// Writes the human-readable report: a header plus one line per finding, or a
/// single line when nothing matched.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_findings<W: Write>(out: &mut W, findings: &[Finding]) -> io::Result<()> {
    if findings.is_empty() {
        return writeln!(out, "{NONE_FOUND}");
    }

    writeln!(out, "{FOUND_HEADER}")?;
    for finding in findings {
        writeln!(out, "  - {finding}")?;
    }
    Ok(())
}

/// [`write_findings`] to standard output.
///
/// # Errors
///
/// Returns an error if standard output cannot be written or flushed.
pub fn print_findings(findings: &[Finding]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_findings(&mut out, findings)?;
    out.flush()
}
