// tests/integration_tests/report_test.rs
use super::common::{KEYWORDS, setup_clean_directory, setup_trace_directory};
use anyhow::Result;
use tracescan::{ScanConfig, Scanner, write_findings};

#[test]
fn test_clean_directory_reports_none_found() -> Result<()> {
    let temp_dir = setup_clean_directory()?;

    let report = Scanner::new(ScanConfig::new([temp_dir.path()], KEYWORDS)).run();
    assert!(!report.has_findings());
    assert_eq!(report.entries_visited, 2);

    let mut out = Vec::new();
    write_findings(&mut out, &report.findings)?;
    assert_eq!(String::from_utf8(out)?, "[-] No traces found.\n");

    Ok(())
}

#[test]
fn test_traces_listed_under_header() -> Result<()> {
    let temp_dir = setup_trace_directory()?;

    let report = Scanner::new(ScanConfig::new([temp_dir.path()], KEYWORDS)).run();

    let mut out = Vec::new();
    write_findings(&mut out, &report.findings)?;
    let text = String::from_utf8(out)?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "[+] Traces found:");
    let romex = format!("  - {}", temp_dir.path().join("setup_romex.exe").display());
    let primo = format!(
        "  - {}",
        temp_dir.path().join("data").join("primocache_cache").display()
    );
    assert!(lines.contains(&romex.as_str()));
    assert!(lines.contains(&primo.as_str()));

    Ok(())
}
