pub mod expected;
pub mod fixtures;

pub const TRANSCRIPT_FORMAT_V1: &str = "input-transcript-v1";

pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    use std::fmt::Write;

    let missing = "<missing>";
    let max = expected.len().max(actual.len());
    let first_mismatch = (0..max).find(|&i| expected.get(i) != actual.get(i));

    let mut out = String::new();
    let Some(i) = first_mismatch else {
        let _ = writeln!(&mut out, "transcripts match ({} lines)", expected.len());
        return out;
    };

    let start = i.saturating_sub(2);
    let end = (i + 3).min(max);
    let _ = writeln!(
        &mut out,
        "first mismatch at line {} (showing {}..={}):",
        i + 1,
        start + 1,
        end
    );
    for idx in start..end {
        let left = expected.get(idx).map(String::as_str).unwrap_or(missing);
        let right = actual.get(idx).map(String::as_str).unwrap_or(missing);
        let marker = if idx == i { ">" } else { " " };
        let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", idx + 1);
        let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", idx + 1);
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}
