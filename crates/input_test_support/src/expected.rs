use crate::TRANSCRIPT_FORMAT_V1;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub struct ExpectedTranscript {
    pub final_value: Option<String>,
    pub lines: Vec<String>,
}

/// Parse an `.expected` file: `# key: value` headers followed by transcript
/// lines. Leading whitespace of transcript lines is significant.
pub fn parse_expected_transcript(path: &Path) -> ExpectedTranscript {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read expected transcript {path:?}: {err}"));
    parse_expected_str(&content, path)
}

pub fn parse_expected_str(content: &str, path: &Path) -> ExpectedTranscript {
    const SUPPORTED: &[&str] = &["format", "final-value"];

    let mut headers = BTreeMap::<String, String>::new();
    let mut lines = Vec::new();

    for raw_line in content.lines() {
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }
        if let Some(stripped) = line.strip_prefix('#') {
            let Some((key, value)) = stripped.split_once(':') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            assert!(
                SUPPORTED.contains(&key.as_str()),
                "unsupported header '{key}' in {path:?}"
            );
            if headers.is_empty() {
                assert_eq!(
                    key, "format",
                    "first header must be 'format' in {path:?}, found '{key}'"
                );
            }
            if headers.insert(key.clone(), value.trim().to_string()).is_some() {
                panic!("duplicate header '{key}' in {path:?}");
            }
        } else {
            lines.push(line.to_string());
        }
    }

    let format = headers
        .get("format")
        .unwrap_or_else(|| panic!("missing required 'format' header in {path:?}"));
    assert_eq!(
        format, TRANSCRIPT_FORMAT_V1,
        "unsupported format in {path:?}"
    );
    assert!(
        lines.first().map(String::as_str) == Some("> mount"),
        "expected transcript {path:?} must start with '> mount'"
    );

    ExpectedTranscript {
        final_value: headers.remove("final-value").map(unquote),
        lines,
    }
}

fn unquote(raw: String) -> String {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map(str::to_string)
        .unwrap_or(raw)
}
