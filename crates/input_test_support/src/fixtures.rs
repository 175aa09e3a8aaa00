use crate::expected::{ExpectedTranscript, parse_expected_transcript};
use dom::Session;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ScenarioCase {
    pub id: String,
    pub session_path: PathBuf,
    pub session: Session,
    pub expected: ExpectedTranscript,
}

/// Every `<id>.toml` session in `dir` with its `<id>.expected` transcript,
/// sorted by id.
pub fn load_scenarios(dir: &Path) -> Vec<ScenarioCase> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to read fixture dir {dir:?}: {err}"));

    let mut cases = Vec::new();
    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to list {dir:?}: {err}"))
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_else(|| panic!("non-utf8 fixture name {path:?}"))
            .to_string();
        let session = Session::load(&path)
            .unwrap_or_else(|err| panic!("failed to load session {path:?}: {err}"));
        let expected_path = path.with_extension("expected");
        assert!(
            expected_path.exists(),
            "missing expected transcript for '{id}': {expected_path:?}"
        );
        cases.push(ScenarioCase {
            id,
            session_path: path,
            session,
            expected: parse_expected_transcript(&expected_path),
        });
    }
    cases.sort_by(|a, b| a.id.cmp(&b.id));
    cases
}
