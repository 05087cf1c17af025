//! Test fixtures: fake entity sources and temporary workspaces.
//!
//! The fakes stand in for the local NER model and the remote service so
//! the pipeline can be exercised without network access.

use anyhow::Result;
use censoror::{
    CensorError, CensorResult, EncodingType, EntityAnalyzer, EntityCategory, EntityMatch,
    EntityRecognizer, RecognizedSpan, RedactionService,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Text that makes [`FakeAnalyzer`] fail, simulating a service outage.
pub const FAIL_MARKER: &str = "<<service-outage>>";

/// Recognizer that reports every configured span found in the text.
#[derive(Debug, Clone, Default)]
pub struct FakeRecognizer {
    spans: Vec<RecognizedSpan>,
}

impl FakeRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, name: &str) -> Self {
        self.spans.push(RecognizedSpan::new(name, "PERSON"));
        self
    }

    pub fn with_span(mut self, text: &str, label: &str) -> Self {
        self.spans.push(RecognizedSpan::new(text, label));
        self
    }
}

impl EntityRecognizer for FakeRecognizer {
    fn recognize(&self, text: &str) -> CensorResult<Vec<RecognizedSpan>> {
        Ok(self
            .spans
            .iter()
            .filter(|span| text.contains(&span.text))
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Analyzer that reports every configured entity found in the text.
#[derive(Debug, Clone, Default)]
pub struct FakeAnalyzer {
    entities: Vec<EntityMatch>,
}

impl FakeAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, label: &str) -> Self {
        self.entities
            .push(EntityMatch::new(text, EntityCategory::from_label(label)));
        self
    }
}

impl EntityAnalyzer for FakeAnalyzer {
    fn analyze_entities(
        &self,
        text: &str,
        encoding: EncodingType,
    ) -> CensorResult<Vec<EntityMatch>> {
        assert_eq!(encoding, EncodingType::Utf8, "service must be asked for UTF-8");
        if text.contains(FAIL_MARKER) {
            return Err(CensorError::RemoteService {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        Ok(self
            .entities
            .iter()
            .filter(|entity| text.contains(&entity.text))
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Builds a service from fakes.
pub fn fake_service(recognizer: FakeRecognizer, analyzer: FakeAnalyzer) -> RedactionService {
    RedactionService::with_block_strategy(Box::new(recognizer), Box::new(analyzer))
}

/// Temporary directory holding input files and an output directory.
///
/// # Example
///
/// ```no_run
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let ws = TestWorkspace::new()?
///     .with_file("a.txt", "Contact Jane Doe")?
///     .with_file("b.md", "ignored")?;
/// # Ok(())
/// # }
/// ```
pub struct TestWorkspace {
    dir: TempDir,
    inputs: Vec<PathBuf>,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
            inputs: Vec::new(),
        })
    }

    /// Writes a text file relative to the workspace root.
    pub fn with_file(mut self, name: &str, content: &str) -> Result<Self> {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        self.inputs.push(path);
        Ok(self)
    }

    /// Writes a file with raw bytes, e.g. invalid UTF-8.
    pub fn with_bytes(mut self, name: &str, content: &[u8]) -> Result<Self> {
        let path = self.dir.path().join(name);
        fs::write(&path, content)?;
        self.inputs.push(path);
        Ok(self)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("censored")
    }

    /// Reads the censored copy of `name`.
    pub fn censored(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(
            self.output_dir().join(format!("{}.censored", name)),
        )?)
    }
}
