/// Fixture loader
///
/// Reads URL test cases from JSON. Plain strings in the array are comments.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case
    UrlTest {
        input: String,
        href: String,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: String,
    pub field: &'static str,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Load the bundled fixture file
pub fn load_fixtures() -> Vec<TestCase> {
    let data = include_str!("../data/urls.json");
    serde_json::from_str(data).expect("fixture file must be valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixtures() {
        let tests = load_fixtures();
        let url_tests = tests
            .iter()
            .filter(|t| matches!(t, TestCase::UrlTest { .. }))
            .count();
        assert!(url_tests >= 10);
    }

    #[test]
    fn test_result_summary() {
        let result = FixtureResult {
            passed: 3,
            failed: 1,
            failures: Vec::new(),
        };
        assert_eq!(result.summary(), "Passed: 3, Failed: 1");
    }
}
