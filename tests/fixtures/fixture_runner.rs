/// Fixture runner
///
/// Parses every fixture input with `UrlBuilder` and compares the result.
use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase, load_fixtures};
use urlkit::UrlBuilder;

fn check(
    result: &mut Vec<FixtureFailure>,
    test_num: usize,
    input: &str,
    field: &'static str,
    expected: Option<&str>,
    actual: Option<&str>,
) -> bool {
    if expected == actual {
        return true;
    }
    result.push(FixtureFailure {
        test_num,
        input: input.to_string(),
        field,
        expected: expected.map(str::to_string),
        actual: actual.map(str::to_string),
    });
    false
}

/// Run fixtures and return results
pub fn run_fixtures(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UrlTest {
            input,
            href,
            scheme,
            host,
            port,
            path,
            query,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let url = UrlBuilder::parse(input.as_str());
        let actual_href = url.to_string();
        let actual_query = url.query();

        let failures = &mut result.failures;
        let checks = [
            check(failures, test_num, &input, "href", Some(href.as_str()), Some(actual_href.as_str())),
            check(failures, test_num, &input, "scheme", scheme.as_deref(), url.scheme()),
            check(failures, test_num, &input, "host", host.as_deref(), url.host()),
            check(failures, test_num, &input, "port", port.as_deref(), url.port()),
            check(failures, test_num, &input, "path", path.as_deref(), url.path()),
            check(
                failures,
                test_num,
                &input,
                "query",
                query.as_deref(),
                actual_query.as_deref(),
            ),
        ];

        if checks.iter().all(|&passed| passed) {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_fixtures() {
        let result = run_fixtures(load_fixtures());

        for failure in &result.failures {
            eprintln!(
                "  Test #{} ({:?}) field {}: expected {:?}, got {:?}",
                failure.test_num, failure.input, failure.field, failure.expected, failure.actual
            );
        }

        assert!(result.passed > 0, "No fixtures passed!");
        assert_eq!(result.failed, 0, "{}", result.summary());
    }

    #[test]
    fn test_reparse_is_stable() {
        for test in load_fixtures() {
            if let TestCase::UrlTest { input, .. } = test {
                let once = UrlBuilder::parse(input.as_str());
                let twice = UrlBuilder::parse(once.to_string());
                assert_eq!(twice.to_string(), once.to_string(), "{input:?}");
            }
        }
    }
}
