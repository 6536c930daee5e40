use crate::compat::{String, ToOwned, Vec};

/// Query parameter parse states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Name,
    Value,
    /// Inside a segment with a second `=`; skipped until the next `&`
    Invalid,
}

/// Ordered name/value map of URL query parameters.
///
/// Names are unique and non-empty; entries keep their insertion order so a
/// parsed query serializes back in input order. Values are passed through
/// as-is (no percent-encoding or decoding).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UrlQuery {
    params: Vec<(String, String)>,
}

impl UrlQuery {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Segments without `=` are ignored, and so are segments with a second
    /// `=` (`"a==b"`). A repeated name keeps the last value.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit::UrlQuery;
    ///
    /// assert_eq!(UrlQuery::parse("A=&B=C").to_string(), "A=&B=C");
    /// assert_eq!(UrlQuery::parse("A").to_string(), "");
    /// ```
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('?').unwrap_or(text);
        let mut result = Self::new();

        let mut state = ParseState::Name;
        let mut name_start = 0;
        let mut value_start = 0;
        for (i, byte) in text.bytes().enumerate() {
            match (state, byte) {
                (ParseState::Name, b'=') => {
                    state = ParseState::Value;
                    value_start = i + 1;
                }
                (ParseState::Name | ParseState::Invalid, b'&') => {
                    state = ParseState::Name;
                    name_start = i + 1;
                }
                (ParseState::Value, b'&') => {
                    result.set(&text[name_start..value_start - 1], Some(&text[value_start..i]));
                    state = ParseState::Name;
                    name_start = i + 1;
                }
                (ParseState::Value, b'=') => state = ParseState::Invalid,
                _ => {}
            }
        }
        if state == ParseState::Value {
            result.set(&text[name_start..value_start - 1], Some(&text[value_start..]));
        }

        result
    }

    /// Set `name` to `value`, keeping its position if it already exists.
    /// `None` removes the parameter; an empty `name` is ignored.
    pub fn set<'v>(&mut self, name: &str, value: impl Into<Option<&'v str>>) {
        if name.is_empty() {
            return;
        }
        let Some(value) = value.into() else {
            self.remove(name);
            return;
        };
        match self.params.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => value.clone_into(v),
            None => self.params.push((name.to_owned(), value.to_owned())),
        }
    }

    /// Get the value for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.params.iter().position(|(k, _)| k == name)?;
        Some(self.params.remove(index).1)
    }

    /// Set every parameter of `other` on `self`, in order.
    /// Values from `other` win on name collisions.
    pub fn merge(&mut self, other: &UrlQuery) {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
    }

    /// Check if there is at least one parameter
    pub fn any(&self) -> bool {
        !self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl core::fmt::Display for UrlQuery {
    /// Writes `name=value` pairs joined by `&`, without a leading `?`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

impl core::str::FromStr for UrlQuery {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for UrlQuery {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for UrlQuery {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UrlQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <String as serde::Deserialize>::deserialize(deserializer).map(|s| Self::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[test]
    fn test_parse_empty() {
        let query = UrlQuery::parse("");
        assert!(!query.any());
        assert_eq!(query.to_string(), "");
    }

    #[test]
    fn test_parse_single() {
        let query = UrlQuery::parse("A=B");
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("A"), Some("B"));
        assert_eq!(query.to_string(), "A=B");
    }

    #[test]
    fn test_parse_without_equals_is_ignored() {
        assert!(UrlQuery::parse("A").is_empty());
        assert_eq!(UrlQuery::parse("A&B=C").to_string(), "B=C");
    }

    #[test]
    fn test_parse_empty_value() {
        let query = UrlQuery::parse("A=");
        assert_eq!(query.get("A"), Some(""));
        assert_eq!(query.to_string(), "A=");
    }

    // Quirk kept for compatibility: a segment with a second `=` is dropped
    // whole. Not a rule to extend to other segment syntaxes.
    #[test]
    fn test_parse_double_equals_quirk() {
        assert_eq!(UrlQuery::parse("A==").to_string(), "");
        assert_eq!(UrlQuery::parse("A=B=C&D=E").to_string(), "D=E");
    }

    #[test]
    fn test_parse_with_question_mark() {
        assert_eq!(UrlQuery::parse("?A=B").get("A"), Some("B"));
    }

    #[test]
    fn test_parse_empty_name_is_ignored() {
        assert_eq!(UrlQuery::parse("=B&C=D").to_string(), "C=D");
    }

    #[test]
    fn test_parse_repeated_separators() {
        assert_eq!(UrlQuery::parse("&&A=1&&B=2&&").to_string(), "A=1&B=2");
    }

    #[test]
    fn test_parse_duplicate_name_last_wins() {
        let query = UrlQuery::parse("A=1&B=2&A=3");
        assert_eq!(query.to_string(), "A=3&B=2");
    }

    #[test]
    fn test_set_and_remove() {
        let mut query = UrlQuery::new();
        query.set("a", "1");
        query.set("b", "");
        assert_eq!(query.to_string(), "a=1&b=");

        query.set("a", "2");
        assert_eq!(query.to_string(), "a=2&b=");

        query.set("a", None);
        assert_eq!(query.to_string(), "b=");
        assert_eq!(query.remove("b"), Some(String::from("")));
        assert!(!query.any());
    }

    #[test]
    fn test_set_empty_name_is_noop() {
        let mut query = UrlQuery::new();
        query.set("", "x");
        assert!(query.is_empty());
    }

    #[test]
    fn test_merge_other_wins() {
        let mut query = UrlQuery::parse("a=1&b=2");
        query.merge(&UrlQuery::parse("b=3&c=4"));
        assert_eq!(query.to_string(), "a=1&b=3&c=4");
    }
}
