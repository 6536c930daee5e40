use crate::checkers::parse_port;
use crate::compat::{String, ToOwned, ToString};
use crate::detect::{Fragment, classify_host, classify_path, classify_port, classify_scheme};
use crate::error::{ParseError, Result};
use crate::query::UrlQuery;
use crate::token::UrlToken;
use crate::tokenizer::{State, UrlTokenizer};

/// Store non-empty text, treating `""` as absent
fn owned(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_owned())
}

/// Single-text components a setter can assign directly
#[derive(Debug, Clone, Copy)]
enum Component {
    Scheme,
    Host,
    Port,
    Path,
}

/// Mutable, structured URL: `[scheme://]host[:port][path][?query]`.
///
/// Every component is optional. Setters treat `""` and `None` alike and
/// clear the component. Setters for host and path also accept text that
/// carries more structure (`"https://host:80"`, `"path?x=1"`) and spread it
/// over the matching components.
///
/// # Examples
///
/// ```
/// use urlkit::UrlBuilder;
///
/// let mut url = UrlBuilder::new();
/// url.set_host("www.example.com")
///     .append_path("cats")
///     .append_path("/dogs")
///     .set_query_parameter("size", "large");
/// assert_eq!(url.to_string(), "www.example.com/cats/dogs?size=large");
///
/// let url = UrlBuilder::parse("https://www.example.com:8080/index.html");
/// assert_eq!(url.scheme(), Some("https"));
/// assert_eq!(url.port(), Some("8080"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UrlBuilder {
    scheme: Option<String>,
    host: Option<String>,
    port: Option<String>,
    path: Option<String>,
    query: Option<UrlQuery>,
}

/// Values accepted as a URL by [`UrlBuilder::parse`].
/// Builders pass through unchanged, text is tokenized.
pub trait UrlSource {
    fn into_url_builder(self) -> UrlBuilder;
}

impl UrlSource for &str {
    fn into_url_builder(self) -> UrlBuilder {
        UrlBuilder::from_text(self)
    }
}

impl UrlSource for String {
    fn into_url_builder(self) -> UrlBuilder {
        UrlBuilder::from_text(&self)
    }
}

impl UrlSource for &String {
    fn into_url_builder(self) -> UrlBuilder {
        UrlBuilder::from_text(self)
    }
}

impl UrlSource for UrlBuilder {
    fn into_url_builder(self) -> UrlBuilder {
        self
    }
}

impl UrlSource for &UrlBuilder {
    fn into_url_builder(self) -> UrlBuilder {
        self.clone()
    }
}

/// Values accepted by [`UrlBuilder::set_port`]: text or a number.
/// `None` and empty text clear the port.
pub trait IntoPort {
    fn into_port(self) -> Option<String>;
}

impl IntoPort for &str {
    fn into_port(self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl IntoPort for String {
    fn into_port(self) -> Option<String> {
        Some(self)
    }
}

impl IntoPort for &String {
    fn into_port(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: IntoPort> IntoPort for Option<T> {
    fn into_port(self) -> Option<String> {
        self.and_then(IntoPort::into_port)
    }
}

macro_rules! impl_into_port_for_int {
    ($($ty:ty),*) => {
        $(
            impl IntoPort for $ty {
                fn into_port(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_into_port_for_int!(u16, u32, u64, usize, i32, i64);

impl UrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URL. Parsing never fails: malformed input is represented as
    /// closely as the tokenizer allows. A builder argument is returned as-is.
    pub fn parse<T: UrlSource>(input: T) -> Self {
        input.into_url_builder()
    }

    /// Get a copy of `input` without its query
    pub fn remove_query<T: UrlSource>(input: T) -> Self {
        let mut url = input.into_url_builder();
        url.query = None;
        url
    }

    fn from_text(text: &str) -> Self {
        let mut url = Self::new();
        for token in UrlTokenizer::new(text) {
            url.apply_token(token);
        }
        url
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Get the port as a number.
    /// Returns `Ok(None)` without a port and an error if the stored text is
    /// not a valid port number.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPort`] if the port is not a number in `0..=65535`.
    pub fn port_number(&self) -> Result<Option<u16>> {
        self.port
            .as_deref()
            .map(|port| parse_port(port).ok_or(ParseError::InvalidPort))
            .transpose()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the serialized query (without leading `?`)
    pub fn query(&self) -> Option<String> {
        self.query.as_ref().map(ToString::to_string)
    }

    pub fn query_params(&self) -> Option<&UrlQuery> {
        self.query.as_ref()
    }

    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query.as_ref().and_then(|query| query.get(name))
    }

    /// Set the scheme. A trailing `:` is dropped; text containing `://` also
    /// sets whatever follows it.
    pub fn set_scheme<'a>(&mut self, scheme: impl Into<Option<&'a str>>) -> &mut Self {
        self.assign(Component::Scheme, scheme.into(), classify_scheme);
        self
    }

    /// Set the host. `"https://www.example.com"` or `"www.example.com:1234"`
    /// are split into their components.
    pub fn set_host<'a>(&mut self, host: impl Into<Option<&'a str>>) -> &mut Self {
        self.assign(Component::Host, host.into(), classify_host);
        self
    }

    pub fn set_port(&mut self, port: impl IntoPort) -> &mut Self {
        let port = port.into_port();
        self.assign(Component::Port, port.as_deref(), classify_port);
        self
    }

    /// Set the path.
    ///
    /// A path holding an absolute URL (`"http://other.com/x"`) replaces
    /// scheme, host, port and path. Query parameters in the argument
    /// (`"path?a=1"`) are merged into the existing query and win on name
    /// collisions.
    pub fn set_path<'a>(&mut self, path: impl Into<Option<&'a str>>) -> &mut Self {
        self.assign(Component::Path, path.into(), classify_path);
        self
    }

    /// Append a segment to the path with exactly one `/` in between.
    /// Without an existing path this sets the path. Empty segments are ignored.
    pub fn append_path<'a>(&mut self, segment: impl Into<Option<&'a str>>) -> &mut Self {
        let Some(segment) = segment.into().filter(|s| !s.is_empty()) else {
            return self;
        };

        let path = match self.path.as_deref() {
            Some(current) => {
                let segment = segment.strip_prefix('/').unwrap_or(segment);
                let mut path = String::with_capacity(current.len() + segment.len() + 1);
                path.push_str(current);
                if !current.ends_with('/') {
                    path.push('/');
                }
                path.push_str(segment);
                path
            }
            None => segment.to_owned(),
        };

        if memchr::memchr(b'?', path.as_bytes()).is_some() {
            self.reparse(&path, State::Path);
        } else {
            self.path = Some(path);
        }
        self
    }

    /// Replace the whole query with the parameters parsed from `query`
    pub fn set_query<'a>(&mut self, query: impl Into<Option<&'a str>>) -> &mut Self {
        self.query = query
            .into()
            .filter(|q| !q.is_empty())
            .map(UrlQuery::parse);
        self
    }

    /// Set a single query parameter; `None` removes it.
    pub fn set_query_parameter<'v>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'v str>>,
    ) -> &mut Self {
        if !name.is_empty() {
            let query = self.query.get_or_insert_with(UrlQuery::new);
            query.set(name, value);
            if query.is_empty() {
                self.query = None;
            }
        }
        self
    }

    /// Replace every occurrence of `search` in every component.
    /// Results go through the regular setters, so replacements that
    /// introduce URL structure are split up again.
    pub fn replace_all(&mut self, search: &str, replace: &str) -> &mut Self {
        if search.is_empty() {
            return self;
        }
        let scheme = self.scheme.as_deref().map(|s| s.replace(search, replace));
        let host = self.host.as_deref().map(|s| s.replace(search, replace));
        let port = self.port.as_deref().map(|s| s.replace(search, replace));
        let path = self.path.as_deref().map(|s| s.replace(search, replace));
        let query = self.query().map(|s| s.replace(search, replace));

        self.set_scheme(scheme.as_deref())
            .set_host(host.as_deref())
            .set_port(port)
            .set_path(path.as_deref())
            .set_query(query.as_deref())
    }

    fn slot(&mut self, component: Component) -> &mut Option<String> {
        match component {
            Component::Scheme => &mut self.scheme,
            Component::Host => &mut self.host,
            Component::Port => &mut self.port,
            Component::Path => &mut self.path,
        }
    }

    fn assign(
        &mut self,
        component: Component,
        value: Option<&str>,
        classify: fn(&str) -> Fragment<'_>,
    ) {
        match value.filter(|v| !v.is_empty()).map(classify) {
            None => *self.slot(component) = None,
            Some(Fragment::Plain(text)) => *self.slot(component) = owned(text),
            Some(Fragment::Structured { text, start }) => self.reparse(text, start),
            Some(Fragment::Absolute(url)) => self.reroot(url),
        }
    }

    /// Tokenize `text` from `start` and apply every token
    fn reparse(&mut self, text: &str, start: State) {
        tracing::trace!(fragment = text, start = ?start, "splitting structured component");
        for token in UrlTokenizer::with_state(text, start) {
            self.apply_token(token);
        }
    }

    /// Replace scheme, host, port and path with those of `url`
    fn reroot(&mut self, url: &str) {
        tracing::debug!(url, "path holds an absolute URL, replacing the base");
        self.scheme = None;
        self.host = None;
        self.port = None;
        self.path = None;
        self.reparse(url, State::SchemeOrHost);
    }

    fn apply_token(&mut self, token: UrlToken<'_>) {
        match token {
            UrlToken::Scheme(text) => self.scheme = owned(text),
            UrlToken::Host(text) => self.host = owned(text),
            UrlToken::Port(text) => self.port = owned(text),
            UrlToken::Path(text) => {
                // A bare "/" never replaces a longer path
                if text != "/" || self.path.as_deref().is_none_or(|p| p == "/") {
                    self.path = owned(text);
                }
            }
            UrlToken::Query(text) => {
                let query = UrlQuery::parse(text);
                if query.any() {
                    self.query
                        .get_or_insert_with(UrlQuery::new)
                        .merge(&query);
                }
            }
        }
    }
}

impl core::fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}://")?;
        }
        if let Some(host) = &self.host {
            f.write_str(host)?;
        }
        if let Some(port) = &self.port {
            write!(f, ":{port}")?;
        }
        if let Some(path) = &self.path {
            let has_authority = self.scheme.is_some() || self.host.is_some() || self.port.is_some();
            if has_authority && !path.starts_with('/') {
                f.write_str("/")?;
            }
            f.write_str(path)?;
        }
        if let Some(query) = self.query.as_ref().filter(|q| q.any()) {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

impl core::str::FromStr for UrlBuilder {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::from_text(s))
    }
}

impl From<&str> for UrlBuilder {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<String> for UrlBuilder {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrlBuilder {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UrlBuilder {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <String as serde::Deserialize>::deserialize(deserializer).map(|s| Self::from_text(&s))
    }
}
