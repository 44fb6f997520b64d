//! HTTP header collection shared by request and response builders.
//!
//! Headers are stored in an ordered map keyed by the canonical header name
//! (`Content-Type`, `X-Request-Id`, ...), so lookups are case-insensitive
//! while serialization keeps one stable spelling. Each name maps to the
//! ordered list of its values.
//!
//! Unlike a plain multimap, the collection applies the protocol rules from
//! [`HeaderRules`]:
//! - single-value headers keep only their latest value, even when added to;
//! - folded-multi headers (`Set-Cookie`) are written as one wire line per
//!   value and are never comma-split when ingested.
//!
//! Raw `Name: value` lines are ingested either verbatim (the default) or
//! split on commas, depending on how the collection was derived with
//! [`Headers::with_raw_header_comma_separation_enabled`].

use indexmap::IndexMap;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::{self, HeaderRules};
use crate::http::SET_COOKIE;
use crate::http::error::HeaderError;
use crate::http::name::normalize_name;
use crate::http::value::HeaderValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headers {
    headers: IndexMap<String, Vec<String>>,
    comma_split_raw_values: bool,
    rules: Arc<HeaderRules>,
}

impl Default for Headers {
    fn default() -> Self {
        Self::new()
    }
}

impl Headers {
    /// An empty collection using the process-wide [`config::rules`].
    pub fn new() -> Self {
        Self::with_rules(config::rules())
    }

    pub fn with_rules(rules: Arc<HeaderRules>) -> Self {
        Self {
            headers: IndexMap::new(),
            comma_split_raw_values: false,
            rules,
        }
    }

    /// Builds a collection from `[name, value]` pairs, adding each in order.
    ///
    /// A pair may omit its value, which then counts as empty. A pair without
    /// a name (empty, or a `Null` first element) fails the whole call.
    ///
    /// ```
    /// use hyperheaders::Headers;
    ///
    /// let headers = Headers::from_name_value_pairs(vec![
    ///     vec!["x-foo", "bar"],
    ///     vec!["x-foo", "baz"],
    ///     vec!["x-empty"],
    /// ]).unwrap();
    /// assert_eq!(headers.get_header("X-Foo"), ["bar", "baz"]);
    /// assert_eq!(headers.get_header("X-Empty"), [""]);
    /// ```
    pub fn from_name_value_pairs<I, P, V>(pairs: I) -> Result<Self, HeaderError>
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = V>,
        V: Into<HeaderValue>,
    {
        Self::from_name_value_pairs_with_rules(pairs, config::rules())
    }

    /// Like [`Headers::from_name_value_pairs`], applying `rules` instead of
    /// the process-wide ones.
    pub fn from_name_value_pairs_with_rules<I, P, V>(
        pairs: I,
        rules: Arc<HeaderRules>,
    ) -> Result<Self, HeaderError>
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = V>,
        V: Into<HeaderValue>,
    {
        let mut parsed = Vec::new();
        for (index, pair) in pairs.into_iter().enumerate() {
            let mut pair = pair.into_iter().map(Into::into);
            let name = match pair.next() {
                None | Some(HeaderValue::Null) => {
                    tracing::debug!(index, "name/value pair without a name");
                    return Err(HeaderError::InvalidPairStructure { index });
                }
                Some(name) => name.stringify(),
            };
            parsed.push((name, pair.next().unwrap_or(HeaderValue::Null)));
        }

        let mut headers = Headers::with_rules(rules);
        for (name, value) in parsed {
            headers.add_header(name, value);
        }
        Ok(headers)
    }

    /// Parses a block of raw header lines separated by `\r\n` or `\n`.
    ///
    /// Blank lines are skipped. The first malformed line fails the parse.
    /// Uses the process-wide rules; start from [`Headers::with_rules`] and
    /// call [`Headers::with_raw_block`] to apply others.
    pub fn parse_raw_block(text: &str) -> Result<Self, HeaderError> {
        Headers::new().with_raw_block(text)
    }

    /// Adds every raw line of `text` to this collection, honoring its
    /// comma-splitting mode. Consumes `self` so a failed parse leaves
    /// nothing half-filled behind.
    pub fn with_raw_block(mut self, text: &str) -> Result<Self, HeaderError> {
        for line in text.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() {
                continue;
            }
            self.add_raw_header(line)?;
        }
        Ok(self)
    }

    /// A deep copy of this collection that splits raw header values on
    /// commas. The receiver keeps its own mode.
    pub fn with_raw_header_comma_separation_enabled(&self) -> Self {
        let mut headers = self.clone();
        headers.comma_split_raw_values = true;
        headers
    }

    pub fn is_raw_header_comma_separation_enabled(&self) -> bool {
        self.comma_split_raw_values
    }

    pub fn rules(&self) -> &HeaderRules {
        &self.rules
    }

    /// All values of `name` joined with `", "`, or `None` if absent.
    pub fn get_header_line(&self, name: impl AsRef<str>) -> Option<String> {
        let values = self.get_header(name);
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    /// All values of `name` in insertion order; empty if absent.
    pub fn get_header(&self, name: impl AsRef<str>) -> &[String] {
        self.headers
            .get(&normalize_name(name.as_ref()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first `Set-Cookie` value starting with `cookie_name`.
    pub fn get_set_cookie_header_line(&self, cookie_name: &str) -> Option<&str> {
        self.get_header(SET_COOKIE)
            .iter()
            .find(|cookie| cookie.starts_with(cookie_name))
            .map(String::as_str)
    }

    /// Adds every value of `other`, one at a time, with add semantics.
    pub fn add_headers(&mut self, other: &Headers) {
        for (name, values) in other {
            for value in values {
                self.add_header(name, value.as_str());
            }
        }
    }

    pub fn add_header(&mut self, name: impl AsRef<str>, value: impl Into<HeaderValue>) {
        let name = normalize_name(name.as_ref());
        self.set(name, value.into().coerce(), false);
    }

    pub fn set_header(&mut self, name: impl AsRef<str>, value: impl Into<HeaderValue>) {
        let name = normalize_name(name.as_ref());
        self.set(name, value.into().coerce(), true);
    }

    /// Appends the values of a raw `Name: value` line.
    ///
    /// Fails with [`HeaderError::InvalidRawHeader`] if the line has no colon
    /// (a status line, for instance); the collection is left untouched.
    pub fn add_raw_header(&mut self, header: &str) -> Result<(), HeaderError> {
        self.set_raw_header_helper(header, false)
    }

    /// Replaces the values of the header named by a raw `Name: value` line.
    pub fn set_raw_header(&mut self, header: &str) -> Result<(), HeaderError> {
        self.set_raw_header_helper(header, true)
    }

    pub fn has_header(&self, name: impl AsRef<str>) -> bool {
        self.headers.contains_key(&normalize_name(name.as_ref()))
    }

    /// Removes a header. The remaining headers keep their relative order.
    pub fn remove_header(&mut self, name: impl AsRef<str>) {
        let name = normalize_name(name.as_ref());
        if self.headers.shift_remove(&name).is_some() {
            tracing::trace!(%name, "removed header");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Iterates `(name, values)` pairs in current order.
    ///
    /// The iterator borrows the collection, so it cannot be mutated while
    /// an iteration is in progress. Call `iter` again to restart.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.headers.iter(),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.headers.keys().map(String::as_str)
    }

    /// Wire lines, one per header, or one per value for folded-multi headers.
    pub fn to_raw_headers(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.headers.len());
        for (name, values) in self {
            if self.rules.is_folded_multi(name) {
                lines.extend(values.iter().map(|value| raw_line(name, value)));
            } else {
                lines.push(raw_line(name, &values.join(", ")));
            }
        }
        lines
    }

    pub fn to_flattened_array(&self) -> IndexMap<String, String> {
        self.iter()
            .map(|(name, values)| (name.to_string(), values.join(", ")))
            .collect()
    }

    pub fn to_array(&self) -> IndexMap<String, Vec<String>> {
        self.headers.clone()
    }

    /// A copy of this collection with every value of `other` added.
    pub fn to_merged_headers(&self, other: &Headers) -> Headers {
        let mut headers = self.clone();
        headers.add_headers(other);
        headers
    }

    /// Raw lines terminated by `\r\n`, ready to follow a start line.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for line in self.to_raw_headers() {
            result.push_str(&line);
            result.push_str("\r\n");
        }
        result
    }

    fn set(&mut self, name: String, mut values: Vec<String>, mut overwrite: bool) {
        if self.rules.is_single_value(&name) {
            values.truncate(1);
            overwrite = true;
        }
        tracing::trace!(%name, ?values, overwrite, "set header");

        let stored = self.headers.entry(name).or_default();
        if overwrite {
            *stored = values;
        } else {
            stored.extend(values);
        }

        // a header that only ever received empty values keeps exactly one
        stored.retain(|value| !value.is_empty());
        if stored.is_empty() {
            stored.push(String::new());
        }
    }

    fn set_raw_header_helper(&mut self, header: &str, overwrite: bool) -> Result<(), HeaderError> {
        let Some((name, value)) = header.split_once(':') else {
            tracing::debug!(header, "rejected raw header without a colon");
            return Err(HeaderError::InvalidRawHeader(header.to_string()));
        };

        // surrounding whitespace is not part of the name
        let name = normalize_name(name.trim());
        let values = if !self.comma_split_raw_values || self.rules.is_folded_multi(&name) {
            vec![value.trim().to_string()]
        } else {
            value
                .split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(String::from)
                .collect()
        };
        self.set(name, values, overwrite);
        Ok(())
    }
}

fn raw_line(name: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{name}:")
    } else {
        format!("{name}: {value}")
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl FromStr for Headers {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Headers::parse_raw_block(s)
    }
}

impl<K, V> Extend<(K, V)> for Headers
where
    K: AsRef<str>,
    V: Into<HeaderValue>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.add_header(name, value);
        }
    }
}

/// Collects with the process-wide rules. Use [`Extend`] on a
/// [`Headers::with_rules`] collection for explicit ones.
impl<K, V> FromIterator<(K, V)> for Headers
where
    K: AsRef<str>,
    V: Into<HeaderValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

/// Borrowing iterator over `(name, values)` pairs of a [`Headers`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, Vec<String>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over `(name, values)` pairs of a [`Headers`].
#[derive(Debug)]
pub struct IntoIter {
    inner: indexmap::map::IntoIter<String, Vec<String>>,
}

impl Iterator for IntoIter {
    type Item = (String, Vec<String>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl IntoIterator for Headers {
    type Item = (String, Vec<String>);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.headers.into_iter(),
        }
    }
}
