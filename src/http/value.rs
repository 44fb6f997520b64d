//! Values accepted by the header mutation API.
//!
//! Header values arrive in many shapes: plain strings, booleans, numbers,
//! lists, or values that are only worth computing when the header is
//! actually written. [`HeaderValue`] captures all of them, and
//! [`HeaderValue::coerce`] turns any of them into the trimmed strings the
//! collection stores.

use std::fmt;
use std::sync::Arc;

/// Deferred producer of a header value.
pub type LazyValue = Arc<dyn Fn() -> HeaderValue + Send + Sync>;

#[derive(Clone)]
pub enum HeaderValue {
    Null,
    Text(String),
    Bool(bool),
    List(Vec<HeaderValue>),
    Lazy(LazyValue),
}

impl HeaderValue {
    /// Wraps a closure evaluated when the value is stringified.
    pub fn lazy<F, V>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<HeaderValue>,
    {
        HeaderValue::Lazy(Arc::new(move || f().into()))
    }

    /// Any [`Display`](fmt::Display) value, rendered with its natural string form.
    pub fn display(value: impl fmt::Display) -> Self {
        HeaderValue::Text(value.to_string())
    }

    pub fn stringify(&self) -> String {
        match self {
            HeaderValue::Null => String::new(),
            HeaderValue::Text(text) => text.clone(),
            HeaderValue::Bool(b) => b.to_string(),
            HeaderValue::List(items) => items
                .iter()
                .map(HeaderValue::stringify)
                .collect::<Vec<_>>()
                .join(","),
            HeaderValue::Lazy(f) => f().stringify(),
        }
    }

    /// The trimmed values a header receives from this input.
    ///
    /// A list yields one value per element; every other shape yields exactly
    /// one value, possibly empty.
    pub fn coerce(self) -> Vec<String> {
        match self {
            HeaderValue::Text(text) => vec![text.trim().to_string()],
            HeaderValue::List(items) => items
                .iter()
                .map(|item| item.stringify().trim().to_string())
                .collect(),
            other => vec![other.stringify().trim().to_string()],
        }
    }
}

impl fmt::Debug for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Null => f.write_str("Null"),
            HeaderValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            HeaderValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            HeaderValue::List(items) => f.debug_tuple("List").field(items).finish(),
            HeaderValue::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Text(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Text(value)
    }
}

impl From<&String> for HeaderValue {
    fn from(value: &String) -> Self {
        HeaderValue::Text(value.clone())
    }
}

impl From<char> for HeaderValue {
    fn from(value: char) -> Self {
        HeaderValue::Text(value.to_string())
    }
}

impl From<bool> for HeaderValue {
    fn from(value: bool) -> Self {
        HeaderValue::Bool(value)
    }
}

macro_rules! from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for HeaderValue {
                fn from(value: $t) -> Self {
                    HeaderValue::display(value)
                }
            }
        )*
    };
}

from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Into<HeaderValue>> From<Option<T>> for HeaderValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(HeaderValue::Null, Into::into)
    }
}

impl<T: Into<HeaderValue>> From<Vec<T>> for HeaderValue {
    fn from(values: Vec<T>) -> Self {
        HeaderValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<HeaderValue>> From<&[T]> for HeaderValue {
    fn from(values: &[T]) -> Self {
        HeaderValue::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<HeaderValue>, const N: usize> From<[T; N]> for HeaderValue {
    fn from(values: [T; N]) -> Self {
        HeaderValue::List(values.into_iter().map(Into::into).collect())
    }
}
