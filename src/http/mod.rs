pub mod error;
pub mod headers;
pub mod name;
pub mod value;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const SET_COOKIE: &str = "Set-Cookie";
pub const LOCATION: &str = "Location";

/// Common HTTP headers, usable anywhere a header name is accepted.
///
/// ```
/// use hyperheaders::{Headers, StandardHeader};
///
/// let mut headers = Headers::new();
/// headers.set_header(StandardHeader::ContentType, "text/html");
/// assert_eq!(headers.get_header_line("content-type").as_deref(), Some("text/html"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardHeader {
    Accept,
    AcceptEncoding,
    Authorization,
    CacheControl,
    Connection,
    ContentLength,
    ContentType,
    Cookie,
    Host,
    Location,
    Server,
    SetCookie,
    UserAgent,
}

impl StandardHeader {
    /// Canonical spelling of the header name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardHeader::Accept => "Accept",
            StandardHeader::AcceptEncoding => "Accept-Encoding",
            StandardHeader::Authorization => AUTHORIZATION,
            StandardHeader::CacheControl => "Cache-Control",
            StandardHeader::Connection => "Connection",
            StandardHeader::ContentLength => CONTENT_LENGTH,
            StandardHeader::ContentType => CONTENT_TYPE,
            StandardHeader::Cookie => "Cookie",
            StandardHeader::Host => "Host",
            StandardHeader::Location => LOCATION,
            StandardHeader::Server => "Server",
            StandardHeader::SetCookie => SET_COOKIE,
            StandardHeader::UserAgent => "User-Agent",
        }
    }
}

impl AsRef<str> for StandardHeader {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
