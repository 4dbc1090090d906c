//! HTTP request-head parsing and representation.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::http::error::ParseError;

/// HTTP request methods as defined in RFC 7231 and common extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
}

impl FromStr for Method {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "HEAD" => Ok(Method::HEAD),
            "OPTIONS" => Ok(Method::OPTIONS),
            "PATCH" => Ok(Method::PATCH),
            _ => Err(ParseError::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Supported HTTP protocol versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVersion {
    Http10,
    Http11,
    Http20,
}

impl FromStr for HttpVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTTP/1.0" => Ok(HttpVersion::Http10),
            "HTTP/1.1" => Ok(HttpVersion::Http11),
            "HTTP/2" | "HTTP/2.0" => Ok(HttpVersion::Http20),
            _ => Err(ParseError::InvalidVersion(s.to_string())),
        }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpVersion::Http10 => write!(f, "HTTP/1.0"),
            HttpVersion::Http11 => write!(f, "HTTP/1.1"),
            HttpVersion::Http20 => write!(f, "HTTP/2"),
        }
    }
}

/// A parsed HTTP request head.
///
/// The service routes on method and path alone. Request bodies are never
/// read, so none is modeled here.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target, including any query string
    pub path: String,
    /// The HTTP version
    pub version: HttpVersion,
    /// A map of header names (lowercase) to their values
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Create a new HTTP request head.
    pub fn new(
        method: Method,
        path: String,
        version: HttpVersion,
        headers: HashMap<String, String>,
    ) -> Self {
        Self {
            method,
            path,
            version,
            headers,
        }
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Check if the request has a specific header (case-insensitive).
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(&name.to_ascii_lowercase())
    }
}

/// Parse an HTTP request head from a byte slice.
///
/// Accepts both CRLF and bare-LF line endings. Header parsing stops at the
/// first empty line; anything after it (a request body) is ignored.
///
/// # Examples
///
/// ```
/// use darede_greeter::http::parse_request;
///
/// let request = parse_request(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
/// assert_eq!(request.path, "/");
/// assert_eq!(request.header("host"), Some("localhost"));
/// ```
pub fn parse_request(input: &[u8]) -> Result<HttpRequest, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyRequest);
    }

    let text = String::from_utf8_lossy(input);
    // str::lines splits on LF and strips a trailing CR, so both CRLF and
    // bare-LF requests parse the same way.
    let mut lines = text.lines();

    let request_line = match lines.next() {
        Some(line) if !line.is_empty() => line,
        _ => return Err(ParseError::EmptyRequest),
    };

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(ParseError::MalformedRequestLine(request_line.to_string()));
    }

    let method = parts[0].parse()?;

    // Only origin-form targets are meaningful here.
    let path = parts[1].to_string();
    if !path.starts_with('/') {
        return Err(ParseError::InvalidPath(path));
    }

    let version: HttpVersion = parts[2].parse()?;

    let mut headers = HashMap::new();
    for line in lines {
        // Empty line marks the end of the header section.
        if line.is_empty() {
            break;
        }

        match line.split_once(':') {
            Some((name, value)) => {
                headers.insert(
                    name.trim().to_ascii_lowercase(), // header names are case-insensitive
                    value.trim().to_string(),
                );
            }
            None => return Err(ParseError::InvalidHeaderFormat),
        }
    }

    // Host is only required for HTTP/1.1.
    if version == HttpVersion::Http11 && !headers.contains_key("host") {
        return Err(ParseError::MissingHeader("Host".to_string()));
    }

    Ok(HttpRequest::new(method, path, version, headers))
}
