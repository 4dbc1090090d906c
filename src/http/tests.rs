//! Tests for the HTTP parsing layer.

#[cfg(test)]
mod parser_tests {
    use crate::http::{parse_request, HttpVersion, Method, ParseError};

    #[test]
    fn test_parse_simple_get_request() {
        let input = b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/");
        assert_eq!(req.version, HttpVersion::Http11);
        assert_eq!(req.header("Host"), Some("localhost"));
    }

    #[test]
    fn test_parse_request_with_multiple_headers() {
        let input = b"GET /index.html HTTP/1.1\r\n\
            Host: example.com\r\n\
            User-Agent: test-client/1.0\r\n\
            Accept: */*\r\n\r\n";

        let req = parse_request(input).unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/index.html");
        assert_eq!(req.header("host"), Some("example.com"));
        assert_eq!(req.header("user-agent"), Some("test-client/1.0"));
        assert_eq!(req.header("accept"), Some("*/*"));
    }

    #[test]
    fn test_case_insensitive_headers() {
        let input = b"GET / HTTP/1.1\r\nHoSt: example.com\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert!(req.has_header("host"));
        assert!(req.has_header("HOST"));
        assert_eq!(req.header("Host"), Some("example.com"));
    }

    #[test]
    fn test_missing_host_header() {
        let input = b"GET / HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
        let err = parse_request(input).unwrap_err();

        assert!(matches!(err, ParseError::MissingHeader(h) if h == "Host"));
    }

    #[test]
    fn test_http10_without_host() {
        // HTTP/1.0 doesn't require a Host header
        let input = b"GET / HTTP/1.0\r\nUser-Agent: test\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.version, HttpVersion::Http10);
        assert!(!req.has_header("host"));
    }

    #[test]
    fn test_invalid_method() {
        let input = b"INVALID / HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let err = parse_request(input).unwrap_err();

        assert!(matches!(err, ParseError::InvalidMethod(m) if m == "INVALID"));
    }

    #[test]
    fn test_invalid_http_version() {
        let input = b"GET / HTTP/9.9\r\nHost: localhost\r\n\r\n";
        let err = parse_request(input).unwrap_err();

        assert!(matches!(err, ParseError::InvalidVersion(v) if v == "HTTP/9.9"));
    }

    #[test]
    fn test_non_origin_form_target() {
        let input = b"GET example.com HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let err = parse_request(input).unwrap_err();

        assert!(matches!(err, ParseError::InvalidPath(p) if p == "example.com"));
    }

    #[test]
    fn test_invalid_header_format() {
        let input = b"GET / HTTP/1.1\r\nHost: localhost\r\nInvalidHeader\r\n\r\n";
        let err = parse_request(input).unwrap_err();

        assert!(matches!(err, ParseError::InvalidHeaderFormat));
    }

    #[test]
    fn test_empty_request() {
        let err = parse_request(b"").unwrap_err();

        assert!(matches!(err, ParseError::EmptyRequest));
    }

    #[test]
    fn test_incomplete_request_line() {
        let input = b"GET\r\nHost: localhost\r\n\r\n";
        let err = parse_request(input).unwrap_err();

        assert!(matches!(err, ParseError::MalformedRequestLine(_)));
    }

    #[test]
    fn test_all_methods() {
        let methods = vec![
            ("GET", Method::GET),
            ("POST", Method::POST),
            ("PUT", Method::PUT),
            ("DELETE", Method::DELETE),
            ("HEAD", Method::HEAD),
            ("OPTIONS", Method::OPTIONS),
            ("PATCH", Method::PATCH),
        ];

        for (method_str, expected) in methods {
            let request = format!("{method_str} / HTTP/1.1\r\nHost: localhost\r\n\r\n");
            let req = parse_request(request.as_bytes()).unwrap();
            assert_eq!(req.method, expected);
        }
    }

    #[test]
    fn test_headers_with_multiple_colons() {
        let input = b"GET / HTTP/1.1\r\n\
            Host: localhost:8080\r\n\
            Custom-Header: value: with: colons\r\n\r\n";

        let req = parse_request(input).unwrap();
        assert_eq!(req.header("host"), Some("localhost:8080"));
        assert_eq!(req.header("custom-header"), Some("value: with: colons"));
    }

    #[test]
    fn test_bare_lf_line_endings() {
        let input = b"GET / HTTP/1.1\nHost: localhost\nAccept: */*\n\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.header("host"), Some("localhost"));
        assert_eq!(req.header("accept"), Some("*/*"));
    }

    #[test]
    fn test_request_line_with_extra_whitespace() {
        let input = b"GET  /path   HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/path");
    }

    #[test]
    fn test_path_keeps_query_string() {
        let input = b"GET /search?q=rust&page=1 HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.path, "/search?q=rust&page=1");
    }

    #[test]
    fn test_body_lines_are_not_headers() {
        let input = b"POST /submit HTTP/1.1\r\n\
            Host: localhost\r\n\
            Content-Length: 9\r\n\
            \r\n\
            not=a:header";

        let req = parse_request(input).unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.header("content-length"), Some("9"));
        assert!(!req.has_header("not=a"));
    }

    #[test]
    fn test_duplicate_headers() {
        let input = b"GET / HTTP/1.1\r\n\
            Host: first.example.com\r\n\
            Custom: first\r\n\
            Custom: second\r\n\r\n";

        let req = parse_request(input).unwrap();

        // The last value wins for duplicate headers
        assert_eq!(req.header("custom"), Some("second"));
        assert_eq!(req.header("host"), Some("first.example.com"));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::GET.to_string(), "GET");
        assert_eq!(Method::POST.to_string(), "POST");
        assert_eq!(Method::DELETE.to_string(), "DELETE");
    }

    #[test]
    fn test_http_version_display() {
        assert_eq!(HttpVersion::Http10.to_string(), "HTTP/1.0");
        assert_eq!(HttpVersion::Http11.to_string(), "HTTP/1.1");
        assert_eq!(HttpVersion::Http20.to_string(), "HTTP/2");
    }

    #[test]
    fn test_http2_version_forms() {
        for version in ["HTTP/2", "HTTP/2.0"] {
            let request = format!("GET / {version}\r\nHost: localhost\r\n\r\n");
            let req = parse_request(request.as_bytes()).unwrap();
            assert_eq!(req.version, HttpVersion::Http20);
        }
    }
}
