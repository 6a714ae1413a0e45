//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;

/// Header an htmx client sets on every request it issues from inside a page.
pub const ORIGIN_SIGNAL_HEADER: &str = "hx-request";

/// An incoming HTTP request with its body fully buffered.
///
/// Contact form posts are a few hundred bytes; body-size limits belong to
/// the reverse proxy in front of the site.
#[derive(Debug)]
pub struct Request {
    pub(crate) method: http::Method,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// Builds a request from an `http::Request` whose body is already
    /// collected. The server does this per request; tests do it directly.
    pub fn from_http(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        Self {
            method: parts.method,
            path: parts.uri.path().to_owned(),
            query: parts.uri.query().map(str::to_owned),
            headers: parts.headers,
            body,
            params: HashMap::new(),
        }
    }

    pub fn method(&self) -> &http::Method { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup. Values that are not visible ASCII
    /// are treated as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/projects/{id}`, `req.param("id")` on
    /// `/projects/go-htmx-website` returns `Some("go-htmx-website")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// First value of a query-string parameter, percent-decoded.
    pub fn query_param(&self, key: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// True when the request came from an in-page partial-refresh client
    /// (`HX-Request: true`) rather than ordinary navigation.
    pub fn is_partial(&self) -> bool {
        self.header(ORIGIN_SIGNAL_HEADER) == Some("true")
    }

    /// Decodes an `application/x-www-form-urlencoded` body.
    pub fn form(&self) -> Form {
        Form {
            fields: url::form_urlencoded::parse(&self.body)
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }
}

/// Decoded form fields, in body order.
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<(String, String)>,
}

impl Form {
    /// Value of the first field named `name`; missing fields read as empty.
    pub fn value(&self, name: &str) -> &str {
        self.fields.iter()
            .find(|(k, _)| k == name)
            .map_or("", |(_, v)| v.as_str())
    }
}
