// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). One blocking session, no retries
// at this layer; callers decide what is worth retrying via
// `FetchError::retryable()`.

use std::{fmt, io::{Read, Write}, net::TcpStream, time::Duration};

use crate::config::consts::{HOST, USER_AGENT};

#[derive(Debug)]
pub enum FetchError {
    /// Connect/read/write failure. Transient until proven otherwise.
    Io(std::io::Error),
    /// Non-200 response. 5xx is worth a retry, 4xx is not.
    Status { code: u16, url: String },
    /// Response we could not make sense of. Terminal.
    Malformed(String),
}

impl FetchError {
    pub fn retryable(&self) -> bool {
        match self {
            FetchError::Io(_) => true,
            FetchError::Status { code, .. } => *code >= 500,
            FetchError::Malformed(_) => false,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Io(e) => write!(f, "network error: {e}"),
            FetchError::Status { code, url } => write!(f, "HTTP {code} for {url}"),
            FetchError::Malformed(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        FetchError::Io(e)
    }
}

/// Seam between the collection loops and the network. Production code
/// uses `Session`; tests drive the loops with canned pages.
pub trait Fetch {
    fn get(&mut self, url: &str) -> Result<String, FetchError>;
}

/// The single shared browsing session for a run.
pub struct Session {
    host: String,
}

impl Session {
    pub fn new() -> Self {
        Self { host: s!(HOST) }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for Session {
    fn get(&mut self, url: &str) -> Result<String, FetchError> {
        http_get(&self.host, &request_path(url))
    }
}

/// Reduce an absolute URL on our host to a request path. Paths pass
/// through unchanged; bare fragments get a leading slash.
pub fn request_path(url: &str) -> String {
    if let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        match rest.find('/') {
            Some(i) => s!(&rest[i..]),
            None => s!("/"),
        }
    } else if url.starts_with('/') {
        s!(url)
    } else {
        join!("/", url)
    }
}

fn http_get(host: &str, path: &str) -> Result<String, FetchError> {
    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        path, host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status_line = resp.split("\r\n").next().unwrap_or("");
    let code: u16 = status_line
        .split_ascii_whitespace()
        .nth(1)
        .and_then(|c| c.parse().ok())
        .ok_or_else(|| FetchError::Malformed(format!("status line: {status_line:?}")))?;
    if code != 200 {
        return Err(FetchError::Status { code, url: join!(host, path) });
    }

    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| FetchError::Malformed(s!("missing header terminator")))?
        + 4;
    Ok(resp[body_idx..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_path_strips_scheme_and_host() {
        assert_eq!(
            request_path("https://www.transfermarkt.us/lionel-messi/profil/spieler/28003"),
            "/lionel-messi/profil/spieler/28003"
        );
        assert_eq!(request_path("/a/b"), "/a/b");
        assert_eq!(request_path("https://www.transfermarkt.us"), "/");
        assert_eq!(request_path("relative"), "/relative");
    }

    #[test]
    fn io_errors_are_retryable_but_client_errors_are_not() {
        let io = FetchError::from(std::io::Error::from(std::io::ErrorKind::TimedOut));
        assert!(io.retryable());
        assert!(FetchError::Status { code: 503, url: s!("x") }.retryable());
        assert!(!FetchError::Status { code: 404, url: s!("x") }.retryable());
        assert!(!FetchError::Malformed(s!("x")).retryable());
    }
}
