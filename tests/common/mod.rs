#![allow(dead_code, clippy::unwrap_used)]
//! Shared helpers: a sandboxed `trad` command and a one-shot HTTP responder.

use assert_cmd::Command;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::JoinHandle;
use tempfile::TempDir;

pub const TEST_KEY: &str = "test-key:fx";

/// Temp directory holding the key cache and the config dir for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Sandbox with [`TEST_KEY`] already cached.
    pub fn with_cached_key() -> Self {
        let sandbox = Self::new();
        std::fs::write(sandbox.key_file(), format!("{TEST_KEY}\n")).unwrap();
        sandbox
    }

    pub fn key_file(&self) -> PathBuf {
        self.dir.path().join("deepl-api-key")
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn write_config(&self, contents: &str) {
        let config_dir = self.dir.path().join("trad");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), contents).unwrap();
    }

    /// `trad` with no inherited trad settings, plain log badges and paths
    /// pointing into the sandbox.
    #[allow(deprecated)]
    pub fn trad(&self) -> Command {
        let mut cmd = Command::cargo_bin("trad").unwrap();
        cmd.env_remove("TRAD_KEY_SOURCE")
            .env_remove("TRAD_ENV_FILE")
            .env_remove("TRAD_ENDPOINT")
            .env_remove("TRAD_LOG")
            .env_remove("RUST_LOG")
            .env_remove("API_KEY")
            .env("NO_COLOR", "1")
            .env("XDG_CONFIG_HOME", self.dir.path())
            .env("TRAD_KEY_FILE", self.key_file());
        cmd
    }
}

/// What the responder received.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Answers exactly one HTTP request with a canned response.
pub struct MockServer {
    pub url: String,
    handle: JoinHandle<CapturedRequest>,
}

impl MockServer {
    pub fn respond(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!(
            "http://{}/v2/translate",
            listener.local_addr().unwrap()
        );
        let body = body.to_string();

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let captured = read_request(&mut BufReader::new(stream.try_clone().unwrap()));

            let reason = if status < 400 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            captured
        });

        Self { url, handle }
    }

    /// Waits for the request to arrive and returns it.
    pub fn request(self) -> CapturedRequest {
        self.handle.join().unwrap()
    }
}

fn read_request<R: BufRead>(reader: &mut R) -> CapturedRequest {
    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .map_or(0, |(_, value)| value.parse::<usize>().unwrap());
    let mut body = vec![0; length];
    reader.read_exact(&mut body).unwrap();

    CapturedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body: String::from_utf8(body).unwrap(),
    }
}

/// A local URL nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v2/translate")
}
