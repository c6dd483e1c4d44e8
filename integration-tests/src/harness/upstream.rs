use crate::harness::free_port;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct StubRequest {
    pub request_line: String,
    pub body: String,
}

impl StubRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Stand-in for the `records:queryRecord` endpoint. Answers every request
/// with the same status and body.
pub struct StubCrux {
    url: String,
    requests: Arc<Mutex<Vec<StubRequest>>>,
}

impl StubCrux {
    pub fn start(status: u16, body: impl Into<String>) -> Self {
        let port = free_port();
        let body = body.into();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let listener = TcpListener::bind(("127.0.0.1", port)).expect("failed to bind stub");
        let seen = requests.clone();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                if let Some(req) = serve(stream, status, &body) {
                    seen.lock().unwrap().push(req);
                }
            }
        });

        Self {
            url: format!("http://127.0.0.1:{port}/v1/records:queryRecord"),
            requests,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<StubRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn serve(stream: TcpStream, status: u16, body: &str) -> Option<StubRequest> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    // Headers
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().ok()?;
            }
        }
    }

    let mut raw = vec![0u8; content_length];
    reader.read_exact(&mut raw).ok()?;

    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        reason(status),
        body.len()
    );
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();

    Some(StubRequest {
        request_line: request_line.trim_end().to_string(),
        body: String::from_utf8_lossy(&raw).into_owned(),
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        _ => "Error",
    }
}

/// A `queryRecord` success body. Densities are given good, needs-improvement, poor.
pub fn record_body(origin: &str, lcp: [f64; 3], fid: [f64; 3], cls: [f64; 3]) -> String {
    serde_json::json!({
        "record": {
            "key": { "origin": origin, "formFactor": "DESKTOP" },
            "metrics": {
                "largest_contentful_paint": {
                    "histogram": [
                        { "start": 0, "end": 2500, "density": lcp[0] },
                        { "start": 2500, "end": 4000, "density": lcp[1] },
                        { "start": 4000, "density": lcp[2] }
                    ],
                    "percentiles": { "p75": 2100 }
                },
                "first_input.delay": {
                    "histogram": [
                        { "start": 0, "end": 100, "density": fid[0] },
                        { "start": 100, "end": 300, "density": fid[1] },
                        { "start": 300, "density": fid[2] }
                    ],
                    "percentiles": { "p75": 40 }
                },
                "layout_instability.cumulative_layout_shift": {
                    "histogram": [
                        { "start": "0.00", "end": "0.10", "density": cls[0] },
                        { "start": "0.10", "end": "0.25", "density": cls[1] },
                        { "start": "0.25", "density": cls[2] }
                    ],
                    "percentiles": { "p75": "0.05" }
                },
                "first_contentful_paint": {
                    "histogram": [{ "start": 0, "end": 1000, "density": 1.0 }]
                }
            }
        }
    })
    .to_string()
}

pub fn error_body(code: u16, status: &str, message: &str) -> String {
    serde_json::json!({
        "error": { "code": code, "message": message, "status": status }
    })
    .to_string()
}
