use crate::harness::upstream::StubCrux;
use crate::harness::{events, init_test_tracing};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use vitalscope_core::cache::{CacheAdapter, MemoryCache};
use vitalscope_core::conf::FieldConfig;
use vitalscope_core::crux::CruxClient;
use vitalscope_core::render::JsonSink;
use vitalscope_core::session::PopupSession;

/// `Write` handle whose bytes stay readable after the sink takes ownership.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A popup session wired to a stub CrUX endpoint, an in-memory cache and a
/// JSON sink.
pub struct TestPopup {
    pub session: PopupSession,
    pub cache: Arc<MemoryCache>,
    output: SharedBuffer,
}

impl TestPopup {
    pub const API_KEY: &'static str = "test-key";

    pub fn start(stub: &StubCrux) -> Self {
        let cfg = FieldConfig {
            api_url: stub.url().to_string(),
            api_key: Self::API_KEY.to_string(),
            timeout_ms: 2_000,
            ..FieldConfig::default()
        };
        let client = CruxClient::from_config(&cfg).expect("failed to build client");

        let mut popup = Self::without_field_data();
        popup.session = popup.session.with_fetcher(Arc::new(client));
        popup
    }

    pub fn without_field_data() -> Self {
        init_test_tracing(events());

        let cache = Arc::new(MemoryCache::new());
        let output = SharedBuffer::default();
        let session = PopupSession::new(
            cache.clone() as Arc<dyn CacheAdapter>,
            Arc::new(JsonSink::new(output.clone())),
            "https://psi.test/",
        );

        Self {
            session,
            cache,
            output,
        }
    }

    /// Rendered documents, in order.
    pub fn rendered(&self) -> Vec<serde_json::Value> {
        self.output
            .contents()
            .lines()
            .map(|l| serde_json::from_str(l).expect("sink wrote invalid JSON"))
            .collect()
    }

    pub fn rendered_section(&self, section: &str) -> Vec<serde_json::Value> {
        self.rendered()
            .into_iter()
            .filter(|doc| doc["section"] == section)
            .collect()
    }
}
