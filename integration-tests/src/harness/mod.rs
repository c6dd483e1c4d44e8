pub mod popup;
pub mod tracing;
pub mod upstream;

pub use popup::{SharedBuffer, TestPopup};
pub use tracing::{CapturedEvent, events, init_test_tracing};
pub use upstream::{StubCrux, StubRequest, error_body, record_body};

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
pub fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
