use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum FetchState {
    NotFetched = 0,
    Fetching = 1,
    Rendered = 2,
}

impl FetchState {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => FetchState::NotFetched,
            1 => FetchState::Fetching,
            _ => FetchState::Rendered,
        }
    }
}

/// Guards the field report so it is rendered at most once per session.
///
/// ```text
/// NotFetched --try_begin--> Fetching --mark_rendered--> Rendered
///      ^                        |
///      +---------reset----------+
/// ```
#[derive(Debug)]
pub struct FetchGuard {
    state: AtomicU8,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(FetchState::NotFetched as u8),
        }
    }

    pub fn state(&self) -> FetchState {
        FetchState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Claims the fetch. Fails while another fetch is in flight or once rendered.
    pub fn try_begin(&self) -> bool {
        self.transition(FetchState::NotFetched, FetchState::Fetching)
    }

    /// Claims the right to render. Only the first completion of a fetch wins.
    pub fn mark_rendered(&self) -> bool {
        self.transition(FetchState::Fetching, FetchState::Rendered)
    }

    /// Releases a failed fetch so a later attempt may start.
    pub fn reset(&self) -> bool {
        self.transition(FetchState::Fetching, FetchState::NotFetched)
    }

    fn transition(&self, from: FetchState, to: FetchState) -> bool {
        self.state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for FetchGuard {
    fn default() -> Self {
        Self::new()
    }
}
