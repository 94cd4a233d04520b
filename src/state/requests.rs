#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

/// Monotonic token dispenser guarding shared state against stale
/// responses.
///
/// All requests run on the single UI thread with no cancellation, so a
/// response dispatched before a newer user action can still arrive after
/// it. Each dispatch calls `begin` and captures the token; the response is
/// applied only if that token is still current when it lands, otherwise
/// it is discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Start a new request generation and return its token.
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Invalidate all outstanding tokens without starting a request.
    pub fn invalidate(&mut self) {
        self.0 += 1;
    }

    pub fn is_current(self, token: u64) -> bool {
        self.0 == token
    }
}
