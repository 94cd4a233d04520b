#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

/// The single most recent composition result.
///
/// Ephemeral by contract: replaced by the next successful placement,
/// cleared when a new selection cycle starts, never persisted client-side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositionResult {
    /// Rendered composite, usually a data URL straight from the backend.
    pub image: String,
    pub text: Option<String>,
    /// Locale-formatted time the result arrived.
    pub timestamp: String,
}

/// Placement-screen result state and its in-flight flags.
#[derive(Clone, Debug, Default)]
pub struct ResultState {
    pub result: Option<CompositionResult>,
    /// A placement request is in flight; gates the submit affordance.
    pub placing: bool,
    /// The shown result is being re-uploaded as a room photo.
    pub saving_room: bool,
}

impl ResultState {
    /// Apply a successful placement. Clears the in-flight flag in the
    /// same step so no exit path can leave it set.
    pub fn apply(&mut self, result: CompositionResult) {
        self.result = Some(result);
        self.placing = false;
    }

    /// Record a failed placement: flag cleared, prior result untouched.
    pub fn fail(&mut self) {
        self.placing = false;
    }

    pub fn clear(&mut self) {
        self.result = None;
        self.placing = false;
        self.saving_room = false;
    }
}
