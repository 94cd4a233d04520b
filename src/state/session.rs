#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "roomcraft_session";

/// Ambient call context: backend origin and the session key scoping all
/// server-owned entities.
///
/// Provided once via Leptos context so gateway calls never reach for a
/// hardcoded literal; tests construct one directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub api_base: String,
    pub session_id: String,
}

impl Session {
    pub fn new(api_base: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            session_id: session_id.into(),
        }
    }

    /// Join an endpoint path onto the API base.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base.trim_end_matches('/'))
    }

    /// Browser session: `/api` on the current origin, with a session id
    /// minted once and kept in `localStorage` across visits. Outside the
    /// browser the id is empty; the gateway is stubbed out there anyway.
    pub fn load_or_create() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let stored = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|storage| {
                    if let Ok(Some(id)) = storage.get_item(STORAGE_KEY) {
                        return Some(id);
                    }
                    let id = uuid::Uuid::new_v4().to_string();
                    let _ = storage.set_item(STORAGE_KEY, &id);
                    Some(id)
                });
            Self::new("/api", stored.unwrap_or_default())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new("/api", "")
        }
    }
}
