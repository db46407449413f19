use mart_core::Session;

/// Result of loading a session - distinguishes "not found" from corruption.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub session: Option<Session>,
    /// Present if the stored document exists but could not be parsed
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn loaded(session: Session) -> Self {
        Self {
            session: Some(session),
            corruption_error: None,
        }
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        Self {
            session: None,
            corruption_error: Some(message.into()),
        }
    }
}
