use std::sync::Mutex;

/// Remembers the path of the last admitted photo.
///
/// Both picture actions may fire for one physical write, so the same path can
/// arrive twice in a row, possibly concurrently. `admit` is the only way to
/// read or update the state and runs as a single critical section.
#[derive(Debug, Default)]
pub struct PhotoDedup {
    last_path: Mutex<String>,
}

impl PhotoDedup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` and records `path` if it differs from the last admitted one.
    pub fn admit(&self, path: &str) -> bool {
        // A panic elsewhere while holding the lock leaves a valid String behind.
        let mut last = self
            .last_path
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if *last == path {
            return false;
        }
        *last = path.to_string();
        true
    }

    #[cfg(test)]
    fn last_admitted(&self) -> Option<String> {
        let last = self
            .last_path
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (!last.is_empty()).then(|| last.clone())
    }
}
