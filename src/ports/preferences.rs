/// Synchronous key/value lookup over the user's preferences.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// `None` when the key is unset or not a boolean.
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// `None` when the key is unset or not a string.
    fn get_string(&self, key: &str) -> Option<String>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for std::sync::Arc<T> {
    fn get_bool(&self, key: &str) -> Option<bool> {
        (**self).get_bool(key)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }
}
