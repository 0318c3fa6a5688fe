use crate::domain::{AppError, Preference};

/// Desktop preference database.
pub trait PreferenceStore {
    /// Current raw value for the preference's domain and key, `None` when unset.
    fn read(&self, preference: &Preference) -> Result<Option<String>, AppError>;

    /// Write the preference's value.
    fn write(&self, preference: &Preference) -> Result<(), AppError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn read(&self, preference: &Preference) -> Result<Option<String>, AppError> {
        (**self).read(preference)
    }

    fn write(&self, preference: &Preference) -> Result<(), AppError> {
        (**self).write(preference)
    }
}
