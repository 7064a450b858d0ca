use orpheus_core::{ProfileError, ProfileStore, UserProfile};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the user profile from a JSON file on every load, so edits to the
/// file take effect on the next cycle.
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for FileProfileStore {
    fn load(&self) -> Result<UserProfile, ProfileError> {
        debug!("Reading profile from {}", self.path.display());
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProfileError::Missing(self.path.display().to_string()));
            }
            Err(e) => return Err(ProfileError::Io(e)),
        };
        UserProfile::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = std::env::temp_dir().join(format!(
            "orpheus-profile-{name}-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, content)?;
        Ok(path)
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let store = FileProfileStore::new(PathBuf::from("/nonexistent/orpheus/profile.json"));
        assert!(matches!(store.load(), Err(ProfileError::Missing(_))));
    }

    #[test]
    fn bad_json_is_malformed() -> anyhow::Result<()> {
        let path = scratch_file("malformed", "{\"name\": ")?;
        let result = FileProfileStore::new(path.clone()).load();
        std::fs::remove_file(&path)?;
        assert!(matches!(result, Err(ProfileError::Malformed(_))));
        Ok(())
    }

    #[test]
    fn valid_file_loads() -> anyhow::Result<()> {
        let path = scratch_file(
            "valid",
            r#"{"name":"Jordan","age":70,"bloodGroup":"B+","allergies":["pollen"],"medications":[],"location":"200 E Washington St"}"#,
        )?;
        let profile = FileProfileStore::new(path.clone()).load()?;
        std::fs::remove_file(&path)?;
        assert_eq!(profile.age, 70);
        assert_eq!(profile.allergies, vec!["pollen"]);
        Ok(())
    }
}
