// ============================================================================
// settings.rs — Input file locations for the generate hook
// ============================================================================

use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.xml";
pub const SPLASH_FILE: &str = "splash.png";
pub const ICON_FILE: &str = "icon.png";

/// Where the master images and the Cordova config live. Relative file names
/// are resolved against `project_root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub project_root: PathBuf,
    pub splash_file: PathBuf,
    pub icon_file: PathBuf,
    pub config_file: PathBuf,
}

impl RunSettings {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            splash_file: PathBuf::from(SPLASH_FILE),
            icon_file: PathBuf::from(ICON_FILE),
            config_file: PathBuf::from(CONFIG_FILE),
        }
    }

    pub fn splash_path(&self) -> PathBuf {
        self.project_root.join(&self.splash_file)
    }

    pub fn icon_path(&self) -> PathBuf {
        self.project_root.join(&self.icon_file)
    }

    pub fn config_path(&self) -> PathBuf {
        self.project_root.join(&self.config_file)
    }

    pub fn root(&self) -> &Path {
        &self.project_root
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_against_root() {
        let s = RunSettings::new("/proj");
        assert_eq!(s.splash_path(), PathBuf::from("/proj/splash.png"));
        assert_eq!(s.icon_path(), PathBuf::from("/proj/icon.png"));
        assert_eq!(s.config_path(), PathBuf::from("/proj/config.xml"));
    }

    #[test]
    fn test_absolute_override_wins() {
        let mut s = RunSettings::new("/proj");
        s.icon_file = PathBuf::from("/art/master-icon.png");
        assert_eq!(s.icon_path(), PathBuf::from("/art/master-icon.png"));
    }
}
