// ============================================================================
// catalog.rs — Platform catalog (which assets each platform needs)
// ============================================================================
//
// The asset table lives in catalog.toml, embedded at compile time. Each run
// builds fresh descriptors from it: paths are resolved against the project
// root and presence is decided by the platform's marker directory.
// ============================================================================

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("catalog.toml");
const PROJECT_PLACEHOLDER: &str = "{project}";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("platform catalog is malformed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("platform '{platform}': asset '{asset}' has a zero dimension")]
    ZeroDimension { platform: PlatformName, asset: String },
}

// ---------------------------------------------------------------------------
// Table types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformName {
    Ios,
    Android,
}

impl PlatformName {
    /// Case-sensitive, matching the names the Cordova CLI passes to hooks.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ios" => Some(PlatformName::Ios),
            "android" => Some(PlatformName::Android),
            _ => None,
        }
    }
}

impl fmt::Display for PlatformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformName::Ios => write!(f, "ios"),
            PlatformName::Android => write!(f, "android"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SplashSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Icons are square; `size` is both width and height.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IconSpec {
    pub name: String,
    pub size: u32,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    platform: Vec<PlatformEntry>,
}

#[derive(Debug, Deserialize)]
struct PlatformEntry {
    name: PlatformName,
    marker: String,
    splash_path: String,
    icons_path: String,
    splash: Vec<SplashSpec>,
    icons: Vec<IconSpec>,
}

// ---------------------------------------------------------------------------
// Resolved descriptor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PlatformDescriptor {
    pub name: PlatformName,
    pub is_added: bool,
    pub splash_path: PathBuf,
    pub icons_path: PathBuf,
    pub splash: Vec<SplashSpec>,
    pub icons: Vec<IconSpec>,
}

impl PlatformDescriptor {
    pub fn splash_destination(&self, splash: &SplashSpec) -> PathBuf {
        self.splash_path.join(&splash.name)
    }

    pub fn icon_destination(&self, icon: &IconSpec) -> PathBuf {
        self.icons_path.join(&icon.name)
    }
}

/// Builds the descriptors for every supported platform, in catalog order.
pub fn platforms(project_root: &Path, project_name: &str) -> Result<Vec<PlatformDescriptor>, CatalogError> {
    parse_catalog(EMBEDDED_CATALOG, project_root, project_name)
}

fn parse_catalog(
    source: &str,
    project_root: &Path,
    project_name: &str,
) -> Result<Vec<PlatformDescriptor>, CatalogError> {
    let file: CatalogFile = toml::from_str(source)?;

    let mut descriptors = Vec::with_capacity(file.platform.len());
    for entry in file.platform {
        validate(&entry)?;
        let resolve = |p: &str| project_root.join(p.replace(PROJECT_PLACEHOLDER, project_name));
        descriptors.push(PlatformDescriptor {
            name: entry.name,
            is_added: project_root.join(&entry.marker).is_dir(),
            splash_path: resolve(&entry.splash_path),
            icons_path: resolve(&entry.icons_path),
            splash: entry.splash,
            icons: entry.icons,
        });
    }
    Ok(descriptors)
}

fn validate(entry: &PlatformEntry) -> Result<(), CatalogError> {
    let zero_splash = entry.splash.iter().find(|s| s.width == 0 || s.height == 0).map(|s| &s.name);
    let zero_icon = entry.icons.iter().find(|i| i.size == 0).map(|i| &i.name);
    match zero_splash.or(zero_icon) {
        Some(asset) => Err(CatalogError::ZeroDimension {
            platform: entry.name,
            asset: asset.clone(),
        }),
        None => Ok(()),
    }
}

/// Platforms whose directory exists in the project, in catalog order.
pub fn active(platforms: &[PlatformDescriptor]) -> Vec<&PlatformDescriptor> {
    platforms.iter().filter(|p| p.is_added).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn find<'a>(list: &'a [PlatformDescriptor], name: PlatformName) -> &'a PlatformDescriptor {
        list.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn test_embedded_table_is_complete() {
        let dir = TempDir::new().unwrap();
        let list = platforms(dir.path(), "App").unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, PlatformName::Ios);
        assert_eq!(list[1].name, PlatformName::Android);

        let ios = find(&list, PlatformName::Ios);
        assert_eq!(ios.splash.len(), 14);
        assert_eq!(ios.icons.len(), 15);

        let android = find(&list, PlatformName::Android);
        assert_eq!(android.splash.len(), 8);
        assert_eq!(android.icons.len(), 8);
    }

    #[test]
    fn test_dimensions_match_platform_requirements() {
        let dir = TempDir::new().unwrap();
        let list = platforms(dir.path(), "App").unwrap();
        let ios = find(&list, PlatformName::Ios);

        assert_eq!(
            ios.splash[0],
            SplashSpec { name: "Default-568h@2x~iphone.png".into(), width: 640, height: 1136 }
        );
        assert_eq!(ios.splash[13].name, "Default~iphone.png");
        assert_eq!((ios.splash[13].width, ios.splash[13].height), (320, 480));
        assert_eq!(ios.icons[12], IconSpec { name: "icon-small@3x.png".into(), size: 87 });

        let android = find(&list, PlatformName::Android);
        assert_eq!(android.icons[7], IconSpec { name: "icon-web.png".into(), size: 512 });
        assert_eq!(android.splash[3].name, "drawable-land-xhdpi/screen.png");
        assert_eq!((android.splash[3].width, android.splash[3].height), (1280, 720));
    }

    #[test]
    fn test_presence_follows_platform_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("platforms/android")).unwrap();

        let list = platforms(dir.path(), "App").unwrap();
        assert!(!find(&list, PlatformName::Ios).is_added);
        assert!(find(&list, PlatformName::Android).is_added);

        let names: Vec<_> = active(&list).iter().map(|p| p.name).collect();
        assert_eq!(names, vec![PlatformName::Android]);
    }

    #[test]
    fn test_project_name_is_substituted_into_ios_paths() {
        let dir = TempDir::new().unwrap();
        let list = platforms(dir.path(), "HelloCordova").unwrap();
        let ios = find(&list, PlatformName::Ios);

        assert_eq!(
            ios.icon_destination(&ios.icons[0]),
            dir.path()
                .join("platforms/ios/HelloCordova/Images.xcassets/AppIcon.appiconset/")
                .join("icon-40.png")
        );
        assert!(ios
            .splash_path
            .ends_with("platforms/ios/HelloCordova/Images.xcassets/Brand Assets.launchimage"));
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        let source = r#"
            [[platform]]
            name = "android"
            marker = "platforms/android"
            splash_path = "res/"
            icons_path = "res/"
            splash = []
            icons = [{ name = "icon.png", size = 0 }]
        "#;
        let err = parse_catalog(source, Path::new("."), "App").unwrap_err();
        assert!(matches!(err, CatalogError::ZeroDimension { ref asset, .. } if asset == "icon.png"));
    }

    #[test]
    fn test_platform_name_parse() {
        assert_eq!(PlatformName::parse("android"), Some(PlatformName::Android));
        assert_eq!(PlatformName::parse("ios"), Some(PlatformName::Ios));
        assert_eq!(PlatformName::parse("browser"), None);
        assert_eq!(PlatformName::Ios.to_string(), "ios");
    }
}
