// ============================================================================
// preconditions.rs — Checks that gate image generation
// ============================================================================
//
// Order is fixed: platforms → splash → icon → config. Each check reports its
// result before the next one runs and the first failure stops the chain.
// ============================================================================

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::{self, PlatformDescriptor};
use crate::console::Console;
use crate::project;
use crate::settings::RunSettings;

#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("no cordova platforms found")]
    NoPlatformsFound,
    #[error("master splash image {0} does not exist")]
    MissingSplashSource(PathBuf),
    #[error("master icon image {0} does not exist")]
    MissingIconSource(PathBuf),
    #[error("project configuration {0} does not exist")]
    MissingConfigFile(PathBuf),
    #[error(transparent)]
    UnreadableConfig(#[from] project::ProjectConfigError),
}

/// Runs all checks and, once they pass, returns the project name from the
/// config file.
pub fn check(
    settings: &RunSettings,
    platforms: &[PlatformDescriptor],
    console: &Console,
) -> Result<String, PreconditionError> {
    at_least_one_platform(platforms, console)?;

    let splash = &settings.splash_file;
    require_file(
        splash,
        settings.splash_path(),
        format!("{} does not exist in the root folder", splash.display()),
        console,
    )
    .map_err(PreconditionError::MissingSplashSource)?;

    let icon = &settings.icon_file;
    require_file(
        icon,
        settings.icon_path(),
        format!("{} does not exist in the root folder", icon.display()),
        console,
    )
    .map_err(PreconditionError::MissingIconSource)?;

    let config = &settings.config_file;
    require_file(
        config,
        settings.config_path(),
        format!("cordova's {} does not exist in the root folder", config.display()),
        console,
    )
    .map_err(PreconditionError::MissingConfigFile)?;

    project::project_name(&settings.config_path()).map_err(|e| {
        console.error(&e.to_string());
        PreconditionError::from(e)
    })
}

fn at_least_one_platform(platforms: &[PlatformDescriptor], console: &Console) -> Result<(), PreconditionError> {
    let active = catalog::active(platforms);
    if active.is_empty() {
        console.error(
            "No cordova platforms found. Make sure you are in the root folder of your Cordova \
             project and add platforms with 'cordova platform add'",
        );
        return Err(PreconditionError::NoPlatformsFound);
    }
    let names: Vec<String> = active.iter().map(|p| p.name.to_string()).collect();
    console.success(&format!("platforms found: {}", names.join(", ")));
    Ok(())
}

/// On failure hands back the resolved path for the error value.
fn require_file(label: &Path, path: PathBuf, missing: String, console: &Console) -> Result<(), PathBuf> {
    if path.is_file() {
        console.success(&format!("{} exists", label.display()));
        Ok(())
    } else {
        console.error(&missing);
        Err(path)
    }
}
