// ============================================================================
// mirror.rs — Copy generated platform sources into a tracked directory
// ============================================================================
//
// Every file under the source root is copied to the same relative path under
// the destination root. Missing source root: nothing happens. Destination
// directories are created on demand and existing files are overwritten.
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rayon::ThreadPool;
use walkdir::WalkDir;

use crate::catalog::PlatformName;
use crate::console::Console;

/// Source and destination for one platform, relative to the project root.
/// A route without a source has nothing to mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorRoute {
    pub source: Option<PathBuf>,
    pub destination: PathBuf,
}

pub fn route_for(platform: PlatformName) -> MirrorRoute {
    match platform {
        PlatformName::Android => MirrorRoute {
            source: Some(PathBuf::from("platforms/android/src/com/contactpoint/model")),
            destination: PathBuf::from("database/android"),
        },
        // No generated sources are tracked for iOS yet.
        PlatformName::Ios => MirrorRoute {
            source: None,
            destination: PathBuf::from("database/ios"),
        },
    }
}

/// Routes for a hook invocation. `platforms` is what the host passed: one
/// name or a comma-separated list. Unknown names mirror nothing. Explicit
/// source/destination override the per-platform table; with no platform at
/// all both must be given.
pub fn plan(platforms: Option<&str>, source: Option<&Path>, destination: Option<&Path>) -> Vec<MirrorRoute> {
    let names: Vec<PlatformName> = platforms
        .unwrap_or_default()
        .split(',')
        .filter_map(|name| PlatformName::parse(name.trim()))
        .collect();

    if names.is_empty() {
        return match (source, destination) {
            (Some(src), Some(dst)) => vec![MirrorRoute {
                source: Some(src.to_path_buf()),
                destination: dst.to_path_buf(),
            }],
            _ => Vec::new(),
        };
    }

    names
        .into_iter()
        .map(|name| {
            let route = route_for(name);
            MirrorRoute {
                source: source.map(Path::to_path_buf).or(route.source),
                destination: destination.map(Path::to_path_buf).unwrap_or(route.destination),
            }
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct MirrorReport {
    pub copied: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

pub fn mirror(source: &Path, destination: &Path, pool: &ThreadPool, console: &Console) -> MirrorReport {
    if source.as_os_str().is_empty() || !source.exists() {
        return MirrorReport::default();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source).min_depth(1).follow_links(true) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => console.error(&format!("cannot read {}: {}", source.display(), e)),
        }
    }

    let results: Vec<(PathBuf, bool)> = pool.install(|| {
        files
            .into_par_iter()
            .filter_map(|file| {
                let relative = file.strip_prefix(source).ok()?.to_path_buf();
                let target = destination.join(&relative);
                if let Some(parent) = target.parent() {
                    // A failure here surfaces as the copy error below.
                    let _ = fs::create_dir_all(parent);
                }
                match fs::copy(&file, &target) {
                    Ok(_) => Some((target, true)),
                    Err(e) => {
                        console.error(&format!("cannot copy {} to {}: {}", file.display(), target.display(), e));
                        Some((target, false))
                    }
                }
            })
            .collect()
    });

    let mut report = MirrorReport::default();
    for (target, ok) in results {
        if ok {
            report.copied.push(target);
        } else {
            report.failed.push(target);
        }
    }
    report
}
