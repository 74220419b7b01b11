// ============================================================================
// generator.rs — Icon and splash generation for one platform
// ============================================================================
//
// A batch is every icon (or every splash) of one platform. All jobs of a
// batch are started together on the thread pool and the batch returns once
// each of them has finished. A failed file is reported and recorded; it
// never stops its siblings.
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::catalog::PlatformDescriptor;
use crate::console::Console;
use crate::imagetool::{ImageJob, ImageTool, ToolError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Icon,
    Splash,
}

#[derive(Debug)]
pub struct FileOutcome {
    pub name: String,
    pub destination: PathBuf,
    pub result: Result<(), ToolError>,
}

/// Outcomes of one batch, in catalog order.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchResult {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

pub struct ImageGenerator<'a> {
    tool: &'a dyn ImageTool,
    pool: &'a ThreadPool,
    console: &'a Console,
    icon_source: PathBuf,
    splash_source: PathBuf,
}

impl<'a> ImageGenerator<'a> {
    pub fn new(
        tool: &'a dyn ImageTool,
        pool: &'a ThreadPool,
        console: &'a Console,
        icon_source: PathBuf,
        splash_source: PathBuf,
    ) -> Self {
        Self {
            tool,
            pool,
            console,
            icon_source,
            splash_source,
        }
    }

    pub fn generate_icons(&self, platform: &PlatformDescriptor) -> BatchResult {
        self.console.header(&format!("Generating Icons for {}", platform.name));
        let jobs = platform
            .icons
            .iter()
            .map(|icon| {
                let job = ImageJob {
                    source: self.icon_source.clone(),
                    destination: platform.icon_destination(icon),
                    width: icon.size,
                    height: icon.size,
                };
                (icon.name.clone(), job)
            })
            .collect();
        self.run_batch(AssetKind::Icon, jobs)
    }

    pub fn generate_splashes(&self, platform: &PlatformDescriptor) -> BatchResult {
        self.console.header(&format!("Generating splash screen for {}", platform.name));
        let jobs = platform
            .splash
            .iter()
            .map(|splash| {
                let job = ImageJob {
                    source: self.splash_source.clone(),
                    destination: platform.splash_destination(splash),
                    width: splash.width,
                    height: splash.height,
                };
                (splash.name.clone(), job)
            })
            .collect();
        self.run_batch(AssetKind::Splash, jobs)
    }

    fn run_batch(&self, kind: AssetKind, jobs: Vec<(String, ImageJob)>) -> BatchResult {
        let outcomes: Vec<FileOutcome> = self.pool.install(|| {
            jobs.into_par_iter()
                .map(|(name, job)| {
                    let result = self.generate_one(kind, &job);
                    match &result {
                        Ok(()) => self.console.success(&format!("{} created", name)),
                        Err(e) => self.console.error(&format!("{}: {}", name, e)),
                    }
                    FileOutcome {
                        name,
                        destination: job.destination,
                        result,
                    }
                })
                .collect()
        });
        BatchResult { outcomes }
    }

    fn generate_one(&self, kind: AssetKind, job: &ImageJob) -> Result<(), ToolError> {
        ensure_parent_dir(&job.destination)?;
        match kind {
            AssetKind::Icon => self.tool.resize(job),
            AssetKind::Splash => self.tool.crop(job),
        }
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), ToolError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| ToolError::OutputDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
