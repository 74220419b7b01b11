// ============================================================================
// lib.rs — Library API (shared by the hook binary and tests)
// ============================================================================

pub mod catalog;
pub mod console;
pub mod generator;
pub mod imagetool;
pub mod mirror;
pub mod options;
pub mod orchestrator;
pub mod preconditions;
pub mod project;
pub mod settings;

pub use catalog::{CatalogError, IconSpec, PlatformDescriptor, PlatformName, SplashSpec};
pub use console::Console;
pub use generator::{BatchResult, FileOutcome, ImageGenerator};
pub use imagetool::{ImageJob, ImageMagick, ImageTool, ToolError};
pub use mirror::{MirrorReport, MirrorRoute};
pub use options::HookOptions;
pub use orchestrator::{Orchestrator, RunOutcome, RunState, RunSummary};
pub use preconditions::PreconditionError;
pub use settings::RunSettings;

use std::path::Path;

use rayon::ThreadPool;

/// Runs every planned mirror route against `project_root`, streaming error
/// lines to `console`. Routes without a source are skipped.
pub fn mirror_routes(
    project_root: &Path,
    routes: &[MirrorRoute],
    pool: &ThreadPool,
    console: &Console,
) -> MirrorReport {
    let mut total = MirrorReport::default();
    for route in routes {
        let Some(source) = &route.source else { continue };
        let report = mirror::mirror(
            &project_root.join(source),
            &project_root.join(&route.destination),
            pool,
            console,
        );
        total.copied.extend(report.copied);
        total.failed.extend(report.failed);
    }
    total
}
