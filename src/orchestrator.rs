// ============================================================================
// orchestrator.rs — The generate hook run: checks, icons, splashes
// ============================================================================
//
//   Idle → CheckingPreconditions → GeneratingIcons → GeneratingSplashes → Done
//                              └──→ Aborted
//
// Platforms are handled one after another in catalog order. Every active
// platform's icon batch settles before the first splash batch starts.
// ============================================================================

use rayon::ThreadPool;

use crate::catalog::{self, CatalogError};
use crate::console::Console;
use crate::generator::ImageGenerator;
use crate::imagetool::ImageTool;
use crate::preconditions::{self, PreconditionError};
use crate::settings::RunSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    CheckingPreconditions,
    GeneratingIcons,
    GeneratingSplashes,
    Done,
    Aborted,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::Aborted)
    }
}

/// Per-file tallies. Never printed: the transcript has no summary line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generated: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub enum RunOutcome {
    Done(RunSummary),
    Aborted(PreconditionError),
}

pub struct Orchestrator<'a> {
    settings: &'a RunSettings,
    tool: &'a dyn ImageTool,
    pool: &'a ThreadPool,
    console: &'a Console,
    state: RunState,
}

impl<'a> Orchestrator<'a> {
    pub fn new(settings: &'a RunSettings, tool: &'a dyn ImageTool, pool: &'a ThreadPool, console: &'a Console) -> Self {
        Self {
            settings,
            tool,
            pool,
            console,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// A precondition failure is an `Ok(RunOutcome::Aborted)`; `Err` only
    /// comes from a broken platform catalog.
    pub fn run(&mut self) -> Result<RunOutcome, CatalogError> {
        let outcome = self.run_phases();
        // Both terminal states end the transcript with a blank line.
        self.console.blank();
        outcome
    }

    fn run_phases(&mut self) -> Result<RunOutcome, CatalogError> {
        let settings = self.settings;
        let root = settings.root();

        self.state = RunState::CheckingPreconditions;
        self.console.header("Checking Project & Splash & Icon");
        // Presence does not depend on the project name, so an empty one is
        // enough for the checks.
        let detected = catalog::platforms(root, "")?;
        let project_name = match preconditions::check(settings, &detected, self.console) {
            Ok(name) => name,
            Err(e) => {
                self.state = RunState::Aborted;
                return Ok(RunOutcome::Aborted(e));
            }
        };

        let platforms = catalog::platforms(root, &project_name)?;
        let active = catalog::active(&platforms);
        let generator = ImageGenerator::new(
            self.tool,
            self.pool,
            self.console,
            settings.icon_path(),
            settings.splash_path(),
        );
        let mut summary = RunSummary::default();

        self.state = RunState::GeneratingIcons;
        for platform in &active {
            let batch = generator.generate_icons(platform);
            summary.generated += batch.succeeded();
            summary.failed += batch.failed();
        }

        self.state = RunState::GeneratingSplashes;
        for platform in &active {
            let batch = generator.generate_splashes(platform);
            summary.generated += batch.succeeded();
            summary.failed += batch.failed();
        }

        self.state = RunState::Done;
        Ok(RunOutcome::Done(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imagetool::fake::{FakeTool, Op};
    use std::fs;
    use std::path::Path;
    use std::sync::mpsc;
    use tempfile::TempDir;

    const CONFIG: &str = "<widget id=\"x\"><name>Demo</name></widget>";

    fn project(platform_dirs: &[&str], files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for p in platform_dirs {
            fs::create_dir_all(dir.path().join(p)).unwrap();
        }
        for f in files {
            let content = if *f == "config.xml" { CONFIG } else { "png" };
            fs::write(dir.path().join(f), content).unwrap();
        }
        dir
    }

    fn run(root: &Path, tool: &FakeTool) -> (RunOutcome, RunState, Vec<String>) {
        let settings = RunSettings::new(root);
        let pool = rayon::ThreadPoolBuilder::new().num_threads(3).build().unwrap();
        let (tx, rx) = mpsc::channel();
        let console = Console::channel(tx);
        let mut orchestrator = Orchestrator::new(&settings, tool, &pool, &console);
        assert_eq!(orchestrator.state(), RunState::Idle);
        let outcome = orchestrator.run().unwrap();
        let state = orchestrator.state();
        drop(orchestrator);
        drop(console);
        (outcome, state, rx.iter().collect())
    }

    #[test]
    fn test_only_present_platforms_are_generated() {
        let dir = project(&["platforms/android"], &["splash.png", "icon.png", "config.xml"]);
        let tool = FakeTool::default();
        let (outcome, state, _) = run(dir.path(), &tool);

        assert_eq!(state, RunState::Done);
        assert!(state.is_terminal());
        match outcome {
            RunOutcome::Done(summary) => assert_eq!(summary, RunSummary { generated: 16, failed: 0 }),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(tool.call_count(), 16);
        assert!(!dir.path().join("platforms/ios/Demo").exists());
        assert!(dir.path().join("platforms/android/res/drawable-port-xhdpi/screen.png").exists());
        assert!(dir.path().join("platforms/android/res/icon-web.png").exists());
    }

    #[test]
    fn test_every_declared_asset_is_produced_for_both_platforms() {
        let dir = project(
            &["platforms/ios", "platforms/android"],
            &["splash.png", "icon.png", "config.xml"],
        );
        let tool = FakeTool::default();
        let (outcome, _, _) = run(dir.path(), &tool);
        assert!(matches!(outcome, RunOutcome::Done(RunSummary { generated: 45, failed: 0 })));

        for platform in catalog::platforms(dir.path(), "Demo").unwrap() {
            for icon in &platform.icons {
                let written = fs::read_to_string(platform.icon_destination(icon)).unwrap();
                assert_eq!(written, format!("resize {}x{}", icon.size, icon.size));
            }
            for splash in &platform.splash {
                let written = fs::read_to_string(platform.splash_destination(splash)).unwrap();
                assert_eq!(written, format!("crop {}x{}", splash.width, splash.height));
            }
        }
    }

    #[test]
    fn test_all_icons_precede_all_splashes() {
        let dir = project(
            &["platforms/ios", "platforms/android"],
            &["splash.png", "icon.png", "config.xml"],
        );
        let tool = FakeTool::default();
        let (_, _, lines) = run(dir.path(), &tool);

        let calls = tool.calls.lock().unwrap();
        let first_crop = calls.iter().position(|(op, _)| *op == Op::Crop).unwrap();
        assert_eq!(first_crop, 15 + 8);
        assert!(calls[first_crop..].iter().all(|(op, _)| *op == Op::Crop));

        let headers: Vec<&String> = lines.iter().filter(|l| l.starts_with(" ### ")).collect();
        assert_eq!(
            headers,
            vec![
                " ### Checking Project & Splash & Icon ### ",
                " ### Generating Icons for ios ### ",
                " ### Generating Icons for android ### ",
                " ### Generating splash screen for ios ### ",
                " ### Generating splash screen for android ### ",
            ]
        );
        assert_eq!(lines.last().unwrap(), "");
    }

    #[test]
    fn test_no_platform_means_no_tool_invocation() {
        let dir = project(&[], &["splash.png", "icon.png", "config.xml"]);
        let tool = FakeTool::default();
        let (outcome, state, lines) = run(dir.path(), &tool);

        assert_eq!(state, RunState::Aborted);
        assert!(matches!(outcome, RunOutcome::Aborted(PreconditionError::NoPlatformsFound)));
        assert_eq!(tool.call_count(), 0);
        assert_eq!(lines.last().unwrap(), "");
    }

    #[test]
    fn test_missing_splash_prevents_icon_generation() {
        let dir = project(&["platforms/android"], &["icon.png", "config.xml"]);
        let tool = FakeTool::default();
        let (outcome, state, _) = run(dir.path(), &tool);

        assert_eq!(state, RunState::Aborted);
        assert!(matches!(outcome, RunOutcome::Aborted(PreconditionError::MissingSplashSource(_))));
        assert_eq!(tool.call_count(), 0);
        assert!(!dir.path().join("platforms/android/res").exists());
    }

    #[test]
    fn test_file_failures_do_not_stop_the_run() {
        let dir = project(&["platforms/android"], &["splash.png", "icon.png", "config.xml"]);
        let tool = FakeTool::failing_on(&["drawable-ldpi/icon.png", "drawable-port-mdpi/screen.png"]);
        let (outcome, state, lines) = run(dir.path(), &tool);

        assert_eq!(state, RunState::Done);
        assert!(matches!(outcome, RunOutcome::Done(RunSummary { generated: 14, failed: 2 })));
        assert_eq!(lines.iter().filter(|l| l.starts_with("  Error:  ")).count(), 2);
    }
}
