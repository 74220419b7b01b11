// ============================================================================
// main.rs — cordova-hooks CLI entry point
// ============================================================================
//
// Wire into config.xml, e.g.:
//   <hook type="after_prepare" src="hooks/cordova-hooks generate" />
//   <hook type="before_build"  src="hooks/cordova-hooks mirror" />
// ============================================================================

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use rayon::ThreadPool;

use cordova_hooks::mirror;
use cordova_hooks::options::{Command, HookOptions};
use cordova_hooks::{mirror_routes, Console, ImageMagick, Orchestrator, RunOutcome, RunSettings};

fn main() {
    let options = HookOptions::parse();

    let result = match options.command {
        Command::Generate {
            project_root,
            splash,
            icon,
            config,
            magick,
            jobs,
            strict,
        } => {
            let settings = RunSettings {
                project_root,
                splash_file: splash,
                icon_file: icon,
                config_file: config,
            };
            run_generate(&settings, magick, jobs, strict)
        }
        Command::Mirror {
            platform,
            project_root,
            source,
            dest,
            jobs,
        } => run_mirror(platform, project_root, source, dest, jobs),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            process::exit(1);
        }
    }
}

fn build_pool(jobs: Option<usize>) -> anyhow::Result<ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(HookOptions::worker_count(jobs))
        .build()
        .context("failed to start worker pool")
}

fn run_generate(settings: &RunSettings, magick: Option<String>, jobs: Option<usize>, strict: bool) -> anyhow::Result<i32> {
    let tool = match magick {
        Some(program) => ImageMagick::new(program),
        None => ImageMagick::detect(),
    };
    let pool = build_pool(jobs)?;
    let console = Console::stdout();

    let mut orchestrator = Orchestrator::new(settings, &tool, &pool, &console);
    match orchestrator.run().context("platform catalog is unusable")? {
        RunOutcome::Done(_) => Ok(0),
        RunOutcome::Aborted(_) if strict => Ok(1),
        RunOutcome::Aborted(_) => Ok(0),
    }
}

fn run_mirror(
    platform: Option<String>,
    project_root: PathBuf,
    source: Option<PathBuf>,
    dest: Option<PathBuf>,
    jobs: Option<usize>,
) -> anyhow::Result<i32> {
    let routes = mirror::plan(platform.as_deref(), source.as_deref(), dest.as_deref());
    if routes.is_empty() {
        return Ok(0);
    }
    let pool = build_pool(jobs)?;
    mirror_routes(&project_root, &routes, &pool, &Console::stdout());
    Ok(0)
}
