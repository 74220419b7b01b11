// ============================================================================
// options.rs — Command-line arguments (CLI)
// ============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::settings::{CONFIG_FILE, ICON_FILE, SPLASH_FILE};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate platform icons and splash screens from the master images
    Generate {
        /// Cordova project root (default: current directory)
        #[arg(short = 'r', long, default_value = ".")]
        project_root: PathBuf,

        /// Master splash image, relative to the project root
        #[arg(long, default_value = SPLASH_FILE)]
        splash: PathBuf,

        /// Master icon image, relative to the project root
        #[arg(long, default_value = ICON_FILE)]
        icon: PathBuf,

        /// Cordova config file, relative to the project root
        #[arg(long, default_value = CONFIG_FILE)]
        config: PathBuf,

        /// ImageMagick binary (default: `magick` if available, else `convert`)
        #[arg(long, value_name = "BIN")]
        magick: Option<String>,

        /// Maximum number of images generated at once (default: CPU count)
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,

        /// Exit with status 1 when a precondition check fails
        #[arg(long)]
        strict: bool,
    },

    /// Copy generated platform sources into the tracked database/ directory
    Mirror {
        /// Platform name as passed by the Cordova CLI (android, ios)
        #[arg(env = "CORDOVA_PLATFORMS")]
        platform: Option<String>,

        /// Cordova project root (default: current directory)
        #[arg(short = 'r', long, default_value = ".")]
        project_root: PathBuf,

        /// Override the platform's source directory
        #[arg(long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Override the platform's destination directory
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,

        /// Maximum number of files copied at once (default: CPU count)
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "cordova-hooks")]
#[command(version, about = "Cordova build hooks: icon/splash generation and platform source mirroring", long_about = None)]
pub struct HookOptions {
    #[command(subcommand)]
    pub command: Command,
}

impl HookOptions {
    /// Zero is treated as "not set".
    pub fn worker_count(jobs: Option<usize>) -> usize {
        jobs.filter(|&n| n > 0).unwrap_or_else(num_cpus::get).max(1)
    }
}
