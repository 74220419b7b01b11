// ============================================================================
// imagetool.rs — External image tool (ImageMagick) invocation
// ============================================================================
//
// Two operations are needed: crop (fill the target box, then cut it out of
// the centre) for splash screens and resize (scale to an exact box) for
// icons. Both always write PNG at maximum quality.
//
// The tool is a trait so the generator can be driven without ImageMagick.
// ============================================================================

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// One output file to produce from a master image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with status {code}: {stderr}")]
    Failed {
        program: String,
        code: String,
        stderr: String,
    },
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait ImageTool: Sync {
    fn crop(&self, job: &ImageJob) -> Result<(), ToolError>;
    fn resize(&self, job: &ImageJob) -> Result<(), ToolError>;
}

// ---------------------------------------------------------------------------
// ImageMagick
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ImageMagick {
    program: String,
}

impl ImageMagick {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// Prefers the ImageMagick 7 `magick` front end and falls back to the
    /// v6 `convert` binary. Both accept the same argument order.
    pub fn detect() -> Self {
        if Self::command_exists("magick") {
            Self::new("magick")
        } else {
            Self::new("convert")
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command_exists(command: &str) -> bool {
        Command::new(command)
            .arg("-version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn run(&self, args: Vec<OsString>) -> Result<(), ToolError> {
        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| ToolError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }
        Err(ToolError::Failed {
            program: self.program.clone(),
            code: output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string()),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

impl ImageTool for ImageMagick {
    fn crop(&self, job: &ImageJob) -> Result<(), ToolError> {
        self.run(crop_args(job))
    }

    fn resize(&self, job: &ImageJob) -> Result<(), ToolError> {
        self.run(resize_args(job))
    }
}

/// `<src> -resize WxH^ -gravity Center -crop WxH+0+0 +repage -quality 100 png:<dst>`
fn crop_args(job: &ImageJob) -> Vec<OsString> {
    let box_ = format!("{}x{}", job.width, job.height);
    vec![
        job.source.clone().into_os_string(),
        "-resize".into(),
        format!("{}^", box_).into(),
        "-gravity".into(),
        "Center".into(),
        "-crop".into(),
        format!("{}+0+0", box_).into(),
        "+repage".into(),
        "-quality".into(),
        "100".into(),
        png_destination(job),
    ]
}

/// `<src> -resize WxH! -quality 100 png:<dst>`
fn resize_args(job: &ImageJob) -> Vec<OsString> {
    vec![
        job.source.clone().into_os_string(),
        "-resize".into(),
        format!("{}x{}!", job.width, job.height).into(),
        "-quality".into(),
        "100".into(),
        png_destination(job),
    ]
}

fn png_destination(job: &ImageJob) -> OsString {
    let mut dst = OsString::from("png:");
    dst.push(job.destination.as_os_str());
    dst
}
