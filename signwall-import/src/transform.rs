//! External image compositing.
//!
//! Producing one display-ready JPEG from a source photo plus banner text is
//! delegated to ImageMagick's `convert`, run as a child process with a fixed
//! argument shape: a captioned banner strip stacked above the letterboxed
//! photo, filling a 1920x1080 screen.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("'{command}' {status}: {stderr}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Produces one composited output image from a source photo and banner text.
pub trait AssetTransformer {
    /// Write the transformed rendition of `source` to `dest`.
    ///
    /// `dest` is the literal output filename; no extension is appended.
    fn transform(
        &self,
        source: &Path,
        banner_text: &str,
        dest: &Path,
    ) -> Result<(), TransformError>;
}

const CONVERT_BIN: &str = "convert";

// Output geometry. The caption is rendered onto a 1840x180 strip anchored
// to the top of an 1840x1080 banner canvas; the photo is shrunk to fit and
// centered on a black 1920x860 field; banner over photo fills the screen.
const BANNER_FILL: &str = "#fff725";
const BANNER_POINTSIZE: &str = "116";
const BANNER_CAPTION_SIZE: &str = "1840x180";
const BANNER_EXTENT: &str = "1840x1080";
const PHOTO_RESIZE: &str = "1664x728";
const PHOTO_EXTENT: &str = "1920x860";

/// ImageMagick-backed transformer.
pub struct MagickTransformer {
    font: String,
}

impl MagickTransformer {
    pub fn new(font: impl Into<String>) -> Self {
        Self { font: font.into() }
    }

    /// The full `convert` argument vector for one invocation. Built as
    /// explicit argv entries; nothing passes through a shell.
    pub fn command_args(&self, source: &Path, banner_text: &str, dest: &Path) -> Vec<OsString> {
        let mut caption = OsString::from("caption:");
        caption.push(banner_text);
        let mut dest_arg = OsString::from("jpeg:");
        dest_arg.push(dest);

        let mut args: Vec<OsString> = vec![
            "(".into(),
            "-background".into(),
            "black".into(),
            "-fill".into(),
            BANNER_FILL.into(),
            "-font".into(),
            self.font.as_str().into(),
            "-pointsize".into(),
            BANNER_POINTSIZE.into(),
            "-gravity".into(),
            "Center".into(),
            "-size".into(),
            BANNER_CAPTION_SIZE.into(),
            caption,
            "-gravity".into(),
            "North".into(),
            "-extent".into(),
            BANNER_EXTENT.into(),
            ")".into(),
            "(".into(),
            source.into(),
            "-resize".into(),
            PHOTO_RESIZE.into(),
            "-background".into(),
            "black".into(),
            "-compose".into(),
            "Copy".into(),
            "-gravity".into(),
            "Center".into(),
            "-extent".into(),
            PHOTO_EXTENT.into(),
            ")".into(),
        ];
        args.extend([
            "-background".into(),
            "blue".into(),
            "-gravity".into(),
            "South".into(),
            "-composite".into(),
            dest_arg,
        ]);
        args
    }
}

impl AssetTransformer for MagickTransformer {
    fn transform(
        &self,
        source: &Path,
        banner_text: &str,
        dest: &Path,
    ) -> Result<(), TransformError> {
        let output = Command::new(CONVERT_BIN)
            .args(self.command_args(source, banner_text, dest))
            .output()
            .map_err(|e| TransformError::Spawn {
                command: CONVERT_BIN.to_string(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(TransformError::Failed {
                command: CONVERT_BIN.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
