use std::sync::Arc;

use async_trait::async_trait;
use image::{ImageFormat, RgbImage};
use tempfile::NamedTempFile;
use tokio::process::Command;

use crate::application::ports::{RecognitionError, TextRecognizer};
use crate::domain::RecognitionConfig;

/// LSTM-only engine.
const OCR_ENGINE_MODE: &str = "1";

/// Runs the `tesseract` CLI against a PNG staged in a temp file and reads
/// the recognized text from stdout.
pub struct TesseractRecognizer {
    binary_path: String,
}

impl TesseractRecognizer {
    pub fn new(binary_path: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
        }
    }

    fn stage_bitmap(bitmap: &RgbImage) -> Result<NamedTempFile, RecognitionError> {
        let mut staged = tempfile::Builder::new()
            .prefix("ocr_page_")
            .suffix(".png")
            .tempfile()
            .map_err(|e| RecognitionError::Staging(format!("failed to create temp file: {e}")))?;

        bitmap
            .write_to(staged.as_file_mut(), ImageFormat::Png)
            .map_err(|e| RecognitionError::Staging(format!("PNG encode failed: {e}")))?;

        Ok(staged)
    }

    fn build_command(&self, staged: &NamedTempFile, config: &RecognitionConfig) -> Command {
        let mut command = Command::new(&self.binary_path);
        command
            .arg(staged.path())
            .arg("stdout")
            .arg("-l")
            .arg(config.language())
            .arg("--psm")
            .arg(config.segmentation_mode().page_seg_mode().to_string())
            .arg("--oem")
            .arg(OCR_ENGINE_MODE);

        if let Some(whitelist) = config.char_whitelist() {
            command
                .arg("-c")
                .arg(format!("tessedit_char_whitelist={whitelist}"));
        }

        command.kill_on_drop(true);
        command
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(
        &self,
        bitmap: Arc<RgbImage>,
        config: &RecognitionConfig,
    ) -> Result<String, RecognitionError> {
        let staged = tokio::task::spawn_blocking(move || Self::stage_bitmap(&bitmap))
            .await
            .map_err(|e| RecognitionError::Staging(format!("task join error: {e}")))??;

        let output = self
            .build_command(&staged, config)
            .output()
            .await
            .map_err(|e| {
                RecognitionError::EngineUnavailable(format!(
                    "failed to run {} (is it installed?): {e}",
                    self.binary_path
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognitionError::EngineFailed(format!(
                "exit status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn is_available(&self) -> bool {
        Command::new(&self.binary_path)
            .arg("--version")
            .kill_on_drop(true)
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}
