//! Simulated AI model generation
//!
//! A staged progress run: 0 → 100 in steps of 10 on a fixed tick, with a
//! stage label per band. One run at a time — a second start while one is
//! in flight is refused with [`GenerationError::Busy`] instead of the
//! original's unguarded overlap (see DESIGN.md).

use crate::task::{CancelHandle, TaskError};
use crate::upload::IncomingFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Tick between progress steps
const STEP_DELAY: Duration = Duration::from_millis(500);
/// Progress added per tick
const STEP: u8 = 10;

/// What the client asked to generate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GenerationRequest {
    /// Text-to-3D from a description
    Text {
        /// Kitchen description prompt
        prompt: String,
    },
    /// Image-to-3D from a reference photo
    Image {
        /// Reference image, if one was supplied
        reference: Option<IncomingFile>,
        /// Optional refinement text
        details: String,
    },
}

impl GenerationRequest {
    fn validate(&self) -> Result<(), GenerationError> {
        match self {
            GenerationRequest::Text { prompt } if prompt.trim().is_empty() => {
                Err(GenerationError::MissingPrompt)
            }
            GenerationRequest::Image { reference: None, .. } => Err(GenerationError::MissingImage),
            _ => Ok(()),
        }
    }

    /// The prompt text carried into the generated model's metadata
    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            GenerationRequest::Text { prompt } => prompt,
            GenerationRequest::Image { details, .. } => details,
        }
    }
}

/// Stage label for a progress band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GenerationStage {
    /// Below 30%
    Analyzing,
    /// 30-59%
    CreatingGeometry,
    /// 60-89%
    ApplyingMaterials,
    /// 90% and up
    Finalizing,
}

impl GenerationStage {
    /// Stage for a progress percentage
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0..=29 => GenerationStage::Analyzing,
            30..=59 => GenerationStage::CreatingGeometry,
            60..=89 => GenerationStage::ApplyingMaterials,
            _ => GenerationStage::Finalizing,
        }
    }

    /// Status line shown under the progress bar
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            GenerationStage::Analyzing => "Analyzing description...",
            GenerationStage::CreatingGeometry => "Creating 3D geometry...",
            GenerationStage::ApplyingMaterials => "Applying materials...",
            GenerationStage::Finalizing => "Finalizing model...",
        }
    }
}

/// The artifact a finished run resolves to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedModel {
    /// Generated filename (`AI-Generated-option-b-<millis>.glb`)
    pub name: String,
    /// Model format
    pub format: String,
    /// Prompt the model was generated from
    pub prompt: String,
    /// Completion timestamp
    pub generated_at: DateTime<Utc>,
}

/// Generation failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Text mode with an empty description
    #[error("Please enter a description")]
    MissingPrompt,

    /// Image mode with no reference image
    #[error("Please upload a reference image")]
    MissingImage,

    /// A run is already in flight
    #[error("generation already in progress")]
    Busy,

    /// Run cancelled
    #[error(transparent)]
    Cancelled(#[from] TaskError),
}

/// The generation service
#[derive(Debug)]
pub struct Generator {
    in_flight: Arc<AtomicBool>,
    progress: watch::Sender<u8>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create an idle generator
    #[must_use]
    pub fn new() -> Self {
        let (progress, _) = watch::channel(0);
        Self {
            in_flight: Arc::new(AtomicBool::new(false)),
            progress,
        }
    }

    /// Subscribe to progress updates (percent, 0-100)
    #[must_use]
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    /// Whether a run is currently in flight
    #[inline]
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Run one generation to completion
    ///
    /// Ticks the progress channel in steps of 10 until 100, then
    /// resolves to the generated model. Refuses to start while another
    /// run is in flight; cancellation releases the busy state.
    pub async fn generate(
        &self,
        design_option: &str,
        request: GenerationRequest,
        cancel: &CancelHandle,
    ) -> Result<GeneratedModel, GenerationError> {
        request.validate()?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(GenerationError::Busy);
        }
        let _busy = BusyGuard(Arc::clone(&self.in_flight));

        tracing::info!(option = design_option, "generation started");
        self.progress.send_replace(0);

        let mut percent = 0u8;
        while percent < 100 {
            cancel.run(tokio::time::sleep(STEP_DELAY)).await?;
            percent += STEP;
            self.progress.send_replace(percent);
            tracing::debug!(percent, stage = ?GenerationStage::from_percent(percent), "generation tick");
        }

        let generated_at = Utc::now();
        let model = GeneratedModel {
            name: format!(
                "AI-Generated-{design_option}-{}.glb",
                generated_at.timestamp_millis()
            ),
            format: "glb".to_string(),
            prompt: request.prompt().to_string(),
            generated_at,
        };
        tracing::info!(name = %model.name, "generation complete");
        Ok(model)
    }
}

/// Releases the busy flag on every exit path, cancellation included
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(prompt: &str) -> GenerationRequest {
        GenerationRequest::Text {
            prompt: prompt.to_string(),
        }
    }

    #[test]
    fn stage_bands() {
        assert_eq!(GenerationStage::from_percent(0), GenerationStage::Analyzing);
        assert_eq!(GenerationStage::from_percent(30), GenerationStage::CreatingGeometry);
        assert_eq!(GenerationStage::from_percent(60), GenerationStage::ApplyingMaterials);
        assert_eq!(GenerationStage::from_percent(90), GenerationStage::Finalizing);
        assert_eq!(GenerationStage::from_percent(100), GenerationStage::Finalizing);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_prompt_is_rejected_before_starting() {
        let generator = Generator::new();
        let err = generator
            .generate("option-b", text("   "), &CancelHandle::new())
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::MissingPrompt);
        assert!(!generator.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn image_mode_requires_reference() {
        let generator = Generator::new();
        let err = generator
            .generate(
                "option-b",
                GenerationRequest::Image {
                    reference: None,
                    details: "add brass handles".to_string(),
                },
                &CancelHandle::new(),
            )
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::MissingImage);
    }

    #[tokio::test(start_paused = true)]
    async fn run_reaches_100_and_resolves() {
        let generator = Generator::new();
        let mut progress = generator.progress();
        let model = generator
            .generate("option-b", text("modern minimalist kitchen"), &CancelHandle::new())
            .await
            .unwrap();
        assert!(model.name.starts_with("AI-Generated-option-b-"));
        assert!(model.name.ends_with(".glb"));
        assert_eq!(model.prompt, "modern minimalist kitchen");
        assert_eq!(*progress.borrow_and_update(), 100);
        assert!(!generator.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn second_start_while_in_flight_is_busy() {
        let generator = Arc::new(Generator::new());
        let first = {
            let generator = Arc::clone(&generator);
            tokio::spawn(async move {
                generator
                    .generate("option-b", text("warm wood kitchen"), &CancelHandle::new())
                    .await
            })
        };
        // Let the first run claim the busy flag.
        tokio::time::sleep(Duration::from_millis(100)).await;
        let err = generator
            .generate("option-b", text("second attempt"), &CancelHandle::new())
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::Busy);
        assert!(first.await.unwrap().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_releases_busy_state() {
        let generator = Arc::new(Generator::new());
        let cancel = CancelHandle::new();
        let run = {
            let generator = Arc::clone(&generator);
            let cancel = cancel.clone();
            tokio::spawn(async move {
                generator
                    .generate("option-b", text("industrial kitchen"), &cancel)
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(600)).await;
        cancel.cancel();
        let err = run.await.unwrap().unwrap_err();
        assert_eq!(err, GenerationError::Cancelled(TaskError::Cancelled));
        assert!(!generator.is_busy());
    }
}
