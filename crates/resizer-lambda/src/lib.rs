//! Invocation harness for the resize pipeline.
//!
//! The Lambda binary and the `resizer` CLI share everything here: event
//! parsing, per-invocation collaborator construction and the local resize
//! command.

use anyhow::Context;
use resizer_core::constants::RESIZED_PREFIX;
use resizer_core::{InvocationResult, S3Notification, Settings};
use resizer_infra::create_notifier;
use resizer_processing::{file_extension, ImageTransformer};
use resizer_storage::{basename, create_storage};
use resizer_worker::dispatch_with;
use std::path::{Path, PathBuf};

/// Parse an inbound event document.
///
/// Anything that is a JSON object parses; unknown fields are ignored and a
/// missing `Records` array is an empty batch.
pub fn parse_event(payload: serde_json::Value) -> Result<S3Notification, serde_json::Error> {
    serde_json::from_value(payload)
}

/// Run one invocation against the collaborators `settings` selects.
///
/// Storage and the notifier are only built once the configuration has been
/// accepted by the dispatcher.
pub async fn handle_event(settings: &Settings, batch: &S3Notification) -> InvocationResult {
    dispatch_with(settings, batch, || async {
        let storage = create_storage(settings).await.map_err(|e| {
            tracing::error!(error = %e, backend = %settings.storage_backend, "Failed to create storage");
            anyhow::Error::new(e)
        })?;
        let notifier = create_notifier(settings).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create notifier");
            anyhow::Error::new(e)
        })?;
        Ok::<_, anyhow::Error>((storage, notifier))
    })
    .await
}

/// Parse `payload` and run it; an unparsable event is fatal for the invocation.
pub async fn handle_payload(settings: &Settings, payload: serde_json::Value) -> InvocationResult {
    match parse_event(payload) {
        Ok(batch) => handle_event(settings, &batch).await,
        Err(e) => {
            tracing::error!(error = %e, "Invalid event payload");
            InvocationResult::fatal(format!("Invalid event payload: {}", e))
        }
    }
}

/// Where `resize` writes when no output path is given: a `resized/` directory
/// next to the input, keeping the file name.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = basename(&input.to_string_lossy()).to_string();
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(RESIZED_PREFIX.trim_end_matches('/'))
        .join(name)
}

/// Resize a local image file with the same codec the pipeline uses.
pub fn resize_file(
    input: &Path,
    output: Option<&Path>,
    width: u32,
    quality: u8,
) -> anyhow::Result<PathBuf> {
    let data = std::fs::read(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let extension = file_extension(&input.to_string_lossy());
    let hint = (!extension.is_empty()).then_some(extension.as_str());

    let result = ImageTransformer::transform(&data, width, hint, quality)
        .with_context(|| format!("Failed to resize {}", input.display()))?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, &result.data)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        width = result.width,
        height = result.height,
        size_bytes = result.data.len() as u64,
        "Resized file"
    );

    Ok(output)
}
