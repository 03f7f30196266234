//! Copy-to-clipboard flow: write the chosen snippet, report with a toast.

use std::time::Duration;

use tracing::{info, warn};

use super::actions::SnippetFormat;
use super::state::Toast;
use crate::clipboard::ClipboardService;
use crate::gradient::GradientDescriptor;

pub fn copy_snippet(
    clipboard: &mut dyn ClipboardService,
    descriptor: &GradientDescriptor,
    format: SnippetFormat,
    ttl: Duration,
) -> Toast {
    let text = format.pick(descriptor).to_string();
    match clipboard.set_text(text) {
        Ok(()) => {
            info!(format = format.label(), value = descriptor.value(), "copied");
            Toast::success(format!("{} code copied!", format.label()), ttl)
        }
        Err(e) => {
            warn!(format = format.label(), error = %e, "copy failed");
            Toast::error(format!("Copy failed: {e}"), ttl)
        }
    }
}
