use super::{LogNotifier, Notifier, NotifyResult};
use resizer_core::{NotifierBackend, Settings};
use std::sync::Arc;

/// Create a notifier based on configuration
pub async fn create_notifier(settings: &Settings) -> NotifyResult<Arc<dyn Notifier>> {
    match settings.notifier_backend {
        #[cfg(feature = "notify-sns")]
        NotifierBackend::Sns => {
            let notifier = super::SnsNotifier::from_env(settings.s3_region.clone()).await;
            Ok(Arc::new(notifier))
        }

        #[cfg(not(feature = "notify-sns"))]
        NotifierBackend::Sns => Err(super::NotifyError::ConfigError(
            "SNS notifier not available (notify-sns feature not enabled)".to_string(),
        )),

        NotifierBackend::Log => {
            if settings.is_production() {
                tracing::warn!("Log notifier selected in production; nothing will be published");
            }
            Ok(Arc::new(LogNotifier::new()))
        }
    }
}
