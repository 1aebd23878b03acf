//! Invoice e-mail settings

use serde_json::{Map, Value};

/// Free-form settings posted to `invoices/{guid}/email`, e.g. `Sender`,
/// `Subject`, `Message`, `Receiver`, `CcToSender`. Dinero validates them.
pub type EmailSettings = Map<String, Value>;

/// Overlay `overrides` on `defaults`; keys in `overrides` win.
pub fn merge_email_settings(defaults: &EmailSettings, overrides: EmailSettings) -> EmailSettings {
    let mut merged = defaults.clone();
    merged.extend(overrides);
    merged
}
