// SPDX-License-Identifier: MPL-2.0
//! Writes user preferences back to `settings.toml`.

use super::config::{self, Config};
use crate::ui::theming::ThemeMode;

/// Stores the chosen theme mode. Failures are logged and otherwise ignored.
pub fn persist_theme_mode(config: &mut Config, theme_mode: ThemeMode) {
    config.general.theme_mode = theme_mode;

    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(config) {
        tracing::warn!(%error, "failed to save config");
    }
}
