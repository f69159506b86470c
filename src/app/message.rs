// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::ServiceError;
use crate::domain::{Generation, RequestKind};
use crate::ui::{control_panel, header, image_canvas};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    ControlPanel(control_panel::Message),
    Canvas(image_canvas::Message),
    /// The outstanding generate or edit call resolved.
    RequestFinished {
        kind: RequestKind,
        result: Result<Generation, ServiceError>,
    },
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (for example `fr`).
    pub lang: Option<String>,
    /// Optional directory holding `settings.toml`.
    pub config_dir: Option<String>,
    /// Optional directory with `.ftl` files replacing the embedded ones.
    pub i18n_dir: Option<String>,
}
