//! Board Configuration
//!
//! Optional JSON embedded in the page as
//! `<script id="board-config" type="application/json">`.
//! Missing sections or keys take their defaults.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::form::{FormLimits, DETAIL_MAX_CHARS, MAX_UPLOAD_BYTES};

/// Id of the inline config element
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct BoardConfig {
    pub cards: CardsConfig,
    pub form: FormConfig,
    pub drag: DragConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    /// Start with the demonstration cards
    pub seed_sample_cards: bool,
    /// Delay between the delete click and removal, so the exit transition can run
    pub delete_delay_ms: u32,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            seed_sample_cards: true,
            delete_delay_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub max_upload_bytes: u64,
    pub detail_max_chars: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            detail_max_chars: DETAIL_MAX_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Share of the overflow applied past the container edge (0.0 - 1.0)
    pub elastic: f64,
    pub threshold_px: i32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            elastic: 0.7,
            threshold_px: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Lines kept in memory
    pub capacity: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            capacity: 200,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Read the inline config from the current document
    pub fn load() -> Result<Self, ConfigError> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(self.log.level.trim()).unwrap_or(LevelFilter::Info)
    }

    pub fn form_limits(&self) -> FormLimits {
        FormLimits {
            max_upload_bytes: self.form.max_upload_bytes,
            detail_max_chars: self.form.detail_max_chars,
        }
    }

    pub fn drag_options(&self) -> leptos_dragdrop::DragOptions {
        leptos_dragdrop::DragOptions {
            elastic: self.drag.elastic.clamp(0.0, 1.0),
            threshold_px: self.drag.threshold_px.max(0),
        }
    }
}
