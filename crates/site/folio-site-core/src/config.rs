//! Site configuration, loaded from JSON by the host.

use serde::{Deserialize, Serialize};

use crate::contact::ContactConfig;
use crate::error::SiteError;
use crate::resume::ResumeAsset;
use crate::theme::Theme;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub contact: ContactConfig,
    pub resume: ResumeAsset,
    pub default_theme: Theme,
}

impl SiteConfig {
    pub fn from_json(s: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(s)?)
    }
}
