//! Resume PDF asset and the modal that shows it.

use log::debug;
use serde::{Deserialize, Serialize};

/// Viewports narrower than this get the fallback instead of an inline PDF.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeAsset {
    /// Site-relative path of the PDF.
    pub path: String,
    /// Accessible title of the inline viewer.
    pub title: String,
}

impl Default for ResumeAsset {
    fn default() -> Self {
        Self {
            path: "/Yaswanth Kuramdasu.pdf".to_string(),
            title: "Resume PDF".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerMode {
    /// PDF embedded in the modal.
    Inline,
    /// "PDF cannot be displayed on this device" with an open link.
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeLinks {
    pub viewer_src: String,
    pub new_tab_href: String,
    pub download_href: String,
    /// Suggested file name for the download attribute.
    pub download_name: String,
}

impl ResumeAsset {
    pub fn href(&self) -> String {
        self.path.replace(' ', "%20")
    }

    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn links(&self) -> ResumeLinks {
        let href = self.href();
        ResumeLinks {
            viewer_src: href.clone(),
            new_tab_href: href.clone(),
            download_href: href,
            download_name: self.file_name().to_string(),
        }
    }

    pub fn viewer_mode(viewport_width: u32) -> ViewerMode {
        if viewport_width < MOBILE_BREAKPOINT_PX {
            ViewerMode::Fallback
        } else {
            ViewerMode::Inline
        }
    }
}

/// Open/closed state of the resume modal. Page scroll is locked while open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResumeModal {
    open: bool,
}

impl ResumeModal {
    pub fn open(&mut self) {
        if !self.open {
            debug!("resume modal: open");
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Keyboard handler; returns true if the key closed the modal.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.close();
            return true;
        }
        false
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_escape_spaces_and_keep_file_name() {
        let links = ResumeAsset::default().links();
        assert_eq!(links.viewer_src, "/Yaswanth%20Kuramdasu.pdf");
        assert_eq!(links.new_tab_href, links.download_href);
        assert_eq!(links.download_name, "Yaswanth Kuramdasu.pdf");
    }

    #[test]
    fn narrow_viewports_fall_back() {
        assert_eq!(ResumeAsset::viewer_mode(767), ViewerMode::Fallback);
        assert_eq!(ResumeAsset::viewer_mode(768), ViewerMode::Inline);
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut modal = ResumeModal::default();
        assert!(!modal.on_key("Escape"));
        modal.open();
        assert!(modal.scroll_locked());
        assert!(!modal.on_key("Enter"));
        assert!(modal.on_key("Escape"));
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
    }
}
