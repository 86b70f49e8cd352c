use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// An explicit choice wins over the system colour scheme.
    pub fn resolve(stored: Option<Theme>, prefers_dark: bool) -> Theme {
        stored.unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Tooltip for the toggle button.
    pub fn toggle_title(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark",
            Theme::Dark => "Switch to light",
        }
    }
}

/// Inline script for the document head. It applies the stored or system theme
/// before first paint, mirroring [`Theme::resolve`], so dark-mode visitors
/// don't see a light page until the WASM bundle hydrates.
pub fn preload_script() -> String {
    format!(
        "(function(){{var t=null;try{{t=JSON.parse(localStorage.getItem('{STORAGE_KEY}'));}}catch(e){{}}\
var d=t==='dark'||(t!=='light'&&window.matchMedia('(prefers-color-scheme: dark)').matches);\
document.documentElement.classList.toggle('dark',d);}})();"
    )
}
