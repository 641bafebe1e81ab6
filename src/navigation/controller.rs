//! View controller for sections and the mobile menu.

use super::keys::Key;
use crate::config::Config;
use crate::error::{NavigationError, NavigationResult};
use std::time::Duration;

/// Section shown when nothing else is active.
pub const DEFAULT_SECTION: &str = "home";

/// Delay before the first menu item takes focus after the menu opens.
const MENU_FOCUS_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Everything the page shows that is not form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteState {
    pub active_section: String,
    pub menu: MenuState,
}

/// An instruction for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEffect {
    HideSection(String),
    ShowSection(String),
    /// Mark the nav link for this section active and all others inactive.
    SetActiveNavLink(String),
    ScrollToTop,
    /// Focus the first heading, button or input inside the section.
    FocusSectionStart(String),
    Announce(String),
    /// Sync `aria-expanded` on the toggle and `aria-hidden` on the menu.
    SetMenuExpanded(bool),
    /// Animate the hamburger icon into a cross (`true`) or back.
    AnimateToggle(bool),
    FocusFirstMenuItem { delay: Duration },
}

/// Owns [`SiteState`] and applies transitions to it.
#[derive(Debug, Clone)]
pub struct ViewController {
    sections: Vec<String>,
    state: SiteState,
    mobile_breakpoint_px: u32,
}

impl ViewController {
    /// Create a controller for the given section ids.
    ///
    /// `"home"` starts active if it is listed, otherwise the first section.
    pub fn new<I, S>(sections: I, mobile_breakpoint_px: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        let active_section = if sections.iter().any(|s| s == DEFAULT_SECTION) {
            DEFAULT_SECTION.to_string()
        } else {
            sections.first().cloned().unwrap_or_default()
        };

        Self {
            sections,
            state: SiteState {
                active_section,
                menu: MenuState::Closed,
            },
            mobile_breakpoint_px,
        }
    }

    pub fn from_config<I, S>(sections: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(sections, config.mobile_breakpoint_px)
    }

    pub fn state(&self) -> &SiteState {
        &self.state
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Effects that bring a freshly loaded page in line with the state.
    pub fn initial_effects(&self) -> Vec<ViewEffect> {
        vec![
            ViewEffect::ShowSection(self.state.active_section.clone()),
            ViewEffect::SetActiveNavLink(self.state.active_section.clone()),
            ViewEffect::SetMenuExpanded(false),
        ]
    }

    /// Show `section`, from a nav link or any in-page button.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::UnknownSection` and leaves the state alone
    /// when the page has no such section.
    pub fn navigate(&mut self, section: &str) -> NavigationResult<Vec<ViewEffect>> {
        if !self.sections.iter().any(|s| s == section) {
            tracing::error!(section = %section, "Section not found");
            return Err(NavigationError::UnknownSection(section.to_string()));
        }

        let mut effects = Vec::new();
        if self.state.active_section != section {
            effects.push(ViewEffect::HideSection(self.state.active_section.clone()));
        }
        effects.push(ViewEffect::ShowSection(section.to_string()));
        effects.push(ViewEffect::SetActiveNavLink(section.to_string()));
        effects.extend(self.close_menu());
        effects.push(ViewEffect::ScrollToTop);
        effects.push(ViewEffect::FocusSectionStart(section.to_string()));
        effects.push(ViewEffect::Announce(format!(
            "Navigated to {} section",
            section
        )));

        tracing::debug!(from = %self.state.active_section, to = %section, "Navigating");
        self.state.active_section = section.to_string();
        Ok(effects)
    }

    pub fn toggle_menu(&mut self) -> Vec<ViewEffect> {
        if self.state.menu.is_open() {
            self.close_menu()
        } else {
            self.open_menu()
        }
    }

    pub fn open_menu(&mut self) -> Vec<ViewEffect> {
        if self.state.menu.is_open() {
            return Vec::new();
        }
        self.state.menu = MenuState::Open;

        vec![
            ViewEffect::SetMenuExpanded(true),
            ViewEffect::AnimateToggle(true),
            ViewEffect::FocusFirstMenuItem {
                delay: MENU_FOCUS_DELAY,
            },
        ]
    }

    /// Close the menu. Does nothing if it is already closed.
    pub fn close_menu(&mut self) -> Vec<ViewEffect> {
        if !self.state.menu.is_open() {
            return Vec::new();
        }
        self.state.menu = MenuState::Closed;

        vec![
            ViewEffect::SetMenuExpanded(false),
            ViewEffect::AnimateToggle(false),
        ]
    }

    /// Document-level key handling: Escape closes the menu.
    pub fn on_key(&mut self, key: Key) -> Vec<ViewEffect> {
        match key {
            Key::Escape => self.close_menu(),
            _ => Vec::new(),
        }
    }

    /// A click anywhere on the page. `inside` is true when the target is the
    /// menu or its toggle.
    pub fn on_document_click(&mut self, inside: bool) -> Vec<ViewEffect> {
        if inside {
            Vec::new()
        } else {
            self.close_menu()
        }
    }

    /// The viewport was resized. Above the breakpoint the menu closes.
    pub fn on_resize(&mut self, viewport_width: u32) -> Vec<ViewEffect> {
        if viewport_width > self.mobile_breakpoint_px {
            self.close_menu()
        } else {
            Vec::new()
        }
    }
}
