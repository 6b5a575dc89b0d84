//! Local UI chrome state (sidebar groups, logout confirmation, notices).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session store so the
//! sidebar and banners can evolve independently of auth.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Collapsible sidebar navigation groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavGroup {
    Videos,
    Ads,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub videos_menu_open: bool,
    pub ads_menu_open: bool,
    pub confirm_logout: bool,
    /// One-time message shown on the next login screen render.
    pub notice: Option<String>,
}

impl UiState {
    pub fn toggle_group(&mut self, group: NavGroup) {
        match group {
            NavGroup::Videos => self.videos_menu_open = !self.videos_menu_open,
            NavGroup::Ads => self.ads_menu_open = !self.ads_menu_open,
        }
    }

    pub fn is_group_open(&self, group: NavGroup) -> bool {
        match group {
            NavGroup::Videos => self.videos_menu_open,
            NavGroup::Ads => self.ads_menu_open,
        }
    }

    /// Queue a notice; a newer notice replaces an unread one.
    pub fn raise_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }

    /// Consume the pending notice so it is shown once.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
