use super::TabId;

/// Visible panel; `None` until the first selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    active: Option<TabId>,
}

impl TabState {
    pub fn select(&mut self, tab: TabId) {
        self.active = Some(tab);
    }

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    pub fn is_panel_visible(&self, tab: TabId) -> bool {
        self.active == Some(tab)
    }

    pub fn is_link_active(&self, tab: TabId) -> bool {
        self.active == Some(tab)
    }
}
