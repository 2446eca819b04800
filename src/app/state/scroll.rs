/// Content scroll of the active page plus the throttled "back to top" badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    /// Upper bound published by the renderer after measuring the page.
    pub max_offset: u16,
    pub back_to_top: bool,
    /// Scroll inside an open project or post modal.
    pub modal_offset: u16,
    /// A visibility check is scheduled; further scroll events do not
    /// schedule another one.
    pub check_pending: bool,
}

impl ScrollState {
    pub fn scroll_down(&mut self, amount: u16) {
        self.offset = self.offset.saturating_add(amount).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Returns true when a new check must be scheduled.
    pub fn request_check(&mut self) -> bool {
        if self.check_pending {
            return false;
        }
        self.check_pending = true;
        true
    }

    pub fn run_check(&mut self, threshold: u16) {
        self.check_pending = false;
        self.back_to_top = self.offset > threshold;
    }
}
