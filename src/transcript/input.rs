//! State of the live input line.

/// The input control: its value plus visibility, focus and disabled flags.
///
/// Focus only sticks while the line is visible and enabled, the way a hidden
/// or disabled form control refuses focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    value: String,
    visible: bool,
    focused: bool,
    disabled: bool,
    scroll_syncs: u64,
}

impl Default for InputLine {
    fn default() -> Self {
        Self {
            value: String::new(),
            visible: true,
            focused: false,
            disabled: false,
            scroll_syncs: 0,
        }
    }
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the typed value. Ignored while the control is disabled.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        if self.disabled {
            return false;
        }
        self.value = value.into();
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Visible, focused and enabled: ready for the next command.
    pub fn is_ready(&self) -> bool {
        self.visible && self.focused && !self.disabled
    }

    /// Number of focus/defocus cycles performed to keep the view scrolled.
    pub fn scroll_syncs(&self) -> u64 {
        self.scroll_syncs
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
        self.focused = false;
    }

    pub(crate) fn show(&mut self) {
        self.visible = true;
    }

    pub(crate) fn focus(&mut self) -> bool {
        self.focused = self.visible && !self.disabled;
        self.focused
    }

    pub(crate) fn disable(&mut self) {
        self.disabled = true;
        self.focused = false;
    }

    /// Briefly enable and focus the control, then disable it again.
    pub(crate) fn pulse_focus(&mut self) {
        if !self.disabled {
            return;
        }
        self.disabled = false;
        if self.focus() {
            self.scroll_syncs += 1;
        }
        self.disable();
    }
}
