//! Focus routing state.

/// Which region receives keystrokes that no higher-priority handler claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusTarget {
    #[default]
    Input,
    Tab,
    Modal,
}

impl FocusTarget {
    /// The `escape` toggle between the input box and the tab content.
    ///
    /// A stale `Modal` target (no modal left on the stack) recovers to the input box.
    pub fn toggled(self) -> Self {
        match self {
            FocusTarget::Input => FocusTarget::Tab,
            FocusTarget::Tab | FocusTarget::Modal => FocusTarget::Input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FocusTarget;

    #[test]
    fn escape_toggle_alternates_input_and_tab() {
        assert_eq!(FocusTarget::default(), FocusTarget::Input);
        assert_eq!(FocusTarget::Input.toggled(), FocusTarget::Tab);
        assert_eq!(FocusTarget::Tab.toggled(), FocusTarget::Input);
        assert_eq!(FocusTarget::Modal.toggled(), FocusTarget::Input);
    }
}
