//! Navigation-related state types.

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    /// The screen menu on the left.
    Screens,
    /// The mounted screen's rows.
    Content,
}

impl Focus {
    pub fn toggle(self) -> Focus {
        match self {
            Focus::Screens => Focus::Content,
            Focus::Content => Focus::Screens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Screens.toggle(), Focus::Content);
        assert_eq!(Focus::Content.toggle(), Focus::Screens);
        assert_ne!(Focus::Screens, Focus::Content);
    }
}
