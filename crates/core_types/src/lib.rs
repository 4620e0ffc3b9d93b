/// Opaque handle to a node owned by the editing-surface host.
///
/// The core never owns document nodes. It only passes these handles back to
/// the host, which decides what they mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef(pub u32);

impl NodeRef {
    #[inline]
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

/// Opaque handle to a legacy host text range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRangeRef(pub u32);

/// Which of the two views is showing the content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// The editable WYSIWYG surface.
    #[default]
    Rich,
    /// The backing plain-text field, showing raw markup.
    Plain,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Rich => ViewMode::Plain,
            ViewMode::Plain => ViewMode::Rich,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ref_exposes_raw_id() {
        assert_eq!(NodeRef(7).as_raw(), 7);
    }

    #[test]
    fn view_mode_toggles_both_ways() {
        assert_eq!(ViewMode::Rich.toggled(), ViewMode::Plain);
        assert_eq!(ViewMode::Plain.toggled(), ViewMode::Rich);
        assert_eq!(ViewMode::default(), ViewMode::Rich);
    }
}
