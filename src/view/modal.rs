//! Label prompt shown after each new pin
//!
//! The prompt has a single text field and commits on Enter or "save". There is
//! no cancel: once open it stays until a label is committed. Reordering or
//! deleting pins while it is open keeps it pointed at the same pin.

/// Open label prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelModal {
    target: usize,
}

impl LabelModal {
    /// Title shown above the text field
    pub const TITLE: &'static str = "Label Your Pin";

    /// Open a prompt for the pin at `target`
    pub fn open(target: usize) -> Self {
        Self { target }
    }

    /// Index of the pin whose label will be set
    pub fn target(&self) -> usize {
        self.target
    }

    /// Follow the target pin across a swap of positions `a` and `b`
    pub fn swap(&mut self, a: usize, b: usize) {
        if self.target == a {
            self.target = b;
        } else if self.target == b {
            self.target = a;
        }
    }

    /// Follow the target pin across the removal of the pin at `index`
    ///
    /// Returns `None` when the target itself was removed.
    #[must_use]
    pub fn after_remove(self, index: usize) -> Option<Self> {
        match self.target.cmp(&index) {
            std::cmp::Ordering::Less => Some(self),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(Self {
                target: self.target - 1,
            }),
        }
    }
}

/// Keys the prompt reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    /// Commit the current text
    Enter,
    /// Any other key; edits the field but does not commit
    Other,
}

impl ModalKey {
    /// Whether the key commits the label
    pub fn commits(self) -> bool {
        matches!(self, ModalKey::Enter)
    }
}
