//! Open/closed bookkeeping for an expandable panel group.
//!
//! DESIGN
//! ======
//! The controller only tracks indices. Panels are identified by position, so
//! the owning component must rebuild the controller if it reorders its list.
//! Out-of-range indices are ignored rather than rejected because they can only
//! come from the caller's own panel list.

#[cfg(test)]
#[path = "toggle_group_test.rs"]
mod toggle_group_test;

/// How many panels may be expanded at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleMode {
    /// Opening a panel closes every other panel.
    #[default]
    Single,
    /// Panels open and close independently.
    Multiple,
}

/// Open-set state for a fixed-length list of panels.
///
/// Open indices are kept in the order they were opened so consumers that
/// iterate the set see a stable sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleGroup {
    mode: ToggleMode,
    panel_count: usize,
    open: Vec<usize>,
}

impl ToggleGroup {
    /// Build a controller seeded with `initial` open indices.
    ///
    /// Out-of-range and duplicate seeds are dropped. In single mode only the
    /// first valid seed is kept.
    #[must_use]
    pub fn new(mode: ToggleMode, panel_count: usize, initial: &[usize]) -> Self {
        let mut open = Vec::new();
        for &index in initial {
            if index >= panel_count || open.contains(&index) {
                continue;
            }
            open.push(index);
            if mode == ToggleMode::Single {
                break;
            }
        }
        Self { mode, panel_count, open }
    }

    #[must_use]
    pub fn mode(&self) -> ToggleMode {
        self.mode
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    /// Currently open indices in the order they were opened.
    #[must_use]
    pub fn open_indices(&self) -> &[usize] {
        &self.open
    }

    /// Whether the panel at `index` is expanded.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Flip the panel at `index`. Returns whether the open set changed.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.panel_count {
            return false;
        }
        match self.mode {
            ToggleMode::Multiple => {
                if let Some(pos) = self.open.iter().position(|&i| i == index) {
                    self.open.remove(pos);
                } else {
                    self.open.push(index);
                }
            }
            ToggleMode::Single => {
                if self.open == [index] {
                    self.open.clear();
                } else {
                    self.open.clear();
                    self.open.push(index);
                }
            }
        }
        true
    }
}
