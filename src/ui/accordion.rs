//! Accordion (disclosure group) state machine.
//!
//! Each panel is either collapsed or expanded. In single-select mode,
//! expanding one panel collapses every other panel in the same update, so at
//! most one panel is ever open.

/// Open/closed state for an ordered group of panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureGroup {
    allow_multiple: bool,
    panels: Vec<(String, bool)>,
}

impl DisclosureGroup {
    /// Builds the group with `default_open` panels expanded.
    ///
    /// Ids that do not name a panel are ignored. In single-select mode only
    /// the first known default-open id is honored.
    pub fn new<I, S, O, T>(panel_ids: I, allow_multiple: bool, default_open: O) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        O: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut group = Self {
            allow_multiple,
            panels: panel_ids.into_iter().map(|id| (id.into(), false)).collect(),
        };

        for id in default_open {
            let id = id.as_ref();
            if !group.contains(id) {
                continue;
            }
            group.set_open(id);
            if !allow_multiple {
                break;
            }
        }

        group
    }

    pub fn allows_multiple(&self) -> bool {
        self.allow_multiple
    }

    pub fn contains(&self, id: &str) -> bool {
        self.panels.iter().any(|(p, _)| p == id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.panels.iter().any(|(p, open)| p == id && *open)
    }

    /// Ids of expanded panels in panel order.
    pub fn open_ids(&self) -> Vec<&str> {
        self.panels
            .iter()
            .filter(|(_, open)| *open)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Flips panel `id` and returns its new state, or `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let will_open = !self.is_open(id);
        if !self.contains(id) {
            return None;
        }

        if will_open {
            self.set_open(id);
        } else {
            for (p, open) in &mut self.panels {
                if p == id {
                    *open = false;
                }
            }
        }

        Some(will_open)
    }

    /// The state toggling `id` would produce, leaving `self` untouched.
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    fn set_open(&mut self, id: &str) {
        let exclusive = !self.allow_multiple;
        for (p, open) in &mut self.panels {
            if p == id {
                *open = true;
            } else if exclusive {
                *open = false;
            }
        }
    }
}

/// Parses a comma-separated `open` query value.
pub fn parse_open_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
