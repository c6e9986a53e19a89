//! Navigation cursor and list refresh flags.

use log::trace;
use menu_abi::{ActionOutcome, ListInfo, ListKind, MenuAction, Navigation};

/// Navigation state of the active menu list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    selection: usize,
    entries: usize,
    scroll_accel: Option<usize>,
    list: ListInfo,
    content_switch: bool,
    /// Set whenever the selection moved since the last render.
    pub dirty: bool,
    /// A list refresh has been requested and not yet served.
    pub refresh_pending: bool,
    /// Repopulation is blocked until the pending refresh runs.
    pub populate_blocked: bool,
    /// Last list cache request.
    pub cached: Option<(ListKind, MenuAction)>,
    /// Number of content-list switches performed.
    pub switches: usize,
}

impl NavState {
    /// Cursor over a list of `entries` rows.
    pub fn new(entries: usize) -> Self {
        Self {
            entries,
            list: ListInfo {
                size: 1,
                selection: 0,
            },
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, selection: usize) -> Self {
        self.set_selection(selection);
        self
    }

    pub fn with_scroll_accel(mut self, accel: Option<usize>) -> Self {
        self.scroll_accel = accel;
        self
    }

    pub fn with_list(mut self, list: ListInfo) -> Self {
        self.list = list;
        self
    }

    /// Gives the active entry a content-list switch capability.
    pub fn with_content_switch(mut self, enabled: bool) -> Self {
        self.content_switch = enabled;
        self
    }

    pub fn entries(&self) -> usize {
        self.entries
    }
}

impl Navigation for NavState {
    fn selection(&self) -> usize {
        self.selection
    }

    fn set_selection(&mut self, index: usize) {
        self.selection = index.min(self.entries.saturating_sub(1));
    }

    fn scroll_accel(&self) -> Option<usize> {
        self.scroll_accel
    }

    fn set_dirty(&mut self) {
        self.dirty = true;
    }

    fn clear_pending_refresh(&mut self) {
        self.refresh_pending = false;
    }

    fn list_info(&self) -> ListInfo {
        self.list
    }

    fn cache_list(&mut self, kind: ListKind, action: MenuAction) {
        self.cached = Some((kind, action));
    }

    fn content_list_switch(&mut self) -> Option<ActionOutcome> {
        if !self.content_switch {
            return None;
        }
        self.switches += 1;
        self.list.selection = self.list.selection.saturating_sub(1);
        trace!(
            "navigation::content_list_switch: switches={} list_selection={}",
            self.switches,
            self.list.selection
        );
        Some(ActionOutcome::Handled)
    }

    fn request_refresh(&mut self) {
        self.refresh_pending = true;
    }

    fn prevent_populate(&mut self) {
        self.populate_blocked = true;
    }
}
