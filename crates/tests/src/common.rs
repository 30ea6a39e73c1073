use std::cell::RefCell;
use std::collections::BTreeSet;

use shared_types::{HitTest, PresentationRoot};

pub const INSIDE_PANEL: HitTest = HitTest {
    in_panel: true,
    in_trigger: false,
};

pub const INSIDE_TRIGGER: HitTest = HitTest {
    in_panel: false,
    in_trigger: true,
};

pub const OUTSIDE: HitTest = HitTest {
    in_panel: false,
    in_trigger: false,
};

/// Presentation root that records which flags are currently set.
#[derive(Default)]
pub struct RecordingRoot {
    pub flags: RefCell<BTreeSet<String>>,
}

impl RecordingRoot {
    pub fn has(&self, name: &str) -> bool {
        self.flags.borrow().contains(name)
    }
}

impl PresentationRoot for RecordingRoot {
    fn set_flag(&self, name: &str, on: bool) {
        let mut flags = self.flags.borrow_mut();
        if on {
            flags.insert(name.to_string());
        } else {
            flags.remove(name);
        }
    }
}
