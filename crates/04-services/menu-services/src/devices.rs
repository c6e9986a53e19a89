//! Display output and disk tray collaborators.

use log::trace;
use menu_abi::{DiskControl, DisplayOutputs, Resolution};

/// Supported output resolutions with the active index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoOutputs {
    resolutions: Vec<Resolution>,
    current: usize,
}

impl VideoOutputs {
    pub fn new(resolutions: Vec<Resolution>, current: usize) -> Self {
        let current = current.min(resolutions.len().saturating_sub(1));
        Self {
            resolutions,
            current,
        }
    }

    pub fn current(&self) -> Option<Resolution> {
        self.resolutions.get(self.current).copied()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }
}

impl DisplayOutputs for VideoOutputs {
    fn prev_output(&mut self) {
        if self.resolutions.is_empty() {
            return;
        }
        self.current = match self.current {
            0 => self.resolutions.len() - 1,
            index => index - 1,
        };
        trace!("display::prev_output: index={}", self.current);
    }
}

/// Disk images of a multi-disk content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiskTray {
    count: usize,
    index: usize,
}

impl DiskTray {
    pub fn new(count: usize, index: usize) -> Self {
        Self {
            count,
            index: index.min(count.saturating_sub(1)),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl DiskControl for DiskTray {
    fn prev_disk(&mut self) {
        self.index = self.index.saturating_sub(1);
        trace!("disk::prev_disk: index={} count={}", self.index, self.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_output_wraps_from_first_to_last() {
        let modes = vec![
            Resolution {
                width: 640,
                height: 480,
            },
            Resolution {
                width: 1280,
                height: 720,
            },
        ];
        let mut outputs = VideoOutputs::new(modes, 0);
        outputs.prev_output();
        assert_eq!(outputs.current_index(), 1);
        outputs.prev_output();
        assert_eq!(outputs.current_index(), 0);
    }

    #[test]
    fn prev_disk_stops_at_first_disk() {
        let mut tray = DiskTray::new(3, 1);
        tray.prev_disk();
        tray.prev_disk();
        assert_eq!(tray.index(), 0);
    }
}
