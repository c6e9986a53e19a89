//! Core catalog and core option store.

use log::{trace, warn};
use menu_abi::{CoreCatalog, CoreInfo, CoreOption, CoreOptions};

/// Ordered list of installed cores.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoreInfoList {
    cores: Vec<CoreInfo>,
}

impl CoreInfoList {
    pub fn new(cores: Vec<CoreInfo>) -> Self {
        Self { cores }
    }

    /// Catalog built from bare core paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(paths.into_iter().map(CoreInfo::new).collect())
    }
}

impl CoreCatalog for CoreInfoList {
    fn cores(&self) -> &[CoreInfo] {
        &self.cores
    }
}

/// Options exposed by the running core.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoreOptionList {
    options: Vec<CoreOption>,
}

impl CoreOptionList {
    pub fn new(options: Vec<CoreOption>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[CoreOption] {
        &self.options
    }
}

impl CoreOptions for CoreOptionList {
    fn prev(&mut self, index: usize) {
        let Some(option) = self.options.get_mut(index) else {
            warn!("core_options::prev: index {index} out of range");
            return;
        };
        if option.values.is_empty() {
            return;
        }
        option.index = match option.index {
            0 => option.values.len() - 1,
            current => current.min(option.values.len()) - 1,
        };
        trace!(
            "core_options::prev: {} -> {}",
            option.key,
            option.values[option.index]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_wraps_to_last_choice() {
        let mut options = CoreOptionList::new(vec![CoreOption {
            key: "region".into(),
            values: vec!["auto".into(), "ntsc".into(), "pal".into()],
            index: 1,
        }]);
        options.prev(0);
        assert_eq!(options.options()[0].index, 0);
        options.prev(0);
        assert_eq!(options.options()[0].index, 2);
        options.prev(5);
    }
}
