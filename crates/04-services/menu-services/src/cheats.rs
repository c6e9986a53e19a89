//! Cheat list of the running content.

use log::{trace, warn};
use menu_abi::{ActionOutcome, Cheat, CheatManager, MenuAction};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheatList {
    cheats: Vec<Cheat>,
}

impl CheatList {
    pub fn new(cheats: Vec<Cheat>) -> Self {
        Self { cheats }
    }

    pub fn cheats(&self) -> &[Cheat] {
        &self.cheats
    }
}

impl CheatManager for CheatList {
    fn len(&self) -> usize {
        self.cheats.len()
    }

    fn resize(&mut self, len: usize) {
        self.cheats.resize_with(len, Cheat::default);
        trace!("cheats::resize: len={len}");
    }

    fn toggle(&mut self, index: usize, action: MenuAction, _wraparound: bool) -> ActionOutcome {
        match self.cheats.get_mut(index) {
            Some(cheat) => {
                cheat.enabled = !cheat.enabled;
                trace!(
                    "cheats::toggle: index={index} action={action:?} enabled={}",
                    cheat.enabled
                );
            }
            None => warn!(
                "cheats::toggle: index {index} out of range (len={})",
                self.cheats.len()
            ),
        }
        ActionOutcome::Handled
    }
}
