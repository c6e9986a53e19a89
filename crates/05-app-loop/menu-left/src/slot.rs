//! Per-entry storage for the bound left action.

use crate::action::LeftAction;
use crate::context::MenuContext;
use menu_abi::{ActionOutcome, TypeCode};

/// Callback Slot: the handler chosen for one entry plus its debug name.
///
/// The slot is always written as a whole; `bind` replaces both fields together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallbackSlot {
    action: LeftAction,
    ident: &'static str,
}

impl CallbackSlot {
    pub fn new(action: LeftAction) -> Self {
        Self {
            action,
            ident: action.ident(),
        }
    }

    pub fn bind(&mut self, action: LeftAction) {
        *self = Self::new(action);
    }

    pub fn action(&self) -> LeftAction {
        self.action
    }

    pub fn ident(&self) -> &'static str {
        self.ident
    }

    /// Runs the bound handler.
    pub fn invoke(
        &self,
        ctx: &mut MenuContext<'_>,
        type_code: TypeCode,
        label: &str,
        wraparound: bool,
    ) -> ActionOutcome {
        self.action.invoke(ctx, type_code, label, wraparound)
    }
}

impl Default for CallbackSlot {
    /// Slots start out bound to the generic setting adjustment.
    fn default() -> Self {
        Self::new(LeftAction::Generic)
    }
}
