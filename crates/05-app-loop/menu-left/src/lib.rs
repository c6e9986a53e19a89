//! Left (decrement) actions for menu entries.
//!
//! When a menu list is populated, [`LeftResolver`] classifies every
//! [`EntryDescriptor`] and stores the chosen [`LeftAction`] in a [`CallbackSlot`].
//! When the user presses left on the selected entry, the runtime invokes the slot
//! with a [`MenuContext`] holding the subsystems the action may touch.
//!
//! ```ignore
//! let resolver = LeftResolver::new(Capabilities::full());
//! let slots = resolver.populate(&entries);
//! let mut ctx = MenuContext::builder().settings(&mut store).build()?;
//! slots[0].invoke(&mut ctx, entries[0].type_code(), entries[0].label(), false);
//! ```

mod action;
mod context;
mod descriptor;
mod error;
mod handlers;
pub mod playlist;
mod resolver;
mod slot;

pub use action::LeftAction;
pub use context::{MenuContext, MenuContextBuilder};
pub use descriptor::{label_hash, EntryDescriptor, EntryDescriptorBuilder, LabelTag};
pub use error::ResolveError;
pub use handlers::{fast_scroll_speed, VIDEO_SMOOTH_SETTING};
pub use resolver::{Binding, Capabilities, LeftResolver, Rule};
pub use slot::CallbackSlot;
