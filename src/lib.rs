//! Deterministic page-interaction toolkit.
//!
//! Three independent, stateless behaviors over an in-memory page model:
//! auto-hiding a flash banner after a fixed delay, confirming a destructive
//! action through an injectable prompt, and reflecting a file selection into
//! a label. Deferred work runs against a virtual clock so every behavior is
//! reproducible in tests.

pub mod dom;
pub mod error;
pub mod page;
pub mod scheduler;

pub use dom::fixture::PageFixture;
pub use dom::{Display, Dom, Element, ElementId};
pub use error::{Error, Result};
pub use page::Page;
pub use page::behaviors::confirm::{Confirmer, ConsoleConfirmer, ScriptedConfirmer, delete_prompt};
pub use page::behaviors::flash::{FLASH_CLASS, FLASH_HIDE_DELAY_MS};
pub use page::behaviors::preview::CHOOSE_FILE_PLACEHOLDER;
