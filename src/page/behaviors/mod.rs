// Page behaviors, one module per operation
pub mod confirm;
pub mod flash;
pub mod preview;

pub use confirm::{Confirmer, ConsoleConfirmer, ScriptedConfirmer};
