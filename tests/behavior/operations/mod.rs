pub mod flash;
pub mod preview;
