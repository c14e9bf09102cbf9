//! Command implementations

pub mod menu;
pub mod saves;

pub use menu::{Console, ShellConfig, resume, run_menu};
pub use saves::load_all;
