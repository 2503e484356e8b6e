pub mod pointer;
pub mod theme;
pub mod view;

#[cfg(feature = "cli")]
pub mod cli;
