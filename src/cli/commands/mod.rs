//! One module per subcommand, each exposing an `execute` function.

pub mod add;
pub mod completions;
pub mod generate;
pub mod info;
pub mod list;
pub mod show;
