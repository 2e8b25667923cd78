//! Library components of the `wos-map` command line.

pub mod generate;
pub mod logging;
