//! Library side of the `warsa-prisoners` command line tool.

pub mod logging;
pub mod pipeline;
pub mod types;
