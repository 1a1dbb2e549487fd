mod accessor;
mod loader;
mod soft;
mod strict;

pub use loader::*;
pub use strict::*;
