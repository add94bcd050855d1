pub(crate) mod app;
pub(crate) mod charts;
pub(crate) mod palette;
pub(crate) mod render;
pub(crate) mod theme;
pub(crate) mod util;


#[cfg(test)]
#[path = "palette_tests.rs"]
mod palette_tests;
