//! Page view slot: a named static page ("home", "about", ...).

mod reducer;

pub use reducer::PageReducer;
