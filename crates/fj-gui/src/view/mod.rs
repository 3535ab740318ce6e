//! Page views.

mod browse;

pub use browse::view_browse;
