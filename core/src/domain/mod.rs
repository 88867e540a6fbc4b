pub mod common;
pub mod geo;
pub mod guide;
pub mod view;
