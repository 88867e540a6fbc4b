//! Client view layer, modeled as explicit state instead of the DOM flag
//! checks it replaces. The screen state machine is a pure reducer fed by
//! events; network results arrive as events too, so everything is testable
//! without a browser. The map picker drives its geocoder port directly.

pub mod map_picker;
pub mod render;
pub mod state;

pub use map_picker::*;
pub use render::*;
pub use state::*;
