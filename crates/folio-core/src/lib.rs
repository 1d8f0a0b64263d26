//! Platform-independent logic for the folio-fx page layer.
//!
//! Nothing in here touches the DOM or WebGL, so it builds and tests on the
//! host. The wasm front-end feeds it measurements and events and applies
//! the results.

pub mod browser;
pub mod constants;
pub mod geometry;
pub mod nav;
pub mod parallax;
pub mod ripple;
pub mod scroll;

pub use constants::*;
pub use geometry::*;
pub use ripple::*;

// Shaders bundled as string constants
pub static RIPPLE_VERT: &str = include_str!("../shaders/ripple.vert");
pub static RIPPLE_FRAG: &str = include_str!("../shaders/ripple.frag");

/// Fragment source with the shape constants injected as `#define`s.
pub fn ripple_fragment_source() -> String {
    format!(
        "#define BASE_RADIUS {:?}\n#define EDGE_WIDTH {:?}\n{}",
        RIPPLE_BASE_RADIUS, RIPPLE_EDGE_WIDTH, RIPPLE_FRAG
    )
}
