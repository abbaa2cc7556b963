//! Sun position sources and sky-space conversion.
//!
//! The exposure engine never computes ephemeris itself. It asks a
//! [`SunPositionProvider`] for the sun's azimuth and altitude, using the
//! south-referenced convention: azimuth `0` is due south and grows clockwise
//! towards west.

pub mod provider;
pub mod sky;
pub mod spa;

// Re-exports
pub use provider::{FixedSun, SunPositionProvider, SunSample};
pub use sky::sun_to_render_vector;
pub use spa::SpaSunProvider;
