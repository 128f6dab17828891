//! Display for surface and core programs
//!
//! Both printers produce source text the parser accepts.

pub mod core;
pub mod surface;

pub use self::core::CoreProgram;
pub use self::surface::SurfaceProgram;
