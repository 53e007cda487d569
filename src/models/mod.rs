pub mod variant;
pub mod version;

pub use variant::*;
pub use version::*;
