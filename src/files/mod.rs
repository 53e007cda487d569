pub mod companion;
pub mod manifest;
pub mod marker;
