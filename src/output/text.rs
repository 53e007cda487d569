use crate::error::PatchverError;

pub fn print_warnings(warnings: &[PatchverError]) {
    for w in warnings {
        eprintln!("Warning: {}", w.message);
    }
}
