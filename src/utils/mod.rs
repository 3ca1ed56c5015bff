// Utility functions
// Helper functions for common operations

pub mod format;

pub use format::{bio_toggle_label, portrait_alt, subtitle};
