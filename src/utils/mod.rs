/// Thousands-grouped number formatting for human-facing summaries
pub mod format;
/// Grayscale conversion helpers
pub mod grayscale;
