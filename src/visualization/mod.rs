pub mod canvas;
pub mod summary;

pub use canvas::plot;
pub use summary::{print_batch_stats, print_canvas, print_summary, summary_lines};
