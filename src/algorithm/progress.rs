use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar tracking of a traversal
pub struct TraversalProgress {
    progress_bar: ProgressBar,
}

impl TraversalProgress {
    /// Creates a progress tracker over `cells` visits, drawn only when `visible`
    pub fn new(cells: usize, visible: bool) -> Self {
        let progress_bar = if visible {
            ProgressBar::new(cells as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} cells (Infeasible: {msg})",
        ) {
            progress_bar.set_style(style.progress_chars("##-"));
        }
        progress_bar.set_message("0");
        Self { progress_bar }
    }

    /// Record one visited cell
    pub fn increment(&self) {
        self.progress_bar.inc(1);
    }

    /// Update the running count of visits that found no tile to draw
    pub fn set_infeasible(&self, count: usize) {
        self.progress_bar.set_message(count.to_string());
    }

    /// Finish and clear progress display
    pub fn finish(self) {
        self.progress_bar.finish_and_clear();
    }
}
