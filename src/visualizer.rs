//! Live-input state for front ends that re-run the pipeline as the user types.

use tracing::debug;

use crate::{normalize, Normalization, ViewConfig};

/// Current input and the walkthrough computed from it.
///
/// Front ends feed every input change through [`Visualizer::set_input`] and
/// redraw when it returns `true`.
///
/// ## Example
///
/// ```rust
/// use legacy_color_core::Visualizer;
///
/// let mut vis = Visualizer::new();
/// assert_eq!(vis.input(), "chucknorris");
/// assert_eq!(vis.result().final_color, "c00000");
///
/// assert!(vis.set_input("#00ff00"));
/// assert!(!vis.set_input("#00ff00"));
/// assert_eq!(vis.result().css_color(), "#00ff00");
/// ```
#[derive(Clone, Debug)]
pub struct Visualizer {
    input: String,
    result: Normalization,
    runs: usize,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer {
    /// Start from the default initial input.
    pub fn new() -> Self {
        Self::with_input(&ViewConfig::default().initial_input)
    }

    /// Start from the configured initial input.
    pub fn from_config(config: &ViewConfig) -> Self {
        Self::with_input(&config.initial_input)
    }

    /// Start from `input`.
    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            result: normalize(input),
            runs: 1,
        }
    }

    /// Replace the input, re-running the pipeline only if it changed.
    ///
    /// Returns `true` when the result was recomputed.
    pub fn set_input(&mut self, input: &str) -> bool {
        if input == self.input {
            return false;
        }
        self.input = input.to_string();
        self.result = normalize(input);
        self.runs += 1;
        debug!(runs = self.runs, color = %self.result.final_color, "input changed");
        true
    }

    /// The current input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The walkthrough for the current input.
    pub fn result(&self) -> &Normalization {
        &self.result
    }

    /// How many times the pipeline has run, including the initial run.
    pub fn runs(&self) -> usize {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input() {
        let vis = Visualizer::default();
        assert_eq!(vis.input(), "chucknorris");
        assert_eq!(vis.result().final_color, "c00000");
        assert_eq!(vis.runs(), 1);
    }

    #[test]
    fn recompute_on_change_only() {
        let mut vis = Visualizer::with_input("abc");
        assert!(!vis.set_input("abc"));
        assert_eq!(vis.runs(), 1);

        assert!(vis.set_input(""));
        assert_eq!(vis.result().final_color, "000");
        assert_eq!(vis.runs(), 2);
    }

    #[test]
    fn from_config() {
        let config = ViewConfig {
            initial_input: "#123456".into(),
            ..Default::default()
        };
        let vis = Visualizer::from_config(&config);
        assert_eq!(vis.result().final_color, "123456");
    }

    #[test]
    fn result_matches_fresh_run() {
        let mut vis = Visualizer::new();
        vis.set_input("ab#cd");
        assert_eq!(vis.result(), &normalize("ab#cd"));
    }
}
