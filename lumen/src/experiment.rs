//! Experiment driver
//!
//! Runs a sequence of named masks and the four histogram transform chains
//! against the luminance of one source grid. A variant that fails is
//! logged and recorded, and the run moves on to the next one.

use lumen_color::convert_to_luminance;
use lumen_core::PixelGrid;
use lumen_filter::{
    ConvolveOptions, FilterResult, Mask, convolve_with, equalize_histogram, expand_histogram,
};

/// Result of applying one named mask
#[derive(Debug)]
pub struct MaskOutcome {
    /// Caller-supplied variant name
    pub name: String,
    /// Filtered grid, or why the variant was skipped
    pub result: FilterResult<PixelGrid>,
}

/// Results of the histogram transforms on the luminance grid
#[derive(Debug)]
pub struct HistogramSuite {
    /// Linear stretch to [0, 255]
    pub expanded: FilterResult<PixelGrid>,
    /// Cumulative-count equalization
    pub equalized: FilterResult<PixelGrid>,
    /// Expansion followed by equalization
    pub expanded_then_equalized: FilterResult<PixelGrid>,
    /// Equalization followed by expansion
    pub equalized_then_expanded: FilterResult<PixelGrid>,
}

impl HistogramSuite {
    /// The four results with their names, in run order.
    pub fn entries(&self) -> [(&'static str, &FilterResult<PixelGrid>); 4] {
        [
            ("expanded", &self.expanded),
            ("equalized", &self.equalized),
            ("expanded_then_equalized", &self.expanded_then_equalized),
            ("equalized_then_expanded", &self.equalized_then_expanded),
        ]
    }
}

/// Names of succeeded and failed variants
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentReport {
    /// Variants that produced a grid
    pub succeeded: Vec<String>,
    /// Variants that failed, with the error message
    pub failed: Vec<(String, String)>,
}

impl ExperimentReport {
    /// Summarize mask outcomes.
    pub fn from_outcomes(outcomes: &[MaskOutcome]) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            match &outcome.result {
                Ok(_) => report.succeeded.push(outcome.name.clone()),
                Err(e) => report.failed.push((outcome.name.clone(), e.to_string())),
            }
        }
        report
    }

    /// Whether every variant succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// One source grid and the options used to filter its luminance
#[derive(Debug, Clone)]
pub struct Experiment {
    source: PixelGrid,
    luminance: PixelGrid,
    options: ConvolveOptions,
}

impl Experiment {
    /// Start an experiment; the luminance grid is computed once here.
    pub fn new(source: PixelGrid) -> Self {
        let luminance = convert_to_luminance(&source);
        Self {
            source,
            luminance,
            options: ConvolveOptions::default(),
        }
    }

    /// Set the convolution options used by [`Experiment::run_masks`].
    pub fn with_options(mut self, options: ConvolveOptions) -> Self {
        self.options = options;
        self
    }

    /// The source grid as supplied.
    pub fn source(&self) -> &PixelGrid {
        &self.source
    }

    /// The luminance of the source grid.
    pub fn luminance(&self) -> &PixelGrid {
        &self.luminance
    }

    /// Apply each named mask to the luminance grid, in order.
    ///
    /// Returns one outcome per mask; failures do not stop the run.
    pub fn run_masks<S: AsRef<str>>(&self, masks: &[(S, Mask)]) -> Vec<MaskOutcome> {
        masks
            .iter()
            .map(|(name, mask)| {
                let name = name.as_ref();
                let result = convolve_with(&self.luminance, mask, &self.options);
                match &result {
                    Ok(grid) => log::info!(
                        "mask '{}' ({}x{}): {}x{} output",
                        name,
                        mask.dim(),
                        mask.dim(),
                        grid.rows(),
                        grid.columns()
                    ),
                    Err(e) => log::warn!("mask '{}' skipped: {}", name, e),
                }
                MaskOutcome {
                    name: name.to_string(),
                    result,
                }
            })
            .collect()
    }

    /// Run expansion, equalization and both chains on the luminance grid.
    pub fn run_histograms(&self) -> HistogramSuite {
        let y = &self.luminance;
        let suite = HistogramSuite {
            expanded: expand_histogram(y),
            equalized: equalize_histogram(y),
            expanded_then_equalized: expand_histogram(y).and_then(|g| equalize_histogram(&g)),
            equalized_then_expanded: equalize_histogram(y).and_then(|g| expand_histogram(&g)),
        };
        for (name, result) in suite.entries() {
            if let Err(e) = result {
                log::warn!("histogram transform '{}' skipped: {}", name, e);
            } else {
                log::info!("histogram transform '{}' done", name);
            }
        }
        suite
    }
}
