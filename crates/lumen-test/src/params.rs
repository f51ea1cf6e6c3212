//! Regression test parameters and operations

use lumen_core::PixelGrid;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and grids (default)
    #[default]
    Compare,
    /// Compare and also print small grids for visual inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two grids for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the grids are identical, `false` otherwise.
    pub fn compare_grids(&mut self, grid1: &PixelGrid, grid2: &PixelGrid) -> bool {
        self.index += 1;

        if !grid1.sizes_equal(grid2) {
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {} - dimension mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                grid1.rows(),
                grid1.columns(),
                grid2.rows(),
                grid2.columns()
            );
            self.fail(msg);
            return false;
        }

        for row in 0..grid1.rows() {
            for column in 0..grid1.columns() {
                let p1 = grid1.get_rgb(row, column);
                let p2 = grid2.get_rgb(row, column);
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: grid comparison for index {} - sample mismatch \
                         at ({}, {}): {:?} vs {:?}",
                        self.test_name, self.index, row, column, p1, p2
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Print the first channel of a small grid in display mode
    pub fn show_grid(&self, label: &str, grid: &PixelGrid) {
        if !self.display() {
            return;
        }
        eprintln!("  {} ({}x{}):", label, grid.rows(), grid.columns());
        for row in 0..grid.rows().min(16) {
            let line: Vec<String> = (0..grid.columns().min(16))
                .map(|c| format!("{:3}", grid.get_gray_unchecked(row, c)))
                .collect();
            eprintln!("    {}", line.join(" "));
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
