//! resizer-test - Regression test framework for the asset resizer
//!
//! Every check in a regression test goes through [`RegParams`], which
//! numbers the checks, records failures and reports them together at
//! [`RegParams::cleanup`]:
//!
//! ```ignore
//! use resizer_test::RegParams;
//!
//! let mut rp = RegParams::new("scale");
//! rp.compare_values(16.0, out.width() as f64, 0.0);
//! assert!(rp.cleanup(), "scale regression test failed");
//! ```
//!
//! Inputs are synthesized by [`fixtures`] rather than loaded from disk.
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to also write intermediate images
//!   to `tests/regout/` at the workspace root

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // resizer-test is at crates/resizer-test
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regression output directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
