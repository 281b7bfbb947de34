//! Scenarios organized by widget

pub mod panel;

use crate::runner::TestSuite;

/// Create all scenario suites
pub fn all_suites() -> Vec<TestSuite> {
    vec![
        panel::suite(),
        label::suite(),
        button::suite(),
        nine_patch::suite(),
    ]
}
