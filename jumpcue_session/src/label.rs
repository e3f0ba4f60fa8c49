// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation hint for rendering labels against the live prefix.

/// How a candidate's label should be rendered given the characters typed so
/// far.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LabelEmphasis {
    /// Nothing typed yet; render the label normally.
    Normal,
    /// The label starts with the live prefix. The first `n` characters are
    /// the matched prefix and should be visually distinguished from the
    /// remainder, which is still pending.
    ActivePrefix(usize),
    /// The label can no longer be reached from the live prefix; render the
    /// whole label faintly.
    Dimmed,
}

/// Classify `label` against the session's live prefix `entered`.
///
/// Only a match at position 0 counts: addresses are walked from the front,
/// so a label containing the prefix elsewhere is just as unreachable as one
/// not containing it at all.
pub fn label_emphasis(label: &str, entered: &str) -> LabelEmphasis {
    if entered.is_empty() {
        LabelEmphasis::Normal
    } else if label.starts_with(entered) {
        LabelEmphasis::ActivePrefix(entered.chars().count())
    } else {
        LabelEmphasis::Dimmed
    }
}
