// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detected UI element candidates.

use alloc::string::String;

use jumpcue_crowding::Positioned;
use kurbo::Rect;

/// The kind of interactive element a candidate was detected as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A push button or button-like control.
    Button,
    /// A hyperlink.
    Link,
    /// Anything else the detector chose to surface.
    Other,
}

/// An interactive UI element detected by an external introspection
/// collaborator.
///
/// The session never inspects the descriptive attributes; they ride along as
/// opaque metadata so the presentation layer can announce or display what a
/// label points at. Identity (for deduplication) is the frame plus this
/// metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct UiElement {
    /// Detected element kind.
    pub kind: ElementKind,
    /// Element title, if the detector reported one.
    pub title: Option<String>,
    /// Element description, if reported.
    pub description: Option<String>,
    /// Description of the element's current value, if reported.
    pub value_description: Option<String>,
    /// Whether the element responds to the user.
    pub enabled: bool,
    /// The element's frame, in the shared candidate coordinate space.
    pub frame: Rect,
}

impl UiElement {
    /// A bare element with no descriptive attributes, assumed enabled.
    pub const fn new(kind: ElementKind, frame: Rect) -> Self {
        Self {
            kind,
            title: None,
            description: None,
            value_description: None,
            enabled: true,
            frame,
        }
    }
}

impl Positioned for UiElement {
    fn frame(&self) -> Rect {
        self.frame
    }
}
