// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jumpcue Session: keystroke-driven navigation over addressed screen
//! regions.
//!
//! This crate glues the jumpcue building blocks into a navigation session:
//!
//! - **Candidate sources.** A [`GridJump`] partitions a surface into cells
//!   with [`jumpcue_grid`]; an [`ElementJump`] takes externally detected UI
//!   elements, thins them with [`jumpcue_crowding`], and addresses the
//!   survivors. [`JumpMode::Freestyle`] opts out of addressing entirely.
//! - **Alphabets.** [`select_alphabet`] picks an ordered key set from a
//!   tiered table sized to the candidate count, minus the characters the
//!   active [`KeybindingMode`] reserves for cursor movement.
//! - **The walk.** A [`Session`] consumes one [`KeyEvent`] at a time,
//!   stepping through the mode's address tree and reporting a
//!   [`KeyOutcome`]: selection the instant a leaf is reached, invalid keys,
//!   progress, or passthrough for keys the session does not own.
//!
//! One session exists per navigation context (typically one per surface).
//! Sessions are plain values driven synchronously by the host's event loop;
//! replacing the mode discards any partial keystroke state in the same call,
//! so a keystroke can never observe a half-built tree.
//!
//! # Example
//!
//! ```rust
//! use jumpcue_session::{
//!     GridJump, JumpMode, KeyEvent, KeyOutcome, KeybindingMode, Session, DEFAULT_TIERS,
//! };
//! use kurbo::{Point, Size};
//!
//! // Partition a 120x120 surface into four 60x60 cells and address them.
//! let jump = GridJump::new(
//!     Size::new(120.0, 120.0),
//!     Size::new(60.0, 60.0),
//!     Point::ZERO,
//!     KeybindingMode::Emacs,
//!     &DEFAULT_TIERS,
//! );
//! assert_eq!(jump.grid().labels(), ["a", "s", "d", "f"]);
//!
//! let mut session = Session::new(JumpMode::Grid(jump), KeybindingMode::Emacs);
//! match session.handle_key(&KeyEvent::new('s')) {
//!     KeyOutcome::Selected(rect) => assert_eq!(rect.x0, 60.0),
//!     other => panic!("expected a selection, got {other:?}"),
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod element;
mod keys;
mod label;
mod session;

pub use element::{ElementKind, UiElement};
pub use keys::{
    AlphabetTiers, KeyEvent, KeybindingMode, Modifiers, DEFAULT_TIERS, RESERVED_CHARACTERS,
    is_reserved, select_alphabet,
};
pub use label::{LabelEmphasis, label_emphasis};
pub use session::{
    CancelOutcome, ElementJump, GridJump, JumpMode, KeyOutcome, Session,
    DEFAULT_TARGET_CELL_SIZE, MAX_TARGET_CELL_SIZE, MIN_TARGET_CELL_SIZE,
    clamp_target_cell_size,
};
