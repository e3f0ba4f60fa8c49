// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jump modes and the keystroke-walk state machine.

use alloc::string::String;
use alloc::vec::Vec;

use jumpcue_crowding::{CrowdingParams, reduce_crowding};
use jumpcue_grid::Grid;
use jumpcue_tree::{NodeId, Tree};
use kurbo::{Point, Rect, Size};

use crate::element::UiElement;
use crate::keys::{AlphabetTiers, KeyEvent, KeybindingMode, is_reserved, select_alphabet};

/// Target cell size used when the host expresses no preference.
pub const DEFAULT_TARGET_CELL_SIZE: Size = Size::new(60.0, 60.0);

/// Smallest target cell size hosts may request.
pub const MIN_TARGET_CELL_SIZE: Size = Size::new(45.0, 45.0);

/// Largest target cell size hosts may request.
pub const MAX_TARGET_CELL_SIZE: Size = Size::new(90.0, 90.0);

/// Clamp a requested target cell size into the supported range.
///
/// Cells below the minimum produce unreadable labels; cells above the
/// maximum waste keystrokes on coarse jumps.
pub fn clamp_target_cell_size(target: Size) -> Size {
    Size::new(
        target
            .width
            .clamp(MIN_TARGET_CELL_SIZE.width, MAX_TARGET_CELL_SIZE.width),
        target
            .height
            .clamp(MIN_TARGET_CELL_SIZE.height, MAX_TARGET_CELL_SIZE.height),
    )
}

/// Grid-based navigation: the surface partitioned into addressed cells.
#[derive(Clone, Debug)]
pub struct GridJump {
    grid: Grid,
    tree: Tree<Rect>,
}

impl GridJump {
    /// Partition `surface_size` into cells of roughly `target_cell_size` and
    /// address every cell.
    ///
    /// `surface_origin` translates cell rectangles into the shared candidate
    /// coordinate space, so a session can coexist with sessions on other
    /// surfaces whose origins differ (one session per surface; see the crate
    /// docs). The grid's labels are replaced with the assigned sequences.
    pub fn new(
        surface_size: Size,
        target_cell_size: Size,
        surface_origin: Point,
        keybindings: KeybindingMode,
        tiers: &AlphabetTiers,
    ) -> Self {
        let mut grid = Grid::with_target_cell_size(surface_size, target_cell_size);

        let offset = surface_origin.to_vec2();
        let candidates: Vec<Rect> = grid.cells().iter().map(|&cell| cell + offset).collect();

        let keys = select_alphabet(candidates.len(), keybindings, tiers);
        let tree = Tree::build(candidates, &keys);

        // One leaf per cell; `set_labels` re-checks the count.
        grid.set_labels(tree.sequences());

        Self { grid, tree }
    }

    /// The partitioned grid, labels included.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The address tree over the cell rectangles.
    pub const fn tree(&self) -> &Tree<Rect> {
        &self.tree
    }
}

/// Element-based navigation: detected UI elements, crowding-reduced and
/// addressed.
#[derive(Clone, Debug)]
pub struct ElementJump {
    elements: Vec<(UiElement, String)>,
    tree: Tree<Rect>,
}

impl ElementJump {
    /// Crowding parameters tuned for element labels. Labels are stacked
    /// vertically, so horizontal congestion is less of an issue in practice
    /// and only vertical padding is applied.
    pub const DEFAULT_CROWDING: CrowdingParams = CrowdingParams {
        intersection_threshold: 0.1,
        padding_x: 0.0,
        padding_y: 10.0,
    };

    /// Reduce crowding among `elements`, then address the survivors.
    ///
    /// Survivors keep their input order and are paired with their assigned
    /// sequences.
    pub fn new(
        elements: Vec<UiElement>,
        crowding: &CrowdingParams,
        keybindings: KeybindingMode,
        tiers: &AlphabetTiers,
    ) -> Self {
        let kept = reduce_crowding(elements, crowding);

        let candidates: Vec<Rect> = kept.iter().map(|element| element.frame).collect();
        let keys = select_alphabet(candidates.len(), keybindings, tiers);
        let tree = Tree::build(candidates, &keys);

        // With no surviving elements the tree holds a single valueless
        // sentinel leaf; zipping against the empty survivor list correctly
        // yields no pairs.
        let elements: Vec<(UiElement, String)> =
            kept.into_iter().zip(tree.sequences()).collect();

        Self { elements, tree }
    }

    /// The surviving elements, each paired with its address.
    pub fn elements(&self) -> &[(UiElement, String)] {
        &self.elements
    }

    /// The address tree over the surviving elements' frames.
    pub const fn tree(&self) -> &Tree<Rect> {
        &self.tree
    }
}

/// The active navigation mode, carrying the mode-specific candidate data.
#[derive(Clone, Debug)]
pub enum JumpMode {
    /// Grid-based navigation.
    Grid(GridJump),
    /// Element-based navigation.
    Element(ElementJump),
    /// Freeform usage: no addressing; every key passes through to the host.
    Freestyle,
}

impl JumpMode {
    /// The mode's address tree, if the mode has one.
    pub const fn tree(&self) -> Option<&Tree<Rect>> {
        match self {
            Self::Grid(jump) => Some(jump.tree()),
            Self::Element(jump) => Some(jump.tree()),
            Self::Freestyle => None,
        }
    }
}

/// Outcome of feeding one keystroke to a [`Session`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum KeyOutcome {
    /// The keystroke completed an address; the candidate's rectangle is the
    /// selection. The session is Idle again.
    Selected(Rect),
    /// The keystroke extended the walk to an internal node.
    Advanced,
    /// The keystroke matched no branch from the current node. The walk state
    /// is unchanged; the host should give brief feedback.
    Invalid,
    /// The session does not own this keystroke (no tree in this mode, a
    /// modifier was held, or the character is reserved); the host handles it.
    Passthrough,
}

/// Outcome of cancelling a [`Session`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    /// A walk was in progress and has been abandoned.
    Cancelled,
    /// Nothing was in progress; the host should dismiss the navigation
    /// surface.
    Dismiss,
}

/// The mutable walk state for one navigation context.
///
/// `None` as the current node means Idle; otherwise the session is Walking
/// at an internal node of the mode's tree. The session owns its mode (and
/// thereby the tree), so swapping the mode and resetting the walk state is
/// one atomic operation from the host's point of view.
#[derive(Clone, Debug)]
pub struct Session {
    mode: JumpMode,
    keybindings: KeybindingMode,
    current: Option<NodeId>,
    sequence: String,
}

impl Session {
    /// Create an Idle session in the given mode.
    pub const fn new(mode: JumpMode, keybindings: KeybindingMode) -> Self {
        Self {
            mode,
            keybindings,
            current: None,
            sequence: String::new(),
        }
    }

    /// The active mode.
    pub const fn mode(&self) -> &JumpMode {
        &self.mode
    }

    /// The active keybinding scheme.
    pub const fn keybindings(&self) -> KeybindingMode {
        self.keybindings
    }

    /// Replace the mode (typically after candidates changed) and discard any
    /// partial keystroke state in the same step.
    pub fn set_mode(&mut self, mode: JumpMode) {
        self.mode = mode;
        self.reset();
    }

    /// Unconditionally return to Idle.
    ///
    /// Hosts call this when the tree is rebuilt, the mode changes, or the
    /// surface loses focus.
    pub fn reset(&mut self) {
        self.current = None;
        self.sequence.clear();
    }

    /// Whether a walk is in progress.
    pub const fn is_walking(&self) -> bool {
        self.current.is_some()
    }

    /// The characters entered so far in the current walk.
    pub fn current_sequence(&self) -> &str {
        &self.sequence
    }

    /// Feed one keystroke to the session.
    ///
    /// Keys the session does not own (treeless mode, held modifiers,
    /// reserved pointer-command characters, movement keys of the active
    /// keybinding scheme) come back as [`KeyOutcome::Passthrough`] without
    /// touching the walk state.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        let Some(tree) = self.mode.tree() else {
            return KeyOutcome::Passthrough;
        };

        if !event.modifiers.is_empty()
            || is_reserved(event.character)
            || self.keybindings.is_special(event.character)
        {
            return KeyOutcome::Passthrough;
        }

        let node = self.current.unwrap_or(tree.root());
        match tree.step(node, event.character) {
            None => KeyOutcome::Invalid,
            Some(next) if tree.is_leaf(next) => {
                // Every reachable leaf carries a value: the sentinel leaf of
                // an empty tree is the root itself, and `step` never returns
                // the root.
                let rect = *tree
                    .value(next)
                    .expect("session invariant violated: reachable leaf without value");
                self.reset();
                KeyOutcome::Selected(rect)
            }
            Some(next) => {
                self.current = Some(next);
                self.sequence.push(event.character);
                KeyOutcome::Advanced
            }
        }
    }

    /// Cancel the current interaction.
    ///
    /// Abandons the walk if one is in progress; otherwise asks the host to
    /// dismiss the navigation surface entirely.
    pub fn cancel(&mut self) -> CancelOutcome {
        if self.current.is_some() {
            self.reset();
            CancelOutcome::Cancelled
        } else {
            CancelOutcome::Dismiss
        }
    }
}
