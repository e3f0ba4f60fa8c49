// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid navigation end to end: partition a surface, address the cells, and
//! drive a session keystroke by keystroke.
//!
//! Run:
//! - `cargo run -p jumpcue_demos --example grid_jump`

use jumpcue_session::{
    DEFAULT_TARGET_CELL_SIZE, DEFAULT_TIERS, GridJump, JumpMode, KeyEvent, KeyOutcome,
    KeybindingMode, LabelEmphasis, Session, label_emphasis,
};
use kurbo::{Point, Size};

fn main() {
    // Partition a laptop-sized surface into ~60x60 cells.
    let surface = Size::new(1440.0, 900.0);
    let jump = GridJump::new(
        surface,
        DEFAULT_TARGET_CELL_SIZE,
        Point::ZERO,
        KeybindingMode::Emacs,
        &DEFAULT_TIERS,
    );

    let grid = jump.grid();
    println!(
        "{}x{} grid ({} cells), cell size {:.1}x{:.1}",
        grid.num_columns(),
        grid.num_rows(),
        grid.num_cells(),
        grid.cell_width(),
        grid.cell_height(),
    );

    // Pick a cell in the middle of the surface and read its address off the
    // grid.
    let target_index = grid.index(grid.num_columns() / 2, grid.num_rows() / 2);
    let address: String = grid.label(target_index).into();
    println!("navigating to cell {target_index} via {address:?}");

    let mut session = Session::new(JumpMode::Grid(jump), KeybindingMode::Emacs);

    for character in address.chars() {
        match session.handle_key(&KeyEvent::new(character)) {
            KeyOutcome::Advanced => {
                let prefix = session.current_sequence();
                let JumpMode::Grid(jump) = session.mode() else {
                    unreachable!()
                };
                let reachable = jump
                    .grid()
                    .labels()
                    .iter()
                    .filter(|label| {
                        matches!(label_emphasis(label, prefix), LabelEmphasis::ActivePrefix(_))
                    })
                    .count();
                println!("typed {prefix:?}; {reachable} cells still reachable");
            }
            KeyOutcome::Selected(rect) => {
                println!(
                    "selected {rect:?}; a pointer actuator would move to {:?}",
                    rect.center(),
                );
            }
            outcome => println!("unexpected outcome: {outcome:?}"),
        }
    }
}
