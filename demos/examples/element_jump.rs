// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element navigation end to end: thin out a crowded set of detected UI
//! elements, address the survivors, and select one.
//!
//! Run:
//! - `cargo run -p jumpcue_demos --example element_jump`

use jumpcue_crowding::{CrowdingParams, reduce_crowding};
use jumpcue_session::{
    DEFAULT_TIERS, ElementJump, ElementKind, JumpMode, KeyEvent, KeyOutcome, KeybindingMode,
    Session, UiElement,
};
use kurbo::Rect;

fn main() {
    // A toolbar whose buttons sit flush against each other, a link nested
    // inside one of them, and a lone button elsewhere. An accessibility
    // scanner would hand us something like this.
    let detected = vec![
        UiElement::new(ElementKind::Button, Rect::new(0.0, 0.0, 80.0, 24.0)),
        UiElement::new(ElementKind::Link, Rect::new(8.0, 4.0, 40.0, 20.0)),
        UiElement::new(ElementKind::Button, Rect::new(80.0, 0.0, 160.0, 24.0)),
        UiElement::new(ElementKind::Button, Rect::new(80.0, 0.0, 160.0, 24.0)),
        UiElement::new(ElementKind::Button, Rect::new(300.0, 400.0, 420.0, 440.0)),
    ];

    let crowding = ElementJump::DEFAULT_CROWDING;
    let survivors = reduce_crowding(detected.clone(), &crowding);
    println!(
        "{} detected elements, {} after crowding reduction",
        detected.len(),
        survivors.len(),
    );

    let jump = ElementJump::new(detected, &crowding, KeybindingMode::Emacs, &DEFAULT_TIERS);
    for (element, sequence) in jump.elements() {
        println!("  {sequence:>3}  {:?} at {:?}", element.kind, element.frame);
    }

    // Type the last survivor's address.
    let (element, address) = jump
        .elements()
        .last()
        .expect("at least one element survives")
        .clone();

    let mut session = Session::new(JumpMode::Element(jump), KeybindingMode::Emacs);
    for character in address.chars() {
        if let KeyOutcome::Selected(rect) = session.handle_key(&KeyEvent::new(character)) {
            assert_eq!(rect, element.frame);
            println!("selected {:?} at {rect:?}", element.kind);
        }
    }

    // The parameters are tunable: generous horizontal padding also merges
    // buttons separated by a gap.
    let spaced = vec![
        UiElement::new(ElementKind::Button, Rect::new(0.0, 0.0, 80.0, 24.0)),
        UiElement::new(ElementKind::Button, Rect::new(120.0, 0.0, 210.0, 24.0)),
    ];
    let aggressive = CrowdingParams {
        intersection_threshold: 0.05,
        padding_x: 50.0,
        padding_y: 10.0,
    };
    println!(
        "aggressive padding keeps {} of 2 spaced buttons",
        reduce_crowding(spaced, &aggressive).len(),
    );
}
