// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key events, keybinding modes, and tiered alphabet selection.

use alloc::vec::Vec;

use hashbrown::HashSet;

bitflags::bitflags! {
    /// Keyboard modifier state accompanying a key event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT   = 0b0000_0001;
        /// Control key.
        const CONTROL = 0b0000_0010;
        /// Option/Alt key.
        const OPTION  = 0b0000_0100;
        /// Command/Super key.
        const COMMAND = 0b0000_1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single keystroke: one character plus the modifier state it was typed
/// with.
///
/// Hosts translate their platform key events into this form; dead keys,
/// arrows, and other non-character keys are a host concern and never reach
/// the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The typed character, ignoring modifiers.
    pub character: char,
    /// Modifiers held while typing.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A keystroke with no modifiers held.
    pub const fn new(character: char) -> Self {
        Self {
            character,
            modifiers: Modifiers::empty(),
        }
    }

    /// A keystroke with the given modifiers held.
    pub const fn with_modifiers(character: char, modifiers: Modifiers) -> Self {
        Self {
            character,
            modifiers,
        }
    }
}

/// The active cursor-movement keybinding scheme.
///
/// Movement bindings compete with address characters for the same keys, so
/// the scheme determines which alphabetic characters are off limits for
/// addresses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeybindingMode {
    /// Emacs (and system default) movement bindings. All movement chords use
    /// modifiers, so no plain characters are reserved.
    #[default]
    Emacs,
    /// Vi-style movement bindings, which claim the home-row motion keys.
    Vi,
}

impl KeybindingMode {
    /// Alphabetic characters this scheme reserves for movement, which must
    /// not appear in any address.
    pub const fn special_alphas(self) -> &'static [char] {
        match self {
            Self::Emacs => &[],
            Self::Vi => &['j', 'k', 'h', 'l'],
        }
    }

    /// Whether `character` conflicts with this scheme's movement bindings.
    pub fn is_special(self, character: char) -> bool {
        self.special_alphas().contains(&character)
    }
}

/// Characters bound to pointer commands (click, drag, modifier clicks),
/// reserved in every mode.
pub const RESERVED_CHARACTERS: &[char] = &['\r', '[', ']', '=', '\\'];

/// Whether `character` is reserved for a pointer command.
pub fn is_reserved(character: char) -> bool {
    RESERVED_CHARACTERS.contains(&character)
}

/// A tiered table mapping candidate counts to alphabet sizes.
///
/// Larger candidate sets get wider alphabets to keep addresses short; small
/// sets stick to the most comfortable keys. The exact thresholds are tuning
/// constants, not a contract: only the qualitative goal (bounded address
/// length as the candidate count grows) is load-bearing.
#[derive(Copy, Clone, Debug)]
pub struct AlphabetTiers {
    /// Character groups in decreasing order of typing comfort. A tier uses a
    /// prefix of this list.
    pub groups: &'static [&'static [char]],
    /// `(limit, count)` pairs, in increasing `limit` order: candidate counts
    /// below `limit` use the first `count` groups. Counts beyond every limit
    /// use all groups.
    pub tiers: &'static [(usize, usize)],
}

/// The default tier table: home row first, reaching across the keyboard as
/// candidate counts grow into the hundreds.
pub const DEFAULT_TIERS: AlphabetTiers = AlphabetTiers {
    groups: &[
        &['a', 's', 'd', 'f', 'j', 'k', 'l'],
        &['g', 'h'],
        &['q', 'w', 'e', 'r', 'u', 'i', 'o', 'p'],
        &['t', 'y'],
        &['z', 'x', 'c', 'v', 'b', 'n', 'm'],
    ],
    tiers: &[(80, 2), (200, 3), (1400, 4)],
};

impl Default for AlphabetTiers {
    fn default() -> Self {
        DEFAULT_TIERS
    }
}

impl AlphabetTiers {
    fn groups_for(&self, candidate_count: usize) -> usize {
        for &(limit, count) in self.tiers {
            if candidate_count < limit {
                return count.min(self.groups.len());
            }
        }
        self.groups.len()
    }
}

/// Select the ordered, duplicate-free alphabet for addressing
/// `candidate_count` candidates.
///
/// Picks the tier matching the count, then removes the characters the
/// keybinding scheme reserves for movement so an in-progress address can
/// never collide with a movement key.
pub fn select_alphabet(
    candidate_count: usize,
    keybindings: KeybindingMode,
    tiers: &AlphabetTiers,
) -> Vec<char> {
    let excluded: HashSet<char> = keybindings.special_alphas().iter().copied().collect();

    let alphabet: Vec<char> = tiers.groups[..tiers.groups_for(candidate_count)]
        .iter()
        .flat_map(|group| group.iter().copied())
        .filter(|character| !excluded.contains(character))
        .collect();

    debug_assert!(
        alphabet.iter().collect::<HashSet<_>>().len() == alphabet.len(),
        "alphabet tiers must not repeat characters across groups"
    );

    alphabet
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn tier_boundaries() {
        let len = |count| select_alphabet(count, KeybindingMode::Emacs, &DEFAULT_TIERS).len();

        assert_eq!(len(0), 9);
        assert_eq!(len(79), 9);
        assert_eq!(len(80), 17);
        assert_eq!(len(199), 17);
        assert_eq!(len(200), 19);
        assert_eq!(len(1399), 19);
        assert_eq!(len(1400), 26);
        assert_eq!(len(10_000), 26);
    }

    #[test]
    fn small_counts_use_the_home_row() {
        assert_eq!(
            select_alphabet(10, KeybindingMode::Emacs, &DEFAULT_TIERS),
            vec!['a', 's', 'd', 'f', 'j', 'k', 'l', 'g', 'h']
        );
    }

    #[test]
    fn vi_mode_excludes_motion_keys() {
        let alphabet = select_alphabet(10, KeybindingMode::Vi, &DEFAULT_TIERS);
        assert_eq!(alphabet, vec!['a', 's', 'd', 'f', 'g']);

        for count in [10, 100, 300, 2000] {
            let alphabet = select_alphabet(count, KeybindingMode::Vi, &DEFAULT_TIERS);
            for special in KeybindingMode::Vi.special_alphas() {
                assert!(!alphabet.contains(special), "{special} must be excluded");
            }
        }
    }

    #[test]
    fn alphabets_are_duplicate_free() {
        for count in [5, 80, 200, 1400] {
            let alphabet = select_alphabet(count, KeybindingMode::Emacs, &DEFAULT_TIERS);
            let unique: HashSet<char> = alphabet.iter().copied().collect();
            assert_eq!(unique.len(), alphabet.len());
        }
    }

    #[test]
    fn reserved_characters_cover_pointer_commands() {
        assert!(is_reserved('\r'));
        assert!(is_reserved('['));
        assert!(is_reserved(']'));
        assert!(is_reserved('='));
        assert!(is_reserved('\\'));
        assert!(!is_reserved('a'));
    }

    #[test]
    fn modifier_flags_compose() {
        let both = Modifiers::SHIFT | Modifiers::CONTROL;
        assert!(both.contains(Modifiers::SHIFT));
        assert!(!both.contains(Modifiers::COMMAND));
        assert!(Modifiers::default().is_empty());
    }
}
