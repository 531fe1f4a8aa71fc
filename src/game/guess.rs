//! In-progress guess text with automatic spaces

use crate::core::TargetWord;

/// The guess being typed for the active row
///
/// Structural spaces of the target are inserted automatically: as soon as the
/// guess reaches a space position it gains the space, and deleting right after
/// such a space removes the space together with the letter before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    chars: Vec<char>,
}

impl GuessBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Append a letter, filling pending spaces first
    ///
    /// Returns `false` (and leaves the buffer untouched) once the guess is as
    /// long as the target.
    pub fn push_letter(&mut self, letter: char, target: &TargetWord) -> bool {
        if self.chars.len() >= target.len() {
            return false;
        }

        self.fill_spaces(target);
        if self.chars.len() >= target.len() {
            return false;
        }

        self.chars.push(letter.to_ascii_uppercase());
        self.fill_spaces(target);
        true
    }

    /// Remove the last letter, taking a trailing automatic space with it
    ///
    /// Returns `false` when there is nothing to delete.
    pub fn delete(&mut self, target: &TargetWord) -> bool {
        let Some(last) = self.chars.len().checked_sub(1) else {
            return false;
        };

        if target.is_space(last) {
            self.chars.truncate(last.saturating_sub(1));
        } else {
            self.chars.pop();
        }
        true
    }

    /// Number of typed characters, excluding automatic spaces
    #[must_use]
    pub fn effective_len(&self, target: &TargetWord) -> usize {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, &c)| !(c == ' ' && target.is_space(i)))
            .count()
    }

    /// Raw length, automatic spaces included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at a column, if typed
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    fn fill_spaces(&mut self, target: &TargetWord) {
        while self.chars.len() < target.len() && target.is_space(self.chars.len()) {
            self.chars.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_all(buffer: &mut GuessBuffer, letters: &str, target: &TargetWord) {
        for letter in letters.chars() {
            buffer.push_letter(letter, target);
        }
    }

    #[test]
    fn push_uppercases_letters() {
        let target = TargetWord::new("sipu").unwrap();
        let mut buffer = GuessBuffer::new();
        type_all(&mut buffer, "si", &target);
        assert_eq!(buffer.text(), "SI");
    }

    #[test]
    fn push_stops_at_target_length() {
        let target = TargetWord::new("mbi").unwrap();
        let mut buffer = GuessBuffer::new();
        type_all(&mut buffer, "mbi", &target);
        assert!(!buffer.push_letter('x', &target));
        assert_eq!(buffer.text(), "MBI");
    }

    #[test]
    fn reaching_space_position_gains_space() {
        let target = TargetWord::new("he nitis").unwrap();
        let mut buffer = GuessBuffer::new();
        type_all(&mut buffer, "he", &target);
        assert_eq!(buffer.text(), "HE ");
        assert_eq!(buffer.effective_len(&target), 2);

        buffer.push_letter('n', &target);
        assert_eq!(buffer.text(), "HE N");
        assert_eq!(buffer.effective_len(&target), 3);
    }

    #[test]
    fn consecutive_spaces_are_all_filled() {
        let target = TargetWord::new("a  b").unwrap();
        let mut buffer = GuessBuffer::new();
        buffer.push_letter('a', &target);
        assert_eq!(buffer.text(), "A  ");
        buffer.push_letter('b', &target);
        assert_eq!(buffer.text(), "A  B");
        assert_eq!(buffer.effective_len(&target), 2);
    }

    #[test]
    fn delete_after_space_removes_space_and_letter() {
        let target = TargetWord::new("he nitis").unwrap();
        let mut buffer = GuessBuffer::new();
        type_all(&mut buffer, "he", &target);
        assert_eq!(buffer.len(), 3);

        assert!(buffer.delete(&target));
        assert_eq!(buffer.text(), "H");

        assert!(buffer.delete(&target));
        assert!(buffer.is_empty());
    }

    #[test]
    fn delete_removes_exactly_one_elsewhere() {
        let target = TargetWord::new("he nitis").unwrap();
        let mut buffer = GuessBuffer::new();
        type_all(&mut buffer, "heni", &target);
        assert_eq!(buffer.text(), "HE NI");

        buffer.delete(&target);
        assert_eq!(buffer.text(), "HE N");
        // The space is now the second-to-last character; only N goes
        buffer.delete(&target);
        assert_eq!(buffer.text(), "HE ");
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let target = TargetWord::new("sipu").unwrap();
        let mut buffer = GuessBuffer::new();
        assert!(!buffer.delete(&target));
        assert!(buffer.is_empty());
    }

    #[test]
    fn retyping_after_boundary_delete_restores_space() {
        let target = TargetWord::new("lapi knewel").unwrap();
        let mut buffer = GuessBuffer::new();
        type_all(&mut buffer, "lapi", &target);
        buffer.delete(&target);
        assert_eq!(buffer.text(), "LAP");
        buffer.push_letter('i', &target);
        assert_eq!(buffer.text(), "LAPI ");
    }
}
