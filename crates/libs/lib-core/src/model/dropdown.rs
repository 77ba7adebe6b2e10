//! Open/closed state of the asset picker.

/// Single asset-picker dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger click.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A pointer press somewhere on the page. Presses outside the picker close it.
    ///
    /// Returns `true` when this press closed the dropdown.
    pub fn pointer_down(&mut self, inside: bool) -> bool {
        if self.open && !inside {
            self.open = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_outside_press() {
        let mut dropdown = Dropdown::default();
        assert!(!dropdown.is_open());

        dropdown.toggle();
        assert!(dropdown.is_open());

        assert!(!dropdown.pointer_down(true));
        assert!(dropdown.is_open());

        assert!(dropdown.pointer_down(false));
        assert!(!dropdown.is_open());

        assert!(!dropdown.pointer_down(false));
    }

    #[test]
    fn test_toggle_twice_closes() {
        let mut dropdown = Dropdown::default();
        dropdown.toggle();
        dropdown.toggle();
        assert!(!dropdown.is_open());
    }
}
