//! Open/closed state of the dropdown.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    /// Any interaction with the input surface opens the dropdown.
    pub fn on_input(&mut self) {
        *self = Visibility::Open;
    }

    /// A pointer press outside the control closes it.
    pub fn on_outside_pointer(&mut self) {
        *self = Visibility::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        let mut v = Visibility::default();
        assert!(!v.is_open());
        v.on_outside_pointer();
        assert_eq!(v, Visibility::Closed);
        v.on_input();
        v.on_input();
        assert!(v.is_open());
        v.on_outside_pointer();
        assert_eq!(v, Visibility::Closed);
    }
}
