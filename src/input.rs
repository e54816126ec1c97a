//! Pointer device classification at the input boundary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Touch,
    Pen,
    Mouse,
    Other,
}

impl PointerKind {
    /// Map a DOM `pointerType` string.
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            "mouse" => PointerKind::Mouse,
            _ => PointerKind::Other,
        }
    }

    pub fn is_touch_like(self) -> bool {
        matches!(self, PointerKind::Touch | PointerKind::Pen)
    }

    pub fn is_accepted(self) -> bool {
        self.is_touch_like() || self == PointerKind::Mouse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_dom_pointer_types() {
        assert_eq!(PointerKind::from_dom("touch"), PointerKind::Touch);
        assert_eq!(PointerKind::from_dom("pen"), PointerKind::Pen);
        assert_eq!(PointerKind::from_dom("mouse"), PointerKind::Mouse);
        assert_eq!(PointerKind::from_dom(""), PointerKind::Other);
        assert_eq!(PointerKind::from_dom("Touch"), PointerKind::Other);
    }

    #[test]
    fn only_touch_pen_and_mouse_are_accepted() {
        assert!(PointerKind::Touch.is_accepted());
        assert!(PointerKind::Pen.is_accepted());
        assert!(PointerKind::Mouse.is_accepted());
        assert!(!PointerKind::Mouse.is_touch_like());
        assert!(!PointerKind::Other.is_accepted());
    }
}
