/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

/// One inline style assignment on a hamburger bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanStyle {
    pub property: &'static str,
    pub value: &'static str,
}

const OPEN_SPANS: [SpanStyle; 3] = [
    SpanStyle {
        property: "transform",
        value: "rotate(45deg) translate(7px, 7px)",
    },
    SpanStyle {
        property: "opacity",
        value: "0",
    },
    SpanStyle {
        property: "transform",
        value: "rotate(-45deg) translate(7px, -7px)",
    },
];

const CLOSED_SPANS: [SpanStyle; 3] = [
    SpanStyle {
        property: "transform",
        value: "none",
    },
    SpanStyle {
        property: "opacity",
        value: "1",
    },
    SpanStyle {
        property: "transform",
        value: "none",
    },
];

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Styles for the three hamburger bars; open draws an "X".
    pub fn hamburger_spans(self) -> &'static [SpanStyle; 3] {
        if self.open {
            &OPEN_SPANS
        } else {
            &CLOSED_SPANS
        }
    }
}
