/// The mutually exclusive top-level view regions. Exactly one is active
/// at any time; there is no history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Profile,
    Recommendations,
    Visualization,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Profile, Panel::Recommendations, Panel::Visualization];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Profile => "Your Profile",
            Panel::Recommendations => "Recommendations",
            Panel::Visualization => "Visualization",
        }
    }
}
