use super::DependencyNode;

/// Detail popup for a single selected package
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    #[default]
    Closed,
    Open(Box<DependencyNode>),
}

/// User interactions the popup reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum PopupEvent {
    NodeClicked(DependencyNode),
    BackdropClicked,
    CloseClicked,
    AnalyzeClicked,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupEffect {
    None,
    /// Clear the displayed graph, then search for `query`
    Analyze { query: String },
}

impl PopupState {
    /// Applies `event` and returns the next state with the effect to run
    ///
    /// `Analyze` only has an effect when a node is selected; on a closed
    /// popup every dismiss event is a no-op.
    pub fn transition(self, event: PopupEvent) -> (PopupState, PopupEffect) {
        match (self, event) {
            (_, PopupEvent::NodeClicked(node)) => {
                (PopupState::Open(Box::new(node)), PopupEffect::None)
            }
            (PopupState::Open(node), PopupEvent::AnalyzeClicked) => (
                PopupState::Closed,
                PopupEffect::Analyze { query: node.name },
            ),
            (_, PopupEvent::BackdropClicked)
            | (_, PopupEvent::CloseClicked)
            | (PopupState::Closed, PopupEvent::AnalyzeClicked) => {
                (PopupState::Closed, PopupEffect::None)
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PopupState::Open(_))
    }

    pub fn selected(&self) -> Option<&DependencyNode> {
        match self {
            PopupState::Open(node) => Some(&**node),
            PopupState::Closed => None,
        }
    }
}
