//! Outcome of a single transition attempt.

/// Result of a transition that found a matching rule.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeResult<S, O> {
    /// The current state moved to `to`.
    Changed { from: S, to: S, output: O },

    /// An abort guard vetoed the rule; the current state did not change.
    /// `to` and `output` describe the rule that would have fired.
    Aborted { from: S, to: S, output: O },
}

impl<S, O> ChangeResult<S, O> {
    /// Output of the matched rule, whether or not it was aborted.
    pub fn output(&self) -> &O {
        match self {
            Self::Changed { output, .. } | Self::Aborted { output, .. } => output,
        }
    }

    pub fn into_output(self) -> O {
        match self {
            Self::Changed { output, .. } | Self::Aborted { output, .. } => output,
        }
    }

    /// Source state of the attempt.
    pub fn from(&self) -> &S {
        match self {
            Self::Changed { from, .. } | Self::Aborted { from, .. } => from,
        }
    }

    /// Destination of the matched rule.
    pub fn target(&self) -> &S {
        match self {
            Self::Changed { to, .. } | Self::Aborted { to, .. } => to,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }
}
