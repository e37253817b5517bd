use std::fmt;

/// Where a release run currently is.
///
/// Runs move strictly forward through
/// `ResolvingContainer → Building → Pushing → Patching → Done`;
/// any non-terminal stage may instead drop into `Failed`. Neither `Done`
/// nor `Failed` is ever left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    ResolvingContainer,
    Building,
    Pushing,
    Patching,
    Done,
    Failed,
}

impl Stage {
    /// Successor on the success path.
    pub fn next(self) -> Stage {
        match self {
            Stage::ResolvingContainer => Stage::Building,
            Stage::Building => Stage::Pushing,
            Stage::Pushing => Stage::Patching,
            Stage::Patching => Stage::Done,
            Stage::Done => Stage::Done,
            Stage::Failed => Stage::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Done | Stage::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::ResolvingContainer => "resolving container",
            Stage::Building => "building",
            Stage::Pushing => "pushing",
            Stage::Patching => "patching",
            Stage::Done => "done",
            Stage::Failed => "failed",
        })
    }
}

/// Drives [`Stage`] transitions and reports every stage entered.
pub(crate) struct StageTracker<F: FnMut(Stage)> {
    current: Stage,
    on_enter: F,
}

impl<F: FnMut(Stage)> StageTracker<F> {
    pub(crate) fn start(mut on_enter: F) -> Self {
        on_enter(Stage::ResolvingContainer);
        Self {
            current: Stage::ResolvingContainer,
            on_enter,
        }
    }

    pub(crate) fn current(&self) -> Stage {
        self.current
    }

    pub(crate) fn advance(&mut self) {
        if self.current.is_terminal() {
            return;
        }
        self.current = self.current.next();
        tracing::debug!(stage = %self.current, "release stage");
        (self.on_enter)(self.current);
    }

    pub(crate) fn fail(&mut self) {
        if self.current.is_terminal() {
            return;
        }
        self.current = Stage::Failed;
        (self.on_enter)(Stage::Failed);
    }
}
