use crate::{
    classify::{Geometric, PoseClassifier},
    snapshot::Snapshot,
};
use tracing::{debug, info, trace};

/// The pose the user is expected to reach next.
///
/// Finishing the last pose is not a state of its own: it counts a repetition
/// and returns to [`ExerciseState::Rest`] in the same step, reported through
/// [`Step::completed`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseState {
    Rest,
    ArmsOut,
    ArmsOverhead,
}

impl Default for ExerciseState {
    fn default() -> Self {
        Self::Rest
    }
}

impl ExerciseState {
    pub const ALL: [ExerciseState; 3] = [Self::Rest, Self::ArmsOut, Self::ArmsOverhead];

    /// Position of the movement within the routine, as shown to the user.
    pub fn index(self) -> u8 {
        match self {
            Self::Rest => 0,
            Self::ArmsOut => 1,
            Self::ArmsOverhead => 2,
        }
    }

    /// The state that follows once this pose is held, and whether that
    /// closes a cycle.
    pub fn advance(self) -> (Self, bool) {
        match self {
            Self::Rest => (Self::ArmsOut, false),
            Self::ArmsOut => (Self::ArmsOverhead, false),
            Self::ArmsOverhead => (Self::Rest, true),
        }
    }
}

/// Outcome of feeding one frame to a [`Session`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: ExerciseState,
    pub repetitions: u32,
    /// True only on the frame that finished a cycle.
    pub completed: bool,
}

/// Progress of one user through the routine.
#[derive(Debug, Clone)]
pub struct Session<C = Geometric> {
    classifier: C,
    state: ExerciseState,
    repetitions: u32,
}

impl Default for Session<Geometric> {
    fn default() -> Self {
        Self::new(Geometric::default())
    }
}

impl<C> Session<C>
where
    C: PoseClassifier,
{
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            state: ExerciseState::default(),
            repetitions: 0,
        }
    }

    pub fn state(&self) -> ExerciseState {
        self.state
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    fn hold(&self) -> Step {
        Step {
            state: self.state,
            repetitions: self.repetitions,
            completed: false,
        }
    }

    /// Advance the routine with one frame.
    ///
    /// Only the pose awaited in the current state is checked, and at most one
    /// transition happens. `None`, or a snapshot without any tracked joint,
    /// leaves the session untouched.
    pub fn step(&mut self, snapshot: Option<&Snapshot>) -> Step {
        let snapshot = match snapshot {
            Some(snapshot) if snapshot.has_body() => snapshot,
            _ => {
                trace!(state = ?self.state, "no tracked body, holding state");
                return self.hold();
            }
        };

        if !self.classifier.matches(self.state, snapshot) {
            return self.hold();
        }

        let (next, completed) = self.state.advance();
        debug!(from = ?self.state, to = ?next, "pose reached");
        self.state = next;

        if completed {
            self.repetitions = self.repetitions.saturating_add(1);
            info!(repetitions = self.repetitions, "routine completed");
        }

        Step {
            state: self.state,
            repetitions: self.repetitions,
            completed,
        }
    }
}
