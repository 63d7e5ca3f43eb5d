use crate::{
    classify::{Geometric, PoseClassifier},
    config::constants::MAX_MISSED_FRAMES,
    frame::BodyId,
    routine::{Session, Step},
    snapshot::Snapshot,
};
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, PoisonError},
};
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
struct Tracked<C> {
    session: Session<C>,
    missed: u32,
}

/// Independent routine sessions, one per tracked body.
///
/// A body missing from more than `max_missed_frames` consecutive frames is
/// forgotten; if it comes back it starts over at rest.
#[derive(Debug, Clone)]
pub struct Tracker<C = Geometric> {
    classifier: C,
    max_missed_frames: u32,
    sessions: HashMap<BodyId, Tracked<C>>,
}

impl<C> Tracker<C>
where
    C: PoseClassifier + Clone,
{
    pub fn new(classifier: C) -> Self {
        Self::with_max_missed_frames(classifier, MAX_MISSED_FRAMES)
    }

    pub fn with_max_missed_frames(classifier: C, max_missed_frames: u32) -> Self {
        Self {
            classifier,
            max_missed_frames,
            sessions: HashMap::new(),
        }
    }

    /// Feed one body's snapshot; a body seen for the first time starts a
    /// fresh session.
    #[instrument(name = "Tracker::step", skip(self, snapshot))]
    pub fn step(&mut self, body: BodyId, snapshot: Option<&Snapshot>) -> Step {
        let classifier = &self.classifier;
        let tracked = self.sessions.entry(body).or_insert_with(|| {
            debug!("new body in view");
            Tracked {
                session: Session::new(classifier.clone()),
                missed: 0,
            }
        });
        tracked.missed = 0;
        tracked.session.step(snapshot)
    }

    /// Note that `body` was absent from a frame. Returns the held step, or
    /// `None` when the body is unknown or has now been gone too long and was
    /// dropped.
    #[instrument(name = "Tracker::miss", skip(self))]
    pub fn miss(&mut self, body: BodyId) -> Option<Step> {
        let tracked = self.sessions.get_mut(&body)?;
        tracked.missed = tracked.missed.saturating_add(1);
        if tracked.missed > self.max_missed_frames {
            debug!(
                repetitions = tracked.session.repetitions(),
                "body left view, dropping session"
            );
            self.sessions.remove(&body);
            return None;
        }
        Some(tracked.session.step(None))
    }

    /// Feed every body of a frame. Known bodies missing from the frame keep
    /// their state and age towards eviction.
    pub fn step_frame<'a, I>(&mut self, bodies: I) -> Vec<(BodyId, Step)>
    where
        I: IntoIterator<Item = (BodyId, &'a Snapshot)>,
    {
        let steps = bodies
            .into_iter()
            .map(|(body, snapshot)| (body, self.step(body, Some(snapshot))))
            .collect::<Vec<_>>();
        let seen = steps.iter().map(|&(body, _)| body).collect::<HashSet<_>>();
        for body in self.bodies() {
            if !seen.contains(&body) {
                self.miss(body);
            }
        }
        steps
    }

    pub fn session(&self, body: BodyId) -> Option<&Session<C>> {
        self.sessions.get(&body).map(|tracked| &tracked.session)
    }

    /// Every body currently tracked, in ascending id order.
    pub fn bodies(&self) -> Vec<BodyId> {
        let mut bodies = self.sessions.keys().copied().collect::<Vec<_>>();
        bodies.sort_unstable();
        bodies
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// A session that may be fed from several threads. Each step runs under the
/// lock, so one frame is evaluated at a time.
#[derive(Debug, Clone)]
pub struct SharedSession<C = Geometric> {
    inner: Arc<Mutex<Session<C>>>,
}

impl<C> SharedSession<C>
where
    C: PoseClassifier,
{
    pub fn new(session: Session<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn step(&self, snapshot: Option<&Snapshot>) -> Step {
        // Session::step never leaves a partial update behind.
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .step(snapshot)
    }

    pub fn repetitions(&self) -> u32 {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .repetitions()
    }
}
