use crate::{
    classify::PoseClassifier,
    error::Error,
    feedback,
    frame::{BodyId, FrameRecord},
    joint::Vec3,
    markers::marker_points,
    projection::Projector,
    routine::{ExerciseState, Step},
    snapshot::Snapshot,
    tracker::Tracker,
};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MarkerReport {
    pub position: Vec3,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel: Option<[f32; 2]>,
}

/// Everything a renderer needs to draw one body for one frame. A report
/// without a body is the starting screen shown while nobody is in view.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FrameReport {
    pub frame: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BodyId>,
    pub state: ExerciseState,
    pub state_index: u8,
    pub repetitions: u32,
    pub completed: bool,
    pub feedback: &'static str,
    pub progress: String,
    pub markers: Vec<MarkerReport>,
}

impl FrameReport {
    pub fn new(
        frame: usize,
        body: BodyId,
        step: &Step,
        snapshot: &Snapshot,
        projector: Option<&Projector>,
    ) -> Self {
        let markers = marker_points(step, snapshot)
            .into_iter()
            .map(|position| MarkerReport {
                position,
                pixel: projector.and_then(|projector| projector.project(position)),
            })
            .collect();
        Self {
            frame,
            body: Some(body),
            state: step.state,
            state_index: step.state.index(),
            repetitions: step.repetitions,
            completed: step.completed,
            feedback: feedback::for_step(step),
            progress: feedback::progress(step),
            markers,
        }
    }

    /// Nobody has been tracked yet: no body, no markers, the starting text.
    pub fn starting(frame: usize) -> Self {
        let step = Step {
            state: ExerciseState::Rest,
            repetitions: 0,
            completed: false,
        };
        Self {
            frame,
            body: None,
            state: step.state,
            state_index: step.state.index(),
            repetitions: step.repetitions,
            completed: false,
            feedback: feedback::constants::STARTING,
            progress: feedback::progress(&step),
            markers: vec![],
        }
    }
}

/// Step every body of `record` through `tracker` and describe the result.
///
/// Bodies tracked earlier but missing from this frame are reported with
/// their held state and no markers until the tracker drops them. A frame
/// with nobody in it and no body left to report yields a single starting
/// report.
pub fn frame_reports<C>(
    tracker: &mut Tracker<C>,
    frame: usize,
    record: &FrameRecord,
    projector: Option<&Projector>,
) -> Result<Vec<FrameReport>, Error>
where
    C: PoseClassifier + Clone,
{
    let snapshots = record.snapshots()?;
    let seen = snapshots.iter().map(|&(body, _)| body).collect::<HashSet<_>>();

    let mut reports = snapshots
        .iter()
        .map(|(body, snapshot)| {
            let step = tracker.step(*body, Some(snapshot));
            FrameReport::new(frame, *body, &step, snapshot, projector)
        })
        .collect::<Vec<_>>();

    let nobody = Snapshot::new();
    for body in tracker.bodies() {
        if seen.contains(&body) {
            continue;
        }
        if let Some(step) = tracker.miss(body) {
            reports.push(FrameReport::new(frame, body, &step, &nobody, projector));
        }
    }

    if reports.is_empty() {
        reports.push(FrameReport::starting(frame));
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        classify::Geometric,
        feedback::constants,
        fixtures,
        frame::{BodyRecord, JointRecord},
        joint::{Confidence, JointId},
    };

    fn record(bodies: &[(BodyId, Snapshot)]) -> FrameRecord {
        FrameRecord {
            bodies: bodies
                .iter()
                .map(|(id, snapshot)| BodyRecord {
                    id: *id,
                    joints: JointId::all()
                        .filter_map(|joint| {
                            let sample = snapshot.get(joint);
                            if sample.is_tracked() {
                                Some(JointRecord {
                                    joint,
                                    position: [
                                        sample.position.x,
                                        sample.position.y,
                                        sample.position.z,
                                    ],
                                    confidence: Confidence::Tracked,
                                })
                            } else {
                                None
                            }
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn cycle_through_frame_records() {
        let mut tracker = Tracker::new(Geometric::default());
        let frames = [
            record(&[(4, fixtures::rest_pose())]),
            record(&[(4, fixtures::arms_out_pose())]),
            record(&[(4, fixtures::arms_overhead_pose())]),
        ];
        let last = frames
            .iter()
            .enumerate()
            .map(|(index, frame)| frame_reports(&mut tracker, index, frame, None).unwrap())
            .last()
            .unwrap();
        assert_eq!(last.len(), 1);
        assert!(last[0].completed);
        assert_eq!(last[0].state, ExerciseState::Rest);
        assert_eq!(last[0].repetitions, 1);
        assert_eq!(last[0].feedback, constants::COMPLETED);
        assert!(last[0].markers.is_empty());
    }

    #[test]
    fn empty_frame_re_emits_held_state() {
        let mut tracker = Tracker::new(Geometric::default());
        frame_reports(&mut tracker, 0, &record(&[(9, fixtures::rest_pose())]), None).unwrap();
        for frame in 1..3 {
            let reports =
                frame_reports(&mut tracker, frame, &FrameRecord::default(), None).unwrap();
            assert_eq!(reports.len(), 1);
            assert_eq!(reports[0].body, Some(9));
            assert_eq!(reports[0].state, ExerciseState::ArmsOut);
            assert_eq!(reports[0].feedback, constants::ARMS_OUT);
            assert!(reports[0].markers.is_empty());
        }
    }

    #[test]
    fn nobody_yet() {
        let mut tracker = Tracker::new(Geometric::default());
        let reports = frame_reports(&mut tracker, 0, &FrameRecord::default(), None).unwrap();
        assert_eq!(reports, vec![FrameReport::starting(0)]);
        assert_eq!(reports[0].feedback, constants::STARTING);
        assert_eq!(reports[0].progress, "Mov / Rep:\n0 / 0");
        assert!(tracker.is_empty());

        let json = serde_json::to_value(&reports[0]).unwrap();
        assert!(json.get("body").is_none());
        assert_eq!(json["feedback"], constants::STARTING);
    }

    #[test]
    fn vanished_body_is_dropped() {
        let mut tracker = Tracker::with_max_missed_frames(Geometric::default(), 2);
        frame_reports(&mut tracker, 0, &record(&[(9, fixtures::rest_pose())]), None).unwrap();
        let bodies = (1..5)
            .map(|frame| {
                frame_reports(&mut tracker, frame, &FrameRecord::default(), None).unwrap()[0].body
            })
            .collect::<Vec<_>>();
        assert_eq!(bodies, vec![Some(9), Some(9), None, None]);
        assert!(tracker.is_empty());
    }

    #[test]
    fn transient_bodies_stay_bounded() {
        let mut tracker = Tracker::with_max_missed_frames(Geometric::default(), 3);
        for frame in 0..100 {
            let frame_record = record(&[(frame as BodyId, fixtures::rest_pose())]);
            let reports = frame_reports(&mut tracker, frame, &frame_record, None).unwrap();
            assert!(reports.len() <= 4);
        }
        assert_eq!(tracker.len(), 4);
    }

    #[test]
    fn duplicate_body_is_rejected_before_stepping() {
        let mut tracker = Tracker::new(Geometric::default());
        let frame_record = record(&[(2, fixtures::rest_pose()), (2, fixtures::rest_pose())]);
        assert!(matches!(
            frame_reports(&mut tracker, 0, &frame_record, None),
            Err(Error::DuplicateBody(2))
        ));
        assert!(tracker.is_empty());
    }

    #[test]
    fn report_for_rest() {
        let step = Step {
            state: ExerciseState::Rest,
            repetitions: 0,
            completed: false,
        };
        let report = FrameReport::new(
            0,
            1,
            &step,
            &fixtures::rest_pose(),
            Some(&Projector::default()),
        );
        assert_eq!(report.feedback, constants::REST);
        assert_eq!(report.markers.len(), 4);
        assert!(report.markers.iter().all(|marker| marker.pixel.is_some()));
    }

    #[test]
    fn serializes_without_pixels() {
        let step = Step {
            state: ExerciseState::ArmsOut,
            repetitions: 2,
            completed: false,
        };
        let report = FrameReport::new(5, 1, &step, &fixtures::arms_out_pose(), None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["state"], "arms_out");
        assert_eq!(json["state_index"], 1);
        assert_eq!(json["repetitions"], 2);
        assert!(json["markers"][0].get("pixel").is_none());
    }
}
