//! Recorded sensor frames, one JSON object per line.

use crate::{
    error::Error,
    joint::{Confidence, JointId, JointSample, Vec3, NUM_JOINTS},
    snapshot::Snapshot,
};
use std::{collections::HashSet, io::BufRead};

pub type BodyId = u32;

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct JointRecord {
    pub joint: JointId,
    pub position: [f32; 3],
    #[serde(default = "tracked")]
    pub confidence: Confidence,
}

fn tracked() -> Confidence {
    Confidence::Tracked
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BodyRecord {
    pub id: BodyId,
    #[serde(default)]
    pub joints: Vec<JointRecord>,
}

impl BodyRecord {
    pub fn to_snapshot(&self) -> Result<Snapshot, Error> {
        let mut seen = [false; NUM_JOINTS];
        let mut snapshot = Snapshot::new();
        for &JointRecord {
            joint,
            position: [x, y, z],
            confidence,
        } in &self.joints
        {
            let slot = &mut seen[joint as usize];
            if *slot {
                return Err(Error::DuplicateJoint(joint, self.id));
            }
            *slot = true;
            snapshot.set(
                joint,
                JointSample {
                    position: Vec3::new(x, y, z)?,
                    confidence,
                },
            );
        }
        Ok(snapshot)
    }
}

/// Every body the sensor saw in one frame. No bodies means nobody is in view.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FrameRecord {
    #[serde(default)]
    pub bodies: Vec<BodyRecord>,
}

impl FrameRecord {
    /// One snapshot per body. A body id may appear only once per frame.
    pub fn snapshots(&self) -> Result<Vec<(BodyId, Snapshot)>, Error> {
        let mut seen = HashSet::with_capacity(self.bodies.len());
        self.bodies
            .iter()
            .map(|body| {
                if !seen.insert(body.id) {
                    return Err(Error::DuplicateBody(body.id));
                }
                Ok((body.id, body.to_snapshot()?))
            })
            .collect()
    }
}

/// Parse frame records line by line, skipping blank lines. Line numbers in
/// errors start at one.
pub fn read_frames<R>(reader: R) -> impl Iterator<Item = Result<FrameRecord, Error>>
where
    R: BufRead,
{
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(
                serde_json::from_str(&line).map_err(|e| Error::ParseFrameRecord(e, index + 1)),
            ),
            Err(e) => Some(Err(Error::ReadFrameRecord(e))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_FRAMES: &str = r#"{"bodies":[{"id":7,"joints":[{"joint":"shoulder_left","position":[-0.15,0.5,2.0],"confidence":"tracked"},{"joint":"wrist_right","position":[0.2,0.1,2.0],"confidence":"inferred"}]}]}

{"bodies":[]}
"#;

    #[test]
    fn parses_lines() {
        let frames = read_frames(TWO_FRAMES.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(frames.len(), 2);
        assert!(frames[1].bodies.is_empty());

        let snapshots = frames[0].snapshots().unwrap();
        let (id, snapshot) = &snapshots[0];
        assert_eq!(*id, 7);
        assert_eq!(
            snapshot.position(JointId::ShoulderLeft),
            Some(Vec3::from_parts(-0.15, 0.5, 2.0))
        );
        assert_eq!(
            snapshot.get(JointId::WristRight).confidence,
            Confidence::Inferred
        );
        assert_eq!(snapshot.position(JointId::Head), None);
    }

    #[test]
    fn confidence_defaults_to_tracked() {
        let body: BodyRecord =
            serde_json::from_str(r#"{"id":1,"joints":[{"joint":"head","position":[0,1,2]}]}"#)
                .unwrap();
        assert_eq!(body.joints[0].confidence, Confidence::Tracked);
    }

    #[test]
    fn bad_line_reports_its_number() {
        let input = "{\"bodies\":[]}\n{not json}\n";
        let results = read_frames(input.as_bytes()).collect::<Vec<_>>();
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::ParseFrameRecord(_, 2))));
    }

    #[test]
    fn unknown_joint_is_an_error() {
        let input = r#"{"bodies":[{"id":1,"joints":[{"joint":"tail","position":[0,0,0]}]}]}"#;
        assert!(read_frames(input.as_bytes()).next().unwrap().is_err());
    }

    #[test]
    fn duplicate_joint() {
        let joint = JointRecord {
            joint: JointId::Head,
            position: [0.0, 1.0, 2.0],
            confidence: Confidence::Tracked,
        };
        let body = BodyRecord {
            id: 3,
            joints: vec![joint.clone(), joint],
        };
        assert!(matches!(
            body.to_snapshot(),
            Err(Error::DuplicateJoint(JointId::Head, 3))
        ));
    }

    #[test]
    fn duplicate_body() {
        let input = r#"{"bodies":[{"id":1,"joints":[{"joint":"head","position":[0,1,2]}]},{"id":1,"joints":[{"joint":"head","position":[0,1,2]}]}]}"#;
        let frame = read_frames(input.as_bytes()).next().unwrap().unwrap();
        assert!(matches!(frame.snapshots(), Err(Error::DuplicateBody(1))));
    }

    #[test]
    fn nan_position_is_an_error() {
        let body = BodyRecord {
            id: 1,
            joints: vec![JointRecord {
                joint: JointId::Head,
                position: [f32::NAN, 1.0, 2.0],
                confidence: Confidence::Tracked,
            }],
        };
        assert!(matches!(
            body.to_snapshot(),
            Err(Error::ConstructNotNan(..))
        ));
    }
}
