use crate::joint::JointId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to construct NotNan from f32: {1}")]
    ConstructNotNan(#[source] ordered_float::FloatIsNan, f32),

    #[error("failed to convert usize value to joint id: {0}")]
    ConvertUSizeToJointId(usize),

    #[error("failed to parse frame record on line {1}")]
    ParseFrameRecord(#[source] serde_json::Error, usize),

    #[error("failed to read frame record")]
    ReadFrameRecord(#[source] std::io::Error),

    #[error("joint {0:?} listed more than once for body {1}")]
    DuplicateJoint(JointId, u32),

    #[error("body {0} listed more than once in one frame")]
    DuplicateBody(u32),

    #[error("frame reader thread panicked")]
    ReaderPanicked,
}
