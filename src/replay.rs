//! Background frame reading with a bounded queue.
//!
//! The reader thread is never scoped to the consumer: a read blocked on idle
//! input must not hold up shutdown, so the consumer polls a running flag
//! while it waits and simply abandons the thread when told to stop.

use crate::{
    error::Error,
    frame::{read_frames, FrameRecord},
};
use crossbeam::channel::{bounded, Receiver, RecvTimeoutError};
use std::{
    io::BufRead,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};
use tracing::debug;

pub mod constants {
    use std::time::Duration;

    /// Frames parsed ahead of the consumer.
    pub const QUEUE_CAPACITY: usize = 16;

    /// How often a waiting consumer rechecks the running flag.
    pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
}

pub struct FrameReader {
    frames: Receiver<FrameRecord>,
    handle: JoinHandle<Result<(), Error>>,
    poll_interval: Duration,
}

impl FrameReader {
    /// Start parsing `input` on its own thread. Reading stops at end of
    /// input, on the first bad line, once `running` is cleared, or once the
    /// reader is dropped.
    pub fn spawn<R>(input: R, running: Arc<AtomicBool>) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self::with_capacity(input, running, constants::QUEUE_CAPACITY)
    }

    pub fn with_capacity<R>(input: R, running: Arc<AtomicBool>, capacity: usize) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (frames_tx, frames) = bounded(capacity);
        let handle = thread::spawn(move || {
            for record in read_frames(input) {
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                if frames_tx.send(record?).is_err() {
                    debug!("frame consumer gone, stopping reader");
                    break;
                }
            }
            Ok(())
        });
        Self {
            frames,
            handle,
            poll_interval: constants::POLL_INTERVAL,
        }
    }

    /// The next frame, or `None` once input is exhausted or `running` has
    /// been cleared. Waiting on idle input notices a cleared flag within one
    /// poll interval.
    pub fn next_frame(&self, running: &AtomicBool) -> Option<FrameRecord> {
        while running.load(Ordering::SeqCst) {
            match self.frames.recv_timeout(self.poll_interval) {
                Ok(record) => return Some(record),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
        None
    }

    /// Stop consuming and wait for the reader thread, surfacing its error.
    ///
    /// Dropping the queue first unblocks a reader waiting to send. Only call
    /// this once input has ended; a reader blocked on a read keeps waiting.
    pub fn finish(self) -> Result<(), Error> {
        let Self { frames, handle, .. } = self;
        drop(frames);
        handle.join().map_err(|_| Error::ReaderPanicked)?
    }
}
