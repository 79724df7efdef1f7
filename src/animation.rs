//! The `sl` train: a fixed list of timed frame replacements and a finale.

use crate::config::Timing;
use crate::content;
use crate::session::{Classification, EntryId, Role, Session};
use crate::terminal::TranscriptEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameStep {
    pub delay: Duration,
    pub frame: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrainSequence {
    pub steps: Vec<FrameStep>,
    pub finale_delay: Duration,
}

impl TrainSequence {
    /// One step per frame. The first tick re-shows the frame appended by `sl`.
    pub fn new(timing: &Timing) -> Self {
        Self {
            steps: content::TRAIN_FRAMES
                .iter()
                .map(|&frame| FrameStep {
                    delay: timing.train_frame(),
                    frame,
                })
                .collect(),
            finale_delay: timing.train_finale(),
        }
    }

    pub fn total(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum::<Duration>() + self.finale_delay
    }
}

/// Play the sequence on the entry `frame`, then append the finale and
/// release the in-flight guard.
///
/// Other entries may be appended meanwhile; only `frame` is ever replaced.
/// Cancelling `cancel` stops the sequence where it is, leaving the guard set.
pub(crate) async fn run_train(
    sequence: TrainSequence,
    session: Arc<Mutex<Session>>,
    frame: EntryId,
    events: UnboundedSender<TranscriptEvent>,
    cancel: CancellationToken,
) {
    for (tick, step) in sequence.steps.iter().enumerate() {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(tick, "train cancelled");
                return;
            }
            _ = sleep(step.delay) => {}
        }

        let updated = session.lock().await.replace(frame, step.frame);
        match updated {
            Some(entry) => {
                let _ = events.send(TranscriptEvent::Replaced(entry));
            }
            None => debug!(tick, "train frame no longer in transcript"),
        }
    }

    tokio::select! {
        _ = cancel.cancelled() => {
            debug!("train cancelled before finale");
            return;
        }
        _ = sleep(sequence.finale_delay) => {}
    }

    let finale = {
        let mut session = session.lock().await;
        session.state.train_in_flight = false;
        session.append(
            Role::Output,
            Classification::Success,
            content::TRAIN_FINALE,
            false,
        )
    };
    debug!("train departed");
    let _ = events.send(TranscriptEvent::Appended(finale));
    let _ = events.send(TranscriptEvent::AnimationFinished);
}
