use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

/// How a scramble pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleOutcome {
    /// Every character settled on its target
    Completed,
    /// A newer pass replaced this one, or the animator went away
    Cancelled,
}

/// Completion signal of one scramble pass.
///
/// Resolves exactly once. Await it from async code, or call
/// [`Completion::try_outcome`] from a synchronous draw loop.
#[derive(Debug)]
pub struct Completion {
    rx: oneshot::Receiver<ScrambleOutcome>,
    outcome: Option<ScrambleOutcome>,
}

/// Sending half kept by the animator
#[derive(Debug)]
pub(crate) struct Resolver {
    tx: oneshot::Sender<ScrambleOutcome>,
}

pub(crate) fn channel() -> (Resolver, Completion) {
    let (tx, rx) = oneshot::channel();
    (Resolver { tx }, Completion { rx, outcome: None })
}

impl Resolver {
    pub(crate) fn resolve(self, outcome: ScrambleOutcome) {
        // The caller may have dropped its Completion
        let _ = self.tx.send(outcome);
    }
}

impl Completion {
    /// Outcome if the pass has ended, without waiting
    pub fn try_outcome(&mut self) -> Option<ScrambleOutcome> {
        if self.outcome.is_none() {
            self.outcome = match self.rx.try_recv() {
                Ok(outcome) => Some(outcome),
                Err(oneshot::error::TryRecvError::Empty) => None,
                Err(oneshot::error::TryRecvError::Closed) => Some(ScrambleOutcome::Cancelled),
            };
        }
        self.outcome
    }
}

impl Future for Completion {
    type Output = ScrambleOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(outcome) = self.outcome {
            return Poll::Ready(outcome);
        }
        let outcome = match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => outcome,
            Poll::Ready(Err(_)) => ScrambleOutcome::Cancelled,
            Poll::Pending => return Poll::Pending,
        };
        self.outcome = Some(outcome);
        Poll::Ready(outcome)
    }
}
