use crate::BlogFeed;
use crate::state::FetchEvent;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Shared flag telling an in-flight fetch whether its owner still exists.
/// Clones observe the same flag.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one fetch and feeds its events to `apply`.
///
/// Emits `Started`, then `Succeeded` or `Failed`, then `Settled`. If the
/// owner ends while the request is in flight the outcome is dropped and
/// nothing after `Started` is applied. Returns whether the outcome was applied.
pub async fn load_blogs<F, A>(feed: &F, liveness: &Liveness, mut apply: A) -> bool
where
    F: BlogFeed + ?Sized,
    A: FnMut(FetchEvent),
{
    if !liveness.is_alive() {
        return false;
    }

    apply(FetchEvent::Started);
    let outcome = feed.fetch_batch().await;

    if !liveness.is_alive() {
        debug!("blog list gone before fetch settled, dropping outcome");
        return false;
    }

    match outcome {
        Ok(blogs) => apply(FetchEvent::Succeeded(blogs)),
        Err(err) => {
            warn!(error = %err, "failed to load blogs");
            apply(FetchEvent::Failed(err));
        }
    }
    apply(FetchEvent::Settled);

    true
}
