//! Single-slot dialog coordinator
//!
//! Holds at most one active dialog for the whole application. `open` installs
//! a dialog and hands back a [`PendingDialog`] future; `close` fulfills that
//! future and empties the slot. Renderers follow the slot through
//! [`DialogCoordinator::subscribe`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use parking_lot::Mutex;
use tokio::sync::{oneshot, watch};

use super::{Dialog, DialogError, DialogResponse};
use crate::features::ReplacePolicy;

type DialogResult = Result<DialogResponse, DialogError>;

/// Snapshot of the dialog currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDialog {
    /// Session number, increases with every `open`
    pub id: u64,
    pub dialog: Dialog,
}

/// The slot itself. The resolver lives next to the dialog so one can never
/// exist without the other.
#[derive(Default)]
struct Session {
    active: Option<(ActiveDialog, oneshot::Sender<DialogResult>)>,
    last_id: u64,
}

struct Inner {
    session: Mutex<Session>,
    /// Published while `session` is locked so subscribers see mutations in order
    state_tx: watch::Sender<Option<ActiveDialog>>,
    policy: ReplacePolicy,
}

/// Handle to the application's dialog slot
///
/// Cloning is cheap and every clone drives the same slot. The composition root
/// creates one and passes clones to whoever needs to show a dialog.
#[derive(Clone)]
pub struct DialogCoordinator {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for DialogCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogCoordinator")
            .field("active", &self.active().map(|a| a.id))
            .field("policy", &self.inner.policy)
            .finish()
    }
}

impl Default for DialogCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogCoordinator {
    /// Create an idle coordinator with the default replace policy
    pub fn new() -> Self {
        Self::with_policy(ReplacePolicy::default())
    }

    /// Create an idle coordinator with an explicit replace policy
    pub fn with_policy(policy: ReplacePolicy) -> Self {
        let (state_tx, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                session: Mutex::new(Session::default()),
                state_tx,
                policy,
            }),
        }
    }

    pub fn policy(&self) -> ReplacePolicy {
        self.inner.policy
    }

    /// Show `dialog`, replacing whatever dialog is currently open
    ///
    /// The returned future resolves when [`close`](Self::close) is called for
    /// this dialog. If another dialog is opened first, the future is handled
    /// according to the coordinator's [`ReplacePolicy`].
    pub fn open(&self, dialog: Dialog) -> PendingDialog {
        let (tx, rx) = oneshot::channel();

        let mut session = self.inner.session.lock();
        session.last_id += 1;
        let active = ActiveDialog {
            id: session.last_id,
            dialog,
        };

        tracing::debug!("Opening {} dialog #{}", active.dialog.kind(), active.id);

        if let Some((previous, resolver)) = session.active.replace((active.clone(), tx)) {
            match self.inner.policy {
                ReplacePolicy::Abandon => {
                    tracing::debug!(
                        "Dialog #{} replaced before it was closed, abandoning its result",
                        previous.id
                    );
                    drop(resolver);
                }
                ReplacePolicy::Cancel => {
                    tracing::debug!("Dialog #{} replaced, cancelling its result", previous.id);
                    let _ = resolver.send(Err(DialogError::Superseded));
                }
            }
        }

        let id = active.id;
        self.inner.state_tx.send_replace(Some(active));

        PendingDialog {
            id,
            rx,
            policy: self.inner.policy,
            abandoned: false,
        }
    }

    /// Resolve the open dialog with `response` and clear the slot
    ///
    /// Does nothing when no dialog is open.
    pub fn close(&self, response: DialogResponse) {
        let mut session = self.inner.session.lock();

        let Some((active, resolver)) = session.active.take() else {
            tracing::trace!("close called with no active dialog");
            return;
        };

        tracing::debug!(
            "Closing {} dialog #{} with {:?}",
            active.dialog.kind(),
            active.id,
            response
        );
        if resolver.send(Ok(response)).is_err() {
            tracing::debug!("Dialog #{} result dropped by its caller", active.id);
        }

        self.inner.state_tx.send_replace(None);
    }

    /// Current dialog, if any
    pub fn active(&self) -> Option<ActiveDialog> {
        self.inner
            .session
            .lock()
            .active
            .as_ref()
            .map(|(active, _)| active.clone())
    }

    pub fn is_active(&self) -> bool {
        self.inner.session.lock().active.is_some()
    }

    /// Follow the slot. The receiver sees every open and every effective close.
    pub fn subscribe(&self) -> watch::Receiver<Option<ActiveDialog>> {
        self.inner.state_tx.subscribe()
    }
}

/// Result of [`DialogCoordinator::open`]
///
/// Under [`ReplacePolicy::Abandon`] a dialog replaced by another never
/// resolves, and neither does one whose coordinator is dropped while it is
/// still open.
#[derive(Debug)]
#[must_use = "a dialog result does nothing unless awaited"]
pub struct PendingDialog {
    id: u64,
    rx: oneshot::Receiver<DialogResult>,
    policy: ReplacePolicy,
    abandoned: bool,
}

impl PendingDialog {
    /// Session number of the dialog this result belongs to
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Future for PendingDialog {
    type Output = DialogResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.abandoned {
            return Poll::Pending;
        }

        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            // Resolver dropped without a value
            Poll::Ready(Err(_)) => match self.policy {
                ReplacePolicy::Abandon => {
                    self.abandoned = true;
                    Poll::Pending
                }
                ReplacePolicy::Cancel => Poll::Ready(Err(DialogError::Closed)),
            },
            Poll::Pending => Poll::Pending,
        }
    }
}
