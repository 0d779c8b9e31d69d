//! Comment panel controller: the single owner of one article's comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views never talk to the store. They read snapshots and call `load` and
//! `submit`; both hand back a future that the host spawns on the
//! single-threaded browser executor. State transitions run as those futures
//! complete, in completion order, and each one is followed by a change
//! notification carrying a fresh snapshot.
//!
//! CONCURRENCY
//! ===========
//! At most one submit is in flight (`PanelState::begin_submit` refuses a
//! second one). Loads may overlap a pending submit; the submit's append then
//! lands on top of whatever page the load installed. No `RefCell` borrow is
//! ever held across an `.await`.
//!
//! A request's bookkeeping is taken when `load`/`submit` is called, not when
//! the future is first polled. Dropping the future before the store answers
//! releases it again, so an abandoned request never wedges later submits.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::error::PanelError;
use crate::net::store::CommentStore;
use crate::net::types::{ArticleId, AuthorId};
use crate::state::panel::PanelState;

type Listener = Rc<dyn Fn(&PanelState)>;

/// Mediates every read and write of one article's comment collection.
///
/// Cloning is cheap and yields a handle onto the same state.
pub struct CommentPanelController<S> {
    store: Rc<S>,
    article_id: ArticleId,
    author: Option<AuthorId>,
    state: Rc<RefCell<PanelState>>,
    listener: Rc<RefCell<Option<Listener>>>,
}

impl<S> Clone for CommentPanelController<S> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            article_id: self.article_id.clone(),
            author: self.author.clone(),
            state: Rc::clone(&self.state),
            listener: Rc::clone(&self.listener),
        }
    }
}

impl<S: CommentStore + 'static> CommentPanelController<S> {
    /// Create an empty panel and start its first load.
    ///
    /// The returned future performs that load; spawn it.
    pub fn initialize(
        store: Rc<S>,
        article_id: ArticleId,
        author: Option<AuthorId>,
    ) -> (Self, impl Future<Output = ()>) {
        let controller = Self {
            store,
            article_id,
            author,
            state: Rc::new(RefCell::new(PanelState::default())),
            listener: Rc::new(RefCell::new(None)),
        };
        let initial_load = controller.load();
        (controller, initial_load)
    }

    #[must_use]
    pub fn article_id(&self) -> &ArticleId {
        &self.article_id
    }

    #[must_use]
    pub fn author(&self) -> Option<&AuthorId> {
        self.author.as_ref()
    }

    /// Register the callback run after every state change, replacing any
    /// previous one.
    pub fn on_change(&self, listener: impl Fn(&PanelState) + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    /// Copy of the current state; later changes do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> PanelState {
        self.state.borrow().clone()
    }

    /// Re-read the article's comments.
    ///
    /// On success the page is replaced wholesale; on failure the previous
    /// page stays and `last_error` becomes `FetchFailed`. The panel counts as
    /// loading from this call until the future completes or is dropped.
    pub fn load(&self) -> impl Future<Output = ()> + use<S> {
        self.state.borrow_mut().begin_load();
        self.notify();

        let mut in_flight = InFlight::new(self, Request::Load);
        async move {
            let this = in_flight.controller.clone();
            let result = this.store.list(&this.article_id).await;
            in_flight.settled = true;
            match &result {
                Ok(page) => log::debug!(
                    "loaded {} of {} comments for article {}",
                    page.comments.len(),
                    page.total_count,
                    this.article_id
                ),
                Err(e) => log::warn!("loading comments for article {} failed: {e}", this.article_id),
            }
            this.state.borrow_mut().finish_load(result);
            this.notify();
        }
    }

    /// Post a new comment with the trimmed `body`.
    ///
    /// Validation happens before anything is sent; the returned future
    /// performs the create request and reconciles its outcome. Dropping it
    /// unfinished clears `pending` without changing the page.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::ValidationFailed`] without touching the network
    /// when the body is blank, no author is signed in, or another request
    /// is in flight.
    pub fn submit(&self, body: &str) -> Result<impl Future<Output = ()> + use<S>, PanelError> {
        let request = self
            .state
            .borrow_mut()
            .begin_submit(body, self.author.as_ref(), &self.article_id)
            .inspect_err(|_| log::debug!("comment submission rejected before sending"))?;
        self.notify();

        let mut in_flight = InFlight::new(self, Request::Submit);
        Ok(async move {
            let this = in_flight.controller.clone();
            let result = this.store.create(&this.article_id, &request).await;
            in_flight.settled = true;
            match &result {
                Ok(comment) => log::debug!("comment {} posted to article {}", comment.id, this.article_id),
                Err(e) => log::warn!("posting comment to article {} failed: {e}", this.article_id),
            }
            this.state.borrow_mut().finish_submit(result);
            this.notify();
        })
    }
}

impl<S> CommentPanelController<S> {
    fn notify(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            let snapshot = self.state.borrow().clone();
            listener(&snapshot);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Request {
    Load,
    Submit,
}

/// Releases a request's bookkeeping if its future is dropped before the
/// store answers.
struct InFlight<S> {
    controller: CommentPanelController<S>,
    request: Request,
    settled: bool,
}

impl<S> InFlight<S> {
    fn new(controller: &CommentPanelController<S>, request: Request) -> Self {
        Self { controller: controller.clone(), request, settled: false }
    }
}

impl<S> Drop for InFlight<S> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        {
            let mut state = self.controller.state.borrow_mut();
            match self.request {
                Request::Load => state.abandon_load(),
                Request::Submit => state.abandon_submit(),
            }
        }
        log::debug!("{:?} request for article {} abandoned", self.request, self.controller.article_id);
        self.controller.notify();
    }
}
