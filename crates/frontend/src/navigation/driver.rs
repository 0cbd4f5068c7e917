use std::cell::RefCell;
use std::rc::Rc;

use super::controller::{CatalogOutcome, RoutingController};
use super::loader::{LoadOutcome, LoadRequest};
use super::surface::ConsoleSurface;
use crate::api::ConsoleApi;
use crate::shared::timer::Timer;

/// Runs the routing controller against a real (or scripted) API.
///
/// Cheap to clone; every clone drives the same controller. Borrows of the
/// controller never span an `.await`, so overlapping loads can complete in
/// any order.
pub struct ConsoleDriver<A, T, S> {
    api: Rc<A>,
    timer: Rc<T>,
    controller: Rc<RefCell<RoutingController<S>>>,
}

impl<A, T, S> Clone for ConsoleDriver<A, T, S> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            timer: Rc::clone(&self.timer),
            controller: Rc::clone(&self.controller),
        }
    }
}

impl<A: ConsoleApi, T: Timer, S: ConsoleSurface> ConsoleDriver<A, T, S> {
    pub fn new(api: A, timer: T, controller: RoutingController<S>) -> Self {
        Self {
            api: Rc::new(api),
            timer: Rc::new(timer),
            controller: Rc::new(RefCell::new(controller)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn with_controller<R>(&self, f: impl FnOnce(&RoutingController<S>) -> R) -> R {
        f(&self.controller.borrow())
    }

    /// Requests the page catalog until it is accepted, then loads the page
    /// named by the location. `location` is read once the catalog arrives.
    pub async fn boot(&self, location: impl Fn() -> String) {
        self.controller.borrow_mut().start();

        loop {
            let result = self.api.fetch_catalog().await;
            let fragment = location();
            let outcome = self.controller.borrow_mut().catalog_received(result, &fragment);

            match outcome {
                CatalogOutcome::Ready(request) => {
                    self.load(request).await;
                    return;
                }
                CatalogOutcome::RetryAfter(delay) => self.timer.sleep(delay).await,
                CatalogOutcome::GaveUp | CatalogOutcome::Ignored => return,
            }
        }
    }

    /// Navigation bar activation. `None` when the page id is unknown.
    pub async fn show(&self, page_id: &str) -> Option<LoadOutcome> {
        let request = self.controller.borrow_mut().show(page_id)?;
        Some(self.load(request).await)
    }

    /// Browser back/forward. `None` when nothing had to be loaded.
    pub async fn follow_location(&self, fragment: &str) -> Option<LoadOutcome> {
        let request = self.controller.borrow_mut().follow_location(fragment)?;
        Some(self.load(request).await)
    }

    async fn load(&self, request: LoadRequest) -> LoadOutcome {
        let result = self
            .api
            .fetch_page(request.page().id(), request.sub_path())
            .await;
        self.controller.borrow_mut().content_received(&request, result)
    }
}
