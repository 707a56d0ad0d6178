use billed_domain::Navigator;
use log::{debug, warn};
use shared::Route;
use std::cell::Cell;
use std::rc::Rc;
use yew::Callback;

/// Navigator that mirrors the route in `location.hash` and tells the app shell to re-render.
#[derive(Clone)]
pub struct HashNavigator {
    current: Rc<Cell<Route>>,
    on_navigate: Callback<Route>,
}

impl HashNavigator {
    pub fn new(initial: Route, on_navigate: Callback<Route>) -> Self {
        Self {
            current: Rc::new(Cell::new(initial)),
            on_navigate,
        }
    }

    /// Record a route change that did not go through [`Navigator::navigate`] (back button)
    pub fn sync(&self, route: Route) {
        self.current.set(route);
        self.on_navigate.emit(route);
    }
}

/// Route of the current `location.hash`
pub fn current_location_route() -> Route {
    let hash = gloo::utils::window().location().hash().unwrap_or_default();
    Route::from_path(&hash)
}

impl Navigator for HashNavigator {
    fn navigate(&self, route: Route) {
        debug!("Navigating to {:?}", route);
        let hash = match route {
            Route::Login => "",
            other => other.path(),
        };
        if let Err(e) = gloo::utils::window().location().set_hash(hash) {
            warn!("Failed to update location hash: {:?}", e);
        }
        self.sync(route);
    }

    fn current_route(&self) -> Option<Route> {
        Some(self.current.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_navigate_updates_hash_and_notifies_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let navigator = HashNavigator::new(Route::Login, {
            let seen = seen.clone();
            Callback::from(move |route: Route| seen.borrow_mut().push(route))
        });

        navigator.navigate(Route::NewBill);

        assert_eq!(current_location_route(), Route::NewBill);
        assert_eq!(navigator.current_route(), Some(Route::NewBill));
        assert_eq!(*seen.borrow(), vec![Route::NewBill]);

        navigator.navigate(Route::Login);
        assert_eq!(current_location_route(), Route::Login);
    }
}
