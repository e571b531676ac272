//! Navigation surface used by pages that redirect after an action

use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;

pub trait Navigator {
    /// Client-side navigation to an app path
    fn go_to(&self, path: &str);

    /// Same as the browser back button
    fn go_back(&self);
}

/// [`Navigator`] backed by `leptos_router` and the window history.
/// Must be created inside a `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path, options| navigate(path, options)),
        }
    }
}

impl Default for RouterNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouterNavigator {
    fn go_to(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn go_back(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.history() {
            Ok(history) => {
                if let Err(e) = history.back() {
                    log::error!("history.back() failed: {:?}", e);
                }
            }
            Err(e) => log::error!("window.history is not available: {:?}", e),
        }
    }
}
