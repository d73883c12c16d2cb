use crate::shared::logging::log_navigation_intent;

/// Receives the path of a selected sidebar entry.
///
/// The sidebar never navigates on its own; the surrounding application plugs
/// its router in here.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Records the navigation intent in the log and does nothing else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        log_navigation_intent(path);
    }
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_navigator_receives_path() {
        let visited = RefCell::new(Vec::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());

        navigator.navigate("/sales");
        navigator.navigate("/support");

        assert_eq!(*visited.borrow(), vec!["/sales", "/support"]);
    }

    #[test]
    fn test_log_navigator_is_usable_as_trait_object() {
        let navigator: &dyn Navigator = &LogNavigator;
        navigator.navigate("/costs");
    }
}
