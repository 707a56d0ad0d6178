use shared::Route;

/// The navigation function: replaces the displayed view with the one for `route`.
pub trait Navigator {
    fn navigate(&self, route: Route);

    /// Route currently displayed, if known
    fn current_route(&self) -> Option<Route>;
}
