//! Route guarding and the vertical layout's icon highlighting.

use shared::{Route, User};

/// Icons of the employee vertical layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutIcon {
    /// Bills list
    Window,
    /// New bill form
    Mail,
}

impl LayoutIcon {
    pub fn test_id(&self) -> &'static str {
        match self {
            LayoutIcon::Window => "icon-window",
            LayoutIcon::Mail => "icon-mail",
        }
    }
}

/// Icon highlighted for `route`, if the route shows the layout at all
pub fn active_icon(route: Route) -> Option<LayoutIcon> {
    match route {
        Route::Bills => Some(LayoutIcon::Window),
        Route::NewBill => Some(LayoutIcon::Mail),
        Route::Login | Route::Dashboard => None,
    }
}

/// Route actually rendered for `requested`: without a session everything shows the login page.
pub fn resolve_route(requested: Route, user: Option<&User>) -> Route {
    match user {
        Some(_) => requested,
        None => Route::Login,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_icon() {
        assert_eq!(active_icon(Route::Bills), Some(LayoutIcon::Window));
        assert_eq!(active_icon(Route::NewBill), Some(LayoutIcon::Mail));
        assert_eq!(active_icon(Route::Login), None);
        assert_eq!(LayoutIcon::Window.test_id(), "icon-window");
    }

    #[test]
    fn test_resolve_route_requires_session() {
        let user = User::employee("employee@test.tld");
        assert_eq!(resolve_route(Route::Bills, None), Route::Login);
        assert_eq!(resolve_route(Route::Bills, Some(&user)), Route::Bills);
        assert_eq!(resolve_route(Route::NewBill, Some(&user)), Route::NewBill);
    }
}
