use super::Session;

/// Screens the initial routing decision can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Verify,
    Home,
}

/// Map session state to the initial screen.
///
/// Pure function, safe to call on every render; returns `None` while a
/// session operation is still in flight (render nothing and wait).
/// Must be re-evaluated whenever the session changes -- the session
/// manager never navigates on its own.
pub fn decide_initial_route(session: &Session) -> Option<Route> {
    if session.is_loading {
        return None;
    }
    if session.is_authenticated() {
        let verified = session.user.as_ref().is_some_and(|u| u.is_verified);
        if verified {
            Some(Route::Home)
        } else {
            Some(Route::Verify)
        }
    } else {
        Some(Route::Login)
    }
}
