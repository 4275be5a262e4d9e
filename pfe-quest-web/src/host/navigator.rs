use crate::router::Route;
use pfe_quest_game::Navigator;

/// Pushes engine-requested paths through `yew_router`.
///
/// Holds `None` outside a router (server rendering), in which case requests
/// are only logged.
#[derive(Clone)]
pub struct RouterNavigator {
    inner: Option<yew_router::navigator::Navigator>,
}

impl RouterNavigator {
    #[must_use]
    pub const fn new(inner: Option<yew_router::navigator::Navigator>) -> Self {
        Self { inner }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        let Some(route) = Route::from_path(path) else {
            log::error!("no route for {path}");
            return;
        };
        match &self.inner {
            Some(nav) => nav.push(&route),
            None => log::warn!("navigation to {path} requested without a router"),
        }
    }
}
