use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/niveau-4")]
    Level4,
    #[at("/niveau-5")]
    Level5,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Route for a path handed over by the level engine.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::recognize(path).filter(|route| *route != Self::NotFound)
    }
}
