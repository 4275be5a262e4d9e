//! Asset and router paths under the deployment base.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/pfe-quest` when the game is
//! hosted under a subdirectory). Without it everything is root-anchored.

const AVATAR_DIR: &str = "static/img/avatars";

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// URL for a static asset such as `static/img/avatars/avatar-sportif.jpg`.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(public_url(), relative)
}

/// URL for an avatar image file name from the catalog.
#[must_use]
pub fn avatar_image(file: &str) -> String {
    asset_path(&format!("{AVATAR_DIR}/{file}"))
}

/// Router basename, or `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    trimmed_base(public_url())
}

fn join_base(base: &str, relative: &str) -> String {
    let rel = relative.trim_start_matches('/');
    match trimmed_base(base) {
        Some(base) => format!("{base}/{rel}"),
        None => format!("/{rel}"),
    }
}

fn trimmed_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_anchored_without_base() {
        assert_eq!(asset_path("static/data/level4.json"), "/static/data/level4.json");
        assert_eq!(
            avatar_image("avatar-casual.webp"),
            "/static/img/avatars/avatar-casual.webp"
        );
        assert_eq!(router_base(), None);
    }

    #[test]
    fn base_is_prefixed_once() {
        assert_eq!(
            join_base("/pfe-quest/", "/static/img/avatars/avatar-sportif.jpg"),
            "/pfe-quest/static/img/avatars/avatar-sportif.jpg"
        );
        assert_eq!(trimmed_base(" /pfe-quest/ "), Some("/pfe-quest".to_string()));
        assert_eq!(trimmed_base("/"), None);
    }
}
