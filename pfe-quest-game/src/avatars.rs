/// One selectable outfit on the avatar step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarOption {
    pub id: &'static str,
    pub label: &'static str,
    /// Image file name in the avatar asset directory.
    pub image: &'static str,
    pub is_correct: bool,
}

static AVATARS: [AvatarOption; 4] = [
    AvatarOption {
        id: "casual",
        label: "Casual",
        image: "avatar-casual.webp",
        is_correct: false,
    },
    AvatarOption {
        id: "soigne",
        label: "Soigné",
        image: "avatar-professionnel.jpg",
        is_correct: true,
    },
    AvatarOption {
        id: "sportif",
        label: "Sportif",
        image: "avatar-sportif.jpg",
        is_correct: false,
    },
    AvatarOption {
        id: "decontracte",
        label: "Décontracté",
        image: "avatar-decontracte.jpg",
        is_correct: false,
    },
];

/// The fixed avatar catalog in display order.
#[must_use]
pub fn avatars() -> &'static [AvatarOption] {
    &AVATARS
}

#[must_use]
pub fn find_avatar(id: &str) -> Option<&'static AvatarOption> {
    AVATARS.iter().find(|a| a.id == id)
}

/// The single option marked correct.
#[must_use]
pub fn correct_avatar() -> &'static AvatarOption {
    &AVATARS[1]
}

/// Whether `id` names the correct outfit. Unknown ids are never correct.
#[must_use]
pub fn is_correct_avatar(id: &str) -> bool {
    find_avatar(id).is_some_and(|a| a.is_correct)
}
