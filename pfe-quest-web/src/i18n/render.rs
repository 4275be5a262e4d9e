use crate::i18n::bundle::with_catalog;
use pfe_quest_game::Notice;
use std::collections::BTreeMap;

type Args<'a> = BTreeMap<&'a str, &'a str>;

/// Fill `{name}` placeholders from `args`; unknown names stay as written.
fn fill(template: &str, args: &Args<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let Some(close) = tail.find('}') else {
            rest = &rest[open..];
            break;
        };
        let name = &tail[..close];
        match args.get(name) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}

fn lookup(key: &str, args: Option<&Args<'_>>) -> Option<String> {
    with_catalog(|catalog| {
        let template = catalog.lookup(key)?;
        Some(args.map_or_else(|| template.to_owned(), |args| fill(template, args)))
    })
}

/// Translate a key to the current language
///
/// Falls back to French, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, substituting `{name}` placeholders.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    lookup(key, args).unwrap_or_else(|| key.to_owned())
}

/// Display text for a notice in the active language.
#[must_use]
pub fn notice_text(notice: &Notice) -> String {
    let owned = notice.args();
    let args: Args<'_> = owned.iter().map(|(k, v)| (*k, v.as_str())).collect();
    lookup(notice.key(), Some(&args)).unwrap_or_else(|| notice.default_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::set_lang;

    #[test]
    fn fill_replaces_known_names_only() {
        let args = Args::from([("name", "Amine")]);
        assert_eq!(
            fill("Bonjour {name} ! {other} {name}", &args),
            "Bonjour Amine ! {other} Amine"
        );
        assert_eq!(fill("ouvert {name", &args), "ouvert {name");
        assert_eq!(fill("", &args), "");
    }

    #[test]
    fn missing_key_echoes_key() {
        assert_eq!(t("level4.nope"), "level4.nope");
    }

    #[test]
    fn french_notices_match_engine_wording() {
        set_lang("fr");
        for notice in [
            Notice::AvatarMissing,
            Notice::AvatarCorrect,
            Notice::AvatarIncorrect,
            Notice::PitchCorrect,
            Notice::PitchIncorrect,
            Notice::SpeechUnsupported,
            Notice::BackBlocked,
            Notice::LevelSummary {
                level: 4,
                score: 20,
                max: 20,
            },
            Notice::LevelSummary {
                level: 4,
                score: 10,
                max: 20,
            },
        ] {
            assert_eq!(notice_text(&notice), notice.default_text());
        }
    }

    #[test]
    fn english_summary_interpolates() {
        set_lang("en");
        let text = notice_text(&Notice::LevelSummary {
            level: 4,
            score: 10,
            max: 20,
        });
        assert_eq!(text, "You scored 10/20 points on level 4.");
        set_lang("fr");
    }
}
