use happy_core::enums::{EntryType, Gitmoji};

use crate::patterns::patterns;

/// Most markers an entry carries.
pub const MAX_GITMOJIS: usize = 3;

/// Assign up to [`MAX_GITMOJIS`] markers to `content`.
///
/// Markers are collected in catalog order, so a rule declared earlier ranks
/// first. In a serious context with no explicit celebration 🎉 is skipped, and
/// when ❤️ fires, family terms add 🌱 while thanks drops 🎉. Content that
/// matches nothing gets the entry type's default marker. Never empty.
#[must_use]
pub fn analyze_content(content: &str, entry_type: EntryType) -> Vec<Gitmoji> {
    let set = patterns();
    let lowered = content.to_lowercase();

    let is_serious = set.is_serious(&lowered);
    let is_celebratory = set.is_celebratory(&lowered);

    let mut gitmojis: Vec<Gitmoji> = Vec::new();
    for (gitmoji, pattern) in &set.catalog {
        if gitmojis.contains(gitmoji) || !pattern.is_match(&lowered) {
            continue;
        }
        if *gitmoji == Gitmoji::Tada && is_serious && !is_celebratory {
            continue;
        }
        gitmojis.push(*gitmoji);
    }

    if gitmojis.contains(&Gitmoji::Heart) {
        if set.family.is_match(&lowered) && !gitmojis.contains(&Gitmoji::Seedling) {
            gitmojis.push(Gitmoji::Seedling);
        }
        if set.thanks.is_match(&lowered) && !is_celebratory {
            gitmojis.retain(|g| *g != Gitmoji::Tada);
        }
    }

    if gitmojis.is_empty() {
        gitmojis.push(entry_type.default_gitmoji());
    }

    gitmojis.truncate(MAX_GITMOJIS);
    gitmojis
}
