//! # Ecosystem Project Mapper
//!
//! Pure mapping from `(Beneficiary, Seed)` to `EcosystemProject`. No I/O.

use crate::assets::{
    background_image_for_code, code_for_index, code_for_slug, default_location_for_code,
    emblem_path_for_code, DEFAULT_LOCATION, DEFAULT_SEED_EMBLEM,
};
use crate::models::{Beneficiary, EcosystemProject, Seed};

const SHORT_TEXT_LIMIT: usize = 160;

/// Build the view model for a beneficiary page.
///
/// The emblem comes from the beneficiary's position in `seed`'s list, via the
/// index table; if the beneficiary isn't in the list or its position has no
/// code, `DEFAULT_SEED_EMBLEM` is used. Location, area and artwork follow
/// the beneficiary's own slug, wherever it sits in the list.
pub fn to_ecosystem_project(beneficiary: &Beneficiary, seed: &Seed) -> EcosystemProject {
    let code = seed
        .beneficiary_position(beneficiary)
        .and_then(code_for_index);

    let seed_emblem_url = code
        .and_then(emblem_path_for_code)
        .unwrap_or_else(|| DEFAULT_SEED_EMBLEM.to_string());

    let profile = code_for_slug(&beneficiary.slug);
    let defaults = profile.and_then(default_location_for_code);

    let location = defaults
        .map(|d| d.location)
        .unwrap_or(DEFAULT_LOCATION)
        .to_string();

    let area = seed
        .attribute("Area")
        .map(|a| a.display_value())
        .filter(|a| !a.is_empty())
        .or_else(|| defaults.map(|d| d.area.to_string()))
        .unwrap_or_default();

    let subtitle = match beneficiary.percentage {
        Some(pct) => format!("{}% of {} proceeds", pct, seed.name),
        None => seed.label.clone(),
    };

    let background_image_url = if !beneficiary.image.is_empty() {
        beneficiary.image.clone()
    } else {
        profile
            .and_then(background_image_for_code)
            .map(str::to_string)
            .unwrap_or_else(|| seed.seed_image_url.clone())
    };

    EcosystemProject {
        title: beneficiary.name.clone(),
        subtitle,
        location,
        area,
        short_text: summarize(&seed.description),
        extended_text: seed.description.clone(),
        background_image_url,
        seed_emblem_url,
        seed_id: seed.id.clone(),
    }
}

/// First sentence, capped at `SHORT_TEXT_LIMIT` chars on a word boundary
fn summarize(text: &str) -> String {
    let text = text.trim();
    let sentence = match text.find(". ") {
        Some(i) => &text[..=i],
        None => text,
    };

    if sentence.chars().count() <= SHORT_TEXT_LIMIT {
        return sentence.to_string();
    }

    let cut: String = sentence.chars().take(SHORT_TEXT_LIMIT).collect();
    let head = match cut.rfind(' ') {
        Some(i) if i > 0 => &cut[..i],
        _ => cut.as_str(),
    };
    format!("{}…", head.trim_end_matches([',', ';', ' ']))
}
