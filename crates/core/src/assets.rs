//! # Static Asset Tables
//!
//! Bundled lookups used when building ecosystem view models:
//!
//! - beneficiary index → emblem code (`"NN-XXX"`)
//! - emblem code → background image path
//! - emblem code → default location and area
//!
//! Emblems are positional: they follow a beneficiary's place in its seed's
//! list. Artwork and locations belong to the beneficiary itself and are
//! reached through `code_for_slug`.
//!
//! The tables are compile-time constants and are not configurable at runtime.

use regex::Regex;
use std::sync::OnceLock;

/// Emblem served when no code can be resolved for a beneficiary
pub const DEFAULT_SEED_EMBLEM: &str = "/seeds/default_big.svg";

/// Location shown for beneficiaries without a table entry
pub const DEFAULT_LOCATION: &str = "Global";

const EMBLEM_DIR: &str = "/seeds/";
const EMBLEM_SUFFIX: &str = "_big.svg";

/// One row of the beneficiary index table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeneficiaryIndexCode {
    pub index: usize,
    pub code: &'static str,
}

/// Position of a beneficiary within its seed's list → emblem code
pub const BENEFICIARY_INDEX_CODES: &[BeneficiaryIndexCode] = &[
    BeneficiaryIndexCode { index: 0, code: "01-GRG" },
    BeneficiaryIndexCode { index: 1, code: "02-ELG" },
    BeneficiaryIndexCode { index: 2, code: "03-JAG" },
    BeneficiaryIndexCode { index: 3, code: "04-BUE" },
    BeneficiaryIndexCode { index: 4, code: "05-WAL" },
    BeneficiaryIndexCode { index: 5, code: "06-PIM" },
    BeneficiaryIndexCode { index: 6, code: "07-TIG" },
    BeneficiaryIndexCode { index: 7, code: "08-MAN" },
];

/// Background artwork per emblem code
const CODE_IMAGES: &[(&str, &str)] = &[
    ("01-GRG", "/beneficiaries/grg.jpg"),
    ("02-ELG", "/beneficiaries/elg.jpg"),
    ("03-JAG", "/beneficiaries/jag.jpg"),
    ("04-BUE", "/beneficiaries/bue.jpg"),
    ("05-WAL", "/beneficiaries/wal.jpg"),
    ("06-PIM", "/beneficiaries/pim.jpg"),
    ("07-TIG", "/beneficiaries/tig.jpg"),
    ("08-MAN", "/beneficiaries/man.jpg"),
];

/// Default location for a beneficiary code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultLocation {
    pub code: &'static str,
    pub location: &'static str,
    pub area: &'static str,
}

const DEFAULT_LOCATIONS: &[DefaultLocation] = &[
    DefaultLocation {
        code: "01-GRG",
        location: "Virunga, Democratic Republic of the Congo",
        area: "7,800 km²",
    },
    DefaultLocation {
        code: "02-ELG",
        location: "Tsavo, Kenya",
        area: "22,000 km²",
    },
    DefaultLocation {
        code: "03-JAG",
        location: "Pantanal, Brazil",
        area: "150,000 km²",
    },
    DefaultLocation {
        code: "04-BUE",
        location: "Gran Chaco, Argentina",
        area: "1,100 km²",
    },
    DefaultLocation {
        code: "05-WAL",
        location: "Svalbard, Norway",
        area: "61,000 km²",
    },
    DefaultLocation {
        code: "06-PIM",
        location: "Kinabatangan, Malaysia",
        area: "270 km²",
    },
    DefaultLocation {
        code: "07-TIG",
        location: "Sundarbans, Bangladesh",
        area: "10,000 km²",
    },
    DefaultLocation {
        code: "08-MAN",
        location: "Mesoamerican Reef, Belize",
        area: "1,000 km²",
    },
];

fn code_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(\d{2})-([A-Z]{3})$").ok())
        .as_ref()
}

/// Whether a code has the `NN-XXX` shape
pub fn is_valid_code(code: &str) -> bool {
    code_pattern().is_some_and(|re| re.is_match(code))
}

/// Emblem code for a beneficiary position
pub fn code_for_index(index: usize) -> Option<&'static str> {
    BENEFICIARY_INDEX_CODES
        .iter()
        .find(|entry| entry.index == index)
        .map(|entry| entry.code)
}

/// Code whose three-letter suffix names this slug (`"wal"` → `"05-WAL"`)
pub fn code_for_slug(slug: &str) -> Option<&'static str> {
    BENEFICIARY_INDEX_CODES
        .iter()
        .map(|entry| entry.code)
        .find(|code| {
            code.split_once('-')
                .is_some_and(|(_, suffix)| suffix.eq_ignore_ascii_case(slug))
        })
}

/// Turn `"01-GRG"` into `"/seeds/01__GRG_big.svg"`.
///
/// Returns `None` for codes that don't match `NN-XXX`.
pub fn emblem_path_for_code(code: &str) -> Option<String> {
    let caps = code_pattern()?.captures(code)?;
    Some(format!(
        "{}{}__{}{}",
        EMBLEM_DIR, &caps[1], &caps[2], EMBLEM_SUFFIX
    ))
}

/// Index → code → emblem path
pub fn emblem_path_for_index(index: usize) -> Option<String> {
    code_for_index(index).and_then(emblem_path_for_code)
}

pub fn background_image_for_code(code: &str) -> Option<&'static str> {
    CODE_IMAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, path)| *path)
}

pub fn default_location_for_code(code: &str) -> Option<&'static DefaultLocation> {
    DEFAULT_LOCATIONS.iter().find(|loc| loc.code == code)
}
