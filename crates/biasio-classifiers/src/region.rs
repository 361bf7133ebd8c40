//! Region detection

use crate::text::WordSet;
use biasio_core::Region;

/// Words that place a message in Pakistan
pub const PAKISTAN_KEYWORDS: &[&str] = &[
    "pakistan", "pakistani", "lahore", "karachi", "islamabad", "rawalpindi",
    "faisalabad", "quetta", "peshawar", "multan",
];

/// Words that place a message in Europe
pub const EUROPE_KEYWORDS: &[&str] = &[
    "europe", "european", "germany", "france", "italy", "spain", "portugal",
    "netherlands", "belgium", "sweden", "norway", "denmark", "finland",
    "poland", "czech", "austria", "switzerland", "ireland", "uk", "england",
    "scotland", "wales", "greece", "romania", "bulgaria", "hungary",
    "serbia", "croatia", "slovakia", "slovenia", "lithuania", "latvia",
    "estonia", "ukraine", "berlin", "paris", "rome", "madrid", "lisbon",
    "amsterdam", "brussels", "stockholm", "oslo", "copenhagen", "helsinki",
];

/// Detect the region a message refers to
///
/// Messages naming both regions, or neither, are `General`.
pub fn detect_region(words: &WordSet<'_>) -> Region {
    let pakistan = words.contains_any(PAKISTAN_KEYWORDS);
    let europe = words.contains_any(EUROPE_KEYWORDS);

    match (pakistan, europe) {
        (true, false) => Region::Pakistan,
        (false, true) => Region::Europe,
        _ => Region::General,
    }
}
