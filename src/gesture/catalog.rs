//! Turkish Sign Language gestures recognized out of the box.
//!
//! Every sign is a single static hand pose. Signs that are performed with a
//! movement (Hayır, Teşekkürler) are described by their resting pose only,
//! which makes some of them indistinguishable from each other.

use super::{Catalog, GestureDescription, DEFAULT_WEIGHT};
use crate::hand_landmarks::geometry::FingerCurl::{self, FullCurl, HalfCurl, NoCurl};
use crate::hand_landmarks::Finger;

pub const MERHABA: &str = "Merhaba";
pub const TESEKKURLER: &str = "Teşekkürler";
pub const EVET: &str = "Evet";
pub const HAYIR: &str = "Hayır";
pub const LUTFEN: &str = "Lütfen";
pub const YARDIM: &str = "Yardım";
pub const SU: &str = "Su";
pub const ACIKTIM: &str = "Acıktım";
pub const NASILSIN: &str = "Nasılsın";
pub const IYIYIM: &str = "İyiyim";

// curls per finger, thumb first
const TURKISH_SIGNS: [(&str, [FingerCurl; 5]); 10] = [
    // open hand
    (MERHABA, [NoCurl, NoCurl, NoCurl, NoCurl, NoCurl]),
    // flat hand towards the mouth
    (TESEKKURLER, [NoCurl, NoCurl, NoCurl, NoCurl, NoCurl]),
    // fist, thumb up
    (EVET, [NoCurl, FullCurl, FullCurl, FullCurl, FullCurl]),
    // index finger wagged side to side
    (HAYIR, [FullCurl, NoCurl, FullCurl, FullCurl, FullCurl]),
    // palm up, fingers slightly bent
    (LUTFEN, [HalfCurl, HalfCurl, HalfCurl, HalfCurl, HalfCurl]),
    // right hand on top of the left
    (YARDIM, [NoCurl, NoCurl, FullCurl, FullCurl, FullCurl]),
    // thumb, index and middle open
    (SU, [NoCurl, NoCurl, NoCurl, FullCurl, FullCurl]),
    // hand moves towards the mouth
    (ACIKTIM, [HalfCurl, HalfCurl, HalfCurl, HalfCurl, HalfCurl]),
    // index and middle open
    (NASILSIN, [FullCurl, NoCurl, NoCurl, FullCurl, FullCurl]),
    // thumb up
    (IYIYIM, [NoCurl, FullCurl, FullCurl, FullCurl, FullCurl]),
];

/// Builds a description constraining every finger's curl with the default weight.
pub fn describe_curls(name: &str, curls: [FingerCurl; 5]) -> GestureDescription {
    let mut gesture = GestureDescription::describe(name);
    for (finger, curl) in Finger::ALL.into_iter().zip(curls) {
        gesture.add_curl(finger, curl, DEFAULT_WEIGHT);
    }
    gesture
}

/// The ten signs in their fixed recognition order.
pub fn turkish_sign_language() -> Catalog {
    let mut catalog = Catalog::new();
    for (name, curls) in TURKISH_SIGNS {
        // names in the table are distinct
        let _ = catalog.push(describe_curls(name, curls));
    }
    catalog
}
