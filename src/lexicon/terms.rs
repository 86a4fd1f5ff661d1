// Built-in banned-term lists.
//
// Three categories: general profanity/insults, extremism-related terms, and
// racial slurs. They are unioned into one flat lexicon at construction.
// The lists intentionally contain duplicates across categories; the matcher
// tolerates them (a duplicate term just matches twice, which is harmless).
//
// These lists exist to FLAG harmful content. Substring matching means a term
// can match inside a longer word (e.g. "mad" in "nomad") — an accepted
// false-positive trade-off for a demo, documented in the module docs.

/// General profanity and insults.
pub const PROFANITY_TERMS: &[&str] = &[
    "stupid", "idiot", "dumb", "fuck", "shit", "bitch", "loser", "moron",
    "jerk", "asshole", "suck", "ugly", "fool", "lame", "twat", "cunt",
    "damn", "retard", "craze", "mad", "punish", "your fada", "bastard",
];

/// Extremism-related terms and phrases (single words and multi-word phrases).
pub const EXTREMISM_TERMS: &[&str] = &[
    "boko haram", "iswap", "ansaru", "jihad", "terrorist", "terrorism",
    "extremism", "radicalization", "suicide bomber", "suicide attack",
    "bombing", "explosion", "car bomb", "improvised explosive device", "ied",
    "hostage", "kidnapping", "abduction", "massacre", "insurgency",
    "militant", "militancy", "extremist", "sharia law", "caliphate",
    "jihadist", "martyrdom", "martyr", "holy war", "fatwa", "radical islam",
    "islamic state", "khilafah", "mujahedeen", "al-qaeda", "al-shabaab",
    "isis", "isil", "abubakar shekau", "bomber", "attack", "bomb",
    "insurgent", "radical", "kidnap", "explosive", "ambush", "raid",
    "behead", "kill", "assassinate", "firefight", "gunman", "gunmen",
    "weaponize", "grenade", "militia", "gunfight", "terror",
    "boko haram insurgency", "boko haram attack", "boko haram kidnapping",
    "boko haram recruitment", "boko haram propaganda", "boko haram sleeper cell",
];

/// Racial-slur terms.
pub const SLUR_TERMS: &[&str] = &[
    "nigger", "chink", "gook", "kike", "spic", "paki", "coon", "jigaboo",
    "wog", "cracker", "raghead", "beaner", "wetback", "nazi", "fascist",
    "supremacist", "racist", "racism", "white power", "slant", "sambo",
    "ethnic slur", "racial slur", "racist joke", "racist meme",
];
