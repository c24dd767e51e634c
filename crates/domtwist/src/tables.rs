// Static substitution tables used by the variation engines.
//
// All tables are process-wide read-only constants; concurrent readers need
// no synchronization. Lookup functions return an empty slice for characters
// a table does not cover, so engines never emit identity substitutions for
// unmapped input.

/// Alternatives for each ASCII vowel: every *other* vowel.
pub fn vowel_alternatives(c: char) -> &'static [&'static str] {
    match c {
        'a' => &["e", "i", "o", "u"],
        'e' => &["a", "i", "o", "u"],
        'i' => &["a", "e", "o", "u"],
        'o' => &["a", "e", "i", "u"],
        'u' => &["a", "e", "i", "o"],
        _ => &[],
    }
}

/// Visually similar ASCII characters and digraphs: `l` reads as `1`,
/// `rn` reads as `m`, and so on.
pub fn glyph_lookalikes(c: char) -> &'static [&'static str] {
    match c {
        '0' => &["o"],
        '1' => &["l", "i"],
        '3' => &["8"],
        '6' => &["9"],
        '8' => &["3"],
        '9' => &["6"],
        'b' => &["d", "lb"],
        'c' => &["e"],
        'd' => &["b", "cl", "dl"],
        'e' => &["c"],
        'g' => &["q"],
        'h' => &["lh"],
        'i' => &["1", "l"],
        'k' => &["lc"],
        'l' => &["1", "i"],
        'm' => &["n", "nn", "rn", "rr"],
        'n' => &["m", "r"],
        'o' => &["0"],
        'q' => &["g"],
        'w' => &["vv"],
        _ => &[],
    }
}

/// Full-alphabet Unicode look-alike table. Mixes Cyrillic, Greek and
/// Latin-with-diacritics code points plus a few ASCII digraphs.
pub fn unicode_lookalikes(c: char) -> &'static [&'static str] {
    match c {
        'a' => &[
            "\u{0430}", "\u{1EA1}", "\u{0103}", "\u{0227}", "\u{0251}", "\u{E5}", "\u{105}",
            "\u{E2}", "\u{1CE}", "\u{E1}", "\u{259}", "\u{E4}", "\u{E3}", "\u{101}", "\u{E0}",
        ],
        'b' => &[
            "\u{044C}", "\u{1E03}", "\u{1E05}", "\u{185}", "\u{299}", "\u{1E07}", "\u{253}", "d",
            "lb", "ib", "1b",
        ],
        'c' => &[
            "\u{0441}", "\u{E7}", "\u{107}", "\u{109}", "\u{10D}", "\u{10B}", "\u{1D04}",
            "\u{188}", "e",
        ],
        'd' => &[
            "\u{0501}", "\u{10F}", "\u{111}", "\u{1E0D}", "\u{1E0B}", "\u{256}", "\u{1E0F}",
            "\u{257}", "\u{1E13}", "\u{1E11}", "b", "cl", "dl", "di",
        ],
        'e' => &[
            "\u{0435}", "\u{EA}", "\u{1EB9}", "\u{119}", "\u{E8}", "\u{1E1B}", "\u{11B}",
            "\u{247}", "\u{117}", "\u{115}", "\u{E9}", "\u{EB}", "\u{113}", "\u{229}",
        ],
        'f' => &["\u{1E1F}", "\u{192}"],
        'g' => &[
            "\u{050D}", "\u{1E7}", "\u{121}", "\u{1F5}", "\u{11F}", "\u{261}", "\u{1E5}",
            "\u{11D}", "\u{123}", "\u{262}",
        ],
        'h' => &[
            "\u{04BB}", "\u{21F}", "\u{1E2B}", "\u{1E29}", "\u{1E23}", "\u{266}", "\u{1E25}",
            "\u{1E27}", "\u{127}", "\u{1E96}", "\u{2C68}", "\u{125}",
        ],
        'i' => &[
            "\u{0456}", "\u{269}", "\u{1D0}", "\u{ED}", "\u{26A}", "\u{1EC9}", "\u{20B}",
            "\u{268}", "\u{EF}", "\u{12B}", "\u{129}", "\u{1ECB}", "\u{EE}", "\u{131}",
            "\u{12D}", "\u{12F}", "\u{EC}",
        ],
        'j' => &["\u{0458}", "\u{1F0}", "\u{135}", "\u{29D}", "\u{249}"],
        'k' => &[
            "\u{043A}", "\u{138}", "\u{1E9}", "\u{2C6A}", "\u{1E35}", "\u{137}", "\u{1D0B}",
            "\u{1E33}",
        ],
        'l' => &["\u{04CF}", "\u{13A}", "\u{142}", "\u{26B}", "\u{13C}", "\u{13E}"],
        'm' => &["\u{043C}", "\u{1D0D}", "\u{1E41}", "\u{1E3F}", "\u{1E43}", "\u{271}"],
        'n' => &[
            "\u{146}", "\u{1F9}", "\u{144}", "\u{148}", "\u{1E45}", "\u{1E49}", "\u{1E47}",
            "\u{A791}", "\u{F1}", "\u{14B}",
        ],
        'o' => &[
            "\u{043E}", "\u{F6}", "\u{F3}", "\u{22F}", "\u{1ECF}", "\u{F4}", "\u{1D0F}",
            "\u{14D}", "\u{F2}", "\u{14F}", "\u{1A1}", "\u{151}", "\u{F5}", "\u{1ECD}",
            "\u{F8}", "0",
        ],
        'p' => &["\u{0440}", "\u{1E57}", "\u{1BF}", "\u{1A5}", "\u{1E55}"],
        'q' => &["\u{051B}", "\u{2A0}"],
        'r' => &[
            "\u{0280}", "\u{213}", "\u{24D}", "\u{27E}", "\u{159}", "\u{1E5B}", "\u{27D}",
            "\u{211}", "\u{1E59}", "\u{157}", "\u{155}", "\u{27C}", "\u{1E5F}",
        ],
        's' => &[
            "\u{0455}", "\u{1E61}", "\u{219}", "\u{15D}", "\u{A731}", "\u{282}", "\u{161}",
            "\u{15B}", "\u{1E63}", "\u{15F}",
        ],
        't' => &[
            "\u{0442}", "\u{165}", "\u{1AB}", "\u{163}", "\u{1E6D}", "\u{1E6B}", "\u{21B}",
            "\u{167}",
        ],
        'u' => &[
            "\u{1D1C}", "\u{173}", "\u{16D}", "\u{16B}", "\u{171}", "\u{1D4}", "\u{215}",
            "\u{1B0}", "\u{F9}", "\u{16F}", "\u{289}", "\u{FA}", "\u{217}", "\u{FC}", "\u{FB}",
            "\u{169}", "\u{1EE5}",
        ],
        'v' => &[
            "\u{0475}", "\u{1D8C}", "\u{1E7F}", "\u{1D20}", "\u{2C74}", "\u{2C71}", "\u{1E7D}",
        ],
        'w' => &[
            "\u{051D}", "\u{1D21}", "\u{1E87}", "\u{1E85}", "\u{1E83}", "\u{1E98}", "\u{1E89}",
            "\u{2C73}", "\u{175}", "\u{1E81}",
        ],
        'x' => &["\u{0445}", "\u{1E8B}", "\u{1E8D}"],
        'y' => &[
            "\u{0443}", "\u{177}", "\u{FF}", "\u{28F}", "\u{1E8F}", "\u{24F}", "\u{1B4}",
            "\u{233}", "\u{FD}", "\u{1EFF}", "\u{1EF5}",
        ],
        'z' => &[
            "\u{17E}", "\u{1B6}", "\u{1E93}", "\u{1E95}", "\u{2C6C}", "\u{1D22}", "\u{17C}",
            "\u{17A}", "\u{290}",
        ],
        '3' => &["8"],
        _ => &[],
    }
}

/// Curated per-letter homoglyph table for the targeted engine: only the
/// substitutions most commonly seen in live phishing domains.
pub fn targeted_homoglyphs(c: char) -> &'static [&'static str] {
    match c {
        'a' => &["\u{03B1}", "\u{0430}", "\u{0251}"],
        'c' => &["\u{0441}", "\u{03F2}"],
        'e' => &["\u{0435}", "\u{113}", "\u{117}", "\u{119}"],
        'i' => &["\u{0456}", "\u{0457}", "\u{131}"],
        'o' => &["\u{043E}", "\u{03BF}", "\u{0585}"],
        'p' => &["\u{0440}", "\u{03C1}"],
        's' => &["\u{0455}"],
        'y' => &["\u{0443}", "\u{04AF}", "\u{28F}"],
        _ => &[],
    }
}

/// QWERTY adjacency: the keys physically neighboring each letter.
pub fn keyboard_neighbors(c: char) -> &'static [char] {
    match c {
        'q' => &['w', 'a', 's'],
        'w' => &['q', 'e', 'a', 's', 'd'],
        'e' => &['w', 'r', 's', 'd', 'f'],
        'r' => &['e', 't', 'd', 'f', 'g'],
        't' => &['r', 'y', 'f', 'g', 'h'],
        'y' => &['t', 'u', 'g', 'h', 'j'],
        'u' => &['y', 'i', 'h', 'j', 'k'],
        'i' => &['u', 'o', 'j', 'k', 'l'],
        'o' => &['i', 'p', 'k', 'l'],
        'p' => &['o', 'l'],
        'a' => &['q', 'w', 's', 'z'],
        's' => &['q', 'w', 'e', 'a', 'd', 'z', 'x'],
        'd' => &['w', 'e', 'r', 's', 'f', 'x', 'c'],
        'f' => &['e', 'r', 't', 'd', 'g', 'c', 'v'],
        'g' => &['r', 't', 'y', 'f', 'h', 'v', 'b'],
        'h' => &['t', 'y', 'u', 'g', 'j', 'b', 'n'],
        'j' => &['y', 'u', 'i', 'h', 'k', 'n', 'm'],
        'k' => &['u', 'i', 'o', 'j', 'l', 'm'],
        'l' => &['i', 'o', 'p', 'k'],
        'z' => &['a', 's', 'x'],
        'x' => &['s', 'd', 'z', 'c'],
        'c' => &['d', 'f', 'x', 'v'],
        'v' => &['f', 'g', 'c', 'b'],
        'b' => &['g', 'h', 'v', 'n'],
        'n' => &['h', 'j', 'b', 'm'],
        'm' => &['j', 'k', 'n'],
        _ => &[],
    }
}

/// Letter a typists most plausibly meant when a digit appears in a label.
pub fn digit_to_letter(c: char) -> Option<char> {
    match c {
        '0' => Some('o'),
        '1' => Some('l'),
        '2' => Some('z'),
        '3' => Some('e'),
        '4' => Some('a'),
        '5' => Some('s'),
        '6' => Some('b'),
        '7' => Some('t'),
        '8' => Some('b'),
        '9' => Some('g'),
        _ => None,
    }
}

/// Digit substitutions for the lightweight `twist` path (leetspeak).
pub fn leet_substitutions(c: char) -> &'static [char] {
    match c {
        'a' => &['4'],
        'b' => &['8'],
        'e' => &['3'],
        'g' => &['9'],
        'i' => &['1'],
        'o' => &['0'],
        's' => &['5', '6'],
        't' => &['7'],
        _ => &[],
    }
}

/// Common English misspelling patterns, applied to the first occurrence only.
pub const MISSPELLINGS: &[(&str, &str)] = &[
    ("ei", "ie"),
    ("ie", "ei"),
    ("th", "t"),
    ("nn", "n"),
    ("mm", "m"),
    ("cc", "c"),
    ("ll", "l"),
];

/// Common typing mistakes for English digraphs and trigraphs. Each rule
/// yields one candidate per replacement variant.
pub const TYPO_RULES: &[(&str, &[&str])] = &[
    ("tion", &["shun", "shion"]),
    ("ing", &["in", "inng"]),
    ("ght", &["gt", "gth"]),
    ("ough", &["ow", "o"]),
    ("ph", &["f"]),
    ("ck", &["k", "c"]),
    ("qu", &["kw", "q"]),
    ("ch", &["sh", "tch"]),
    ("th", &["t", "d"]),
    ("wh", &["w"]),
    ("wr", &["r"]),
    ("kn", &["n"]),
    ("mb", &["m"]),
    ("mn", &["m"]),
    ("ps", &["s"]),
    ("pt", &["t"]),
    ("rh", &["r"]),
    ("sc", &["s"]),
    ("st", &["s"]),
    ("sw", &["s"]),
    ("tw", &["t"]),
];

/// Letters people often repeat by mistake.
pub const REPEAT_PRONE: &[char] = &['s', 't', 'e', 'a', 'o', 'i', 'n', 'r', 'l'];

/// Letters that additionally get a triple-repetition variant.
pub const TRIPLE_PRONE: &[char] = &['s', 't'];

/// Adjacent letter pairs people often transpose.
pub const SWAP_PAIRS: &[&str] = &["ie", "ei", "th", "er", "re", "an", "na", "ou", "uo"];

/// Fixed subdomain prefixes tried by the lightweight `twist` path.
pub const SUBDOMAIN_PREFIXES: &[&str] = &["www", "mail", "login", "secure", "account"];

/// Small TLD list for the lightweight `twist` path.
pub const TWIST_TLDS: &[&str] = &[
    "com", "net", "org", "io", "co", "info", "biz", "us", "uk", "de", "fr",
];

/// Curated list of common TLDs for the fusion engine.
pub const COMMON_TLDS: &[&str] = &[
    "com", "net", "org", "info", "biz", "co", "io", "me", "us", "uk",
    "ca", "au", "de", "fr", "it", "es", "nl", "se", "no", "dk",
    "fi", "pl", "cz", "hu", "ro", "bg", "hr", "si", "sk", "lt",
    "lv", "ee", "ie", "pt", "gr", "cy", "mt", "lu", "be", "at",
    "ch", "li", "is", "jp", "cn", "kr", "in", "br", "mx", "ar",
    "cl", "pe", "ve", "ec", "uy", "py", "bo", "gy", "sr", "tv",
    "ws", "ki", "nr", "fm", "mh", "pw", "mp", "gu", "as", "vi",
    "pr", "do", "ht", "cu", "jm", "bb", "tt", "ag", "dm", "lc",
    "vc", "gd", "kn", "ai", "ms", "tc", "vg", "ky", "bm", "bs",
    "bz", "cr", "sv", "gt", "hn", "ni", "pa", "aw", "an", "cw",
    "sx", "bq", "bl", "mf", "gl", "fo", "sj", "ax", "ad", "mc",
    "sm", "va", "gi", "je", "gg", "im", "ac", "sh", "ta",
    "gs", "hm", "bv", "tf", "aq", "eh", "za", "eg", "ly", "tn",
    "dz", "ma", "sd", "ss", "et", "er", "dj", "so", "ke", "ug",
    "tz", "rw", "bi", "mw", "zm", "zw", "bw", "na", "sz", "ls",
    "mg", "mu", "sc", "km", "mz", "ao", "cd", "cg", "ga", "gq",
    "cm", "cf", "td", "ne", "ng", "bj", "tg", "bf", "ci", "gh",
    "lr", "sl", "gn", "gw", "gm", "sn", "ml", "mr",
];
