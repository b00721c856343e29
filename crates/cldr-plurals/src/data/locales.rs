// Generated from the CLDR supplemental plural data (cardinal rules). Do not edit.

/// Locale identifier to rule list index, sorted by identifier.
pub static LOCALES: &[(&str, usize)] = &[
    ("af", 8),
    ("ak", 6),
    ("am", 1),
    ("an", 8),
    ("ar", 34),
    ("ars", 34),
    ("as", 1),
    ("asa", 8),
    ("ast", 4),
    ("az", 8),
    ("bal", 8),
    ("be", 26),
    ("bem", 8),
    ("bez", 8),
    ("bg", 8),
    ("bho", 6),
    ("bm", 0),
    ("bn", 1),
    ("bo", 0),
    ("br", 29),
    ("brx", 8),
    ("bs", 19),
    ("ca", 38),
    ("ce", 8),
    ("ceb", 12),
    ("cgg", 8),
    ("chr", 8),
    ("ckb", 8),
    ("cs", 24),
    ("cy", 35),
    ("da", 9),
    ("de", 4),
    ("doi", 1),
    ("dsb", 22),
    ("dv", 8),
    ("dz", 0),
    ("ee", 8),
    ("el", 8),
    ("en", 4),
    ("eo", 8),
    ("es", 37),
    ("et", 4),
    ("eu", 8),
    ("fa", 1),
    ("ff", 2),
    ("fi", 4),
    ("fil", 12),
    ("fo", 8),
    ("fr", 36),
    ("fur", 8),
    ("fy", 4),
    ("ga", 31),
    ("gd", 20),
    ("gl", 4),
    ("gsw", 8),
    ("gu", 1),
    ("guw", 6),
    ("gv", 32),
    ("ha", 8),
    ("haw", 8),
    ("he", 23),
    ("hi", 1),
    ("hnj", 0),
    ("hr", 19),
    ("hsb", 22),
    ("hu", 8),
    ("hy", 2),
    ("ia", 4),
    ("id", 0),
    ("ig", 0),
    ("ii", 0),
    ("in", 0),
    ("io", 4),
    ("is", 10),
    ("it", 38),
    ("iu", 16),
    ("iw", 23),
    ("ja", 0),
    ("jbo", 0),
    ("jgo", 8),
    ("jmc", 8),
    ("jv", 0),
    ("jw", 0),
    ("ka", 8),
    ("kab", 2),
    ("kaj", 8),
    ("kcg", 8),
    ("kde", 0),
    ("kea", 0),
    ("kk", 8),
    ("kkj", 8),
    ("kl", 8),
    ("km", 0),
    ("kn", 1),
    ("ko", 0),
    ("ks", 8),
    ("ksb", 8),
    ("ksh", 15),
    ("ku", 8),
    ("kw", 33),
    ("ky", 8),
    ("lag", 14),
    ("lb", 8),
    ("lg", 8),
    ("lij", 4),
    ("lkt", 0),
    ("ln", 6),
    ("lo", 0),
    ("lt", 27),
    ("lv", 13),
    ("mas", 8),
    ("mg", 6),
    ("mgo", 8),
    ("mk", 11),
    ("ml", 8),
    ("mn", 8),
    ("mo", 18),
    ("mr", 8),
    ("ms", 0),
    ("mt", 30),
    ("my", 0),
    ("nah", 8),
    ("naq", 16),
    ("nb", 8),
    ("nd", 8),
    ("ne", 8),
    ("nl", 4),
    ("nn", 8),
    ("nnh", 8),
    ("no", 8),
    ("nqo", 0),
    ("nr", 8),
    ("nso", 6),
    ("ny", 8),
    ("nyn", 8),
    ("om", 8),
    ("or", 8),
    ("os", 8),
    ("osa", 0),
    ("pa", 6),
    ("pap", 8),
    ("pcm", 1),
    ("pl", 25),
    ("prg", 13),
    ("ps", 8),
    ("pt", 3),
    ("pt_PT", 38),
    ("rm", 8),
    ("ro", 18),
    ("rof", 8),
    ("root", 0),
    ("ru", 28),
    ("rwk", 8),
    ("sah", 0),
    ("saq", 8),
    ("sat", 16),
    ("sc", 4),
    ("scn", 4),
    ("sd", 8),
    ("sdh", 8),
    ("se", 16),
    ("seh", 8),
    ("ses", 0),
    ("sg", 0),
    ("sh", 19),
    ("shi", 17),
    ("si", 5),
    ("sk", 24),
    ("sl", 21),
    ("sma", 16),
    ("smi", 16),
    ("smj", 16),
    ("smn", 16),
    ("sms", 16),
    ("sn", 8),
    ("so", 8),
    ("sq", 8),
    ("sr", 19),
    ("ss", 8),
    ("ssy", 8),
    ("st", 8),
    ("su", 0),
    ("sv", 4),
    ("sw", 4),
    ("syr", 8),
    ("ta", 8),
    ("te", 8),
    ("teo", 8),
    ("th", 0),
    ("ti", 6),
    ("tig", 8),
    ("tk", 8),
    ("tl", 12),
    ("tn", 8),
    ("to", 0),
    ("tpi", 0),
    ("tr", 8),
    ("ts", 8),
    ("tzm", 7),
    ("ug", 8),
    ("uk", 28),
    ("ur", 4),
    ("uz", 8),
    ("ve", 8),
    ("vec", 38),
    ("vi", 0),
    ("vo", 8),
    ("vun", 8),
    ("wa", 6),
    ("wae", 8),
    ("wo", 0),
    ("xh", 8),
    ("xog", 8),
    ("yi", 4),
    ("yo", 0),
    ("yue", 0),
    ("zh", 0),
    ("zu", 1),
];
