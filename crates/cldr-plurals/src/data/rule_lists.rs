// Generated from the CLDR supplemental plural data (cardinal rules). Do not edit.

use crate::types::PluralCategory::{self, Few, Many, One, Other, Two, Zero};

/// Rule lists in CLDR order, each ending with the catch-all `other` rule.
pub static RULE_LISTS: &[&[(PluralCategory, &str)]] = &[
    // 0: bm bo dz hnj id ig ii in ja jbo jv jw kde kea km ko lkt lo ms my ...
    &[
        (Other, ""),
    ],
    // 1: am as bn doi fa gu hi kn pcm zu
    &[
        (One, "i = 0 or n = 1"),
        (Other, ""),
    ],
    // 2: ff hy kab
    &[
        (One, "i = 0,1"),
        (Other, ""),
    ],
    // 3: pt
    &[
        (One, "i = 0..1"),
        (Many, "e = 0 and i != 0 and i % 1000000 = 0 and v = 0 or e != 0..5"),
        (Other, ""),
    ],
    // 4: ast de en et fi fy gl ia io lij nl sc scn sv sw ur yi
    &[
        (One, "i = 1 and v = 0"),
        (Other, ""),
    ],
    // 5: si
    &[
        (One, "n = 0,1 or i = 0 and f = 1"),
        (Other, ""),
    ],
    // 6: ak bho guw ln mg nso pa ti wa
    &[
        (One, "n = 0..1"),
        (Other, ""),
    ],
    // 7: tzm
    &[
        (One, "n = 0..1 or n = 11..99"),
        (Other, ""),
    ],
    // 8: af an asa az bal bem bez bg brx ce cgg chr ckb dv ee el eo eu fo ...
    &[
        (One, "n = 1"),
        (Other, ""),
    ],
    // 9: da
    &[
        (One, "n = 1 or t != 0 and i = 0,1"),
        (Other, ""),
    ],
    // 10: is
    &[
        (One, "t = 0 and i % 10 = 1 and i % 100 != 11 or t % 10 = 1 and t % 100 != 11"),
        (Other, ""),
    ],
    // 11: mk
    &[
        (One, "v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11"),
        (Other, ""),
    ],
    // 12: ceb fil tl
    &[
        (One, "v = 0 and i = 1,2,3 or v = 0 and i % 10 != 4,6,9 or v != 0 and f % 10 != 4,6,9"),
        (Other, ""),
    ],
    // 13: lv prg
    &[
        (Zero, "n % 10 = 0 or n % 100 = 11..19 or v = 2 and f % 100 = 11..19"),
        (One, "n % 10 = 1 and n % 100 != 11 or v = 2 and f % 10 = 1 and f % 100 != 11 or v != 2 and f % 10 = 1"),
        (Other, ""),
    ],
    // 14: lag
    &[
        (Zero, "n = 0"),
        (One, "i = 0,1 and n != 0"),
        (Other, ""),
    ],
    // 15: ksh
    &[
        (Zero, "n = 0"),
        (One, "n = 1"),
        (Other, ""),
    ],
    // 16: iu naq sat se sma smi smj smn sms
    &[
        (One, "n = 1"),
        (Two, "n = 2"),
        (Other, ""),
    ],
    // 17: shi
    &[
        (One, "i = 0 or n = 1"),
        (Few, "n = 2..10"),
        (Other, ""),
    ],
    // 18: mo ro
    &[
        (One, "i = 1 and v = 0"),
        (Few, "v != 0 or n = 0 or n != 1 and n % 100 = 1..19"),
        (Other, ""),
    ],
    // 19: bs hr sh sr
    &[
        (One, "v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11"),
        (Few, "v = 0 and i % 10 = 2..4 and i % 100 != 12..14 or f % 10 = 2..4 and f % 100 != 12..14"),
        (Other, ""),
    ],
    // 20: gd
    &[
        (One, "n = 1,11"),
        (Two, "n = 2,12"),
        (Few, "n = 3..10,13..19"),
        (Other, ""),
    ],
    // 21: sl
    &[
        (One, "v = 0 and i % 100 = 1"),
        (Two, "v = 0 and i % 100 = 2"),
        (Few, "v = 0 and i % 100 = 3..4 or v != 0"),
        (Other, ""),
    ],
    // 22: dsb hsb
    &[
        (One, "v = 0 and i % 100 = 1 or f % 100 = 1"),
        (Two, "v = 0 and i % 100 = 2 or f % 100 = 2"),
        (Few, "v = 0 and i % 100 = 3..4 or f % 100 = 3..4"),
        (Other, ""),
    ],
    // 23: he iw
    &[
        (One, "i = 1 and v = 0 or i = 0 and v != 0"),
        (Two, "i = 2 and v = 0"),
        (Other, ""),
    ],
    // 24: cs sk
    &[
        (One, "i = 1 and v = 0"),
        (Few, "i = 2..4 and v = 0"),
        (Many, "v != 0"),
        (Other, ""),
    ],
    // 25: pl
    &[
        (One, "i = 1 and v = 0"),
        (Few, "v = 0 and i % 10 = 2..4 and i % 100 != 12..14"),
        (Many, "v = 0 and i != 1 and i % 10 = 0..1 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 12..14"),
        (Other, ""),
    ],
    // 26: be
    &[
        (One, "n % 10 = 1 and n % 100 != 11"),
        (Few, "n % 10 = 2..4 and n % 100 != 12..14"),
        (Many, "n % 10 = 0 or n % 10 = 5..9 or n % 100 = 11..14"),
        (Other, ""),
    ],
    // 27: lt
    &[
        (One, "n % 10 = 1 and n % 100 != 11..19"),
        (Few, "n % 10 = 2..9 and n % 100 != 11..19"),
        (Many, "f != 0"),
        (Other, ""),
    ],
    // 28: ru uk
    &[
        (One, "v = 0 and i % 10 = 1 and i % 100 != 11"),
        (Few, "v = 0 and i % 10 = 2..4 and i % 100 != 12..14"),
        (Many, "v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14"),
        (Other, ""),
    ],
    // 29: br
    &[
        (One, "n % 10 = 1 and n % 100 != 11,71,91"),
        (Two, "n % 10 = 2 and n % 100 != 12,72,92"),
        (Few, "n % 10 = 3..4,9 and n % 100 != 10..19,70..79,90..99"),
        (Many, "n != 0 and n % 1000000 = 0"),
        (Other, ""),
    ],
    // 30: mt
    &[
        (One, "n = 1"),
        (Two, "n = 2"),
        (Few, "n = 0 or n % 100 = 3..10"),
        (Many, "n % 100 = 11..19"),
        (Other, ""),
    ],
    // 31: ga
    &[
        (One, "n = 1"),
        (Two, "n = 2"),
        (Few, "n = 3..6"),
        (Many, "n = 7..10"),
        (Other, ""),
    ],
    // 32: gv
    &[
        (One, "v = 0 and i % 10 = 1"),
        (Two, "v = 0 and i % 10 = 2"),
        (Few, "v = 0 and i % 100 = 0,20,40,60,80"),
        (Many, "v != 0"),
        (Other, ""),
    ],
    // 33: kw
    &[
        (Zero, "n = 0"),
        (One, "n = 1"),
        (Two, "n % 100 = 2,22,42,62,82 or n % 1000 = 0 and n % 100000 = 1000..20000,40000,60000,80000 or n != 0 and n % 1000000 = 100000"),
        (Few, "n % 100 = 3,23,43,63,83"),
        (Many, "n != 1 and n % 100 = 1,21,41,61,81"),
        (Other, ""),
    ],
    // 34: ar ars
    &[
        (Zero, "n = 0"),
        (One, "n = 1"),
        (Two, "n = 2"),
        (Few, "n % 100 = 3..10"),
        (Many, "n % 100 = 11..99"),
        (Other, ""),
    ],
    // 35: cy
    &[
        (Zero, "n = 0"),
        (One, "n = 1"),
        (Two, "n = 2"),
        (Few, "n = 3"),
        (Many, "n = 6"),
        (Other, ""),
    ],
    // 36: fr
    &[
        (One, "i = 0,1"),
        (Many, "e = 0 and i != 0 and i % 1000000 = 0 and v = 0 or e != 0..5"),
        (Other, ""),
    ],
    // 37: es
    &[
        (One, "n = 1"),
        (Many, "e = 0 and i != 0 and i % 1000000 = 0 and v = 0 or e != 0..5"),
        (Other, ""),
    ],
    // 38: ca it pt_PT vec
    &[
        (One, "i = 1 and v = 0"),
        (Many, "e = 0 and i != 0 and i % 1000000 = 0 and v = 0 or e != 0..5"),
        (Other, ""),
    ],
];
