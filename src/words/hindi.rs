// ============================================================================
// Hindi Lexicon
// Cardinal numbers in Devanagari with lakh/crore grouping
// ============================================================================

use crate::interfaces::{GroupUnit, NumeralLexicon};

/// Hindi words for 0 through 100.
///
/// Hindi numerals below one hundred are lexically irregular (21 is not built
/// from "twenty" and "one"), so every value has its own entry. Entry 100 is
/// the full "one hundred" so that 100 and 100-199 use the same wording.
const BELOW_101: [&str; 101] = [
    "", "एक", "दो", "तीन", "चार", "पाँच", "छह", "सात", "आठ", "नौ",
    "दस", "ग्यारह", "बारह", "तेरह", "चौदह", "पंद्रह", "सोलह", "सत्रह", "अठारह", "उन्नीस",
    "बीस", "इक्कीस", "बाईस", "तेईस", "चौबीस", "पच्चीस", "छब्बीस", "सत्ताईस", "अट्ठाईस", "उनतीस",
    "तीस", "इकतीस", "बत्तीस", "तैंतीस", "चौंतीस", "पैंतीस", "छत्तीस", "सैंतीस", "अड़तीस", "उनतालीस",
    "चालीस", "इकतालीस", "बयालीस", "तैंतालीस", "चौवालीस", "पैंतालीस", "छियालीस", "सैंतालीस", "अड़तालीस", "उनचास",
    "पचास", "इक्यावन", "बावन", "तिरपन", "चौवन", "पचपन", "छप्पन", "सत्तावन", "अट्ठावन", "उनसठ",
    "साठ", "इकसठ", "बासठ", "तिरसठ", "चौंसठ", "पैंसठ", "छियासठ", "सरसठ", "अड़सठ", "उनहत्तर",
    "सत्तर", "इकहत्तर", "बहत्तर", "तिहत्तर", "चौहत्तर", "पचहत्तर", "छिहत्तर", "सतहत्तर", "अठहत्तर", "उनासी",
    "अस्सी", "इक्यासी", "बयासी", "तिरासी", "चौरासी", "पचासी", "छियासी", "सत्तासी", "अट्ठासी", "नवासी",
    "नब्बे", "इक्यानबे", "बानबे", "तिरानबे", "चौरानबे", "पंचानबे", "छियानबे", "सतानबे", "अठानबे", "निन्यानबे",
    "एक सौ",
];

/// Word for "hundred" after a multiplier of two or more
const SAU: &str = "सौ";

/// Hindi number names in Devanagari script.
///
/// Numbers below one hundred come straight from a dense table. The hundreds
/// block is "एक सौ" for 100-199 and `<n> सौ` above that.
///
/// # Example
/// ```
/// use jewellery_pricing::words::{spell_out, Hindi};
///
/// assert_eq!(spell_out(&Hindi, 1234), "एक हज़ार दो सौ चौंतीस");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hindi;

impl NumeralLexicon for Hindi {
    fn name(&self) -> &str {
        "hi-IN"
    }

    fn small(&self, n: u16) -> String {
        below_thousand(n)
    }

    fn unit(&self, unit: GroupUnit) -> &'static str {
        match unit {
            GroupUnit::Thousand => "हज़ार",
            GroupUnit::Lakh => "लाख",
            GroupUnit::Crore => "करोड़",
        }
    }

    fn zero(&self) -> &'static str {
        "शून्य"
    }

    fn currency_suffix(&self) -> &'static str {
        " / रुपये"
    }
}

fn below_thousand(n: u16) -> String {
    debug_assert!(n < 1000, "hindi small renderer called with {n}");
    let n = n as usize;
    if n <= 100 {
        return BELOW_101[n].to_string();
    }

    let hundreds = n / 100;
    let rest = n % 100;
    let label = if hundreds == 1 {
        BELOW_101[100].to_string()
    } else {
        format!("{} {}", BELOW_101[hundreds], SAU)
    };

    if rest == 0 {
        label
    } else {
        format!("{} {}", label, BELOW_101[rest])
    }
}
