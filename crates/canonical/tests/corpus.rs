use canonical::{canonicalize, CanonicalizeConfig};

struct Case {
    name: &'static str,
    input: &'static str,
    cfg: CanonicalizeConfig,
    expected_text: &'static str,
    expected_words: &'static [&'static str],
}

#[test]
fn golden_query_corpus() {
    let cases = [
        Case {
            name: "trim_and_lowercase",
            input: "  Gym Membership  ",
            cfg: CanonicalizeConfig::default(),
            expected_text: "gym membership",
            expected_words: &["gym", "membership"],
        },
        Case {
            name: "tabs_and_newlines",
            input: "yoga\t\tmat\r\n",
            cfg: CanonicalizeConfig::default(),
            expected_text: "yoga mat",
            expected_words: &["yoga", "mat"],
        },
        Case {
            name: "combining_marks",
            input: "Cafe\u{0301} Pass",
            cfg: CanonicalizeConfig::default(),
            expected_text: "café pass",
            expected_words: &["café", "pass"],
        },
        Case {
            name: "punctuation_stripped",
            input: "Spin-class (10 pack)",
            cfg: CanonicalizeConfig {
                strip_punctuation: true,
                ..Default::default()
            },
            expected_text: "spin class 10 pack",
            expected_words: &["spin", "class", "10", "pack"],
        },
        Case {
            name: "case_preserved",
            input: "Peloton  Bike",
            cfg: CanonicalizeConfig {
                lowercase: false,
                ..Default::default()
            },
            expected_text: "Peloton Bike",
            expected_words: &["Peloton", "Bike"],
        },
    ];

    for case in cases {
        let out = canonicalize(case.input, &case.cfg)
            .unwrap_or_else(|e| panic!("{}: canonicalize failed: {e}", case.name));
        assert_eq!(out.text, case.expected_text, "{}: text", case.name);
        let words: Vec<&str> = out.words().collect();
        assert_eq!(words, case.expected_words, "{}: words", case.name);
    }
}
