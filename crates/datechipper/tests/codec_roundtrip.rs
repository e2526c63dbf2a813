#![allow(missing_docs)]

use datechipper::{
    CharVocab, DatasetVocabs, Marker, Symbol, VocabularyBuilder, decode_tokens, encode_chars,
    normalize,
};

const SAMPLES: &[(&str, &str)] = &[
    ("9 may 1998", "1998-05-09"),
    ("10.09.70", "1970-09-10"),
    ("4/28/90", "1990-04-28"),
    ("thursday january 26 1995", "1995-01-26"),
    ("monday march 7 1983", "1983-03-07"),
    ("sunday may 22 1988", "1988-05-22"),
    ("08 jul 2008", "2008-07-08"),
    ("8 sep 1999", "1999-09-08"),
    ("march 3 2001", "2001-03-03"),
    ("1 march 2001", "2001-03-01"),
];

fn sample_vocabs() -> DatasetVocabs<u32> {
    let mut builder = VocabularyBuilder::new();
    builder.scan_pairs(SAMPLES.iter().copied());
    builder.build().unwrap()
}

#[test]
fn human_roundtrip_recovers_text_then_padding() {
    let vocabs = sample_vocabs();
    let inverse = vocabs.human.inverse();

    for (human, _) in SAMPLES {
        let normalized = normalize(human);
        let length = normalized.chars().count() + 4;

        let tokens = encode_chars(human, length, &vocabs.human).unwrap();
        let symbols = decode_tokens(&tokens, &inverse).unwrap();

        let (text, tail) = symbols.split_at(normalized.chars().count());
        let recovered: String = text.iter().filter_map(Symbol::as_char).collect();
        assert_eq!(recovered, normalized);
        assert!(tail.iter().all(Symbol::is_padding));
    }
}

#[test]
fn machine_roundtrip_is_exact() {
    let vocabs = sample_vocabs();

    for (_, machine) in SAMPLES {
        let tokens = encode_chars(machine, machine.len(), &vocabs.machine).unwrap();
        let symbols = decode_tokens(&tokens, &vocabs.inv_machine).unwrap();
        let recovered: String = symbols.iter().filter_map(Symbol::as_char).collect();
        assert_eq!(&recovered, machine);
    }
}

#[test]
fn truncation_equals_prefix_encoding() {
    let vocabs = sample_vocabs();

    for (human, _) in SAMPLES {
        let normalized = normalize(human);
        if normalized.chars().count() < 6 {
            continue;
        }
        let prefix: String = normalized.chars().take(5).collect();
        assert_eq!(
            encode_chars(human, 5, &vocabs.human).unwrap(),
            encode_chars(&prefix, 5, &vocabs.human).unwrap(),
        );
    }
}

#[test]
fn builder_matches_worked_example() {
    // The two sides are scanned independently.
    let mut builder = VocabularyBuilder::new();
    builder.scan_pair("ba", "21");
    let vocabs: DatasetVocabs<u32> = builder.build().unwrap();

    // Corpus character set {'1','2','a','b'}, sorted.
    let human: CharVocab<u32> = CharVocab::from_chars("12ab".chars())
        .unwrap()
        .with_markers(&[Marker::Unknown, Marker::Padding])
        .unwrap();

    assert_eq!(human.lookup('1'), Some(0));
    assert_eq!(human.lookup('2'), Some(1));
    assert_eq!(human.lookup('a'), Some(2));
    assert_eq!(human.lookup('b'), Some(3));
    assert_eq!(human.unknown_token(), Some(4));
    assert_eq!(human.padding_token(), Some(5));

    assert_eq!(encode_chars("ab1", 5, &human).unwrap(), vec![2, 3, 0, 5, 5]);
    assert_eq!(encode_chars("ab12xy", 4, &human).unwrap(), vec![2, 3, 0, 1]);

    // And the independently-scanned sides still follow the same scheme.
    assert_eq!(vocabs.human.chars(), &['a', 'b']);
    assert_eq!(vocabs.machine.chars(), &['1', '2']);
}
