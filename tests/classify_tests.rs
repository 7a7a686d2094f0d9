use selkit::chars::{
    CharClass, categorize_char, char_is_grapheme_extender, grapheme_extenders, grapheme_is_space,
    grapheme_is_word,
};
use selkit::grapheme::{GraphemeLine, count_extenders, display_column, grapheme_index};

#[test]
fn ascii_alphanumerics_and_underscore_are_word() {
    for ch in ['a', 'z', 'A', 'Z', '0', '9', '_'] {
        assert_eq!(categorize_char(ch), CharClass::Word, "{ch:?}");
    }
}

#[test]
fn nordic_letters_are_word_but_other_accents_are_not() {
    for ch in "ÅÄÆÖØåäæöø".chars() {
        assert_eq!(CharClass::of(ch), CharClass::Word, "{ch:?}");
    }
    for ch in ['é', 'ß', 'ñ', 'Ü', 'λ'] {
        assert_eq!(CharClass::of(ch), CharClass::Other, "{ch:?}");
    }
}

#[test]
fn space_set_is_narrow() {
    for ch in [' ', '\t', '\n', '\r'] {
        assert_eq!(categorize_char(ch), CharClass::Space, "{ch:?}");
    }
    // No-break space and other Unicode spaces are not in the set
    assert_eq!(categorize_char('\u{00A0}'), CharClass::Other);
    assert_eq!(categorize_char('\u{2003}'), CharClass::Other);
}

#[test]
fn punctuation_is_other() {
    for ch in ['.', ',', '-', '(', ')', '=', '"', '/'] {
        assert_eq!(categorize_char(ch), CharClass::Other, "{ch:?}");
    }
}

#[test]
fn emoji_and_joiners_are_extenders() {
    let extenders = [
        '\u{1F600}', // grinning face
        '\u{1F680}', // rocket
        '\u{1F914}', // thinking face
        '\u{1F468}', // man
        '\u{2764}',  // heavy black heart
        '\u{2600}',  // sun
        '\u{FE0F}',  // variation selector 16
        '\u{FE00}',  // variation selector 1
        '\u{20E3}',  // combining enclosing keycap
        '\u{200D}',  // zero width joiner
    ];
    for ch in extenders {
        assert!(char_is_grapheme_extender(ch), "{ch:?}");
        assert_eq!(categorize_char(ch), CharClass::GraphemeExtender, "{ch:?}");
    }
}

#[test]
fn ranges_end_where_listed() {
    assert!(!char_is_grapheme_extender('\u{27C0}'));
    assert!(!char_is_grapheme_extender('\u{FE10}'));
    assert!(!char_is_grapheme_extender('\u{200C}'));
    assert!(!char_is_grapheme_extender('\u{2100}'));
}

#[test]
fn grapheme_rules_look_at_every_scalar() {
    // Letter plus combining acute accent
    assert!(grapheme_is_word("e\u{301}"));
    assert!(!grapheme_is_word("\u{1F600}"));
    assert!(grapheme_is_space("\r\n"));
    assert_eq!(grapheme_extenders("\u{2764}\u{FE0F}"), 2);
    assert_eq!(grapheme_extenders("a"), 0);
}

#[test]
fn zwj_sequence_is_one_cluster_with_five_extenders() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let line = GraphemeLine::new(family);
    assert_eq!(line.len(), 1);
    assert_eq!(count_extenders(line.graphemes()), 5);
}

#[test]
fn display_column_and_grapheme_index_are_inverse_on_boundaries() {
    let text = "\u{1F600} foo \u{2764}\u{FE0F} bar";
    let line = GraphemeLine::new(text);
    for index in 0..=line.len() {
        let col = display_column(&line, index);
        assert_eq!(grapheme_index(&line, col), index, "index {index}");
    }
}

#[test]
fn display_column_counts_only_preceding_extenders() {
    let line = GraphemeLine::new("\u{1F600} foo");
    assert_eq!(display_column(&line, 0), 0);
    assert_eq!(display_column(&line, 1), 2);
    assert_eq!(display_column(&line, 2), 3);
    assert_eq!(display_column(&line, line.len()), 6);
}

#[test]
fn grapheme_index_rounds_up_inside_wide_cluster() {
    let line = GraphemeLine::new("\u{2764}\u{FE0F}x");
    // Columns 1 and 2 are inside the heart
    assert_eq!(grapheme_index(&line, 1), 1);
    assert_eq!(grapheme_index(&line, 2), 1);
    assert_eq!(grapheme_index(&line, 3), 1);
    assert_eq!(grapheme_index(&line, 4), 2);
}

#[test]
fn leading_and_trailing_spaces() {
    let line = GraphemeLine::new(" \t hi  ");
    assert_eq!(line.leading_spaces(), 3);
    assert_eq!(line.trailing_spaces(), 2);
    assert!(line.has_word());
    assert!(!GraphemeLine::new(" ;; \u{1F600} ").has_word());
}
