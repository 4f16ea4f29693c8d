use super::*;

fn rejoin(block: &TextBlock) -> Vec<String> {
    format!("{} {}", block.line1, block.line2)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[test]
fn greedy_boundary_is_exact() {
    let b = segment_title("one two three four five", 11);
    assert_eq!(b.line1, "one two");
    assert_eq!(b.line2, "three four five");
    assert!(b.has_second_line());
}

#[test]
fn exact_fit_stays_on_first_line() {
    let b = segment_title("one two three", 13);
    assert_eq!(b.line1, "one two three");
    assert_eq!(b.line2, "");
}

#[test]
fn short_titles_have_no_second_line() {
    for (title, n) in [("Lofi Beats", 35), ("a", 1), ("Never Gonna Give You Up", 23)] {
        let b = segment_title(title, n);
        assert_eq!(b.line1, title);
        assert!(b.line2.is_empty(), "{title}");
    }
}

#[test]
fn long_first_word_is_never_broken() {
    let b = segment_title("Supercalifragilisticexpialidocious is long", 10);
    assert_eq!(b.line1, "Supercalifragilisticexpialidocious");
    assert_eq!(b.line2, "is long");
}

#[test]
fn later_short_words_do_not_backfill_line_one() {
    // "c" would fit after "aaaa" but follows the overflowing word, so it stays on line two.
    let b = segment_title("aaaa bbbbbbbbbb c", 7);
    assert_eq!(b.line1, "aaaa");
    assert_eq!(b.line2, "bbbbbbbbbb c");
}

#[test]
fn whitespace_is_collapsed_and_trimmed() {
    let b = segment_title("  Hello \t  World \n again  ", 11);
    assert_eq!(b.line1, "Hello World");
    assert_eq!(b.line2, "again");
}

#[test]
fn empty_title_yields_empty_block() {
    assert_eq!(segment_title("   ", 35), TextBlock::default());
}

#[test]
fn counts_characters_not_bytes() {
    // Five two-byte characters per word: "ééééé ééééé" is 11 chars, 21 bytes.
    let b = segment_title("ééééé ééééé ééééé", 11);
    assert_eq!(b.line1, "ééééé ééééé");
    assert_eq!(b.line2, "ééééé");
}

#[test]
fn rejoining_reconstructs_the_word_sequence() {
    let titles = [
        "one two three four five",
        "The Quick Brown Fox Jumps Over The Lazy Dog Again And Again",
        "single",
        "a b c d e f g h i j k l m n o p q r s t u v w x y z",
    ];
    for title in titles {
        for n in [1usize, 5, 11, 35, 80] {
            let b = segment_title(title, n);
            let words: Vec<String> = title.split_whitespace().map(str::to_owned).collect();
            assert_eq!(rejoin(&b), words, "{title} @ {n}");
            assert!(!b.line1.is_empty());
            assert!(b.line1.chars().count() <= n || !b.line1.contains(' '));
        }
    }
}
