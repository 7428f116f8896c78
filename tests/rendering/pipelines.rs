use crate::test_utils::{abba_song, render_song};

#[test]
fn title_function_with_trim_markers() {
    let output = render_song("{{artist}} - {{title | title}} ( {{- album -}} )", &abba_song());
    assert_eq!(output, "ABBA - Dancing Queen (Arrival)");
}

#[test]
fn zfill_and_comment_with_trim_markers() {
    let output = render_song(
        "{{track | zfill(3)}} {{- /** a comment **/ -}}  . {{title | title}}",
        &abba_song(),
    );
    assert_eq!(output, "002. Dancing Queen");
}

#[test]
fn pipeline_composes_left_to_right() {
    // upper runs on the output of title, so the composition is upper(title(x))
    let output = render_song("{{title | title | upper}}", &abba_song());
    assert_eq!(output, "DANCING QUEEN");
}

#[test]
fn replace_takes_two_string_arguments() {
    let output = render_song("{{title | replace(dancing, crying)}}", &abba_song());
    assert_eq!(output, "crying queen");
}

#[test]
fn quoted_function_arguments_keep_spaces() {
    let output = render_song("{{title | replace(\"dancing \", \"\")}}", &abba_song());
    assert_eq!(output, "queen");
}

#[test]
fn substr_takes_byte_offsets() {
    let output = render_song("{{title | substr(0, 7)}}", &abba_song());
    assert_eq!(output, "dancing");
}

#[test]
fn lower_and_upper_transform_case() {
    let output = render_song("{{artist | lower}} {{title | upper}}", &abba_song());
    assert_eq!(output, "abba DANCING QUEEN");
}

#[test]
fn trim_functions_accept_custom_characters() {
    let output = render_song("{{artist | trim(A)}}", &abba_song());
    assert_eq!(output, "BB");
}
