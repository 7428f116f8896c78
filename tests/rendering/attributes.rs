use crate::test_utils::{
    MAIN_TEMPLATE, abba_song, compile, render_song, song_definition_with_spaces,
};

#[test]
fn attributes_render_their_getters() {
    let output = render_song("{{artist}} - {{title}} ({{album}})", &abba_song());
    assert_eq!(output, "ABBA - dancing queen (Arrival)");
}

#[test]
fn quoted_attributes_render_the_same() {
    let output = render_song(
        "{{\"artist\"}} - {{\"title\"}} ({{\"album\"}})",
        &abba_song(),
    );
    assert_eq!(output, "ABBA - dancing queen (Arrival)");
}

#[test]
fn quoting_allows_names_with_spaces() {
    let template = "{{\"the artist\"}} - {{\"the title\"}} ({{\"the album\"}})";
    let (evaluator, errors) = compile(
        &[(MAIN_TEMPLATE, template)],
        &song_definition_with_spaces(),
    );
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(evaluator(&abba_song()), "ABBA - dancing queen (Arrival)");
}

#[test]
fn literal_text_passes_through_verbatim() {
    let output = render_song("nothing to expand here", &abba_song());
    assert_eq!(output, "nothing to expand here");
}

#[test]
fn numeric_attributes_render_as_strings() {
    let output = render_song("track {{track}}", &abba_song());
    assert_eq!(output, "track 2");
}
