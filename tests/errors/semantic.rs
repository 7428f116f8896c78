use crate::test_utils::{
    MAIN_TEMPLATE, abba_song, awesome_mix, compile, mix_tape_definition, song_definition,
};
use stencil::Location;

#[test]
fn unknown_attribute_reports_exactly_one_error_at_the_identifier() {
    let (evaluator, errors) = compile(&[(MAIN_TEMPLATE, "{{composer}}")], &song_definition());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Missing attribute composer: Missing composer, could be: album artist title track"
    );
    assert_eq!(errors[0].location, Location::new(MAIN_TEMPLATE, 1, 2));
    assert_eq!(evaluator(&abba_song()), "Syntax error");
}

#[test]
fn unknown_bool_reports_candidates() {
    let (evaluator, errors) = compile(
        &[(MAIN_TEMPLATE, "{{range songs}}{{if starred}}x{{end}}{{end}}")],
        &mix_tape_definition(),
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Missing bool starred: Missing starred, could be: star"
    );
    assert_eq!(evaluator(&awesome_mix()), "Syntax error");
}

#[test]
fn unknown_array_reports_candidates() {
    let (evaluator, errors) = compile(
        &[(MAIN_TEMPLATE, "{{range tracks}}x{{end}}")],
        &mix_tape_definition(),
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Missing array tracks: Missing tracks, could be: songs"
    );
    assert_eq!(evaluator(&awesome_mix()), "Syntax error");
}

#[test]
fn every_semantic_error_is_collected_in_one_pass() {
    let (_, errors) = compile(
        &[(MAIN_TEMPLATE, "{{composer}} and {{producer}}")],
        &song_definition(),
    );
    assert_eq!(errors.len(), 2);
    assert!(errors[0].message.starts_with("Missing attribute composer"));
    assert!(errors[1].message.starts_with("Missing attribute producer"));
}

#[test]
fn semantic_errors_inside_an_included_file_point_at_it() {
    let (_, errors) = compile(
        &[
            (MAIN_TEMPLATE, "{{include part}}"),
            ("/templates/part.txt", "{{composer}}"),
        ],
        &song_definition(),
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].location.file, "/templates/part.txt");
}
