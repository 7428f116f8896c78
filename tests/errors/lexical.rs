use crate::test_utils::{MAIN_TEMPLATE, abba_song, compile, song_definition};
use stencil::{Location, scan};

#[test]
fn unterminated_string_halts_at_the_lexing_stage() {
    let (evaluator, errors) = compile(
        &[(MAIN_TEMPLATE, "{{\"artist}} - {{title}}")],
        &song_definition(),
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Unterminated string.");
    // callers that ignore the error list still see they lost
    assert_eq!(evaluator(&abba_song()), "Lexing failed");
}

#[test]
fn scan_errors_empty_the_token_sequence() {
    let (tokens, errors) = scan(MAIN_TEMPLATE, "{{\"artist}}");
    assert!(!errors.is_empty());
    assert!(tokens.is_empty());
}

#[test]
fn unexpected_character_reports_its_location() {
    let (evaluator, errors) = compile(&[(MAIN_TEMPLATE, "{{ % }}")], &song_definition());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Unexpected character %");
    assert_eq!(errors[0].location, Location::new(MAIN_TEMPLATE, 1, 3));
    assert_eq!(evaluator(&abba_song()), "Lexing failed");
}

#[test]
fn every_lexical_error_is_collected() {
    let (_, errors) = compile(&[(MAIN_TEMPLATE, "{{ % }} {{ @ }}")], &song_definition());
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message, "Unexpected character %");
    assert_eq!(errors[1].message, "Unexpected character @");
    assert!(errors[0].location < errors[1].location);
}
