use crate::test_utils::{MAIN_TEMPLATE, awesome_mix, compile, mix_tape_definition};

#[test]
fn missing_end_halts_at_the_parsing_stage() {
    let (evaluator, errors) = compile(
        &[(MAIN_TEMPLATE, "{{range songs}}[{{title}}]")],
        &mix_tape_definition(),
    );
    assert!(!errors.is_empty());
    assert_eq!(errors[0].message, "Expected {{ but found Eof: ");
    assert_eq!(evaluator(&awesome_mix()), "Parsing failed");
}

#[test]
fn unknown_function_is_a_parse_error_with_suggestions() {
    let (evaluator, errors) = compile(
        &[(MAIN_TEMPLATE, "{{range songs}}{{title | titled}}{{end}}")],
        &mix_tape_definition(),
    );
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0]
            .message
            .starts_with("Unknown function named titled: Missing titled, could be: "),
        "got: {}",
        errors[0].message
    );
    assert_eq!(evaluator(&awesome_mix()), "Parsing failed");
}

#[test]
fn missing_include_is_a_parse_error() {
    let (evaluator, errors) = compile(
        &[(MAIN_TEMPLATE, "{{include nothing}}")],
        &mix_tape_definition(),
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Unable to open file: tried /templates/nothing and /templates/nothing.txt"
    );
    assert_eq!(evaluator(&awesome_mix()), "Parsing failed");
}

#[test]
fn errors_inside_an_include_name_the_include_site() {
    let (_, errors) = compile(
        &[
            (MAIN_TEMPLATE, "{{include broken}}"),
            ("/templates/broken.txt", "{{range songs}}never closed"),
        ],
        &mix_tape_definition(),
    );
    assert!(errors.len() >= 2);
    assert_eq!(errors[0].message, "included from here...");
    assert_eq!(errors[0].location.file, MAIN_TEMPLATE);
    assert_eq!(errors[1].location.file, "/templates/broken.txt");
}

#[test]
fn include_cycles_are_detected() {
    let (evaluator, errors) = compile(
        &[
            (MAIN_TEMPLATE, "{{include spiral}}"),
            ("/templates/spiral.txt", "{{include spiral}}"),
        ],
        &mix_tape_definition(),
    );
    assert!(
        errors
            .iter()
            .any(|e| e.message == "Include cycle detected: /templates/spiral.txt"),
        "got: {errors:?}"
    );
    assert_eq!(evaluator(&awesome_mix()), "Parsing failed");
}
