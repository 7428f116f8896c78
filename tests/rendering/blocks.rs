use crate::test_utils::render_mix;
use rstest::rstest;

#[rstest]
#[case("{{#songs}}[{{title}}]{{/songs}}")]
#[case("{{range songs}}[{{title}}]{{end}}")]
fn both_iteration_forms_render_each_child(#[case] template: &str) {
    assert_eq!(render_mix(template), "[I Will Survive][Smells Like Teen Spirit]");
}

#[test]
fn if_filters_by_the_bool() {
    let template = "{{range songs -}} [ {{- if star -}} {{- title -}} {{- end -}} ] {{- end}}";
    assert_eq!(render_mix(template), "[I Will Survive][]");
}

#[rstest]
#[case("{{?star}}*{{end}}")]
#[case("{{if star}}*{{end}}")]
fn both_conditional_forms_agree(#[case] inner: &str) {
    let template = format!("{{{{range songs}}}}{inner}{{{{end}}}}");
    assert_eq!(render_mix(&template), "*");
}

#[test]
fn empty_iteration_body_renders_nothing() {
    assert_eq!(render_mix("{{range songs}}{{end}}"), "");
}

#[test]
fn nested_blocks_keep_sibling_text() {
    let template = "start {{range songs}}({{artist}}){{end}} finish";
    assert_eq!(
        render_mix(template),
        "start (Gloria Gaynor)(Nirvana) finish"
    );
}
