use crate::test_utils::{MAIN_TEMPLATE, render_mix_files};

#[test]
fn include_with_explicit_extension() {
    let output = render_mix_files(&[
        (MAIN_TEMPLATE, "{{range songs}} {{- include \"include.txt\" -}} {{end}}"),
        ("/templates/include.txt", "[{{title}}]"),
    ]);
    assert_eq!(output, "[I Will Survive][Smells Like Teen Spirit]");
}

#[test]
fn include_falls_back_to_the_default_extension() {
    // "include" does not resolve as written, "include.txt" does
    let output = render_mix_files(&[
        (MAIN_TEMPLATE, "{{range songs}} {{- include \"include\" -}} {{end}}"),
        ("/templates/include.txt", "[{{title}}]"),
    ]);
    assert_eq!(output, "[I Will Survive][Smells Like Teen Spirit]");
}

#[test]
fn include_name_can_be_a_bare_identifier() {
    let output = render_mix_files(&[
        (MAIN_TEMPLATE, "{{range songs}} {{- include file -}} {{end}}"),
        ("/templates/file.txt", "[{{title}}]"),
    ]);
    assert_eq!(output, "[I Will Survive][Smells Like Teen Spirit]");
}

#[test]
fn include_is_equivalent_to_inlining_the_body() {
    let included = render_mix_files(&[
        (MAIN_TEMPLATE, "{{range songs}}{{include part}}{{end}}"),
        ("/templates/part.txt", "[{{title}}]"),
    ]);
    let inlined = render_mix_files(&[(MAIN_TEMPLATE, "{{range songs}}[{{title}}]{{end}}")]);
    assert_eq!(included, inlined);
}

#[test]
fn includes_nest_across_files() {
    let output = render_mix_files(&[
        (MAIN_TEMPLATE, "{{range songs}}{{include outer}}{{end}}"),
        ("/templates/outer.txt", "<{{include inner}}>"),
        ("/templates/inner.txt", "{{title}}"),
    ]);
    assert_eq!(output, "<I Will Survive><Smells Like Teen Spirit>");
}

#[test]
fn the_same_file_may_be_included_twice() {
    let output = render_mix_files(&[
        (MAIN_TEMPLATE, "{{range songs}}{{include part}}{{include part}}{{end}}"),
        ("/templates/part.txt", "[{{title}}]"),
    ]);
    assert_eq!(
        output,
        "[I Will Survive][I Will Survive][Smells Like Teen Spirit][Smells Like Teen Spirit]"
    );
}
