use crate::test_utils::{MAIN_TEMPLATE, abba_song, compile, render_song, song_definition};
use std::fs;
use stencil::{DirectoryInfo, DiskDirectory, DiskVfs, build, default_functions};
use tempfile::tempdir;

#[test]
fn unreadable_template_surfaces_as_a_lexing_stage_failure() {
    let (evaluator, errors) = compile(&[], &song_definition());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.starts_with("Unable to read file: "));
    assert_eq!(errors[0].location.file, MAIN_TEMPLATE);
    assert_eq!(errors[0].location.line, -1);
    assert_eq!(errors[0].location.column, -1);
    assert_eq!(evaluator(&abba_song()), "Lexing failed");
}

#[test]
fn empty_template_builds_a_trivial_evaluator() {
    let (evaluator, errors) = compile(&[(MAIN_TEMPLATE, "")], &song_definition());
    assert!(errors.is_empty());
    assert_eq!(evaluator(&abba_song()), "");
}

#[test]
fn evaluator_is_reusable_across_values() {
    let (evaluator, errors) = compile(&[(MAIN_TEMPLATE, "{{artist}}")], &song_definition());
    assert!(errors.is_empty());

    let abba = abba_song();
    let other = crate::test_utils::Song {
        artist: "Nirvana".to_string(),
        title: "Smells Like Teen Spirit".to_string(),
        album: "Nevermind".to_string(),
        track: 1,
    };
    assert_eq!(evaluator(&abba), "ABBA");
    assert_eq!(evaluator(&other), "Nirvana");
    assert_eq!(evaluator(&abba), "ABBA");
}

#[test]
fn empty_directive_elides_to_nothing() {
    assert_eq!(render_song("a{{}}b", &abba_song()), "ab");
}

#[test]
fn builds_from_the_real_filesystem() {
    let temp = tempdir().unwrap();
    let templates = DiskDirectory::new(temp.path());

    let main_path = templates.get_file("song.txt");
    fs::write(&main_path, "{{artist}} - {{include detail}}").unwrap();
    fs::write(templates.get_file("detail.txt"), "{{title | title}}").unwrap();

    let (evaluator, errors) = build(
        &main_path,
        &DiskVfs::new(),
        &default_functions(),
        &templates,
        &song_definition(),
    );
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(evaluator(&abba_song()), "ABBA - Dancing Queen");
}
