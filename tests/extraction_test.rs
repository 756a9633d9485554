mod common;

use std::fs;

use clap::Parser;
use glossa::cli::args::GlossaArgs;
use glossa::cli::commands::run;
use glossa::error::GlossaError;
use tempfile::tempdir;

use common::{write_epub, xhtml};

fn args(argv: &[&str]) -> GlossaArgs {
    let mut full = vec!["glossa"];
    full.extend_from_slice(argv);
    GlossaArgs::try_parse_from(full).unwrap()
}

fn sample_chapters() -> Vec<String> {
    vec![
        xhtml(
            "Chapter 1",
            &[
                "The cat sat on the mat.",
                "The cat&#8217;s owner didn&#8217;t mind: the cat was 3 years old.",
            ],
        ),
        xhtml(
            "Chapter 2",
            &["A dog barked at the cat.", "The dog ran, and the dog hid in 1999."],
        ),
    ]
}

#[test]
fn test_extracts_vocabulary_to_default_output() {
    let dir = tempdir().unwrap();
    let book = write_epub(dir.path(), "tmora.epub", "Tmora", &sample_chapters());

    let summary = run(&args(&[book.to_str().unwrap()])).unwrap();

    let output = dir.path().join("tmora.txt");
    assert_eq!(summary.output, output.display().to_string());
    assert_eq!(summary.title.as_deref(), Some("Tmora"));
    assert_eq!(summary.min_frequency, 3);

    // the: 7, cat: 4, dog: 3, in order of first occurrence
    assert_eq!(fs::read_to_string(&output).unwrap(), "the\ncat\ndog\n");
    assert_eq!(summary.exported_words, 3);
    assert!(summary.raw_tokens > summary.normalized_words);
}

#[test]
fn test_min_frequency_and_explicit_output() {
    let dir = tempdir().unwrap();
    let book = write_epub(dir.path(), "book.epub", "Book", &sample_chapters());
    let output = dir.path().join("words.txt");

    let summary = run(&args(&[
        book.to_str().unwrap(),
        "--min-frequency",
        "4",
        "--output",
        output.to_str().unwrap(),
    ]))
    .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "the\ncat\n");
    assert_eq!(summary.exported_words, 2);
    assert!(!dir.path().join("book.txt").exists());
}

#[test]
fn test_navigation_and_markup_are_not_counted() {
    let dir = tempdir().unwrap();
    let book = write_epub(dir.path(), "book.epub", "Book", &sample_chapters());
    let output = dir.path().join("all.txt");

    run(&args(&[
        book.to_str().unwrap(),
        "-m",
        "1",
        "-o",
        output.to_str().unwrap(),
    ]))
    .unwrap();

    let words: Vec<String> = fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(&words[..4], &["the", "cat", "sat", "on"]);
    assert!(words.contains(&"did".to_string()));
    for absent in ["contents", "chapter", "p", "html", "margin", "s", "t"] {
        assert!(!words.contains(&absent.to_string()), "unexpected {absent}");
    }
    assert!(words.iter().all(|w| w.chars().all(char::is_alphabetic)));
}

#[test]
fn test_navigation_document_counted_on_request() {
    let dir = tempdir().unwrap();
    let book = write_epub(dir.path(), "book.epub", "Book", &sample_chapters());

    run(&args(&[book.to_str().unwrap(), "--include-navigation"])).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("book.txt")).unwrap(),
        "contents\nthe\ncat\ndog\n"
    );
}

#[test]
fn test_raw_markup_counts_tag_names() {
    let dir = tempdir().unwrap();
    let book = write_epub(dir.path(), "book.epub", "Book", &sample_chapters());
    let output = dir.path().join("raw.txt");

    run(&args(&[
        book.to_str().unwrap(),
        "--raw-markup",
        "-o",
        output.to_str().unwrap(),
    ]))
    .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.lines().any(|w| w == "p"));
    assert!(content.lines().any(|w| w == "html"));
}

#[test]
fn test_wrong_input_extension_writes_nothing() {
    let dir = tempdir().unwrap();
    let book = write_epub(dir.path(), "book.mobi", "Book", &sample_chapters());

    let result = run(&args(&[book.to_str().unwrap()]));

    assert!(matches!(result, Err(GlossaError::Input(_))));
    assert!(!dir.path().join("book.txt").exists());
}

#[test]
fn test_wrong_output_extension_writes_nothing() {
    let dir = tempdir().unwrap();
    let book = write_epub(dir.path(), "book.epub", "Book", &sample_chapters());
    let output = dir.path().join("book.md");

    let result = run(&args(&[
        book.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]));

    assert!(matches!(result, Err(GlossaError::Input(_))));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let book = dir.path().join("nowhere.epub");

    assert!(matches!(
        run(&args(&[book.to_str().unwrap()])),
        Err(GlossaError::Input(_))
    ));
}

#[test]
fn test_non_positive_threshold_is_config_error() {
    let dir = tempdir().unwrap();
    let book = write_epub(dir.path(), "book.epub", "Book", &sample_chapters());

    let result = run(&args(&[book.to_str().unwrap(), "-m", "0"]));

    assert!(matches!(result, Err(GlossaError::Config(_))));
    assert!(!dir.path().join("book.txt").exists());
}

#[test]
fn test_empty_book_is_extraction_error() {
    let dir = tempdir().unwrap();
    let book = write_epub(
        dir.path(),
        "empty.epub",
        "Empty",
        &[xhtml("Blank", &[]), xhtml("Blank", &[""])],
    );

    let result = run(&args(&[book.to_str().unwrap()]));

    assert!(matches!(result, Err(GlossaError::Extraction(_))));
    assert!(!dir.path().join("empty.txt").exists());
}

#[test]
fn test_not_a_zip_file() {
    let dir = tempdir().unwrap();
    let book = dir.path().join("broken.epub");
    fs::write(&book, "this is not a zip archive").unwrap();

    assert!(matches!(
        run(&args(&[book.to_str().unwrap()])),
        Err(GlossaError::Zip(_))
    ));
    assert!(!dir.path().join("broken.txt").exists());
}

#[test]
fn test_threshold_above_every_count_gives_empty_file() {
    let dir = tempdir().unwrap();
    let book = write_epub(dir.path(), "book.epub", "Book", &sample_chapters());

    let summary = run(&args(&[book.to_str().unwrap(), "-m", "100"])).unwrap();

    assert_eq!(summary.exported_words, 0);
    assert_eq!(fs::read_to_string(dir.path().join("book.txt")).unwrap(), "");
}
