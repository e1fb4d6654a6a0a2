use auxbib::latex::BibDatabase;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

const SAMPLE_BIB: &str = "@article{foo,
  author = {Foo Author},
  title = {On {Foo}},
  year = {2020}
}

@book{foobar,
  author = {Foobar Author},
  title = {Foobar},
  year = {2021}
}
";

fn fixture(file_name: &str) -> std::path::PathBuf {
    let mut path = Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf();
    path.push("tests");
    path.push("fixtures");
    path.push(file_name);
    path
}

#[test]
fn test_get_entry_hit_and_miss() {
    let db = BibDatabase::from_string(SAMPLE_BIB);

    let entry = db.get_entry("foo").expect("foo should be found");
    assert!(entry.starts_with("@article{foo,"));
    assert!(entry.ends_with('}'));
    assert!(entry.contains("On {Foo}"));
    assert!(!entry.contains("foobar"), "lookup must stop at the nearest closing brace");

    assert!(db.get_entry("bar").is_none());
}

#[test]
fn test_key_must_match_exactly() {
    let db = BibDatabase::from_string(SAMPLE_BIB);

    let entry = db.get_entry("foobar").unwrap();
    assert!(entry.starts_with("@book{foobar,"));
    assert!(db.get_entry("fo").is_none());
    assert!(db.get_entry("oo").is_none());
}

#[test]
fn test_regex_metacharacters_in_key() {
    let bib = "@misc{a.b+c,\n  title = {Dots and pluses},\n}\n\n@misc{aXb+c,\n  title = {Wrong},\n}\n";
    let db = BibDatabase::from_string(bib);

    let entry = db.get_entry("a.b+c").unwrap();
    assert!(entry.contains("Dots and pluses"));
    assert!(db.get_entry("a.*").is_none());
    assert!(db.get_entry("(unbalanced").is_none());
}

#[test]
fn test_crlf_and_missing_final_newline() {
    let bib = "@article{win,\r\n  year = {2000}\r\n}\r\n\r\n@article{last,\n  year = {2001}\n}";
    let db = BibDatabase::from_string(bib);

    assert_eq!(db.get_entry("win").unwrap(), "@article{win,\r\n  year = {2000}\r\n}");
    assert_eq!(db.get_entry("last").unwrap(), "@article{last,\n  year = {2001}\n}");
}

#[test]
fn test_from_file_fixture() {
    let db = BibDatabase::from_file(&fixture("refs.bib")).unwrap();

    // @string is a macro definition, not a record
    assert_eq!(db.entry_count(), 4);
    let lamport = db.get_entry("lamport1994latex").unwrap();
    assert!(lamport.contains("Addison-Wesley"));
    assert!(!lamport.contains("Patashnik"));
    assert!(db.get_entry("tugboat").is_none());
}

#[test]
fn test_from_file_missing_is_error() {
    let dir = tempdir().unwrap();
    assert!(BibDatabase::from_file(&dir.path().join("absent.bib")).is_err());
}

#[test]
fn test_from_file_roundtrip_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("one.bib");
    let mut file = File::create(&path).unwrap();
    write!(file, "{}", SAMPLE_BIB).unwrap();

    let db = BibDatabase::from_file(&path).unwrap();
    assert_eq!(db.len(), SAMPLE_BIB.len());
    assert!(!db.is_empty());
    assert!(db.get_entry("foo").is_some());
}

#[test]
fn test_empty_body_stops_at_own_brace() {
    let db = BibDatabase::from_string("@misc{empty,\n}\n\n@article{other,\n  title = {Other},\n}\n");

    assert_eq!(db.get_entry("empty").unwrap(), "@misc{empty,\n}");
    assert_eq!(db.get_entry("other").unwrap(), "@article{other,\n  title = {Other},\n}");
}

#[test]
fn test_empty_body_as_last_record() {
    let db = BibDatabase::from_string("@article{first,\n  year = {1999}\n}\n\n@misc{empty,\n}\n");
    assert_eq!(db.get_entry("empty").unwrap(), "@misc{empty,\n}");

    let db = BibDatabase::from_string("@misc{empty,\n}");
    assert_eq!(db.get_entry("empty").unwrap(), "@misc{empty,\n}");
}

#[test]
fn test_adjacent_records_without_blank_line() {
    let db = BibDatabase::from_string("@article{x,\n  title = {X},\n}\n@book{y,\n  title = {Y},\n}\n");

    assert_eq!(db.get_entry("x").unwrap(), "@article{x,\n  title = {X},\n}");
    assert_eq!(db.get_entry("y").unwrap(), "@book{y,\n  title = {Y},\n}");
}

#[test]
fn test_entry_count_skips_macro_blocks() {
    let bib = "@String{acm = \"ACM\"}\n@comment{ignored}\n@PREAMBLE{\"x\"}\n@article{a,\n  year = {1}\n}\n";
    assert_eq!(BibDatabase::from_string(bib).entry_count(), 1);
}
