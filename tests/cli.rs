use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const SAMPLE: &str = "\
1; Иванов; Иван; Иванович; ООО Ромашка; +7-495-123-4567; +7-916-123-4567
2; Petrov; Oleg; Sergeevich; Acme; +7-916-000-0000; +7-916-111-1111
3; Smirnova; Anna; Petrovna; ; +7-926-555-4433; +7-926-555-4434
";

fn yellowpages(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("yellowpages").unwrap();
    cmd.current_dir(home)
        .env("YELLOWPAGES_HOME", home)
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn menu_adds_record_and_writes_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    yellowpages(temp_dir.path())
        .write_stdin("1\nЁжиков\nАртём\nПетрович\nНИИ Связи\n8 (912) 345-67-89\n+7 903 000 11 22\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record added (1): Ежиков Артем Петрович"))
        .stdout(predicate::str::contains("Goodbye"));

    let text = fs::read_to_string(temp_dir.path().join("yellow_pages.txt")).unwrap();
    assert_eq!(
        text,
        "1; Ежиков; Артем; Петрович; НИИ Связи; +7-912-345-6789; +7-903-000-1122\n"
    );
}

#[test]
fn menu_reports_bad_input_without_exiting() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("yellow_pages.txt"), SAMPLE).unwrap();

    yellowpages(temp_dir.path())
        .write_stdin("7\n4\n1\nmany\n5\n2\n2\n99\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice, try again."))
        .stdout(predicate::str::contains("Not a number: many"))
        .stdout(predicate::str::contains("Record not found: 99"));
}

#[test]
fn search_matches_any_field() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("yellow_pages.txt"), SAMPLE).unwrap();

    yellowpages(temp_dir.path())
        .args(["search", "petrov"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Petrov Oleg Sergeevich"))
        .stdout(predicate::str::contains("Smirnova Anna Petrovna"))
        .stdout(predicate::str::contains("Иванов").not());

    yellowpages(temp_dir.path())
        .args(["search", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn list_pages_through_generated_records() {
    let temp_dir = tempfile::tempdir().unwrap();

    yellowpages(temp_dir.path())
        .args(["generate", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 25 generated records."));

    let text = fs::read_to_string(temp_dir.path().join("yellow_pages.txt")).unwrap();
    assert_eq!(text.lines().count(), 25);

    yellowpages(temp_dir.path())
        .args(["list", "--page", "3", "--page-size", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total records: 25  Total pages: 3"))
        .stdout(predicate::str::contains("Page 3/3 - records 21-25:"));
}

#[test]
fn show_missing_pk_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("yellow_pages.txt"), SAMPLE).unwrap();

    yellowpages(temp_dir.path())
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+7-916-111-1111"));

    yellowpages(temp_dir.path())
        .args(["show", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record with pk 42 not found."));
}

#[test]
fn file_flag_overrides_configured_data_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("office.txt"), SAMPLE).unwrap();

    yellowpages(temp_dir.path())
        .args(["--file", "office.txt", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smirnova Anna Petrovna"));
}

#[test]
fn config_sets_page_size_used_by_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("yellow_pages.txt"), SAMPLE).unwrap();

    yellowpages(temp_dir.path())
        .args(["config", "page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 2"));

    yellowpages(temp_dir.path())
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2/2 - records 3-3:"));

    yellowpages(temp_dir.path())
        .args(["config", "page-size", "none"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size must be a positive integer"));
}

#[test]
fn malformed_data_file_fails_at_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("yellow_pages.txt"),
        "1; Petrov; Oleg; Sergeevich; Acme; Ltd; +7-916-000-0000; +7-916-111-1111\n",
    )
    .unwrap();

    yellowpages(temp_dir.path())
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed line 1"));
}

#[test]
fn zero_page_size_in_config_file_uses_default() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("yellow_pages.txt"), SAMPLE).unwrap();
    fs::write(temp_dir.path().join("config.json"), r#"{"page_size": 0}"#).unwrap();

    yellowpages(temp_dir.path())
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));

    yellowpages(temp_dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1/1 - records 1-3:"));
}
