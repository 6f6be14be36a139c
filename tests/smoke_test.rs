/// End-to-end smoke test of the CLI binary against a stock config file,
/// covering the conversion modes and self-test without any network I/O.
use assert_cmd::Command;
use std::io::Write;

const STOCK_INI: &str = r#"
[DEFAULT]
ArkResolverHost = ark.dasch.swiss
ArkNaan = 72163
TopLevelObjectUrl = http://dasch.swiss
LocalServerHost = 0.0.0.0
LocalServerPort = 3336

[0001]
Host = 0.0.0.0:3333
UsePhp = false
KnoraProjectIri = http://rdfh.ch/projects/$project_id
KnoraResourceIri = http://rdfh.ch/$project_id/$resource_id
KnoraProjectRedirectUrl = http://$host/admin/projects/$project_iri
KnoraResourceRedirectUrl = http://$host/v2/resources/$resource_iri
KnoraResourceVersionRedirectUrl = http://$host/v2/resources/$resource_iri?version=$timestamp

[0803]
Host = data.dasch.swiss
UsePhp = true
PhpResourceRedirectUrl = http://$host/resources/$resource_int_id
PhpResourceVersionRedirectUrl = http://$host/resources/$resource_int_id?citdate=$timestamp
"#;

fn config_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(STOCK_INI.as_bytes()).unwrap();
    file
}

#[test]
fn test_cli_self_test_passes() {
    Command::cargo_bin("ark-resolver")
        .unwrap()
        .arg("--test")
        .assert()
        .success();
}

#[test]
fn test_cli_ark_mode_prints_redirect() {
    let config = config_file();
    Command::cargo_bin("ark-resolver")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap()])
        .arg("--ark")
        .arg("http://ark.dasch.swiss/ark:/72163/1")
        .assert()
        .success()
        .stdout("http://dasch.swiss\n");
}

#[test]
fn test_cli_iri_mode_prints_ark_url() {
    let config = config_file();
    Command::cargo_bin("ark-resolver")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap()])
        .arg("--iri")
        .arg("http://rdfh.ch/0001/cmfk1DMHRBiR4-_6HXpEFA")
        .assert()
        .success()
        .stdout("http://ark.dasch.swiss/ark:/72163/1/0001/cmfk1DMHRBiR4=_6HXpEFAn\n");
}

#[test]
fn test_cli_number_mode_requires_project() {
    let config = config_file();
    Command::cargo_bin("ark-resolver")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap()])
        .arg("--number")
        .arg("1")
        .assert()
        .failure();
}

#[test]
fn test_cli_unknown_project_fails() {
    let config = config_file();
    Command::cargo_bin("ark-resolver")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap()])
        .arg("--ark")
        .arg("http://ark.dasch.swiss/ark:/72163/1/9999")
        .assert()
        .failure();
}

#[test]
fn test_cli_date_without_iri_or_number_fails() {
    let config = config_file();
    Command::cargo_bin("ark-resolver")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap()])
        .arg("--ark")
        .arg("http://ark.dasch.swiss/ark:/72163/1")
        .args(["--date", "20190118T102919000031660Z"])
        .assert()
        .failure();
}

#[test]
fn test_cli_date_with_iri_succeeds() {
    let config = config_file();
    Command::cargo_bin("ark-resolver")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap()])
        .arg("--iri")
        .arg("http://rdfh.ch/0001/cmfk1DMHRBiR4-_6HXpEFA")
        .args(["--date", "20190118T102919000031660Z"])
        .assert()
        .success()
        .stdout(
            "http://ark.dasch.swiss/ark:/72163/1/0001/cmfk1DMHRBiR4=_6HXpEFAn.20190118T102919000031660Z\n",
        );
}
