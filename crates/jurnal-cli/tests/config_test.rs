use jurnal_testing::TestWorld;
use jurnal_testing::world::UNREACHABLE_API;
use predicates::prelude::*;

#[test]
fn test_help_lists_entities() {
    let world = TestWorld::new();
    let result = world.run(&["--help"]).unwrap();
    assert!(result.success());
    for name in ["login", "dashboard", "kelas", "mapel", "siswa", "jadwal", "jurnal"] {
        assert!(result.stdout.contains(name), "help is missing {}", name);
    }
}

#[test]
fn test_config_show_json() {
    let world = TestWorld::new();
    let json = world
        .run(&["config", "show", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();

    let content = &json["content"];
    assert_eq!(content["config"]["api_base_url"], UNREACHABLE_API);
    assert_eq!(content["config"]["page_size"], 10);
    assert_eq!(content["config"]["utc_offset_minutes"], 420);
    assert!(content["path"].as_str().unwrap().ends_with("config.toml"));
}

#[test]
fn test_config_set_persists() {
    let world = TestWorld::new();
    let result = world.run(&["config", "set", "page_size", "25"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Set page_size"));

    let json = world
        .run(&["config", "show", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["config"]["page_size"], 25);
}

#[test]
fn test_config_set_rejects_bad_input() {
    let world = TestWorld::new();
    world
        .command()
        .unwrap()
        .args(["config", "set", "theme", "dark"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key: theme"));

    world
        .command()
        .unwrap()
        .args(["config", "set", "page_size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size must be greater than 0"));
}

#[test]
fn test_api_url_override_is_not_saved() {
    let world = TestWorld::new();
    let json = world
        .run(&["config", "show", "--format", "json", "--api-url", "https://sekolah.example/api/"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["config"]["api_base_url"], "https://sekolah.example/api");

    let saved = std::fs::read_to_string(world.data_dir().join("config.toml")).unwrap();
    assert!(saved.contains(UNREACHABLE_API));
}

#[test]
fn test_plain_config_show() {
    let world = TestWorld::new();
    world
        .command()
        .unwrap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("api_base_url         {}", UNREACHABLE_API)));
}

#[test]
fn test_broken_config_can_still_be_repaired() {
    let world = TestWorld::new();
    let path = world.data_dir().join("config.toml");
    std::fs::write(
        &path,
        format!("api_base_url = \"{}\"\npage_size = 0\ntimeout_secs = 0\n", UNREACHABLE_API),
    )
    .unwrap();

    let json = world
        .run(&["config", "show", "--format", "json"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["config"]["page_size"], 10);
    assert_eq!(json["content"]["config"]["timeout_secs"], 30);

    let result = world.run(&["config", "set", "page_size", "15"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("page_size = 15"));
    assert!(saved.contains("timeout_secs = 30"));
}
