use connman_cli::api::Environment;
use connman_cli::config::{Config, Profile};
use tempfile::tempdir;

fn profile(env: Environment, team_id: &str) -> Profile {
    Profile {
        environment: env,
        secret: "s3cret".to_string(),
        team_id: team_id.to_string(),
    }
}

#[test]
fn profiles_survive_a_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.upsert_profile("alpha".to_string(), profile(Environment::Dev, "T1"));
    config.upsert_profile("beta".to_string(), profile(Environment::Int, "T2"));
    config.select_profile("beta", 1_700_000_000).unwrap();
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded, config);
    let (active, profile) = reloaded.resolve_active_profile().unwrap();
    assert_eq!(active.selected, "beta");
    assert_eq!(active.authtime, 1_700_000_000);
    assert_eq!(profile.team_id, "T2");
}

#[test]
fn a_missing_config_file_loads_as_empty() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert!(config.active.is_none());
    assert!(config.profiles.is_empty());
}

#[test]
fn saving_creates_the_parent_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::default().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn a_garbled_config_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "profiles = \"not a table\"").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn profile_names_list_in_stable_order() {
    let mut config = Config::default();
    config.upsert_profile("zeta".to_string(), profile(Environment::Dev, "T1"));
    config.upsert_profile("alpha".to_string(), profile(Environment::Dep, "T2"));

    assert_eq!(config.profile_names(), vec!["alpha", "zeta"]);
}

#[test]
fn reselecting_updates_the_auth_time() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.upsert_profile("alpha".to_string(), profile(Environment::Dev, "T1"));
    config.select_profile("alpha", 100).unwrap();
    config.save_to(&path).unwrap();

    let mut reloaded = Config::load_from(&path).unwrap();
    reloaded.select_profile("alpha", 200).unwrap();
    reloaded.save_to(&path).unwrap();

    let latest = Config::load_from(&path).unwrap();
    assert_eq!(latest.active.unwrap().authtime, 200);
}

#[test]
fn environments_round_trip_through_their_codes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.upsert_profile("dep".to_string(), profile(Environment::Dep, "T1"));
    config.save_to(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("environment = \"dep\""));
    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.profile("dep").unwrap().environment, Environment::Dep);
}
