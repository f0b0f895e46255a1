use quant_utils::config::{get_config, init_config};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
#[serial]
fn test_get_config_falls_back_to_default_on_invalid_file() {
    env::remove_var("QUANT_ENV");
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("development.toml"),
        "[log]\nlevel = \"shout\"\nformat = \"pretty\"\n",
    )
    .unwrap();
    env::set_var("CONFIG_DIR", dir.path());

    let config = get_config();
    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.format, "pretty");
    assert_eq!(config.analytics.effective_periods_per_year(), 252.0);

    // 文件仍然無效，明確初始化會回報錯誤，全局配置維持預設值
    assert!(init_config().is_err());
    assert_eq!(get_config().log.level, "info");

    env::remove_var("CONFIG_DIR");
}
