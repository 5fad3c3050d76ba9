use moovein::app_dirs::ConfigBaseGuard;
use moovein::config::{self, AppSettings, Theme};

#[test]
fn theme_choice_survives_restart() {
    let base = tempfile::tempdir().unwrap();
    let _guard = ConfigBaseGuard::set(base.path().to_path_buf());

    let mut settings = config::load_or_default().unwrap();
    assert_eq!(settings, AppSettings::default());
    settings.theme = settings.theme.toggled();
    config::save(&settings).unwrap();

    let reloaded = config::load_or_default().unwrap();
    assert_eq!(reloaded.theme, Theme::Light);
    assert!(config::config_path().unwrap().starts_with(base.path()));
}
