//! Integration tests for loading and saving the configuration file.

use std::fs;

use mosaic::config::{Config, ThemeMode};
use mosaic::controller::InteractionController;
use mosaic::models::RgbColor;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_then_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.palette.colors = vec![RgbColor::new(1, 2, 3), RgbColor::new(200, 100, 50)];
    config.border.thickness_px = 2;
    config.grid.tile_density = 5;
    config.ui.theme_mode = ThemeMode::Light;

    config.save_to(&path).unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("toml.tmp").exists());

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_colors_are_written_as_hex() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");

    Config::default().save_to(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("#FF5938"));
    assert!(content.contains("#E8E8E8"));
    assert!(content.contains("canvas_density = 20"));
}

#[test]
fn test_partial_sections_fill_in_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[grid]\ntile_density = 5\n\n[border]\nthickness_px = 3\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.grid.tile_density, 5);
    assert_eq!(config.grid.tile_density_min, 2);
    assert_eq!(config.grid.tile_density_max, 10);
    assert_eq!(config.grid.canvas_density, 20);
    assert_eq!(config.border.thickness_px, 3);
    assert_eq!(config.border.color, Config::default().border.color);
    assert_eq!(config.palette, Config::default().palette);
}

#[test]
fn test_unparsable_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[grid\ntile_density = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));
}

#[test]
fn test_bad_color_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[border]\ncolor = \"chartreuse\"\nthickness_px = 1\n").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_invalid_values_are_rejected_on_load_and_save() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "[grid]\ntile_density = 12\ntile_density_min = 2\ntile_density_max = 10\ncanvas_density = 20\n",
    )
    .unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid config file"));

    let mut config = Config::default();
    config.palette.colors.clear();
    assert!(config.save_to(&temp_dir.path().join("other.toml")).is_err());
}

#[test]
fn test_loaded_config_drives_the_editor() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r##"
[palette]
colors = ["#000000", "#FFFFFF"]

[grid]
tile_density = 4
tile_density_min = 2
tile_density_max = 6
canvas_density = 12
"##,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let editor = InteractionController::new(&config);

    assert_eq!(editor.palette().len(), 2);
    assert!(editor.board().tiles().iter().all(|tile| tile.density() == 4));
    assert_eq!(editor.board().canvas().cells().len(), 144);
    assert_eq!(editor.factory().tile_density_range(), (2, 6));
}
