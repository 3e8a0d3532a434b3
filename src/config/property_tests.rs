//! Property-based tests for configuration module
//!
//! These tests use proptest to generate random configurations and verify
//! validation invariants and TOML round-trips.

use super::*;
use proptest::prelude::*;

// Strategy for generating valid window configurations
prop_compose! {
    fn valid_window_config()(
        min_width in 50.0f64..800.0,
        min_height in 100.0f64..600.0,
        maximize_margin in 0.0f64..100.0,
        titlebar_height in 10.0f64..90.0,
        border_width in 1.0f64..10.0,
        extra_corner in 0.0f64..6.0,
    ) -> WindowConfig {
        WindowConfig {
            min_width,
            min_height,
            maximize_margin,
            titlebar_height,
            corner_size: border_width + extra_corner,
            border_width,
        }
    }
}

prop_compose! {
    fn valid_layout_config()(
        origin_x in 0.0f64..500.0,
        origin_y in 0.0f64..500.0,
        stagger in 0.0f64..100.0,
        base_z_index in 0u64..10_000,
    ) -> LayoutConfig {
        LayoutConfig {
            origin_x,
            origin_y,
            stagger,
            base_z_index,
        }
    }
}

prop_compose! {
    fn valid_viewport_config()(
        width in 100.0f64..8000.0,
        height in 100.0f64..8000.0,
    ) -> ViewportConfig {
        ViewportConfig { width, height }
    }
}

prop_compose! {
    fn valid_desktop_config()(
        window in valid_window_config(),
        layout in valid_layout_config(),
        viewport in valid_viewport_config(),
        debug in any::<bool>(),
    ) -> DesktopConfig {
        DesktopConfig {
            window,
            layout,
            viewport,
            bindings: BindingsConfig::default(),
            general: GeneralConfig { debug },
        }
    }
}

proptest! {
    #[test]
    fn prop_generated_configs_validate(config in valid_desktop_config()) {
        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn prop_toml_roundtrip_preserves_config(config in valid_desktop_config()) {
        let toml_string = toml::to_string(&config).unwrap();
        let parsed: DesktopConfig = toml::from_str(&toml_string).unwrap();
        prop_assert_eq!(parsed, config);
    }

    #[test]
    fn prop_nonpositive_viewport_rejected(
        config in valid_desktop_config(),
        width in -1000.0f64..=0.0,
    ) {
        let mut config = config;
        config.viewport.width = width;
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn prop_non_finite_window_values_rejected(
        config in valid_desktop_config(),
        field in 0usize..5,
        value in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
    ) {
        let mut config = config;
        match field {
            0 => config.window.min_width = value,
            1 => config.window.min_height = value,
            2 => config.window.maximize_margin = value,
            3 => config.window.titlebar_height = value,
            _ => config.window.border_width = value,
        }
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn prop_merge_with_default_is_identity(config in valid_desktop_config()) {
        let merged = config.clone().merge_partial(DesktopConfig::default());
        prop_assert_eq!(merged, config);
    }
}
