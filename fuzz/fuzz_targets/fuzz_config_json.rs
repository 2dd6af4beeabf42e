#![no_main]

use libfuzzer_sys::fuzz_target;
use pinmap::config::AppConfig;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the config parser, and any config
    // that parses must come out of sanitize() within its valid ranges
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(mut config) = serde_json::from_str::<AppConfig>(s)
    {
        config.sanitize();
        assert!(config.canvas.width > 0.0 && config.canvas.height > 0.0);
        assert!(config.label.font_size > 0.0);
        assert!(!config.sanitize(), "sanitize must be idempotent");
    }
});
