#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Manifest parsing must never panic; a parsed manifest must flatten
        if let Ok(manifest) = assetprune::Manifest::from_json(content) {
            let _ = manifest.files().count();
        }
    }
});
