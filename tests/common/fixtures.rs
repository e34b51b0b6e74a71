//! Manifest fixtures

/// Build a manifest JSON document from `(chunk, files)` pairs.
///
/// A chunk with one file is written as a plain string, matching what bundlers
/// emit for single-asset chunks.
pub fn manifest_json(chunks: &[(&str, &[&str])]) -> String {
    let entries: Vec<String> = chunks
        .iter()
        .map(|(name, files)| {
            let value = match files {
                [single] => format!("\"{}\"", single),
                many => format!(
                    "[{}]",
                    many.iter()
                        .map(|f| format!("\"{}\"", f))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            };
            format!("    \"{}\": {}", name, value)
        })
        .collect();

    format!(
        "{{\n  \"assetsByChunkName\": {{\n{}\n  }}\n}}\n",
        entries.join(",\n")
    )
}

/// Manifest of the first build
pub fn first_build() -> String {
    manifest_json(&[
        ("app", &["js/app.1a2b.js", "css/app.1a2b.css"][..]),
        ("vendor", &["js/vendor.9f8e.js"][..]),
    ])
}

/// Manifest of the second build: `app` changed, `vendor` did not
pub fn second_build() -> String {
    manifest_json(&[
        ("app", &["js/app.3c4d.js", "css/app.3c4d.css"][..]),
        ("vendor", &["js/vendor.9f8e.js"][..]),
    ])
}

/// Every output of both builds
pub const ALL_OUTPUTS: &[&str] = &[
    "js/app.1a2b.js",
    "css/app.1a2b.css",
    "js/app.3c4d.js",
    "css/app.3c4d.css",
    "js/vendor.9f8e.js",
];
