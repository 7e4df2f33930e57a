use xor_decomp::{decompose::IndexTrace, ring::PointRing};

/// Helper function to create json string from a ring and its trace to be used for debugging.
pub fn to_debug_json_str(ring: &PointRing, trace: &IndexTrace) -> String {
    format!(
        r#"
{{
    "points": [
        {}
    ],
    "trace": {:?}
}}
"#,
        ring.iter()
            .map(|p| format!("[{}, {}]", p.x, p.y))
            .collect::<Vec<_>>()
            .join(",\n        "),
        trace.as_slice()
    )
}
