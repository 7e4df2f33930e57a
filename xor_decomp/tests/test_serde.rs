#![cfg(feature = "serde")]

use xor_decomp::{
    clip_tree::ClipPlaneTree,
    core::math::Vector2,
    decompose::{DecomposeOptions, IndexTrace},
    ring,
    ring::PointRing,
    XorDecomposition,
};

#[test]
fn ring_json() {
    let ring = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)];
    let json = serde_json::to_string(&ring).unwrap();
    assert_eq!(
        json,
        r#"{"points":[{"x":0.0,"y":0.0},{"x":4.0,"y":0.0},{"x":4.0,"y":4.0}]}"#
    );
    let parsed: PointRing = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.points, ring.points);
}

#[test]
fn trace_is_raw_integers() {
    let ring = ring![(0.0, 0.0), (4.0, 4.0), (4.0, 0.0), (0.0, 4.0)];
    let trace = ring.xor_decompose().trace;
    let json = serde_json::to_string(&trace).unwrap();
    assert_eq!(json, "[0,2,3,-1,0,1,2,-2]");
    let parsed: IndexTrace = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, trace);
}

#[test]
fn options_use_camel_case() {
    let options = DecomposeOptions {
        collinear_eps: 0.5,
        plane_eps: 0.25,
    };
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(json, r#"{"collinearEps":0.5,"planeEps":0.25}"#);
    let parsed: DecomposeOptions<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, options);
}

#[test]
fn decomposition_round_trip_classifies_the_same() {
    let ring = ring![
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (3.0, 4.0),
        (3.0, 7.0),
        (7.0, 7.0),
        (7.0, 3.0),
        (3.0, 3.0)
    ];
    let result = ring.xor_decompose();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains(r#""nodeType":"Difference""#));
    assert!(json.contains(r#""extents":[0.0,0.0,10.0,10.0]"#));
    let parsed: XorDecomposition = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.trace, result.trace);
    assert_eq!(parsed.tree.node_count(), result.tree.node_count());
    for &(x, y) in [(5.0, 5.0), (8.0, 5.0), (1.0, 0.5), (1.0, 5.0)].iter() {
        let p = Vector2::new(x, y);
        assert_eq!(
            parsed.tree.is_point_in_or_on(p),
            result.tree.is_point_in_or_on(p)
        );
    }
}

#[test]
fn empty_tree_json() {
    let tree = ClipPlaneTree::<f64>::empty(1e-8);
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, r#"{"root":null,"planeEps":1e-8}"#);
}
