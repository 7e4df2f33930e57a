use xor_decomp::{
    decompose::{DecomposeOptions, FragmentOrientation},
    ring,
    ring::PointRing,
};

fn main() {
    // set RUST_LOG=xor_decomp=trace to see each fragment as it is emitted
    env_logger::init();

    convex_ring();
    self_intersecting_ring();
    ring_with_pocket();
    custom_tolerances();
}

fn convex_ring() {
    let square = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    let result = square.xor_decompose();
    assert_eq!(
        result.trace.as_slice(),
        &[0, 1, 2, 3, -1],
        "Convex ring should be a single counter clockwise fragment"
    );
    assert_eq!(result.tree.node_count(), 1);
    println!("square trace: {:?}", result.trace.as_slice());
}

fn self_intersecting_ring() {
    let bowtie: PointRing = ring![(0.0, 0.0), (4.0, 4.0), (4.0, 0.0), (0.0, 4.0)];
    let result = bowtie.xor_decompose();
    assert_eq!(result.trace.fragment_count(), 2);

    for (i, fragment) in result.trace.iter_fragments().enumerate() {
        let orientation = match fragment.orientation() {
            FragmentOrientation::CounterClockwise => "CCW",
            FragmentOrientation::Clockwise => "CW",
        };
        let indexes: Vec<usize> = fragment.indexes().collect();
        println!(
            "bowtie fragment {}: {:?} {} area = {}",
            i,
            indexes,
            orientation,
            fragment.signed_area(&bowtie)
        );
    }

    // fragment areas always sum to the ring's signed area (zero for a symmetric bowtie)
    let total = result.trace.total_signed_area(&bowtie);
    assert!((total - bowtie.signed_area()).abs() < 1e-9);
}

fn ring_with_pocket() {
    let ring: PointRing = ring![
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
    println!(
        "pocket ring: {} fragments, tree depth {}",
        result.trace.fragment_count(),
        result.tree.max_depth()
    );
    for node in result.tree.iter_preorder() {
        println!(
            "  {:?} node with {} planes and {} children",
            node.node_type,
            node.planes.len(),
            node.children.len()
        );
    }
}

fn custom_tolerances() {
    // nearly collinear middle vertex is kept in the fragment with a loose collinear tolerance
    let ring = ring![(0.0, 0.0), (2.0, 1e-7), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    let options = DecomposeOptions {
        collinear_eps: 1e-5,
        plane_eps: 1e-5,
    };
    let result = ring.xor_decompose_opt(&options);
    assert_eq!(result.trace.as_slice(), &[0, 1, 2, 3, 4, -1]);
    println!("loose tolerance trace: {:?}", result.trace.as_slice());
}
