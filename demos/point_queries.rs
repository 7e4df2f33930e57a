use xor_decomp::{core::math::Vector2, ring};

fn main() {
    env_logger::init();

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

    let queries = [
        ((5.0, 5.0), false), // inside the pocket
        ((8.0, 5.0), true),
        ((1.0, 5.0), false), // inside the wedge cut from the left side
        ((1.0, 0.5), true),
        ((3.5, 9.0), true),
        ((12.0, 5.0), false),
    ];

    for ((x, y), expected) in queries {
        let point = Vector2::new(x, y);
        let inside = result.tree.is_point_in_or_on(point);
        // the tree only tests half planes but agrees with the even-odd rule on the ring itself
        assert_eq!(inside, expected, "query ({}, {})", x, y);
        assert_eq!(inside, ring.even_odd_contains(point));
        println!(
            "({}, {}) inside: {} (winding number {})",
            x,
            y,
            inside,
            ring.winding_number(point)
        );
    }
}
