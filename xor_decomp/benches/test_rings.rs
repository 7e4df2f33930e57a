use xor_decomp::{
    core::{math::Vector2, traits::Real},
    ring::PointRing,
};

/// Star with alternating inner and outer radius, every other vertex is reflex.
pub fn star<T>(vertex_count: usize) -> PointRing<T>
where
    T: Real,
{
    let outer = T::from(40.0).unwrap();
    let inner = T::from(20.0).unwrap();
    let tau = T::from(std::f64::consts::TAU).unwrap();
    let mut result = PointRing::with_capacity(vertex_count);
    for i in 0..vertex_count {
        let angle = T::from(i).unwrap() * tau / T::from(vertex_count).unwrap();
        let radius = if i % 2 == 0 { outer } else { inner };
        result.add(radius * angle.cos(), radius * angle.sin());
    }

    result
}

/// Square spiral winding inward along one track and back out along a parallel one.
pub fn spiral<T>(turn_count: usize) -> PointRing<T>
where
    T: Real,
{
    let mut outward = Vec::with_capacity(turn_count * 4);
    let mut inward = Vec::with_capacity(turn_count * 4);
    let mut r = T::from(turn_count * 4 + 4).unwrap();
    let step = T::one();
    for _ in 0..turn_count {
        outward.push(Vector2::new(-r, -r));
        outward.push(Vector2::new(r, -r));
        outward.push(Vector2::new(r, r));
        outward.push(Vector2::new(-r + step + step, r));
        let ri = r - step;
        inward.push(Vector2::new(-ri, -ri));
        inward.push(Vector2::new(ri, -ri));
        inward.push(Vector2::new(ri, ri));
        inward.push(Vector2::new(-ri + step + step, ri));
        r = r - step - step - step - step;
    }

    outward.into_iter().chain(inward.into_iter().rev()).collect()
}

/// Closed zig-zag that crosses itself at every vertex pair.
pub fn zig_zag<T>(vertex_count: usize) -> PointRing<T>
where
    T: Real,
{
    let mut result = PointRing::with_capacity(vertex_count);
    for i in 0..vertex_count {
        let x = T::from(i % (vertex_count / 2).max(1)).unwrap();
        let y = if i % 2 == 0 { T::zero() } else { T::from(10.0).unwrap() };
        let y = if i >= vertex_count / 2 { y + T::from(3.0).unwrap() } else { y };
        result.add(x, y);
    }

    result
}
