/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                use $crate::core::traits::FuzzyEq;
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                use $crate::core::traits::FuzzyEq;
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the ring macro. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a [PointRing](crate::ring::PointRing) with the points given as a list of (x, y)
/// tuples.
///
/// # Examples
///
/// ```
/// # use xor_decomp::ring;
/// # use xor_decomp::core::math::Vector2;
/// let ring = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)];
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring[1], Vector2::new(4.0, 0.0));
/// ```
#[macro_export]
macro_rules! ring {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut r = $crate::ring::PointRing::with_capacity(size);
            $(
                r.add($x.0, $x.1);
            )*
            r
        }
    };
}
