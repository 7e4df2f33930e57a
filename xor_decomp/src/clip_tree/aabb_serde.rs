//! Serializes [AABB] extents as `[minX, minY, maxX, maxY]`.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use static_aabb2d_index::AABB;

use crate::core::traits::Real;

pub fn serialize<S, T>(extents: &AABB<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Real + Serialize,
{
    [extents.min_x, extents.min_y, extents.max_x, extents.max_y].serialize(serializer)
}

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<AABB<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Real + Deserialize<'de>,
{
    let [min_x, min_y, max_x, max_y] = <[T; 4]>::deserialize(deserializer)?;
    Ok(AABB {
        min_x,
        min_y,
        max_x,
        max_y,
    })
}
