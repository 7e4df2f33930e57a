//! This module contains the C foreign function interface for xor_decomp.
#![allow(non_camel_case_types)]
use core::slice;
use std::panic;
use xor_decomp::{
    core::math::Vector2, decompose::IndexTrace, ring::PointRing, DecomposeOptions,
    XorDecomposition,
};

mod error_handling;

use error_handling::{clear_last_error, set_last_error, LAST_ERROR};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct xord_point {
    pub x: f64,
    pub y: f64,
}

impl xord_point {
    pub fn new(x: f64, y: f64) -> Self {
        xord_point { x, y }
    }

    pub fn from_internal(v: Vector2<f64>) -> Self {
        xord_point::new(v.x, v.y)
    }

    pub fn to_internal(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// FFI representation of [DecomposeOptions].
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct xord_decompose_o {
    pub collinear_eps: f64,
    pub plane_eps: f64,
}

impl xord_decompose_o {
    /// Convert FFI decompose options type to internal type.
    pub fn to_internal(&self) -> DecomposeOptions<f64> {
        DecomposeOptions {
            collinear_eps: self.collinear_eps,
            plane_eps: self.plane_eps,
        }
    }
}

impl Default for xord_decompose_o {
    fn default() -> Self {
        let d = DecomposeOptions::default();
        Self {
            collinear_eps: d.collinear_eps,
            plane_eps: d.plane_eps,
        }
    }
}

/// Write default option values to a [xord_decompose_o].
///
/// ## Specific Error Codes
/// * 1 = `options` is null.
///
/// # Safety
///
/// `options` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn xord_decompose_o_init(options: *mut xord_decompose_o) -> i32 {
    ffi_catch_unwind!({
        if options.is_null() {
            return 1;
        }

        options.write(Default::default());
        0
    })
}

/// Opaque type that wraps a [XorDecomposition] (the index trace and clip plane tree).
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct xord_decomposition(pub XorDecomposition<f64>);

/// Decompose a closed ring of points into convex XOR fragments.
///
/// `points` is an array of [xord_point] holding the ring vertexes in order (may be null if
/// `n_points` is 0), the ring is implicitly closed.
/// `n_points` contains the number of points in the array.
/// `options` is allowed to be null (default options will be used).
/// `decomposition` is an out parameter to hold the created decomposition.
///
/// Rings with fewer than 3 points give an empty decomposition (no fragments, query always false).
///
/// ## Specific Error Codes
/// * 1 = `points` is null and `n_points` is not 0.
///
/// # Safety
///
/// `points` must be null or a valid pointer to a contiguous array of [xord_point] with at least
/// `n_points` elements. `options` must be null or point to a valid [xord_decompose_o].
/// `decomposition` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn xord_decompose(
    points: *const xord_point,
    n_points: u32,
    options: *const xord_decompose_o,
    decomposition: *mut *const xord_decomposition,
) -> i32 {
    ffi_catch_unwind!({
        if points.is_null() && n_points != 0 {
            return 1;
        }

        let mut ring = PointRing::with_capacity(n_points as usize);
        if n_points != 0 {
            for p in slice::from_raw_parts(points, n_points as usize) {
                ring.add(p.x, p.y);
            }
        }

        let opts = options
            .as_ref()
            .map(|o| o.to_internal())
            .unwrap_or_default();

        let result = xor_decomp::decompose_opt(&ring, &opts);
        decomposition.write(Box::into_raw(Box::new(xord_decomposition(result))));
        0
    })
}

/// Free an existing [xord_decomposition] object.
///
/// Nothing happens if `decomposition` is null.
///
/// # Safety
///
/// `decomposition` must be null or a valid [xord_decomposition] object that was created with
/// [xord_decompose] and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn xord_decomposition_f(decomposition: *mut xord_decomposition) {
    if !decomposition.is_null() {
        drop(Box::from_raw(decomposition))
    }
}

/// Get the number of values (indexes and sentinels) in the decomposition's index trace.
///
/// ## Specific Error Codes
/// * 1 = `decomposition` is null.
///
/// # Safety
///
/// `decomposition` must be null or a valid [xord_decomposition] object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn xord_decomposition_get_trace_count(
    decomposition: *const xord_decomposition,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if decomposition.is_null() {
            return 1;
        }

        count.write((*decomposition).0.trace.len() as u32);
        0
    })
}

/// Copy the decomposition's index trace into a buffer.
///
/// Non-negative values are ring vertex indexes, `-1` closes a counter clockwise fragment and `-2`
/// closes a clockwise fragment.
///
/// ## Specific Error Codes
/// * 1 = `decomposition` is null.
///
/// # Safety
///
/// `decomposition` must be null or a valid [xord_decomposition] object.
/// `data` must point to a buffer large enough to hold the number of values returned by
/// [xord_decomposition_get_trace_count].
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn xord_decomposition_get_trace_data(
    decomposition: *const xord_decomposition,
    data: *mut i32,
) -> i32 {
    ffi_catch_unwind!({
        if decomposition.is_null() {
            return 1;
        }

        let trace = (*decomposition).0.trace.as_slice();
        data.copy_from_nonoverlapping(trace.as_ptr(), trace.len());
        0
    })
}

/// Get the number of convex fragments in the decomposition.
///
/// ## Specific Error Codes
/// * 1 = `decomposition` is null.
///
/// # Safety
///
/// `decomposition` must be null or a valid [xord_decomposition] object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn xord_decomposition_get_fragment_count(
    decomposition: *const xord_decomposition,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if decomposition.is_null() {
            return 1;
        }

        count.write((*decomposition).0.trace.fragment_count() as u32);
        0
    })
}

/// Get the number of nodes in the decomposition's clip plane tree.
///
/// ## Specific Error Codes
/// * 1 = `decomposition` is null.
///
/// # Safety
///
/// `decomposition` must be null or a valid [xord_decomposition] object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn xord_decomposition_get_node_count(
    decomposition: *const xord_decomposition,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if decomposition.is_null() {
            return 1;
        }

        count.write((*decomposition).0.tree.node_count() as u32);
        0
    })
}

/// Classify a point against the decomposition's clip plane tree.
///
/// `result` is set to 1 if the point is in or on the ring's even-odd interior, otherwise 0.
///
/// ## Specific Error Codes
/// * 1 = `decomposition` is null.
///
/// # Safety
///
/// `decomposition` must be null or a valid [xord_decomposition] object.
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn xord_decomposition_is_point_in_or_on(
    decomposition: *const xord_decomposition,
    point: xord_point,
    result: *mut u8,
) -> i32 {
    ffi_catch_unwind!({
        if decomposition.is_null() {
            return 1;
        }

        let inside = (*decomposition)
            .0
            .tree
            .is_point_in_or_on(point.to_internal());
        result.write(inside as u8);
        0
    })
}

/// Validate raw index trace data against a ring with `vertex_count` vertexes.
///
/// `data` may be null if `count` is 0 (an empty trace is valid). On failure the reason is
/// available from [xord_last_error_msg].
///
/// ## Specific Error Codes
/// * 1 = `data` is null and `count` is not 0.
/// * 2 = trace data is invalid.
///
/// # Safety
///
/// `data` must be null or a valid pointer to a contiguous array of at least `count` values.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn xord_trace_validate(
    data: *const i32,
    count: u32,
    vertex_count: u32,
) -> i32 {
    ffi_catch_unwind!({
        if data.is_null() && count != 0 {
            return 1;
        }

        let values = if count == 0 {
            Vec::new()
        } else {
            slice::from_raw_parts(data, count as usize).to_vec()
        };

        match IndexTrace::try_from_raw(values, vertex_count as usize) {
            Ok(_) => {
                clear_last_error();
                0
            }
            Err(e) => {
                set_last_error(e.to_string());
                2
            }
        }
    })
}

/// Copy the last error message set on the calling thread into a buffer.
///
/// `msg_len` is written with the length of the message in bytes (not including the null
/// terminator). If `buffer` is not null then up to `buffer_len - 1` bytes of the message are
/// copied into it followed by a null terminator.
///
/// ## Specific Error Codes
/// * 1 = `msg_len` is null.
/// * 2 = no error has been set on the calling thread.
///
/// # Safety
///
/// `buffer` must be null or point to at least `buffer_len` writable bytes.
/// `msg_len` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn xord_last_error_msg(
    buffer: *mut u8,
    buffer_len: u32,
    msg_len: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if msg_len.is_null() {
            return 1;
        }

        LAST_ERROR.with(|last_error| {
            let last_error = last_error.borrow();
            let Some(err) = last_error.as_ref() else {
                return 2;
            };

            let bytes = err.error_msg.as_bytes();
            msg_len.write(bytes.len() as u32);
            if !buffer.is_null() && buffer_len != 0 {
                let copy_len = bytes.len().min(buffer_len as usize - 1);
                buffer.copy_from_nonoverlapping(bytes.as_ptr(), copy_len);
                buffer.add(copy_len).write(0);
            }
            0
        })
    })
}
