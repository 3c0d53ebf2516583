//! 4x4 Matrix utilities for 3D and 4D transformations
//!
//! The same [`Mat4`] type serves two roles:
//! - an ordinary homogeneous 3D transform (model, view, projection)
//! - a linear transform of genuine 4D vectors (4D rotations, the 4D view basis),
//!   with no homogeneous fifth coordinate
//!
//! ## Layout
//!
//! Matrices are column-major: `m[col][row]`. Vectors are column vectors, so
//! [`transform`] computes `M * v` and [`mul`]`(a, b)` applies `b` first. This
//! is the layout uploaded to the GPU as-is.

use crate::{Vec3, Vec4};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in a specific 2D plane within 4D space.
///
/// Positive angles rotate axis `p1` toward axis `p2`; the two remaining axes
/// are left fixed.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z, 3=W)
///
/// # Example
/// ```
/// use hyperview_math::mat4::plane_rotation;
/// // Rotate X toward Y (the XY plane)
/// let m = plane_rotation(0.5, 0, 1);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Classical 3D rotation about the X axis (Y toward Z)
pub fn from_x_rotation(radians: f32) -> Mat4 {
    let c = radians.cos();
    let s = radians.sin();
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, s, 0.0],
        [0.0, -s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Classical 3D rotation about the Y axis (Z toward X)
pub fn from_y_rotation(radians: f32) -> Mat4 {
    let c = radians.cos();
    let s = radians.sin();
    [
        [c, 0.0, -s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Classical 3D rotation about the Z axis (X toward Y)
pub fn from_z_rotation(radians: f32) -> Mat4 {
    let c = radians.cos();
    let s = radians.sin();
    [
        [c, s, 0.0, 0.0],
        [-s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Homogeneous 3D translation
pub fn translation(offset: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3] = [offset.x, offset.y, offset.z, 1.0];
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Get a column vector from a matrix
pub fn get_column(m: Mat4, col: usize) -> Vec4 {
    Vec4::new(m[col][0], m[col][1], m[col][2], m[col][3])
}

/// Get a row vector from a matrix
pub fn get_row(m: Mat4, row: usize) -> Vec4 {
    Vec4::new(m[0][row], m[1][row], m[2][row], m[3][row])
}

/// Build a matrix from four column vectors
pub fn from_columns(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Mat4 {
    [c0.to_array(), c1.to_array(), c2.to_array(), c3.to_array()]
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

// 2x2 minors shared by determinant and inverse
struct Minors {
    b: [f32; 12],
}

impl Minors {
    fn of(m: &Mat4) -> Self {
        let b = [
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
            m[0][0] * m[1][2] - m[0][2] * m[1][0],
            m[0][0] * m[1][3] - m[0][3] * m[1][0],
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
            m[0][1] * m[1][3] - m[0][3] * m[1][1],
            m[0][2] * m[1][3] - m[0][3] * m[1][2],
            m[2][0] * m[3][1] - m[2][1] * m[3][0],
            m[2][0] * m[3][2] - m[2][2] * m[3][0],
            m[2][0] * m[3][3] - m[2][3] * m[3][0],
            m[2][1] * m[3][2] - m[2][2] * m[3][1],
            m[2][1] * m[3][3] - m[2][3] * m[3][1],
            m[2][2] * m[3][3] - m[2][3] * m[3][2],
        ];
        Self { b }
    }

    fn determinant(&self) -> f32 {
        let b = &self.b;
        b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7] + b[5] * b[6]
    }
}

/// Determinant of a matrix
pub fn determinant(m: Mat4) -> f32 {
    Minors::of(&m).determinant()
}

/// Invert a matrix, returning `None` when it is singular
pub fn inverse(m: Mat4) -> Option<Mat4> {
    let minors = Minors::of(&m);
    let det = minors.determinant();
    if det == 0.0 {
        return None;
    }
    let inv = 1.0 / det;
    let b = &minors.b;

    Some([
        [
            (m[1][1] * b[11] - m[1][2] * b[10] + m[1][3] * b[9]) * inv,
            (m[0][2] * b[10] - m[0][1] * b[11] - m[0][3] * b[9]) * inv,
            (m[3][1] * b[5] - m[3][2] * b[4] + m[3][3] * b[3]) * inv,
            (m[2][2] * b[4] - m[2][1] * b[5] - m[2][3] * b[3]) * inv,
        ],
        [
            (m[1][2] * b[8] - m[1][0] * b[11] - m[1][3] * b[7]) * inv,
            (m[0][0] * b[11] - m[0][2] * b[8] + m[0][3] * b[7]) * inv,
            (m[3][2] * b[2] - m[3][0] * b[5] - m[3][3] * b[1]) * inv,
            (m[2][0] * b[5] - m[2][2] * b[2] + m[2][3] * b[1]) * inv,
        ],
        [
            (m[1][0] * b[10] - m[1][1] * b[8] + m[1][3] * b[6]) * inv,
            (m[0][1] * b[8] - m[0][0] * b[10] - m[0][3] * b[6]) * inv,
            (m[3][0] * b[4] - m[3][1] * b[2] + m[3][3] * b[0]) * inv,
            (m[2][1] * b[2] - m[2][0] * b[4] - m[2][3] * b[0]) * inv,
        ],
        [
            (m[1][1] * b[7] - m[1][0] * b[9] - m[1][2] * b[6]) * inv,
            (m[0][0] * b[9] - m[0][1] * b[7] + m[0][2] * b[6]) * inv,
            (m[3][1] * b[1] - m[3][0] * b[3] - m[3][2] * b[0]) * inv,
            (m[2][0] * b[3] - m[2][1] * b[1] + m[2][2] * b[0]) * inv,
        ],
    ])
}

/// Symmetric perspective frustum (OpenGL clip-space convention)
///
/// # Arguments
/// * `fov_y` - Vertical field of view in radians
/// * `aspect` - Viewport width / height
/// * `near`, `far` - Clip plane distances
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (far + near) * nf, -1.0],
        [0.0, 0.0, 2.0 * far * near * nf, 0.0],
    ]
}

/// Right-handed look-at view matrix
///
/// forward = normalize(target - eye), right = normalize(forward x up),
/// true up = right x forward. The camera looks down its local -Z.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

/// The orthonormal 4D look-at basis `[wa, wb, wc, wd]`
///
/// `wd` points from `position` toward `target`. One up-vector cannot pin down
/// a 4D frame, so `over` supplies the second reference direction:
/// - wa = normalize(cross4(up, over, wd))
/// - wb = normalize(cross4(over, wd, wa))
/// - wc = cross4(wd, wa, wb), already unit length
pub fn look_at_4d_basis(position: Vec4, target: Vec4, up: Vec4, over: Vec4) -> [Vec4; 4] {
    let wd = (target - position).normalized();
    let wa = Vec4::cross4(up, over, wd).normalized();
    let wb = Vec4::cross4(over, wd, wa).normalized();
    let wc = Vec4::cross4(wd, wa, wb);

    [wa, wb, wc, wd]
}

/// 4D look-at view matrix
///
/// Columns are `wa, wb, wc, wd` in that order. Column 3 (`wd`) is the depth
/// axis consumed by the 4D perspective divide.
pub fn look_at_4d(position: Vec4, target: Vec4, up: Vec4, over: Vec4) -> Mat4 {
    let [wa, wb, wc, wd] = look_at_4d_basis(position, target, up, over);
    from_columns(wa, wb, wc, wd)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let result = transform(IDENTITY, v);
        assert!(vec_approx_eq(v, result));
    }

    #[test]
    fn test_plane_rotation_yz() {
        use std::f32::consts::FRAC_PI_2;

        let m = plane_rotation(FRAC_PI_2, 1, 2);

        // Y should go to Z
        let result = transform(m, Vec4::Y);
        assert!(vec_approx_eq(result, Vec4::Z), "Y should become Z, got {:?}", result);

        // Z should go to -Y
        let result = transform(m, Vec4::Z);
        assert!(vec_approx_eq(result, -Vec4::Y), "Z should become -Y, got {:?}", result);

        // X and W should be unchanged
        assert!(vec_approx_eq(transform(m, Vec4::X), Vec4::X));
        assert!(vec_approx_eq(transform(m, Vec4::W), Vec4::W));
    }

    #[test]
    fn test_axis_rotations_match_plane_rotation() {
        let angle = 0.7;
        assert!(mat_approx_eq(from_x_rotation(angle), plane_rotation(angle, 1, 2)));
        assert!(mat_approx_eq(from_y_rotation(angle), plane_rotation(angle, 2, 0)));
        assert!(mat_approx_eq(from_z_rotation(angle), plane_rotation(angle, 0, 1)));
    }

    #[test]
    fn test_mul_identity() {
        let a = plane_rotation(0.5, 0, 1);
        assert!(mat_approx_eq(a, mul(IDENTITY, a)));
        assert!(mat_approx_eq(a, mul(a, IDENTITY)));
    }

    #[test]
    fn test_mul_composition() {
        use std::f32::consts::FRAC_PI_4;

        // Two 45° rotations should equal one 90° rotation
        let r45 = plane_rotation(FRAC_PI_4, 0, 3);
        let r90 = plane_rotation(FRAC_PI_4 * 2.0, 0, 3);
        assert!(mat_approx_eq(mul(r45, r45), r90));
    }

    #[test]
    fn test_mul_applies_right_operand_first() {
        let t = translation(Vec3::new(1.0, 0.0, 0.0));
        let r = from_z_rotation(std::f32::consts::FRAC_PI_2);
        let p = Vec4::new(1.0, 0.0, 0.0, 1.0);

        // Rotate then translate: (1,0,0) -> (0,1,0) -> (1,1,0)
        let result = transform(mul(t, r), p);
        assert!(vec_approx_eq(result, Vec4::new(1.0, 1.0, 0.0, 1.0)), "got {:?}", result);
    }

    #[test]
    fn test_get_column_and_row() {
        let m = from_columns(
            Vec4::new(1.0, 2.0, 3.0, 4.0),
            Vec4::new(5.0, 6.0, 7.0, 8.0),
            Vec4::new(9.0, 10.0, 11.0, 12.0),
            Vec4::new(13.0, 14.0, 15.0, 16.0),
        );
        assert_eq!(get_column(m, 1), Vec4::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(get_row(m, 1), Vec4::new(2.0, 6.0, 10.0, 14.0));
        assert_eq!(get_row(transpose(m), 1), get_column(m, 1));
    }

    #[test]
    fn test_transpose_involution() {
        let m = mul(from_x_rotation(0.3), translation(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(transpose(transpose(m)), m);
    }

    #[test]
    fn test_inverse() {
        let m = mul(
            translation(Vec3::new(1.0, -2.0, 3.0)),
            mul(from_y_rotation(0.4), from_x_rotation(1.1)),
        );
        let inv = inverse(m).unwrap();
        assert!(mat_approx_eq(mul(inv, m), IDENTITY));
        assert!(mat_approx_eq(mul(m, inv), IDENTITY));
    }

    #[test]
    fn test_inverse_singular() {
        let mut m = IDENTITY;
        m[2] = [0.0; 4];
        assert!(inverse(m).is_none());
        assert_eq!(determinant(m), 0.0);
    }

    #[test]
    fn test_perspective_matrix() {
        use std::f32::consts::FRAC_PI_2;

        let proj = perspective(FRAC_PI_2, 2.0, 0.1, 100.0);
        // tan(45°) = 1 so f = 1
        assert!(approx_eq(proj[0][0], 0.5));
        assert!(approx_eq(proj[1][1], 1.0));
        assert_eq!(proj[2][3], -1.0);
        assert_eq!(proj[3][3], 0.0);

        // A point on the near plane maps to NDC depth -1
        let clip = transform(proj, Vec4::new(0.0, 0.0, -0.1, 1.0));
        assert!(approx_eq(clip.z / clip.w, -1.0));
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 5.0, 10.0);
        let view = look_at(eye, Vec3::ZERO, Vec3::Y);

        let e = transform(view, eye.extend(1.0));
        assert!(vec_approx_eq(e, Vec4::new(0.0, 0.0, 0.0, 1.0)), "got {:?}", e);

        // The target lies straight ahead, on -Z
        let t = transform(view, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert!(approx_eq(t.x, 0.0) && approx_eq(t.y, 0.0));
        assert!(t.z < 0.0);
        assert!(approx_eq(-t.z, eye.length()));
    }

    #[test]
    fn test_look_at_rotation_is_orthonormal() {
        let view = look_at(
            Vec3::new(4.147724, -4.964352, -3.691729),
            Vec3::new(3.596415, -4.284839, -3.20768),
            Vec3::new(-0.5506194, -0.7322351, 0.4007882),
        );
        let mut rot = view;
        rot[3] = [0.0, 0.0, 0.0, 1.0];
        assert!(mat_approx_eq(mul(transpose(rot), rot), IDENTITY));
    }

    #[test]
    fn test_look_at_4d_scenario() {
        let view = look_at_4d(
            Vec4::new(4.0, 0.0, 0.0, 0.0),
            Vec4::ZERO,
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
        );

        assert!(vec_approx_eq(get_column(view, 3), Vec4::new(-1.0, 0.0, 0.0, 0.0)));
        assert!(vec_approx_eq(get_column(view, 0), Vec4::new(0.0, 0.0, 0.0, 1.0)));
        assert!(vec_approx_eq(get_column(view, 1), Vec4::new(0.0, -1.0, 0.0, 0.0)));
        assert!(vec_approx_eq(get_column(view, 2), Vec4::new(0.0, 0.0, -1.0, 0.0)));

        // Proper rotation: no reflection
        assert!(approx_eq(determinant(view), 1.0));
    }

    #[test]
    fn test_look_at_4d_basis_orthonormal() {
        let poses = [
            (
                Vec4::new(1.0, 2.0, 3.0, 4.0),
                Vec4::new(0.0, 0.5, -1.0, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
            ),
            (
                Vec4::new(0.0, 0.0, 0.0, -6.0),
                Vec4::ZERO,
                Vec4::new(0.3, 1.0, 0.0, 0.1),
                Vec4::new(1.0, 0.0, 0.2, 0.0),
            ),
        ];

        for (position, target, up, over) in poses {
            let basis = look_at_4d_basis(position, target, up, over);
            for i in 0..4 {
                assert!(approx_eq(basis[i].length(), 1.0), "basis[{}] = {:?}", i, basis[i]);
                for j in (i + 1)..4 {
                    assert!(
                        approx_eq(basis[i].dot(basis[j]), 0.0),
                        "basis[{}] . basis[{}] = {}", i, j, basis[i].dot(basis[j])
                    );
                }
            }

            // The view matrix is orthogonal: its transpose inverts it
            let view = look_at_4d(position, target, up, over);
            assert!(mat_approx_eq(mul(transpose(view), view), IDENTITY));
        }
    }
}
