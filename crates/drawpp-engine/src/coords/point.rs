use core::ops::{Add, Div, Index, Mul, Sub};

/// Highest dimension a [`Point`] can carry.
pub const MAX_DIM: usize = 4;

/// A 2- to 4-dimensional coordinate.
///
/// Points double as geometry (rectangle corners, triangle vertices) and as
/// generic parameter vectors for procedural figures (resolution, zoom,
/// offset). Components past [`dim`](Self::dim) read as `0.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    coords: [f32; MAX_DIM],
    dim: usize,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { coords: [x, y, 0.0, 0.0], dim: 2 }
    }

    #[inline]
    pub const fn new3(x: f32, y: f32, z: f32) -> Self {
        Self { coords: [x, y, z, 0.0], dim: 3 }
    }

    #[inline]
    pub const fn new4(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { coords: [x, y, z, w], dim: 4 }
    }

    /// 2-D point with both coordinates set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Builds a point from 2 to 4 coordinates.
    ///
    /// # Panics
    /// Panics if `coords` has fewer than 2 or more than [`MAX_DIM`] entries.
    pub fn from_slice(coords: &[f32]) -> Self {
        assert!(
            (2..=MAX_DIM).contains(&coords.len()),
            "Point::from_slice: expected 2..={MAX_DIM} coordinates, got {}",
            coords.len()
        );
        let mut out = [0.0; MAX_DIM];
        out[..coords.len()].copy_from_slice(coords);
        Self { coords: out, dim: coords.len() }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.coords[..self.dim]
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.coords[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.coords[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.coords[2]
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.coords[3]
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|c| c.is_finite())
    }

    fn zip(self, rhs: Point, f: impl Fn(f32, f32) -> f32) -> Point {
        let mut coords = [0.0; MAX_DIM];
        for (i, c) in coords.iter_mut().enumerate() {
            *c = f(self.coords[i], rhs.coords[i]);
        }
        Point { coords, dim: self.dim.max(rhs.dim) }
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Point {
        let mut coords = self.coords;
        for c in &mut coords[..self.dim] {
            *c = f(*c);
        }
        Point { coords, dim: self.dim }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

/// Like the named accessors, components past `dim` read as `0.0`.
///
/// # Panics
/// Panics if `i >= MAX_DIM`.
impl Index<usize> for Point {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.coords[i]
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

/// Component-wise; the result has the larger of the two dimensions.
impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        self.map(|c| c * rhs)
    }
}

impl Div<f32> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f32) -> Point {
        self.map(|c| c / rhs)
    }
}
