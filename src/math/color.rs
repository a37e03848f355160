// Copyright @yucwang 2026

use super::constants::Float;

use std::ops;

/// Linear RGBA value. Arithmetic is componentwise over all four channels,
/// reductions (`mean`, `luminance`) only look at r, g and b.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    data: [Float; 4],
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { data: [r, g, b, 1.0] }
    }

    pub fn rgba(r: Float, g: Float, b: Float, a: Float) -> Self {
        Self { data: [r, g, b, a] }
    }

    pub fn gray(v: Float) -> Self {
        Self::new(v, v, v)
    }

    pub fn black() -> Self {
        Self::gray(0.0)
    }

    pub fn white() -> Self {
        Self::gray(1.0)
    }

    pub fn r(&self) -> Float {
        self.data[0]
    }

    pub fn g(&self) -> Float {
        self.data[1]
    }

    pub fn b(&self) -> Float {
        self.data[2]
    }

    pub fn a(&self) -> Float {
        self.data[3]
    }

    pub fn mean(&self) -> Float {
        (self.data[0] + self.data[1] + self.data[2]) / 3.0
    }

    pub fn luminance(&self) -> Float {
        0.2126 * self.data[0] + 0.7152 * self.data[1] + 0.0722 * self.data[2]
    }

    pub fn is_black(&self) -> bool {
        self.data[..3].iter().all(|c| *c == 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    pub fn rgb(&self) -> (Float, Float, Float) {
        (self.data[0], self.data[1], self.data[2])
    }

    fn map2<F: Fn(Float, Float) -> Float>(self, other: Self, f: F) -> Self {
        let mut data = self.data;
        for (lhs, rhs) in data.iter_mut().zip(other.data.iter()) {
            *lhs = f(*lhs, *rhs);
        }
        Self { data }
    }

    fn map<F: Fn(Float) -> Float>(self, f: F) -> Self {
        let mut data = self.data;
        for c in data.iter_mut() {
            *c = f(*c);
        }
        Self { data }
    }
}

impl ops::Index<usize> for Color {
    type Output = Float;

    fn index(&self, index: usize) -> &Float {
        &self.data[index]
    }
}

impl ops::IndexMut<usize> for Color {
    fn index_mut(&mut self, index: usize) -> &mut Float {
        &mut self.data[index]
    }
}

impl ops::Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        self.map2(rhs, |a, b| a + b)
    }
}

impl ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl ops::Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        self.map2(rhs, |a, b| a - b)
    }
}

impl ops::Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.map2(rhs, |a, b| a * b)
    }
}

impl ops::MulAssign for Color {
    fn mul_assign(&mut self, rhs: Color) {
        *self = *self * rhs;
    }
}

impl ops::Mul<Float> for Color {
    type Output = Color;

    fn mul(self, rhs: Float) -> Color {
        self.map(|a| a * rhs)
    }
}

impl ops::Mul<Color> for Float {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

impl ops::Div<Float> for Color {
    type Output = Color;

    fn div(self, rhs: Float) -> Color {
        self.map(|a| a / rhs)
    }
}
