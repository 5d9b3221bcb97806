use tracing::debug;

// =============================================================================
// The abstract capability: anything with a measurable area
// =============================================================================

/// Object-safe so shapes can live behind `&dyn Shape` / `Box<dyn Shape>`.
pub trait Shape {
    fn area(&self) -> f32;
}

/// Fixed approximation used by the circle formula. The exercises were written
/// against 3.14, so callers and tests compare against this constant rather
/// than `std::f32::consts::PI`.
pub const PI_APPROX: f32 = 3.14;

// =============================================================================
// Base formula carrier
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallelogram {
    length: f32,
    height: f32,
}

impl Parallelogram {
    pub fn new(length: f32, height: f32) -> Self {
        debug!(length, height, "Parallelogram::new");
        Self { length, height }
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Shape for Parallelogram {
    fn area(&self) -> f32 {
        self.length * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f32,
}

impl Circle {
    pub fn new(radius: f32) -> Self {
        debug!(radius, "Circle::new");
        Self { radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f32 {
        PI_APPROX * self.radius * self.radius
    }
}

// =============================================================================
// Nominal specializations
// =============================================================================

// Rectangle, Square and Rhombus are parallelograms by another name: each
// wraps one and routes area() through the shared two-argument formula
// instead of repeating the arithmetic.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle(Parallelogram);

impl Rectangle {
    pub fn new(length: f32, width: f32) -> Self {
        debug!(length, width, "Rectangle::new");
        Self(Parallelogram::new(length, width))
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f32 {
        self.0.area()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square(Parallelogram);

impl Square {
    pub fn new(length: f32, width: f32) -> Self {
        debug!(length, width, "Square::new");
        Self(Parallelogram::new(length, width))
    }
}

impl Shape for Square {
    fn area(&self) -> f32 {
        self.0.area()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rhombus(Parallelogram);

impl Rhombus {
    pub fn new(length: f32, width: f32) -> Self {
        debug!(length, width, "Rhombus::new");
        Self(Parallelogram::new(length, width))
    }
}

impl Shape for Rhombus {
    fn area(&self) -> f32 {
        self.0.area()
    }
}
