//! drawpp engine crate.
//!
//! A CPU raster canvas: drawables (solid figures, decoded images) composite
//! onto a fixed-size RGBA buffer in registration order with alpha-over
//! blending, and the result can be exported as PNG or scored against another
//! canvas.
//!
//! ```
//! use drawpp_engine::canvas::Canvas;
//! use drawpp_engine::coords::Point;
//! use drawpp_engine::paint::Color;
//! use drawpp_engine::scene::Figure;
//!
//! let mut canvas = Canvas::new(32, 32);
//! let red = Color::rgb(1.0, 0.0, 0.0);
//! canvas.add_drawable(Figure::rect(Point::new(4.0, 4.0), Point::new(20.0, 20.0), red));
//! canvas.add_drawable(Figure::triangle(
//!     Point::new(10.0, 10.0),
//!     Point::new(30.0, 12.0),
//!     Point::new(14.0, 30.0),
//!     Color::new(0.0, 0.0, 1.0, 0.5),
//! ));
//! canvas.draw();
//! assert_eq!(canvas.pixel(5, 5), red);
//! ```

pub mod canvas;
pub mod codec;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
