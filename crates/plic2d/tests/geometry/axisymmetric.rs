use approx::assert_relative_eq;
use plic2d::interface::{cell_interface2d, InterfaceOptions};
use plic2d::math::{Point, Real, Vector};
use plic2d::measure::CellMeasure;
use plic2d::query::OffsetMode;
use plic2d::shape::{Cell, CellShape};
use std::f64::consts::PI;

// The ring 1 <= r <= 3, 0 <= z <= 1 (the `y` axis is the axis of revolution).
fn ring() -> [Point<Real>; 4] {
    [
        Point::new(1.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(3.0, 1.0),
        Point::new(1.0, 1.0),
    ]
}

#[test]
fn revolved_volume_of_a_ring() {
    let points = ring();
    let topology = CellShape::Quadrilateral.topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();

    assert_relative_eq!(CellMeasure::new(cell).total(), 2.0);
    assert_relative_eq!(
        CellMeasure::axisymmetric(cell).total(),
        PI * (3.0 * 3.0 - 1.0 * 1.0),
        epsilon = 1.0e-12
    );
}

#[test]
fn axisymmetric_fraction_moves_the_interface_outward() {
    let points = ring();
    let topology = CellShape::Quadrilateral.topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();
    let planar = InterfaceOptions::default();
    let axisymmetric = InterfaceOptions {
        axisymmetric: true,
        ..InterfaceOptions::default()
    };
    let mode = OffsetMode::Fraction(3.0 / 8.0);

    // Planar: 1 + 2 * 3/8.
    let interface = cell_interface2d(&cell, &Vector::x(), mode, &planar).unwrap();
    assert_relative_eq!(interface.offset.offset, -1.75, epsilon = 1.0e-8);

    // Axisymmetric: (r² - 1) / (9 - 1) = 3/8.
    let interface = cell_interface2d(&cell, &Vector::x(), mode, &axisymmetric).unwrap();
    assert_relative_eq!(interface.offset.offset, -2.0, epsilon = 1.0e-8);
    assert_relative_eq!(interface.interface[0].point, Point::new(2.0, 0.0), epsilon = 1.0e-8);
}

#[test]
fn slices_along_the_axis_are_linear() {
    // Slices orthogonal to the axis of revolution all have the same volume per unit height.
    let points = ring();
    let topology = CellShape::Quadrilateral.topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();
    let options = InterfaceOptions {
        axisymmetric: true,
        ..InterfaceOptions::default()
    };

    let interface =
        cell_interface2d(&cell, &Vector::y(), OffsetMode::Fraction(0.25), &options).unwrap();
    assert_relative_eq!(interface.offset.offset, -0.25, epsilon = 1.0e-8);
}
