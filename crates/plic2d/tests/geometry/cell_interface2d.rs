use approx::assert_relative_eq;
use plic2d::interface::{cell_interface2d, InterfaceError, InterfaceOptions};
use plic2d::math::{Point, Real, Vector};
use plic2d::query::{ChainVertex, OffsetMode, SolveStatus};
use plic2d::shape::{Cell, CellShape};

fn unit_square() -> [Point<Real>; 4] {
    [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]
}

#[test]
fn square_split_in_half() {
    let points = unit_square();
    let topology = CellShape::Quadrilateral.topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();
    let interface = cell_interface2d(
        &cell,
        &Vector::x(),
        OffsetMode::Fraction(0.5),
        &InterfaceOptions::default(),
    )
    .unwrap();

    assert_eq!(interface.offset.status, SolveStatus::Converged);
    assert_relative_eq!(interface.offset.offset, -0.5, epsilon = 1.0e-9);

    assert_eq!(interface.interface[0].edge, [0, 1]);
    assert_eq!(interface.interface[1].edge, [2, 3]);
    assert_relative_eq!(interface.interface[0].point, Point::new(0.5, 0.0), epsilon = 1.0e-9);
    assert_relative_eq!(interface.interface[1].point, Point::new(0.5, 1.0), epsilon = 1.0e-9);

    assert_eq!(
        interface.inside_chain.as_slice(),
        &[
            ChainVertex::Original(0),
            ChainVertex::Interface(0),
            ChainVertex::Interface(1),
            ChainVertex::Original(3),
        ]
    );
    assert_eq!(interface.inside_sentinels().as_slice(), &[0, -1, -2, 3]);
    assert_eq!(interface.outside_sentinels().as_slice(), &[-1, 1, 2, -2]);
}

#[test]
fn zero_normal_falls_back_to_the_x_axis() {
    let points = unit_square();
    let topology = CellShape::Quadrilateral.topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();
    let interface = cell_interface2d(
        &cell,
        &Vector::zeros(),
        OffsetMode::Fraction(0.25),
        &InterfaceOptions::default(),
    )
    .unwrap();

    assert_eq!(interface.normal, Vector::x_axis());
    assert_relative_eq!(interface.offset.offset, -0.25, epsilon = 1.0e-9);
}

#[test]
fn normal_is_normalized() {
    let points = unit_square();
    let topology = CellShape::Quadrilateral.topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();
    let interface = cell_interface2d(
        &cell,
        &Vector::new(0.0, 4.0),
        OffsetMode::Distance(-0.75),
        &InterfaceOptions::default(),
    )
    .unwrap();

    assert_eq!(interface.normal, Vector::y_axis());
    assert_eq!(interface.offset.status, SolveStatus::Bypassed);
    assert_relative_eq!(interface.interface[0].point.y, 0.75, epsilon = 1.0e-12);
    assert_relative_eq!(interface.interface[1].point.y, 0.75, epsilon = 1.0e-12);
}

#[test]
fn line_missing_the_cell_fails() {
    let points = unit_square();
    let topology = CellShape::Quadrilateral.topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();
    let options = InterfaceOptions::default();

    assert_eq!(
        cell_interface2d(&cell, &Vector::x(), OffsetMode::Distance(5.0), &options),
        Err(InterfaceError::CrossingCount { found: 0 })
    );
    // A saturated fraction puts the line on the boundary, which is not a cut.
    assert_eq!(
        cell_interface2d(&cell, &Vector::x(), OffsetMode::Fraction(1.0), &options),
        Err(InterfaceError::CrossingCount { found: 0 })
    );
}

#[test]
fn diagonal_cut_through_two_vertices() {
    let points = unit_square();
    let topology = CellShape::Quadrilateral.topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();
    let interface = cell_interface2d(
        &cell,
        &Vector::new(1.0, 1.0),
        OffsetMode::Fraction(0.5),
        &InterfaceOptions::default(),
    )
    .unwrap();

    assert_eq!(interface.offset.status, SolveStatus::Converged);
    assert_relative_eq!(interface.interface[0].point, points[1], epsilon = 1.0e-8);
    assert_relative_eq!(interface.interface[1].point, points[3], epsilon = 1.0e-8);
}

#[test]
fn cut_through_a_vertex_and_an_edge() {
    // The line x / 2 + y = 1 goes through the vertex 3 and the middle of the edge 1-2.
    let points = unit_square();
    let topology = CellShape::Quadrilateral.topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();
    let normal = Vector::new(0.5, 1.0);
    let offset = -normal.normalize().y;
    let interface = cell_interface2d(
        &cell,
        &normal,
        OffsetMode::Distance(offset),
        &InterfaceOptions::default(),
    )
    .unwrap();

    assert_eq!(interface.interface[0].edge, [1, 2]);
    assert_relative_eq!(interface.interface[0].point, Point::new(1.0, 0.5), epsilon = 1.0e-12);
    assert_eq!(interface.interface[1].point, points[3]);
    assert_eq!(
        interface.outside_chain.as_slice(),
        &[
            ChainVertex::Interface(0),
            ChainVertex::Original(2),
            ChainVertex::Interface(1),
        ]
    );
}

#[test]
fn collinear_cell_is_degenerate() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
    ];
    let topology = CellShape::Triangle.topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();

    assert_eq!(
        cell_interface2d(
            &cell,
            &Vector::x(),
            OffsetMode::Fraction(0.5),
            &InterfaceOptions::default()
        ),
        Err(InterfaceError::DegenerateCell)
    );
}

#[test]
fn chains_resolve_to_the_boundary_of_each_side() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(0.0, 1.0),
    ];
    let topology = CellShape::Polygon(5).topology().unwrap();
    let cell = Cell::new(&points, &topology).unwrap();
    let interface = cell_interface2d(
        &cell,
        &Vector::new(1.0, 1.0),
        OffsetMode::Fraction(0.3),
        &InterfaceOptions::default(),
    )
    .unwrap();

    let area = |chain: &[ChainVertex]| {
        let pts: Vec<_> = chain
            .iter()
            .map(|v| interface.chain_point(&points, *v))
            .collect();
        let twice_area: Real = (0..pts.len())
            .map(|i| pts[i].coords.perp(&pts[(i + 1) % pts.len()].coords))
            .sum();
        twice_area / 2.0
    };

    let total = 3.0;
    assert_relative_eq!(area(&interface.inside_chain), 0.3 * total, epsilon = 1.0e-8);
    assert_relative_eq!(area(&interface.outside_chain), 0.7 * total, epsilon = 1.0e-8);

    for id in [ChainVertex::Interface(0), ChainVertex::Interface(1)] {
        assert!(interface.inside_chain.contains(&id));
        assert!(interface.outside_chain.contains(&id));
    }
}
