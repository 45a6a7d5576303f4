use sea_battle::{CellState, Coord, GameError, Orientation, Ship};

#[test]
fn test_occupied_cells_follow_orientation() -> Result<(), GameError> {
    let horizontal = Ship::placed(3, Orientation::Horizontal, Coord::new(2, 1));
    assert_eq!(
        horizontal.occupied_cells()?,
        vec![Coord::new(2, 1), Coord::new(3, 1), Coord::new(4, 1)]
    );
    let vertical = Ship::placed(4, Orientation::Vertical, Coord::new(0, 0));
    assert_eq!(
        vertical.occupied_cells()?,
        vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(0, 3)
        ]
    );
    Ok(())
}

#[test]
fn test_unpositioned_geometry_is_an_error() {
    let mut ship = Ship::new(2, Orientation::Horizontal);
    let other = Ship::placed(1, Orientation::Vertical, Coord::new(5, 5));
    assert_eq!(ship.occupied_cells().unwrap_err(), GameError::Unpositioned);
    assert_eq!(ship.footprint_with_halo().unwrap_err(), GameError::Unpositioned);
    assert_eq!(ship.collides_with(&other).unwrap_err(), GameError::Unpositioned);
    assert_eq!(other.collides_with(&ship).unwrap_err(), GameError::Unpositioned);
    assert_eq!(ship.is_out_of_bounds(10).unwrap_err(), GameError::Unpositioned);
    assert_eq!(ship.attempt_step(1).unwrap_err(), GameError::Unpositioned);
}

#[test]
fn test_orientation_codes() {
    assert_eq!(Orientation::try_from(1), Ok(Orientation::Horizontal));
    assert_eq!(Orientation::try_from(2), Ok(Orientation::Vertical));
    assert_eq!(
        Orientation::try_from(3),
        Err(GameError::InvalidOrientation(3))
    );
}

#[test]
fn test_halo_is_clipped_at_zero_only() -> Result<(), GameError> {
    let corner = Ship::placed(1, Orientation::Horizontal, Coord::new(0, 0));
    let halo: Vec<_> = corner.footprint_with_halo()?.into_iter().collect();
    assert_eq!(
        halo,
        vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(1, 1)
        ]
    );

    // the far edge is left to the bounds check
    let far = Ship::placed(2, Orientation::Horizontal, Coord::new(8, 9));
    let halo = far.footprint_with_halo()?;
    assert_eq!(halo.len(), 12);
    assert!(halo.contains(&Coord::new(10, 10)));
    Ok(())
}

#[test]
fn test_apply_hit_damages_and_immobilises() -> Result<(), GameError> {
    let mut ship = Ship::placed(3, Orientation::Vertical, Coord::new(4, 4));
    assert!(ship.is_mobile());

    assert!(!ship.apply_hit(Coord::new(5, 4))?);
    assert!(ship.is_mobile());
    assert_eq!(ship.hit_count(), 0);

    assert!(ship.apply_hit(Coord::new(4, 5))?);
    assert_eq!(
        ship.cells(),
        &[CellState::Intact, CellState::Hit, CellState::Intact]
    );
    assert!(!ship.is_mobile());
    assert!(!ship.is_sunk());

    ship.apply_hit(Coord::new(4, 4))?;
    ship.apply_hit(Coord::new(4, 6))?;
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_count(), 3);
    Ok(())
}

#[test]
fn test_attempt_step_moves_along_axis_while_mobile() -> Result<(), GameError> {
    let mut ship = Ship::placed(2, Orientation::Vertical, Coord::new(3, 3));
    assert!(ship.attempt_step(-1)?);
    assert_eq!(ship.origin(), Some(Coord::new(3, 2)));

    let mut sideways = Ship::placed(2, Orientation::Horizontal, Coord::new(3, 3));
    assert!(sideways.attempt_step(1)?);
    assert_eq!(sideways.origin(), Some(Coord::new(4, 3)));

    sideways.apply_hit(Coord::new(4, 3))?;
    assert!(!sideways.attempt_step(1)?);
    assert_eq!(sideways.origin(), Some(Coord::new(4, 3)));
    Ok(())
}

#[test]
fn test_collision_includes_diagonal_neighbours() -> Result<(), GameError> {
    let ship = Ship::placed(2, Orientation::Horizontal, Coord::new(2, 2));
    let diagonal = Ship::placed(1, Orientation::Horizontal, Coord::new(4, 3));
    let clear = Ship::placed(1, Orientation::Horizontal, Coord::new(5, 2));
    let crossing = Ship::placed(3, Orientation::Vertical, Coord::new(3, 0));

    assert!(ship.collides_with(&diagonal)?);
    assert!(!ship.overlaps(&diagonal)?);
    assert!(!ship.collides_with(&clear)?);
    assert!(ship.collides_with(&crossing)?);
    assert!(ship.overlaps(&crossing)?);
    Ok(())
}

#[test]
fn test_out_of_bounds() -> Result<(), GameError> {
    assert!(!Ship::placed(3, Orientation::Horizontal, Coord::new(7, 0)).is_out_of_bounds(10)?);
    assert!(Ship::placed(3, Orientation::Horizontal, Coord::new(8, 0)).is_out_of_bounds(10)?);
    assert!(Ship::placed(2, Orientation::Vertical, Coord::new(0, -1)).is_out_of_bounds(10)?);
    assert!(Ship::placed(1, Orientation::Vertical, Coord::new(-1, 4)).is_out_of_bounds(10)?);
    Ok(())
}
