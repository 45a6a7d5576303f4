use sea_battle::{render_boards, Coord, FleetGrid, GameError, Orientation, Ship};

#[test]
fn test_render_side_by_side() -> Result<(), GameError> {
    let mut mine = FleetGrid::from_ships(
        2,
        vec![Ship::placed(1, Orientation::Horizontal, Coord::new(0, 0))],
    )?;
    let mut theirs = FleetGrid::from_ships(
        2,
        vec![Ship::placed(1, Orientation::Vertical, Coord::new(1, 1))],
    )?;
    mine.apply_hit(Coord::new(1, 0))?;
    theirs.apply_hit(Coord::new(1, 1))?;

    let text = render_boards(&mine.full_view()?, &theirs.fog_view(true)?);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "   You          Computer",
            "     1  2         1  2",
            "  1  □  -      1  +  +",
            "  2  -  -      2  +  X",
        ]
    );
    Ok(())
}

#[test]
fn test_render_labels_every_row_and_column() -> Result<(), GameError> {
    let mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(4);
    let mut grid = FleetGrid::new(10)?;
    grid.init(&mut rng)?;
    let text = render_boards(&grid.full_view()?, &grid.fog_view(true)?);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines[1].trim_start().starts_with("1  2  3"));
    assert!(lines[1].trim_end().ends_with("9 10"));
    assert!(lines[11].starts_with(" 10"));
    assert_eq!(text.matches('□').count(), 20);
    Ok(())
}
