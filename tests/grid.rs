use prim_maze::{Cell, Direction, Error, Grid, Position, Zone};

const LOOP_FREE_MAZE: &str = "#...G\n#.###\n#...#\n###.#\nS...#\n";

fn parse(text: &str) -> Grid {
    Grid::try_from(text).unwrap()
}

#[test]
fn read_grid_from_file() {
    let grid = prim_maze::read_grid("inputs.txt").unwrap();

    assert_eq!(grid.side_len(), 5);
    assert_eq!(grid.start_position(), Position::new(4, 0));
    assert_eq!(*grid.winning_position(), Position::new(0, 4));
    assert_eq!(grid.cell(&Position::new(4, 0)), Some(Cell::Start));
    assert_eq!(grid.cell(&Position::new(1, 1)), Some(Cell::Open));
    assert_eq!(grid.cell(&Position::new(3, 0)), Some(Cell::Wall));
    assert_eq!(grid.cell(&Position::new(5, 0)), None);
    assert_eq!(grid.to_string(), LOOP_FREE_MAZE);
}

#[test]
fn read_grid_from_missing_file_fails() {
    assert!(prim_maze::read_grid("no_such_maze.txt").is_err());
}

#[test]
fn legal_moves_skip_walls_and_borders() {
    let grid = parse(LOOP_FREE_MAZE);

    assert_eq!(
        grid.legal_moves(&Position::new(4, 0)).unwrap(),
        vec![Direction::Right]
    );
    assert_eq!(
        grid.legal_moves(&Position::new(2, 1)).unwrap(),
        vec![Direction::Up, Direction::Right]
    );
    assert_eq!(
        grid.legal_moves(&Position::new(0, 3)).unwrap(),
        vec![Direction::Left, Direction::Right]
    );
}

#[test]
fn legal_moves_of_enclosed_cell_is_empty() {
    let grid = parse("G###\n####\n#.##\nS###\n");

    assert!(grid.legal_moves(&Position::new(2, 1)).unwrap().is_empty());
}

#[test]
fn legal_moves_fail_from_wall_or_outside() {
    let grid = parse(LOOP_FREE_MAZE);

    assert!(matches!(
        grid.legal_moves(&Position::new(3, 0)),
        Err(Error::WallOrigin(_))
    ));
    assert!(matches!(
        grid.legal_moves(&Position::new(0, 5)),
        Err(Error::OutOfBounds(_, 5))
    ));
}

#[test]
fn next_space_follows_only_legal_moves() {
    let grid = parse(LOOP_FREE_MAZE);

    assert_eq!(
        grid.next_space(&Position::new(4, 0), Direction::Right).unwrap(),
        Position::new(4, 1)
    );
    assert_eq!(
        grid.next_space(&Position::new(3, 3), Direction::Up).unwrap(),
        Position::new(2, 3)
    );
    assert!(matches!(
        grid.next_space(&Position::new(4, 0), Direction::Up),
        Err(Error::IllegalMove(_, Direction::Up))
    ));
    assert!(matches!(
        grid.next_space(&Position::new(4, 0), Direction::Left),
        Err(Error::IllegalMove(_, Direction::Left))
    ));
    assert!(matches!(
        grid.next_space(&Position::new(0, 0), Direction::Right),
        Err(Error::WallOrigin(_))
    ));
}

#[test]
fn winning_position_query() {
    let grid = parse(LOOP_FREE_MAZE);

    assert!(grid.is_winning_position(&Position::new(0, 4)).unwrap());
    assert!(!grid.is_winning_position(&Position::new(0, 3)).unwrap());
    assert!(!grid.is_winning_position(&Position::new(0, 0)).unwrap());
    assert!(matches!(
        grid.is_winning_position(&Position::new(7, 1)),
        Err(Error::OutOfBounds(_, _))
    ));
}

#[test]
fn walk_stops_at_first_illegal_move() {
    let grid = parse(LOOP_FREE_MAZE);

    let positions = grid
        .walk(&[Direction::Right, Direction::Right, Direction::Right, Direction::Up])
        .unwrap();
    assert_eq!(positions.first(), Some(&Position::new(4, 0)));
    assert_eq!(positions.last(), Some(&Position::new(3, 3)));
    assert_eq!(positions.len(), 5);

    assert!(matches!(
        grid.walk(&[Direction::Right, Direction::Up]),
        Err(Error::IllegalMove(_, Direction::Up))
    ));
}

#[test]
fn breadth_first_steps() {
    let grid = parse(LOOP_FREE_MAZE);

    assert_eq!(
        grid.min_steps_n(&grid.start_position(), grid.winning_position()),
        Some(12)
    );
    assert_eq!(
        grid.min_steps_n(&grid.start_position(), &Position::new(2, 1)),
        Some(7)
    );
    assert_eq!(
        grid.min_steps_n(&grid.start_position(), &Position::new(0, 0)),
        None
    );
}

#[test]
fn zones_use_rendering_coordinates() {
    let grid = parse(".G\nS#\n");

    assert_eq!(
        grid.goal_zone(40, 40).unwrap(),
        Zone {
            left: 40,
            top: 0,
            right: 79,
            bottom: 39
        }
    );
    let wall_zones = grid.wall_zones(2, 1).unwrap();
    assert_eq!(
        wall_zones,
        vec![Zone {
            left: 2,
            top: 1,
            right: 3,
            bottom: 1
        }]
    );
    assert_eq!(wall_zones[0].width(), 2);
    assert_eq!(wall_zones[0].height(), 1);
    assert_eq!(grid.cell_center(&Position::new(1, 0), 40, 40), (20, 60));
}

#[test]
fn zones_reject_empty_cell_size() {
    let grid = parse(".G\nS#\n");

    assert!(matches!(
        grid.goal_zone(0, 1),
        Err(Error::InvalidCellSize(0, 1))
    ));
    assert!(matches!(
        grid.wall_zones(2, 0),
        Err(Error::InvalidCellSize(2, 0))
    ));
    assert!(matches!(
        Zone::of_cell(&Position::new(0, 0), 0, 0),
        Err(Error::InvalidCellSize(0, 0))
    ));
}

#[test]
fn overlay_marks_path_cells() {
    let grid = parse(LOOP_FREE_MAZE);
    let directions = "rrruulluurrr"
        .chars()
        .map(Direction::try_from)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(
        grid.overlay(&directions).unwrap().to_string(),
        "#oooG\n#o###\n#ooo#\n###o#\nSooo#\n"
    );
}

#[test]
fn direction_chars() {
    assert_eq!(Direction::try_from('u').unwrap(), Direction::Up);
    assert_eq!(Direction::try_from('l').unwrap(), Direction::Left);
    assert!(matches!(
        Direction::try_from('x'),
        Err(Error::InvalidDirectionChar('x'))
    ));
    assert_eq!(
        prim_maze::format_directions(&[Direction::Down, Direction::Right]),
        "dr"
    );
}

#[test]
fn distances() {
    let from = Position::new(4, 0);
    let to = Position::new(1, 4);

    assert_eq!(from.manhattan_dist(&to), 7);
    assert_eq!(to.manhattan_dist(&from), 7);
    assert!((from.euclidean_dist(&to) - 5.0).abs() < 1e-9);
}

#[test]
fn malformed_maze_text_is_rejected() {
    assert!(matches!(Grid::try_from(""), Err(Error::EmptyGrid)));
    assert!(matches!(
        Grid::try_from(".G\nS..\n"),
        Err(Error::InconsistentRow(2, 3))
    ));
    assert!(matches!(
        Grid::try_from("..G\nS..\n"),
        Err(Error::NotSquareGrid(2, 3))
    ));
    assert!(matches!(
        Grid::new(2, vec![Cell::Start; 3]),
        Err(Error::CellCountMismatch(3, 4))
    ));
    assert!(matches!(
        Grid::new(3, vec![Cell::Open; 8]),
        Err(Error::CellCountMismatch(8, 9))
    ));
    assert!(matches!(
        Grid::try_from(".x\nS.\n"),
        Err(Error::InvalidCellChar('x'))
    ));
    assert!(matches!(
        Grid::try_from("..\nS.\n"),
        Err(Error::NoGoalPosition)
    ));
    assert!(matches!(
        Grid::try_from("GG\nS.\n"),
        Err(Error::MultipleGoalPosition(_, _))
    ));
    assert!(matches!(
        Grid::try_from(".G\n..\n"),
        Err(Error::NoStartPosition)
    ));
    assert!(matches!(
        Grid::try_from("SG\n..\n"),
        Err(Error::MisplacedStartPosition(_, _))
    ));
}
