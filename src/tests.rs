#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use ndarray::Array2;

    use crate::builder::{BuilderInvalidReason, SquareBoardBuilder};
    use crate::{find_longest_path, find_longest_path_with, Board, CellStatus, Location, ParseFailure, Path, PathDefect, SearchFailure, SearchOptions};

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn builder_rejects_empty_dims() {
        let builder = SquareBoardBuilder::with_dims((0, 3));
        assert_eq!(builder.is_valid(), Some(&vec![BuilderInvalidReason::InvalidDimensions]));
        assert!(builder.build().is_err());
    }

    #[test]
    fn builder_rejects_out_of_bounds() {
        let mut builder = SquareBoardBuilder::with_dims((2, 2));
        builder
            .block(Location(2, 0))
            // ignored, the builder is already invalid
            .block(Location(0, 0));

        assert_eq!(builder.build().err(), Some(&vec![BuilderInvalidReason::FeatureOutOfBounds(Location(2, 0))]));
    }

    #[test]
    fn builder_block_and_unblock() {
        let board = SquareBoardBuilder::with_dims((2, 3))
            .block(Location(0, 1))
            .block(Location(1, 2))
            .block(Location(1, 0))
            .unblock(Location(1, 0))
            .build()
            .unwrap();

        assert_eq!(format!("{}", board), ".#.
..#
");
        assert_eq!(board.free_count(), 4);
    }

    #[test]
    fn parse_saved_configuration() {
        // light gray, green and path cells are free; red ones are blocked
        let board = board("LGR\nP#.\n\n");

        assert_eq!(board.dims(), (2, 3));
        assert_eq!(board.status(Location(0, 2)), Some(CellStatus::Blocked));
        assert_eq!(board.status(Location(1, 0)), Some(CellStatus::Free));
        assert_eq!(board.status(Location(2, 0)), None);
        assert_eq!(format!("{}", board), "..#
.#.
");
        assert_eq!(format!("{}", board).parse::<Board>().unwrap(), board);
    }

    #[test]
    fn parse_failures() {
        assert_eq!("".parse::<Board>(), Err(ParseFailure::Empty));
        assert_eq!("\n\n".parse::<Board>(), Err(ParseFailure::Empty));
        assert_eq!("..\n.\n".parse::<Board>(), Err(ParseFailure::RaggedRow { row: 1, expected: 2, found: 1 }));
        assert_eq!("..\n.?\n".parse::<Board>(), Err(ParseFailure::UnknownCell { row: 1, column: 1, found: '?' }));
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let board = board("...\n...\n");

        assert_eq!(board.neighbors(Location(0, 0)), vec![Location(1, 0), Location(0, 1)]);
        assert_eq!(board.neighbors(Location(1, 1)), vec![Location(0, 1), Location(1, 0), Location(1, 2)]);
    }

    #[test]
    fn free_cell_graph() {
        let board = board(".#.
.#.
..#
");
        let graph = board.graph();

        assert_eq!(board.free_count(), 6);
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.contains_edge(Location(2, 0), Location(2, 1)));
        assert_eq!(board.largest_component(), 4);
        assert_eq!(find_longest_path(&board).unwrap().len(), 4);
    }

    #[test]
    fn zero_sized_board() {
        let board = Board::from(Array2::from_elem((0, 3), CellStatus::Free));
        assert_eq!(find_longest_path(&board), Err(SearchFailure::InvalidDimensions { rows: 0, cols: 3 }));
    }

    #[test]
    fn all_blocked() {
        let board = SquareBoardBuilder::with_dims((3, 3))
            .block_all()
            .build()
            .unwrap();

        assert!(find_longest_path(&board).unwrap().is_empty());
    }

    #[test]
    fn single_free_cell() {
        let board = SquareBoardBuilder::with_dims((3, 4))
            .block_all()
            .unblock(Location(1, 2))
            .build()
            .unwrap();

        assert_eq!(find_longest_path(&board).unwrap().into_inner(), vec![Location(1, 2)]);
    }

    #[test]
    fn open_two_by_two() {
        let board = board("..\n..\n");
        let path = find_longest_path(&board).unwrap();

        // the fourth cell would close a loop
        assert_eq!(path.len(), 3);
        assert_eq!(path.check(&board), Ok(()));
    }

    #[test]
    fn disconnected_cells() {
        let board = board(".#.\n#.#\n");
        let path = find_longest_path(&board).unwrap();

        assert_eq!(path.into_inner(), vec![Location(0, 0)]);
    }

    #[test]
    fn ring_around_wall() {
        let board = board("...
.#.
...
");
        let solution = board.solve(&SearchOptions::default()).unwrap();

        assert_eq!(solution.path().len(), 7);
        assert!(solution.outcome().complete);
        assert_eq!(format!("{}", solution), "S**
.#*
E**
");
    }

    #[test]
    fn render_short_paths() {
        let solution = board("..\n..\n").solve(&SearchOptions::default()).unwrap().to_string();
        assert_eq!(solution, "S*
.E
");

        let corridor = board("..#.\n");
        assert_eq!(corridor.solve(&SearchOptions::default()).unwrap().to_string(), "SE#.\n");

        let single = board("#.\n");
        assert_eq!(single.solve(&SearchOptions::default()).unwrap().to_string(), "#S\n");
    }

    #[test]
    fn deterministic() {
        let board = board("....#
.#...
...#.
#....
");
        let first = find_longest_path_with(&board, &SearchOptions::default()).unwrap();
        let second = find_longest_path_with(&board, &SearchOptions::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.path.check(&board), Ok(()));
    }

    #[test]
    fn paths_are_valid() {
        for text in ["...\n...\n...\n", "....\n.##.\n....\n", ".#..\n....\n..#.\n", "#.\n..\n.#\n"] {
            let board = board(text);
            let path = find_longest_path(&board).unwrap();

            assert!(!path.is_empty());
            assert!(path.len() <= board.largest_component());
            assert_eq!(path.check(&board), Ok(()), "{}", text);
        }
    }

    #[test]
    fn unblocking_never_shortens() {
        let smaller = board("..#.
#...
..#.
");
        let larger = board("..#.
....
....
");
        let open = board("....\n....\n....\n");

        let smaller = find_longest_path(&smaller).unwrap().len();
        let larger = find_longest_path(&larger).unwrap().len();
        let open = find_longest_path(&open).unwrap().len();

        assert!(smaller <= larger);
        assert!(larger <= open);
    }

    #[test]
    fn node_limit_stops_early() {
        let board = board("...
.#.
...
");
        let options = SearchOptions::default().with_node_limit(NonZero::new(3));
        let outcome = find_longest_path_with(&board, &options).unwrap();

        assert!(!outcome.complete);
        assert_eq!(outcome.nodes, 3);
        assert_eq!(outcome.path.into_inner(), vec![Location(0, 0), Location(0, 1), Location(0, 2)]);

        let options = SearchOptions::default().with_node_limit(NonZero::new(1_000_000));
        assert!(find_longest_path_with(&board, &options).unwrap().complete);
    }

    #[test]
    fn stopping_at_bound_keeps_result() {
        let board = board(".....\n");
        let bounded = find_longest_path_with(&board, &SearchOptions::default()).unwrap();
        let exhaustive = find_longest_path_with(&board, &SearchOptions::default().with_stop_at_bound(false)).unwrap();

        assert_eq!(bounded.path, exhaustive.path);
        assert_eq!(bounded.path.len(), 5);
        assert_eq!(bounded.nodes, 5);
        assert_eq!(exhaustive.nodes, 25);
    }

    #[test]
    fn long_corridor() {
        let board = board(&".".repeat(100_000));
        let path = find_longest_path(&board).unwrap();

        assert_eq!(path.len(), 100_000);
        assert_eq!(path.first(), Some(&Location(0, 0)));
        assert_eq!(path.last(), Some(&Location(0, 99_999)));
        assert_eq!(path.check(&board), Ok(()));
    }

    #[test]
    fn long_winding_path() {
        // a comb: 200 rows joined at their ends through alternating gaps in the walls
        let rows = (0..399)
            .map(|row| match row % 4 {
                0 | 2 => ".".repeat(300),
                1 => format!("{}.", "#".repeat(299)),
                _ => format!(".{}", "#".repeat(299)),
            })
            .collect::<Vec<_>>()
            .join("\n");
        let board = board(&rows);
        let path = find_longest_path(&board).unwrap();

        assert_eq!(board.largest_component(), 200 * 300 + 199);
        assert_eq!(path.len(), board.largest_component());
        assert_eq!(path.check(&board), Ok(()));
    }

    #[test]
    fn path_defects() {
        let board = board("..\n.#\n");

        assert_eq!(Path::from(vec![Location(0, 0), Location(1, 1)]).check(&board), Err(PathDefect::Blocked(Location(1, 1))));
        assert_eq!(Path::from(vec![Location(1, 0), Location(0, 1)]).check(&board), Err(PathDefect::NotAdjacent(Location(1, 0), Location(0, 1))));
        assert_eq!(Path::from(vec![Location(0, 0), Location(0, 1), Location(0, 0)]).check(&board), Err(PathDefect::Repeated(Location(0, 0))));
        assert_eq!(Path::from(vec![Location(5, 5)]).check(&board), Err(PathDefect::OutOfBounds(Location(5, 5))));

        let open = self::board("..\n..\n");
        // jumps into the middle of the ring, which would also touch three earlier cells
        let jump = Path::from(vec![
            Location(0, 0), Location(0, 1), Location(0, 2), Location(1, 2),
            Location(2, 2), Location(2, 1), Location(2, 0), Location(1, 1),
        ]);
        assert_eq!(jump.check(&self::board("...\n...\n...\n")), Err(PathDefect::NotAdjacent(Location(2, 0), Location(1, 1))));

        let cycle = Path::from(vec![Location(0, 0), Location(0, 1), Location(1, 1), Location(1, 0)]);
        assert_eq!(cycle.check(&open), Err(PathDefect::Branching(Location(1, 0))));
    }
}
