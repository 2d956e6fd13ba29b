//! Structural validation of the exhaustively enumerated game tree

use tictoc::{board_from_text, has_winner, Board, GameTree};

const DIGITS: [char; 3] = ['0', '1', '2'];

#[test]
fn root_census_matches_known_totals() {
    let tree = GameTree::build();
    let root = tree.stats_of(Board::EMPTY).expect("root stats recorded");

    assert_eq!(root.first_wins, 131_184);
    assert_eq!(root.second_wins, 77_904);
    assert_eq!(root.ties, 46_080);
    assert_eq!(root.total(), 255_168);
}

#[test]
fn exact_position_counts() {
    let tree = GameTree::build();

    // 5,478 distinct legal positions, of which 958 are terminal
    assert_eq!(tree.stats_len(), 5_478);
    assert_eq!(tree.tree_len(), 4_520);
}

#[test]
fn every_child_extends_its_parent_by_one_move() {
    let tree = GameTree::build();

    for key in tree.stats_keys() {
        let parent_ply = key.ply();
        for &child in tree.children_of(key) {
            assert_eq!(child.ply(), parent_ply + 1);

            let mut changed = Vec::new();
            for index in 0..9 {
                if key.cell(index) != child.cell(index) {
                    changed.push(index);
                }
            }
            assert_eq!(changed.len(), 1, "child differs in exactly one cell");

            let index = changed[0];
            assert_eq!(key.cell(index), 0);
            assert_eq!(child.cell(index), parent_ply % 2 + 1);
        }
    }
}

#[test]
fn terminal_boards_have_no_children() {
    let tree = GameTree::build();

    for key in tree.stats_keys() {
        let terminal = (key.ply() > 4 && has_winner(key)) || key.ply() == 9;
        if terminal {
            assert!(tree.children_of(key).is_empty());
        } else {
            assert!(!tree.children_of(key).is_empty());
        }
    }
}

#[test]
fn child_lists_repeat_one_run_per_path() {
    let tree = GameTree::build();

    // The walk revisits a board once per move order reaching it, appending
    // the same ascending run of children each time.
    for key in tree.stats_keys() {
        let children = tree.children_of(key);
        if children.is_empty() {
            continue;
        }

        let run = (9 - key.ply()) as usize;
        assert_eq!(children.len() % run, 0);
        for window in children.chunks(run) {
            assert_eq!(window, &children[..run]);
        }
    }
}

#[test]
fn internal_stats_sum_over_one_run_of_children() {
    let tree = GameTree::build();

    for key in tree.stats_keys() {
        let children = tree.children_of(key);
        if children.is_empty() {
            continue;
        }

        let run = (9 - key.ply()) as usize;
        let sum = children[..run]
            .iter()
            .map(|&child| tree.stats_of(child).expect("child stats recorded"))
            .fold(tictoc::Stats::default(), |acc, s| acc + s);
        assert_eq!(Some(sum), tree.stats_of(key));
    }
}

#[test]
fn path_multiplicity_shows_in_child_lists() {
    let tree = GameTree::build();

    // Reached only one way: 9 children for the root, 8 after one move
    assert_eq!(tree.children_of(Board::EMPTY).len(), 9);
    let one_move = board_from_text("100000000", DIGITS).unwrap();
    assert_eq!(tree.children_of(one_move).len(), 8);

    // Two first-mover pieces permute, so this ply-3 board is reached
    // twice and holds two runs of its 6 children
    let two_paths = board_from_text("121000000", DIGITS).unwrap();
    assert_eq!(tree.children_of(two_paths).len(), 12);
}

#[test]
fn unknown_boards_are_distinguished_from_recorded_ones() {
    let tree = GameTree::build();

    let unreachable = board_from_text("222222222", DIGITS).unwrap();
    assert_eq!(tree.stats_of(unreachable), None);
    assert!(tree.children_of(unreachable).is_empty());

    let full_tie = board_from_text("121122212", DIGITS).unwrap();
    let stats = tree.stats_of(full_tie).expect("legal tie board recorded");
    assert_eq!(stats.ties, 1);
    assert_eq!(stats.first_wins + stats.second_wins, 0);
}
