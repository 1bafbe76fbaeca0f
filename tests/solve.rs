use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn solve_output_right_answer_for_input_maze() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.args(["--input", "inputs.txt", "--no-render"]);

    cmd.assert()
        .success()
        .stdout(str::contains("It takes 12 moves from (4, 0) to (0, 4): rrruulluurrr"))
        .stdout(str::contains("#oooG"));
}

#[test]
fn solve_generated_maze_without_rendering() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.args(["--seed", "7", "--no-render"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Generate 20x20 maze with seed 7."))
        .stdout(str::contains("moves from (19, 0)"));
}

#[test]
fn solve_rejects_bad_cell_length() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.args(["--cell-length", "30", "--no-render"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("must be positive and divide maze length(800)"));
}

#[test]
fn solve_reports_missing_input_file() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.args(["--input", "no_such_maze.txt", "--no-render"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to read maze from given file(no_such_maze.txt)."));
}
