//! Behaviour tests for drag-and-drop reconciliation.

#[path = "board_drag_steps/mod.rs"]
mod board_drag_steps_defs;

use board_drag_steps_defs::world::{DragWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/board_drag.feature",
    name = "Drop a task onto a task in another column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drop_onto_task_in_other_column(world: DragWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_drag.feature",
    name = "Drop a task onto an empty column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drop_onto_empty_column(world: DragWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_drag.feature",
    name = "Reorder a task further down its own column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_within_column(world: DragWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_drag.feature",
    name = "Drop a task onto itself"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drop_onto_itself(world: DragWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_drag.feature",
    name = "Release a task outside any target"
)]
#[tokio::test(flavor = "multi_thread")]
async fn release_outside_board(world: DragWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/board_drag.feature", name = "Cancel a drag")]
#[tokio::test(flavor = "multi_thread")]
async fn cancel_drag(world: DragWorld) {
    let _ = world;
}
