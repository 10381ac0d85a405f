//! Given steps for drag-and-drop BDD scenarios.

use super::world::DragWorld;
use rstest_bdd_macros::given;

#[given(r#"a column "{column}" holding "{tasks}""#)]
fn column_holding(world: &mut DragWorld, column: String, tasks: String) {
    let task_ids = tasks.split(',').map(|task| task.trim().to_owned()).collect();
    world.columns.push((column, task_ids));
}

#[given(r#"an empty column "{column}""#)]
fn empty_column(world: &mut DragWorld, column: String) {
    world.columns.push((column, Vec::new()));
}
