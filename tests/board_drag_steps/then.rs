//! Then steps for drag-and-drop BDD scenarios.

use super::world::{DragWorld, run_async};
use kanban::board::domain::ColumnId;
use rstest_bdd_macros::then;

fn listed(world: &mut DragWorld, column: &str) -> Result<Vec<String>, eyre::Report> {
    let column_id = ColumnId::new(column)?;
    let snapshot = run_async(world.service()?.snapshot());
    let listing = snapshot
        .column(&column_id)
        .ok_or_else(|| eyre::eyre!("column {column} missing from board"))?;
    Ok(listing.task_ids().iter().map(ToString::to_string).collect())
}

#[then(r#"column "{column}" holds "{tasks}""#)]
fn column_holds(world: &mut DragWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let expected: Vec<String> = tasks.split(',').map(|task| task.trim().to_owned()).collect();
    let actual = listed(world, &column)?;
    if actual != expected {
        return Err(eyre::eyre!(
            "expected column {column} to hold {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then("the board is unchanged")]
fn board_unchanged(world: &mut DragWorld) -> Result<(), eyre::Report> {
    let history = run_async(world.service()?.history());
    if let Some(record) = history.iter().find(|record| record.changed) {
        return Err(eyre::eyre!("unexpected transition {record:?}"));
    }
    let snapshot = run_async(world.service()?.snapshot());
    snapshot.check_invariants()?;
    Ok(())
}

#[then("no drag is in progress")]
fn no_drag(world: &DragWorld) -> Result<(), eyre::Report> {
    if let Some(task) = world.session.dragging() {
        return Err(eyre::eyre!("task {task} is still being dragged"));
    }
    Ok(())
}
