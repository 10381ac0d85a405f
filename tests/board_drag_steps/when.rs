//! When steps for drag-and-drop BDD scenarios.

use super::world::{DragWorld, run_async};
use kanban::board::domain::TaskId;
use rstest_bdd_macros::when;

#[when(r#"I start dragging "{task}""#)]
fn start_dragging(world: &mut DragWorld, task: String) -> Result<(), eyre::Report> {
    world.service()?;
    world.session.start(TaskId::new(task)?);
    Ok(())
}

#[when(r#"I drop it over "{target}""#)]
fn drop_over(world: &mut DragWorld, target: String) -> Result<(), eyre::Report> {
    release(world, Some(&target))
}

#[when("I release it outside the board")]
fn release_outside(world: &mut DragWorld) -> Result<(), eyre::Report> {
    release(world, None)
}

#[when("I cancel the drag")]
fn cancel_drag(world: &mut DragWorld) {
    world.session.cancel();
}

fn release(world: &mut DragWorld, over: Option<&str>) -> Result<(), eyre::Report> {
    let mut session = std::mem::take(&mut world.session);
    let service = world.service()?;
    run_async(service.complete_drag(&mut session, over));
    world.session = session;
    Ok(())
}
