//! `dlform run` – replay a scenario and print the resulting page state.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use dlform_core::controller::{Event, PageController};
use dlform_core::scenario::{Scenario, Step};
use dlform_core::snapshot::PageSnapshot;

pub async fn run_scenario(path: &Path, json: bool) -> Result<()> {
    let scenario = Scenario::load(path)?;
    let page = scenario.page.build();
    let clipboard = scenario.clipboard.build();

    let mut controller = PageController::attach(&page, clipboard).await;
    for step in &scenario.steps {
        tracing::debug!("replaying step {:?}", step);
        match step {
            Step::Click { id } => controller.dispatch(Event::Click { id: id.clone() }).await,
            Step::Submit => controller.dispatch(Event::Submit).await,
            Step::Focus { id } => controller.dispatch(Event::Focus { id: id.clone() }).await,
            Step::Wait { ms } => tokio::time::sleep(Duration::from_millis(*ms)).await,
        }
    }

    let snapshot = PageSnapshot::capture(&page);
    controller.detach();

    if json {
        println!("{}", snapshot.to_json()?);
    } else {
        print!("{snapshot}");
    }
    Ok(())
}
