use dockpatch_core::{BACKEND_TARGETS, DEFAULT_BRANCH};

pub fn targets() -> anyhow::Result<()> {
    let width = BACKEND_TARGETS
        .iter()
        .map(|t| t.branch.len())
        .max()
        .unwrap_or(0);

    for target in BACKEND_TARGETS {
        println!("{:<width$}  {}", target.branch, target.url);
    }
    println!();
    println!("Any other branch uses the `{DEFAULT_BRANCH}` backend.");
    Ok(())
}
