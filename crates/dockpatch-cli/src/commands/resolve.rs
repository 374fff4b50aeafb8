use dockpatch_core::resolve_backend_url;

pub fn resolve(branch: Option<String>) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let branch = super::current_branch(branch, &config);

    println!("{}", resolve_backend_url(&branch));
    Ok(())
}
