use std::io::Write;

use dockpatch_build::dockerfile;
use dockpatch_core::resolve_backend_url;

use crate::PatchArgs;

pub fn patch(args: PatchArgs) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let branch = super::current_branch(args.branch, &config);
    let dockerfile_path = args.dockerfile.unwrap_or(config.patch.dockerfile);

    if args.dry_run {
        let url = resolve_backend_url(&branch);
        let (report, content) = dockerfile::preview_file(&dockerfile_path, url)?;
        tracing::info!(
            path = %report.path.display(),
            replaced = report.replaced,
            "dry run; file left untouched"
        );
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&content)?;
        stdout.flush()?;
        return Ok(());
    }

    let report = dockerfile::patch_for_branch(&dockerfile_path, &branch)?;

    println!(
        "Patched {}: {} line(s) -> {}",
        report.path.display(),
        report.replaced,
        report.url
    );
    Ok(())
}
