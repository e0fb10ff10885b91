//! Broker version command handler.
//!
//! Read-only and broker-level: no ids, no tenant scope, no create or
//! delete, so it sits outside the generic resource machinery.

use orion_api::{OrionClient, VersionInfo};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;
use crate::table::Detail;

pub async fn handle(client: &OrionClient, global: &GlobalOpts) -> Result<(), CliError> {
    let version = client
        .get_version()
        .await
        .map_err(|e| CliError::remote("version", None, e))?;

    let out = output::render_single(&global.output, &version, detail, |v| {
        v.orion.version.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

fn detail(version: &VersionInfo, out: &mut Detail) {
    let orion = &version.orion;
    out.field("Version:", &orion.version);
    out.field("Uptime:", &orion.uptime);
    out.field("GitHash:", &orion.git_hash);
    out.field("CompileTime:", &orion.compile_time);
    out.field("CompiledBy:", &orion.compiled_by);
    out.field("CompiledIn:", &orion.compiled_in);
    out.field("ReleaseDate:", &orion.release_date);
    out.field("Doc:", &orion.doc);
}

#[cfg(test)]
mod tests {
    use orion_api::OrionVersion;

    use super::*;

    #[test]
    fn detail_lists_build_metadata_in_order() {
        let version = VersionInfo {
            orion: OrionVersion {
                version: "3.10.1".into(),
                uptime: "0 d, 2 h".into(),
                git_hash: "deadbeef".into(),
                ..OrionVersion::default()
            },
        };

        let mut detail_out = Detail::new();
        detail(&version, &mut detail_out);
        let out = detail_out.render();

        let version_line = out.lines().position(|l| l.starts_with("Version:"));
        let hash_line = out.lines().position(|l| l.starts_with("GitHash:"));
        assert!(version_line < hash_line);
        assert!(out.contains("3.10.1"));
    }
}
