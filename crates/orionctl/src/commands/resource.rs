//! Generic resource command handlers.
//!
//! `get` / `describe` / `create` / `delete` are written once against the
//! [`Resource`] capability set and instantiated per resource kind; only
//! the row and detail rendering differ between kinds.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tabled::Tabled;

use orion_api::{OrionClient, Scope};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;
use crate::table::Detail;

/// Capability set a resource kind exposes to the generic handlers.
pub(crate) trait Resource: Serialize + DeserializeOwned + Sized {
    /// Kind name as it appears in messages (`subscription "x" created`).
    const KIND: &'static str;

    /// Dense-table row type.
    type Row: Tabled;

    /// Identifier for plain output; empty when the broker did not
    /// assign one.
    fn id(&self) -> String;

    /// Summary row for the dense table.
    fn summary_row(&self) -> Self::Row;

    /// Full nested detail for describe.
    fn detail(&self, out: &mut Detail);

    async fn fetch_all(client: &OrionClient, scope: &Scope) -> Result<Vec<Self>, orion_api::Error>;
    async fn fetch_one(
        client: &OrionClient,
        id: &str,
        scope: &Scope,
    ) -> Result<Self, orion_api::Error>;
    async fn submit(
        client: &OrionClient,
        resource: &Self,
        scope: &Scope,
    ) -> Result<String, orion_api::Error>;
    async fn remove(client: &OrionClient, id: &str, scope: &Scope)
        -> Result<(), orion_api::Error>;
}

// ── Shared fetch logic ───────────────────────────────────────────────

/// Fetch all records, or the named ones individually in input order.
///
/// Sequential; the first per-id failure aborts the whole command, so a
/// partial result set is never rendered.
async fn fetch<R: Resource>(
    client: &OrionClient,
    ids: &[String],
    scope: &Scope,
) -> Result<Vec<R>, CliError> {
    if ids.is_empty() {
        return R::fetch_all(client, scope)
            .await
            .map_err(|e| CliError::remote(R::KIND, None, e));
    }

    let mut records = Vec::with_capacity(ids.len());
    for id in ids {
        let record = R::fetch_one(client, id, scope)
            .await
            .map_err(|e| CliError::remote(R::KIND, Some(id), e))?;
        records.push(record);
    }
    Ok(records)
}

// ── Handlers ─────────────────────────────────────────────────────────

/// `get <kind> [ids...]` -- dense summary table.
pub(crate) async fn get<R: Resource>(
    client: &OrionClient,
    ids: &[String],
    scope: &Scope,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let records = fetch::<R>(client, ids, scope).await?;
    let out = output::render_list(&global.output, &records, R::summary_row, R::id);
    output::print_output(&out, global.quiet);
    Ok(())
}

/// `describe <kind> [ids...]` -- full nested detail per record.
pub(crate) async fn describe<R: Resource>(
    client: &OrionClient,
    ids: &[String],
    scope: &Scope,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let records = fetch::<R>(client, ids, scope).await?;
    let out = output::render_detail(&global.output, &records, R::detail, R::id);
    output::print_output(&out, global.quiet);
    Ok(())
}

/// `create <kind> -f <file>` -- decode a local YAML definition and
/// submit it; the printed id comes verbatim from the broker.
pub(crate) async fn create<R: Resource>(
    client: &OrionClient,
    file: &Path,
    scope: &Scope,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let contents = std::fs::read_to_string(file).map_err(|e| CliError::FileRead {
        path: file.to_owned(),
        source: e,
    })?;
    let resource: R = serde_yaml::from_str(&contents).map_err(|e| CliError::ResourceDecode {
        kind: R::KIND,
        path: file.to_owned(),
        source: e,
    })?;

    let id = R::submit(client, &resource, scope)
        .await
        .map_err(|e| CliError::remote(R::KIND, None, e))?;

    if !global.quiet {
        println!("{} \"{id}\" created", R::KIND);
    }
    Ok(())
}

/// `delete <kind> <ids...>` -- sequential, continue-on-error.
///
/// Unlike get/describe, a failed id must not strand the ones after it;
/// each failure is reported and the loop moves on. The command still
/// exits non-zero when anything failed.
pub(crate) async fn delete<R: Resource>(
    client: &OrionClient,
    ids: &[String],
    scope: &Scope,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut failed = 0usize;
    for id in ids {
        match R::remove(client, id, scope).await {
            Ok(()) => {
                if !global.quiet {
                    println!("{} \"{id}\" deleted", R::KIND);
                }
            }
            Err(err) => {
                failed += 1;
                eprintln!("error: failed to delete {} \"{id}\": {err}", R::KIND);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::DeleteFailed {
            kind: R::KIND,
            failed,
            total: ids.len(),
        });
    }
    Ok(())
}
