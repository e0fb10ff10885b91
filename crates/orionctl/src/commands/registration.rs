//! Registration resource kind: summary row and nested detail layout.

use tabled::Tabled;

use orion_api::{OrionClient, Registration, Scope};

use crate::commands::resource::Resource;
use crate::commands::util::{entity_line, fmt_opt, fmt_time};
use crate::table::Detail;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct RegistrationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Provider URL")]
    provider_url: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Registration> for RegistrationRow {
    fn from(reg: &Registration) -> Self {
        Self {
            id: reg.id.clone().unwrap_or_default(),
            provider_url: reg
                .provider
                .http
                .as_ref()
                .map(|h| h.url.clone())
                .unwrap_or_default(),
            status: reg.status.clone().unwrap_or_default(),
        }
    }
}

// ── Capability set ──────────────────────────────────────────────────

impl Resource for Registration {
    const KIND: &'static str = "registration";

    type Row = RegistrationRow;

    fn id(&self) -> String {
        self.id.clone().unwrap_or_default()
    }

    fn summary_row(&self) -> Self::Row {
        RegistrationRow::from(self)
    }

    fn detail(&self, out: &mut Detail) {
        out.field("ID:", self.id.as_deref().unwrap_or_default());
        out.field("Description:", self.description.as_deref().unwrap_or_default());

        out.heading("DataProvided:");
        for (i, entity) in self.data_provided.entities.iter().enumerate() {
            let label = if i == 0 { "    Entities:" } else { "" };
            out.field(label, entity_line(entity));
        }
        for (i, attr) in self.data_provided.attrs.iter().enumerate() {
            let label = if i == 0 { "    Attrs:" } else { "" };
            out.field(label, attr);
        }

        out.heading("Provider:");
        out.heading("    HTTP:");
        out.field(
            "        URL:",
            self.provider
                .http
                .as_ref()
                .map(|h| h.url.as_str())
                .unwrap_or_default(),
        );
        out.field(
            "    LegacyForwarding:",
            fmt_opt(self.provider.legacy_forwarding),
        );
        out.field(
            "    SupportedForwardingMode:",
            self.provider
                .supported_forwarding_mode
                .as_deref()
                .unwrap_or_default(),
        );

        out.field("Status:", self.status.as_deref().unwrap_or_default());
        out.field("Expires:", fmt_time(self.expires));
    }

    async fn fetch_all(
        client: &OrionClient,
        scope: &Scope,
    ) -> Result<Vec<Self>, orion_api::Error> {
        client.list_registrations(scope).await
    }

    async fn fetch_one(
        client: &OrionClient,
        id: &str,
        scope: &Scope,
    ) -> Result<Self, orion_api::Error> {
        client.get_registration(id, scope).await
    }

    async fn submit(
        client: &OrionClient,
        resource: &Self,
        scope: &Scope,
    ) -> Result<String, orion_api::Error> {
        client.create_registration(resource, scope).await
    }

    async fn remove(
        client: &OrionClient,
        id: &str,
        scope: &Scope,
    ) -> Result<(), orion_api::Error> {
        client.delete_registration(id, scope).await
    }
}

#[cfg(test)]
mod tests {
    use orion_api::{DataProvided, EntityMatcher, Provider, ProviderHttp};

    use super::*;

    fn sample() -> Registration {
        Registration {
            id: Some("reg1".into()),
            description: Some("humidity source".into()),
            data_provided: DataProvided {
                entities: vec![EntityMatcher {
                    id: Some("room2".into()),
                    entity_type: Some("Room".into()),
                    ..EntityMatcher::default()
                }],
                attrs: vec!["relativeHumidity".into()],
            },
            provider: Provider {
                http: Some(ProviderHttp {
                    url: "http://localhost:1234".into(),
                }),
                legacy_forwarding: Some(true),
                supported_forwarding_mode: Some("all".into()),
            },
            status: Some("active".into()),
            ..Registration::default()
        }
    }

    #[test]
    fn summary_row_flattens_provider_url() {
        let row = sample().summary_row();
        assert_eq!(row.id, "reg1");
        assert_eq!(row.provider_url, "http://localhost:1234");
        assert_eq!(row.status, "active");
    }

    #[test]
    fn detail_includes_forwarding_settings() {
        let mut detail = Detail::new();
        sample().detail(&mut detail);
        let out = detail.render();

        assert!(out.contains("LegacyForwarding:"));
        assert!(out.contains("true"));
        assert!(out.contains("SupportedForwardingMode:"));
        assert!(out.contains("relativeHumidity"));
    }
}
