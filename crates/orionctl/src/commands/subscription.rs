//! Subscription resource kind: summary row and nested detail layout.

use tabled::Tabled;

use orion_api::{OrionClient, Scope, Subscription};

use crate::commands::resource::Resource;
use crate::commands::util::{entity_line, fmt_opt, fmt_time};
use crate::table::Detail;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub struct SubscriptionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Notification URL")]
    notification_url: String,
    #[tabled(rename = "LastSuccess")]
    last_success: String,
}

impl From<&Subscription> for SubscriptionRow {
    fn from(sub: &Subscription) -> Self {
        Self {
            id: sub.id.clone().unwrap_or_default(),
            description: sub.description.clone().unwrap_or_default(),
            notification_url: sub
                .notification
                .http
                .as_ref()
                .map(|h| h.url.clone())
                .unwrap_or_default(),
            last_success: fmt_time(sub.notification.last_success),
        }
    }
}

// ── Capability set ──────────────────────────────────────────────────

impl Resource for Subscription {
    const KIND: &'static str = "subscription";

    type Row = SubscriptionRow;

    fn id(&self) -> String {
        self.id.clone().unwrap_or_default()
    }

    fn summary_row(&self) -> Self::Row {
        SubscriptionRow::from(self)
    }

    fn detail(&self, out: &mut Detail) {
        out.field("ID:", self.id.as_deref().unwrap_or_default());
        out.field("Description:", self.description.as_deref().unwrap_or_default());

        out.heading("Subject:");
        for (i, entity) in self.subject.entities.iter().enumerate() {
            let label = if i == 0 { "    Entities:" } else { "" };
            out.field(label, entity_line(entity));
        }
        if let Some(ref condition) = self.subject.condition {
            out.heading("    Condition:");
            for (i, attr) in condition.attrs.iter().enumerate() {
                let label = if i == 0 { "        Attrs:" } else { "" };
                out.field(label, attr);
            }
            if let Some(ref expression) = condition.expression {
                out.heading("        Expression:");
                out.field("            Q:", expression.q.as_deref().unwrap_or_default());
            }
        }

        out.heading("Notification:");
        out.heading("    HTTP:");
        out.field(
            "        URL:",
            self.notification
                .http
                .as_ref()
                .map(|h| h.url.as_str())
                .unwrap_or_default(),
        );
        for (i, attr) in self.notification.attrs.iter().enumerate() {
            let label = if i == 0 { "    Attrs:" } else { "" };
            out.field(label, attr);
        }
        out.field(
            "    AttrsFormat:",
            self.notification.attrs_format.as_deref().unwrap_or_default(),
        );
        out.field("    LastFailure:", fmt_time(self.notification.last_failure));
        out.field(
            "    LastFailureReason:",
            self.notification
                .last_failure_reason
                .as_deref()
                .unwrap_or_default(),
        );
        out.field(
            "    LastNotification:",
            fmt_time(self.notification.last_notification),
        );
        out.field("    LastSuccess:", fmt_time(self.notification.last_success));
        out.field(
            "    LastSuccessCode:",
            fmt_opt(self.notification.last_success_code),
        );
        out.field(
            "    OnlyChangedAttrs:",
            fmt_opt(self.notification.only_changed_attrs),
        );
        out.field("    TimesSent:", fmt_opt(self.notification.times_sent));

        out.field("Status:", self.status.as_deref().unwrap_or_default());
        out.field("Expires:", fmt_time(self.expires));
        out.field("Throttling:", fmt_opt(self.throttling));
    }

    async fn fetch_all(
        client: &OrionClient,
        scope: &Scope,
    ) -> Result<Vec<Self>, orion_api::Error> {
        client.list_subscriptions(scope).await
    }

    async fn fetch_one(
        client: &OrionClient,
        id: &str,
        scope: &Scope,
    ) -> Result<Self, orion_api::Error> {
        client.get_subscription(id, scope).await
    }

    async fn submit(
        client: &OrionClient,
        resource: &Self,
        scope: &Scope,
    ) -> Result<String, orion_api::Error> {
        client.create_subscription(resource, scope).await
    }

    async fn remove(
        client: &OrionClient,
        id: &str,
        scope: &Scope,
    ) -> Result<(), orion_api::Error> {
        client.delete_subscription(id, scope).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use orion_api::{Condition, EntityMatcher, Notification, NotificationHttp, Subject};

    use super::*;

    fn sample() -> Subscription {
        Subscription {
            id: Some("sub1".into()),
            description: Some("room watch".into()),
            subject: Subject {
                entities: vec![
                    EntityMatcher {
                        id: Some("Room1".into()),
                        entity_type: Some("Room".into()),
                        ..EntityMatcher::default()
                    },
                    EntityMatcher {
                        id_pattern: Some(".*".into()),
                        entity_type: Some("Room".into()),
                        ..EntityMatcher::default()
                    },
                ],
                condition: Some(Condition {
                    attrs: vec!["temperature".into()],
                    expression: None,
                }),
            },
            notification: Notification {
                http: Some(NotificationHttp {
                    url: "http://localhost:1028/accumulate".into(),
                }),
                attrs: vec!["temperature".into()],
                ..Notification::default()
            },
            ..Subscription::default()
        }
    }

    #[test]
    fn summary_row_flattens_notification_url() {
        let row = sample().summary_row();
        assert_eq!(row.id, "sub1");
        assert_eq!(row.notification_url, "http://localhost:1028/accumulate");
        assert_eq!(row.last_success, "");
    }

    #[test]
    fn detail_lists_each_entity_on_its_own_line() {
        let mut detail = Detail::new();
        sample().detail(&mut detail);
        let out = detail.render();

        assert!(out.contains("Id: Room1, Type: Room"));
        assert!(out.contains("IdPattern: .*, Type: Room"));
        assert!(out.contains("Subject:"));
        assert!(out.contains("Notification:"));
    }
}
