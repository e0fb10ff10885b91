//! Shared display helpers for command handlers.

use chrono::{DateTime, Utc};

use orion_api::EntityMatcher;

/// One-line rendering of an entity matcher: `Id: Room1, Type: Room` or
/// `IdPattern: .*, Type: Room`.
pub fn entity_line(entity: &EntityMatcher) -> String {
    let matcher = match (&entity.id, &entity.id_pattern) {
        (Some(id), _) => format!("Id: {id}"),
        (None, Some(pattern)) => format!("IdPattern: {pattern}"),
        (None, None) => String::new(),
    };
    format!(
        "{matcher}, Type: {}",
        entity.entity_type.as_deref().unwrap_or_default()
    )
}

/// Render an optional displayable value, empty when absent.
pub fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render an optional timestamp as RFC 3339, empty when absent.
pub fn fmt_time(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_line_prefers_exact_id_over_pattern() {
        let entity = EntityMatcher {
            id: Some("Room1".into()),
            id_pattern: Some(".*".into()),
            entity_type: Some("Room".into()),
        };
        assert_eq!(entity_line(&entity), "Id: Room1, Type: Room");
    }

    #[test]
    fn entity_line_falls_back_to_pattern() {
        let entity = EntityMatcher {
            id: None,
            id_pattern: Some("Room.*".into()),
            entity_type: Some("Room".into()),
        };
        assert_eq!(entity_line(&entity), "IdPattern: Room.*, Type: Room");
    }

    #[test]
    fn fmt_time_is_empty_for_absent_timestamps() {
        assert_eq!(fmt_time(None), "");

        let ts = "2020-10-05T16:00:00Z".parse().ok();
        assert_eq!(fmt_time(ts), "2020-10-05T16:00:00Z");
    }
}
