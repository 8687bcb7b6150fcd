use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder for fields with no value
pub const NOT_AVAILABLE: &str = "N/A";

/// Heading used when an event has no title
pub const UNTITLED_EVENT: &str = "Untitled Event";

/// Descriptions starting with this prefix render as links
pub const LINK_PREFIX: &str = "http";

/// One event record as served by the events endpoint.
///
/// Every field is optional and nothing is validated. Empty strings count as
/// missing when the display fields are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Accept strings, numbers and booleans as text.
///
/// Falsy scalars (`null`, `false`, `0`, `-0`) count as missing, like the
/// empty string does during field resolution.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(true)) => Ok(Some(true.to_string())),
        Some(Value::Array(_)) => Err(D::Error::custom("expected text, found an array")),
        Some(Value::Object(_)) => Err(D::Error::custom("expected text, found an object")),
    }
}

/// Non-empty value of an optional field
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// How the description paragraph is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Missing,
    Link(String),
    Text(String),
}

impl Description {
    /// Text shown to the user
    pub fn as_str(&self) -> &str {
        match self {
            Description::Missing => NOT_AVAILABLE,
            Description::Link(url) => url,
            Description::Text(text) => text,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Description::Link(_))
    }
}

/// Display strings derived from a single event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: Description,
}

impl Event {
    /// Title, or the untitled placeholder
    pub fn display_title(&self) -> String {
        present(&self.title).unwrap_or(UNTITLED_EVENT).to_string()
    }

    /// `date`, then `start_date`, then N/A
    pub fn display_date(&self) -> String {
        present(&self.date)
            .or_else(|| present(&self.start_date))
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    }

    /// `time` if set, otherwise `start_time - end_time` with either side
    /// optional.
    ///
    /// A lone `end_time` yields `" - {end_time}"`, not N/A.
    pub fn display_time(&self) -> String {
        if let Some(time) = present(&self.time) {
            return time.to_string();
        }

        let mut composed = present(&self.start_time).unwrap_or_default().to_string();
        if let Some(end) = present(&self.end_time) {
            composed.push_str(" - ");
            composed.push_str(end);
        }

        if composed.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            composed
        }
    }

    pub fn display_location(&self) -> String {
        present(&self.location).unwrap_or(NOT_AVAILABLE).to_string()
    }

    /// Description, classified as a link when it starts with `http`
    pub fn display_description(&self) -> Description {
        match present(&self.description) {
            None => Description::Missing,
            Some(text) if text.starts_with(LINK_PREFIX) => Description::Link(text.to_string()),
            Some(text) => Description::Text(text.to_string()),
        }
    }

    /// Resolve every display field at once
    pub fn display_fields(&self) -> DisplayFields {
        DisplayFields {
            title: self.display_title(),
            date: self.display_date(),
            time: self.display_time(),
            location: self.display_location(),
            description: self.display_description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back() {
        let fields = Event::default().display_fields();

        assert_eq!(fields.title, UNTITLED_EVENT);
        assert_eq!(fields.date, NOT_AVAILABLE);
        assert_eq!(fields.time, NOT_AVAILABLE);
        assert_eq!(fields.location, NOT_AVAILABLE);
        assert_eq!(fields.description, Description::Missing);
        assert_eq!(fields.description.as_str(), NOT_AVAILABLE);
    }

    #[test]
    fn test_date_fallback_chain() {
        let event = Event {
            date: Some("2024-05-01".to_string()),
            start_date: Some("2024-04-30".to_string()),
            ..Default::default()
        };
        assert_eq!(event.display_date(), "2024-05-01");

        let event = Event {
            start_date: Some("2024-04-30".to_string()),
            ..Default::default()
        };
        assert_eq!(event.display_date(), "2024-04-30");

        // Empty strings are skipped
        let event = Event {
            date: Some(String::new()),
            start_date: Some("2024-04-30".to_string()),
            ..Default::default()
        };
        assert_eq!(event.display_date(), "2024-04-30");
    }

    #[test]
    fn test_time_composition() {
        let event = Event {
            time: Some("all day".to_string()),
            start_time: Some("9am".to_string()),
            end_time: Some("5pm".to_string()),
            ..Default::default()
        };
        assert_eq!(event.display_time(), "all day");

        let event = Event {
            start_time: Some("9am".to_string()),
            end_time: Some("5pm".to_string()),
            ..Default::default()
        };
        assert_eq!(event.display_time(), "9am - 5pm");

        let event = Event {
            start_time: Some("9am".to_string()),
            ..Default::default()
        };
        assert_eq!(event.display_time(), "9am");

        let event = Event {
            end_time: Some("5pm".to_string()),
            ..Default::default()
        };
        assert_eq!(event.display_time(), " - 5pm");
    }

    #[test]
    fn test_description_classification() {
        let event = Event {
            description: Some("http://example.com/x".to_string()),
            ..Default::default()
        };
        assert_eq!(
            event.display_description(),
            Description::Link("http://example.com/x".to_string())
        );

        let event = Event {
            description: Some("https://example.com".to_string()),
            ..Default::default()
        };
        assert!(event.display_description().is_link());

        let event = Event {
            description: Some("call 555-1234".to_string()),
            ..Default::default()
        };
        assert_eq!(
            event.display_description(),
            Description::Text("call 555-1234".to_string())
        );

        // Prefix match is case sensitive
        let event = Event {
            description: Some("HTTP://EXAMPLE.COM".to_string()),
            ..Default::default()
        };
        assert!(!event.display_description().is_link());
    }

    #[test]
    fn test_lenient_decoding() {
        let events: Vec<Event> = serde_json::from_str(
            r#"[
                {"title": "Meetup", "time": 18, "location": null, "extra": {"ignored": true}},
                {"description": true},
                {}
            ]"#,
        )
        .unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].title.as_deref(), Some("Meetup"));
        assert_eq!(events[0].time.as_deref(), Some("18"));
        assert_eq!(events[0].location, None);
        assert_eq!(events[1].description.as_deref(), Some("true"));
        assert_eq!(events[2], Event::default());
    }

    #[test]
    fn test_falsy_scalars_fall_back() {
        let events: Vec<Event> = serde_json::from_str(
            r#"[{"title": 0, "date": false, "start_date": 0.0, "location": -0, "time": 0, "start_time": 7}]"#,
        )
        .unwrap();
        let fields = events[0].display_fields();

        assert_eq!(fields.title, UNTITLED_EVENT);
        assert_eq!(fields.date, NOT_AVAILABLE);
        assert_eq!(fields.location, NOT_AVAILABLE);
        assert_eq!(fields.time, "7");
    }

    #[test]
    fn test_structured_field_is_rejected() {
        let result = serde_json::from_str::<Vec<Event>>(r#"[{"title": ["a", "b"]}]"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Vec<Event>>(r#"{"title": "not a list"}"#);
        assert!(result.is_err());
    }
}
