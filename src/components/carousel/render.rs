use super::models::{DisplayFields, Event};
use crate::error::CarouselResult;
use askama::Template;

/// Shown when there is nothing to page through
pub const NO_EVENTS_MESSAGE: &str = "No events found.";

/// Shown when the event list could not be fetched
pub const LOAD_FAILURE_MESSAGE: &str = "Could not load events from backend.";

#[derive(Template)]
#[template(path = "event_card.html")]
struct EventCard<'a> {
    title: &'a str,
    date: &'a str,
    time: &'a str,
    location: &'a str,
    description: &'a str,
    is_link: bool,
}

#[derive(Template)]
#[template(source = "<p>{{ message }}</p>", ext = "html")]
struct Message<'a> {
    message: &'a str,
}

/// Render the card for one event
pub fn event_markup(event: &Event) -> CarouselResult<String> {
    fields_markup(&event.display_fields())
}

/// Render already resolved display fields
pub fn fields_markup(fields: &DisplayFields) -> CarouselResult<String> {
    let card = EventCard {
        title: &fields.title,
        date: &fields.date,
        time: &fields.time,
        location: &fields.location,
        description: fields.description.as_str(),
        is_link: fields.description.is_link(),
    };

    Ok(card.render()?)
}

/// Render a status message paragraph
pub fn message_markup(message: &str) -> CarouselResult<String> {
    Ok(Message { message }.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_card_layout() {
        let event = Event {
            title: Some("Hackathon".to_string()),
            date: Some("2024-05-01".to_string()),
            start_time: Some("9am".to_string()),
            end_time: Some("5pm".to_string()),
            location: Some("Room 101".to_string()),
            description: Some("Bring a laptop".to_string()),
            ..Default::default()
        };

        let markup = event_markup(&event).unwrap();

        assert!(markup.contains("<h2>Hackathon</h2>"));
        assert!(markup.contains("<p><strong>Date:</strong> 2024-05-01</p>"));
        assert!(markup.contains("<p><strong>Time:</strong> 9am - 5pm</p>"));
        assert!(markup.contains("<p><strong>Location:</strong> Room 101</p>"));
        assert!(markup.contains("<p>Bring a laptop</p>"));
        assert!(!markup.contains("<a "));
    }

    #[test]
    fn test_link_description() {
        let event = Event {
            description: Some("http://example.com/x".to_string()),
            ..Default::default()
        };

        let markup = event_markup(&event).unwrap();

        assert!(markup.contains(
            r#"<a href="http://example.com/x" target="_blank">http://example.com/x</a>"#
        ));
        assert!(markup.contains("<h2>Untitled Event</h2>"));
    }

    #[test]
    fn test_plain_description_is_verbatim() {
        let event = Event {
            description: Some("call 555-1234".to_string()),
            ..Default::default()
        };

        let markup = event_markup(&event).unwrap();

        assert!(markup.contains("<p>call 555-1234</p>"));
        assert!(!markup.contains("href"));
    }

    #[test]
    fn test_markup_is_escaped() {
        let event = Event {
            title: Some("<script>".to_string()),
            ..Default::default()
        };

        let markup = event_markup(&event).unwrap();

        assert!(!markup.contains("<script>"));
        assert!(markup.contains("<h2>&#60;script&#62;</h2>"));
    }

    #[test]
    fn test_plain_description_with_markup_characters() {
        let event = Event {
            description: Some(r#"Don't & "q""#.to_string()),
            ..Default::default()
        };

        let markup = event_markup(&event).unwrap();

        // Same visible text, entity-escaped in the markup
        assert!(markup.contains("<p>Don&#39;t &#38; &#34;q&#34;</p>"));
        assert!(!markup.contains("href"));
    }

    #[test]
    fn test_message_markup() {
        assert_eq!(
            message_markup(NO_EVENTS_MESSAGE).unwrap(),
            "<p>No events found.</p>"
        );
        assert_eq!(
            message_markup(LOAD_FAILURE_MESSAGE).unwrap(),
            "<p>Could not load events from backend.</p>"
        );
    }
}
