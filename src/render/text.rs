/// Pure text layout for a day's reply (rendering-agnostic)
use crate::constants::NO_EVENTS_LINE;
use crate::models::EventRecord;
use crate::utils::date::DateQuery;

/// Build the reply lines for one day: a header with the human-readable
/// date, then one "{year} {title}" line per record in upstream order,
/// or the fixed no-events line when the day is empty.
pub fn day_lines(date: &DateQuery, events: &[EventRecord]) -> Vec<String> {
    let mut lines = Vec::with_capacity(events.len() + 1);
    lines.push(format!("历史上的今天 {}", date.display()));

    if events.is_empty() {
        lines.push(NO_EVENTS_LINE.to_string());
        return lines;
    }

    for event in events {
        lines.push(format!("{} {}", event.year, event.title));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(month: u32, day: u32) -> DateQuery {
        DateQuery::new(month, day).unwrap()
    }

    #[test]
    fn test_single_record_body_is_exactly_two_lines() {
        let events = vec![EventRecord {
            year: "1990".to_string(),
            title: "Event A".to_string(),
        }];

        let lines = day_lines(&query(3, 5), &events);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("3月5日"));
        assert_eq!(lines[1], "1990 Event A");
    }

    #[test]
    fn test_order_is_preserved() {
        let events = vec![
            EventRecord {
                year: "1946".to_string(),
                title: "Event B".to_string(),
            },
            EventRecord {
                year: "1912".to_string(),
                title: "Event C".to_string(),
            },
        ];

        let lines = day_lines(&query(10, 10), &events);

        assert_eq!(lines[1], "1946 Event B");
        assert_eq!(lines[2], "1912 Event C");
    }

    #[test]
    fn test_empty_day_gets_the_no_events_line() {
        let lines = day_lines(&query(1, 1), &[]);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], NO_EVENTS_LINE);
    }
}
