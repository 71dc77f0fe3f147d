//! Text helpers for the comment header line

use crate::api::Time;

const TITLE_MAX_CHARS: usize = 50;

pub fn points_label(points: i64) -> &'static str {
    match points {
        1 => "point",
        _ => "points",
    }
}

/// `1234567` -> `1,234,567`
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut res = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if points < 0 {
        res.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            res.push(',');
        }
        res.push(c);
    }
    res
}

pub fn created_time_ago(created: Time, now: Time) -> String {
    let elapsed = now.signed_duration_since(created);
    let (n, unit) = if elapsed.num_minutes() < 1 {
        return String::from("just now");
    } else if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_days() < 30 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_days() < 365 {
        (elapsed.num_days() / 30, "month")
    } else {
        (elapsed.num_days() / 365, "year")
    };
    match n {
        1 => format!("1 {unit} ago"),
        n => format!("{n} {unit}s ago"),
    }
}

pub fn truncate_item_title(title: &str) -> String {
    match title.char_indices().nth(TITLE_MAX_CHARS) {
        None => title.to_string(),
        Some((cut, _)) => format!("{}...", &title[..cut]),
    }
}
