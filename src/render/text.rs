//! Whole text frames for plain terminal output.

use chrono::{NaiveDateTime, Timelike};

use super::bigtext::big_text;
use super::grid::{CharGrid, GridFace};
use crate::clock::{ClockState, Mode};

/// Time string shown by the digital display.
///
/// Twelve-hour output uses a zero-padded hour so the banner width is stable.
pub fn time_string<T: Timelike>(time: &T, twenty_four_hour: bool) -> String {
    if twenty_four_hour {
        format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
    } else {
        let (_, hour) = time.hour12();
        format!("{:02}:{:02}:{:02}", hour, time.minute(), time.second())
    }
}

/// `AM`/`PM` marker for a time.
pub fn meridiem<T: Timelike>(time: &T) -> &'static str {
    if time.hour12().0 {
        "PM"
    } else {
        "AM"
    }
}

/// Pad `line` on the left so it sits centred in `width` columns.
pub fn center_line(line: &str, width: usize) -> String {
    let len = line.chars().count();
    let pad = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), line)
}

/// Analog face rasterized into `width × height` rows.
pub fn analog_lines(
    face: &GridFace,
    width: usize,
    height: usize,
    state: &ClockState,
) -> Vec<String> {
    let mut grid = CharGrid::new(width, height);
    face.stamp(&mut grid, state);
    grid.to_lines()
}

/// Digital display: title, date, weekday and the big-text time.
pub fn digital_lines(now: &NaiveDateTime, width: usize, twenty_four_hour: bool) -> Vec<String> {
    let rule = "=".repeat(width);
    let date = now.format("%Y-%m-%d").to_string();
    let day = now.format("%A").to_string();

    let mut lines = vec![
        rule.clone(),
        center_line("DIGITAL CLOCK", width),
        rule.clone(),
        String::new(),
        center_line(&date, width),
        center_line(&day, width),
        String::new(),
    ];
    for row in big_text(&time_string(now, twenty_four_hour)) {
        lines.push(center_line(&row, width));
    }
    if !twenty_four_hour {
        lines.push(String::new());
        lines.push(center_line(meridiem(now), width));
    }
    lines.push(String::new());
    lines.push(rule);
    lines
}

/// One complete plain frame for the current mode, with header and footer.
pub fn frame_lines(
    now: &NaiveDateTime,
    mode: Mode,
    face: &GridFace,
    width: usize,
    height: usize,
    twenty_four_hour: bool,
) -> Vec<String> {
    let other = mode.toggle().label().to_lowercase();
    let mut lines = vec![
        format!("{} CLOCK", mode.label().to_uppercase()),
        format!("Commands: 't' = switch to {other}, 'q' = quit"),
        "=".repeat(width),
    ];
    match mode {
        Mode::Analog => {
            let state = ClockState::from_time(now, mode);
            lines.extend(analog_lines(face, width, height, &state));
        }
        Mode::Digital => lines.extend(digital_lines(now, width, twenty_four_hour)),
    }
    lines.push("=".repeat(width));
    lines.push(format!("Current time: {}", now.format("%Y-%m-%d %H:%M:%S")));
    lines.push("Type 't' + Enter to toggle, 'q' + Enter to quit".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_time_string_formats() {
        let t = at(14, 5, 9);
        assert_eq!(time_string(&t, true), "14:05:09");
        assert_eq!(time_string(&t, false), "02:05:09");
        assert_eq!(meridiem(&t), "PM");
        assert_eq!(time_string(&at(0, 0, 0), false), "12:00:00");
        assert_eq!(meridiem(&at(0, 0, 0)), "AM");
    }

    #[test]
    fn test_center_line() {
        assert_eq!(center_line("ab", 6), "  ab");
        assert_eq!(center_line("toolong", 3), "toolong");
    }

    #[test]
    fn test_digital_lines_contain_date_and_banner() {
        let lines = digital_lines(&at(14, 5, 9), 60, true);
        assert!(lines.iter().any(|l| l.trim() == "2024-03-15"));
        assert!(lines.iter().any(|l| l.trim() == "Friday"));
        let banner = big_text("14:05:09");
        assert!(lines.iter().any(|l| l.contains(banner[0].as_str())));
        assert!(!lines.iter().any(|l| l.trim() == "PM"));
    }

    #[test]
    fn test_twelve_hour_adds_meridiem() {
        let lines = digital_lines(&at(14, 5, 9), 40, false);
        assert!(lines.iter().any(|l| l.trim() == "PM"));
    }

    #[test]
    fn test_frame_lines_switch_on_mode() {
        let face = GridFace::centered(60, 30, 2.0);
        let analog = frame_lines(&at(3, 0, 0), Mode::Analog, &face, 60, 30, true);
        assert_eq!(analog[0], "ANALOG CLOCK");
        assert!(analog[1].contains("switch to digital"));
        assert_eq!(analog.len(), 3 + 30 + 3);

        let digital = frame_lines(&at(3, 0, 0), Mode::Digital, &face, 60, 30, true);
        assert_eq!(digital[0], "DIGITAL CLOCK");
        assert!(digital.last().unwrap().contains("'q' + Enter"));
    }
}
