//! Bilingual UI text - Korean/English translation tables
//!
//! All chrome strings, day/night words, and the month/weekday names used by
//! the localized date formatter. Tables are static and immutable; exactly one
//! language is current at a time.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    /// The other language (two-valued toggle)
    pub fn toggled(self) -> Language {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }

    /// BCP 47 locale tag
    pub fn bcp47(self) -> &'static str {
        match self {
            Language::Ko => "ko-KR",
            Language::En => "en-US",
        }
    }
}

/// Chrome text for one language
#[derive(Debug, Clone, Copy)]
pub struct Translation {
    pub subtitle: &'static str,
    pub map_heading: &'static str,
    pub map_instruction: &'static str,
    /// Label shown on the language toggle (names the language it switches TO)
    pub toggle_text: &'static str,
    pub toggle_aria: &'static str,
    pub day_word: &'static str,
    pub night_word: &'static str,
    pub day_status: &'static str,
    pub night_status: &'static str,
}

const KO: Translation = Translation {
    subtitle: "지금의 순간을 확인하세요",
    map_heading: "주요 도시",
    map_instruction: "지도에서 도시를 선택해 타임존을 변경하세요.",
    toggle_text: "EN",
    toggle_aria: "영어로 변경",
    day_word: "낮",
    night_word: "밤",
    day_status: "낮 시간대",
    night_status: "밤 시간대",
};

const EN: Translation = Translation {
    subtitle: "Keep track of every moment",
    map_heading: "Key Cities",
    map_instruction: "Select a city to change the time zone.",
    toggle_text: "KO",
    toggle_aria: "Switch to Korean",
    day_word: "Day",
    night_word: "Night",
    day_status: "Daytime",
    night_status: "Nighttime",
};

/// Translation table for a language
pub fn translation(language: Language) -> &'static Translation {
    match language {
        Language::Ko => &KO,
        Language::En => &EN,
    }
}

/// Localized month name (month is 1-12)
pub fn month_name(language: Language, month: u32) -> &'static str {
    match language {
        Language::En => match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        },
        Language::Ko => match month {
            1 => "1월",
            2 => "2월",
            3 => "3월",
            4 => "4월",
            5 => "5월",
            6 => "6월",
            7 => "7월",
            8 => "8월",
            9 => "9월",
            10 => "10월",
            11 => "11월",
            12 => "12월",
            _ => "?월",
        },
    }
}

/// Localized weekday name
pub fn weekday_name(language: Language, weekday: Weekday) -> &'static str {
    match language {
        Language::En => match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        },
        Language::Ko => match weekday {
            Weekday::Mon => "월요일",
            Weekday::Tue => "화요일",
            Weekday::Wed => "수요일",
            Weekday::Thu => "목요일",
            Weekday::Fri => "금요일",
            Weekday::Sat => "토요일",
            Weekday::Sun => "일요일",
        },
    }
}
